// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Diagnostic preview rendering for [`Query`].

use crate::Query;
use std::fmt;

/// Maximum number of leading elements rendered by the `Debug` preview.
pub const PREVIEW_LIMIT: usize = 10;

/// Renders up to [`PREVIEW_LIMIT`] leading elements as
/// `Query([a, b, c])`, appending `...` only when more elements actually
/// remain beyond the preview.
///
/// The `I: Clone` bound means rendering walks a clone of the wrapped
/// iterator and never consumes the query itself.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let short = vec![1, 2, 3].into_query();
/// assert_eq!(format!("{short:?}"), "Query([1, 2, 3])");
///
/// let long = (0..100).into_query();
/// assert_eq!(
///     format!("{long:?}"),
///     "Query([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, ...])"
/// );
/// ```
impl<I, T> fmt::Debug for Query<I>
where
    I: Iterator<Item = T> + Clone,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.inner.clone();
        write!(f, "Query([")?;
        for (index, item) in iter.by_ref().take(PREVIEW_LIMIT).enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item:?}")?;
        }
        if iter.next().is_some() {
            write!(f, ", ...")?;
        }
        write!(f, "])")
    }
}
