// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversion trait for lifting any iterable into a [`Query`].

use crate::Query;

/// Extension trait that converts any iterable source into a [`Query`].
///
/// Blanket-implemented for every `IntoIterator`, so vectors, slices,
/// ranges, and other iterators all gain `.into_query()`.
///
/// # Examples
///
/// ```rust
/// use sequery::IntoQuery;
///
/// let squares = (1..=4).into_query().select(|n| n * n).to_vec();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub trait IntoQuery: IntoIterator + Sized {
    /// Wrap this source in a [`Query`].
    fn into_query(self) -> Query<Self::IntoIter> {
        Query::new(self)
    }
}

impl<S: IntoIterator> IntoQuery for S {}
