// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip-longest adapter that pairs two sequences to the longer length.

use std::iter::Fuse;

/// Pairs elements positionally, running until both inputs are exhausted.
///
/// Output length equals the longer input. Once a side runs out it
/// contributes `None`, the absent-value marker; a concrete fill value is
/// applied downstream with `unwrap_or`.
///
/// # Examples
///
/// ```
/// use sequery_core::ZipLongest;
///
/// let zipped: Vec<(Option<i32>, Option<char>)> =
///     ZipLongest::new(vec![1, 2, 3].into_iter(), vec!['a', 'b'].into_iter()).collect();
/// assert_eq!(
///     zipped,
///     vec![(Some(1), Some('a')), (Some(2), Some('b')), (Some(3), None)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ZipLongest<A: Iterator, B: Iterator> {
    left: Fuse<A>,
    right: Fuse<B>,
}

impl<A: Iterator, B: Iterator> ZipLongest<A, B> {
    /// Pair `left` with `right` positionally.
    pub fn new(left: A, right: B) -> Self {
        Self {
            left: left.fuse(),
            right: right.fuse(),
        }
    }
}

impl<A: Iterator, B: Iterator> Iterator for ZipLongest<A, B> {
    type Item = (Option<A::Item>, Option<B::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.left.next(), self.right.next()) {
            (None, None) => None,
            pair => Some(pair),
        }
    }
}
