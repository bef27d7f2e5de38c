// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pairwise adapter that emits overlapping adjacent pairs.

/// Pairs each element with its successor: `(e0, e1), (e1, e2), ...`.
///
/// Every element except the first appears twice, once as the right half
/// of a pair and once (cloned) as the left half of the next. Empty and
/// single-element inputs yield no pairs.
///
/// # Examples
///
/// ```
/// use sequery_core::Pairwise;
///
/// let pairs: Vec<(i32, i32)> = Pairwise::new(vec![1, 2, 3].into_iter()).collect();
/// assert_eq!(pairs, vec![(1, 2), (2, 3)]);
///
/// let empty: Vec<(i32, i32)> = Pairwise::new(vec![7].into_iter()).collect();
/// assert!(empty.is_empty());
/// ```
pub struct Pairwise<I: Iterator> {
    iter: I,
    previous: Option<I::Item>,
}

impl<I: Iterator> Pairwise<I> {
    /// Wrap `iter`, emitting overlapping adjacent pairs.
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            previous: None,
        }
    }
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let previous = match self.previous.take() {
            Some(p) => p,
            None => self.iter.next()?,
        };
        let current = self.iter.next()?;
        self.previous = Some(current.clone());
        Some((previous, current))
    }
}
