// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct adapter that suppresses repeated elements.

use std::collections::HashSet;
use std::hash::Hash;

/// Emits the first occurrence of each element, lazily.
///
/// Equality is element equality (`Eq + Hash`); later occurrences are
/// skipped wherever they appear, not only when consecutive. Relative
/// order of surviving elements is preserved.
///
/// # Examples
///
/// ```
/// use sequery_core::Distinct;
///
/// let unique: Vec<i32> = Distinct::new(vec![1, 2, 2, 3, 1, 4].into_iter()).collect();
/// assert_eq!(unique, vec![1, 2, 3, 4]);
/// ```
pub struct Distinct<I: Iterator> {
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I: Iterator> Distinct<I> {
    /// Wrap `iter`, deduplicating by element equality.
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            seen: HashSet::new(),
        }
    }
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }
}
