// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Unique-by adapter that deduplicates by a caller-supplied key.

use std::collections::HashSet;
use std::hash::Hash;

/// Emits each element once, keyed by the first occurrence of
/// `key_fn(element)`, preserving first-seen order.
///
/// The element that survives for a given key is the one seen first;
/// later elements mapping to the same key are skipped even when they
/// differ from the survivor.
///
/// # Examples
///
/// ```
/// use sequery_core::UniqueBy;
///
/// let words = vec!["apple", "avocado", "banana", "blueberry"];
/// let by_initial: Vec<&str> =
///     UniqueBy::new(words.into_iter(), |w: &&str| w.chars().next()).collect();
/// assert_eq!(by_initial, vec!["apple", "banana"]);
/// ```
pub struct UniqueBy<I, K, F> {
    iter: I,
    key_fn: F,
    seen: HashSet<K>,
}

impl<I, K, F> UniqueBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    /// Wrap `iter`, deduplicating by `key_fn`.
    pub fn new(iter: I, key_fn: F) -> Self {
        Self {
            iter,
            key_fn,
            seen: HashSet::new(),
        }
    }
}

impl<I, K, F> Iterator for UniqueBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert((self.key_fn)(&item)) {
                return Some(item);
            }
        }
    }
}
