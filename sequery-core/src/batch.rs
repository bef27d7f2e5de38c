// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Batch adapter that groups elements into fixed-size chunks.

/// Groups consecutive elements into chunks of at most `size` elements.
///
/// Chunks preserve source order. The final chunk may be shorter than
/// `size` when the total element count is not evenly divisible; a partial
/// final chunk is emitted, never discarded.
///
/// # Panics
///
/// `new` panics if `size` is 0. The query layer validates the size and
/// returns an invalid-argument error before constructing this adapter.
///
/// # Examples
///
/// ```
/// use sequery_core::Batch;
///
/// let chunks: Vec<Vec<i32>> = Batch::new(vec![1, 2, 3, 4, 5].into_iter(), 2).collect();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
#[derive(Debug, Clone)]
pub struct Batch<I: Iterator> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Batch<I> {
    /// Wrap `iter`, chunking into groups of `size` elements.
    pub fn new(iter: I, size: usize) -> Self {
        assert!(size >= 1, "batch: chunk size must be at least 1");
        Self { iter, size }
    }
}

impl<I: Iterator> Iterator for Batch<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::with_capacity(self.size);
        for item in self.iter.by_ref().take(self.size) {
            chunk.push(item);
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}
