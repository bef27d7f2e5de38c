// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Interleave adapter that round-robins across multiple sources.

use std::collections::VecDeque;
use std::iter::Fuse;

/// Round-robins elements across a primary source and any number of peers.
///
/// Each round takes one element from every source in order. Sources that
/// are exhausted contribute `None`, the absent-value marker, so positions
/// stay aligned; the adapter ends after the round in which the last live
/// source runs dry, without emitting a trailing all-`None` round.
///
/// # Examples
///
/// ```
/// use sequery_core::Interleave;
///
/// let merged: Vec<Option<i32>> =
///     Interleave::new(vec![1, 2, 3].into_iter(), vec![vec![10].into_iter()]).collect();
/// assert_eq!(
///     merged,
///     vec![Some(1), Some(10), Some(2), None, Some(3), None]
/// );
/// ```
pub struct Interleave<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    first: Fuse<I>,
    rest: Vec<Fuse<J>>,
    round: VecDeque<Option<I::Item>>,
}

impl<I, J> Interleave<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    /// Round-robin `first` with the `rest` of the sources.
    pub fn new(first: I, rest: Vec<J>) -> Self {
        Self {
            first: first.fuse(),
            rest: rest.into_iter().map(Iterator::fuse).collect(),
            round: VecDeque::new(),
        }
    }
}

impl<I, J> Iterator for Interleave<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = Option<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.round.is_empty() {
            let mut any_live = false;
            let mut round = VecDeque::with_capacity(1 + self.rest.len());

            let head = self.first.next();
            any_live |= head.is_some();
            round.push_back(head);

            for source in &mut self.rest {
                let item = source.next();
                any_live |= item.is_some();
                round.push_back(item);
            }

            if !any_live {
                return None;
            }
            self.round = round;
        }
        self.round.pop_front()
    }
}
