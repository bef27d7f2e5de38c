// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sequery_core::{Batch, Distinct, Interleave, Pairwise, QueryError, Result, UniqueBy, ZipLongest};
use std::hash::Hash;
use std::iter::{Filter, Inspect, Map, Skip, SkipWhile, Take, TakeWhile, Zip};

/// A fluent, chainable wrapper around one lazy sequence of elements.
///
/// `Query` wraps exactly one iterator. Every chainable operation consumes
/// the query and returns a brand-new `Query` over a new lazily-evaluated
/// iterator; the original is never mutated in place. Terminal operations
/// ([`to_vec`](Query::to_vec), [`first_or`](Query::first_or),
/// [`count`](Query::count), ...) consume the query and return a plain
/// value instead.
///
/// Evaluation is single-threaded and pull-based: side effects in
/// caller-supplied closures run in source order, once per element, exactly
/// when a terminal or materializing step demands that element. Only
/// [`group_by`](Query::group_by), [`order_by`](Query::order_by) and the
/// last-element terminals materialize the input; everything else streams.
///
/// # Examples
///
/// ```rust
/// use sequery::prelude::*;
///
/// let result = vec![1, 2, 3, 4, 5]
///     .into_query()
///     .filter(|n| n % 2 == 1)
///     .select(|n| n * 10)
///     .to_vec();
///
/// assert_eq!(result, vec![10, 30, 50]);
/// ```
pub struct Query<I> {
    pub(crate) inner: I,
}

impl<I: Iterator> Query<I> {
    /// Wrap any iterable source in a `Query`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sequery::Query;
    ///
    /// let query = Query::new(vec![1, 2, 3]);
    /// assert_eq!(query.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: source.into_iter(),
        }
    }

    /// Unwrap to get the inner iterator
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, T> Query<I>
where
    I: Iterator<Item = T>,
{
    /// Applies `f` to each element lazily, producing elements of a
    /// possibly different type.
    ///
    /// Order and cardinality are preserved: the output has exactly one
    /// element per input element, in the same positions.
    ///
    /// # Arguments
    ///
    /// * `f` - A total function applied to each element on demand
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let doubled = vec![1, 2, 3].into_query().select(|n| n * 2).to_vec();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn select<U, F>(self, f: F) -> Query<Map<I, F>>
    where
        F: FnMut(T) -> U,
    {
        Query {
            inner: self.inner.map(f),
        }
    }

    /// Retains the elements satisfying `predicate`, lazily.
    ///
    /// Relative order of surviving elements is preserved; the result may
    /// be empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let even = vec![1, 2, 3, 4].into_query().filter(|n| n % 2 == 0).to_vec();
    /// assert_eq!(even, vec![2, 4]);
    /// ```
    pub fn filter<P>(self, predicate: P) -> Query<Filter<I, P>>
    where
        P: FnMut(&T) -> bool,
    {
        Query {
            inner: self.inner.filter(predicate),
        }
    }

    /// Emits at most the first `count` elements; `0` yields empty.
    ///
    /// The `usize` parameter makes negative or non-numeric counts
    /// unrepresentable.
    pub fn take(self, count: usize) -> Query<Take<I>> {
        Query {
            inner: self.inner.take(count),
        }
    }

    /// Discards the first `count` elements and emits the rest; fewer than
    /// `count` present yields empty.
    pub fn skip(self, count: usize) -> Query<Skip<I>> {
        Query {
            inner: self.inner.skip(count),
        }
    }

    /// Emits elements until `predicate` first fails, then stops
    /// permanently — even if a later element would satisfy it again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let head = vec![1, 2, 5, 1, 2].into_query().take_while(|n| *n < 4).to_vec();
    /// assert_eq!(head, vec![1, 2]);
    /// ```
    pub fn take_while<P>(self, predicate: P) -> Query<TakeWhile<I, P>>
    where
        P: FnMut(&T) -> bool,
    {
        Query {
            inner: self.inner.take_while(predicate),
        }
    }

    /// Discards elements while `predicate` holds; once it fails once, all
    /// remaining elements are emitted unconditionally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let tail = vec![1, 2, 5, 1, 2].into_query().skip_while(|n| *n < 4).to_vec();
    /// assert_eq!(tail, vec![5, 1, 2]);
    /// ```
    pub fn skip_while<P>(self, predicate: P) -> Query<SkipWhile<I, P>>
    where
        P: FnMut(&T) -> bool,
    {
        Query {
            inner: self.inner.skip_while(predicate),
        }
    }

    /// Invokes a side-effect function for each element without modifying
    /// the sequence.
    ///
    /// Useful for debugging, logging, or metrics collection in the middle
    /// of a chain; the element passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// let total = vec![1, 2, 3]
    ///     .into_query()
    ///     .tap(|n| seen.push(*n))
    ///     .count();
    ///
    /// assert_eq!(total, 3);
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn tap<F>(self, f: F) -> Query<Inspect<I, F>>
    where
        F: FnMut(&T),
    {
        Query {
            inner: self.inner.inspect(f),
        }
    }

    /// Pairs elements positionally with another sequence; the result ends
    /// with the shorter input.
    ///
    /// Chain further `zip_with` calls to pair more than two sequences.
    /// For the variant that runs to the longer input, see
    /// [`zip_longest_with`](Query::zip_longest_with).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let pairs = vec![1, 2, 3].into_query().zip_with(vec!['a', 'b']).to_vec();
    /// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    /// ```
    pub fn zip_with<J>(self, other: J) -> Query<Zip<I, J::IntoIter>>
    where
        J: IntoIterator,
    {
        Query {
            inner: self.inner.zip(other),
        }
    }

    /// Pairs elements positionally with another sequence, running to the
    /// longer input.
    ///
    /// Once a side is exhausted it contributes `None`, the absent-value
    /// marker; apply a concrete fill value downstream with `unwrap_or`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let filled = vec![1, 2, 3]
    ///     .into_query()
    ///     .zip_longest_with(vec!['a', 'b'])
    ///     .select(|(n, c)| (n.unwrap(), c.unwrap_or('x')))
    ///     .to_vec();
    ///
    /// assert_eq!(filled, vec![(1, 'a'), (2, 'b'), (3, 'x')]);
    /// ```
    pub fn zip_longest_with<J>(self, other: J) -> Query<ZipLongest<I, J::IntoIter>>
    where
        J: IntoIterator,
    {
        Query {
            inner: ZipLongest::new(self.inner, other.into_iter()),
        }
    }

    /// Groups elements into fixed-size chunks in original order.
    ///
    /// The final chunk may be shorter when the element count is not
    /// evenly divisible by `size`; it is emitted, never discarded.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] immediately when `size` is
    /// 0 — at the call site, not at iteration time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let chunks = vec![1, 2, 3, 4, 5].into_query().batch(2)?.to_vec();
    /// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    ///
    /// assert!(Vec::<i32>::new().into_query().batch(0).is_err());
    /// # Ok::<(), sequery::QueryError>(())
    /// ```
    pub fn batch(self, size: usize) -> Result<Query<Batch<I>>> {
        if size == 0 {
            crate::logging::warn!("batch rejected: chunk size must be at least 1");
            return Err(QueryError::invalid_argument(
                "batch: chunk size must be at least 1",
            ));
        }
        Ok(Query {
            inner: Batch::new(self.inner, size),
        })
    }

    /// Round-robins elements across this and the other sequences in
    /// source order.
    ///
    /// Each round takes one element from every source. Exhausted sources
    /// contribute `None`, the absent-value marker, until the longest
    /// source is exhausted; no trailing all-`None` round is emitted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let merged = vec![1, 2, 3]
    ///     .into_query()
    ///     .interleave(vec![vec![10].into_query()])
    ///     .to_vec();
    ///
    /// assert_eq!(
    ///     merged,
    ///     vec![Some(1), Some(10), Some(2), None, Some(3), None]
    /// );
    /// ```
    pub fn interleave<J>(self, others: Vec<Query<J>>) -> Query<Interleave<I, J>>
    where
        J: Iterator<Item = T>,
    {
        let rest: Vec<J> = others.into_iter().map(Query::into_inner).collect();
        Query {
            inner: Interleave::new(self.inner, rest),
        }
    }

    /// Emits overlapping adjacent pairs `(e0, e1), (e1, e2), ...`.
    ///
    /// Empty or single-element input yields an empty result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let pairs = vec![1, 2, 3].into_query().pairwise().to_vec();
    /// assert_eq!(pairs, vec![(1, 2), (2, 3)]);
    /// ```
    pub fn pairwise(self) -> Query<Pairwise<I>>
    where
        T: Clone,
    {
        Query {
            inner: Pairwise::new(self.inner),
        }
    }

    /// Lazily emits the first occurrence of each element by
    /// equality/hash.
    ///
    /// Idempotent: applying `distinct` twice yields the same sequence as
    /// applying it once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let unique = vec![1, 2, 2, 3, 4, 4].into_query().distinct().to_vec();
    /// assert_eq!(unique, vec![1, 2, 3, 4]);
    /// ```
    pub fn distinct(self) -> Query<Distinct<I>>
    where
        T: Eq + Hash + Clone,
    {
        Query {
            inner: Distinct::new(self.inner),
        }
    }

    /// Emits each element once, keyed by the first occurrence of
    /// `key_fn(element)`, preserving first-seen order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let firsts = vec!["apple", "avocado", "banana"]
    ///     .into_query()
    ///     .unique_by(|w| w.chars().next())
    ///     .to_vec();
    ///
    /// assert_eq!(firsts, vec!["apple", "banana"]);
    /// ```
    pub fn unique_by<K, F>(self, key_fn: F) -> Query<UniqueBy<I, K, F>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        Query {
            inner: UniqueBy::new(self.inner, key_fn),
        }
    }

    /// Groups the elements by `key_fn`, returning `(key, members)` pairs
    /// ordered by key ascending.
    ///
    /// This operation materializes the full input at the call site and
    /// stably sorts it by key for grouping; members of each group keep
    /// their original relative order. Key comparability is the `Ord`
    /// bound, so an uncomparable key type is a compile error rather than
    /// a runtime failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let groups = vec!["apple", "banana", "apricot", "blueberry"]
    ///     .into_query()
    ///     .group_by(|w| w.chars().next())
    ///     .to_vec();
    ///
    /// assert_eq!(
    ///     groups,
    ///     vec![
    ///         (Some('a'), vec!["apple", "apricot"]),
    ///         (Some('b'), vec!["banana", "blueberry"]),
    ///     ]
    /// );
    /// ```
    pub fn group_by<K, F>(self, mut key_fn: F) -> Query<std::vec::IntoIter<(K, Vec<T>)>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut decorated: Vec<(K, T)> =
            self.inner.map(|item| (key_fn(&item), item)).collect();
        decorated.sort_by(|a, b| a.0.cmp(&b.0));

        let mut groups: Vec<(K, Vec<T>)> = Vec::new();
        for (key, item) in decorated {
            match groups.last_mut() {
                Some((last_key, members)) if *last_key == key => members.push(item),
                _ => groups.push((key, vec![item])),
            }
        }
        Query::new(groups)
    }

    /// Materializes and stably sorts the elements by `key_fn`, ascending.
    ///
    /// Ties preserve original relative input order (stable sort
    /// contract). The key selector is invoked once per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// let sorted = vec![("apple", 5), ("banana", 3)]
    ///     .into_query()
    ///     .order_by(|item| item.1)
    ///     .to_vec();
    ///
    /// assert_eq!(sorted, vec![("banana", 3), ("apple", 5)]);
    /// ```
    pub fn order_by<K, F>(self, key_fn: F) -> Query<std::vec::IntoIter<T>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_decorated(key_fn, false)
    }

    /// Materializes and stably sorts the elements by `key_fn`, descending.
    ///
    /// Stability is preserved by reversing the key comparison rather than
    /// reversing the sorted output, so equal keys still keep original
    /// relative order.
    pub fn order_by_descending<K, F>(self, key_fn: F) -> Query<std::vec::IntoIter<T>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_decorated(key_fn, true)
    }

    fn sort_decorated<K, F>(self, mut key_fn: F, descending: bool) -> Query<std::vec::IntoIter<T>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut decorated: Vec<(K, T)> =
            self.inner.map(|item| (key_fn(&item), item)).collect();
        if descending {
            decorated.sort_by(|a, b| b.0.cmp(&a.0));
        } else {
            decorated.sort_by(|a, b| a.0.cmp(&b.0));
        }
        let sorted: Vec<T> = decorated.into_iter().map(|(_, item)| item).collect();
        Query::new(sorted)
    }

    /// Terminal: eagerly consumes the query into a `Vec`.
    pub fn to_vec(self) -> Vec<T> {
        self.inner.collect()
    }

    /// Terminal: the first element, or `None` on empty input.
    pub fn first(self) -> Option<T> {
        let mut inner = self.inner;
        inner.next()
    }

    /// Terminal: the first element, or `default` on empty input.
    ///
    /// Never fails on empty input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// assert_eq!(Vec::<i32>::new().into_query().first_or(42), 42);
    /// assert_eq!(vec![1, 2, 3].into_query().first_or(42), 1);
    /// ```
    pub fn first_or(self, default: T) -> T {
        self.first().unwrap_or(default)
    }

    /// Terminal: walks the whole sequence and returns the final element,
    /// or `None` on empty input.
    pub fn last(self) -> Option<T> {
        self.inner.last()
    }

    /// Terminal: the final element, or `default` on empty input.
    pub fn last_or(self, default: T) -> T {
        self.last().unwrap_or(default)
    }

    /// Terminal: true when any element satisfies `predicate`.
    ///
    /// Short-circuits on the first match; false when the sequence is
    /// exhausted without one.
    pub fn any_where<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut inner = self.inner;
        inner.any(|item| predicate(&item))
    }

    /// Terminal: the default-predicate form of [`any_where`](Query::any_where):
    /// true exactly when the sequence is non-empty.
    pub fn any(self) -> bool {
        self.any_where(|_| true)
    }

    /// Terminal: true when every element satisfies `predicate`.
    ///
    /// Short-circuits on the first mismatch; vacuously true on empty
    /// input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequery::prelude::*;
    ///
    /// assert!(vec![1, 2, 3].into_query().all_where(|n| *n > 0));
    /// assert!(!vec![1, 2, 3].into_query().all_where(|n| *n > 1));
    /// assert!(Vec::<i32>::new().into_query().all_where(|n| *n > 1));
    /// ```
    pub fn all_where<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut inner = self.inner;
        inner.all(|item| predicate(&item))
    }

    /// Terminal: the default-predicate form of [`all_where`](Query::all_where).
    ///
    /// Consumes the sequence and returns true, including the vacuous
    /// truth on empty input.
    pub fn all(self) -> bool {
        self.all_where(|_| true)
    }

    /// Terminal: consumes the entire sequence and returns the element
    /// count.
    pub fn count(self) -> usize {
        self.inner.count()
    }
}

impl<I: Iterator> IntoIterator for Query<I> {
    type Item = I::Item;
    type IntoIter = I;

    /// Single forward pass over the wrapped iterator. Re-iterating an
    /// already-consumed one-shot source yields no further elements;
    /// consumption is source-dependent, not wrapper-enforced.
    fn into_iter(self) -> I {
        self.inner
    }
}
