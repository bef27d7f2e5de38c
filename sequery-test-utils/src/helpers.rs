// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;

/// Collects any iterable and asserts it yields exactly `expected`.
pub fn assert_yields<S, T>(source: S, expected: Vec<T>)
where
    S: IntoIterator<Item = T>,
    T: Debug + PartialEq,
{
    let actual: Vec<T> = source.into_iter().collect();
    assert_eq!(actual, expected);
}

/// Asserts an iterable is exhausted without yielding anything.
pub fn assert_yields_nothing<S, T>(source: S)
where
    S: IntoIterator<Item = T>,
    T: Debug + PartialEq,
{
    assert_yields(source, Vec::new());
}
