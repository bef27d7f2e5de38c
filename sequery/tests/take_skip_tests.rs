// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sequery::prelude::*;
use sequery_test_utils::assert_yields_nothing;
use sequery_test_utils::test_data::numbers;

#[test]
fn test_take_emits_leading_elements() {
    // Arrange
    let query = numbers().into_query();

    // Act & Assert
    assert_eq!(query.take(3).to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_take_zero_yields_empty() {
    assert_yields_nothing(numbers().into_query().take(0));
}

#[test]
fn test_take_beyond_length_yields_everything() {
    assert_eq!(numbers().into_query().take(50).to_vec(), numbers());
}

#[test]
fn test_skip_discards_leading_elements() {
    // Arrange
    let query = numbers().into_query();

    // Act & Assert
    assert_eq!(query.skip(2).to_vec(), vec![3, 4, 5]);
}

#[test]
fn test_skip_beyond_length_yields_empty() {
    assert_yields_nothing(numbers().into_query().skip(50));
}

#[test]
fn test_take_then_take_keeps_smaller_count() {
    // take(n).take(m) == take(min(n, m))
    assert_eq!(
        numbers().into_query().take(4).take(2).to_vec(),
        numbers().into_query().take(2).to_vec()
    );
    assert_eq!(
        numbers().into_query().take(2).take(4).to_vec(),
        numbers().into_query().take(2).to_vec()
    );
}

#[test]
fn test_skip_then_skip_adds_counts() {
    // skip(n).skip(m) == skip(n + m)
    assert_eq!(
        numbers().into_query().skip(1).skip(2).to_vec(),
        numbers().into_query().skip(3).to_vec()
    );
}

#[test]
fn test_skip_then_take_slices_the_middle() {
    assert_eq!(numbers().into_query().skip(1).take(2).to_vec(), vec![2, 3]);
}
