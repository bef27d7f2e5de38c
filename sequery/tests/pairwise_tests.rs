// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sequery::prelude::*;
use sequery_test_utils::test_data::{person_alice, person_bob, person_charlie};

#[test]
fn test_pairwise_emits_overlapping_pairs() {
    // Arrange
    let query = vec![1, 2, 3, 4].into_query();

    // Act & Assert
    assert_eq!(query.pairwise().to_vec(), vec![(1, 2), (2, 3), (3, 4)]);
}

#[test]
fn test_pairwise_empty_input_yields_empty() {
    assert!(Vec::<i32>::new().into_query().pairwise().to_vec().is_empty());
}

#[test]
fn test_pairwise_single_element_yields_empty() {
    assert!(vec![7].into_query().pairwise().to_vec().is_empty());
}

#[test]
fn test_pairwise_two_elements_yield_one_pair() {
    assert_eq!(vec![1, 2].into_query().pairwise().to_vec(), vec![(1, 2)]);
}

#[test]
fn test_pairwise_on_struct_elements() {
    // Arrange
    let query = vec![person_alice(), person_bob(), person_charlie()].into_query();

    // Act & Assert
    assert_eq!(
        query.pairwise().to_vec(),
        vec![
            (person_alice(), person_bob()),
            (person_bob(), person_charlie()),
        ]
    );
}

#[test]
fn test_pairwise_composes_with_select() {
    // Arrange: adjacent differences
    let query = vec![1, 4, 9, 16].into_query();

    // Act
    let deltas = query.pairwise().select(|(a, b)| b - a).to_vec();

    // Assert
    assert_eq!(deltas, vec![3, 5, 7]);
}
