// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sequery::prelude::*;

#[test]
fn test_preview_renders_all_elements_when_short() {
    // Arrange
    let query = vec![1, 2, 3].into_query();

    // Act & Assert
    assert_eq!(format!("{query:?}"), "Query([1, 2, 3])");
}

#[test]
fn test_preview_of_empty_query() {
    let query = Vec::<i32>::new().into_query();
    assert_eq!(format!("{query:?}"), "Query([])");
}

#[test]
fn test_preview_no_ellipsis_at_exactly_the_limit() {
    // Arrange: exactly PREVIEW_LIMIT elements
    let query = (0..10).into_query();

    // Act & Assert: nothing remains beyond the preview, so no ellipsis
    assert_eq!(
        format!("{query:?}"),
        "Query([0, 1, 2, 3, 4, 5, 6, 7, 8, 9])"
    );
}

#[test]
fn test_preview_truncates_with_ellipsis() {
    // Arrange: one element past the limit
    let query = (0..11).into_query();

    // Act & Assert
    assert_eq!(
        format!("{query:?}"),
        "Query([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, ...])"
    );
}

#[test]
fn test_preview_does_not_consume_the_query() {
    // Arrange
    let query = vec![1, 2, 3].into_query();

    // Act: render twice, then consume
    let first = format!("{query:?}");
    let second = format!("{query:?}");

    // Assert
    assert_eq!(first, second);
    assert_eq!(query.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_preview_renders_element_debug_forms() {
    let query = vec!["a", "b"].into_query();
    assert_eq!(format!("{query:?}"), "Query([\"a\", \"b\"])");
}
