// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sequery::prelude::*;
use sequery_test_utils::test_data::{product_apple, product_banana, product_cherry};
use sequery_test_utils::Person;

#[test]
fn test_order_by_price_ascending() {
    // Arrange
    let query = vec![product_apple(), product_banana()].into_query();

    // Act
    let sorted = query.order_by(|p| p.price).to_vec();

    // Assert
    assert_eq!(sorted, vec![product_banana(), product_apple()]);
}

#[test]
fn test_order_by_price_descending() {
    // Arrange
    let query = vec![product_apple(), product_banana()].into_query();

    // Act
    let sorted = query.order_by_descending(|p| p.price).to_vec();

    // Assert
    assert_eq!(sorted, vec![product_apple(), product_banana()]);
}

#[test]
fn test_order_by_is_stable_for_equal_keys() {
    // Arrange: three people aged 30, interleaved with one aged 20
    let first = Person::new("First".to_string(), 30);
    let young = Person::new("Young".to_string(), 20);
    let second = Person::new("Second".to_string(), 30);
    let third = Person::new("Third".to_string(), 30);
    let query = vec![
        first.clone(),
        young.clone(),
        second.clone(),
        third.clone(),
    ]
    .into_query();

    // Act
    let sorted = query.order_by(|p| p.age).to_vec();

    // Assert: the age-30 entries keep their original relative order
    assert_eq!(sorted, vec![young, first, second, third]);
}

#[test]
fn test_order_by_descending_is_stable_for_equal_keys() {
    // Arrange
    let first = Person::new("First".to_string(), 30);
    let young = Person::new("Young".to_string(), 20);
    let second = Person::new("Second".to_string(), 30);
    let query = vec![first.clone(), young.clone(), second.clone()].into_query();

    // Act
    let sorted = query.order_by_descending(|p| p.age).to_vec();

    // Assert: ties keep input order even when the sort is reversed
    assert_eq!(sorted, vec![first, second, young]);
}

#[test]
fn test_order_by_three_products() {
    // Arrange
    let query = vec![product_apple(), product_banana(), product_cherry()].into_query();

    // Act
    let names = query.order_by(|p| p.price).select(|p| p.name).to_vec();

    // Assert
    assert_eq!(names, vec!["banana", "apple", "cherry"]);
}

#[test]
fn test_order_by_empty_input() {
    // Arrange
    let query = Vec::<Person>::new().into_query();

    // Act & Assert
    assert!(query.order_by(|p| p.age).to_vec().is_empty());
}
