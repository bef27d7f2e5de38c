// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::person::Person;
use crate::product::Product;

pub fn person_alice() -> Person {
    Person::new("Alice".to_string(), 25)
}

pub fn person_bob() -> Person {
    Person::new("Bob".to_string(), 30)
}

pub fn person_charlie() -> Person {
    Person::new("Charlie".to_string(), 35)
}

pub fn person_diane() -> Person {
    Person::new("Diane".to_string(), 40)
}

pub fn product_apple() -> Product {
    Product::new("apple".to_string(), 5)
}

pub fn product_banana() -> Product {
    Product::new("banana".to_string(), 3)
}

pub fn product_cherry() -> Product {
    Product::new("cherry".to_string(), 8)
}

/// The grouping fixture from the original contract: two 'a' fruits and
/// two 'b' fruits, deliberately out of key order.
pub fn fruits() -> Vec<&'static str> {
    vec!["apple", "banana", "apricot", "blueberry"]
}

pub fn numbers() -> Vec<i32> {
    vec![1, 2, 3, 4, 5]
}
