// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the sequery query library.
//!
//! This crate provides fixture types, pre-defined test data, and small
//! assertion helpers for exercising query operators. It is for
//! development and testing only, not for production code.
//!
//! # Key types
//!
//! - [`Person`] - name/age fixture for keyed grouping and dedup tests
//! - [`Product`] - name/price fixture for ordering tests
//!
//! # Examples
//!
//! ```rust
//! use sequery_test_utils::test_data::{person_alice, product_banana};
//!
//! assert_eq!(person_alice().name, "Alice");
//! assert_eq!(product_banana().price, 3);
//! ```

pub mod helpers;
pub mod person;
pub mod product;
pub mod test_data;

pub use helpers::{assert_yields, assert_yields_nothing};
pub use person::Person;
pub use product::Product;
