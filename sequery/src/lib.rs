// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Sequery
//!
//! A fluent, chainable query layer over iterators, modeled after
//! language-integrated query idioms.
//!
//! ## Overview
//!
//! Sequery wraps one lazy sequence in a [`Query`] and exposes a chain of
//! transformation methods, each returning a new `Query` over a new
//! lazily-evaluated iterator. Terminal methods (`to_vec`, `first_or`,
//! `any`, `count`, ...) consume the query and return plain values.
//!
//! Evaluation is entirely single-threaded, synchronous and pull-based:
//! there is no scheduler, no shared state, and no locking anywhere in the
//! library.
//!
//! ## Quick start
//!
//! ```rust
//! use sequery::prelude::*;
//!
//! let cheapest = vec![("apple", 5), ("banana", 3), ("cherry", 8)]
//!     .into_query()
//!     .order_by(|item| item.1)
//!     .select(|item| item.0)
//!     .first_or("nothing");
//!
//! assert_eq!(cheapest, "banana");
//! ```
//!
//! ## Laziness
//!
//! Downstream operations pull elements on demand; side effects in
//! caller-supplied closures execute in source order, once per element,
//! exactly when a terminal or materializing step demands that element.
//! Only sorting, grouping, and last-element access materialize the input.

pub mod into_query;
pub mod logging;
pub mod prelude;
pub mod preview;
pub mod query;

pub use into_query::IntoQuery;
pub use preview::PREVIEW_LIMIT;
pub use query::Query;
pub use sequery_core::{QueryError, Result};
