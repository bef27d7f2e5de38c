// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the types needed for everyday use.
//!
//! Import this module for convenient access to the query surface:
//!
//! ```rust
//! use sequery::prelude::*;
//!
//! let loud = vec!["a", "b", "b", "c"]
//!     .into_query()
//!     .distinct()
//!     .select(str::to_uppercase)
//!     .to_vec();
//!
//! assert_eq!(loud, vec!["A", "B", "C"]);
//! ```
//!
//! # Contents
//!
//! - [`Query`] - The chainable sequence wrapper
//! - [`IntoQuery`] - `.into_query()` on any iterable
//! - [`QueryError`] / [`Result`] - Argument-validation failures

pub use crate::into_query::IntoQuery;
pub use crate::query::Query;
pub use sequery_core::{QueryError, Result};
