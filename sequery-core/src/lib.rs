// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core building blocks for the sequery query library.
//!
//! This crate holds the pieces that do not depend on the `Query` wrapper
//! itself: the [`QueryError`] type and the iterator adapters the standard
//! library does not provide. Most users depend on the `sequery` facade
//! crate instead and never name these types directly.

pub mod batch;
pub mod distinct;
pub mod error;
pub mod interleave;
pub mod pairwise;
pub mod unique_by;
pub mod zip_longest;

pub use batch::Batch;
pub use distinct::Distinct;
pub use error::{QueryError, Result};
pub use interleave::Interleave;
pub use pairwise::Pairwise;
pub use unique_by::UniqueBy;
pub use zip_longest::ZipLongest;
