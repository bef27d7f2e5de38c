// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Product {
    pub name: String,
    pub price: u32,
}

impl Product {
    #[must_use]
    pub const fn new(name: String, price: u32) -> Self {
        Self { name, price }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product[name={}, price={}]", self.name, self.price)
    }
}
