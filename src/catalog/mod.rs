// SPDX-License-Identifier: MIT

//! Rule and achievement catalogs.

pub mod achievements;
pub mod rules;

pub use rules::{CatalogError, EventCatalog, EventEntry};
