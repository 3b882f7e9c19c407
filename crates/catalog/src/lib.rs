// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod catalog;
pub mod key;
pub mod materialized;
pub mod namespace;
pub mod resolve;
pub mod table;
pub mod test_utils;
pub mod view;
pub mod writer;

pub use catalog::Catalog;
pub use quarry_type::{Error, Result};
pub use resolve::{ResolvedName, SearchPath};
pub use writer::{CatalogChange, CatalogWriter};
