// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod alias;
mod select;

pub use alias::{alias_columns, apply_column_aliases};
pub use select::compile_select;
