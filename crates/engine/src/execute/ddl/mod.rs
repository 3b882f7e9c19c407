// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod create_table;
mod create_view;

pub use create_table::CreateTableExecutor;
pub use create_view::CreateViewExecutor;
