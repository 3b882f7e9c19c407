// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Statement trees handed over by the parser. Executors and the SELECT
//! compiler consume these; nothing here touches the catalog.

pub use crate::ast::ast::*;

mod ast;
