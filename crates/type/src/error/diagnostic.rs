// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;

pub mod catalog;
pub mod config;
pub mod internal;
pub mod query;
pub mod render;
pub mod transaction;
pub mod view;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub statement: Option<String>,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Attach the full statement text so renderers can show the offending
	/// line.
	pub fn with_statement(&mut self, statement: impl Into<String>) {
		let statement = statement.into();
		if let Some(cause) = &mut self.cause {
			cause.with_statement(statement.clone());
		}
		self.statement = Some(statement);
	}
}
