// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Creates an internal error diagnostic with source location and context
pub fn internal_with_context(
	reason: impl Into<String>,
	file: &str,
	line: u32,
	column: u32,
	module_path: &str,
) -> Diagnostic {
	let reason = reason.into();

	let location = format!("{}:{}:{}", file, line, column);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		statement: None,
		message: format!("Internal error: {}", reason),
		fragment: Fragment::None,
		label: Some(format!("Internal invariant violated at {}", location)),
		help: Some(format!(
			"This is an internal error that should never occur in normal operation.\n\
			 Location: {}\nModule: {}\nVersion: {}",
			location,
			module_path,
			env!("CARGO_PKG_VERSION")
		)),
		notes: vec!["This error indicates a critical internal inconsistency.".to_string()],
		cause: None,
	}
}

/// Simplified internal error without detailed context
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	internal_with_context(reason, "unknown", 0, 0, "unknown")
}
