// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

pub fn invalid_tracing_filter(directive: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CFG_001".to_string(),
		statement: None,
		message: format!("invalid tracing filter `{}`", directive),
		fragment: Fragment::None,
		label: None,
		help: Some("use env filter syntax, e.g. `info` or `quarry_engine=debug,warn`".to_string()),
		notes: vec![reason.into()],
		cause: None,
	}
}
