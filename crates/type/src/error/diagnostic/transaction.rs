// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

pub fn transaction_conflict() -> Diagnostic {
	Diagnostic {
		code: "TXN_001".to_string(),
		statement: None,
		message: "transaction conflict detected".to_string(),
		fragment: Fragment::None,
		label: None,
		help: Some("another transaction committed a write to the same key, retry the transaction".to_string()),
		notes: vec![],
		cause: None,
	}
}
