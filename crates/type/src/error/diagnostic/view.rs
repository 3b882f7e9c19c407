// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

pub fn too_many_column_names(fragment: Fragment, names: usize, columns: usize) -> Diagnostic {
	Diagnostic {
		code: "VIEW_001".to_string(),
		statement: None,
		message: "too many column names specified".to_string(),
		fragment,
		label: Some(format!("{} column names given, but the query produces {} columns", names, columns)),
		help: Some("remove the extra names from the column list".to_string()),
		notes: vec![
			"CREATE VIEW specifies more column names than columns".to_string(),
			"SQLSTATE 42601".to_string(),
		],
		cause: None,
	}
}
