// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment, value::Type};

pub fn column_not_found(fragment: Fragment) -> Diagnostic {
	Diagnostic {
		code: "QUERY_001".to_string(),
		statement: None,
		message: format!("column `{}` not found", fragment.text()),
		fragment,
		label: Some("this column does not exist in the current context".to_string()),
		help: Some("check for typos or ensure the column is defined in the input".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn insert_arity_mismatch(fragment: Fragment, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "QUERY_002".to_string(),
		statement: None,
		message: format!("INSERT has {} values but the target has {} columns", actual, expected),
		fragment,
		label: Some("row does not match the column count".to_string()),
		help: Some(format!("provide exactly {} values per row", expected)),
		notes: vec![],
		cause: None,
	}
}

pub fn insert_type_mismatch(fragment: Fragment, column: &str, expected: Type, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "QUERY_003".to_string(),
		statement: None,
		message: format!("column `{}` is of type {} but the value is of type {}", column, expected, actual),
		fragment,
		label: Some("value type mismatch".to_string()),
		help: Some(format!("provide a {} value or undefined", expected)),
		notes: vec![],
		cause: None,
	}
}
