// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

pub fn namespace_already_exists(fragment: Fragment, namespace: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_001".to_string(),
		statement: None,
		message: format!("namespace `{}` already exists", namespace),
		fragment,
		label: Some("duplicate namespace definition".to_string()),
		help: Some("choose a different name or drop the existing namespace first".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn namespace_not_found(fragment: Fragment, namespace: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_002".to_string(),
		statement: None,
		message: format!("namespace `{}` not found", namespace),
		fragment,
		label: Some("unknown namespace reference".to_string()),
		help: Some("make sure the namespace exists before using it or create it first".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn table_already_exists(fragment: Fragment, namespace: &str, table: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_003".to_string(),
		statement: None,
		message: format!("table `{}.{}` already exists", namespace, table),
		fragment,
		label: Some("duplicate table definition".to_string()),
		help: Some("choose a different name, drop the existing table or create table in a different namespace"
			.to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn table_not_found(fragment: Fragment, namespace: &str, table: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_004".to_string(),
		statement: None,
		message: format!("relation `{}.{}` not found", namespace, table),
		fragment,
		label: Some("unknown relation reference".to_string()),
		help: Some("make sure the table or view exists before referencing it".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn view_already_exists(fragment: Fragment, namespace: &str, view: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_005".to_string(),
		statement: None,
		message: format!("view `{}.{}` already exists", namespace, view),
		fragment,
		label: Some("duplicate view definition".to_string()),
		help: Some("use CREATE OR REPLACE VIEW to redefine it, or choose a different name".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn object_not_a_view(fragment: Fragment, namespace: &str, name: &str, kind: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_006".to_string(),
		statement: None,
		message: format!("`{}.{}` is not a view", namespace, name),
		fragment,
		label: Some(format!("an existing {} already uses this name", kind)),
		help: Some("choose a different name for the view".to_string()),
		notes: vec!["OR REPLACE only replaces an existing view, never a different kind of object".to_string()],
		cause: None,
	}
}

pub fn dependent_objects_exist(fragment: Fragment, namespace: &str, name: &str, dependents: &[String]) -> Diagnostic {
	Diagnostic {
		code: "CA_007".to_string(),
		statement: None,
		message: format!("cannot drop `{}.{}` because other objects depend on it", namespace, name),
		fragment,
		label: Some("object is still referenced".to_string()),
		help: Some("drop the dependent objects first".to_string()),
		notes: dependents.iter().map(|d| format!("`{}` depends on `{}.{}`", d, namespace, name)).collect(),
		cause: None,
	}
}

pub fn object_not_a_table(fragment: Fragment, namespace: &str, name: &str, kind: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_009".to_string(),
		statement: None,
		message: format!("`{}.{}` is not a table", namespace, name),
		fragment,
		label: Some(format!("`{}` is a {}", name, kind)),
		help: Some("rows can only be inserted into tables".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn duplicate_column(fragment: Fragment, relation: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_008".to_string(),
		statement: None,
		message: format!("column `{}` specified more than once in `{}`", column, relation),
		fragment,
		label: Some("duplicate column name".to_string()),
		help: Some("give every output column a distinct name, e.g. with an alias or a column list".to_string()),
		notes: vec![],
		cause: None,
	}
}
