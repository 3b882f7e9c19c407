// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::plan::{Projection, QueryPlan};
use quarry_type::{Fragment, Result, error::diagnostic::view::too_many_column_names, return_error};

use crate::ast::AstColumnAlias;

/// Renames `columns` position by position. A named alias replaces the
/// column name, an unnamed or empty one keeps it, and columns past the end of
/// `aliases` keep their names. `aliases` must not be longer than `columns`.
pub fn alias_columns(columns: &[&str], aliases: &[Option<&str>]) -> Vec<String> {
	columns.iter()
		.enumerate()
		.map(|(idx, column)| match aliases.get(idx) {
			Some(Some(alias)) if !alias.is_empty() => alias.to_string(),
			_ => column.to_string(),
		})
		.collect()
}

/// Applies a view's column list on top of `plan`, returning a new plan.
pub fn apply_column_aliases(plan: &QueryPlan, aliases: &[AstColumnAlias], fragment: Fragment) -> Result<QueryPlan> {
	let columns = plan.column_names();
	if aliases.len() > columns.len() {
		return_error!(too_many_column_names(fragment, aliases.len(), columns.len()));
	}

	let aliases: Vec<Option<&str>> = aliases.iter().map(|alias| alias.name.as_ref().map(|n| n.text())).collect();
	let projections = alias_columns(&columns, &aliases)
		.into_iter()
		.enumerate()
		.map(|(input, name)| Projection {
			input,
			name,
		})
		.collect();

	plan.reproject(projections)
}

#[cfg(test)]
mod tests {
	use quarry_core::{interface::TableId, plan::PlanColumn};
	use quarry_type::Type;

	use super::*;

	fn plan() -> QueryPlan {
		QueryPlan::scan(
			TableId(1),
			vec![
				PlanColumn {
					name: "a".to_string(),
					ty: Type::Int4,
				},
				PlanColumn {
					name: "b".to_string(),
					ty: Type::Utf8,
				},
			],
		)
	}

	fn alias(name: Option<&str>) -> AstColumnAlias {
		AstColumnAlias {
			name: name.map(|n| Fragment::testing(n)),
		}
	}

	#[test]
	fn test_alias_first_only() {
		assert_eq!(alias_columns(&["a", "b"], &[Some("x")]), vec!["x", "b"]);
	}

	#[test]
	fn test_unnamed_alias_keeps_name() {
		assert_eq!(alias_columns(&["a", "b"], &[None, Some("y")]), vec!["a", "y"]);
	}

	#[test]
	fn test_empty_alias_keeps_name() {
		assert_eq!(alias_columns(&["a", "b"], &[Some(""), Some("y")]), vec!["a", "y"]);
	}

	#[test]
	fn test_no_aliases() {
		assert_eq!(alias_columns(&["a", "b"], &[]), vec!["a", "b"]);
	}

	#[test]
	fn test_apply_keeps_input_plan() {
		let plan = plan();
		let before = plan.clone();
		let aliased = apply_column_aliases(&plan, &[alias(Some("x"))], Fragment::None).unwrap();

		assert_eq!(aliased.column_names(), vec!["x", "b"]);
		assert_eq!(aliased.columns()[1].ty, Type::Utf8);
		assert_eq!(plan, before);
	}

	#[test]
	fn test_as_many_aliases_as_columns() {
		let aliased = apply_column_aliases(&plan(), &[alias(Some("x")), alias(Some("y"))], Fragment::None).unwrap();
		assert_eq!(aliased.column_names(), vec!["x", "y"]);
	}

	#[test]
	fn test_too_many_aliases() {
		let err = apply_column_aliases(
			&plan(),
			&[alias(Some("x")), alias(None), alias(Some("z"))],
			Fragment::testing("v"),
		)
		.unwrap_err();

		assert_eq!(err.code, "VIEW_001");
		assert_eq!(err.message, "too many column names specified");
		assert!(err.notes.iter().any(|n| n.contains("42601")));
	}
}
