// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use quarry_type::{Result, Type, return_internal_error};
use serde::{Deserialize, Serialize};

use crate::interface::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanColumn {
	pub name: String,
	pub ty: Type,
}

/// Selects the input column at `input` and exposes it as `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Projection {
	pub input: usize,
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryNode {
	Scan {
		source: ObjectId,
		columns: Vec<PlanColumn>,
	},
	Project {
		input: Arc<QueryNode>,
		projections: Vec<Projection>,
	},
}

/// A compiled query: ordered, named output columns plus the node tree that
/// evaluates them. Plans are immutable; `reproject` builds a new plan on
/// top of the existing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryPlan {
	columns: Vec<PlanColumn>,
	root: Arc<QueryNode>,
}

impl QueryPlan {
	pub fn scan(source: impl Into<ObjectId>, columns: Vec<PlanColumn>) -> Self {
		Self {
			columns: columns.clone(),
			root: Arc::new(QueryNode::Scan {
				source: source.into(),
				columns,
			}),
		}
	}

	pub fn columns(&self) -> &[PlanColumn] {
		&self.columns
	}

	pub fn column_names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name.as_str()).collect()
	}

	pub fn root(&self) -> &QueryNode {
		&self.root
	}

	/// Builds a plan whose output columns are `projections` applied to the
	/// output of `self`. `self` is left untouched.
	pub fn reproject(&self, projections: Vec<Projection>) -> Result<QueryPlan> {
		let mut columns = Vec::with_capacity(projections.len());
		for projection in &projections {
			let Some(input) = self.columns.get(projection.input) else {
				return_internal_error!(
					"projection refers to column {} but the input has {} columns",
					projection.input,
					self.columns.len()
				);
			};
			columns.push(PlanColumn {
				name: projection.name.clone(),
				ty: input.ty,
			});
		}

		Ok(QueryPlan {
			columns,
			root: Arc::new(QueryNode::Project {
				input: self.root.clone(),
				projections,
			}),
		})
	}

	/// Every relation scanned by this plan, in first-seen order.
	pub fn sources(&self) -> Vec<ObjectId> {
		let mut result = Vec::new();
		let mut node = self.root.as_ref();
		loop {
			match node {
				QueryNode::Scan {
					source,
					..
				} => {
					if !result.contains(source) {
						result.push(*source);
					}
					return result;
				}
				QueryNode::Project {
					input,
					..
				} => node = input.as_ref(),
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::interface::TableId;

	fn table_plan() -> QueryPlan {
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

	#[test]
	fn test_reproject_renames_and_keeps_types() {
		let plan = table_plan();
		let projected = plan
			.reproject(vec![
				Projection {
					input: 1,
					name: "y".to_string(),
				},
				Projection {
					input: 0,
					name: "x".to_string(),
				},
			])
			.unwrap();

		assert_eq!(projected.column_names(), vec!["y", "x"]);
		assert_eq!(projected.columns()[0].ty, Type::Utf8);
		assert_eq!(projected.columns()[1].ty, Type::Int4);
	}

	#[test]
	fn test_reproject_leaves_input_untouched() {
		let plan = table_plan();
		let before = plan.clone();
		let _ = plan
			.reproject(vec![Projection {
				input: 0,
				name: "x".to_string(),
			}])
			.unwrap();
		assert_eq!(plan, before);
	}

	#[test]
	fn test_reproject_out_of_range() {
		let err = table_plan()
			.reproject(vec![Projection {
				input: 2,
				name: "z".to_string(),
			}])
			.unwrap_err();
		assert_eq!(err.code, "INTERNAL_ERROR");
	}

	#[test]
	fn test_sources_through_projections() {
		let plan = table_plan()
			.reproject(vec![Projection {
				input: 0,
				name: "a".to_string(),
			}])
			.unwrap();
		assert_eq!(plan.sources(), vec![ObjectId::Table(TableId(1))]);
	}
}
