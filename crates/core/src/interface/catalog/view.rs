// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_type::Result;
use serde::{Deserialize, Serialize};

use crate::{
	interface::catalog::{
		column::{ColumnDef, ColumnIndex},
		id::{NamespaceId, ObjectId, ViewId},
	},
	plan::QueryPlan,
};

/// A registered view. `columns` mirrors the output columns of `query`, in
/// order, and their names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDef {
	pub id: ViewId,
	pub namespace: NamespaceId,
	pub name: String,
	pub columns: Vec<ColumnDef>,
	pub query: QueryPlan,
}

impl ViewDef {
	/// Definition of a view over `query`. Fails when the query has more
	/// output columns than a relation can hold.
	pub fn new(id: ViewId, namespace: NamespaceId, name: impl Into<String>, query: QueryPlan) -> Result<Self> {
		let mut columns = Vec::with_capacity(query.columns().len());
		for (idx, column) in query.columns().iter().enumerate() {
			columns.push(ColumnDef {
				name: column.name.clone(),
				ty: column.ty,
				index: ColumnIndex::from_position(idx)?,
			});
		}

		Ok(Self {
			id,
			namespace,
			name: name.into(),
			columns,
			query,
		})
	}

	pub fn column_names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name.as_str()).collect()
	}

	/// Relations this view reads from.
	pub fn dependencies(&self) -> Vec<ObjectId> {
		self.query.sources()
	}
}
