// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use quarry_core::interface::{ColumnDef, ColumnIndex, NamespaceId, ObjectDef, TableDef};
use quarry_type::{
	Fragment, Result, Type,
	error::diagnostic::catalog::{duplicate_column, table_already_exists, view_already_exists},
	return_error,
};
use tracing::instrument;

use crate::writer::{CatalogChange, CatalogWriter};

#[derive(Debug, Clone)]
pub struct TableColumnToCreate {
	pub name: Fragment,
	pub ty: Type,
}

#[derive(Debug, Clone)]
pub struct TableToCreate {
	pub fragment: Fragment,
	pub namespace: NamespaceId,
	pub name: String,
	pub columns: Vec<TableColumnToCreate>,
}

impl CatalogWriter<'_> {
	#[instrument(name = "catalog::table::create", level = "debug", skip(self, to_create), fields(name = %to_create.name))]
	pub fn create_table(&mut self, to_create: TableToCreate) -> Result<TableDef> {
		let namespace = self.require_namespace(to_create.namespace)?;

		match self.find_object_by_name(to_create.namespace, &to_create.name) {
			Some(ObjectDef::Table(_)) => {
				return_error!(table_already_exists(to_create.fragment, &namespace.name, &to_create.name))
			}
			Some(ObjectDef::View(_)) => {
				return_error!(view_already_exists(to_create.fragment, &namespace.name, &to_create.name))
			}
			None => {}
		}

		let mut seen = HashSet::new();
		let mut columns = Vec::with_capacity(to_create.columns.len());
		for (idx, column) in to_create.columns.into_iter().enumerate() {
			if !seen.insert(column.name.text().to_string()) {
				return_error!(duplicate_column(column.name.clone(), &to_create.name, column.name.text()));
			}
			columns.push(ColumnDef {
				name: column.name.text().to_string(),
				ty: column.ty,
				index: ColumnIndex::from_position(idx)?,
			});
		}

		let table = TableDef {
			id: self.catalog.next_table_id(),
			namespace: to_create.namespace,
			name: to_create.name,
			columns,
		};
		self.stage(CatalogChange::CreateTable(table.clone()));
		Ok(table)
	}
}
