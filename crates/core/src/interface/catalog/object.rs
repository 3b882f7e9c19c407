// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use crate::interface::catalog::{
	column::ColumnDef,
	id::{NamespaceId, ObjectId},
	table::TableDef,
	view::ViewDef,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKind {
	Table,
	View,
}

impl Display for ObjectKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ObjectKind::Table => f.write_str("table"),
			ObjectKind::View => f.write_str("view"),
		}
	}
}

/// Any object found under a name in a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectDef {
	Table(TableDef),
	View(ViewDef),
}

impl ObjectDef {
	pub fn id(&self) -> ObjectId {
		match self {
			ObjectDef::Table(table) => ObjectId::Table(table.id),
			ObjectDef::View(view) => ObjectId::View(view.id),
		}
	}

	pub fn kind(&self) -> ObjectKind {
		match self {
			ObjectDef::Table(_) => ObjectKind::Table,
			ObjectDef::View(_) => ObjectKind::View,
		}
	}

	pub fn name(&self) -> &str {
		match self {
			ObjectDef::Table(table) => &table.name,
			ObjectDef::View(view) => &view.name,
		}
	}

	pub fn namespace(&self) -> NamespaceId {
		match self {
			ObjectDef::Table(table) => table.namespace,
			ObjectDef::View(view) => view.namespace,
		}
	}

	pub fn columns(&self) -> &[ColumnDef] {
		match self {
			ObjectDef::Table(table) => &table.columns,
			ObjectDef::View(view) => &view.columns,
		}
	}

	pub fn as_view(&self) -> Option<&ViewDef> {
		match self {
			ObjectDef::View(view) => Some(view),
			ObjectDef::Table(_) => None,
		}
	}

	pub fn as_table(&self) -> Option<&TableDef> {
		match self {
			ObjectDef::Table(table) => Some(table),
			ObjectDef::View(_) => None,
		}
	}
}

impl From<TableDef> for ObjectDef {
	fn from(table: TableDef) -> Self {
		ObjectDef::Table(table)
	}
}

impl From<ViewDef> for ObjectDef {
	fn from(view: ViewDef) -> Self {
		ObjectDef::View(view)
	}
}
