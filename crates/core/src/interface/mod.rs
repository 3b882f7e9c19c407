// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod catalog;
pub mod identifier;

pub use catalog::{
	column::{ColumnDef, ColumnIndex},
	id::{NamespaceId, ObjectId, TableId, ViewId},
	namespace::NamespaceDef,
	object::{ObjectDef, ObjectKind},
	table::TableDef,
	view::ViewDef,
};
pub use identifier::QualifiedName;
