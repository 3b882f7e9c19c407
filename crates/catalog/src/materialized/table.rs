// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::{
	CommitVersion,
	interface::{NamespaceId, ObjectId, TableDef, TableId},
};

use crate::materialized::{MaterializedCatalog, MultiVersionTableDef};

impl MaterializedCatalog {
	/// Find a table by ID at a specific version
	pub fn find_table_at(&self, table: TableId, version: CommitVersion) -> Option<TableDef> {
		self.tables.get(&table).and_then(|entry| entry.value().get(version))
	}

	/// Find a table by name in a namespace at a specific version
	pub fn find_table_by_name_at(&self, namespace: NamespaceId, name: &str, version: CommitVersion) -> Option<TableDef> {
		match self.find_object_id_by_name_at(namespace, name, version)? {
			ObjectId::Table(id) => self.find_table_at(id, version),
			ObjectId::View(_) => None,
		}
	}

	pub fn set_table(&self, id: TableId, version: CommitVersion, table: Option<TableDef>) {
		if let Some(entry) = self.tables.get(&id) {
			if let Some(pre) = entry.value().get_latest() {
				self.unindex_object(pre.namespace, &pre.name, version, ObjectId::Table(id));
			}
		}

		let multi = self.tables.get_or_insert_with(id, MultiVersionTableDef::new);
		match table {
			Some(new) => {
				self.index_object(new.namespace, &new.name, version, ObjectId::Table(id));
				multi.value().insert(version, new);
			}
			None => multi.value().remove(version),
		}
	}
}

#[cfg(test)]
mod tests {
	use quarry_core::interface::{ColumnDef, ColumnIndex};
	use quarry_type::Type;

	use super::*;

	fn create_test_table(id: TableId, namespace: NamespaceId, name: &str) -> TableDef {
		TableDef {
			id,
			namespace,
			name: name.to_string(),
			columns: vec![ColumnDef {
				name: "id".to_string(),
				ty: Type::Int4,
				index: ColumnIndex(0),
			}],
		}
	}

	#[test]
	fn test_set_and_find_table() {
		let catalog = MaterializedCatalog::new();
		let table = create_test_table(TableId(1), NamespaceId(1), "users");
		catalog.set_table(TableId(1), CommitVersion(2), Some(table.clone()));

		assert_eq!(catalog.find_table_at(TableId(1), CommitVersion(2)), Some(table.clone()));
		assert_eq!(catalog.find_table_at(TableId(1), CommitVersion(1)), None);
		assert_eq!(catalog.find_table_by_name_at(NamespaceId(1), "users", CommitVersion(9)), Some(table));
		assert_eq!(catalog.find_table_by_name_at(NamespaceId(2), "users", CommitVersion(9)), None);
	}

	#[test]
	fn test_table_deletion_keeps_history() {
		let catalog = MaterializedCatalog::new();
		let table = create_test_table(TableId(1), NamespaceId(1), "users");
		catalog.set_table(TableId(1), CommitVersion(1), Some(table.clone()));
		catalog.set_table(TableId(1), CommitVersion(3), None);

		assert_eq!(catalog.find_table_by_name_at(NamespaceId(1), "users", CommitVersion(2)), Some(table));
		assert_eq!(catalog.find_table_by_name_at(NamespaceId(1), "users", CommitVersion(3)), None);
	}
}
