// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::{
	CommitVersion,
	interface::{NamespaceId, ObjectDef, ObjectId},
};

use crate::materialized::MaterializedCatalog;

impl MaterializedCatalog {
	pub fn find_object_id_by_name_at(
		&self,
		namespace: NamespaceId,
		name: &str,
		version: CommitVersion,
	) -> Option<ObjectId> {
		self.objects_by_name.get(&(namespace, name.to_string())).and_then(|entry| entry.value().get(version))
	}

	pub fn find_object_at(&self, id: ObjectId, version: CommitVersion) -> Option<ObjectDef> {
		match id {
			ObjectId::Table(table) => self.find_table_at(table, version).map(ObjectDef::Table),
			ObjectId::View(view) => self.find_view_at(view, version).map(ObjectDef::View),
		}
	}

	/// Whatever object is registered under `name`, of any kind.
	pub fn find_object_by_name_at(&self, namespace: NamespaceId, name: &str, version: CommitVersion) -> Option<ObjectDef> {
		let id = self.find_object_id_by_name_at(namespace, name, version)?;
		self.find_object_at(id, version)
	}
}
