// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::{
	CommitVersion,
	interface::{NamespaceId, ObjectId, ViewDef, ViewId},
};

use crate::materialized::{MaterializedCatalog, MultiVersionViewDef};

impl MaterializedCatalog {
	/// Find a view by ID at a specific version
	pub fn find_view_at(&self, view: ViewId, version: CommitVersion) -> Option<ViewDef> {
		self.views.get(&view).and_then(|entry| entry.value().get(version))
	}

	/// Find a view by name in a namespace at a specific version
	pub fn find_view_by_name_at(&self, namespace: NamespaceId, name: &str, version: CommitVersion) -> Option<ViewDef> {
		match self.find_object_id_by_name_at(namespace, name, version)? {
			ObjectId::View(id) => self.find_view_at(id, version),
			ObjectId::Table(_) => None,
		}
	}

	/// Views visible at `version`.
	pub fn list_views_at(&self, version: CommitVersion) -> Vec<ViewDef> {
		self.views.iter().filter_map(|entry| entry.value().get(version)).collect()
	}

	pub fn set_view(&self, id: ViewId, version: CommitVersion, view: Option<ViewDef>) {
		if let Some(entry) = self.views.get(&id) {
			if let Some(pre) = entry.value().get_latest() {
				self.unindex_object(pre.namespace, &pre.name, version, ObjectId::View(id));
			}
		}

		let multi = self.views.get_or_insert_with(id, MultiVersionViewDef::new);
		match view {
			Some(new) => {
				self.index_object(new.namespace, &new.name, version, ObjectId::View(id));
				multi.value().insert(version, new);
			}
			None => multi.value().remove(version),
		}
	}
}
