// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::{
	CommitVersion,
	interface::{NamespaceDef, NamespaceId},
};

use crate::materialized::{MaterializedCatalog, MultiVersionContainer, MultiVersionNamespaceDef};

impl MaterializedCatalog {
	/// Find a namespace by ID at a specific version
	pub fn find_namespace_at(&self, namespace: NamespaceId, version: CommitVersion) -> Option<NamespaceDef> {
		self.namespaces.get(&namespace).and_then(|entry| entry.value().get(version))
	}

	/// Find a namespace by name at a specific version
	pub fn find_namespace_by_name_at(&self, name: &str, version: CommitVersion) -> Option<NamespaceDef> {
		let id = self.namespaces_by_name.get(name).and_then(|entry| entry.value().get(version))?;
		self.find_namespace_at(id, version)
	}

	pub fn set_namespace(&self, id: NamespaceId, version: CommitVersion, namespace: Option<NamespaceDef>) {
		if let Some(entry) = self.namespaces.get(&id) {
			if let Some(pre) = entry.value().get_latest() {
				if let Some(index) = self.namespaces_by_name.get(&pre.name) {
					index.value().remove(version);
				}
			}
		}

		if let Some(ref new) = namespace {
			let index = self.namespaces_by_name.get_or_insert_with(new.name.clone(), MultiVersionContainer::new);
			index.value().insert(version, id);
		}

		let multi = self.namespaces.get_or_insert_with(id, MultiVersionNamespaceDef::new);
		match namespace {
			Some(new) => multi.value().insert(version, new),
			None => multi.value().remove(version),
		}
	}
}
