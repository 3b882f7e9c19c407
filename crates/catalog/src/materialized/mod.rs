// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod namespace;
mod object;
mod table;
mod view;

use std::{ops::Deref, sync::Arc};

use crossbeam_skiplist::SkipMap;
use quarry_core::{
	CommitVersion,
	interface::{NamespaceDef, NamespaceId, ObjectId, TableDef, TableId, ViewDef, ViewId},
};

/// All values an entry had, by the version they were published at. `None`
/// marks the entry as removed from that version on.
#[derive(Debug)]
pub struct MultiVersionContainer<T: Clone + Send + 'static> {
	versions: SkipMap<CommitVersion, Option<T>>,
}

impl<T: Clone + Send + 'static> Default for MultiVersionContainer<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone + Send + 'static> MultiVersionContainer<T> {
	pub fn new() -> Self {
		Self {
			versions: SkipMap::new(),
		}
	}

	/// The value visible at `version`.
	pub fn get(&self, version: CommitVersion) -> Option<T> {
		self.versions.range(..=version).next_back().and_then(|entry| entry.value().clone())
	}

	pub fn get_latest(&self) -> Option<T> {
		self.versions.back().and_then(|entry| entry.value().clone())
	}

	pub fn insert(&self, version: CommitVersion, value: T) {
		self.versions.insert(version, Some(value));
	}

	pub fn remove(&self, version: CommitVersion) {
		self.versions.insert(version, None);
	}

	pub fn is_empty(&self) -> bool {
		self.versions.is_empty()
	}
}

pub type MultiVersionNamespaceDef = MultiVersionContainer<NamespaceDef>;
pub type MultiVersionTableDef = MultiVersionContainer<TableDef>;
pub type MultiVersionViewDef = MultiVersionContainer<ViewDef>;

/// In-memory catalog keeping every published version of every definition,
/// so a reader at any snapshot sees the schema as of that snapshot.
#[derive(Clone, Default)]
pub struct MaterializedCatalog(Arc<MaterializedCatalogInner>);

#[derive(Default)]
pub struct MaterializedCatalogInner {
	pub(crate) namespaces: SkipMap<NamespaceId, MultiVersionNamespaceDef>,
	pub(crate) namespaces_by_name: SkipMap<String, MultiVersionContainer<NamespaceId>>,

	pub(crate) tables: SkipMap<TableId, MultiVersionTableDef>,
	pub(crate) views: SkipMap<ViewId, MultiVersionViewDef>,

	/// Tables and views share one name space per namespace.
	pub(crate) objects_by_name: SkipMap<(NamespaceId, String), MultiVersionContainer<ObjectId>>,
}

impl Deref for MaterializedCatalog {
	type Target = MaterializedCatalogInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl MaterializedCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn index_object(&self, namespace: NamespaceId, name: &str, version: CommitVersion, id: ObjectId) {
		let entry = self.objects_by_name.get_or_insert_with((namespace, name.to_string()), MultiVersionContainer::new);
		entry.value().insert(version, id);
	}

	/// Drops the name entry unless it already points at another object.
	pub(crate) fn unindex_object(&self, namespace: NamespaceId, name: &str, version: CommitVersion, id: ObjectId) {
		if let Some(entry) = self.objects_by_name.get(&(namespace, name.to_string())) {
			if entry.value().get_latest() == Some(id) {
				entry.value().remove(version);
			}
		}
	}
}
