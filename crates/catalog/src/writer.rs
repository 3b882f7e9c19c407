// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::{
	CommitVersion,
	interface::{NamespaceDef, NamespaceId, ObjectDef, ObjectId, TableDef, ViewDef, ViewId},
};
use quarry_transaction::SchemaChange;
use quarry_type::{Result, error, internal};
use tracing::{debug, instrument};

use crate::Catalog;

/// A staged catalog change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChange {
	CreateNamespace(NamespaceDef),
	CreateTable(TableDef),
	CreateView(ViewDef),
	DropView(ViewDef),
}

/// Stages catalog changes inside a schema change and publishes them
/// together at the change's version.
///
/// Checks run against the latest published catalog overlaid with the
/// changes staged so far. Nothing is visible to anyone until `publish`;
/// a writer dropped without publishing leaves the catalog untouched.
pub struct CatalogWriter<'a> {
	pub(crate) catalog: &'a Catalog,
	pub(crate) version: CommitVersion,
	changes: Vec<CatalogChange>,
}

impl Catalog {
	pub fn writer(&self, change: &SchemaChange<'_>) -> CatalogWriter<'_> {
		CatalogWriter {
			catalog: self,
			version: change.version(),
			changes: Vec::new(),
		}
	}
}

impl<'a> CatalogWriter<'a> {
	pub fn version(&self) -> CommitVersion {
		self.version
	}

	pub(crate) fn stage(&mut self, change: CatalogChange) {
		debug!(version = %self.version, change = ?change, "staged");
		self.changes.push(change);
	}

	pub fn find_namespace(&self, id: NamespaceId) -> Option<NamespaceDef> {
		for change in self.changes.iter().rev() {
			if let CatalogChange::CreateNamespace(namespace) = change {
				if namespace.id == id {
					return Some(namespace.clone());
				}
			}
		}
		self.catalog.materialized.find_namespace_at(id, self.version)
	}

	pub(crate) fn require_namespace(&self, id: NamespaceId) -> Result<NamespaceDef> {
		self.find_namespace(id).ok_or_else(|| error!(internal!("namespace {} is not registered", id)))
	}

	pub fn find_namespace_by_name(&self, name: &str) -> Option<NamespaceDef> {
		for change in self.changes.iter().rev() {
			if let CatalogChange::CreateNamespace(namespace) = change {
				if namespace.name == name {
					return Some(namespace.clone());
				}
			}
		}
		self.catalog.materialized.find_namespace_by_name_at(name, self.version)
	}

	/// The object currently registered under `name`, staged changes included.
	pub fn find_object_by_name(&self, namespace: NamespaceId, name: &str) -> Option<ObjectDef> {
		for change in self.changes.iter().rev() {
			match change {
				CatalogChange::CreateTable(table) if table.namespace == namespace && table.name == name => {
					return Some(ObjectDef::Table(table.clone()));
				}
				CatalogChange::CreateView(view) if view.namespace == namespace && view.name == name => {
					return Some(ObjectDef::View(view.clone()));
				}
				CatalogChange::DropView(view) if view.namespace == namespace && view.name == name => {
					return None;
				}
				_ => {}
			}
		}
		self.catalog.materialized.find_object_by_name_at(namespace, name, self.version)
	}

	pub fn find_view(&self, id: ViewId) -> Option<ViewDef> {
		for change in self.changes.iter().rev() {
			match change {
				CatalogChange::CreateView(view) if view.id == id => return Some(view.clone()),
				CatalogChange::DropView(view) if view.id == id => return None,
				_ => {}
			}
		}
		self.catalog.materialized.find_view_at(id, self.version)
	}

	/// Views reading from `id`, staged changes included.
	pub fn find_dependents(&self, id: ObjectId) -> Vec<ViewDef> {
		let mut views = self.catalog.materialized.list_views_at(self.version);
		for change in &self.changes {
			match change {
				CatalogChange::CreateView(view) => views.push(view.clone()),
				CatalogChange::DropView(view) => views.retain(|v| v.id != view.id),
				_ => {}
			}
		}
		views.retain(|view| view.dependencies().contains(&id));
		views
	}

	/// Makes every staged change visible at this writer's version.
	#[instrument(name = "catalog::writer::publish", level = "debug", skip(self), fields(version = %self.version, changes = self.changes.len()))]
	pub fn publish(self) -> Vec<CatalogChange> {
		let materialized = &self.catalog.materialized;
		for change in &self.changes {
			match change {
				CatalogChange::CreateNamespace(namespace) => {
					materialized.set_namespace(namespace.id, self.version, Some(namespace.clone()))
				}
				CatalogChange::CreateTable(table) => {
					materialized.set_table(table.id, self.version, Some(table.clone()))
				}
				CatalogChange::CreateView(view) => materialized.set_view(view.id, self.version, Some(view.clone())),
				CatalogChange::DropView(view) => materialized.set_view(view.id, self.version, None),
			}
		}
		self.changes
	}
}
