// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use quarry_core::{
	interface::{NamespaceId, ObjectDef, ObjectId, ViewDef, ViewId},
	plan::QueryPlan,
};
use quarry_type::{
	Fragment, Result,
	error::diagnostic::catalog::{
		dependent_objects_exist, duplicate_column, object_not_a_view, table_not_found, view_already_exists,
	},
	return_error,
};
use tracing::{debug, instrument};

use crate::writer::{CatalogChange, CatalogWriter};

#[derive(Debug, Clone)]
pub struct ViewToCreate {
	pub fragment: Fragment,
	pub namespace: NamespaceId,
	pub name: String,
	pub query: QueryPlan,
}

impl CatalogWriter<'_> {
	/// Registers a view. The name is checked against the latest catalog, so
	/// a competing registration that won the race is reported here even if
	/// the caller checked earlier.
	#[instrument(name = "catalog::view::create", level = "debug", skip(self, to_create), fields(name = %to_create.name))]
	pub fn create_view(&mut self, to_create: ViewToCreate) -> Result<ViewDef> {
		let namespace = self.require_namespace(to_create.namespace)?;

		match self.find_object_by_name(to_create.namespace, &to_create.name) {
			Some(ObjectDef::View(_)) => {
				return_error!(view_already_exists(to_create.fragment, &namespace.name, &to_create.name))
			}
			Some(other) => {
				return_error!(object_not_a_view(
					to_create.fragment,
					&namespace.name,
					&to_create.name,
					&other.kind().to_string()
				))
			}
			None => {}
		}

		let mut seen = HashSet::new();
		for column in to_create.query.columns() {
			if !seen.insert(column.name.as_str()) {
				return_error!(duplicate_column(to_create.fragment, &to_create.name, &column.name));
			}
		}

		for source in to_create.query.sources() {
			if !self.object_exists(source) {
				return_error!(table_not_found(to_create.fragment, &namespace.name, &source.to_string()));
			}
		}

		let view = ViewDef::new(self.catalog.next_view_id(), to_create.namespace, to_create.name, to_create.query)?;
		self.stage(CatalogChange::CreateView(view.clone()));
		Ok(view)
	}

	/// Removes a view. Fails while other views read from it. A view that is
	/// already gone is not an error; `None` is returned instead.
	#[instrument(name = "catalog::view::drop", level = "debug", skip(self, fragment))]
	pub fn drop_view(&mut self, fragment: Fragment, id: ViewId) -> Result<Option<ViewDef>> {
		let Some(view) = self.find_view(id) else {
			debug!(view = %id, "view already dropped");
			return Ok(None);
		};

		let dependents = self.find_dependents(ObjectId::View(id));
		if !dependents.is_empty() {
			let namespace = self.require_namespace(view.namespace)?;
			let mut names = Vec::with_capacity(dependents.len());
			for dependent in &dependents {
				let owner = self.require_namespace(dependent.namespace)?;
				names.push(format!("{}.{}", owner.name, dependent.name));
			}
			return_error!(dependent_objects_exist(fragment, &namespace.name, &view.name, &names));
		}

		self.stage(CatalogChange::DropView(view.clone()));
		Ok(Some(view))
	}

	fn object_exists(&self, id: ObjectId) -> bool {
		match id {
			ObjectId::Table(table) => self.catalog.materialized.find_table_at(table, self.version).is_some(),
			ObjectId::View(view) => self.find_view(view).is_some(),
		}
	}
}
