// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::interface::{NamespaceDef, ObjectDef, QualifiedName};
use quarry_transaction::Transaction;
use quarry_type::{Result, error::diagnostic::catalog::namespace_not_found, return_error};
use tracing::{instrument, trace};

use crate::Catalog;

/// Where unqualified names are looked up: the session's current namespace
/// first, then the fallback namespace when the current one does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
	pub current: String,
	pub fallback: String,
}

impl SearchPath {
	pub fn new(current: impl Into<String>, fallback: impl Into<String>) -> Self {
		Self {
			current: current.into(),
			fallback: fallback.into(),
		}
	}
}

/// A name resolved to its target namespace plus whatever object already
/// lives under it.
#[derive(Debug, Clone)]
pub struct ResolvedName {
	pub namespace: NamespaceDef,
	pub name: QualifiedName,
	pub existing: Option<ObjectDef>,
}

impl Catalog {
	/// The namespace `name` belongs to. A qualified name must name an
	/// existing namespace.
	#[instrument(name = "catalog::resolve::namespace", level = "trace", skip(self, txn, path), fields(name = %name))]
	pub fn resolve_namespace(&self, txn: &Transaction, name: &QualifiedName, path: &SearchPath) -> Result<NamespaceDef> {
		if let Some(namespace) = &name.namespace {
			return match self.find_namespace_by_name(txn, namespace.text()) {
				Some(found) => Ok(found),
				None => return_error!(namespace_not_found(namespace.clone(), namespace.text())),
			};
		}

		if let Some(current) = self.find_namespace_by_name(txn, &path.current) {
			return Ok(current);
		}

		trace!(current = %path.current, fallback = %path.fallback, "current namespace missing, using fallback");
		match self.find_namespace_by_name(txn, &path.fallback) {
			Some(fallback) => Ok(fallback),
			None => return_error!(namespace_not_found(name.name.clone(), &path.current)),
		}
	}

	/// Resolves the target namespace and looks up the object already
	/// registered under the name, if any.
	pub fn resolve_name(&self, txn: &Transaction, name: &QualifiedName, path: &SearchPath) -> Result<ResolvedName> {
		let namespace = self.resolve_namespace(txn, name, path)?;
		let existing = self.find_object_by_name(txn, namespace.id, name.text());
		Ok(ResolvedName {
			namespace,
			name: name.clone(),
			existing,
		})
	}
}
