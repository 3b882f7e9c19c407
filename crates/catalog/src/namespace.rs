// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::interface::NamespaceDef;
use quarry_type::{Fragment, Result, error::diagnostic::catalog::namespace_already_exists, return_error};
use tracing::instrument;

use crate::writer::{CatalogChange, CatalogWriter};

#[derive(Debug, Clone)]
pub struct NamespaceToCreate {
	pub fragment: Fragment,
	pub name: String,
}

impl CatalogWriter<'_> {
	#[instrument(name = "catalog::namespace::create", level = "debug", skip(self, to_create), fields(name = %to_create.name))]
	pub fn create_namespace(&mut self, to_create: NamespaceToCreate) -> Result<NamespaceDef> {
		if self.find_namespace_by_name(&to_create.name).is_some() {
			return_error!(namespace_already_exists(to_create.fragment, &to_create.name));
		}

		let namespace = NamespaceDef {
			id: self.catalog.next_namespace_id(),
			name: to_create.name,
		};
		self.stage(CatalogChange::CreateNamespace(namespace.clone()));
		Ok(namespace)
	}
}

#[cfg(test)]
mod tests {
	use quarry_transaction::TransactionManager;

	use super::*;
	use crate::{Catalog, test_utils::ensure_test_namespace};

	fn to_create(name: &str) -> NamespaceToCreate {
		NamespaceToCreate {
			fragment: Fragment::testing(name),
			name: name.to_string(),
		}
	}

	#[test]
	fn test_create_namespace() {
		let catalog = Catalog::new();
		let manager = TransactionManager::new();

		let (namespace, txn) = manager
			.begin()
			.apply_schema_change(|change| {
				let mut writer = catalog.writer(change);
				let namespace = writer.create_namespace(to_create("app"))?;
				writer.publish();
				Ok(namespace)
			})
			.unwrap();

		assert_eq!(namespace.name, "app");
		assert_eq!(catalog.find_namespace_by_name(&txn, "app"), Some(namespace));
	}

	#[test]
	fn test_create_namespace_twice() {
		let catalog = Catalog::new();
		let manager = TransactionManager::new();

		let failure = manager
			.begin()
			.apply_schema_change(|change| {
				let mut writer = catalog.writer(change);
				writer.create_namespace(to_create("app"))?;
				writer.create_namespace(to_create("app"))?;
				writer.publish();
				Ok(())
			})
			.unwrap_err();

		assert_eq!(failure.error.code, "CA_001");
		assert!(catalog.find_namespace_by_name(&failure.resume, "app").is_none());
	}

	#[test]
	fn test_ensure_test_namespace_is_idempotent() {
		let catalog = Catalog::new();
		let manager = TransactionManager::new();

		let (first, txn) = ensure_test_namespace(&catalog, manager.begin());
		let version = txn.version();
		let (second, txn) = ensure_test_namespace(&catalog, txn);

		assert_eq!(first, second);
		assert_eq!(txn.version(), version);
		assert_eq!(catalog.find_namespace_by_name(&txn, "test_namespace"), Some(first));
	}
}
