// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use quarry_catalog::{Catalog, namespace::NamespaceToCreate};
use quarry_transaction::{Transaction, TransactionManager};
use quarry_type::{Fragment, Result};
use tracing::{info, instrument};

use crate::{
	config::{EngineBuilder, EngineConfig},
	session::Session,
};

#[derive(Clone)]
pub struct Engine(Arc<EngineInner>);

pub struct EngineInner {
	config: EngineConfig,
	catalog: Catalog,
	transactions: TransactionManager,
}

impl Deref for Engine {
	type Target = EngineInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Engine {
	pub fn builder() -> EngineBuilder {
		EngineBuilder::new()
	}

	/// Creates the configured namespaces in a single schema change.
	#[instrument(name = "engine::boot", level = "info", skip(config))]
	pub(crate) fn boot(config: EngineConfig) -> Result<Self> {
		let catalog = Catalog::new();
		let transactions = TransactionManager::new();

		let (created, _) = transactions
			.begin()
			.apply_schema_change(|change| {
				let mut writer = catalog.writer(change);
				let mut created = Vec::new();
				for name in config.boot_namespaces() {
					if writer.find_namespace_by_name(name).is_some() {
						continue;
					}
					created.push(writer.create_namespace(NamespaceToCreate {
						fragment: Fragment::internal(name),
						name: name.to_string(),
					})?);
				}
				writer.publish();
				Ok(created)
			})
			.map_err(|failure| failure.error)?;

		info!(
			namespaces = ?created.iter().map(|n| n.name.as_str()).collect::<Vec<_>>(),
			version = %transactions.current_version(),
			"engine booted"
		);

		Ok(Self(Arc::new(EngineInner {
			config,
			catalog,
			transactions,
		})))
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn transactions(&self) -> &TransactionManager {
		&self.transactions
	}

	/// A fresh transaction on the latest committed snapshot.
	pub fn begin(&self) -> Transaction {
		self.transactions.begin()
	}

	pub fn session(&self) -> Session {
		Session::new(self.clone())
	}
}
