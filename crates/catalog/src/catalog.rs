// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug, Formatter},
	ops::Deref,
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
};

use quarry_core::interface::{NamespaceDef, NamespaceId, ObjectDef, TableDef, TableId, ViewDef, ViewId};
use quarry_transaction::Transaction;
use tracing::instrument;

use crate::{key::RowNumber, materialized::MaterializedCatalog};

/// Schema registry shared by every session of an engine. Reads go through
/// a transaction and see the schema as of its snapshot; changes go through
/// a [`CatalogWriter`](crate::writer::CatalogWriter).
#[derive(Clone, Default)]
pub struct Catalog(Arc<CatalogInner>);

#[derive(Default)]
pub struct CatalogInner {
	pub(crate) materialized: MaterializedCatalog,
	namespace_sequence: AtomicU64,
	table_sequence: AtomicU64,
	view_sequence: AtomicU64,
	row_sequence: AtomicU64,
}

impl Deref for Catalog {
	type Target = CatalogInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Debug for Catalog {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Catalog").finish_non_exhaustive()
	}
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn materialized(&self) -> &MaterializedCatalog {
		&self.materialized
	}

	pub(crate) fn next_namespace_id(&self) -> NamespaceId {
		NamespaceId(self.namespace_sequence.fetch_add(1, Ordering::Relaxed) + 1)
	}

	pub(crate) fn next_table_id(&self) -> TableId {
		TableId(self.table_sequence.fetch_add(1, Ordering::Relaxed) + 1)
	}

	pub(crate) fn next_view_id(&self) -> ViewId {
		ViewId(self.view_sequence.fetch_add(1, Ordering::Relaxed) + 1)
	}

	pub fn next_row_number(&self) -> RowNumber {
		RowNumber(self.row_sequence.fetch_add(1, Ordering::Relaxed) + 1)
	}

	#[instrument(name = "catalog::namespace::find_by_name", level = "trace", skip(self, txn))]
	pub fn find_namespace_by_name(&self, txn: &Transaction, name: &str) -> Option<NamespaceDef> {
		self.materialized.find_namespace_by_name_at(name, txn.version())
	}

	#[instrument(name = "catalog::table::find", level = "trace", skip(self, txn))]
	pub fn find_table(&self, txn: &Transaction, id: TableId) -> Option<TableDef> {
		self.materialized.find_table_at(id, txn.version())
	}

	#[instrument(name = "catalog::view::find", level = "trace", skip(self, txn))]
	pub fn find_view(&self, txn: &Transaction, id: ViewId) -> Option<ViewDef> {
		self.materialized.find_view_at(id, txn.version())
	}

	/// Looks up `name` in `namespace`, returning an object of any kind.
	/// Absence is not an error.
	#[instrument(name = "catalog::object::find_by_name", level = "trace", skip(self, txn))]
	pub fn find_object_by_name(&self, txn: &Transaction, namespace: NamespaceId, name: &str) -> Option<ObjectDef> {
		self.materialized.find_object_by_name_at(namespace, name, txn.version())
	}
}
