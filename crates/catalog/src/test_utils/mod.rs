// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::{
	interface::{NamespaceDef, TableDef, ViewDef},
	plan::QueryPlan,
};
use quarry_transaction::Transaction;
use quarry_type::{Fragment, Type};

use crate::{
	Catalog,
	namespace::NamespaceToCreate,
	table::{TableColumnToCreate, TableToCreate},
	view::ViewToCreate,
};

pub fn create_namespace(catalog: &Catalog, txn: Transaction, namespace: &str) -> (NamespaceDef, Transaction) {
	txn.apply_schema_change(|change| {
		let mut writer = catalog.writer(change);
		let result = writer.create_namespace(NamespaceToCreate {
			fragment: Fragment::None,
			name: namespace.to_string(),
		})?;
		writer.publish();
		Ok(result)
	})
	.unwrap()
}

pub fn ensure_test_namespace(catalog: &Catalog, txn: Transaction) -> (NamespaceDef, Transaction) {
	if let Some(result) = catalog.find_namespace_by_name(&txn, "test_namespace") {
		return (result, txn);
	}
	create_namespace(catalog, txn, "test_namespace")
}

pub fn create_table(
	catalog: &Catalog,
	txn: Transaction,
	namespace: &str,
	table: &str,
	columns: &[(&str, Type)],
) -> (TableDef, Transaction) {
	let namespace_def = catalog.find_namespace_by_name(&txn, namespace).expect("Namespace not found");

	txn.apply_schema_change(|change| {
		let mut writer = catalog.writer(change);
		let result = writer.create_table(TableToCreate {
			fragment: Fragment::None,
			namespace: namespace_def.id,
			name: table.to_string(),
			columns: columns
				.iter()
				.map(|(name, ty)| TableColumnToCreate {
					name: Fragment::internal(*name),
					ty: *ty,
				})
				.collect(),
		})?;
		writer.publish();
		Ok(result)
	})
	.unwrap()
}

pub fn create_view(
	catalog: &Catalog,
	txn: Transaction,
	namespace: &str,
	view: &str,
	query: QueryPlan,
) -> (ViewDef, Transaction) {
	let namespace_def = catalog.find_namespace_by_name(&txn, namespace).expect("Namespace not found");

	txn.apply_schema_change(|change| {
		let mut writer = catalog.writer(change);
		let result = writer.create_view(ViewToCreate {
			fragment: Fragment::None,
			namespace: namespace_def.id,
			name: view.to_string(),
			query,
		})?;
		writer.publish();
		Ok(result)
	})
	.unwrap()
}
