// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use quarry_catalog::{
	Catalog,
	table::{TableColumnToCreate, TableToCreate},
};
use quarry_core::interface::{NamespaceDef, ObjectDef, QualifiedName, TableDef};
use quarry_rql::ast::AstCreateTable;
use quarry_transaction::Transaction;
use quarry_type::{
	Result,
	error::diagnostic::catalog::{duplicate_column, table_already_exists, view_already_exists},
	return_error,
};
use tracing::{debug, instrument};

use crate::execute::{BindContext, CreateTableResult, ExecuteResult, ExecutionResult};

/// `CREATE TABLE [IF NOT EXISTS]`.
#[derive(Debug)]
pub struct CreateTableExecutor {
	catalog: Catalog,
	namespace: NamespaceDef,
	name: QualifiedName,
	if_not_exists: bool,
	to_create: TableToCreate,
}

impl CreateTableExecutor {
	#[instrument(name = "engine::create_table::bind", level = "debug", skip_all, fields(table = %statement.name))]
	pub fn bind(ctx: BindContext<'_>, statement: AstCreateTable) -> Result<Self> {
		let resolved = ctx.catalog.resolve_name(ctx.txn, &statement.name, ctx.path)?;
		let namespace = resolved.namespace;

		match resolved.existing {
			Some(ObjectDef::Table(_)) if statement.if_not_exists => {
				debug!("table exists, nothing to create");
			}
			Some(ObjectDef::Table(table)) => {
				return_error!(table_already_exists(statement.name.name.clone(), &namespace.name, &table.name));
			}
			Some(ObjectDef::View(view)) => {
				return_error!(view_already_exists(statement.name.name.clone(), &namespace.name, &view.name));
			}
			None => {}
		}

		let mut seen = HashSet::new();
		for column in &statement.columns {
			if !seen.insert(column.name.text()) {
				return_error!(duplicate_column(column.name.clone(), statement.name.text(), column.name.text()));
			}
		}

		let to_create = TableToCreate {
			fragment: statement.name.name.clone(),
			namespace: namespace.id,
			name: statement.name.text().to_string(),
			columns: statement
				.columns
				.into_iter()
				.map(|column| TableColumnToCreate {
					name: column.name,
					ty: column.ty,
				})
				.collect(),
		};

		Ok(Self {
			catalog: ctx.catalog.clone(),
			namespace,
			name: statement.name,
			if_not_exists: statement.if_not_exists,
			to_create,
		})
	}

	/// Same commit, register, fork sequence as `CREATE VIEW`. With
	/// `IF NOT EXISTS` and the table already present nothing is registered,
	/// but pending writes are still committed and the transaction forked.
	#[instrument(name = "engine::create_table::execute", level = "debug", skip_all, fields(table = %self.name))]
	pub fn execute(self, txn: Transaction) -> ExecuteResult {
		let Self {
			catalog,
			namespace,
			if_not_exists,
			to_create,
			..
		} = self;

		let ((table, created), next) = txn.apply_schema_change(|change| {
			let mut writer = catalog.writer(change);

			if if_not_exists {
				if let Some(ObjectDef::Table(existing)) =
					writer.find_object_by_name(to_create.namespace, &to_create.name)
				{
					return Ok((existing, false));
				}
			}

			let table: TableDef = writer.create_table(to_create)?;
			writer.publish();
			Ok((table, true))
		})?;
		debug!(next = %next.id(), created, "forked");

		Ok((
			ExecutionResult::CreateTable(CreateTableResult {
				id: table.id,
				namespace: namespace.name,
				table: table.name,
				created,
			}),
			next,
		))
	}

	pub fn namespace(&self) -> &NamespaceDef {
		&self.namespace
	}
}
