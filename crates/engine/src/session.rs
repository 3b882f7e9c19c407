// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem;

use quarry_catalog::SearchPath;
use quarry_core::{CommitVersion, interface::QualifiedName};
use quarry_rql::ast::AstStatement;
use quarry_transaction::Transaction;
use quarry_type::{
	Result, Value,
	error::diagnostic::catalog::{object_not_a_table, table_not_found},
	return_error,
};
use tracing::{instrument, warn};

use crate::{
	Engine,
	execute::{BindContext, ExecutionFailure, ExecutionResult, StatementExecutor, row::scan_table},
};

/// A client session. Owns the current transaction and swaps it for the one
/// each statement hands back, so callers never hold a stale handle.
pub struct Session {
	engine: Engine,
	txn: Transaction,
	path: SearchPath,
}

impl Session {
	pub(crate) fn new(engine: Engine) -> Self {
		let txn = engine.begin();
		let path = engine.config().search_path();
		Self {
			engine,
			txn,
			path,
		}
	}

	pub fn engine(&self) -> &Engine {
		&self.engine
	}

	/// The transaction the next statement runs in.
	pub fn transaction(&self) -> &Transaction {
		&self.txn
	}

	pub fn search_path(&self) -> &SearchPath {
		&self.path
	}

	/// Namespace unqualified names resolve in from now on.
	pub fn set_namespace(&mut self, name: impl Into<String>) {
		self.path.current = name.into();
	}

	/// Validates a statement against the current transaction without
	/// running it.
	pub fn bind(&self, statement: impl Into<AstStatement>) -> Result<StatementExecutor> {
		StatementExecutor::bind(
			BindContext {
				catalog: self.engine.catalog(),
				txn: &self.txn,
				path: &self.path,
			},
			statement.into(),
		)
	}

	/// Binds and executes a statement. Whatever happens, the session ends
	/// up on the transaction the statement left behind: the forked one on
	/// success, the resume handle on failure, the unchanged one when
	/// binding fails.
	#[instrument(name = "engine::session::execute", level = "debug", skip_all)]
	pub fn execute(&mut self, statement: impl Into<AstStatement>) -> Result<ExecutionResult> {
		let executor = self.bind(statement)?;

		let txn = mem::replace(&mut self.txn, self.engine.begin());
		match executor.execute(txn) {
			Ok((result, next)) => {
				self.txn = next;
				Ok(result)
			}
			Err(ExecutionFailure {
				error,
				stage,
				resume,
			}) => {
				match stage {
					Some(stage) => warn!(code = %error.code, %stage, resume = %resume.id(), "statement failed"),
					None => warn!(code = %error.code, "statement failed"),
				}
				self.txn = resume;
				Err(error)
			}
		}
	}

	/// Commits the current transaction and starts a new one. On conflict
	/// the pending writes are lost and the session starts over on the
	/// latest snapshot.
	#[instrument(name = "engine::session::commit", level = "debug", skip_all)]
	pub fn commit(&mut self) -> Result<CommitVersion> {
		let txn = mem::replace(&mut self.txn, self.engine.begin());
		let version = txn.commit()?;
		self.txn = self.engine.begin();
		Ok(version)
	}

	pub fn rollback(&mut self) {
		let txn = mem::replace(&mut self.txn, self.engine.begin());
		txn.rollback();
	}

	/// Rows of a table as seen by the current transaction.
	pub fn scan(&self, name: &QualifiedName) -> Result<Vec<Vec<Value>>> {
		let catalog = self.engine.catalog();
		let resolved = catalog.resolve_name(&self.txn, name, &self.path)?;
		match resolved.existing {
			Some(object) => match object.as_table() {
				Some(table) => scan_table(&self.txn, table.id),
				None => return_error!(object_not_a_table(
					name.name.clone(),
					&resolved.namespace.name,
					name.text(),
					&object.kind().to_string()
				)),
			},
			None => return_error!(table_not_found(name.name.clone(), &resolved.namespace.name, name.text())),
		}
	}
}
