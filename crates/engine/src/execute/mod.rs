// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Two-phase statement execution. `bind` validates a parsed statement
//! against the schema visible to a transaction without changing anything;
//! `execute` applies it and hands back the transaction the caller must use
//! from then on.

use std::fmt::{self, Display, Formatter};

use quarry_catalog::{Catalog, SearchPath};
use quarry_core::interface::{TableId, ViewId};
use quarry_rql::ast::AstStatement;
use quarry_transaction::{FailedStage, SchemaChangeFailure, Transaction};
use quarry_type::{Error, Result};
use serde::{Deserialize, Serialize};

pub use ddl::{CreateTableExecutor, CreateViewExecutor};
pub use mutate::InsertExecutor;

mod ddl;
mod mutate;
pub mod row;

/// Everything binding reads from.
#[derive(Clone, Copy)]
pub struct BindContext<'a> {
	pub catalog: &'a Catalog,
	pub txn: &'a Transaction,
	pub path: &'a SearchPath,
}

/// Statement options that are accepted but deliberately not enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoredFeature {
	/// `OR REPLACE` does not check that the new view keeps the old one's
	/// columns.
	ReplaceCompatibility,
}

impl Display for IgnoredFeature {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			IgnoredFeature::ReplaceCompatibility => f.write_str("replace compatibility check"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateViewResult {
	pub id: ViewId,
	pub namespace: String,
	pub view: String,
	pub replaced: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTableResult {
	pub id: TableId,
	pub namespace: String,
	pub table: String,
	pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertResult {
	pub namespace: String,
	pub table: String,
	pub inserted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionResult {
	CreateView(CreateViewResult),
	CreateTable(CreateTableResult),
	Insert(InsertResult),
}

impl ExecutionResult {
	/// The command tag reported to clients.
	pub fn tag(&self) -> &'static str {
		match self {
			ExecutionResult::CreateView(_) | ExecutionResult::CreateTable(_) => "CREATE",
			ExecutionResult::Insert(_) => "INSERT",
		}
	}

	/// Rows written by the statement. DDL produces none.
	pub fn affected_rows(&self) -> usize {
		match self {
			ExecutionResult::CreateView(_) | ExecutionResult::CreateTable(_) => 0,
			ExecutionResult::Insert(result) => result.inserted,
		}
	}
}

impl Display for ExecutionResult {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ExecutionResult::CreateView(result) => {
				write!(f, "CREATE VIEW {}.{}", result.namespace, result.view)
			}
			ExecutionResult::CreateTable(result) => {
				write!(f, "CREATE TABLE {}.{}", result.namespace, result.table)
			}
			ExecutionResult::Insert(result) => write!(f, "INSERT {}", result.inserted),
		}
	}
}

/// A statement that failed while executing, with the transaction to
/// continue from.
///
/// `stage` is `None` when nothing was committed. `Some(Mutation)` means
/// earlier pending writes were committed even though the statement failed.
#[derive(Debug)]
pub struct ExecutionFailure {
	pub error: Error,
	pub stage: Option<FailedStage>,
	pub resume: Transaction,
}

impl From<SchemaChangeFailure> for ExecutionFailure {
	fn from(failure: SchemaChangeFailure) -> Self {
		Self {
			error: failure.error,
			stage: Some(failure.stage),
			resume: failure.resume,
		}
	}
}

impl Display for ExecutionFailure {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.stage {
			Some(stage) => write!(f, "statement failed during {}: {}", stage, self.error),
			None => write!(f, "statement failed: {}", self.error),
		}
	}
}

impl std::error::Error for ExecutionFailure {}

pub type ExecuteResult = std::result::Result<(ExecutionResult, Transaction), ExecutionFailure>;

/// A bound statement, ready to execute.
#[derive(Debug)]
pub enum StatementExecutor {
	CreateView(CreateViewExecutor),
	CreateTable(CreateTableExecutor),
	Insert(InsertExecutor),
}

impl StatementExecutor {
	pub fn bind(ctx: BindContext<'_>, statement: AstStatement) -> Result<Self> {
		Ok(match statement {
			AstStatement::CreateView(create) => StatementExecutor::CreateView(CreateViewExecutor::bind(ctx, create)?),
			AstStatement::CreateTable(create) => {
				StatementExecutor::CreateTable(CreateTableExecutor::bind(ctx, create)?)
			}
			AstStatement::Insert(insert) => StatementExecutor::Insert(InsertExecutor::bind(ctx, insert)?),
		})
	}

	pub fn execute(self, txn: Transaction) -> ExecuteResult {
		match self {
			StatementExecutor::CreateView(executor) => executor.execute(txn),
			StatementExecutor::CreateTable(executor) => executor.execute(txn),
			StatementExecutor::Insert(executor) => executor.execute(txn),
		}
	}

	pub fn ignored_features(&self) -> &[IgnoredFeature] {
		match self {
			StatementExecutor::CreateView(executor) => executor.ignored_features(),
			StatementExecutor::CreateTable(_) | StatementExecutor::Insert(_) => &[],
		}
	}
}
