// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_catalog::{
	Catalog,
	key::RowKey,
};
use quarry_core::interface::{NamespaceDef, ObjectDef, TableDef};
use quarry_rql::ast::AstInsert;
use quarry_transaction::Transaction;
use quarry_type::{
	Result, Value,
	error::diagnostic::{
		catalog::{object_not_a_table, table_not_found},
		query::{insert_arity_mismatch, insert_type_mismatch},
	},
	return_error,
};
use tracing::{debug, instrument};

use crate::execute::{BindContext, ExecuteResult, ExecutionFailure, ExecutionResult, InsertResult, row::encode_row};

/// `INSERT INTO .. VALUES ..`. Rows stay pending in the transaction until
/// it commits.
#[derive(Debug)]
pub struct InsertExecutor {
	catalog: Catalog,
	namespace: NamespaceDef,
	table: TableDef,
	rows: Vec<Vec<Value>>,
}

impl InsertExecutor {
	#[instrument(name = "engine::insert::bind", level = "debug", skip_all, fields(table = %statement.target))]
	pub fn bind(ctx: BindContext<'_>, statement: AstInsert) -> Result<Self> {
		let resolved = ctx.catalog.resolve_name(ctx.txn, &statement.target, ctx.path)?;
		let namespace = resolved.namespace;

		let table = match resolved.existing {
			Some(ObjectDef::Table(table)) => table,
			Some(other) => {
				return_error!(object_not_a_table(
					statement.target.name.clone(),
					&namespace.name,
					statement.target.text(),
					&other.kind().to_string()
				));
			}
			None => {
				return_error!(table_not_found(statement.target.name.clone(), &namespace.name, statement.target.text()));
			}
		};

		let mut rows = Vec::with_capacity(statement.rows.len());
		for row in statement.rows {
			if row.len() != table.columns.len() {
				let fragment = row.first().map(|literal| literal.fragment.clone()).unwrap_or_else(|| statement.fragment.clone());
				return_error!(insert_arity_mismatch(fragment, table.columns.len(), row.len()));
			}

			let mut values = Vec::with_capacity(row.len());
			for (literal, column) in row.into_iter().zip(&table.columns) {
				if !literal.value.is_assignable_to(column.ty) {
					return_error!(insert_type_mismatch(
						literal.fragment,
						&column.name,
						column.ty,
						literal.value.get_type()
					));
				}
				values.push(literal.value);
			}
			rows.push(values);
		}

		Ok(Self {
			catalog: ctx.catalog.clone(),
			namespace,
			table,
			rows,
		})
	}

	/// Writes the rows into `txn`. Either every row is written or none is.
	#[instrument(name = "engine::insert::execute", level = "debug", skip_all, fields(table = %self.table.name, rows = self.rows.len()))]
	pub fn execute(self, mut txn: Transaction) -> ExecuteResult {
		let mut encoded = Vec::with_capacity(self.rows.len());
		for row in &self.rows {
			match encode_row(row) {
				Ok(values) => encoded.push(values),
				Err(error) => {
					return Err(ExecutionFailure {
						error,
						stage: None,
						resume: txn,
					});
				}
			}
		}

		let inserted = encoded.len();
		for values in encoded {
			let key = RowKey {
				table: self.table.id,
				row: self.catalog.next_row_number(),
			}
			.encode();
			if let Err(error) = txn.set(&key, values) {
				return Err(ExecutionFailure {
					error,
					stage: None,
					resume: txn,
				});
			}
		}
		debug!(inserted, pending = txn.pending_count(), "rows staged");

		Ok((
			ExecutionResult::Insert(InsertResult {
				namespace: self.namespace.name,
				table: self.table.name,
				inserted,
			}),
			txn,
		))
	}

	pub fn table(&self) -> &TableDef {
		&self.table
	}
}

#[cfg(test)]
mod tests {
	use quarry_catalog::{
		SearchPath,
		test_utils::{create_table, create_view},
	};
	use quarry_core::{
		interface::QualifiedName,
		plan::{PlanColumn, QueryPlan},
	};
	use quarry_type::Type;

	use super::*;
	use crate::{Engine, execute::row::scan_table, test_utils::create_test_engine};

	fn setup() -> (Engine, Transaction) {
		let engine = create_test_engine();
		let (_, txn) =
			create_table(engine.catalog(), engine.begin(), "public", "t", &[("a", Type::Int4), ("b", Type::Utf8)]);
		(engine, txn)
	}

	fn bind(engine: &Engine, txn: &Transaction, statement: AstInsert) -> Result<InsertExecutor> {
		let path: SearchPath = engine.config().search_path();
		InsertExecutor::bind(
			BindContext {
				catalog: engine.catalog(),
				txn,
				path: &path,
			},
			statement,
		)
	}

	#[test]
	fn test_insert_keeps_transaction() {
		let (engine, txn) = setup();
		let id = txn.id();
		let statement = AstInsert::new(QualifiedName::unqualified("t"))
			.row([Value::Int4(1), Value::from("x")])
			.row([Value::Int4(2), Value::Undefined]);

		let executor = bind(&engine, &txn, statement).unwrap();
		let table = executor.table().id;
		let (result, txn) = executor.execute(txn).unwrap();

		assert_eq!(result.affected_rows(), 2);
		assert_eq!(txn.id(), id);
		assert_eq!(txn.pending_count(), 2);
		assert_eq!(
			scan_table(&txn, table).unwrap(),
			vec![vec![Value::Int4(1), Value::from("x")], vec![Value::Int4(2), Value::Undefined]]
		);
	}

	#[test]
	fn test_arity_mismatch() {
		let (engine, txn) = setup();
		let err = bind(&engine, &txn, AstInsert::new(QualifiedName::unqualified("t")).row([1])).unwrap_err();
		assert_eq!(err.code, "QUERY_002");
	}

	#[test]
	fn test_type_mismatch() {
		let (engine, txn) = setup();
		let statement = AstInsert::new(QualifiedName::unqualified("t")).row([Value::from("x"), Value::from("y")]);
		let err = bind(&engine, &txn, statement).unwrap_err();
		assert_eq!(err.code, "QUERY_003");
	}

	#[test]
	fn test_missing_table() {
		let (engine, txn) = setup();
		let err = bind(&engine, &txn, AstInsert::new(QualifiedName::unqualified("nope")).row([1])).unwrap_err();
		assert_eq!(err.code, "CA_004");
	}

	#[test]
	fn test_insert_into_view() {
		let (engine, txn) = setup();
		let table = engine.catalog().find_object_by_name(&txn, engine.catalog().find_namespace_by_name(&txn, "public").unwrap().id, "t").unwrap();
		let query = QueryPlan::scan(
			table.id(),
			vec![PlanColumn {
				name: "a".to_string(),
				ty: Type::Int4,
			}],
		);
		let (_, txn) = create_view(engine.catalog(), txn, "public", "v", query);

		let err = bind(&engine, &txn, AstInsert::new(QualifiedName::unqualified("v")).row([1])).unwrap_err();
		assert_eq!(err.code, "CA_009");
	}
}
