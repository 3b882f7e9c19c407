// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_catalog::{Catalog, SearchPath};
use quarry_core::plan::{PlanColumn, Projection, QueryPlan};
use quarry_transaction::Transaction;
use quarry_type::{
	Result,
	error::diagnostic::{catalog::table_not_found, query::column_not_found},
	return_error,
};
use tracing::instrument;

use crate::ast::{AstProjection, AstSelect};

/// Compiles a SELECT against the schema visible to `txn`. Fails if the
/// relation or any projected column cannot be resolved.
#[instrument(name = "rql::plan::select", level = "trace", skip_all, fields(from = %select.from))]
pub fn compile_select(catalog: &Catalog, txn: &Transaction, path: &SearchPath, select: &AstSelect) -> Result<QueryPlan> {
	let namespace = catalog.resolve_namespace(txn, &select.from, path)?;
	let Some(source) = catalog.find_object_by_name(txn, namespace.id, select.from.text()) else {
		return_error!(table_not_found(select.from.name.clone(), &namespace.name, select.from.text()));
	};

	let columns: Vec<PlanColumn> = source
		.columns()
		.iter()
		.map(|column| PlanColumn {
			name: column.name.clone(),
			ty: column.ty,
		})
		.collect();
	let scan = QueryPlan::scan(source.id(), columns);

	let mut projections = Vec::new();
	for projection in &select.projections {
		match projection {
			AstProjection::Wildcard(_) => {
				for (input, column) in scan.columns().iter().enumerate() {
					projections.push(Projection {
						input,
						name: column.name.clone(),
					});
				}
			}
			AstProjection::Column {
				name,
				alias,
			} => {
				let Some(input) = scan.columns().iter().position(|c| c.name == name.text()) else {
					return_error!(column_not_found(name.clone()));
				};
				projections.push(Projection {
					input,
					name: alias.as_ref().unwrap_or(name).text().to_string(),
				});
			}
		}
	}

	scan.reproject(projections)
}
