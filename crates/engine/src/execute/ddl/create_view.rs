// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use quarry_catalog::{Catalog, view::ViewToCreate};
use quarry_core::{
	interface::{NamespaceDef, ObjectDef, QualifiedName, ViewDef},
	plan::QueryPlan,
};
use quarry_rql::{
	ast::AstCreateView,
	plan::{apply_column_aliases, compile_select},
};
use quarry_transaction::Transaction;
use quarry_type::{
	Result,
	error::diagnostic::catalog::{duplicate_column, object_not_a_view, view_already_exists},
	return_error,
};
use tracing::{debug, instrument};

use crate::execute::{BindContext, CreateViewResult, ExecuteResult, ExecutionResult, IgnoredFeature};

/// `CREATE [OR REPLACE] VIEW`.
#[derive(Debug)]
pub struct CreateViewExecutor {
	catalog: Catalog,
	namespace: NamespaceDef,
	name: QualifiedName,
	existing: Option<ViewDef>,
	replace: bool,
	to_register: ViewToCreate,
	ignored: Vec<IgnoredFeature>,
}

impl CreateViewExecutor {
	/// Resolves the target, checks for collisions and builds the view's
	/// query. Nothing is registered; a failure leaves the schema as it was.
	#[instrument(name = "engine::create_view::bind", level = "debug", skip_all, fields(view = %statement.name))]
	pub fn bind(ctx: BindContext<'_>, statement: AstCreateView) -> Result<Self> {
		let resolved = ctx.catalog.resolve_name(ctx.txn, &statement.name, ctx.path)?;
		let namespace = resolved.namespace;

		let existing = match resolved.existing {
			None => None,
			Some(ObjectDef::View(view)) => Some(view),
			Some(other) => {
				return_error!(object_not_a_view(
					statement.name.name.clone(),
					&namespace.name,
					statement.name.text(),
					&other.kind().to_string()
				));
			}
		};

		if existing.is_some() && !statement.or_replace {
			return_error!(view_already_exists(statement.name.name.clone(), &namespace.name, statement.name.text()));
		}
		let replace = statement.or_replace && existing.is_some();

		let mut ignored = Vec::new();
		if statement.or_replace {
			debug!(feature = %IgnoredFeature::ReplaceCompatibility, "not enforced");
			ignored.push(IgnoredFeature::ReplaceCompatibility);
		}

		let mut query = compile_select(ctx.catalog, ctx.txn, ctx.path, &statement.query)?;
		if let Some(columns) = statement.columns.as_ref().filter(|columns| !columns.is_empty()) {
			query = apply_column_aliases(&query, columns, statement.fragment.clone())?;
		}

		let mut seen = HashSet::new();
		for column in query.columns() {
			if !seen.insert(column.name.as_str()) {
				return_error!(duplicate_column(statement.fragment.clone(), statement.name.text(), &column.name));
			}
		}

		let to_register = ViewToCreate {
			fragment: statement.name.name.clone(),
			namespace: namespace.id,
			name: statement.name.text().to_string(),
			query,
		};

		Ok(Self {
			catalog: ctx.catalog.clone(),
			namespace,
			name: statement.name,
			existing,
			replace,
			to_register,
			ignored,
		})
	}

	/// Commits pending writes, drops the replaced view if any, registers
	/// the new view and forks. Returns the forked transaction.
	///
	/// Pending writes stay committed even if dropping or registering
	/// fails; the failure then carries the committed transaction.
	#[instrument(name = "engine::create_view::execute", level = "debug", skip_all, fields(view = %self.name))]
	pub fn execute(self, txn: Transaction) -> ExecuteResult {
		let Self {
			catalog,
			namespace,
			existing,
			replace,
			to_register,
			..
		} = self;

		debug!(txn = %txn.id(), "committing");
		let (view, next) = txn.apply_schema_change(|change| {
			let mut writer = catalog.writer(change);

			if let Some(existing) = existing.as_ref().filter(|_| replace) {
				debug!(view = %existing.id, "replacing");
				writer.drop_view(to_register.fragment.clone(), existing.id)?;
			}

			debug!("registering");
			let view = writer.create_view(to_register)?;
			writer.publish();
			Ok(view)
		})?;
		debug!(next = %next.id(), version = %next.version(), "forked");

		Ok((
			ExecutionResult::CreateView(CreateViewResult {
				id: view.id,
				namespace: namespace.name,
				view: view.name,
				replaced: replace,
			}),
			next,
		))
	}

	pub fn namespace(&self) -> &NamespaceDef {
		&self.namespace
	}

	/// The view this statement replaces, if any.
	pub fn replaces(&self) -> Option<&ViewDef> {
		self.existing.as_ref().filter(|_| self.replace)
	}

	pub fn query(&self) -> &QueryPlan {
		&self.to_register.query
	}

	pub fn ignored_features(&self) -> &[IgnoredFeature] {
		&self.ignored
	}
}
