// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::interface::QualifiedName;
use quarry_rql::ast::AstCreateTable;
use quarry_type::Type;

use crate::{Engine, Session};

/// An engine with the default `system` and `public` namespaces and no
/// tracing subscriber.
pub fn create_test_engine() -> Engine {
	Engine::builder().build().unwrap()
}

/// Creates `name` in the session's namespace and leaves the session on the
/// forked transaction.
pub fn create_test_table(session: &mut Session, name: &str, columns: &[(&str, Type)]) {
	let mut statement = AstCreateTable::new(QualifiedName::unqualified(name));
	for (column, ty) in columns {
		statement = statement.column(*column, *ty);
	}
	session.execute(statement).unwrap();
}
