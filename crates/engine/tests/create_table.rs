// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::interface::QualifiedName;
use quarry_engine::{ExecutionResult, test_utils::create_test_engine};
use quarry_rql::ast::{AstCreateTable, AstCreateView, AstInsert, AstSelect};
use quarry_transaction::TransactionOrigin;
use quarry_type::{Type, Value};

fn users() -> AstCreateTable {
	AstCreateTable::new(QualifiedName::unqualified("users")).column("id", Type::Int8).column("name", Type::Utf8)
}

#[test]
fn test_create_forks() {
	let engine = create_test_engine();
	let mut session = engine.session();
	let before = session.transaction().id();

	let result = session.execute(users()).unwrap();
	assert_eq!(result.to_string(), "CREATE TABLE public.users");
	assert_ne!(session.transaction().id(), before);
	assert!(matches!(session.transaction().origin(), TransactionOrigin::Fork { .. }));
}

#[test]
fn test_if_not_exists_still_commits() {
	let engine = create_test_engine();
	let mut session = engine.session();
	session.execute(users()).unwrap();
	session.execute(AstInsert::new(QualifiedName::unqualified("users")).row([Value::Int8(1), Value::from("a")])).unwrap();

	let result = session.execute(users().if_not_exists()).unwrap();
	let ExecutionResult::CreateTable(created) = result else {
		panic!("expected a create table result");
	};
	assert!(!created.created);
	assert_eq!(session.transaction().pending_count(), 0);
	assert_eq!(engine.session().scan(&QualifiedName::unqualified("users")).unwrap().len(), 1);
}

#[test]
fn test_name_taken_by_view() {
	let engine = create_test_engine();
	let mut session = engine.session();
	session.execute(users()).unwrap();
	session.execute(AstCreateView::new(
		QualifiedName::unqualified("v"),
		AstSelect::new(QualifiedName::unqualified("users")).wildcard(),
	))
	.unwrap();

	let err = session
		.execute(AstCreateTable::new(QualifiedName::unqualified("v")).column("id", Type::Int8))
		.unwrap_err();
	assert_eq!(err.code, "CA_005");
}

#[test]
fn test_fallback_namespace() {
	let engine = create_test_engine();
	let mut session = engine.session();
	session.set_namespace("missing");

	let result = session.execute(users()).unwrap();
	let ExecutionResult::CreateTable(created) = result else {
		panic!("expected a create table result");
	};
	assert_eq!(created.namespace, "system");
}
