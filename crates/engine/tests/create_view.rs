// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_catalog::key::RowKey;
use quarry_core::interface::{ObjectDef, QualifiedName};
use quarry_engine::{
	Engine, ExecutionResult, IgnoredFeature, Session, StatementExecutor,
	execute::row::{encode_row, scan_table},
	test_utils::{create_test_engine, create_test_table},
};
use quarry_rql::{
	ast::{AstCreateView, AstInsert, AstSelect},
	plan::compile_select,
};
use quarry_transaction::{FailedStage, TransactionOrigin};
use quarry_type::{Type, Value};

fn session_with_table() -> Session {
	let mut session = create_test_engine().session();
	create_test_table(&mut session, "t", &[("a", Type::Int4), ("b", Type::Utf8)]);
	session
}

fn select_ab() -> AstSelect {
	AstSelect::new(QualifiedName::unqualified("t")).column("a").column("b")
}

fn find(session: &Session, name: &str) -> Option<ObjectDef> {
	let catalog = session.engine().catalog();
	let txn = session.transaction();
	let namespace = catalog.resolve_namespace(txn, &QualifiedName::unqualified(name), session.search_path()).unwrap();
	catalog.find_object_by_name(txn, namespace.id, name)
}

fn view_columns(session: &Session, name: &str) -> Vec<String> {
	match find(session, name) {
		Some(ObjectDef::View(view)) => view.columns.into_iter().map(|c| c.name).collect(),
		other => panic!("expected view {name}, found {other:?}"),
	}
}

#[test]
fn test_columns_follow_query() {
	let mut session = session_with_table();
	let expected = compile_select(
		session.engine().catalog(),
		session.transaction(),
		session.search_path(),
		&select_ab(),
	)
	.unwrap();

	let result = session.execute(AstCreateView::new(QualifiedName::unqualified("v"), select_ab())).unwrap();
	assert_eq!(result.tag(), "CREATE");
	assert_eq!(result.affected_rows(), 0);

	let Some(ObjectDef::View(view)) = find(&session, "v") else {
		panic!("view not registered");
	};
	assert_eq!(view.column_names(), vec!["a", "b"]);
	assert_eq!(view.query, expected);
}

#[test]
fn test_column_list_renames_prefix() {
	let mut session = session_with_table();
	session.execute(AstCreateView::new(QualifiedName::unqualified("v"), select_ab()).columns([Some("x")])).unwrap();
	assert_eq!(view_columns(&session, "v"), vec!["x", "b"]);
}

#[test]
fn test_column_list_with_gap() {
	let mut session = session_with_table();
	session.execute(AstCreateView::new(QualifiedName::unqualified("v"), select_ab()).columns([None, Some("y")]))
		.unwrap();
	assert_eq!(view_columns(&session, "v"), vec!["a", "y"]);
}

#[test]
fn test_too_many_column_names() {
	let mut session = session_with_table();
	let before = session.transaction().id();

	let err = session
		.execute(AstCreateView::new(QualifiedName::unqualified("v"), select_ab()).columns([
			Some("x"),
			Some("y"),
			Some("z"),
		]))
		.unwrap_err();

	assert_eq!(err.code, "VIEW_001");
	assert!(find(&session, "v").is_none());
	assert_eq!(session.transaction().id(), before);
}

#[test]
fn test_duplicate_create_fails() {
	let mut session = session_with_table();
	session.execute(AstCreateView::new(QualifiedName::unqualified("v"), select_ab())).unwrap();

	let err = session
		.execute(AstCreateView::new(
			QualifiedName::unqualified("v"),
			AstSelect::new(QualifiedName::unqualified("t")).column("b"),
		))
		.unwrap_err();

	assert_eq!(err.code, "CA_005");
	assert_eq!(view_columns(&session, "v"), vec!["a", "b"]);
}

#[test]
fn test_or_replace_swaps_definition() {
	let mut session = session_with_table();
	session.execute(AstCreateView::new(QualifiedName::unqualified("v"), select_ab())).unwrap();
	let Some(ObjectDef::View(old)) = find(&session, "v") else {
		panic!("view not registered");
	};

	let engine = session.engine().clone();
	let pre = engine.begin();

	let result = session
		.execute(
			AstCreateView::new(
				QualifiedName::unqualified("v"),
				AstSelect::new(QualifiedName::unqualified("t")).column_as("b", "only_b"),
			)
			.or_replace(),
		)
		.unwrap();
	let ExecutionResult::CreateView(created) = result else {
		panic!("expected a create view result");
	};
	assert!(created.replaced);
	assert_ne!(created.id, old.id);

	assert_eq!(view_columns(&session, "v"), vec!["only_b"]);
	assert!(engine.catalog().find_view(session.transaction(), old.id).is_none());

	let namespace = engine.catalog().find_namespace_by_name(&pre, "public").unwrap();
	let Some(ObjectDef::View(seen_before)) = engine.catalog().find_object_by_name(&pre, namespace.id, "v") else {
		panic!("pre-existing handle lost the old view");
	};
	assert_eq!(seen_before, old);
}

#[test]
fn test_or_replace_without_existing_view() {
	let mut session = session_with_table();
	let result =
		session.execute(AstCreateView::new(QualifiedName::unqualified("v"), select_ab()).or_replace()).unwrap();

	let ExecutionResult::CreateView(created) = result else {
		panic!("expected a create view result");
	};
	assert!(!created.replaced);
	assert_eq!(view_columns(&session, "v"), vec!["a", "b"]);
}

#[test]
fn test_or_replace_reports_ignored_feature() {
	let session = session_with_table();
	let executor =
		session.bind(AstCreateView::new(QualifiedName::unqualified("v"), select_ab()).or_replace()).unwrap();
	assert_eq!(executor.ignored_features(), &[IgnoredFeature::ReplaceCompatibility]);
}

#[test]
fn test_or_replace_on_table_is_rejected() {
	let mut session = session_with_table();
	let err = session
		.execute(
			AstCreateView::new(QualifiedName::unqualified("t"), AstSelect::new(QualifiedName::unqualified("t")).wildcard())
				.or_replace(),
		)
		.unwrap_err();

	assert_eq!(err.code, "CA_006");
	assert!(matches!(find(&session, "t"), Some(ObjectDef::Table(_))));
}

#[test]
fn test_registration_racing_past_bind_fails_at_execute() {
	let session = session_with_table();
	let engine = session.engine().clone();
	let first = engine.session();
	let second = engine.session();

	let first_executor = first.bind(AstCreateView::new(QualifiedName::unqualified("v"), select_ab())).unwrap();
	let second_executor = second
		.bind(AstCreateView::new(
			QualifiedName::unqualified("v"),
			AstSelect::new(QualifiedName::unqualified("t")).column("b"),
		))
		.unwrap();

	let (_, next) = first_executor.execute(engine.begin()).unwrap();

	let failure = second_executor.execute(engine.begin()).unwrap_err();
	assert_eq!(failure.error.code, "CA_005");
	assert_eq!(failure.stage, Some(FailedStage::Mutation));

	let namespace = engine.catalog().find_namespace_by_name(&next, "public").unwrap();
	let Some(ObjectDef::View(view)) = engine.catalog().find_object_by_name(&failure.resume, namespace.id, "v") else {
		panic!("first registration lost");
	};
	assert_eq!(view.column_names(), vec!["a", "b"]);
}

#[test]
fn test_execute_forks_new_transaction() {
	let session = session_with_table();
	let engine = session.engine().clone();
	let input = engine.begin();
	let input_id = input.id();
	let input_version = input.version();

	let executor = session.bind(AstCreateView::new(QualifiedName::unqualified("v"), select_ab())).unwrap();
	let (_, next) = executor.execute(input).unwrap();

	assert_ne!(next.id(), input_id);
	assert!(next.version() > input_version);
	assert!(matches!(next.origin(), TransactionOrigin::Fork { .. }));
	assert_eq!(next.pending_count(), 0);
}

#[test]
fn test_pending_rows_committed_before_registration() {
	let mut session = session_with_table();
	session.execute(AstInsert::new(QualifiedName::unqualified("t")).row([Value::Int4(1), Value::from("x")])).unwrap();

	session.execute(AstCreateView::new(QualifiedName::unqualified("v"), select_ab())).unwrap();

	let engine = session.engine().clone();
	let mut other = engine.session();
	other.set_namespace("public");
	assert_eq!(other.scan(&QualifiedName::unqualified("t")).unwrap(), vec![vec![Value::Int4(1), Value::from("x")]]);
}

#[test]
fn test_replace_failure_keeps_committed_state() {
	let mut session = session_with_table();
	session.execute(AstCreateView::new(QualifiedName::unqualified("v1"), select_ab())).unwrap();
	session.execute(AstCreateView::new(
		QualifiedName::unqualified("v2"),
		AstSelect::new(QualifiedName::unqualified("v1")).wildcard(),
	))
	.unwrap();

	let executor =
		session.bind(AstCreateView::new(QualifiedName::unqualified("v1"), select_ab()).or_replace()).unwrap();
	let StatementExecutor::CreateView(executor) = executor else {
		panic!("expected a create view executor");
	};
	assert!(executor.replaces().is_some());

	let engine = session.engine().clone();
	let mut input = engine.begin();
	let table = engine
		.catalog()
		.find_object_by_name(&input, executor.namespace().id, "t")
		.and_then(|o| o.as_table().cloned())
		.unwrap();
	input.set(
		&RowKey {
			table: table.id,
			row: engine.catalog().next_row_number(),
		}
		.encode(),
		encode_row(&[Value::Int4(8), Value::from("r")]).unwrap(),
	)
	.unwrap();

	let failure = executor.execute(input).unwrap_err();
	assert_eq!(failure.error.code, "CA_007");
	assert_eq!(failure.stage, Some(FailedStage::Mutation));
	assert!(matches!(failure.resume.origin(), TransactionOrigin::Commit { .. }));

	let rows = scan_table(&failure.resume, table.id).unwrap();
	assert!(rows.contains(&vec![Value::Int4(8), Value::from("r")]));
	assert_eq!(view_columns(&session, "v1"), vec!["a", "b"]);
}

#[test]
fn test_session_adopts_resume_on_failure() {
	let mut session = session_with_table();
	session.execute(AstCreateView::new(QualifiedName::unqualified("v1"), select_ab())).unwrap();
	session.execute(AstCreateView::new(
		QualifiedName::unqualified("v2"),
		AstSelect::new(QualifiedName::unqualified("v1")).wildcard(),
	))
	.unwrap();
	session.execute(AstInsert::new(QualifiedName::unqualified("t")).row([Value::Int4(1), Value::from("a")])).unwrap();

	let err = session.execute(AstCreateView::new(QualifiedName::unqualified("v1"), select_ab()).or_replace()).unwrap_err();
	assert_eq!(err.code, "CA_007");

	assert_eq!(session.transaction().pending_count(), 0);
	assert!(matches!(session.transaction().origin(), TransactionOrigin::Commit { .. }));
	assert_eq!(session.scan(&QualifiedName::unqualified("t")).unwrap(), vec![vec![Value::Int4(1), Value::from("a")]]);
}

#[test]
fn test_qualified_name_in_other_namespace() {
	let engine = Engine::builder().with_namespace("app").build().unwrap();
	let mut session = engine.session();
	create_test_table(&mut session, "t", &[("a", Type::Int4)]);

	session.execute(AstCreateView::new(
		QualifiedName::qualified("app", "v"),
		AstSelect::new(QualifiedName::unqualified("t")).wildcard(),
	))
	.unwrap();

	let app = engine.catalog().find_namespace_by_name(session.transaction(), "app").unwrap();
	assert!(engine.catalog().find_object_by_name(session.transaction(), app.id, "v").is_some());
	assert!(find(&session, "v").is_none());
}

#[test]
fn test_unknown_namespace() {
	let mut session = session_with_table();
	let err = session
		.execute(AstCreateView::new(QualifiedName::qualified("nope", "v"), select_ab()))
		.unwrap_err();
	assert_eq!(err.code, "CA_002");
}

#[test]
fn test_unknown_relation_and_column() {
	let mut session = session_with_table();
	let err = session
		.execute(AstCreateView::new(
			QualifiedName::unqualified("v"),
			AstSelect::new(QualifiedName::unqualified("missing")).wildcard(),
		))
		.unwrap_err();
	assert_eq!(err.code, "CA_004");

	let err = session
		.execute(AstCreateView::new(
			QualifiedName::unqualified("v"),
			AstSelect::new(QualifiedName::unqualified("t")).column("zzz"),
		))
		.unwrap_err();
	assert_eq!(err.code, "QUERY_001");
}
