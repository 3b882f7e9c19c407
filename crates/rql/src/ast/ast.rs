// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quarry_core::interface::QualifiedName;
use quarry_type::{Fragment, Type, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum AstStatement {
	CreateView(AstCreateView),
	CreateTable(AstCreateTable),
	Insert(AstInsert),
}

impl AstStatement {
	pub fn fragment(&self) -> &Fragment {
		match self {
			AstStatement::CreateView(create) => &create.fragment,
			AstStatement::CreateTable(create) => &create.fragment,
			AstStatement::Insert(insert) => &insert.fragment,
		}
	}
}

impl From<AstCreateView> for AstStatement {
	fn from(value: AstCreateView) -> Self {
		AstStatement::CreateView(value)
	}
}

impl From<AstCreateTable> for AstStatement {
	fn from(value: AstCreateTable) -> Self {
		AstStatement::CreateTable(value)
	}
}

impl From<AstInsert> for AstStatement {
	fn from(value: AstInsert) -> Self {
		AstStatement::Insert(value)
	}
}

/// `CREATE [OR REPLACE] VIEW name [(alias, ...)] AS select`
#[derive(Debug, Clone, PartialEq)]
pub struct AstCreateView {
	pub fragment: Fragment,
	pub or_replace: bool,
	pub name: QualifiedName,
	/// The optional column list. An entry without a name keeps the
	/// query's column name at that position.
	pub columns: Option<Vec<AstColumnAlias>>,
	pub query: AstSelect,
}

impl AstCreateView {
	pub fn new(name: QualifiedName, query: AstSelect) -> Self {
		Self {
			fragment: Fragment::internal(format!("CREATE VIEW {}", name)),
			or_replace: false,
			name,
			columns: None,
			query,
		}
	}

	pub fn or_replace(mut self) -> Self {
		self.or_replace = true;
		self
	}

	pub fn columns<I, S>(mut self, columns: I) -> Self
	where
		I: IntoIterator<Item = Option<S>>,
		S: Into<Fragment>,
	{
		self.columns = Some(
			columns.into_iter()
				.map(|name| AstColumnAlias {
					name: name.map(Into::into),
				})
				.collect(),
		);
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstColumnAlias {
	pub name: Option<Fragment>,
}

/// `SELECT projection, ... FROM relation`
#[derive(Debug, Clone, PartialEq)]
pub struct AstSelect {
	pub fragment: Fragment,
	pub projections: Vec<AstProjection>,
	pub from: QualifiedName,
}

impl AstSelect {
	pub fn new(from: QualifiedName) -> Self {
		Self {
			fragment: Fragment::internal(format!("SELECT ... FROM {}", from)),
			projections: Vec::new(),
			from,
		}
	}

	pub fn wildcard(mut self) -> Self {
		self.projections.push(AstProjection::Wildcard(Fragment::internal("*")));
		self
	}

	pub fn column(mut self, name: impl Into<Fragment>) -> Self {
		self.projections.push(AstProjection::Column {
			name: name.into(),
			alias: None,
		});
		self
	}

	pub fn column_as(mut self, name: impl Into<Fragment>, alias: impl Into<Fragment>) -> Self {
		self.projections.push(AstProjection::Column {
			name: name.into(),
			alias: Some(alias.into()),
		});
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum AstProjection {
	Wildcard(Fragment),
	Column {
		name: Fragment,
		alias: Option<Fragment>,
	},
}

/// `CREATE TABLE [IF NOT EXISTS] name (column type, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct AstCreateTable {
	pub fragment: Fragment,
	pub if_not_exists: bool,
	pub name: QualifiedName,
	pub columns: Vec<AstColumnToCreate>,
}

impl AstCreateTable {
	pub fn new(name: QualifiedName) -> Self {
		Self {
			fragment: Fragment::internal(format!("CREATE TABLE {}", name)),
			if_not_exists: false,
			name,
			columns: Vec::new(),
		}
	}

	pub fn if_not_exists(mut self) -> Self {
		self.if_not_exists = true;
		self
	}

	pub fn column(mut self, name: impl Into<Fragment>, ty: Type) -> Self {
		self.columns.push(AstColumnToCreate {
			name: name.into(),
			ty,
		});
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstColumnToCreate {
	pub name: Fragment,
	pub ty: Type,
}

/// `INSERT INTO name VALUES (...), ...`
#[derive(Debug, Clone, PartialEq)]
pub struct AstInsert {
	pub fragment: Fragment,
	pub target: QualifiedName,
	pub rows: Vec<Vec<AstLiteral>>,
}

impl AstInsert {
	pub fn new(target: QualifiedName) -> Self {
		Self {
			fragment: Fragment::internal(format!("INSERT INTO {}", target)),
			target,
			rows: Vec::new(),
		}
	}

	pub fn row<I, V>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		self.rows.push(
			values.into_iter()
				.map(|value| {
					let value = value.into();
					AstLiteral {
						fragment: Fragment::internal(value.to_string()),
						value,
					}
				})
				.collect(),
		);
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstLiteral {
	pub fragment: Fragment,
	pub value: Value,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_create_view_columns() {
		let create = AstCreateView::new(
			QualifiedName::unqualified("v"),
			AstSelect::new(QualifiedName::unqualified("t")).column("a").column("b"),
		)
		.columns([Some("x"), None]);

		let columns = create.columns.unwrap();
		assert_eq!(columns.len(), 2);
		assert_eq!(columns[0].name.as_ref().map(|f| f.text()), Some("x"));
		assert!(columns[1].name.is_none());
		assert!(!create.or_replace);
	}

	#[test]
	fn test_insert_rows() {
		let insert = AstInsert::new(QualifiedName::unqualified("t")).row([Value::Int4(1), Value::from("a")]);
		assert_eq!(insert.rows[0][1].value, Value::Utf8("a".to_string()));
		assert_eq!(insert.rows[0][1].fragment.text(), "a");
	}
}
