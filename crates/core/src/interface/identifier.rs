// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use quarry_type::Fragment;

/// An object name as written in a statement, optionally qualified with a
/// namespace (`ns.name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
	pub namespace: Option<Fragment>,
	pub name: Fragment,
}

impl QualifiedName {
	pub fn unqualified(name: impl Into<Fragment>) -> Self {
		Self {
			namespace: None,
			name: name.into(),
		}
	}

	pub fn qualified(namespace: impl Into<Fragment>, name: impl Into<Fragment>) -> Self {
		Self {
			namespace: Some(namespace.into()),
			name: name.into(),
		}
	}

	pub fn is_qualified(&self) -> bool {
		self.namespace.is_some()
	}

	pub fn text(&self) -> &str {
		self.name.text()
	}
}

impl Display for QualifiedName {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.namespace {
			Some(namespace) => write!(f, "{}.{}", namespace.text(), self.name.text()),
			None => f.write_str(self.name.text()),
		}
	}
}
