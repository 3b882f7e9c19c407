// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use quarry_type::{Result, Type, return_internal_error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
	pub name: String,
	pub ty: Type,
	pub index: ColumnIndex,
}

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnIndex(pub u16);

impl ColumnIndex {
	/// Index of the column at `position`. A relation holds at most
	/// `u16::MAX + 1` columns.
	pub fn from_position(position: usize) -> Result<Self> {
		match u16::try_from(position) {
			Ok(index) => Ok(Self(index)),
			Err(_) => return_internal_error!("column position {} exceeds the column limit", position),
		}
	}
}

impl Deref for ColumnIndex {
	type Target = u16;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u16> for ColumnIndex {
	fn eq(&self, other: &u16) -> bool {
		self.0.eq(other)
	}
}
