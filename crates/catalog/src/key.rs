// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use quarry_core::{encoded::EncodedKey, interface::TableId};

const VERSION: u8 = 1;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyKind {
	Row = 0x01,
}

/// Position of a row within its table.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash)]
pub struct RowNumber(pub u64);

impl Display for RowNumber {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// Storage key of a table row: `version | kind | table | row`, big endian so
/// rows of one table sort together in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowKey {
	pub table: TableId,
	pub row: RowNumber,
}

impl RowKey {
	pub fn encode(&self) -> EncodedKey {
		let mut out = Vec::with_capacity(18);
		out.push(VERSION);
		out.push(KeyKind::Row as u8);
		out.extend(&self.table.0.to_be_bytes());
		out.extend(&self.row.0.to_be_bytes());
		EncodedKey::new(out)
	}

	pub fn decode(key: &EncodedKey) -> Option<Self> {
		if key.len() != 18 || key[0] != VERSION || key[1] != KeyKind::Row as u8 {
			return None;
		}
		let table = u64::from_be_bytes(key[2..10].try_into().ok()?);
		let row = u64::from_be_bytes(key[10..18].try_into().ok()?);
		Some(Self {
			table: TableId(table),
			row: RowNumber(row),
		})
	}

	/// Prefix shared by every row of `table`.
	pub fn table_prefix(table: TableId) -> EncodedKey {
		let mut out = Vec::with_capacity(10);
		out.push(VERSION);
		out.push(KeyKind::Row as u8);
		out.extend(&table.0.to_be_bytes());
		EncodedKey::new(out)
	}
}
