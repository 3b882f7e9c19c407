// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row encoding. A row is stored as the postcard encoding of its values in
//! column order.

use quarry_catalog::key::RowKey;
use quarry_core::{encoded::EncodedValues, interface::TableId};
use quarry_transaction::Transaction;
use quarry_type::{Result, Value, error, internal};

pub fn encode_row(values: &[Value]) -> Result<EncodedValues> {
	postcard::to_allocvec(values)
		.map(EncodedValues)
		.map_err(|e| error!(internal!("failed to encode row: {}", e)))
}

pub fn decode_row(values: &EncodedValues) -> Result<Vec<Value>> {
	postcard::from_bytes(values).map_err(|e| error!(internal!("failed to decode row: {}", e)))
}

/// Every row of `table` visible to `txn`, pending writes included, in
/// insertion order.
pub fn scan_table(txn: &Transaction, table: TableId) -> Result<Vec<Vec<Value>>> {
	txn.scan_prefix(&RowKey::table_prefix(table))?.iter().map(|(_, values)| decode_row(values)).collect()
}
