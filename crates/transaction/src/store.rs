// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use crossbeam_skiplist::SkipMap;
use quarry_core::{
	CommitVersion,
	delta::Delta,
	encoded::{EncodedKey, EncodedValues},
};

/// Every committed value of a key, by version. `None` marks a removal.
pub type VersionedValues = SkipMap<CommitVersion, Option<EncodedValues>>;

/// In-memory multi-version key/value store backing all data writes.
#[derive(Clone, Default)]
pub struct MultiVersionStore(Arc<MultiVersionStoreInner>);

#[derive(Default)]
pub struct MultiVersionStoreInner {
	versioned: SkipMap<EncodedKey, VersionedValues>,
}

impl Deref for MultiVersionStore {
	type Target = MultiVersionStoreInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl MultiVersionStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// The value of `key` as of `version`.
	pub fn get(&self, key: &EncodedKey, version: CommitVersion) -> Option<EncodedValues> {
		let entry = self.versioned.get(key)?;
		let values = entry.value();
		let found = values.range(..=version).next_back()?;
		found.value().clone()
	}

	/// The version of the most recent write to `key`, removals included.
	pub fn last_version(&self, key: &EncodedKey) -> Option<CommitVersion> {
		let entry = self.versioned.get(key)?;
		entry.value().back().map(|e| *e.key())
	}

	pub fn commit(&self, deltas: &[Delta], version: CommitVersion) {
		for delta in deltas {
			match delta {
				Delta::Set {
					key,
					values,
				} => {
					let item = self.versioned.get_or_insert_with(key.clone(), VersionedValues::new);
					item.value().insert(version, Some(values.clone()));
				}
				Delta::Remove {
					key,
				} => {
					if let Some(item) = self.versioned.get(key) {
						if !item.value().is_empty() {
							item.value().insert(version, None);
						}
					}
				}
			}
		}
	}

	/// All live keys starting with `prefix` as of `version`, in key order.
	pub fn scan_prefix(&self, prefix: &EncodedKey, version: CommitVersion) -> Vec<(EncodedKey, EncodedValues)> {
		let mut result = Vec::new();
		for entry in self.versioned.range(prefix.clone()..) {
			if !entry.key().starts_with(prefix) {
				break;
			}
			if let Some(found) = entry.value().range(..=version).next_back() {
				if let Some(values) = found.value() {
					result.push((entry.key().clone(), values.clone()));
				}
			}
		}
		result
	}
}
