// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::BTreeMap,
	fmt::{self, Debug, Display, Formatter},
	ops::Deref,
	sync::Arc,
};

use quarry_core::{
	CommitVersion,
	delta::Delta,
	encoded::{EncodedKey, EncodedValues},
};
use quarry_type::{Result, error::diagnostic::transaction::transaction_conflict, return_error};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::{oracle::Oracle, store::MultiVersionStore};

/// Identity of a transaction handle. Every handle, including the ones
/// returned by `full_commit` and by a schema change, gets a fresh id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(pub Uuid);

impl TransactionId {
	pub fn generate() -> Self {
		Self(Uuid::now_v7())
	}
}

impl Display for TransactionId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// How a handle came to be.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransactionOrigin {
	Begin,
	Commit {
		parent: TransactionId,
	},
	Fork {
		parent: TransactionId,
	},
}

#[derive(Clone)]
pub struct TransactionManager(Arc<TransactionManagerInner>);

pub struct TransactionManagerInner {
	pub(crate) oracle: Oracle,
	pub(crate) store: MultiVersionStore,
}

impl Deref for TransactionManager {
	type Target = TransactionManagerInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Default for TransactionManager {
	fn default() -> Self {
		Self::new()
	}
}

impl TransactionManager {
	pub fn new() -> Self {
		Self(Arc::new(TransactionManagerInner {
			oracle: Oracle::new(),
			store: MultiVersionStore::new(),
		}))
	}

	#[instrument(name = "transaction::manager::begin", level = "trace", skip(self))]
	pub fn begin(&self) -> Transaction {
		Transaction::new(self.clone(), self.oracle.current(), TransactionOrigin::Begin)
	}

	pub fn current_version(&self) -> CommitVersion {
		self.oracle.current()
	}

	pub fn store(&self) -> &MultiVersionStore {
		&self.store
	}
}

/// A snapshot of the store at `version` plus private pending writes.
///
/// Reads see the snapshot overlaid with this handle's own pending writes.
/// Pending writes reach the store only through `commit` or `full_commit`;
/// dropping the handle discards them.
pub struct Transaction {
	id: TransactionId,
	pub(crate) manager: TransactionManager,
	version: CommitVersion,
	origin: TransactionOrigin,
	pending: BTreeMap<EncodedKey, Delta>,
}

impl Transaction {
	fn new(manager: TransactionManager, version: CommitVersion, origin: TransactionOrigin) -> Self {
		Self {
			id: TransactionId::generate(),
			manager,
			version,
			origin,
			pending: BTreeMap::new(),
		}
	}

	pub fn id(&self) -> TransactionId {
		self.id
	}

	/// The snapshot this handle reads at.
	pub fn version(&self) -> CommitVersion {
		self.version
	}

	pub fn origin(&self) -> TransactionOrigin {
		self.origin
	}

	pub fn pending_count(&self) -> usize {
		self.pending.len()
	}

	pub fn manager(&self) -> &TransactionManager {
		&self.manager
	}

	#[instrument(name = "transaction::get", level = "trace", skip(self), fields(txn = %self.id))]
	pub fn get(&self, key: &EncodedKey) -> Result<Option<EncodedValues>> {
		if let Some(delta) = self.pending.get(key) {
			return Ok(delta.values().cloned());
		}
		Ok(self.manager.store.get(key, self.version))
	}

	#[instrument(name = "transaction::set", level = "trace", skip(self, values), fields(txn = %self.id, value_len = values.len()))]
	pub fn set(&mut self, key: &EncodedKey, values: EncodedValues) -> Result<()> {
		self.pending.insert(
			key.clone(),
			Delta::Set {
				key: key.clone(),
				values,
			},
		);
		Ok(())
	}

	#[instrument(name = "transaction::remove", level = "trace", skip(self), fields(txn = %self.id))]
	pub fn remove(&mut self, key: &EncodedKey) -> Result<()> {
		self.pending.insert(
			key.clone(),
			Delta::Remove {
				key: key.clone(),
			},
		);
		Ok(())
	}

	/// Live keys under `prefix`, pending writes included, in key order.
	#[instrument(name = "transaction::scan_prefix", level = "trace", skip(self), fields(txn = %self.id))]
	pub fn scan_prefix(&self, prefix: &EncodedKey) -> Result<Vec<(EncodedKey, EncodedValues)>> {
		let mut merged: BTreeMap<EncodedKey, EncodedValues> =
			self.manager.store.scan_prefix(prefix, self.version).into_iter().collect();

		for (key, delta) in self.pending.range(prefix.clone()..) {
			if !key.starts_with(prefix) {
				break;
			}
			match delta.values() {
				Some(values) => {
					merged.insert(key.clone(), values.clone());
				}
				None => {
					merged.remove(key);
				}
			}
		}

		Ok(merged.into_iter().collect())
	}

	/// Applies pending writes at a fresh version. Fails with a conflict if
	/// any written key was committed by someone else after this handle's
	/// snapshot. Read-only handles commit trivially at their own snapshot.
	#[instrument(name = "transaction::commit", level = "debug", skip(self), fields(txn = %self.id, pending_count = self.pending.len()))]
	pub fn commit(mut self) -> Result<CommitVersion> {
		let pending = std::mem::take(&mut self.pending);
		if pending.is_empty() {
			return Ok(self.version);
		}

		let _guard = self.manager.oracle.lock();
		for key in pending.keys() {
			if let Some(last) = self.manager.store.last_version(key) {
				if last > self.version {
					debug!(key = ?key, last = %last, snapshot = %self.version, "write conflict");
					return_error!(transaction_conflict());
				}
			}
		}

		let version = self.manager.oracle.next_version();
		let deltas: Vec<Delta> = pending.into_values().collect();
		self.manager.store.commit(&deltas, version);
		self.manager.oracle.done(version);

		debug!(version = %version, deltas = deltas.len(), "committed");
		Ok(version)
	}

	/// Commits and returns a new handle on the committed snapshot. Nothing
	/// written before this point can be rolled back afterwards.
	#[instrument(name = "transaction::full_commit", level = "debug", skip(self), fields(txn = %self.id))]
	pub fn full_commit(self) -> Result<Transaction> {
		let parent = self.id;
		let manager = self.manager.clone();
		let had_writes = !self.pending.is_empty();
		let committed = self.commit()?;

		let version = if had_writes {
			committed
		} else {
			manager.current_version()
		};

		Ok(Transaction::new(
			manager,
			version,
			TransactionOrigin::Commit {
				parent,
			},
		))
	}

	#[instrument(name = "transaction::rollback", level = "debug", skip(self), fields(txn = %self.id))]
	pub fn rollback(mut self) {
		let discarded = self.pending.len();
		self.pending.clear();
		debug!(discarded, "rolled back");
	}

	/// An independent handle on this handle's snapshot. Pending writes are
	/// not carried over.
	pub fn fork(&self) -> Transaction {
		self.fork_at(self.version)
	}

	/// An independent handle reading at `version`, with no pending writes.
	pub(crate) fn fork_at(&self, version: CommitVersion) -> Transaction {
		Transaction::new(
			self.manager.clone(),
			version,
			TransactionOrigin::Fork {
				parent: self.id,
			},
		)
	}
}

impl Debug for Transaction {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Transaction")
			.field("id", &self.id)
			.field("version", &self.version)
			.field("origin", &self.origin)
			.field("pending", &self.pending.len())
			.finish()
	}
}

impl Drop for Transaction {
	fn drop(&mut self) {
		if !self.pending.is_empty() {
			warn!(txn = %self.id, discarded = self.pending.len(), "transaction dropped with pending writes");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(s: &str) -> EncodedKey {
		EncodedKey::new(s.as_bytes().to_vec())
	}

	fn values(s: &str) -> EncodedValues {
		EncodedValues(s.as_bytes().to_vec())
	}

	#[test]
	fn test_pending_writes_are_private() {
		let manager = TransactionManager::new();
		let mut tx = manager.begin();
		tx.set(&key("a"), values("1")).unwrap();
		assert_eq!(tx.get(&key("a")).unwrap(), Some(values("1")));

		let other = manager.begin();
		assert_eq!(other.get(&key("a")).unwrap(), None);
	}

	#[test]
	fn test_commit_publishes_new_version() {
		let manager = TransactionManager::new();
		let mut tx = manager.begin();
		assert_eq!(tx.version(), 0);
		tx.set(&key("a"), values("1")).unwrap();
		let version = tx.commit().unwrap();
		assert_eq!(version, 1);
		assert_eq!(manager.current_version(), 1);

		let rx = manager.begin();
		assert_eq!(rx.get(&key("a")).unwrap(), Some(values("1")));
	}

	#[test]
	fn test_read_only_commit_does_not_advance() {
		let manager = TransactionManager::new();
		let tx = manager.begin();
		assert_eq!(tx.commit().unwrap(), 0);
		assert_eq!(manager.current_version(), 0);
	}

	#[test]
	fn test_rollback_discards_pending() {
		let manager = TransactionManager::new();
		let mut tx = manager.begin();
		tx.set(&key("a"), values("1")).unwrap();
		tx.rollback();

		assert_eq!(manager.begin().get(&key("a")).unwrap(), None);
		assert_eq!(manager.current_version(), 0);
	}

	#[test]
	fn test_conflict_first_committer_wins() {
		let manager = TransactionManager::new();
		let mut first = manager.begin();
		let mut second = manager.begin();
		first.set(&key("a"), values("1")).unwrap();
		second.set(&key("a"), values("2")).unwrap();

		first.commit().unwrap();
		let err = second.commit().unwrap_err();
		assert_eq!(err.code, "TXN_001");
		assert_eq!(manager.begin().get(&key("a")).unwrap(), Some(values("1")));
	}

	#[test]
	fn test_full_commit_returns_new_identity() {
		let manager = TransactionManager::new();
		let mut tx = manager.begin();
		let parent = tx.id();
		tx.set(&key("a"), values("1")).unwrap();

		let next = tx.full_commit().unwrap();
		assert_ne!(next.id(), parent);
		assert_eq!(
			next.origin(),
			TransactionOrigin::Commit {
				parent
			}
		);
		assert_eq!(next.version(), 1);
		assert_eq!(next.pending_count(), 0);
		assert_eq!(next.get(&key("a")).unwrap(), Some(values("1")));
	}

	#[test]
	fn test_scan_prefix_merges_pending() {
		let manager = TransactionManager::new();
		let mut setup = manager.begin();
		setup.set(&key("r1"), values("a")).unwrap();
		setup.set(&key("r2"), values("b")).unwrap();
		setup.commit().unwrap();

		let mut tx = manager.begin();
		tx.remove(&key("r1")).unwrap();
		tx.set(&key("r3"), values("c")).unwrap();
		tx.set(&key("s1"), values("x")).unwrap();

		let rows = tx.scan_prefix(&key("r")).unwrap();
		let found: Vec<EncodedValues> = rows.into_iter().map(|(_, v)| v).collect();
		assert_eq!(found, vec![values("b"), values("c")]);
	}

	#[test]
	fn test_fork_is_independent() {
		let manager = TransactionManager::new();
		let mut tx = manager.begin();
		tx.set(&key("a"), values("a")).unwrap();

		let fork = tx.fork();
		assert_ne!(fork.id(), tx.id());
		assert_eq!(fork.version(), tx.version());
		assert_eq!(fork.pending_count(), 0);
		assert_eq!(fork.get(&key("a")).unwrap(), None);
		assert_eq!(
			fork.origin(),
			TransactionOrigin::Fork {
				parent: tx.id()
			}
		);
	}
}
