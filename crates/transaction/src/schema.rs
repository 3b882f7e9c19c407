// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use quarry_core::CommitVersion;
use quarry_type::{Error, Result};
use tracing::{debug, instrument};

use crate::transaction::Transaction;

/// Where a schema change stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FailedStage {
	/// Pending writes could not be committed. Nothing was applied; the
	/// resume handle is a fresh transaction on the latest snapshot.
	Commit,
	/// Pending writes were committed but the schema mutation failed. The
	/// schema is unchanged and the resume handle is the committed one.
	Mutation,
}

impl Display for FailedStage {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			FailedStage::Commit => f.write_str("commit"),
			FailedStage::Mutation => f.write_str("mutation"),
		}
	}
}

/// A failed schema change together with the handle the caller continues
/// from.
#[derive(Debug)]
pub struct SchemaChangeFailure {
	pub error: Error,
	pub stage: FailedStage,
	pub resume: Transaction,
}

impl Display for SchemaChangeFailure {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "schema change failed during {}: {}", self.stage, self.error)
	}
}

impl std::error::Error for SchemaChangeFailure {}

/// What a schema mutation gets to work with: the committed handle and the
/// version its changes must be published at.
pub struct SchemaChange<'a> {
	committed: &'a Transaction,
	version: CommitVersion,
}

impl<'a> SchemaChange<'a> {
	pub fn committed(&self) -> &'a Transaction {
		self.committed
	}

	/// The version all changes of this mutation are published at. Lookups
	/// at this version see the latest published schema.
	pub fn version(&self) -> CommitVersion {
		self.version
	}
}

impl Transaction {
	/// Runs `mutation` around the commit/fork protocol schema metadata
	/// needs: pending writes are fully committed first, `mutation` then
	/// runs under the write lock with a freshly allocated version, and on
	/// success a forked handle reading at that version is returned.
	///
	/// Handles created before the change never observe it. On failure the
	/// version is not published and the failure carries the handle to
	/// continue from.
	#[instrument(name = "transaction::schema::apply", level = "debug", skip_all, fields(txn = %self.id()))]
	pub fn apply_schema_change<T>(
		self,
		mutation: impl FnOnce(&SchemaChange<'_>) -> Result<T>,
	) -> std::result::Result<(T, Transaction), SchemaChangeFailure> {
		let manager = self.manager.clone();

		debug!(pending = self.pending_count(), "committing");
		let committed = match self.full_commit() {
			Ok(committed) => committed,
			Err(error) => {
				return Err(SchemaChangeFailure {
					error,
					stage: FailedStage::Commit,
					resume: manager.begin(),
				});
			}
		};

		let _guard = manager.oracle.lock();
		let version = manager.oracle.next_version();
		debug!(committed = %committed.id(), version = %version, "mutating");

		let result = mutation(&SchemaChange {
			committed: &committed,
			version,
		});

		match result {
			Ok(value) => {
				manager.oracle.done(version);
				let next = committed.fork_at(version);
				debug!(next = %next.id(), version = %version, "forked");
				Ok((value, next))
			}
			Err(error) => {
				debug!(code = %error.code, "mutation failed, resuming from committed");
				Err(SchemaChangeFailure {
					error,
					stage: FailedStage::Mutation,
					resume: committed,
				})
			}
		}
	}
}
