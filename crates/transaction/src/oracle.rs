// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, MutexGuard};
use quarry_core::CommitVersion;

/// Hands out commit versions. Every writer (data commit or schema change)
/// holds the write lock from version allocation until `done`, so versions
/// become visible strictly in order.
#[derive(Debug, Default)]
pub struct Oracle {
	current: AtomicU64,
	write_lock: Mutex<()>,
}

impl Oracle {
	pub fn new() -> Self {
		Self::default()
	}

	/// The latest fully committed version.
	pub fn current(&self) -> CommitVersion {
		CommitVersion(self.current.load(Ordering::Acquire))
	}

	pub(crate) fn lock(&self) -> MutexGuard<'_, ()> {
		self.write_lock.lock()
	}

	/// Must be called with the write lock held.
	pub(crate) fn next_version(&self) -> CommitVersion {
		self.current().next()
	}

	/// Publishes `version`. A version that is allocated but never marked
	/// done is handed out again to the next writer.
	pub(crate) fn done(&self, version: CommitVersion) {
		self.current.store(version.0, Ordering::Release);
	}
}
