// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod oracle;
pub mod schema;
pub mod store;
pub mod transaction;

pub use quarry_type::{Error, Result};
pub use schema::{FailedStage, SchemaChange, SchemaChangeFailure};
pub use store::MultiVersionStore;
pub use transaction::{Transaction, TransactionId, TransactionManager, TransactionOrigin};
