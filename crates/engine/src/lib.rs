// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod config;
mod engine;
pub mod execute;
mod session;
pub mod test_utils;
pub mod tracing;

pub use config::{EngineBuilder, EngineConfig};
pub use engine::Engine;
pub use execute::{ExecutionFailure, ExecutionResult, IgnoredFeature, StatementExecutor};
pub use quarry_type::{Error, Result};
pub use session::Session;
