// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod common;
pub mod delta;
pub mod encoded;
pub mod interface;
pub mod plan;

pub use common::CommitVersion;
pub use quarry_type::{Error, Result};
