// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod column;
pub mod id;
pub mod namespace;
pub mod object;
pub mod table;
pub mod view;
