// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::encoded::{EncodedKey, EncodedValues};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delta {
	Set {
		key: EncodedKey,
		values: EncodedValues,
	},
	Remove {
		key: EncodedKey,
	},
}

impl Delta {
	pub fn key(&self) -> &EncodedKey {
		match self {
			Delta::Set {
				key,
				..
			}
			| Delta::Remove {
				key,
			} => key,
		}
	}

	pub fn values(&self) -> Option<&EncodedValues> {
		match self {
			Delta::Set {
				values,
				..
			} => Some(values),
			Delta::Remove {
				..
			} => None,
		}
	}
}
