// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Debug, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EncodedKey(pub Vec<u8>);

impl EncodedKey {
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self(key.into())
	}

	pub fn starts_with(&self, prefix: &EncodedKey) -> bool {
		self.0.starts_with(&prefix.0)
	}
}

impl Deref for EncodedKey {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl AsRef<[u8]> for EncodedKey {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Debug for EncodedKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("EncodedKey(0x")?;
		for byte in &self.0 {
			write!(f, "{:02x}", byte)?;
		}
		f.write_str(")")
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedValues(pub Vec<u8>);

impl Deref for EncodedValues {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl AsRef<[u8]> for EncodedValues {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_debug_is_hex() {
		assert_eq!(format!("{:?}", EncodedKey::new(vec![0x01, 0xab])), "EncodedKey(0x01ab)");
	}

	#[test]
	fn test_starts_with() {
		let key = EncodedKey::new(vec![1, 2, 3]);
		assert!(key.starts_with(&EncodedKey::new(vec![1, 2])));
		assert!(!key.starts_with(&EncodedKey::new(vec![2])));
	}
}
