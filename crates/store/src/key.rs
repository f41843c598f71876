// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Bound, Deref, RangeBounds};

#[derive(Debug, Clone, PartialOrd, Ord, Hash, PartialEq, Eq)]
pub struct EncodedKey(pub Vec<u8>);

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

impl EncodedKey {
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self(key.into())
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeyRange {
	pub start: Bound<EncodedKey>,
	pub end: Bound<EncodedKey>,
}

impl EncodedKeyRange {
	pub fn new(start: Bound<EncodedKey>, end: Bound<EncodedKey>) -> Self {
		Self {
			start,
			end,
		}
	}

	pub fn all() -> Self {
		Self::new(Bound::Unbounded, Bound::Unbounded)
	}

	/// Every key starting with `prefix`.
	pub fn prefix(prefix: &[u8]) -> Self {
		let end = match prefix_successor(prefix) {
			Some(end) => Bound::Excluded(EncodedKey(end)),
			None => Bound::Unbounded,
		};
		Self::new(Bound::Included(EncodedKey::new(prefix)), end)
	}

	pub fn contains_key(&self, key: &EncodedKey) -> bool {
		RangeBounds::contains(self, key)
	}
}

impl RangeBounds<EncodedKey> for EncodedKeyRange {
	fn start_bound(&self) -> Bound<&EncodedKey> {
		self.start.as_ref()
	}

	fn end_bound(&self) -> Bound<&EncodedKey> {
		self.end.as_ref()
	}
}

/// Smallest key greater than every key that starts with `prefix`, or `None`
/// when no such key exists (empty prefix or all `0xff`).
fn prefix_successor(prefix: &[u8]) -> Option<Vec<u8>> {
	let mut end = prefix.to_vec();
	while let Some(last) = end.pop() {
		if last < 0xff {
			end.push(last + 1);
			return Some(end);
		}
	}
	None
}
