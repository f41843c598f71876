// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::BTreeMap, mem};

use tracing::{instrument, trace};

use crate::{
	CommitVersion, EncodedKey, EncodedKeyRange, Error, Result, Store,
	store::Read,
};

/// An optimistic read-write transaction over a [`Store`] snapshot.
///
/// Writes are buffered until [`Transaction::commit`]. Reads see the snapshot
/// plus the transaction's own pending writes, and every read of committed data
/// is remembered for conflict detection. Dropping a transaction without
/// committing discards it.
pub struct Transaction {
	store: Store,
	version: CommitVersion,
	pending: BTreeMap<EncodedKey, Option<Vec<u8>>>,
	reads: Vec<Read>,
}

impl Transaction {
	pub(crate) fn new(store: Store, version: CommitVersion) -> Self {
		Self {
			store,
			version,
			pending: BTreeMap::new(),
			reads: Vec::new(),
		}
	}

	/// Returns the snapshot version this transaction reads at.
	pub fn version(&self) -> CommitVersion {
		self.version
	}

	/// Returns true if the transaction has buffered writes.
	pub fn is_dirty(&self) -> bool {
		!self.pending.is_empty()
	}

	#[instrument(name = "transaction::get", level = "trace", skip(self, key), fields(
		version = %self.version,
		key_len = key.len()
	))]
	pub fn get(&mut self, key: &EncodedKey) -> Result<Option<Vec<u8>>> {
		if let Some(pending) = self.pending.get(key) {
			return Ok(pending.clone());
		}
		self.reads.push(Read::Key(key.clone()));
		Ok(self.store.get(key, self.version))
	}

	pub fn contains_key(&mut self, key: &EncodedKey) -> Result<bool> {
		Ok(self.get(key)?.is_some())
	}

	#[instrument(name = "transaction::set", level = "trace", skip(self, key, value), fields(
		version = %self.version,
		key_len = key.len()
	))]
	pub fn set(&mut self, key: &EncodedKey, value: impl Into<Vec<u8>>) -> Result<()> {
		if key.is_empty() {
			return Err(Error::InvalidKey("key must not be empty".to_string()));
		}
		self.pending.insert(key.clone(), Some(value.into()));
		Ok(())
	}

	/// Removes a key. Removing an absent key is not an error.
	#[instrument(name = "transaction::remove", level = "trace", skip(self, key), fields(
		version = %self.version,
		key_len = key.len()
	))]
	pub fn remove(&mut self, key: &EncodedKey) -> Result<()> {
		self.pending.insert(key.clone(), None);
		Ok(())
	}

	/// Removes every key inside `range` that is visible to this transaction.
	/// The range counts as read, so a concurrent insert into it makes the
	/// commit fail.
	#[instrument(name = "transaction::remove_range", level = "debug", skip(self), fields(version = %self.version))]
	pub fn remove_range(&mut self, range: EncodedKeyRange) -> Result<()> {
		let keys: Vec<EncodedKey> = self.range(range)?.into_iter().map(|(key, _)| key).collect();
		trace!(removed = keys.len(), "range cleared");
		for key in keys {
			self.pending.insert(key, None);
		}
		Ok(())
	}

	/// Returns every visible entry inside `range` in key order.
	#[instrument(name = "transaction::range", level = "trace", skip(self), fields(version = %self.version))]
	pub fn range(&mut self, range: EncodedKeyRange) -> Result<Vec<(EncodedKey, Vec<u8>)>> {
		let mut merged: BTreeMap<EncodedKey, Vec<u8>> =
			self.store.range(&range, self.version).into_iter().collect();

		for (key, value) in self.pending.range(range.clone()) {
			match value {
				Some(value) => {
					merged.insert(key.clone(), value.clone());
				}
				None => {
					merged.remove(key);
				}
			}
		}

		self.reads.push(Read::Range(range));
		Ok(merged.into_iter().collect())
	}

	/// Commits the buffered writes. Fails with [`Error::Conflict`] when data
	/// this transaction read was changed by a commit after its snapshot.
	#[instrument(name = "transaction::commit", level = "debug", skip(self), fields(
		version = %self.version,
		pending = self.pending.len()
	))]
	pub fn commit(mut self) -> Result<CommitVersion> {
		let pending = mem::take(&mut self.pending);
		let reads = mem::take(&mut self.reads);
		self.store.commit(self.version, &reads, pending)
	}

	/// Discards the buffered writes.
	#[instrument(name = "transaction::rollback", level = "debug", skip(self), fields(version = %self.version))]
	pub fn rollback(self) {}
}

impl Drop for Transaction {
	fn drop(&mut self) {
		self.store.done(self.version);
	}
}
