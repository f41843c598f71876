// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Memory implementation of the versioned key-value store.
//!
//! Uses a BTreeMap of per-key version chains guarded by a RwLock. Commits are
//! serialized through the oracle, which also tracks the snapshot versions of
//! live transactions so that superseded versions can be pruned.

use std::{
	collections::{BTreeMap, btree_map::Entry},
	sync::Arc,
};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, instrument};

use crate::{CommitVersion, Directory, EncodedKey, EncodedKeyRange, Error, Result, Transaction};

/// Committed versions of a single key, oldest first. `None` is a tombstone.
type Versions = Vec<(CommitVersion, Option<Vec<u8>>)>;

/// What a transaction observed, checked against later commits.
#[derive(Debug, Clone)]
pub(crate) enum Read {
	Key(EncodedKey),
	Range(EncodedKeyRange),
}

#[derive(Clone)]
pub struct Store {
	inner: Arc<Inner>,
}

struct Inner {
	entries: RwLock<BTreeMap<EncodedKey, Versions>>,
	oracle: Mutex<Oracle>,
}

#[derive(Default)]
struct Oracle {
	version: CommitVersion,
	// snapshot version -> number of live transactions reading at it
	active: BTreeMap<CommitVersion, usize>,
}

impl Oracle {
	/// Oldest snapshot still held by a live transaction other than the one
	/// committing at `committing`.
	fn watermark(&self, committing: CommitVersion) -> Option<CommitVersion> {
		self.active.iter().find(|(version, count)| !(**version == committing && **count == 1)).map(|(v, _)| *v)
	}
}

impl Default for Store {
	fn default() -> Self {
		Self::memory()
	}
}

impl Store {
	#[instrument(name = "store::memory::new", level = "debug")]
	pub fn memory() -> Self {
		Self {
			inner: Arc::new(Inner {
				entries: RwLock::new(BTreeMap::new()),
				oracle: Mutex::new(Oracle::default()),
			}),
		}
	}

	/// Returns the latest committed version.
	pub fn version(&self) -> CommitVersion {
		self.inner.oracle.lock().version
	}

	#[instrument(name = "store::begin", level = "trace", skip(self))]
	pub fn begin(&self) -> Transaction {
		let version = {
			let mut oracle = self.inner.oracle.lock();
			let version = oracle.version;
			*oracle.active.entry(version).or_insert(0) += 1;
			version
		};
		Transaction::new(self.clone(), version)
	}

	/// Creates or opens the directory at `path` in its own transaction.
	#[instrument(name = "store::directory", level = "debug", skip(self))]
	pub fn directory(&self, path: &[&str]) -> Result<Directory> {
		let mut txn = self.begin();
		let directory = Directory::create_or_open(&mut txn, path)?;
		txn.commit()?;
		Ok(directory)
	}

	/// Number of live transactions.
	pub fn active_transactions(&self) -> usize {
		self.inner.oracle.lock().active.values().sum()
	}

	pub(crate) fn done(&self, version: CommitVersion) {
		let mut oracle = self.inner.oracle.lock();
		if let Entry::Occupied(mut entry) = oracle.active.entry(version) {
			*entry.get_mut() -= 1;
			if *entry.get() == 0 {
				entry.remove();
			}
		}
	}

	pub(crate) fn get(&self, key: &EncodedKey, version: CommitVersion) -> Option<Vec<u8>> {
		let entries = self.inner.entries.read();
		entries.get(key).and_then(|versions| visible(versions, version)).cloned()
	}

	pub(crate) fn range(&self, range: &EncodedKeyRange, version: CommitVersion) -> Vec<(EncodedKey, Vec<u8>)> {
		let entries = self.inner.entries.read();
		entries.range(range.clone())
			.filter_map(|(key, versions)| visible(versions, version).map(|v| (key.clone(), v.clone())))
			.collect()
	}

	#[instrument(name = "store::commit", level = "debug", skip(self, reads, writes), fields(
		read_version = %read_version,
		read_count = reads.len(),
		write_count = writes.len()
	))]
	pub(crate) fn commit(
		&self,
		read_version: CommitVersion,
		reads: &[Read],
		writes: BTreeMap<EncodedKey, Option<Vec<u8>>>,
	) -> Result<CommitVersion> {
		let mut oracle = self.inner.oracle.lock();

		if writes.is_empty() {
			return Ok(oracle.version);
		}

		{
			let entries = self.inner.entries.read();
			if let Some(read) = reads.iter().find(|read| has_conflict(&entries, read, read_version)) {
				debug!(?read, "commit rejected");
				return Err(Error::Conflict);
			}
		}

		let version = oracle.version.next();
		let watermark = oracle.watermark(read_version).unwrap_or(version);

		let mut entries = self.inner.entries.write();
		for (key, value) in writes {
			let versions = entries.entry(key.clone()).or_default();
			versions.push((version, value));
			prune(versions, watermark);
			if versions.len() == 1 && versions[0].1.is_none() && watermark >= version {
				entries.remove(&key);
			}
		}

		oracle.version = version;
		Ok(version)
	}
}

fn visible(versions: &Versions, version: CommitVersion) -> Option<&Vec<u8>> {
	versions.iter().rev().find(|(v, _)| *v <= version).and_then(|(_, value)| value.as_ref())
}

fn latest(versions: &Versions) -> CommitVersion {
	versions.last().map(|(v, _)| *v).unwrap_or_default()
}

fn has_conflict(entries: &BTreeMap<EncodedKey, Versions>, read: &Read, read_version: CommitVersion) -> bool {
	match read {
		Read::Key(key) => entries.get(key).is_some_and(|versions| latest(versions) > read_version),
		Read::Range(range) => entries.range(range.clone()).any(|(_, versions)| latest(versions) > read_version),
	}
}

/// Drops versions no live snapshot can observe: everything older than the
/// newest version at or below `watermark`.
fn prune(versions: &mut Versions, watermark: CommitVersion) {
	if let Some(keep_from) = versions.iter().rposition(|(v, _)| *v <= watermark) {
		versions.drain(..keep_from);
	}
}
