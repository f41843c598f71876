// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Directory layer: maps a path such as `["dbMetadata"]` to a short, stable
//! key prefix allocated on first use.
//!
//! Directory nodes live in a reserved system subspace:
//!
//! * `0xFE ++ keycode("node") ++ keycode(path...)` -> allocated prefix
//! * `0xFE ++ keycode("next")` -> last allocated id (big-endian u64)
//!
//! Allocated prefixes are `0x15 ++ big-endian id`, so no content key ever
//! falls inside the system subspace.

use tracing::{debug, instrument};

use crate::{EncodedKey, EncodedKeyRange, Error, Result, Transaction, keycode};

const SYSTEM: u8 = 0xFE;
const CONTENT: u8 = 0x15;
const NODE: &str = "node";
const NEXT: &str = "next";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
	path: Vec<String>,
	prefix: Vec<u8>,
}

impl Directory {
	/// Opens the directory at `path`, allocating a prefix if it does not exist
	/// yet. The allocation is part of `txn` and becomes visible on commit.
	#[instrument(name = "store::directory::create_or_open", level = "debug", skip(txn))]
	pub fn create_or_open(txn: &mut Transaction, path: &[&str]) -> Result<Directory> {
		if let Some(directory) = Self::open(txn, path)? {
			return Ok(directory);
		}

		let next_key = system_key(&[NEXT]);
		let id = match txn.get(&next_key)? {
			Some(bytes) => keycode::decode_u64(&mut bytes.as_slice()).map_err(|e| corrupted(path, e))? + 1,
			None => 1,
		};

		let mut id_bytes = Vec::with_capacity(8);
		keycode::encode_u64(&mut id_bytes, id);
		txn.set(&next_key, id_bytes.clone())?;

		let mut prefix = Vec::with_capacity(9);
		prefix.push(CONTENT);
		prefix.extend_from_slice(&id_bytes);
		txn.set(&node_key(path), prefix.clone())?;

		debug!(?path, id, "directory allocated");
		Ok(Directory {
			path: path.iter().map(|s| s.to_string()).collect(),
			prefix,
		})
	}

	/// Opens an existing directory, `None` if it was never created.
	pub fn open(txn: &mut Transaction, path: &[&str]) -> Result<Option<Directory>> {
		if path.is_empty() {
			return Err(Error::Directory {
				path: vec![],
				reason: "path must not be empty".to_string(),
			});
		}

		let Some(prefix) = txn.get(&node_key(path))? else {
			return Ok(None);
		};

		if prefix.first() != Some(&CONTENT) || prefix.len() != 9 {
			return Err(corrupted(path, format!("invalid prefix {:02x?}", prefix)));
		}

		Ok(Some(Directory {
			path: path.iter().map(|s| s.to_string()).collect(),
			prefix,
		}))
	}

	pub fn path(&self) -> &[String] {
		&self.path
	}

	pub fn prefix(&self) -> &[u8] {
		&self.prefix
	}

	/// Encodes a tuple of string elements into a key inside this directory.
	pub fn pack(&self, elements: &[&str]) -> EncodedKey {
		let mut out = self.prefix.clone();
		for element in elements {
			keycode::encode_str(&mut out, element);
		}
		EncodedKey::new(out)
	}

	/// Decodes a key produced by [`Directory::pack`] back into its elements.
	pub fn unpack(&self, key: &EncodedKey) -> Result<Vec<String>> {
		let Some(mut rest) = key.strip_prefix(self.prefix.as_slice()) else {
			return Err(Error::InvalidKey(format!("key {:02x?} is outside directory {:?}", key.as_slice(), self.path)));
		};

		let mut elements = Vec::new();
		while !rest.is_empty() {
			elements.push(keycode::decode_str(&mut rest)?);
		}
		Ok(elements)
	}

	/// Every key inside this directory.
	pub fn range(&self) -> EncodedKeyRange {
		EncodedKeyRange::prefix(&self.prefix)
	}

	/// Every key whose tuple starts with `elements`.
	pub fn subrange(&self, elements: &[&str]) -> EncodedKeyRange {
		EncodedKeyRange::prefix(&self.pack(elements))
	}
}

fn system_key(elements: &[&str]) -> EncodedKey {
	let mut out = vec![SYSTEM];
	for element in elements {
		keycode::encode_str(&mut out, element);
	}
	EncodedKey::new(out)
}

fn node_key(path: &[&str]) -> EncodedKey {
	let mut elements = Vec::with_capacity(path.len() + 1);
	elements.push(NODE);
	elements.extend_from_slice(path);
	system_key(&elements)
}

fn corrupted(path: &[&str], reason: impl ToString) -> Error {
	Error::Directory {
		path: path.iter().map(|s| s.to_string()).collect(),
		reason: reason.to_string(),
	}
}
