// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Ordered, multi-version key-value store with optimistic transactions.
//!
//! Every [`Transaction`] reads a snapshot taken at the commit version that was
//! current when it began. Reads are tracked, and at commit time the store
//! rejects the transaction with [`Error::Conflict`] if any key or range it read
//! was committed by someone else after that snapshot.
//!
//! A [`Directory`] maps a path to a short allocated key prefix so that
//! independent users of the store never collide in the keyspace.

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::fmt::{Display, Formatter};

pub use directory::Directory;
pub use error::Error;
pub use key::{EncodedKey, EncodedKeyRange};
pub use store::Store;
pub use transaction::Transaction;

mod directory;
mod error;
mod key;
pub mod keycode;
mod store;
mod transaction;

pub type Result<T> = std::result::Result<T, Error>;

/// Monotonic version assigned to every successful write commit.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CommitVersion(pub u64);

impl CommitVersion {
	pub fn next(self) -> Self {
		Self(self.0 + 1)
	}
}

impl Display for CommitVersion {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl PartialEq<u64> for CommitVersion {
	fn eq(&self, other: &u64) -> bool {
		self.0 == *other
	}
}
