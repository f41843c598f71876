// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("transaction conflict detected - another transaction modified the same data")]
	Conflict,

	#[error("invalid key: {0}")]
	InvalidKey(String),

	#[error("directory {path:?}: {reason}")]
	Directory {
		path: Vec<String>,
		reason: String,
	},
}

impl Error {
	/// Returns true when retrying the whole transaction may succeed.
	pub fn is_retryable(&self) -> bool {
		matches!(self, Error::Conflict)
	}
}
