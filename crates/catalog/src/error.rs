// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Infrastructure failures that abort a catalog operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Store(#[from] tabula_store::Error),

	#[error("failed to encode {what}: {reason}")]
	Encode {
		what: &'static str,
		reason: String,
	},

	#[error("failed to decode {what}: {reason}")]
	Decode {
		what: &'static str,
		reason: String,
	},

	#[error("schema record for table '{0}' not found")]
	SchemaNotFound(String),

	#[error("catalog inconsistency: {0}")]
	Inconsistent(String),

	#[error("invalid configuration: {0}")]
	Config(String),
}

impl Error {
	/// True for transaction conflicts, where re-running the operation may
	/// succeed.
	pub fn is_retryable(&self) -> bool {
		matches!(self, Error::Store(err) if err.is_retryable())
	}
}
