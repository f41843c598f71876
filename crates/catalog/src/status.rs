// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// Outcome of a catalog operation.
///
/// Expected business-rule violations are reported here and never as
/// [`crate::Error`]; callers branch on the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
	Success,
	TableCreationAttributeInvalid,
	TableCreationAttributeNumMismatch,
	TableCreationPrimaryKeyNotFound,
	TableAlreadyExists,
	TableNotFound,
	AttributeAlreadyExists,
	AttributeNotFound,
	PrimaryKeyCannotDrop,
}

impl StatusCode {
	pub fn is_success(self) -> bool {
		self == StatusCode::Success
	}

	pub fn as_str(self) -> &'static str {
		match self {
			StatusCode::Success => "SUCCESS",
			StatusCode::TableCreationAttributeInvalid => "TABLE_CREATION_ATTRIBUTE_INVALID",
			StatusCode::TableCreationAttributeNumMismatch => "TABLE_CREATION_ATTRIBUTE_NUM_MISMATCH",
			StatusCode::TableCreationPrimaryKeyNotFound => "TABLE_CREATION_PRIMARY_KEY_NOT_FOUND",
			StatusCode::TableAlreadyExists => "TABLE_ALREADY_EXISTS",
			StatusCode::TableNotFound => "TABLE_NOT_FOUND",
			StatusCode::AttributeAlreadyExists => "ATTRIBUTE_ALREADY_EXISTS",
			StatusCode::AttributeNotFound => "ATTRIBUTE_NOT_FOUND",
			StatusCode::PrimaryKeyCannotDrop => "PRIMARY_KEY_CANNOT_DROP",
		}
	}
}

impl Display for StatusCode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
