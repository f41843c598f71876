// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// Type of a table attribute. The set is closed: anything else is rejected
/// where it enters the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeType {
	Integer,
	Varchar,
	Double,
}

impl AttributeType {
	pub const ALL: [AttributeType; 3] = [AttributeType::Integer, AttributeType::Varchar, AttributeType::Double];

	/// Stable one-byte tag used in encoded schema records.
	pub fn tag(self) -> u8 {
		match self {
			AttributeType::Integer => 1,
			AttributeType::Varchar => 2,
			AttributeType::Double => 3,
		}
	}

	pub fn from_tag(tag: u8) -> Option<Self> {
		match tag {
			1 => Some(AttributeType::Integer),
			2 => Some(AttributeType::Varchar),
			3 => Some(AttributeType::Double),
			_ => None,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			AttributeType::Integer => "INTEGER",
			AttributeType::Varchar => "VARCHAR",
			AttributeType::Double => "DOUBLE",
		}
	}

	/// Case-insensitive; `INT` is accepted for `INTEGER`.
	pub fn parse(name: &str) -> Option<Self> {
		match name.to_ascii_uppercase().as_str() {
			"INTEGER" | "INT" => Some(AttributeType::Integer),
			"VARCHAR" => Some(AttributeType::Varchar),
			"DOUBLE" => Some(AttributeType::Double),
			_ => None,
		}
	}
}

impl AsRef<str> for AttributeType {
	fn as_ref(&self) -> &str {
		self.name()
	}
}

impl Display for AttributeType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tags_round_trip() {
		for ty in AttributeType::ALL {
			assert_eq!(AttributeType::from_tag(ty.tag()), Some(ty));
		}
		assert_eq!(AttributeType::from_tag(0), None);
		assert_eq!(AttributeType::from_tag(4), None);
	}

	#[test]
	fn test_parse() {
		assert_eq!(AttributeType::parse("INTEGER"), Some(AttributeType::Integer));
		assert_eq!(AttributeType::parse("int"), Some(AttributeType::Integer));
		assert_eq!(AttributeType::parse("Varchar"), Some(AttributeType::Varchar));
		assert_eq!(AttributeType::parse("double"), Some(AttributeType::Double));
		assert_eq!(AttributeType::parse("BLOB"), None);
		assert_eq!(AttributeType::parse(""), None);
	}

	#[test]
	fn test_name_parses_back() {
		for ty in AttributeType::ALL {
			assert_eq!(AttributeType::parse(ty.as_ref()), Some(ty));
			assert_eq!(ty.to_string(), ty.name());
		}
	}
}
