// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use crate::{AttributeType, StatusCode};

mod codec;

pub use codec::FORMAT_VERSION;

/// Attributes and primary key of one table.
///
/// Attribute names are unique and iterate in name order. The primary key is
/// an ordered list of attribute names; the catalog keeps it non-empty and
/// keeps every name in it present among the attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SchemaRecord {
	attributes: BTreeMap<String, AttributeType>,
	primary_key: Vec<String>,
}

impl SchemaRecord {
	pub fn new<N, K>(attributes: impl IntoIterator<Item = (N, AttributeType)>, primary_key: impl IntoIterator<Item = K>) -> Self
	where
		N: Into<String>,
		K: Into<String>,
	{
		Self {
			attributes: attributes.into_iter().map(|(name, ty)| (name.into(), ty)).collect(),
			primary_key: primary_key.into_iter().map(Into::into).collect(),
		}
	}

	pub fn attribute_exists(&self, name: &str) -> bool {
		self.attributes.contains_key(name)
	}

	pub fn attribute_type(&self, name: &str) -> Option<AttributeType> {
		self.attributes.get(name).copied()
	}

	/// Inserts or replaces the attribute `name`.
	pub fn add_attribute(&mut self, name: impl Into<String>, ty: AttributeType) {
		self.attributes.insert(name.into(), ty);
	}

	/// Removes the attribute `name`; the primary key is left untouched.
	pub fn remove_attribute(&mut self, name: &str) -> Option<AttributeType> {
		self.attributes.remove(name)
	}

	pub fn attributes(&self) -> &BTreeMap<String, AttributeType> {
		&self.attributes
	}

	pub fn primary_key(&self) -> &[String] {
		&self.primary_key
	}

	pub fn is_primary_key(&self, name: &str) -> bool {
		self.primary_key.iter().any(|key| key == name)
	}

	/// Replaces the primary key. Every name must already be an attribute,
	/// otherwise the record is left unchanged.
	pub fn set_primary_key<K: Into<String>>(&mut self, names: impl IntoIterator<Item = K>) -> StatusCode {
		let names: Vec<String> = names.into_iter().map(Into::into).collect();
		if names.iter().any(|name| !self.attribute_exists(name)) {
			return StatusCode::AttributeNotFound;
		}
		self.primary_key = names;
		StatusCode::Success
	}
}
