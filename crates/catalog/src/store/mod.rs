// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Persistence of catalog state inside a store directory.
//!
//! Two kinds of entries live in the directory:
//!
//! * `("table_name_list")` holds the table registry, a postcard list of names
//!   in creation order.
//! * `("__table_", <name>)` holds the encoded [`crate::SchemaRecord`] of one
//!   table.
//!
//! Every method takes the caller's transaction; nothing here commits.

use tabula_store::{Directory, EncodedKey};

mod registry;
mod schema;

pub(crate) const TABLE_NAME_LIST: &str = "table_name_list";
pub(crate) const TABLE_PREFIX: &str = "__table_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataStore {
	directory: Directory,
}

impl MetadataStore {
	pub fn new(directory: Directory) -> Self {
		Self {
			directory,
		}
	}

	pub fn directory(&self) -> &Directory {
		&self.directory
	}

	fn table_name_list_key(&self) -> EncodedKey {
		self.directory.pack(&[TABLE_NAME_LIST])
	}

	fn schema_key(&self, table: &str) -> EncodedKey {
		self.directory.pack(&[TABLE_PREFIX, table])
	}
}
