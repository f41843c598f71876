// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::Transaction;
use tracing::{instrument, trace};

use super::TABLE_PREFIX;
use crate::{Error, MetadataStore, Result, SchemaRecord};

impl MetadataStore {
	#[instrument(name = "catalog::store::schema::find", level = "trace", skip(self, txn))]
	pub fn find_schema(&self, txn: &mut Transaction, table: &str) -> Result<Option<SchemaRecord>> {
		let Some(bytes) = txn.get(&self.schema_key(table))? else {
			return Ok(None);
		};
		Ok(Some(SchemaRecord::decode(&bytes)?))
	}

	/// Like [`MetadataStore::find_schema`], but a missing record is an error.
	pub fn read_schema(&self, txn: &mut Transaction, table: &str) -> Result<SchemaRecord> {
		self.find_schema(txn, table)?.ok_or_else(|| Error::SchemaNotFound(table.to_string()))
	}

	#[instrument(name = "catalog::store::schema::write", level = "trace", skip(self, txn, schema))]
	pub fn write_schema(&self, txn: &mut Transaction, table: &str, schema: &SchemaRecord) -> Result<()> {
		txn.set(&self.schema_key(table), schema.encode()?)?;
		Ok(())
	}

	#[instrument(name = "catalog::store::schema::remove", level = "trace", skip(self, txn))]
	pub fn remove_schema(&self, txn: &mut Transaction, table: &str) -> Result<()> {
		txn.remove(&self.schema_key(table))?;
		Ok(())
	}

	/// Names of all tables that have a schema record, in key order.
	pub fn list_schema_names(&self, txn: &mut Transaction) -> Result<Vec<String>> {
		let entries = txn.range(self.directory().subrange(&[TABLE_PREFIX]))?;

		let mut result = Vec::with_capacity(entries.len());
		for (key, _) in entries {
			let elements = self.directory().unpack(&key)?;
			match elements.as_slice() {
				[prefix, name] if prefix == TABLE_PREFIX => result.push(name.clone()),
				_ => {
					return Err(Error::Inconsistent(format!(
						"unexpected key {:?} among schema records",
						elements
					)));
				}
			}
		}
		Ok(result)
	}

	/// Removes every entry of the catalog directory, registry included.
	#[instrument(name = "catalog::store::clear", level = "debug", skip(self, txn))]
	pub fn clear_all(&self, txn: &mut Transaction) -> Result<()> {
		txn.remove_range(self.directory().range())?;
		trace!(path = ?self.directory().path(), "catalog directory cleared");
		Ok(())
	}
}
