// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::Transaction;
use tracing::{instrument, trace};

use crate::{Error, MetadataStore, Result};

impl MetadataStore {
	/// Reads the table registry. `None` means the registry was never written,
	/// which is different from an empty registry.
	#[instrument(name = "catalog::store::registry::read", level = "trace", skip(self, txn))]
	pub fn read_table_names(&self, txn: &mut Transaction) -> Result<Option<Vec<String>>> {
		let Some(bytes) = txn.get(&self.table_name_list_key())? else {
			return Ok(None);
		};

		let names: Vec<String> = postcard::from_bytes(&bytes).map_err(|e| Error::Decode {
			what: "table name list",
			reason: e.to_string(),
		})?;
		trace!(count = names.len(), "table name list read");
		Ok(Some(names))
	}

	#[instrument(name = "catalog::store::registry::write", level = "trace", skip(self, txn, names))]
	pub fn write_table_names(&self, txn: &mut Transaction, names: &[String]) -> Result<()> {
		let bytes = postcard::to_stdvec(&names).map_err(|e| Error::Encode {
			what: "table name list",
			reason: e.to_string(),
		})?;
		txn.set(&self.table_name_list_key(), bytes)?;
		Ok(())
	}
}
