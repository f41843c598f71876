// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{instrument, warn};

use crate::{Catalog, Result, StatusCode};

impl Catalog {
	/// Removes every table and leaves an empty registry behind.
	#[instrument(name = "catalog::drop_all", level = "debug", skip(self))]
	pub fn drop_all_tables(&self) -> Result<StatusCode> {
		let mut txn = self.store.begin();
		let count = self.metadata.read_table_names(&mut txn)?.map_or(0, |names| names.len());

		self.metadata.clear_all(&mut txn)?;
		self.metadata.write_table_names(&mut txn, &[])?;
		let version = txn.commit()?;

		warn!(count, %version, "all tables dropped");
		Ok(StatusCode::Success)
	}
}
