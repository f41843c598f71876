// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::{Directory, Store, Transaction};
use tracing::{debug, info, instrument};

use crate::{CatalogConfig, MetadataStore, Result};

mod attribute;
mod reset;
mod table;
mod verify;

/// Handle to the table catalog.
///
/// Cheap to clone; clones share the underlying store. Each operation opens,
/// commits or abandons its own transaction.
#[derive(Clone)]
pub struct Catalog {
	store: Store,
	metadata: MetadataStore,
}

impl Catalog {
	/// Opens the catalog directory named in `config`, creating it and an empty
	/// table registry on first use.
	#[instrument(name = "catalog::open", level = "info", skip(store))]
	pub fn open(store: Store, config: &CatalogConfig) -> Result<Self> {
		config.validate()?;

		let path: Vec<&str> = config.directory.iter().map(String::as_str).collect();
		let directory = open_directory(&store, &path)?;

		let catalog = Self {
			store,
			metadata: MetadataStore::new(directory),
		};
		catalog.bootstrap()?;

		info!(path = ?config.directory, "catalog opened");
		Ok(catalog)
	}

	pub fn store(&self) -> &Store {
		&self.store
	}

	pub fn metadata(&self) -> &MetadataStore {
		&self.metadata
	}

	/// Writes an empty registry if none exists. Running it again, or from
	/// several handles at once, leaves a single empty registry.
	fn bootstrap(&self) -> Result<()> {
		loop {
			let mut txn = self.store.begin();
			if self.metadata.read_table_names(&mut txn)?.is_some() {
				return Ok(());
			}

			self.metadata.write_table_names(&mut txn, &[])?;
			match txn.commit() {
				Ok(version) => {
					debug!(%version, "empty table name list written");
					return Ok(());
				}
				// another handle wrote it first; the next pass sees it
				Err(err) if err.is_retryable() => continue,
				Err(err) => return Err(err.into()),
			}
		}
	}

	fn table_registered(&self, txn: &mut Transaction, table: &str) -> Result<bool> {
		let names = self.metadata.read_table_names(txn)?.unwrap_or_default();
		Ok(names.iter().any(|name| name == table))
	}
}

fn open_directory(store: &Store, path: &[&str]) -> Result<Directory> {
	loop {
		match store.directory(path) {
			Ok(directory) => return Ok(directory),
			Err(err) if err.is_retryable() => continue,
			Err(err) => return Err(err.into()),
		}
	}
}

#[cfg(test)]
mod tests {
	use tabula_store::Store;

	use crate::{Catalog, CatalogConfig, Error, test_utils::create_employee_table};

	#[test]
	fn test_open_writes_empty_registry() {
		let catalog = Catalog::open(Store::memory(), &CatalogConfig::default()).unwrap();
		let mut txn = catalog.store().begin();
		assert_eq!(catalog.metadata().read_table_names(&mut txn).unwrap(), Some(vec![]));
		assert_eq!(catalog.metadata().directory().path(), ["dbMetadata"]);
	}

	#[test]
	fn test_open_is_idempotent() {
		let store = Store::memory();
		let catalog = Catalog::open(store.clone(), &CatalogConfig::default()).unwrap();
		create_employee_table(&catalog);

		let version = store.version();
		let reopened = Catalog::open(store, &CatalogConfig::default()).unwrap();
		assert_eq!(reopened.store().version(), version);
		assert_eq!(reopened.metadata(), catalog.metadata());
		assert!(reopened.find_table("Employee").unwrap().is_some());
	}

	#[test]
	fn test_open_rejects_invalid_config() {
		let config = CatalogConfig::new().directory(Vec::<String>::new());
		let result = Catalog::open(Store::memory(), &config);
		assert!(matches!(result, Err(Error::Config(_))));
	}

	#[test]
	fn test_separate_directories_are_isolated() {
		let store = Store::memory();
		let first = Catalog::open(store.clone(), &CatalogConfig::new().directory(["first"])).unwrap();
		let second = Catalog::open(store, &CatalogConfig::new().directory(["second"])).unwrap();

		create_employee_table(&first);
		assert!(first.find_table("Employee").unwrap().is_some());
		assert!(second.find_table("Employee").unwrap().is_none());
		assert!(second.list_tables().unwrap().is_empty());
	}
}
