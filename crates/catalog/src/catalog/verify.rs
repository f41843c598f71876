// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::{Catalog, Error, Result};

impl Catalog {
	/// Checks that the registry and the schema records agree: every
	/// registered table has a decodable record with a non-empty primary key
	/// drawn from its attributes, and every record belongs to a registered
	/// table.
	#[instrument(name = "catalog::verify", level = "debug", skip(self))]
	pub fn verify(&self) -> Result<()> {
		let mut txn = self.store.begin();
		let Some(names) = self.metadata.read_table_names(&mut txn)? else {
			return Err(Error::Inconsistent("table name list is missing".to_string()));
		};

		let mut registered = BTreeSet::new();
		for name in &names {
			if !registered.insert(name.as_str()) {
				return Err(Error::Inconsistent(format!("table '{name}' is registered twice")));
			}
		}

		let stored = self.metadata.list_schema_names(&mut txn)?;
		for name in &stored {
			if !registered.contains(name.as_str()) {
				return Err(Error::Inconsistent(format!("schema record for unregistered table '{name}'")));
			}
		}

		for name in &names {
			let Some(schema) = self.metadata.find_schema(&mut txn, name)? else {
				return Err(Error::Inconsistent(format!("table '{name}' has no schema record")));
			};
			if schema.primary_key().is_empty() {
				return Err(Error::Inconsistent(format!("table '{name}' has an empty primary key")));
			}
			if let Some(key) = schema.primary_key().iter().find(|key| !schema.attribute_exists(key)) {
				return Err(Error::Inconsistent(format!(
					"primary key '{key}' of table '{name}' is not an attribute"
				)));
			}
		}

		debug!(tables = names.len(), "catalog verified");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		AttributeType::Integer,
		Error, SchemaRecord,
		test_utils::{EMPLOYEE, create_employee_table, create_test_catalog},
	};

	#[test]
	fn test_fresh_catalog_is_consistent() {
		let catalog = create_test_catalog();
		catalog.verify().unwrap();
	}

	#[test]
	fn test_consistent_after_operations() {
		let catalog = create_test_catalog();
		create_employee_table(&catalog);
		catalog.create_table("Dept", &["id"], &[Integer], &["id"]).unwrap();
		catalog.add_attribute(EMPLOYEE, "Age", Integer).unwrap();
		catalog.drop_attribute(EMPLOYEE, "Name").unwrap();
		catalog.delete_table("Dept").unwrap();
		catalog.verify().unwrap();

		catalog.drop_all_tables().unwrap();
		catalog.verify().unwrap();
	}

	#[test]
	fn test_registered_without_record() {
		let catalog = create_test_catalog();
		create_employee_table(&catalog);

		let mut txn = catalog.store().begin();
		catalog.metadata().remove_schema(&mut txn, EMPLOYEE).unwrap();
		txn.commit().unwrap();

		let err = catalog.verify().unwrap_err();
		assert!(matches!(err, Error::Inconsistent(ref reason) if reason.contains("has no schema record")));
		assert!(matches!(catalog.list_tables(), Err(Error::SchemaNotFound(_))));
	}

	#[test]
	fn test_record_without_registration() {
		let catalog = create_test_catalog();

		let mut txn = catalog.store().begin();
		let schema = SchemaRecord::new([("id", Integer)], ["id"]);
		catalog.metadata().write_schema(&mut txn, "Ghost", &schema).unwrap();
		txn.commit().unwrap();

		let err = catalog.verify().unwrap_err();
		assert_eq!(err.to_string(), "catalog inconsistency: schema record for unregistered table 'Ghost'");
		assert!(catalog.find_table("Ghost").unwrap().is_none());
	}

	#[test]
	fn test_primary_key_outside_attributes() {
		let catalog = create_test_catalog();
		create_employee_table(&catalog);

		let mut txn = catalog.store().begin();
		let schema = SchemaRecord::new([("Name", Integer)], ["SSN"]);
		catalog.metadata().write_schema(&mut txn, EMPLOYEE, &schema).unwrap();
		txn.commit().unwrap();

		let err = catalog.verify().unwrap_err();
		assert!(err.to_string().contains("primary key 'SSN' of table 'Employee' is not an attribute"));
	}

	#[test]
	fn test_missing_registry() {
		let catalog = create_test_catalog();

		let mut txn = catalog.store().begin();
		catalog.metadata().clear_all(&mut txn).unwrap();
		txn.commit().unwrap();

		let err = catalog.verify().unwrap_err();
		assert!(err.to_string().contains("table name list is missing"));
	}
}
