// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, instrument};

use crate::{AttributeType, Catalog, Result, SchemaRecord, StatusCode};

impl Catalog {
	/// Creates `table` with the given attributes and primary key.
	///
	/// `attribute_names` and `attribute_types` are parallel lists; types are
	/// given by name (see [`AttributeType::parse`]) and [`AttributeType`]
	/// values can be passed directly.
	#[instrument(
		name = "catalog::table::create",
		level = "debug",
		skip(self, attribute_names, attribute_types, primary_key)
	)]
	pub fn create_table<N, T>(
		&self,
		table: &str,
		attribute_names: &[N],
		attribute_types: &[T],
		primary_key: &[N],
	) -> Result<StatusCode>
	where
		N: AsRef<str>,
		T: AsRef<str>,
	{
		let schema = match build_schema(attribute_names, attribute_types, primary_key) {
			Ok(schema) => schema,
			Err(status) => {
				debug!(%status, "table definition rejected");
				return Ok(status);
			}
		};

		let mut txn = self.store.begin();
		let mut names = self.metadata.read_table_names(&mut txn)?.unwrap_or_default();
		if names.iter().any(|name| name == table) {
			debug!("table already exists");
			return Ok(StatusCode::TableAlreadyExists);
		}

		names.push(table.to_string());
		self.metadata.write_table_names(&mut txn, &names)?;
		self.metadata.write_schema(&mut txn, table, &schema)?;
		let version = txn.commit()?;

		info!(table, %version, "table created");
		Ok(StatusCode::Success)
	}

	#[instrument(name = "catalog::table::delete", level = "debug", skip(self))]
	pub fn delete_table(&self, table: &str) -> Result<StatusCode> {
		let mut txn = self.store.begin();
		let mut names = self.metadata.read_table_names(&mut txn)?.unwrap_or_default();
		let Some(position) = names.iter().position(|name| name == table) else {
			return Ok(StatusCode::TableNotFound);
		};

		names.remove(position);
		self.metadata.write_table_names(&mut txn, &names)?;
		self.metadata.remove_schema(&mut txn, table)?;
		let version = txn.commit()?;

		info!(table, %version, "table deleted");
		Ok(StatusCode::Success)
	}

	/// Every registered table with its schema, keyed by table name.
	#[instrument(name = "catalog::table::list", level = "trace", skip(self))]
	pub fn list_tables(&self) -> Result<BTreeMap<String, SchemaRecord>> {
		let mut txn = self.store.begin();
		let names = self.metadata.read_table_names(&mut txn)?.unwrap_or_default();

		let mut result = BTreeMap::new();
		for name in names {
			let schema = self.metadata.read_schema(&mut txn, &name)?;
			result.insert(name, schema);
		}
		Ok(result)
	}

	#[instrument(name = "catalog::table::find", level = "trace", skip(self))]
	pub fn find_table(&self, table: &str) -> Result<Option<SchemaRecord>> {
		let mut txn = self.store.begin();
		if !self.table_registered(&mut txn, table)? {
			return Ok(None);
		}
		Ok(Some(self.metadata.read_schema(&mut txn, table)?))
	}

	/// Table names in creation order.
	pub fn table_names(&self) -> Result<Vec<String>> {
		let mut txn = self.store.begin();
		Ok(self.metadata.read_table_names(&mut txn)?.unwrap_or_default())
	}
}

/// Checks a table definition in a fixed order and builds its schema record.
/// The first violation found is returned.
fn build_schema<N, T>(
	attribute_names: &[N],
	attribute_types: &[T],
	primary_key: &[N],
) -> std::result::Result<SchemaRecord, StatusCode>
where
	N: AsRef<str>,
	T: AsRef<str>,
{
	if primary_key.is_empty() {
		return Err(StatusCode::TableCreationAttributeInvalid);
	}

	if attribute_names.len() != attribute_types.len() {
		return Err(StatusCode::TableCreationAttributeNumMismatch);
	}

	let declared: BTreeSet<&str> = attribute_names.iter().map(|name| name.as_ref()).collect();
	if primary_key.iter().any(|key| !declared.contains(key.as_ref())) {
		return Err(StatusCode::TableCreationPrimaryKeyNotFound);
	}

	let mut attributes = Vec::with_capacity(attribute_names.len());
	for (name, ty) in attribute_names.iter().zip(attribute_types) {
		let Some(ty) = AttributeType::parse(ty.as_ref()) else {
			return Err(StatusCode::TableCreationAttributeInvalid);
		};
		attributes.push((name.as_ref(), ty));
	}

	if declared.len() != attribute_names.len() {
		return Err(StatusCode::TableCreationAttributeInvalid);
	}

	Ok(SchemaRecord::new(attributes, primary_key.iter().map(|key| key.as_ref())))
}

#[cfg(test)]
mod tests {
	use super::build_schema;
	use crate::{
		AttributeType::{Double, Integer, Varchar},
		StatusCode,
		test_utils::{EMPLOYEE, create_employee_table, create_test_catalog},
	};

	#[test]
	fn test_create_and_find() {
		let catalog = create_test_catalog();
		create_employee_table(&catalog);

		let schema = catalog.find_table(EMPLOYEE).unwrap().unwrap();
		assert_eq!(schema.attribute_type("SSN"), Some(Integer));
		assert_eq!(schema.attribute_type("Name"), Some(Varchar));
		assert_eq!(schema.primary_key(), ["SSN"]);
	}

	#[test]
	fn test_create_with_type_names() {
		let catalog = create_test_catalog();
		let status = catalog.create_table("Account", &["id", "balance"], &["int", "double"], &["id"]).unwrap();
		assert_eq!(status, StatusCode::Success);

		let schema = catalog.find_table("Account").unwrap().unwrap();
		assert_eq!(schema.attribute_type("id"), Some(Integer));
		assert_eq!(schema.attribute_type("balance"), Some(Double));
	}

	#[test]
	fn test_create_twice() {
		let catalog = create_test_catalog();
		create_employee_table(&catalog);

		let status = catalog.create_table(EMPLOYEE, &["Other"], &[Double], &["Other"]).unwrap();
		assert_eq!(status, StatusCode::TableAlreadyExists);

		let schema = catalog.find_table(EMPLOYEE).unwrap().unwrap();
		assert!(schema.attribute_exists("SSN"));
		assert!(!schema.attribute_exists("Other"));
		assert_eq!(catalog.table_names().unwrap(), [EMPLOYEE]);
	}

	#[test]
	fn test_rejected_definitions_leave_no_trace() {
		let catalog = create_test_catalog();
		let version = catalog.store().version();

		let status = catalog.create_table("T", &["a", "b"], &[Integer], &["a"]).unwrap();
		assert_eq!(status, StatusCode::TableCreationAttributeNumMismatch);

		assert!(catalog.find_table("T").unwrap().is_none());
		assert!(catalog.list_tables().unwrap().is_empty());
		assert_eq!(catalog.store().version(), version);
	}

	#[test]
	fn test_build_schema_empty_primary_key() {
		let empty: [&str; 0] = [];
		assert_eq!(build_schema(&["a"], &["INTEGER"], &empty), Err(StatusCode::TableCreationAttributeInvalid));
	}

	#[test]
	fn test_build_schema_count_mismatch() {
		assert_eq!(
			build_schema(&["a", "b"], &["INTEGER"], &["a"]),
			Err(StatusCode::TableCreationAttributeNumMismatch)
		);
	}

	#[test]
	fn test_build_schema_primary_key_not_declared() {
		assert_eq!(
			build_schema(&["a"], &["INTEGER"], &["b"]),
			Err(StatusCode::TableCreationPrimaryKeyNotFound)
		);
	}

	#[test]
	fn test_build_schema_unknown_type() {
		assert_eq!(build_schema(&["a"], &["BLOB"], &["a"]), Err(StatusCode::TableCreationAttributeInvalid));
	}

	#[test]
	fn test_build_schema_duplicate_attribute() {
		assert_eq!(
			build_schema(&["a", "a"], &["INTEGER", "DOUBLE"], &["a"]),
			Err(StatusCode::TableCreationAttributeInvalid)
		);
	}

	#[test]
	fn test_build_schema_check_order() {
		// mismatch wins over the missing key and the unknown type
		assert_eq!(
			build_schema(&["a", "b"], &["BLOB"], &["c"]),
			Err(StatusCode::TableCreationAttributeNumMismatch)
		);
		// missing key wins over the unknown type
		assert_eq!(build_schema(&["a"], &["BLOB"], &["c"]), Err(StatusCode::TableCreationPrimaryKeyNotFound));
	}

	#[test]
	fn test_delete() {
		let catalog = create_test_catalog();
		create_employee_table(&catalog);

		assert_eq!(catalog.delete_table(EMPLOYEE).unwrap(), StatusCode::Success);
		assert!(catalog.find_table(EMPLOYEE).unwrap().is_none());
		assert!(catalog.table_names().unwrap().is_empty());

		let mut txn = catalog.store().begin();
		assert_eq!(catalog.metadata().find_schema(&mut txn, EMPLOYEE).unwrap(), None);
	}

	#[test]
	fn test_delete_missing() {
		let catalog = create_test_catalog();
		assert_eq!(catalog.delete_table(EMPLOYEE).unwrap(), StatusCode::TableNotFound);
	}

	#[test]
	fn test_delete_keeps_order_of_others() {
		let catalog = create_test_catalog();
		for name in ["c", "a", "b"] {
			assert_eq!(catalog.create_table(name, &["id"], &[Integer], &["id"]).unwrap(), StatusCode::Success);
		}

		assert_eq!(catalog.delete_table("a").unwrap(), StatusCode::Success);
		assert_eq!(catalog.table_names().unwrap(), ["c", "b"]);
	}

	#[test]
	fn test_list() {
		let catalog = create_test_catalog();
		create_employee_table(&catalog);
		catalog.create_table("Dept", &["id", "title"], &[Integer, Varchar], &["id"]).unwrap();

		let tables = catalog.list_tables().unwrap();
		let names: Vec<&str> = tables.keys().map(String::as_str).collect();
		assert_eq!(names, ["Dept", EMPLOYEE]);
		assert_eq!(tables["Dept"].primary_key(), ["id"]);
	}

	#[test]
	fn test_recreate_after_delete() {
		let catalog = create_test_catalog();
		create_employee_table(&catalog);
		catalog.delete_table(EMPLOYEE).unwrap();

		let status = catalog.create_table(EMPLOYEE, &["id"], &[Double], &["id"]).unwrap();
		assert_eq!(status, StatusCode::Success);
		let schema = catalog.find_table(EMPLOYEE).unwrap().unwrap();
		assert!(!schema.attribute_exists("SSN"));
		assert_eq!(schema.attribute_type("id"), Some(Double));
	}
}
