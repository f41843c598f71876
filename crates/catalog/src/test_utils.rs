// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::Store;

use crate::{
	AttributeType::{Integer, Varchar},
	Catalog, CatalogConfig, StatusCode,
};

pub const EMPLOYEE: &str = "Employee";

pub fn create_test_catalog() -> Catalog {
	Catalog::open(Store::memory(), &CatalogConfig::default()).unwrap()
}

/// `Employee(SSN INTEGER, Name VARCHAR)` keyed by `SSN`.
pub fn create_employee_table(catalog: &Catalog) {
	let status = catalog.create_table(EMPLOYEE, &["SSN", "Name"], &[Integer, Varchar], &["SSN"]).unwrap();
	assert_eq!(status, StatusCode::Success);
}
