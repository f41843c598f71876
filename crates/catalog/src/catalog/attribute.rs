// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{debug, info, instrument};

use crate::{AttributeType, Catalog, Result, StatusCode};

impl Catalog {
	#[instrument(name = "catalog::attribute::add", level = "debug", skip(self, attribute_type))]
	pub fn add_attribute(&self, table: &str, attribute: &str, attribute_type: impl AsRef<str>) -> Result<StatusCode> {
		let mut txn = self.store.begin();
		if !self.table_registered(&mut txn, table)? {
			return Ok(StatusCode::TableNotFound);
		}

		let mut schema = self.metadata.read_schema(&mut txn, table)?;
		if schema.attribute_exists(attribute) {
			return Ok(StatusCode::AttributeAlreadyExists);
		}

		let Some(ty) = AttributeType::parse(attribute_type.as_ref()) else {
			debug!(attribute_type = attribute_type.as_ref(), "unknown attribute type");
			return Ok(StatusCode::TableCreationAttributeInvalid);
		};

		schema.add_attribute(attribute, ty);
		self.metadata.write_schema(&mut txn, table, &schema)?;
		let version = txn.commit()?;

		info!(table, attribute, %ty, %version, "attribute added");
		Ok(StatusCode::Success)
	}

	#[instrument(name = "catalog::attribute::drop", level = "debug", skip(self))]
	pub fn drop_attribute(&self, table: &str, attribute: &str) -> Result<StatusCode> {
		let mut txn = self.store.begin();
		if !self.table_registered(&mut txn, table)? {
			return Ok(StatusCode::TableNotFound);
		}

		let mut schema = self.metadata.read_schema(&mut txn, table)?;
		if !schema.attribute_exists(attribute) {
			return Ok(StatusCode::AttributeNotFound);
		}
		if schema.is_primary_key(attribute) {
			return Ok(StatusCode::PrimaryKeyCannotDrop);
		}

		schema.remove_attribute(attribute);
		self.metadata.write_schema(&mut txn, table, &schema)?;
		let version = txn.commit()?;

		info!(table, attribute, %version, "attribute dropped");
		Ok(StatusCode::Success)
	}
}
