// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_DIRECTORY: &str = "dbMetadata";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
	/// Store directory holding the table registry and the schema records.
	pub directory: Vec<String>,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			directory: vec![DEFAULT_DIRECTORY.to_string()],
		}
	}
}

impl CatalogConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn directory<S: Into<String>>(mut self, path: impl IntoIterator<Item = S>) -> Self {
		self.directory = path.into_iter().map(Into::into).collect();
		self
	}

	pub fn from_json(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.directory.is_empty() {
			return Err(Error::Config("directory path must not be empty".to_string()));
		}
		if self.directory.iter().any(String::is_empty) {
			return Err(Error::Config("directory path elements must not be empty".to_string()));
		}
		Ok(())
	}
}
