// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Once;

use tabula_catalog::{Catalog, CatalogConfig, Result, StatusCode};
use tabula_store::Store;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a test-writer subscriber once per test binary; `RUST_LOG`
/// overrides the default `warn` filter.
pub fn init_tracing() {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
		let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
	});
}

pub fn open_catalog() -> Catalog {
	init_tracing();
	Catalog::open(Store::memory(), &CatalogConfig::default()).unwrap()
}

/// Re-runs `f` while it fails with a retryable error.
#[allow(dead_code)]
pub fn retry<F>(mut f: F) -> Result<StatusCode>
where
	F: FnMut() -> Result<StatusCode>,
{
	loop {
		match f() {
			Err(err) if err.is_retryable() => continue,
			result => return result,
		}
	}
}
