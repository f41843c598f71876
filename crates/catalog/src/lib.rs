// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Table catalog layered on the transactional store.
//!
//! The catalog keeps two coupled pieces of state inside one directory of the
//! store: the registry of table names and one schema record per table. Every
//! public operation runs in a single transaction, so the registry and the
//! records always change together; concurrent writers that race on the same
//! state are rejected by the store's conflict detection at commit.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use attribute::AttributeType;
pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::Error;
pub use schema::SchemaRecord;
pub use status::StatusCode;
pub use store::MetadataStore;

mod attribute;
mod catalog;
mod config;
mod error;
pub mod schema;
mod status;
pub mod store;
pub mod test_utils;

pub type Result<T> = std::result::Result<T, Error>;
