// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Byte layout of a [`SchemaRecord`]: one format byte followed by a postcard
//! body holding the `(name, type tag)` pairs in name order and the primary key
//! names in key order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SchemaRecord;
use crate::{AttributeType, Error, Result};

pub const FORMAT_VERSION: u8 = 1;

const WHAT: &str = "schema record";

#[derive(Serialize, Deserialize)]
struct Layout {
	attributes: Vec<(String, u8)>,
	primary_key: Vec<String>,
}

impl SchemaRecord {
	pub fn encode(&self) -> Result<Vec<u8>> {
		let layout = Layout {
			attributes: self.attributes.iter().map(|(name, ty)| (name.clone(), ty.tag())).collect(),
			primary_key: self.primary_key.clone(),
		};

		let body = postcard::to_stdvec(&layout).map_err(|e| Error::Encode {
			what: WHAT,
			reason: e.to_string(),
		})?;

		let mut out = Vec::with_capacity(body.len() + 1);
		out.push(FORMAT_VERSION);
		out.extend_from_slice(&body);
		Ok(out)
	}

	pub fn decode(bytes: &[u8]) -> Result<Self> {
		let Some((&version, body)) = bytes.split_first() else {
			return Err(decode_error("empty input"));
		};
		if version != FORMAT_VERSION {
			return Err(decode_error(format!("unsupported format version {version}")));
		}

		let (layout, rest) = postcard::take_from_bytes::<Layout>(body).map_err(decode_error)?;
		if !rest.is_empty() {
			return Err(decode_error(format!("{} trailing bytes", rest.len())));
		}

		let mut attributes = BTreeMap::new();
		for (name, tag) in layout.attributes {
			let Some(ty) = AttributeType::from_tag(tag) else {
				return Err(decode_error(format!("unknown type tag {tag} for attribute '{name}'")));
			};
			if attributes.insert(name.clone(), ty).is_some() {
				return Err(decode_error(format!("duplicate attribute '{name}'")));
			}
		}

		Ok(SchemaRecord {
			attributes,
			primary_key: layout.primary_key,
		})
	}
}

fn decode_error(reason: impl ToString) -> Error {
	Error::Decode {
		what: WHAT,
		reason: reason.to_string(),
	}
}
