// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Keycode is a lexicographical order-preserving binary encoding for tuple
//! elements inside keys. Ordering matters because it allows range scans over
//! every key that shares a leading set of elements.
//!
//! The encoding is not self-describing: the caller must know which element
//! type comes next.
//!
//! * `u64`: big-endian binary representation.
//! * byte strings: `0x00` escaped as `0x00ff`, terminated with `0x0000`.
//! * `str`: like byte strings, UTF-8 validated on decode.
//!
//! Because of the terminator, the encoding of a tuple is always a prefix of
//! the encoding of any longer tuple that starts with the same elements.

use crate::{Error, Result};

pub fn encode_u64(out: &mut Vec<u8>, value: u64) {
	out.extend_from_slice(&value.to_be_bytes());
}

pub fn encode_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
	for &b in bytes {
		match b {
			0x00 => out.extend_from_slice(&[0x00, 0xff]),
			b => out.push(b),
		}
	}
	out.extend_from_slice(&[0x00, 0x00]);
}

pub fn encode_str(out: &mut Vec<u8>, s: &str) {
	encode_bytes(out, s.as_bytes())
}

/// Decodes a u64 from the front of `input`, advancing it.
pub fn decode_u64(input: &mut &[u8]) -> Result<u64> {
	let bytes: &[u8] = *input;
	if bytes.len() < 8 {
		return Err(Error::InvalidKey(format!("expected 8 bytes for u64, got {}", bytes.len())));
	}
	let (head, rest) = bytes.split_at(8);
	let mut buf = [0u8; 8];
	buf.copy_from_slice(head);
	*input = rest;
	Ok(u64::from_be_bytes(buf))
}

/// Decodes an escaped byte string from the front of `input`, advancing it
/// past the terminator.
pub fn decode_bytes(input: &mut &[u8]) -> Result<Vec<u8>> {
	let bytes: &[u8] = *input;
	let mut decoded = Vec::new();
	let mut iter = bytes.iter().enumerate();
	loop {
		match iter.next() {
			Some((_, 0x00)) => match iter.next() {
				Some((i, 0x00)) => {
					*input = &bytes[i + 1..];
					return Ok(decoded);
				}
				Some((_, 0xff)) => decoded.push(0x00),
				Some((_, b)) => {
					return Err(Error::InvalidKey(format!("invalid escape sequence 0x00{:02x}", b)));
				}
				None => return Err(Error::InvalidKey("unterminated byte string".to_string())),
			},
			Some((_, &b)) => decoded.push(b),
			None => return Err(Error::InvalidKey("unterminated byte string".to_string())),
		}
	}
}

pub fn decode_str(input: &mut &[u8]) -> Result<String> {
	let bytes = decode_bytes(input)?;
	String::from_utf8(bytes).map_err(|e| Error::InvalidKey(e.to_string()))
}
