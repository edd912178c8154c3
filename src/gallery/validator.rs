//! Validator Module
//!
//! Content fingerprints used as strong `ETag` values, and the exact-match
//! rule applied to `If-None-Match`.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;

// == Compute Validator ==
/// Computes a strong entity tag over the JSON serialization of `payload`.
///
/// Payloads that serialize identically always get the same validator. The
/// value is quoted so it can be sent as an `ETag` header as-is.
pub fn compute_validator<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    let bytes = serde_json::to_vec(payload)?;
    Ok(validator_for_bytes(&bytes))
}

// == Validator For Bytes ==
/// Validator for an already-serialized body.
pub fn validator_for_bytes(body: &[u8]) -> String {
    let digest = Sha256::digest(body);
    format!("\"{}\"", hex::encode(&digest[..16]))
}

// == Matches ==
/// Exact, byte-for-byte comparison of a conditional header with a validator.
///
/// No weak-validator handling, no `*`, no comma-separated lists.
pub fn matches(conditional: Option<&str>, validator: &str) -> bool {
    conditional == Some(validator)
}
