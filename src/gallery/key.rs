//! Cache Key Module
//!
//! Derives the cache key of a gallery request from its path and raw query
//! string. Query components are percent-decoded to bytes and re-encoded
//! canonically, so equivalent spellings share a key and distinct byte
//! sequences never collide.

use percent_encoding::{percent_decode_str, percent_encode, NON_ALPHANUMERIC};

// == Derive Cache Key ==
/// Derives a cache key from a resource path and its raw query string.
///
/// Parameters are sorted by decoded name, then value, so two requests that
/// differ only in parameter order share a key. `+` decodes to a space as in
/// form encoding. Pairs with an empty name are dropped. The key is `path`
/// alone when no parameters remain.
pub fn derive_cache_key(path: &str, raw_query: Option<&str>) -> String {
    let mut pairs: Vec<(Vec<u8>, Vec<u8>)> = raw_query
        .unwrap_or_default()
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (name, value) = part.split_once('=').unwrap_or((part, ""));
            (decode_component(name), decode_component(value))
        })
        .filter(|(name, _)| !name.is_empty())
        .collect();

    if pairs.is_empty() {
        return path.to_string();
    }

    pairs.sort_unstable();

    let normalized = pairs
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                percent_encode(name, NON_ALPHANUMERIC),
                percent_encode(value, NON_ALPHANUMERIC)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", path, normalized)
}

// Raw bytes, not UTF-8: `%FF` and `%FE` must stay distinct
fn decode_component(raw: &str) -> Vec<u8> {
    percent_decode_str(&raw.replace('+', " ")).collect()
}
