//! HMAC-SHA256 request signing.
//!
//! The gateway verifies every request against a signature computed from the
//! full parameter set. The canonical string is deterministic: parameter keys
//! are sorted in ascending byte-wise order and each key is immediately
//! followed by its value, with no separators. Operation identifiers that
//! contain a path separator (`/`) are prefixed verbatim to the canonical
//! string; plain method-style identifiers are not.
//!
//! The `sign` parameter itself is never part of the signed set; it is
//! computed last and merged in afterward by the client.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use aliexpress_api::auth::sign;
//!
//! let mut params = BTreeMap::new();
//! params.insert("app_key".to_string(), "33505222".to_string());
//! params.insert("timestamp".to_string(), "1690000000000".to_string());
//!
//! let signature = sign("my-secret", "aliexpress.solution.order.get", &params);
//! assert_eq!(signature.len(), 64); // SHA256 produces 32 bytes = 64 hex chars
//! assert!(signature.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
//! ```

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the request signature for the given operation and parameters.
///
/// The result is deterministic: identical secret, operation, and parameter
/// set always produce the identical signature, regardless of how the map was
/// populated. The timestamp is one of the *input* parameters; this function
/// itself has no hidden state, randomness, or clock dependency.
///
/// # Arguments
///
/// * `secret` - The app secret used as the HMAC key
/// * `operation` - The operation identifier (API method name or path)
/// * `params` - Every parameter that will be sent, excluding `sign` itself
///
/// # Returns
///
/// An uppercase hex-encoded HMAC-SHA256 signature (64 characters).
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use aliexpress_api::auth::sign;
///
/// let signature = sign("secret", "api.test", &BTreeMap::new());
/// assert_eq!(signature.len(), 64);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn sign(secret: &str, operation: &str, params: &BTreeMap<String, String>) -> String {
    let canonical = canonical_string(operation, params);
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(canonical.as_bytes());
    hex::encode_upper(mac.finalize().into_bytes())
}

/// Builds the canonical string that gets signed.
///
/// An empty parameter map yields the operation prefix alone, or the empty
/// string for identifiers without a path separator.
fn canonical_string(operation: &str, params: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    if operation.contains('/') {
        out.push_str(operation);
    }
    for (key, value) in params {
        out.push_str(key);
        out.push_str(value);
    }
    out
}

// Internal hex encoding since we don't want to add another dependency
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

    pub fn encode_upper(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_canonical_string_sorts_keys_bytewise() {
        let p = params(&[("b", "2"), ("a", "1"), ("aa", "3")]);
        assert_eq!(canonical_string("api.name", &p), "a1aa3b2");
    }

    #[test]
    fn test_canonical_string_prefixes_path_style_operations() {
        let p = params(&[("a", "1")]);
        assert_eq!(canonical_string("/auth/token/create", &p), "/auth/token/createa1");
        assert_eq!(canonical_string("api.name", &p), "a1");
    }

    #[test]
    fn test_canonical_string_empty_params() {
        let p = BTreeMap::new();
        assert_eq!(canonical_string("api.name", &p), "");
        assert_eq!(canonical_string("/auth/token/create", &p), "/auth/token/create");
    }

    #[test]
    fn test_sign_produces_64_uppercase_hex_chars() {
        let sig = sign("secret", "api.test", &params(&[("a", "1")]));
        assert_eq!(sig.len(), 64);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_sign_matches_known_hmac_vector() {
        // HMAC-SHA256("message", "key"), uppercased. A single parameter named
        // "messag" with value "e" canonicalizes to "message".
        let sig = sign("key", "api.test", &params(&[("messag", "e")]));
        assert_eq!(
            sig,
            "6E9EF29B75FFFC5B7ABAE527D58FDADB2FE42E7219011976917343065F58ED4A"
        );
    }

    #[test]
    fn test_sign_known_value_two_params() {
        let sig = sign("sek", "api.name", &params(&[("b", "2"), ("a", "1")]));
        assert_eq!(
            sig,
            "1D526F12AE87FE739D52C45BE99C7156F9E7E604425A53F03757B36AC812AD52"
        );
    }

    #[test]
    fn test_sign_empty_params_hashes_prefix_alone() {
        let no_prefix = sign("secret123", "api.test", &BTreeMap::new());
        assert_eq!(
            no_prefix,
            "0F4B258683A3A61038F955720A245894F3EF5462F5045B22735F5FAF1594053D"
        );

        let with_prefix = sign("secret123", "/auth/token/create", &BTreeMap::new());
        assert_eq!(
            with_prefix,
            "5E16D6FFAECC2D6E0326A273BBE4D72CCC535B094A8AD2201505E811686E8FF2"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let p = params(&[("app_key", "33505222"), ("timestamp", "1690000000000")]);
        let first = sign("secret", "api.test", &p);
        for _ in 0..10 {
            assert_eq!(sign("secret", "api.test", &p), first);
        }
    }

    #[test]
    fn test_sign_independent_of_insertion_order() {
        let forward = params(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let mut reverse = BTreeMap::new();
        reverse.insert("c".to_string(), "3".to_string());
        reverse.insert("b".to_string(), "2".to_string());
        reverse.insert("a".to_string(), "1".to_string());

        assert_eq!(
            sign("secret", "api.test", &forward),
            sign("secret", "api.test", &reverse)
        );
    }
}
