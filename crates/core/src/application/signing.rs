// Request Signing
// sig = hex(sha256(api_key || secret || unix_seconds))

use sha2::{Digest, Sha256};

/// Wire parameter carrying the signature
pub const SIGNATURE_PARAM: &str = "sig";

/// Compute the request signature
///
/// Deterministic for identical key, secret and timestamp; the timestamp has
/// second resolution, so two calls within the same second share a signature.
pub fn sign(api_key: &str, secret: &str, unix_secs: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hasher.update(secret.as_bytes());
    hasher.update(unix_secs.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}
