//! Correlation id policy: keep a live id, never echo the placeholder.

use rand::RngCore;
use rand::rngs::OsRng;

/// Return `candidate` unless it is empty or equal to `placeholder`, in which case
/// generate a fresh id.
pub fn resolve_correlation_id(candidate: Option<&str>, placeholder: &str) -> String {
    match candidate {
        Some(id) if !id.is_empty() && id != placeholder => id.to_string(),
        _ => generate_correlation_id(),
    }
}

/// 16 bytes from the OS CSPRNG rendered as 32 lowercase hex characters.
pub fn generate_correlation_id() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
