use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a violation occurrence.
///
/// Identity fields:
/// - policy id
/// - asset id
pub fn fingerprint_for_violation(policy_id: &str, asset_id: &str) -> String {
    let canonical = [policy_id, asset_id].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
