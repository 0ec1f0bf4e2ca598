/// Serialization models for in-toto attestations.
pub mod models;

/// Predicate types and handling for attestation claims.
pub mod predicate;

/// Statement structures for in-toto attestations.
pub mod statement;

/// Subject definitions for attested artifacts.
pub mod subject;

use std::collections::BTreeMap;

/// Re-exported predicate types for convenience.
pub use predicate::{Predicate, PredicateType};
/// Re-exported statement type for convenience.
pub use statement::Statement;
/// Re-exported subject type for convenience.
pub use subject::Subject;

/// Digest map key for SHA-256 digests.
pub const DIGEST_SHA256: &str = "sha256";

/// Marker separating a repository from its embedded sha256 digest.
pub const SHA256_REFERENCE_MARKER: &str = "@sha256:";

/// Creates a digest map holding a single sha256 entry.
pub fn sha256_digest(hex: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(DIGEST_SHA256.to_owned(), hex.to_owned())])
}

/// Strips an optional `sha256:` algorithm prefix from a digest string.
pub fn strip_sha256_prefix(digest: &str) -> &str {
    digest.strip_prefix("sha256:").unwrap_or(digest)
}
