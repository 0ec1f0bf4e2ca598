//! SLSA verification summary attestations derived from evaluation reports.

/// Conversion from evaluation report to VSA statement.
pub mod convert;

/// Verification result and SLSA level determination.
pub mod levels;

/// Serialization models for VSA predicates.
pub mod models;

/// Policy reference resolution and supplementary policy metadata.
pub mod policy;

/// Timestamp normalization.
pub mod time;

/// Output contract validation.
pub mod validate;

pub use convert::convert;
pub use levels::{VerificationResult, VerifiedLevel};
pub use models::{ResourceDescriptor, Verifier, VsaPredicate, VsaStatement};
pub use policy::PolicyMetadata;
pub use validate::validate_statement;

use crate::error::{Result, VsaError};

/// Serializes a VSA statement as pretty-printed JSON.
pub fn encode_statement(vsa: &VsaStatement) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(vsa).map_err(VsaError::Encode)
}
