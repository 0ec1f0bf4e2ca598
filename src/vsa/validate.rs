use std::str::FromStr;

use super::{levels::VerificationResult, models::VsaStatement};
use crate::{
    error::{Result, VsaError},
    intoto_attestation::{
        predicate::VERIFICATION_SUMMARY_PREDICATE_URI, statement::STATEMENT_TYPE_URI,
        DIGEST_SHA256,
    },
};

/// Checks a VSA statement against the required-field contract.
///
/// This is the last gate before serialization. A failure here means the
/// converter produced a non-conformant statement.
pub fn validate_statement(vsa: &VsaStatement) -> Result<()> {
    if vsa.type_ != STATEMENT_TYPE_URI {
        return Err(VsaError::output_contract(format!(
            "invalid statement type: {}",
            vsa.type_
        )));
    }

    if vsa.predicate.predicate_type != VERIFICATION_SUMMARY_PREDICATE_URI {
        return Err(VsaError::output_contract(format!(
            "invalid predicate type: {}",
            vsa.predicate.predicate_type
        )));
    }

    if vsa.subject.is_empty() {
        return Err(VsaError::output_contract("at least one subject is required"));
    }

    for (i, subject) in vsa.subject.iter().enumerate() {
        if subject.name.is_empty() {
            return Err(VsaError::output_contract(format!(
                "subject[{i}]: name is required"
            )));
        }
        if subject.digest.is_empty() {
            return Err(VsaError::output_contract(format!(
                "subject[{i}]: digest is required"
            )));
        }
        if !subject.digest.contains_key(DIGEST_SHA256) {
            return Err(VsaError::output_contract(format!(
                "subject[{i}]: sha256 digest is required"
            )));
        }
    }

    let predicate = &vsa.predicate.predicate;

    if predicate.verifier.id.is_empty() {
        return Err(VsaError::output_contract("verifier ID is required"));
    }
    if predicate.time_verified.is_empty() {
        return Err(VsaError::output_contract("timeVerified is required"));
    }
    if predicate.resource_uri.is_empty() {
        return Err(VsaError::output_contract("resourceUri is required"));
    }
    if predicate.policy.uri.is_empty() {
        return Err(VsaError::output_contract("policy URI is required"));
    }

    VerificationResult::from_str(&predicate.verification_result)?;

    Ok(())
}
