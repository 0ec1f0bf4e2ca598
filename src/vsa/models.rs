use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::intoto_attestation::models::Statement;

/// A VSA as written to disk: an in-toto statement carrying a [`VsaPredicate`].
pub type VsaStatement = Statement<VsaPredicate>;

/// Serializable SLSA verification summary predicate.
///
/// Enumerated fields are kept as strings so the output validator can reject
/// values outside the contract before anything is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VsaPredicate {
    pub verifier: Verifier,
    /// RFC3339 UTC timestamp of the evaluation
    pub time_verified: String,
    /// Canonical `name@sha256:digest` of the first subject
    pub resource_uri: String,
    pub policy: ResourceDescriptor,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_attestations: Vec<ResourceDescriptor>,
    /// `PASSED` or `FAILED`
    pub verification_result: String,
    pub verified_levels: Vec<String>,
    /// Reserved, always empty for now
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependency_levels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verifier {
    pub id: String,
    pub version: String,
}

/// A URI with an optional digest map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<BTreeMap<String, String>>,
}
