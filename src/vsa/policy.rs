use serde::{Deserialize, Serialize};

use super::models::ResourceDescriptor;
use crate::{
    config::ConversionConfig,
    conforma::Policy,
    error::{Result, VsaError},
    intoto_attestation::{sha256_digest, strip_sha256_prefix, SHA256_REFERENCE_MARKER},
    store::DocumentStore,
};

/// Supplementary policy provenance published next to a policy bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyMetadata {
    #[serde(default)]
    pub policy_bundle: PolicyBundle,
    #[serde(default)]
    pub validation: PolicyValidation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyBundle {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub digest: String,
    #[serde(default)]
    pub source_uri: String,
    #[serde(default)]
    pub verifier_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyValidation {
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub timestamp: String,
}

impl PolicyMetadata {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| VsaError::Decode {
            what: "policy metadata JSON",
            source,
        })
    }

    /// Reads and parses the metadata document at `path`.
    pub fn load(store: &dyn DocumentStore, path: &str) -> Result<Self> {
        let bytes = store.read(path)?;
        Self::from_slice(&bytes)
    }
}

/// Resolves the policy reference recorded in the VSA.
///
/// An explicit configured URI wins over the report's first policy location.
/// Loaded metadata then overrides individual non-empty fields. A metadata load
/// failure is logged and otherwise ignored.
///
/// # Arguments
/// * `policy` - policy sources from the evaluation report
/// * `config` - conversion options carrying the explicit policy URI and digest
/// * `metadata` - outcome of loading supplementary policy metadata, if configured
///
/// # Returns
/// * `Result<ResourceDescriptor>` - policy URI with optional sha256 digest, or
///   [`VsaError::PolicyRequired`] when no policy is named anywhere
pub fn resolve_policy(
    policy: &Policy,
    config: &ConversionConfig,
    metadata: Option<Result<PolicyMetadata>>,
) -> Result<ResourceDescriptor> {
    let mut resolved = if let Some(uri) = &config.policy_uri {
        ResourceDescriptor {
            uri: uri.clone(),
            digest: config
                .policy_digest
                .as_deref()
                .map(|d| sha256_digest(strip_sha256_prefix(d))),
        }
    } else if let Some(location) = policy.primary_location() {
        ResourceDescriptor {
            uri: location.to_owned(),
            digest: embedded_digest(location).map(sha256_digest),
        }
    } else {
        return Err(VsaError::PolicyRequired);
    };

    match metadata {
        Some(Ok(metadata)) => {
            let bundle = metadata.policy_bundle;
            if !bundle.uri.is_empty() {
                resolved.uri = bundle.uri;
            }
            if !bundle.digest.is_empty() {
                resolved.digest = Some(sha256_digest(strip_sha256_prefix(&bundle.digest)));
            }
        }
        Some(Err(err)) => {
            log::warn!("Ignoring policy metadata: {err}");
        }
        None => {}
    }

    log::trace!("resolved policy uri {}", resolved.uri);

    Ok(resolved)
}

/// Digest embedded in a `...@sha256:<digest>` location.
fn embedded_digest(location: &str) -> Option<&str> {
    let mut parts = location.split(SHA256_REFERENCE_MARKER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(digest), None) if !digest.is_empty() => Some(digest),
        _ => None,
    }
}
