//! Wire model of a Conforma policy evaluation report.

use serde::{Deserialize, Serialize};

/// One evaluation run over a set of components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// Overall pass/fail of the evaluation
    pub success: bool,
    /// Evaluated artifacts, in report order
    #[serde(default)]
    pub components: Vec<Component>,
    /// Public key the evaluation was run with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Policy sources used for the evaluation
    #[serde(default)]
    pub policy: Policy,
    /// Version of the evaluator that produced the report
    #[serde(rename = "ec-version", default, skip_serializing_if = "Option::is_none")]
    pub tool_version: Option<String>,
    /// Evaluation timestamp, RFC3339 or `YYYY-MM-DDTHH:MM:SS`
    #[serde(rename = "effective-time", default)]
    pub effective_time: String,
}

/// One evaluated artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(default)]
    pub name: String,
    /// Image reference, expected as `<repo>@sha256:<hex>`
    #[serde(rename = "containerImage", default)]
    pub image_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<Signature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attestations: Vec<AttestationRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitSource {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub revision: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub keyid: String,
    #[serde(default)]
    pub sig: String,
}

/// An attestation the evaluator inspected for a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationRef {
    #[serde(rename = "type", default)]
    pub type_: String,
    #[serde(default)]
    pub predicate_type: String,
}

/// A failed policy rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(default)]
    pub rule: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(default)]
    pub sources: Vec<PolicySource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rekor_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// Ordered policy locations (URIs, OCI references, VCS locators).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicySource {
    #[serde(default)]
    pub policy: Vec<String>,
}

impl Policy {
    /// First location of the first policy source, if any.
    pub fn primary_location(&self) -> Option<&str> {
        self.sources
            .first()
            .and_then(|source| source.policy.first())
            .map(String::as_str)
    }
}

impl Component {
    /// Whether the component passed without any violation.
    pub fn is_clean(&self) -> bool {
        self.success && self.violations.is_empty()
    }
}
