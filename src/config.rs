/// Options that steer a single conversion.
///
/// The caller builds one fully populated value and hands it to the converter.
/// Unset optional values are `None`; use [`ConversionConfig::normalized`] to
/// turn caller-supplied empty strings into `None` and empty verifier fields
/// into their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Identity of the verifier recorded in the VSA
    pub verifier_id: String,
    /// Verifier version used when the report carries no tool version
    pub verifier_version: String,
    /// Image reference that replaces every component's own reference
    pub subject_override: Option<String>,
    /// Policy URI that takes priority over the report's policy sources
    pub policy_uri: Option<String>,
    /// Policy digest, only honored together with `policy_uri`
    pub policy_digest: Option<String>,
    /// Path to supplementary policy provenance metadata
    pub policy_metadata: Option<String>,
}

impl ConversionConfig {
    pub const DEFAULT_VERIFIER_ID: &'static str =
        "https://managed.konflux.example.com/conforma-vsa";
    pub const DEFAULT_VERIFIER_VERSION: &'static str = "v1.0.0";

    /// Applies the "empty string means not set" rule to every field.
    pub fn normalized(self) -> Self {
        let Self {
            verifier_id,
            verifier_version,
            subject_override,
            policy_uri,
            policy_digest,
            policy_metadata,
        } = self;

        Self {
            verifier_id: non_empty(Some(verifier_id))
                .unwrap_or_else(|| Self::DEFAULT_VERIFIER_ID.to_owned()),
            verifier_version: non_empty(Some(verifier_version))
                .unwrap_or_else(|| Self::DEFAULT_VERIFIER_VERSION.to_owned()),
            subject_override: non_empty(subject_override),
            policy_uri: non_empty(policy_uri),
            policy_digest: non_empty(policy_digest),
            policy_metadata: non_empty(policy_metadata),
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            verifier_id: Self::DEFAULT_VERIFIER_ID.to_owned(),
            verifier_version: Self::DEFAULT_VERIFIER_VERSION.to_owned(),
            subject_override: None,
            policy_uri: None,
            policy_digest: None,
            policy_metadata: None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
