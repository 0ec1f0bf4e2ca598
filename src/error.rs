//! Error taxonomy for the conversion pipeline.

use thiserror::Error;

/// Errors raised while turning an evaluation report into a VSA.
///
/// The pipeline stops at the first error and writes nothing. The only tolerated
/// failure is loading supplementary policy metadata, which the converter drops.
#[derive(Error, Debug)]
pub enum VsaError {
    /// Reading or writing a document failed.
    #[error("failed to access '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A document was not valid JSON for the expected shape.
    #[error("failed to parse {what}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The evaluation report is incomplete.
    #[error("invalid Conforma input: {0}")]
    Validation(String),

    /// `effective-time` is in neither of the accepted formats.
    #[error("failed to parse effective-time: unsupported time format: {0}")]
    TimeFormat(String),

    /// A component's image reference cannot be split into name and sha256 digest.
    #[error(
        "failed to build subject for component {component}: invalid image reference format: {reference}"
    )]
    Subject { component: String, reference: String },

    /// Neither the configuration nor the report names a policy.
    #[error("policy source is required")]
    PolicyRequired,

    /// The produced statement violates the VSA contract.
    #[error("invalid VSA output: {0}")]
    OutputContract(String),

    /// Serializing the statement failed.
    #[error("failed to marshal VSA JSON")]
    Encode(#[source] serde_json::Error),
}

impl VsaError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn output_contract(message: impl Into<String>) -> Self {
        Self::OutputContract(message.into())
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, VsaError>;
