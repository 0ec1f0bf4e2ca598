//! Conforma evaluation reports: decoding and completeness checks.

/// Serialization models for evaluation reports.
pub mod models;

/// Input completeness validation.
pub mod validate;

pub use models::{AttestationRef, Component, EvaluationReport, Policy, PolicySource, Violation};
pub use validate::validate_report;

use crate::error::{Result, VsaError};

/// Decodes an evaluation report from raw JSON bytes.
pub fn decode_report(bytes: &[u8]) -> Result<EvaluationReport> {
    let report: EvaluationReport =
        serde_json::from_slice(bytes).map_err(|source| VsaError::Decode {
            what: "Conforma JSON",
            source,
        })?;

    log::trace!(
        "decoded evaluation report with {} component(s)",
        report.components.len()
    );

    Ok(report)
}
