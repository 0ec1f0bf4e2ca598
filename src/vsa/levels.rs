use std::{fmt, str::FromStr};

use crate::{
    conforma::EvaluationReport,
    error::{Result, VsaError},
};

/// Outcome recorded in `verificationResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationResult {
    Passed,
    Failed,
}

impl VerificationResult {
    pub fn from_success(success: bool) -> Self {
        if success {
            Self::Passed
        } else {
            Self::Failed
        }
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationResult::Passed => write!(f, "PASSED"),
            VerificationResult::Failed => write!(f, "FAILED"),
        }
    }
}

impl FromStr for VerificationResult {
    type Err = VsaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PASSED" => Ok(Self::Passed),
            "FAILED" => Ok(Self::Failed),
            _ => Err(VsaError::output_contract(format!(
                "invalid verification result: {s}"
            ))),
        }
    }
}

/// SLSA level tags a VSA can claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifiedLevel {
    /// Reserved for evaluations that pass with warnings.
    SlsaBuildLevel2,
    SlsaBuildLevel3,
}

impl fmt::Display for VerifiedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifiedLevel::SlsaBuildLevel2 => write!(f, "SLSA_BUILD_LEVEL_2"),
            VerifiedLevel::SlsaBuildLevel3 => write!(f, "SLSA_BUILD_LEVEL_3"),
        }
    }
}

/// Derives the levels a report earns.
///
/// Any failure or violation yields no level at all.
pub fn determine_verified_levels(report: &EvaluationReport) -> Vec<VerifiedLevel> {
    if !report.success {
        return vec![];
    }

    let has_violations = report.components.iter().any(|c| !c.is_clean());
    // Evaluation reports carry no warning signal yet.
    let has_warnings = false;

    match (has_violations, has_warnings) {
        (true, _) => vec![],
        (false, true) => vec![VerifiedLevel::SlsaBuildLevel2],
        (false, false) => vec![VerifiedLevel::SlsaBuildLevel3],
    }
}
