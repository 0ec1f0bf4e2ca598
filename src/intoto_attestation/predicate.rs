use std::fmt;

use super::models;

pub(crate) const VERIFICATION_SUMMARY_PREDICATE_URI: &str =
    "https://slsa.dev/verification_summary/v1";

/// A predicate (claim) containing type information and data.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate<P> {
    /// The type of predicate being made
    pub predicate_type: PredicateType,
    /// The predicate data
    pub predicate: P,
}

/// Predicate types this crate emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateType {
    /// SLSA verification summary attestation
    VerificationSummary,
}

impl fmt::Display for PredicateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateType::VerificationSummary => {
                write!(f, "{}", VERIFICATION_SUMMARY_PREDICATE_URI)
            }
        }
    }
}

impl<P> From<Predicate<P>> for models::Predicate<P> {
    fn from(p: Predicate<P>) -> Self {
        let Predicate {
            predicate_type,
            predicate,
        } = p;

        let predicate_type = predicate_type.to_string();

        Self {
            predicate_type,
            predicate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_summary_renders_slsa_uri() {
        assert_eq!(
            PredicateType::VerificationSummary.to_string(),
            "https://slsa.dev/verification_summary/v1"
        );
    }
}
