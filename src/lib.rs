//! Converts Conforma policy evaluation reports into SLSA Verification Summary
//! Attestations (VSA).
//!
//! The pipeline decodes an evaluation report, checks it for completeness,
//! derives the VSA predicate (subjects, result, levels, policy, input
//! attestations), checks the result against the VSA contract and encodes it.

/// Conversion options and their defaults
pub mod config;

/// Conforma evaluation report model, decoding and input validation
pub mod conforma;

/// Error taxonomy
pub mod error;

/// In-Toto attestation format support
pub mod intoto_attestation;

/// Stage orchestration
pub mod pipeline;

/// Document storage backends (local filesystem, in-memory)
pub mod store;

/// Verification summary derivation, validation and encoding
pub mod vsa;

pub use config::ConversionConfig;
pub use error::{Result, VsaError};
