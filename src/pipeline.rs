//! End-to-end conversion: read, decode, validate, convert, validate, encode, write.

use crate::{
    config::ConversionConfig,
    conforma::{decode_report, validate_report},
    error::Result,
    store::DocumentStore,
    vsa::{self, PolicyMetadata, VsaStatement},
};

/// Converts the evaluation report at `input` into a VSA written to `output`.
///
/// Each stage fails fast and nothing is written unless every stage succeeded.
///
/// # Arguments
/// * `store` - document store used for the report, the policy metadata and the output
/// * `input` - path of the Conforma evaluation JSON
/// * `output` - path the pretty-printed VSA is written to
/// * `config` - conversion options; empty strings are treated as unset
///
/// # Returns
/// * `Result<VsaStatement>` - the written VSA statement, or the first stage error
pub fn run(
    store: &dyn DocumentStore,
    input: &str,
    output: &str,
    config: &ConversionConfig,
) -> Result<VsaStatement> {
    log::debug!("Reading evaluation report from '{input}'");
    let bytes = store.read(input)?;

    let vsa = convert_bytes(store, &bytes, config)?;

    let encoded = vsa::encode_statement(&vsa)?;
    store.write(output, &encoded)?;

    log::debug!("Wrote VSA to '{output}'");

    Ok(vsa)
}

/// Runs every in-memory stage on an already read report.
///
/// `store` is only consulted for the supplementary policy metadata.
pub fn convert_bytes(
    store: &dyn DocumentStore,
    bytes: &[u8],
    config: &ConversionConfig,
) -> Result<VsaStatement> {
    let config = config.clone().normalized();

    let report = decode_report(bytes)?;
    validate_report(&report)?;

    let policy_metadata = config.policy_metadata.as_deref().map(|path| {
        log::debug!("Loading policy metadata from '{path}'");
        PolicyMetadata::load(store, path)
    });

    let vsa = vsa::convert(&report, &config, policy_metadata)?;
    vsa::validate_statement(&vsa)?;

    Ok(vsa)
}
