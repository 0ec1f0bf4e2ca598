use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};

use conforma_vsa::{pipeline, store::LocalFs, ConversionConfig};

/// Convert a Conforma policy evaluation into a SLSA Verification Summary Attestation.
#[derive(Parser, Debug)]
#[command(name = "conforma-vsa", version)]
struct Cli {
    /// Path to Conforma evaluation JSON file
    #[arg(long, env = "CONFORMA_VSA_INPUT")]
    input: String,

    /// Path to output VSA JSON file
    #[arg(long, env = "CONFORMA_VSA_OUTPUT")]
    output: String,

    /// Override subject image reference
    #[arg(long, env = "CONFORMA_VSA_SUBJECT", default_value = "")]
    subject: String,

    /// Verifier ID for VSA
    #[arg(
        long,
        env = "CONFORMA_VSA_VERIFIER_ID",
        default_value = ConversionConfig::DEFAULT_VERIFIER_ID
    )]
    verifier_id: String,

    /// Verifier version for VSA
    #[arg(
        long,
        env = "CONFORMA_VSA_VERIFIER_VERSION",
        default_value = ConversionConfig::DEFAULT_VERIFIER_VERSION
    )]
    verifier_version: String,

    /// Policy bundle URI for provenance
    #[arg(long, env = "CONFORMA_VSA_POLICY_URI", default_value = "")]
    policy_uri: String,

    /// Policy bundle digest for verification
    #[arg(long, env = "CONFORMA_VSA_POLICY_DIGEST", default_value = "")]
    policy_digest: String,

    /// Path to policy metadata JSON file
    #[arg(long, env = "CONFORMA_VSA_POLICY_METADATA", default_value = "")]
    policy_metadata: String,
}

impl Cli {
    /// Rejects empty `--input`/`--output`, which clap accepts as present.
    fn check_required(&self) -> std::result::Result<(), clap::Error> {
        if self.input.is_empty() || self.output.is_empty() {
            return Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "both --input and --output must be non-empty",
            ));
        }

        Ok(())
    }

    fn config(&self) -> ConversionConfig {
        ConversionConfig {
            verifier_id: self.verifier_id.clone(),
            verifier_version: self.verifier_version.clone(),
            subject_override: Some(self.subject.clone()),
            policy_uri: Some(self.policy_uri.clone()),
            policy_digest: Some(self.policy_digest.clone()),
            policy_metadata: Some(self.policy_metadata.clone()),
        }
        .normalized()
    }
}

fn run(cli: &Cli) -> Result<()> {
    let store = LocalFs::new();
    pipeline::run(&store, &cli.input, &cli.output, &cli.config())
        .context("Conversion failed")?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = cli.check_required() {
        err.exit();
    }

    match run(&cli) {
        Ok(()) => {
            println!(
                "Successfully converted Conforma evaluation to VSA: {}",
                cli.output
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
