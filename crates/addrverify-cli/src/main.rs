//! addrverify — Command-line interface for addrverify-core
//!
//! Usage examples
//! --------------
//!
//! - Verify an address given as flags, print the updated record
//!   $ addrverify verify --street1 "12 smith st" --city fitzroy --state vic --postcode 3065
//!
//! - Verify a stored record and write the result to a file
//!   $ addrverify verify --input record.json --output verified.json
//!
//! - Show what would be sent, without calling the service
//!   $ addrverify query --input record.json
//!
//! The API key comes from `--api-key` or `MAPPIFY_API_KEY`. Logs go to
//! stderr; use `-v`/`-vv` or `RUST_LOG` to see them.
//!
//! Exit status is 0 for a completed verification (verified or not) and 2
//! when the service could not be reached.
use addrverify_cli::args::{CliArgs, Commands};
use addrverify_cli::{build_config, build_record, exit_code, render_address, render_query};
use addrverify_core::AddressVerifier;
use anyhow::Context;
use clap::Parser;
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match &args.command {
        Commands::Query { address } => {
            let record = build_record(address)?;
            println!("{}", render_query(&record)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Verify { address, output } => {
            let mut record = build_record(address)?;
            let verifier = AddressVerifier::new(build_config(&args)?)?;
            tracing::debug!(config = ?verifier.config(), "verifier configured");

            let verification = verifier.verify(&mut record);
            eprintln!("{:?}: {}", verification.outcome, verification.message);
            if verification.outcome.is_standardized() {
                eprintln!("{}", render_address(&record));
            }

            let json = serde_json::to_string_pretty(&record)?;
            match output {
                Some(path) => fs::write(path, json + "\n")
                    .with_context(|| format!("writing {}", path.display()))?,
                None => println!("{json}"),
            }

            Ok(exit_code(verification.outcome))
        }
    }
}
