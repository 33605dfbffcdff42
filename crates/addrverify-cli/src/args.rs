use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for addrverify
#[derive(Debug, Parser)]
#[command(
    name = "addrverify",
    version,
    about = "Verify, standardize and geocode postal addresses with mappify.io"
)]
pub struct CliArgs {
    /// mappify.io API key
    #[arg(long = "api-key", env = "MAPPIFY_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the address API (default: https://mappify.io/api/rpc/)
    #[arg(long = "endpoint", env = "MAPPIFY_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Give up on the request after this many seconds
    #[arg(long = "timeout-secs", global = true)]
    pub timeout_secs: Option<u64>,

    /// More log output on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify an address and print the updated record as JSON
    Verify {
        #[command(flatten)]
        address: AddressArgs,

        /// Write the updated record here instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Show the query and request payload without calling the service
    Query {
        #[command(flatten)]
        address: AddressArgs,
    },
}

/// Where the address comes from: a JSON record file, individual flags, or
/// both (flags override the file).
#[derive(Debug, Args)]
pub struct AddressArgs {
    /// Path to a JSON address record
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub street1: Option<String>,

    #[arg(long)]
    pub street2: Option<String>,

    /// Suburb or city
    #[arg(long)]
    pub city: Option<String>,

    /// State or region (e.g. VIC)
    #[arg(long)]
    pub state: Option<String>,

    #[arg(long = "postcode")]
    pub postal_code: Option<String>,
}
