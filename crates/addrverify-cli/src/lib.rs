//! addrverify-cli
//! ==============
//!
//! Command-line interface for the `addrverify-core` address verifier.
//!
//! The binary (`addrverify`) is the primary deliverable; this library target
//! holds the argument types and the glue that turns them into an
//! [`AddressRecord`] and a [`VerifierConfig`], so it can be tested without a
//! process boundary.
//!
//! Quick start
//! -----------
//!
//! ```text
//! export MAPPIFY_API_KEY=...
//! addrverify verify --street1 "12 smith st" --city fitzroy --state vic --postcode 3065
//! addrverify verify --input record.json --output verified.json
//! addrverify query --input record.json
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::{AddressArgs, CliArgs};
use addrverify_core::api::ApiPayload;
use addrverify_core::{AddressRecord, AddressVerifier, VerificationOutcome, VerifierConfig};
use anyhow::{bail, Context};
use std::fs;
use std::process::ExitCode;
use std::time::Duration;

/// Exit status for a finished `verify`: 0 whenever the service answered,
/// 2 when it could not be reached.
pub fn exit_status(outcome: VerificationOutcome) -> u8 {
    match outcome {
        VerificationOutcome::ConnectionFailed => 2,
        VerificationOutcome::Unverified
        | VerificationOutcome::Standardized
        | VerificationOutcome::Geocoded => 0,
    }
}

pub fn exit_code(outcome: VerificationOutcome) -> ExitCode {
    ExitCode::from(exit_status(outcome))
}

/// Text printed by `query`: the query string and the request body with the
/// API key masked.
pub fn render_query(record: &AddressRecord) -> anyhow::Result<String> {
    let query = AddressVerifier::build_query(record);
    let payload = ApiPayload::new(query.as_str(), "").redacted();
    Ok(format!(
        "Query: {query}\nPayload:\n{}",
        serde_json::to_string_pretty(&payload)?
    ))
}

/// Human-readable summary of the address lines, printed after a
/// verification that rewrote them.
pub fn render_address(record: &AddressRecord) -> String {
    let mut lines = vec![record.street1.as_str()];
    if !record.street2.is_empty() {
        lines.push(record.street2.as_str());
    }
    let mut out = lines.join("\n");
    out.push_str(&format!(
        "\n{} {} {}",
        record.city, record.state, record.postal_code
    ));
    if let Some(point) = record.geo_point {
        out.push_str(&format!("\n({}, {})", point.latitude, point.longitude));
    }
    out
}

/// Loads the record from `--input` (if given) and applies the per-field
/// flags on top.
pub fn build_record(args: &AddressArgs) -> anyhow::Result<AddressRecord> {
    let mut record = match &args.input {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading address record {}", path.display()))?;
            serde_json::from_str::<AddressRecord>(&raw)
                .with_context(|| format!("parsing address record {}", path.display()))?
        }
        None => AddressRecord::default(),
    };

    let overrides = [
        (&args.street1, &mut record.street1),
        (&args.street2, &mut record.street2),
        (&args.city, &mut record.city),
        (&args.state, &mut record.state),
        (&args.postal_code, &mut record.postal_code),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            *field = value.trim().to_string();
        }
    }

    if record.parts().iter().all(|p| p.is_empty()) {
        bail!("no address given: pass --input or at least one address flag");
    }
    Ok(record)
}

/// Builds the verifier settings from the global flags and environment.
pub fn build_config(args: &CliArgs) -> anyhow::Result<VerifierConfig> {
    let Some(api_key) = args.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
        bail!("missing API key: pass --api-key or set MAPPIFY_API_KEY");
    };

    let mut config = VerifierConfig::new(api_key);
    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint.as_str());
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Commands;
    use clap::Parser;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv.iter().copied()).unwrap()
    }

    fn address_of(args: &CliArgs) -> &AddressArgs {
        match &args.command {
            Commands::Verify { address, .. } | Commands::Query { address } => address,
        }
    }

    #[test]
    fn flags_build_a_record() {
        let args = parse(&[
            "addrverify",
            "query",
            "--street1",
            " 12 smith st ",
            "--city",
            "fitzroy",
            "--postcode",
            "3065",
        ]);
        let record = build_record(address_of(&args)).unwrap();
        assert_eq!(record.street1, "12 smith st");
        assert_eq!(record.city, "fitzroy");
        assert_eq!(record.postal_code, "3065");
        assert!(record.street2.is_empty());
    }

    #[test]
    fn flags_override_input_file() {
        let path = std::env::temp_dir().join(format!("addrverify-cli-{}.json", std::process::id()));
        fs::write(&path, r#"{"street1":"1 Old Rd","city":"Carlton","state":"VIC"}"#).unwrap();

        let path_str = path.to_string_lossy().to_string();
        let args = parse(&["addrverify", "query", "--input", path_str.as_str(), "--city", "Parkville"]);
        let record = build_record(address_of(&args));
        fs::remove_file(&path).ok();

        let record = record.unwrap();
        assert_eq!(record.street1, "1 Old Rd");
        assert_eq!(record.city, "Parkville");
        assert_eq!(record.state, "VIC");
    }

    #[test]
    fn empty_address_is_refused() {
        let args = parse(&["addrverify", "query"]);
        assert!(build_record(address_of(&args)).is_err());
    }

    #[test]
    fn config_needs_api_key() {
        let mut args = parse(&["addrverify", "query", "--city", "x"]);
        args.api_key = None;
        assert!(build_config(&args).is_err());

        args.api_key = Some("key".into());
        args.endpoint = Some("http://localhost:8080/api/rpc/".into());
        args.timeout_secs = Some(3);
        let config = build_config(&args).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(
            config.autocomplete_url(),
            "http://localhost:8080/api/rpc/address/autocomplete"
        );
    }

    #[test]
    fn only_connection_failure_exits_non_zero() {
        assert_eq!(exit_status(VerificationOutcome::ConnectionFailed), 2);
        for outcome in [
            VerificationOutcome::Unverified,
            VerificationOutcome::Standardized,
            VerificationOutcome::Geocoded,
        ] {
            assert_eq!(exit_status(outcome), 0, "{outcome:?}");
        }
    }

    #[test]
    fn query_output_masks_api_key() {
        let record = AddressRecord {
            street1: "12 smith st".into(),
            city: "fitzroy".into(),
            postal_code: "3065".into(),
            ..Default::default()
        };
        let out = render_query(&record).unwrap();
        assert!(out.starts_with("Query: 12 smith st fitzroy 3065\n"));
        assert!(out.contains(r#""apiKey": "<redacted>""#));
        assert!(out.contains(r#""streetAddress": "12 smith st fitzroy 3065""#));
        assert!(out.contains(r#""formatCase": true"#));
    }

    #[test]
    fn address_summary_skips_empty_second_line() {
        let mut record = AddressRecord {
            street1: "12 Smith Street".into(),
            city: "Fitzroy".into(),
            state: "VIC".into(),
            postal_code: "3065".into(),
            ..Default::default()
        };
        assert_eq!(render_address(&record), "12 Smith Street\nFitzroy VIC 3065");

        record.street2 = "Unit 4".into();
        record.set_location_point(-37.5, 144.25);
        assert_eq!(
            render_address(&record),
            "12 Smith Street\nUnit 4\nFitzroy VIC 3065\n(-37.5, 144.25)"
        );
    }

    #[test]
    fn verbose_flag_counts() {
        let args = parse(&["addrverify", "-vv", "verify", "--city", "x", "-o", "out.json"]);
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Commands::Verify { output: Some(_), .. }));
    }
}
