//! Verification walk-through for addrverify-rs
//!
//! Verifies one address with the key from `MAPPIFY_API_KEY` and prints the
//! record before and after, showing which fields the outcome touched.
//!
//! ```text
//! MAPPIFY_API_KEY=... cargo run --example verify_address
//! ```

use addrverify_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== addrverify-rs Verification Example ===\n");

    let api_key = std::env::var("MAPPIFY_API_KEY").unwrap_or_default();
    let verifier = match AddressVerifier::new(VerifierConfig::new(api_key)) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("✗ Cannot build verifier: {e}");
            eprintln!("  Set MAPPIFY_API_KEY and try again.");
            return Err(e);
        }
    };

    let mut record = AddressRecord {
        street1: "12 smith st".into(),
        city: "FITZROY".into(),
        state: "vic".into(),
        postal_code: "3065".into(),
        ..Default::default()
    };

    println!("--- Before ---");
    println!("Query: {}", AddressVerifier::build_query(&record));
    println!();

    let verification = verifier.verify(&mut record);

    println!("--- After ---");
    println!("Outcome: {:?}", verification.outcome);
    println!("Message: {}", verification.message);
    match verification.outcome {
        VerificationOutcome::Geocoded | VerificationOutcome::Standardized => {
            println!("Street 1: {}", record.street1);
            println!("Street 2: {}", record.street2);
            println!("City:     {}", record.city);
            println!("State:    {}", record.state);
            println!("Postcode: {}", record.postal_code);
            if let Some(point) = record.geo_point {
                println!("Point:    {}, {}", point.latitude, point.longitude);
            }
        }
        VerificationOutcome::Unverified => {
            println!("Best GNAF id: {:?}", record.standardize_attempted_result);
        }
        VerificationOutcome::ConnectionFailed => {
            println!("Address left unchanged.");
        }
    }

    Ok(())
}
