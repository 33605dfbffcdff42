// crates/addrverify-core/src/lib.rs

//! # addrverify-core
//!
//! Address verification and geocoding against the mappify.io address API.
//!
//! One call, one decision: an [`AddressRecord`] is formatted into a single
//! query string, sent to the remote service, and the first candidate of the
//! response is applied to the record when the match is confident enough.
//!
//! ```no_run
//! use addrverify_core::{AddressRecord, AddressVerifier, VerifierConfig};
//!
//! let verifier = AddressVerifier::new(VerifierConfig::new("my-api-key")).unwrap();
//!
//! let mut record = AddressRecord {
//!     street1: "12 smith street".into(),
//!     city: "FITZROY".into(),
//!     state: "VIC".into(),
//!     postal_code: "3065".into(),
//!     ..Default::default()
//! };
//!
//! let verification = verifier.verify(&mut record);
//! println!("{:?}: {}", verification.outcome, verification.message);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api; // Wire types for the remote address API
pub mod config;
pub mod error;
pub mod model;
pub mod text;
pub mod traits;
pub mod verifier; // The decision logic

// Re-exports
pub use crate::config::VerifierConfig;
pub use crate::error::{AddrError, Result};
pub use crate::model::{AddressRecord, GeoPoint, Verification, VerificationOutcome};
pub use crate::traits::VerificationComponent;
pub use crate::verifier::AddressVerifier;
