// src/lib.rs

//! Workspace facade: re-exports `addrverify-core` so demos and downstream
//! tooling can depend on a single crate.

pub use addrverify_core::*;

/// Everything needed for a verification in one import.
pub mod prelude {
    pub use addrverify_core::api::{ResponseObject, StreetAddressRecord};
    pub use addrverify_core::{
        AddrError, AddressRecord, AddressVerifier, GeoPoint, Result, Verification,
        VerificationComponent, VerificationOutcome, VerifierConfig,
    };
}
