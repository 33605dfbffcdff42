// crates/addrverify-core/src/api.rs

//! # Wire Types
//!
//! JSON shapes exchanged with the `address/autocomplete` endpoint.
//! Every field the decision logic can live without is optional: JSON `null`
//! and a missing key both read as `None`, unknown keys are ignored.
//! `result` is the only field a usable response must carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path of the autocomplete call, relative to the configured endpoint.
pub const AUTOCOMPLETE_PATH: &str = "address/autocomplete";

/// Request body for the autocomplete call.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPayload {
    pub street_address: String,
    pub api_key: String,
    pub format_case: bool,
    pub include_internal_identifiers: bool,
}

impl ApiPayload {
    /// The payload we always send: formatted casing and internal
    /// identifiers (GNAF ids) switched on.
    pub fn new(street_address: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            street_address: street_address.into(),
            api_key: api_key.into(),
            format_case: true,
            include_internal_identifiers: true,
        }
    }

    /// Copy of the payload safe to print or log.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: "<redacted>".to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for ApiPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiPayload")
            .field("street_address", &self.street_address)
            .field("api_key", &"<redacted>")
            .field("format_case", &self.format_case)
            .field(
                "include_internal_identifiers",
                &self.include_internal_identifiers,
            )
            .finish()
    }
}

/// Optional coordinate pair attached to a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiLocation {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl ApiLocation {
    /// Both coordinates, or `None` if either is missing.
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lon?))
    }
}

/// One candidate match returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreetAddressRecord {
    pub building_name: Option<String>,
    pub flat_number_prefix: Option<String>,
    pub flat_number: Option<i64>,
    pub flat_number_suffix: Option<String>,
    pub level_number: Option<i64>,
    pub number_first: Option<i64>,
    pub number_last: Option<i64>,
    pub street_name: Option<String>,
    pub street_type: Option<String>,
    pub street_suffix_code: Option<String>,
    pub suburb: Option<String>,
    pub state: Option<String>,
    pub post_code: Option<String>,
    pub location: Option<ApiLocation>,
    /// The first comma-separated segment of `street_address` is a
    /// sub-address (unit, level, building) rather than the street line.
    pub primary: Option<bool>,
    /// Fully formatted single-line address, segments joined by `", "`.
    pub street_address: Option<String>,
    pub jurisdiction_id: Option<String>,
    /// Geocoded National Address File identifier.
    pub gnaf_id: Option<String>,
}

impl StreetAddressRecord {
    pub fn is_primary(&self) -> bool {
        self.primary.unwrap_or(false)
    }

    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        self.location.as_ref().and_then(ApiLocation::lat_lon)
    }

    pub fn street_address_str(&self) -> &str {
        self.street_address.as_deref().unwrap_or_default()
    }

    pub fn gnaf_id_str(&self) -> &str {
        self.gnaf_id.as_deref().unwrap_or_default()
    }
}

/// Top-level autocomplete response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Candidates, best first. The order is the service's ranking.
    pub result: Vec<StreetAddressRecord>,
    /// Overall match confidence in `0.0..=1.0`.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl ResponseObject {
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}
