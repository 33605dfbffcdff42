// crates/addrverify-core/src/model.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Returns `None` unless both values are finite and inside the valid
    /// latitude/longitude range.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        (lat_ok && lon_ok).then_some(Self {
            latitude,
            longitude,
        })
    }
}

/// An address owned by the caller and updated in place by a verification.
///
/// Textual fields use the empty string for "not set". The `*_attempted_*`
/// fields record which service looked at the address last and when, whether
/// or not it succeeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressRecord {
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub geo_point: Option<GeoPoint>,

    pub standardize_attempted_service: Option<String>,
    pub standardize_attempted_at: Option<DateTime<Utc>>,
    /// External identifier (GNAF id) of the best candidate seen on the last
    /// attempt, recorded even when that candidate was rejected.
    pub standardize_attempted_result: Option<String>,
    pub geocode_attempted_service: Option<String>,
    pub geocode_attempted_at: Option<DateTime<Utc>>,

    pub standardized_at: Option<DateTime<Utc>>,
    pub geocoded_at: Option<DateTime<Utc>>,
}

impl AddressRecord {
    /// The address lines in query order: street 1, street 2, city, state,
    /// postal code.
    pub fn parts(&self) -> [&str; 5] {
        [
            self.street1.as_str(),
            self.street2.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.postal_code.as_str(),
        ]
    }

    /// Sets the geocoded point. Returns `false` and leaves the record
    /// untouched when the coordinates are out of range.
    pub fn set_location_point(&mut self, latitude: f64, longitude: f64) -> bool {
        match GeoPoint::new(latitude, longitude) {
            Some(point) => {
                self.geo_point = Some(point);
                true
            }
            None => false,
        }
    }
}

/// Terminal state of a single verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationOutcome {
    /// No acceptable match; only bookkeeping fields changed.
    Unverified,
    /// Textual fields were normalized, coordinates were not updated.
    Standardized,
    /// Textual fields were normalized and coordinates were updated.
    Geocoded,
    /// The service could not be reached or gave no usable answer.
    ConnectionFailed,
}

impl VerificationOutcome {
    /// `true` for outcomes that rewrote the address lines.
    pub fn is_standardized(self) -> bool {
        matches!(self, Self::Standardized | Self::Geocoded)
    }
}

/// Outcome plus the human-readable explanation shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub outcome: VerificationOutcome,
    pub message: String,
}

impl Verification {
    pub fn new(outcome: VerificationOutcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
        }
    }
}
