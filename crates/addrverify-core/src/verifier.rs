// crates/addrverify-core/src/verifier.rs

//! # Address Verifier
//!
//! One synchronous round trip per call:
//!
//! 1. format the record into a single query string,
//! 2. POST it to the autocomplete endpoint,
//! 3. decide on the first candidate of the response,
//! 4. stamp the attribution fields.
//!
//! The service's ranking is trusted as-is. Only the first candidate is ever
//! considered, and it is accepted when it is the only candidate or when the
//! overall confidence reaches [`ACCEPT_CONFIDENCE`].

use crate::api::{ApiPayload, ResponseObject, StreetAddressRecord};
use crate::config::VerifierConfig;
use crate::error::{AddrError, Result};
use crate::model::{AddressRecord, Verification, VerificationOutcome};
use crate::text::{confidence_percentage, join_address_parts, split_street_address, title_case};
use crate::traits::VerificationComponent;
use chrono::Utc;
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

/// Minimum overall confidence for accepting the first of several candidates.
pub const ACCEPT_CONFIDENCE: f64 = 0.75;

pub const NO_MATCH_MESSAGE: &str = "No match.";

// -----------------------------------------------------------------------------
// VERIFIER
// -----------------------------------------------------------------------------

/// Verifies and geocodes addresses through the mappify.io API.
///
/// The verifier holds no per-call state; one instance can serve any number
/// of records, from any number of threads, as long as each call gets its own
/// record.
pub struct AddressVerifier {
    config: VerifierConfig,
    client: Client,
}

impl AddressVerifier {
    /// Validates `config` and builds the HTTP client.
    pub fn new(config: VerifierConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Single-line query for `record`: the non-empty address lines joined by
    /// spaces.
    pub fn build_query(record: &AddressRecord) -> String {
        join_address_parts(record.parts())
    }

    /// Request body that [`verify`](Self::verify) would send for `record`.
    pub fn payload_for(&self, record: &AddressRecord) -> ApiPayload {
        ApiPayload::new(Self::build_query(record), self.config.api_key.as_str())
    }

    /// Verifies `record` against the service and updates it in place.
    ///
    /// Never fails: transport problems come back as
    /// [`VerificationOutcome::ConnectionFailed`] with the address lines left
    /// as they were. The attribution fields are stamped on every path.
    pub fn verify(&self, record: &mut AddressRecord) -> Verification {
        let payload = self.payload_for(record);
        debug!(query = %payload.street_address, "sending address for verification");

        let verification = match self.fetch(&payload) {
            Ok(response) => self.evaluate(record, response),
            Err(AddrError::Status { code, reason }) => {
                warn!(status = code, "address API rejected the request");
                Verification::new(VerificationOutcome::ConnectionFailed, reason)
            }
            Err(err) => {
                warn!(error = %err, "address verification request failed");
                Verification::new(VerificationOutcome::ConnectionFailed, failure_message(&err))
            }
        };

        self.stamp_attempt(record);
        verification
    }

    /// Applies the decision policy to an already-parsed response.
    ///
    /// Does not stamp the attribution fields; [`verify`](Self::verify) does
    /// that last.
    pub fn evaluate(&self, record: &mut AddressRecord, response: ResponseObject) -> Verification {
        let Some(best) = response.result.first() else {
            info!("no candidate returned");
            return Verification::new(VerificationOutcome::Unverified, NO_MATCH_MESSAGE);
        };

        let percentage = confidence_percentage(response.confidence);

        // Recorded before the acceptance check: a rejected best guess is
        // still kept for later review.
        record.standardize_attempted_result = best.gnaf_id.clone();

        let accepted = response.result.len() == 1
            || response.confidence.is_some_and(|c| c >= ACCEPT_CONFIDENCE);

        if !accepted {
            info!(
                candidates = response.result.len(),
                confidence = percentage,
                "closest match below acceptance threshold"
            );
            return Verification::new(
                VerificationOutcome::Unverified,
                format!(
                    "Not verified: mappify.io closest matching address: {} with {}% confidence",
                    best.street_address_str(),
                    percentage
                ),
            );
        }

        match apply_candidate(record, best) {
            Ok(geocoded) => {
                let (outcome, coordinates) = if geocoded {
                    (VerificationOutcome::Geocoded, "Coordinates updated.")
                } else {
                    (VerificationOutcome::Standardized, "Coordinates NOT updated.")
                };
                info!(gnaf_id = best.gnaf_id_str(), ?outcome, "address verified");
                Verification::new(
                    outcome,
                    format!(
                        "Verified with mappify.io to match GNAF: {} with {}% confidence, address standardised to: {}. {}",
                        best.gnaf_id_str(),
                        percentage,
                        best.street_address_str(),
                        coordinates
                    ),
                )
            }
            Err(err) => {
                warn!(error = %err, gnaf_id = best.gnaf_id_str(), "accepted candidate is unusable");
                Verification::new(VerificationOutcome::Unverified, format!("Not verified: {err}"))
            }
        }
    }

    /// Marks `record` as attempted by this service, now.
    pub fn stamp_attempt(&self, record: &mut AddressRecord) {
        let now = Utc::now();
        record.standardize_attempted_service = Some(self.config.service_name.clone());
        record.standardize_attempted_at = Some(now);
        record.geocode_attempted_service = Some(self.config.service_name.clone());
        record.geocode_attempted_at = Some(now);
    }

    // --- Internal Helpers ---

    fn fetch(&self, payload: &ApiPayload) -> Result<ResponseObject> {
        let response = self
            .client
            .post(self.config.autocomplete_url())
            .json(payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AddrError::from_status(status));
        }

        let body = response.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "address API responded");
        ResponseObject::from_json(&body)
    }
}

impl VerificationComponent for AddressVerifier {
    fn service_name(&self) -> &str {
        &self.config.service_name
    }

    fn verify(&self, record: &mut AddressRecord) -> Verification {
        AddressVerifier::verify(self, record)
    }
}

fn failure_message(err: &AddrError) -> String {
    match err {
        AddrError::Json(e) => format!("Invalid response: {e}"),
        other => other.to_string(),
    }
}

// -----------------------------------------------------------------------------
// NORMALIZATION
// -----------------------------------------------------------------------------

/// Copies a candidate's normalized fields onto `record`.
///
/// For a primary candidate the first two segments of its street address
/// become street lines 1 and 2; otherwise the first segment becomes street
/// line 1 and street line 2 is cleared. The suburb is title-cased, state and
/// postcode are copied as-is.
///
/// Returns `Ok(true)` when the coordinates were applied as well. The
/// candidate is checked before anything is written, so an `Err` leaves
/// `record` untouched.
pub fn apply_candidate(record: &mut AddressRecord, candidate: &StreetAddressRecord) -> Result<bool> {
    let segments = split_street_address(candidate.street_address_str());
    let (street1, street2) = if candidate.is_primary() {
        match segments.as_slice() {
            [first, second, ..] => (*first, *second),
            _ => {
                return Err(AddrError::InvalidData(format!(
                    "primary match {:?} has fewer than two address segments",
                    candidate.street_address_str()
                )))
            }
        }
    } else {
        match segments.first() {
            Some(first) => (*first, ""),
            None => {
                return Err(AddrError::InvalidData(
                    "match has no street address".into(),
                ))
            }
        }
    };
    let suburb = candidate
        .suburb
        .as_deref()
        .ok_or_else(|| AddrError::InvalidData("match has no suburb".into()))?;

    record.street1 = street1.to_string();
    record.street2 = street2.to_string();
    record.city = title_case(suburb);
    record.state = candidate.state.clone().unwrap_or_default();
    record.postal_code = candidate.post_code.clone().unwrap_or_default();
    record.standardized_at = Some(Utc::now());

    if let Some((lat, lon)) = candidate.lat_lon() {
        if record.set_location_point(lat, lon) {
            record.geocoded_at = Some(Utc::now());
            return Ok(true);
        }
        debug!(lat, lon, "match coordinates rejected");
    }
    Ok(false)
}
