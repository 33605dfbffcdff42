// crates/addrverify-core/src/traits.rs
use crate::model::{AddressRecord, Verification};

/// A service that can standardize and geocode an address record in place.
///
/// Hosts that juggle several providers hold them as
/// `Box<dyn VerificationComponent>` and pick one by [`service_name`].
///
/// # Examples
/// ```rust
/// use addrverify_core::{AddressRecord, Verification, VerificationComponent, VerificationOutcome};
///
/// struct Offline;
/// impl VerificationComponent for Offline {
///     fn service_name(&self) -> &str { "Offline" }
///     fn verify(&self, _record: &mut AddressRecord) -> Verification {
///         Verification::new(VerificationOutcome::Unverified, "No match.")
///     }
/// }
///
/// let providers: Vec<Box<dyn VerificationComponent>> = vec![Box::new(Offline)];
/// let mut record = AddressRecord::default();
/// assert_eq!(providers[0].verify(&mut record).outcome, VerificationOutcome::Unverified);
/// ```
///
/// [`service_name`]: VerificationComponent::service_name
pub trait VerificationComponent: Send + Sync {
    /// Name recorded in the record's attribution fields.
    fn service_name(&self) -> &str;

    /// Verifies `record`, mutating it according to the outcome.
    fn verify(&self, record: &mut AddressRecord) -> Verification;
}
