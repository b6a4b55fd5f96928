use super::atm::{AtmId, AtmRecord};
use super::reservation::Reservation;
use crate::error::ReservationError;

/// Supplies the candidate list of terminals.
///
/// An empty directory is a valid directory.
pub trait AtmDirectory {
    fn list_atms(&self) -> Vec<AtmRecord>;

    fn find(&self, id: &AtmId) -> Option<AtmRecord> {
        self.list_atms().into_iter().find(|atm| atm.id == *id)
    }
}

/// Verifies a user-supplied credential before a reservation is committed.
///
/// The concrete check is an adapter concern, so the fixed-secret verifier
/// used today can be replaced by a real authorization backend without
/// touching the state machine.
pub trait CredentialVerifier {
    fn verify(&self, candidate: &str) -> bool;
}

/// Produces reservation tokens.
///
/// Randomness source and uniqueness guarantees are the implementation's
/// concern; the core only requires a fresh token per confirmation.
pub trait TokenGenerator {
    fn next_token(&mut self) -> String;
}

/// Session-scoped storage of confirmed reservations, insertion-ordered.
pub trait ReservationStore {
    fn append(&mut self, reservation: Reservation);

    /// Removes and returns the reservation at `index`, preserving the
    /// relative order of the remainder.
    fn remove_at(&mut self, index: usize) -> Result<Reservation, ReservationError>;

    fn list(&self) -> Vec<Reservation>;
}

pub type AtmDirectoryBox = Box<dyn AtmDirectory>;
pub type CredentialVerifierBox = Box<dyn CredentialVerifier>;
pub type TokenGeneratorBox = Box<dyn TokenGenerator>;
pub type ReservationStoreBox = Box<dyn ReservationStore>;
