use crate::domain::atm::AtmRecord;
use crate::domain::ports::{AtmDirectory, ReservationStore};
use crate::domain::reservation::Reservation;
use crate::error::ReservationError;

/// A fixed in-memory terminal directory.
///
/// Holds the records it was constructed with; `builtin` supplies the
/// directory the deployment ships by default.
#[derive(Default, Clone)]
pub struct InMemoryDirectory {
    records: Vec<AtmRecord>,
}

impl InMemoryDirectory {
    pub fn new(records: Vec<AtmRecord>) -> Self {
        Self { records }
    }

    /// The default five-terminal directory.
    pub fn builtin() -> Self {
        Self::new(vec![
            AtmRecord::new("1", "ATM 1", "Manhattan"),
            AtmRecord::new("2", "ATM 2", "Brooklyn"),
            AtmRecord::new("3", "ATM 3", "Queens"),
            AtmRecord::new("4", "ATM 4", "Bronx"),
            AtmRecord::new("5", "ATM 5", "Staten Island"),
        ])
    }
}

impl AtmDirectory for InMemoryDirectory {
    fn list_atms(&self) -> Vec<AtmRecord> {
        self.records.clone()
    }
}

/// The session ledger: an insertion-ordered in-memory collection of
/// confirmed reservations.
///
/// Lives exactly as long as the session; destroyed with no durability
/// guarantee, which is the design contract for this store.
#[derive(Default)]
pub struct InMemoryLedger {
    reservations: Vec<Reservation>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

impl ReservationStore for InMemoryLedger {
    fn append(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    fn remove_at(&mut self, index: usize) -> Result<Reservation, ReservationError> {
        if index < self.reservations.len() {
            Ok(self.reservations.remove(index))
        } else {
            Err(ReservationError::IndexOutOfRange {
                index,
                len: self.reservations.len(),
            })
        }
    }

    fn list(&self) -> Vec<Reservation> {
        self.reservations.clone()
    }
}
