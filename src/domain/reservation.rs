use super::atm::AtmRecord;
use super::cash::{Amount, DenominationCounts};
use crate::error::ReservationError;
use chrono::NaiveDate;
use serde::Serialize;

/// Rejects withdrawal dates earlier than the reference date.
///
/// The comparison is calendar-date only. Callers pass a `NaiveDate` for the
/// reference, so the time-of-day of the session clock can never reject a
/// same-day reservation.
pub fn ensure_reservable(
    candidate: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, ReservationError> {
    if candidate >= today {
        Ok(candidate)
    } else {
        Err(ReservationError::PastDate {
            selected: candidate,
            today,
        })
    }
}

/// A confirmed request to withdraw a specific amount, in specific bill
/// denominations, from a specific terminal, on a specific date.
///
/// Constructed only by the workflow after the PIN gate passes; handed off to
/// the ledger by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub atm: AtmRecord,
    pub amount: Amount,
    pub date: NaiveDate,
    pub token: String,
    pub denominations: DenominationCounts,
}
