use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for reservation operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Recoverable, user-facing validation failures.
///
/// Every variant is resolved at the boundary where it occurs and returned to
/// the immediate caller; none of these abort the workflow, which stays in a
/// well-defined state after any rejection. The enum is `Clone + PartialEq`
/// because the workflow snapshot carries the most recent rejection for the
/// presentation layer to render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReservationError {
    #[error("amount must be a positive number, got {0:?}")]
    InvalidAmount(String),
    #[error("denomination total {total} does not match the requested amount {requested}")]
    DenominationMismatch { requested: Decimal, total: Decimal },
    #[error("selected date {selected} is before today ({today})")]
    PastDate {
        selected: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },
    #[error("invalid PIN")]
    InvalidPin,
    #[error("index {index} out of range for ledger of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown ATM id {0:?}")]
    UnknownAtm(String),
    #[error("{intent} is not valid while {step}")]
    OutOfTurn {
        intent: &'static str,
        step: &'static str,
    },
}

/// Top-level error for the binary and the CSV interface layer.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Reservation(#[from] ReservationError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("intent error: {0}")]
    Intent(String),
}
