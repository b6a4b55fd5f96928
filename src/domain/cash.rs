use crate::error::ReservationError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A positive monetary amount requested for withdrawal.
///
/// Wrapper around `rust_decimal::Decimal` to enforce positivity and keep
/// money arithmetic exact.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ReservationError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ReservationError::InvalidAmount(value.to_string()))
        }
    }

    /// Parses an amount from raw user text.
    ///
    /// Non-numeric and non-positive input is rejected here, before a
    /// reservation draft can advance.
    pub fn parse(text: &str) -> Result<Self, ReservationError> {
        text.trim()
            .parse::<Decimal>()
            .map_err(|_| ReservationError::InvalidAmount(text.to_string()))
            .and_then(Self::new)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ReservationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bill denominations a terminal dispenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    Fifty,
    Twenty,
    Ten,
    Five,
    One,
}

impl Denomination {
    pub const ALL: [Denomination; 5] = [
        Denomination::Fifty,
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::One,
    ];

    pub fn face_value(&self) -> Decimal {
        match self {
            Denomination::Fifty => dec!(50),
            Denomination::Twenty => dec!(20),
            Denomination::Ten => dec!(10),
            Denomination::Five => dec!(5),
            Denomination::One => dec!(1),
        }
    }
}

impl std::str::FromStr for Denomination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fifty" => Ok(Denomination::Fifty),
            "twenty" => Ok(Denomination::Twenty),
            "ten" => Ok(Denomination::Ten),
            "five" => Ok(Denomination::Five),
            "one" => Ok(Denomination::One),
            other => Err(format!("unknown denomination {other:?}")),
        }
    }
}

/// Per-denomination note counts for a withdrawal draft.
///
/// Counts never go negative: decrementing an empty slot is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationCounts {
    pub fifties: u32,
    pub twenties: u32,
    pub tens: u32,
    pub fives: u32,
    pub ones: u32,
}

impl DenominationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, denomination: Denomination) -> &mut u32 {
        match denomination {
            Denomination::Fifty => &mut self.fifties,
            Denomination::Twenty => &mut self.twenties,
            Denomination::Ten => &mut self.tens,
            Denomination::Five => &mut self.fives,
            Denomination::One => &mut self.ones,
        }
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::Fifty => self.fifties,
            Denomination::Twenty => self.twenties,
            Denomination::Ten => self.tens,
            Denomination::Five => self.fives,
            Denomination::One => self.ones,
        }
    }

    pub fn increment(&mut self, denomination: Denomination) {
        let slot = self.slot_mut(denomination);
        *slot = slot.saturating_add(1);
    }

    pub fn decrement(&mut self, denomination: Denomination) {
        let slot = self.slot_mut(denomination);
        *slot = slot.saturating_sub(1);
    }

    /// Applies a signed adjustment, clamping at zero on the way down.
    pub fn adjust(&mut self, denomination: Denomination, delta: i64) {
        let magnitude = u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX);
        let slot = self.slot_mut(denomination);
        *slot = if delta >= 0 {
            slot.saturating_add(magnitude)
        } else {
            slot.saturating_sub(magnitude)
        };
    }

    /// Sum of face value times count over every denomination.
    pub fn total(&self) -> Decimal {
        Denomination::ALL
            .iter()
            .map(|d| d.face_value() * Decimal::from(self.count(*d)))
            .sum()
    }

    /// Strict-equality check of the note total against the requested amount.
    ///
    /// Partial matches are rejected rather than auto-corrected: a
    /// reservation must never be for less or more cash than stated.
    pub fn reconcile(&self, requested: Amount) -> Result<(), ReservationError> {
        let total = self.total();
        if total == requested.value() {
            Ok(())
        } else {
            Err(ReservationError::DenominationMismatch {
                requested: requested.value(),
                total,
            })
        }
    }
}
