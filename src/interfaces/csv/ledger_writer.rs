use crate::domain::reservation::Reservation;
use crate::error::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// One ledger line, flattened for tabular output.
#[derive(Debug, Serialize)]
struct ReservationRow<'a> {
    atm_id: &'a str,
    atm_name: &'a str,
    location: &'a str,
    amount: Decimal,
    date: NaiveDate,
    token: &'a str,
    fifties: u32,
    twenties: u32,
    tens: u32,
    fives: u32,
    ones: u32,
}

impl<'a> From<&'a Reservation> for ReservationRow<'a> {
    fn from(reservation: &'a Reservation) -> Self {
        Self {
            atm_id: reservation.atm.id.as_str(),
            atm_name: &reservation.atm.name,
            location: &reservation.atm.location,
            amount: reservation.amount.value(),
            date: reservation.date,
            token: &reservation.token,
            fifties: reservation.denominations.fifties,
            twenties: reservation.denominations.twenties,
            tens: reservation.denominations.tens,
            fives: reservation.denominations.fives,
            ones: reservation.denominations.ones,
        }
    }
}

/// Writes the session ledger as CSV to any `Write` sink.
pub struct LedgerWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> LedgerWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_reservations(&mut self, reservations: &[Reservation]) -> Result<()> {
        for reservation in reservations {
            self.writer.serialize(ReservationRow::from(reservation))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Renders the ledger as a JSON array of reservations.
pub fn render_json(reservations: &[Reservation]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reservations)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::atm::AtmRecord;
    use crate::domain::cash::{Amount, DenominationCounts};
    use rust_decimal_macros::dec;

    fn reservation() -> Reservation {
        Reservation {
            atm: AtmRecord::new("2", "ATM 2", "Brooklyn"),
            amount: Amount::new(dec!(100)).unwrap(),
            date: NaiveDate::from_ymd_opt(2099, 1, 15).unwrap(),
            token: "12345678901".to_string(),
            denominations: DenominationCounts {
                fifties: 2,
                ..DenominationCounts::new()
            },
        }
    }

    #[test]
    fn test_csv_row_shape() {
        let mut out = Vec::new();
        LedgerWriter::new(&mut out)
            .write_reservations(&[reservation()])
            .unwrap();

        let rendered = String::from_utf8(out).unwrap();
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next().unwrap(),
            "atm_id,atm_name,location,amount,date,token,fifties,twenties,tens,fives,ones"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2,ATM 2,Brooklyn,100,2099-01-15,12345678901,2,0,0,0,0"
        );
    }

    #[test]
    fn test_empty_ledger_writes_nothing() {
        let mut out = Vec::new();
        LedgerWriter::new(&mut out).write_reservations(&[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_rendering() {
        let rendered = render_json(&[reservation()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["token"], "12345678901");
        assert_eq!(value[0]["atm"]["location"], "Brooklyn");
        assert_eq!(value[0]["denominations"]["fifties"], 2);
    }
}
