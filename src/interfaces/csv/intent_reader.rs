use crate::domain::atm::AtmId;
use crate::domain::cash::Denomination;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

/// A user intent decoded from one script row.
///
/// This is the wire shape of the presentation layer's button presses and
/// text entries; the workflow's methods are the real contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Select(AtmId),
    Amount(String),
    Date(NaiveDate),
    Denomination { denomination: Denomination, delta: i64 },
    Submit,
    Pin(String),
    Cancel,
    Remove(usize),
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum Op {
    Select,
    Amount,
    Date,
    Denom,
    Submit,
    Pin,
    Cancel,
    Remove,
}

#[derive(Debug, Deserialize)]
struct IntentRecord {
    op: Op,
    value: Option<String>,
    count: Option<i64>,
}

impl TryFrom<IntentRecord> for Intent {
    type Error = Error;

    fn try_from(record: IntentRecord) -> Result<Self> {
        let value = |op: &str| {
            record
                .value
                .clone()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Intent(format!("{op} requires a value column")))
        };
        match record.op {
            Op::Select => Ok(Intent::Select(AtmId::new(value("select")?))),
            // An empty amount is a legal edit; it fails validation at
            // submission, not here.
            Op::Amount => Ok(Intent::Amount(record.value.clone().unwrap_or_default())),
            Op::Date => {
                let raw = value("date")?;
                let date = raw
                    .parse::<NaiveDate>()
                    .map_err(|e| Error::Intent(format!("bad date {raw:?}: {e}")))?;
                Ok(Intent::Date(date))
            }
            Op::Denom => {
                let raw = value("denom")?;
                let denomination = raw.parse::<Denomination>().map_err(Error::Intent)?;
                Ok(Intent::Denomination {
                    denomination,
                    delta: record.count.unwrap_or(1),
                })
            }
            Op::Submit => Ok(Intent::Submit),
            Op::Pin => Ok(Intent::Pin(value("pin")?)),
            Op::Cancel => Ok(Intent::Cancel),
            Op::Remove => {
                let raw = value("remove")?;
                let index = raw
                    .parse::<usize>()
                    .map_err(|e| Error::Intent(format!("bad ledger index {raw:?}: {e}")))?;
                Ok(Intent::Remove(index))
            }
        }
    }
}

/// Reads intents from a CSV script.
///
/// Wraps `csv::Reader` and yields an iterator over `Result<Intent>`,
/// trimming whitespace and tolerating short rows.
pub struct IntentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> IntentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and decodes intents, one script row at a time.
    pub fn intents(self) -> impl Iterator<Item = Result<Intent>> {
        self.reader
            .into_deserialize::<IntentRecord>()
            .map(|result| result.map_err(Error::from).and_then(Intent::try_from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(data: &str) -> Vec<Result<Intent>> {
        IntentReader::new(data.as_bytes()).intents().collect()
    }

    #[test]
    fn test_reader_full_script() {
        let data = "op, value, count\n\
                    select, 2,\n\
                    amount, 100,\n\
                    date, 2099-01-15,\n\
                    denom, fifty, 2\n\
                    submit,,\n\
                    pin, 0000,\n\
                    remove, 0,";
        let intents: Vec<Intent> = decode(data).into_iter().map(|r| r.unwrap()).collect();

        assert_eq!(
            intents,
            vec![
                Intent::Select(AtmId::new("2")),
                Intent::Amount("100".to_string()),
                Intent::Date(NaiveDate::from_ymd_opt(2099, 1, 15).unwrap()),
                Intent::Denomination {
                    denomination: Denomination::Fifty,
                    delta: 2,
                },
                Intent::Submit,
                Intent::Pin("0000".to_string()),
                Intent::Remove(0),
            ]
        );
    }

    #[test]
    fn test_denom_delta_defaults_to_one() {
        let intents = decode("op, value, count\ndenom, ten,");
        assert_eq!(
            *intents[0].as_ref().unwrap(),
            Intent::Denomination {
                denomination: Denomination::Ten,
                delta: 1,
            }
        );
    }

    #[test]
    fn test_negative_delta() {
        let intents = decode("op, value, count\ndenom, five, -1");
        assert_eq!(
            *intents[0].as_ref().unwrap(),
            Intent::Denomination {
                denomination: Denomination::Five,
                delta: -1,
            }
        );
    }

    #[test]
    fn test_unknown_op_is_an_error() {
        let intents = decode("op, value, count\nexplode, 1,");
        assert!(intents[0].is_err());
    }

    #[test]
    fn test_bad_denomination_is_an_error() {
        let intents = decode("op, value, count\ndenom, hundred, 1");
        assert!(intents[0].is_err());
    }

    #[test]
    fn test_missing_value_reported() {
        let intents = decode("op, value, count\nselect,,");
        assert!(intents[0].is_err());
    }

    #[test]
    fn test_empty_amount_is_legal() {
        let intents = decode("op, value, count\namount,,");
        assert_eq!(
            *intents[0].as_ref().unwrap(),
            Intent::Amount(String::new())
        );
    }
}
