use cashpoint::domain::atm::AtmRecord;
use cashpoint::domain::cash::{Amount, DenominationCounts};
use cashpoint::domain::ports::{ReservationStore, ReservationStoreBox};
use cashpoint::domain::reservation::Reservation;
use cashpoint::error::ReservationError;
use cashpoint::infrastructure::in_memory::InMemoryLedger;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn reservation(token: &str) -> Reservation {
    Reservation {
        atm: AtmRecord::new("1", "ATM 1", "Manhattan"),
        amount: Amount::new(dec!(20)).unwrap(),
        date: NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
        token: token.to_string(),
        denominations: DenominationCounts {
            twenties: 1,
            ..DenominationCounts::new()
        },
    }
}

fn ledger_of(tokens: &[&str]) -> ReservationStoreBox {
    let mut ledger: ReservationStoreBox = Box::new(InMemoryLedger::new());
    for token in tokens {
        ledger.append(reservation(token));
    }
    ledger
}

#[test]
fn test_append_keeps_insertion_order() {
    let ledger = ledger_of(&["10000000001", "10000000002", "10000000003"]);
    let tokens: Vec<String> = ledger.list().into_iter().map(|r| r.token).collect();
    assert_eq!(tokens, vec!["10000000001", "10000000002", "10000000003"]);
}

#[test]
fn test_remove_every_valid_index() {
    let tokens = ["10000000001", "10000000002", "10000000003"];
    for index in 0..tokens.len() {
        let mut ledger = ledger_of(&tokens);
        let removed = ledger.remove_at(index).unwrap();
        assert_eq!(removed.token, tokens[index]);

        let remaining: Vec<String> = ledger.list().into_iter().map(|r| r.token).collect();
        let expected: Vec<String> = tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, t)| t.to_string())
            .collect();
        assert_eq!(remaining, expected);
    }
}

#[test]
fn test_remove_out_of_range_leaves_ledger_unchanged() {
    let mut ledger = ledger_of(&["10000000001", "10000000002"]);

    let err = ledger.remove_at(2).unwrap_err();
    assert_eq!(err, ReservationError::IndexOutOfRange { index: 2, len: 2 });
    assert_eq!(ledger.list().len(), 2);

    let err = ledger.remove_at(usize::MAX).unwrap_err();
    assert!(matches!(err, ReservationError::IndexOutOfRange { .. }));
    assert_eq!(ledger.list().len(), 2);
}

#[test]
fn test_remove_from_empty_ledger() {
    let mut ledger: ReservationStoreBox = Box::new(InMemoryLedger::new());
    let err = ledger.remove_at(0).unwrap_err();
    assert_eq!(err, ReservationError::IndexOutOfRange { index: 0, len: 0 });
}

#[test]
fn test_list_is_a_snapshot_not_a_live_view() {
    let ledger = ledger_of(&["10000000001"]);
    let mut listed = ledger.list();
    listed.clear();
    assert_eq!(ledger.list().len(), 1);
}
