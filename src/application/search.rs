use crate::domain::atm::AtmRecord;

/// Case-insensitive substring match of `query` against a record's location.
///
/// An empty query matches every record.
pub fn matches_location(atm: &AtmRecord, query: &str) -> bool {
    atm.location.to_uppercase().contains(&query.to_uppercase())
}

/// Narrows a directory listing to the records whose location matches the
/// query, preserving directory order.
///
/// Hard filtering: non-matches are removed rather than flagged. No matches
/// is a valid result, not an error.
pub fn filter_directory(directory: &[AtmRecord], query: &str) -> Vec<AtmRecord> {
    directory
        .iter()
        .filter(|atm| matches_location(atm, query))
        .cloned()
        .collect()
}
