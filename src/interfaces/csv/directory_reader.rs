use crate::domain::atm::AtmRecord;
use crate::error::{Error, Result};
use std::io::Read;

/// Reads terminal records from a CSV source with `id,name,location` columns.
pub struct DirectoryReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DirectoryReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn records(self) -> impl Iterator<Item = Result<AtmRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(Error::from))
    }
}
