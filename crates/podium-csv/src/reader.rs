//! CSV reading into a validated [`MedalTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use podium_core::{CountryRow, Error, MedalTable, Result};
use tracing::{debug, info};

use crate::record::RawRecord;

/// Reads a medal table from any CSV byte source.
///
/// Records are kept in file order. The rows pass through
/// [`MedalTable::new`], so precomputation or uniqueness violations fail with
/// [`Error::Schema`] rather than producing a table the query layer cannot
/// trust.
pub fn read_table<R: Read>(reader: R) -> Result<MedalTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<RawRecord>() {
        let record = record.map_err(|e| Error::Csv(e.to_string()))?;
        debug!(country = %record.country, "parsed record");
        rows.push(CountryRow::from(record));
    }
    let table = MedalTable::new(rows)?;
    info!(rows = table.len(), "loaded medal table");
    Ok(table)
}

/// Loads a medal table from a CSV file on disk.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<MedalTable> {
    let file = File::open(path.as_ref())?;
    read_table(file)
}
