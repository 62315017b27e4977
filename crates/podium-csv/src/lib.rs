//! # Podium CSV
//!
//! CSV ingestion for the podium medal-table library.
//!
//! Deserializes `games.csv`-shaped files into a [`podium_core::MedalTable`],
//! preserving file order and enforcing the table's schema invariants at load
//! time so ingestion bugs surface here rather than inside the query layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod reader;
pub mod record;

pub use reader::{load_table, read_table};
pub use record::RawRecord;
