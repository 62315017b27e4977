//! # Podium Core
//!
//! Core types and query engine for the podium medal-table library.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod query;
pub mod table;

pub use error::{Error, Result};
pub use table::{CountryRow, MedalTable, COLUMNS};
