//! # Podium
//!
//! Analytical queries over a single in-memory table of per-country Olympic
//! medal counts.
//!
//! The table is loaded once, never mutated, and every query is a pure,
//! read-only function with exact tie-break and comparison semantics.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use podium::{load_table, query};
//!
//! fn main() -> podium::Result<()> {
//!     let games = load_table("games.csv")?;
//!
//!     println!("countries: {}", query::row_count(&games));
//!     println!("total gold: {}", query::total_gold(&games));
//!     println!("top summer code: {}", query::code_of_top_summer_gold(&games)?);
//!     println!("20th best: {}", query::nth_best_summer_country(&games, 20)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building a table by hand
//!
//! ```rust
//! use podium::{CountryRow, MedalTable, query};
//!
//! let games = MedalTable::new(vec![
//!     CountryRow::new("Brazil", "BRA", (7, 6, 6), (0, 0, 0)),
//!     CountryRow::new("Norway", "NOR", (3, 1, 1), (16, 14, 11)),
//! ])?;
//!
//! assert_eq!(query::summer_gold_of(&games, "Brazil")?, 7);
//! assert_eq!(query::count_hybernal_countries(&games), 1);
//! # Ok::<(), podium::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;
pub mod report;

// Re-export core types
pub use podium_core::{query, CountryRow, Error, MedalTable, Result, COLUMNS};

// Re-export ingestion
pub use podium_csv::{load_table, read_table, RawRecord};

pub use report::MedalReport;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
