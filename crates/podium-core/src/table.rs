//! The medal table: an ordered, immutable set of per-country rows.
//!
//! The table is constructed once from an external source and never mutated.
//! All precomputed columns (`GoldT`, `TotalS`, `TotalW`) are verified at
//! construction time so the query layer can rely on them without re-deriving.

use crate::error::{Error, Result};

/// Column names of the fixed schema, in table order.
pub const COLUMNS: [&str; 11] = [
    "Country", "Code", "GoldS", "SilverS", "BronzeS", "GoldW", "SilverW", "BronzeW", "GoldT",
    "TotalS", "TotalW",
];

/// One row of the medal table: a single country's medal counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    /// Country name, unique within a table
    pub country: String,
    /// Three upper-case ASCII letters
    pub code: String,
    /// Summer gold medals
    pub gold_summer: u32,
    /// Summer silver medals
    pub silver_summer: u32,
    /// Summer bronze medals
    pub bronze_summer: u32,
    /// Winter gold medals
    pub gold_winter: u32,
    /// Winter silver medals
    pub silver_winter: u32,
    /// Winter bronze medals
    pub bronze_winter: u32,
    /// Precomputed `gold_summer + gold_winter`
    pub gold_total: u32,
    /// Precomputed sum of all Summer medals
    pub total_summer: u32,
    /// Precomputed sum of all Winter medals
    pub total_winter: u32,
}

impl CountryRow {
    /// Builds a row from per-season medal counts, filling in the
    /// precomputed total columns.
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        summer: (u32, u32, u32),
        winter: (u32, u32, u32),
    ) -> Self {
        let (gold_summer, silver_summer, bronze_summer) = summer;
        let (gold_winter, silver_winter, bronze_winter) = winter;
        CountryRow {
            country: country.into(),
            code: code.into(),
            gold_summer,
            silver_summer,
            bronze_summer,
            gold_winter,
            silver_winter,
            bronze_winter,
            gold_total: gold_summer + gold_winter,
            total_summer: gold_summer + silver_summer + bronze_summer,
            total_winter: gold_winter + silver_winter + bronze_winter,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.code.len() != 3 || !self.code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(Error::Schema(format!(
                "{}: Code must be exactly 3 upper-case letters, got {:?}",
                self.country, self.code
            )));
        }
        // Widen before summing so pathological counts cannot overflow
        let gold_total = u64::from(self.gold_summer) + u64::from(self.gold_winter);
        if u64::from(self.gold_total) != gold_total {
            return Err(Error::Schema(format!(
                "{}: GoldT is {} but GoldS + GoldW is {}",
                self.country, self.gold_total, gold_total
            )));
        }
        let total_summer = u64::from(self.gold_summer)
            + u64::from(self.silver_summer)
            + u64::from(self.bronze_summer);
        if u64::from(self.total_summer) != total_summer {
            return Err(Error::Schema(format!(
                "{}: TotalS is {} but the Summer medals sum to {}",
                self.country, self.total_summer, total_summer
            )));
        }
        let total_winter = u64::from(self.gold_winter)
            + u64::from(self.silver_winter)
            + u64::from(self.bronze_winter);
        if u64::from(self.total_winter) != total_winter {
            return Err(Error::Schema(format!(
                "{}: TotalW is {} but the Winter medals sum to {}",
                self.country, self.total_winter, total_winter
            )));
        }
        Ok(())
    }
}

/// The medal table.
///
/// Rows keep the order they were loaded in; positional queries depend on it.
/// There is no mutating surface: once constructed, the table is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedalTable {
    rows: Vec<CountryRow>,
}

impl MedalTable {
    /// Constructs a table, verifying the schema invariants.
    ///
    /// Checks every row's `Code` shape and the `GoldT` / `TotalS` / `TotalW`
    /// precomputations, and rejects duplicate country names. Row order is
    /// preserved exactly as given.
    pub fn new(rows: Vec<CountryRow>) -> Result<Self> {
        for row in &rows {
            row.validate()?;
        }
        for (i, row) in rows.iter().enumerate() {
            if rows[..i].iter().any(|r| r.country == row.country) {
                return Err(Error::Schema(format!(
                    "duplicate country: {}",
                    row.country
                )));
            }
        }
        Ok(MedalTable { rows })
    }

    /// An empty table.
    pub fn empty() -> Self {
        MedalTable { rows: Vec::new() }
    }

    /// The rows, in load order.
    pub fn rows(&self) -> &[CountryRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
