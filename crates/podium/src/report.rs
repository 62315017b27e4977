//! Console summary report over a medal table.
//!
//! Runs the fixed query set of the original report program and renders it
//! via [`std::fmt::Display`]. Lookup entries that depend on specific rows
//! being present (Brazil, a 21st country) are `Option`s so one missing row
//! does not fail the whole report.

use std::fmt;

use podium_core::{query, MedalTable, Result};

/// The country whose Summer gold count the report calls out.
pub const FEATURED_COUNTRY: &str = "Brazil";

/// Rank (0-based) shown in the "N-th best Summer country" line.
pub const FEATURED_RANK: usize = 20;

/// Winter medal threshold used by the report's count line.
pub const WINTER_THRESHOLD: i64 = 10;

/// A precomputed summary of the medal table.
#[derive(Debug, Clone, PartialEq)]
pub struct MedalReport {
    /// Number of rows
    pub rows: usize,
    /// Number of schema columns
    pub columns: usize,
    /// Total gold medals, Summer and Winter combined
    pub total_gold: u64,
    /// Summer golds of [`FEATURED_COUNTRY`], if present
    pub featured_summer_gold: Option<u32>,
    /// Code of the country with the most Summer golds, if any rows exist
    pub top_summer_code: Option<String>,
    /// Country at [`FEATURED_RANK`] of the Summer standings, if in range
    pub featured_rank_country: Option<String>,
    /// Countries with more than [`WINTER_THRESHOLD`] Winter medals
    pub above_winter_threshold: usize,
    /// Countries strictly above the average Winter gold count
    pub above_average_winter_gold: usize,
    /// Summer golds of countries starting with 'a'
    pub gold_starting_with_a: u64,
    /// Summer golds of countries starting with 'd'
    pub gold_starting_with_d: u64,
    /// Hybernal countries (Winter total >= Summer total)
    pub hybernal: usize,
}

impl MedalReport {
    /// Runs every report query against the table.
    pub fn for_table(table: &MedalTable) -> Result<Self> {
        Ok(MedalReport {
            rows: query::row_count(table),
            columns: query::column_count(table),
            total_gold: query::total_gold(table),
            featured_summer_gold: query::summer_gold_of(table, FEATURED_COUNTRY).ok(),
            top_summer_code: query::code_of_top_summer_gold(table)
                .ok()
                .map(str::to_string),
            featured_rank_country: query::nth_best_summer_country(table, FEATURED_RANK)
                .ok()
                .map(str::to_string),
            above_winter_threshold: query::count_above_winter_medal_threshold(
                table,
                WINTER_THRESHOLD,
            ),
            above_average_winter_gold: query::count_above_average_winter_gold(table),
            gold_starting_with_a: query::gold_count_for_countries_starting_with(table, "a")?,
            gold_starting_with_d: query::gold_count_for_countries_starting_with(table, "d")?,
            hybernal: query::count_hybernal_countries(table),
        })
    }
}

impl fmt::Display for MedalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {}", self.rows)?;
        writeln!(f, "Columns: {}", self.columns)?;
        writeln!(f, "Total gold medals: {}", self.total_gold)?;
        match self.featured_summer_gold {
            Some(gold) => writeln!(f, "Summer golds of {}: {}", FEATURED_COUNTRY, gold)?,
            None => writeln!(f, "Summer golds of {}: (not in table)", FEATURED_COUNTRY)?,
        }
        match &self.top_summer_code {
            Some(code) => writeln!(f, "Top Summer gold code: {}", code)?,
            None => writeln!(f, "Top Summer gold code: (empty table)")?,
        }
        match &self.featured_rank_country {
            Some(country) => writeln!(
                f,
                "Summer standings rank {}: {}",
                FEATURED_RANK, country
            )?,
            None => writeln!(f, "Summer standings rank {}: (out of range)", FEATURED_RANK)?,
        }
        writeln!(
            f,
            "Countries with more than {} Winter medals: {}",
            WINTER_THRESHOLD, self.above_winter_threshold
        )?;
        writeln!(
            f,
            "Countries above average Winter gold: {}",
            self.above_average_winter_gold
        )?;
        writeln!(
            f,
            "Summer golds of countries starting with 'a': {}",
            self.gold_starting_with_a
        )?;
        writeln!(
            f,
            "Summer golds of countries starting with 'd': {}",
            self.gold_starting_with_d
        )?;
        writeln!(f, "Hybernal countries: {}", self.hybernal)
    }
}
