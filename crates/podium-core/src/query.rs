//! The query engine: a stateless set of read-only queries over a [`MedalTable`].
//!
//! Every query is deterministic given the table's contents and row order.
//! Aggregate scans degrade to 0 on an empty table; lookup and rank queries
//! fail with a distinguishable [`Error`] instead of defaulting to a sentinel.

use crate::error::{Error, Result};
use crate::table::{MedalTable, COLUMNS};

/// Number of rows in the table.
pub fn row_count(table: &MedalTable) -> usize {
    table.len()
}

/// Number of columns in the fixed schema.
pub fn column_count(_table: &MedalTable) -> usize {
    COLUMNS.len()
}

/// Total gold medals across all countries, Summer and Winter combined.
///
/// Reads the precomputed `GoldT` column rather than re-deriving it.
pub fn total_gold(table: &MedalTable) -> u64 {
    table.rows().iter().map(|r| u64::from(r.gold_total)).sum()
}

/// Summer gold medals of the named country.
///
/// The match is exact and case-sensitive. Fails with [`Error::NotFound`] if
/// no row matches, and [`Error::InvalidArgument`] for an empty name.
pub fn summer_gold_of(table: &MedalTable, country: &str) -> Result<u32> {
    if country.is_empty() {
        return Err(Error::InvalidArgument(
            "country name must not be empty".to_string(),
        ));
    }
    table
        .rows()
        .iter()
        .find(|row| row.country == country)
        .map(|row| row.gold_summer)
        .ok_or_else(|| Error::NotFound(country.to_string()))
}

/// Country code of the row with the most Summer golds.
///
/// On ties the first such row in table order wins. This is a positional
/// first-occurrence max, deliberately distinct from the ranked sort in
/// [`nth_best_summer_country`]: a later row replaces the candidate only when
/// strictly greater.
pub fn code_of_top_summer_gold(table: &MedalTable) -> Result<&str> {
    let mut rows = table.rows().iter();
    let mut best = rows.next().ok_or(Error::EmptyTable)?;
    for row in rows {
        if row.gold_summer > best.gold_summer {
            best = row;
        }
    }
    Ok(&best.code)
}

/// Country at rank `n` (0-based) of the Summer medal standings.
///
/// Standings order golds, then silvers, then bronzes, all descending, with
/// remaining ties broken alphabetically by country name. Country names are
/// unique, so the chain is a total order and the result is deterministic.
pub fn nth_best_summer_country(table: &MedalTable, n: usize) -> Result<&str> {
    if n >= table.len() {
        return Err(Error::IndexOutOfRange {
            index: n,
            len: table.len(),
        });
    }
    let mut ranked: Vec<_> = table.rows().iter().collect();
    ranked.sort_by(|a, b| {
        b.gold_summer
            .cmp(&a.gold_summer)
            .then_with(|| b.silver_summer.cmp(&a.silver_summer))
            .then_with(|| b.bronze_summer.cmp(&a.bronze_summer))
            .then_with(|| a.country.cmp(&b.country))
    });
    Ok(&ranked[n].country)
}

/// Number of countries with strictly more than `threshold` Winter medals.
///
/// The threshold may be any integer; a negative threshold counts every row.
pub fn count_above_winter_medal_threshold(table: &MedalTable, threshold: i64) -> usize {
    table
        .rows()
        .iter()
        .filter(|row| i64::from(row.total_winter) > threshold)
        .count()
}

/// Number of countries strictly above the average Winter gold count.
///
/// The population mean is computed once over the full table, including every
/// row, before filtering. A one-row table therefore always yields 0.
pub fn count_above_average_winter_gold(table: &MedalTable) -> usize {
    if table.is_empty() {
        return 0;
    }
    let sum: u64 = table.rows().iter().map(|r| u64::from(r.gold_winter)).sum();
    let mean = sum as f64 / table.len() as f64;
    table
        .rows()
        .iter()
        .filter(|row| f64::from(row.gold_winter) > mean)
        .count()
}

/// Summer golds won by countries whose name starts with the given letter.
///
/// The first character of the country name and the argument are both
/// upper-cased before comparison, so `"a"` and `"A"` give the same result.
/// Non-matching rows contribute 0. Fails with [`Error::InvalidArgument`]
/// unless the argument is exactly one character.
pub fn gold_count_for_countries_starting_with(table: &MedalTable, letter: &str) -> Result<u64> {
    let mut chars = letter.chars();
    let target = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(Error::InvalidArgument(format!(
                "letter must be exactly one character, got {:?}",
                letter
            )))
        }
    };
    let sum = table
        .rows()
        .iter()
        .filter(|row| {
            row.country
                .chars()
                .next()
                .is_some_and(|first| first.to_uppercase().eq(target.to_uppercase()))
        })
        .map(|row| u64::from(row.gold_summer))
        .sum();
    Ok(sum)
}

/// Number of hybernal countries.
///
/// A country is hybernal when its Winter medal total is at least its Summer
/// medal total; equality counts.
pub fn count_hybernal_countries(table: &MedalTable) -> usize {
    table
        .rows()
        .iter()
        .filter(|row| row.total_winter >= row.total_summer)
        .count()
}
