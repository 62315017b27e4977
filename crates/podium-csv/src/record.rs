//! One CSV record of the medal file.
//!
//! Field names match the CSV header:
//! `Country,Code,GoldS,SilverS,BronzeS,GoldW,SilverW,BronzeW,GoldT,TotalS,TotalW`

use podium_core::CountryRow;
use serde::Deserialize;

/// A raw, unvalidated CSV record.
///
/// The precomputed columns are carried through as read; validation happens
/// when the rows are handed to `MedalTable::new`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    /// Country name
    #[serde(rename = "Country")]
    pub country: String,
    /// Three-letter country code
    #[serde(rename = "Code")]
    pub code: String,
    /// Summer gold medals
    #[serde(rename = "GoldS")]
    pub gold_summer: u32,
    /// Summer silver medals
    #[serde(rename = "SilverS")]
    pub silver_summer: u32,
    /// Summer bronze medals
    #[serde(rename = "BronzeS")]
    pub bronze_summer: u32,
    /// Winter gold medals
    #[serde(rename = "GoldW")]
    pub gold_winter: u32,
    /// Winter silver medals
    #[serde(rename = "SilverW")]
    pub silver_winter: u32,
    /// Winter bronze medals
    #[serde(rename = "BronzeW")]
    pub bronze_winter: u32,
    /// Precomputed total gold
    #[serde(rename = "GoldT")]
    pub gold_total: u32,
    /// Precomputed Summer total
    #[serde(rename = "TotalS")]
    pub total_summer: u32,
    /// Precomputed Winter total
    #[serde(rename = "TotalW")]
    pub total_winter: u32,
}

impl From<RawRecord> for CountryRow {
    fn from(record: RawRecord) -> Self {
        CountryRow {
            country: record.country,
            code: record.code,
            gold_summer: record.gold_summer,
            silver_summer: record.silver_summer,
            bronze_summer: record.bronze_summer,
            gold_winter: record.gold_winter,
            silver_winter: record.silver_winter,
            bronze_winter: record.bronze_winter,
            gold_total: record.gold_total,
            total_summer: record.total_summer,
            total_winter: record.total_winter,
        }
    }
}
