#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use podium_core::{query, CountryRow, MedalTable};

#[derive(Debug, Arbitrary)]
struct FuzzRow {
    country: String,
    code: String,
    summer: (u16, u16, u16),
    winter: (u16, u16, u16),
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    rows: Vec<FuzzRow>,
    country: String,
    rank: usize,
    threshold: i64,
    letter: String,
}

fuzz_target!(|input: FuzzInput| {
    if input.rows.len() > 1_000 {
        return;
    }

    let rows: Vec<CountryRow> = input
        .rows
        .iter()
        .map(|r| {
            CountryRow::new(
                r.country.clone(),
                r.code.clone(),
                (r.summer.0.into(), r.summer.1.into(), r.summer.2.into()),
                (r.winter.0.into(), r.winter.1.into(), r.winter.2.into()),
            )
        })
        .collect();

    // Construction may reject the rows (bad codes, duplicates), but must
    // never panic; queries over an accepted table must never panic either.
    let Ok(table) = MedalTable::new(rows) else {
        return;
    };

    let _ = query::row_count(&table);
    let _ = query::column_count(&table);
    let _ = query::total_gold(&table);
    let _ = query::summer_gold_of(&table, &input.country);
    let _ = query::code_of_top_summer_gold(&table);
    let _ = query::nth_best_summer_country(&table, input.rank);
    let _ = query::count_above_winter_medal_threshold(&table, input.threshold);
    let _ = query::count_above_average_winter_gold(&table);
    let _ = query::gold_count_for_countries_starting_with(&table, &input.letter);
    let _ = query::count_hybernal_countries(&table);
});
