/// Tests for the query engine through the public facade
use podium::{query, CountryRow, Error, MedalTable};

fn games() -> MedalTable {
    MedalTable::new(vec![
        CountryRow::new("Argentina", "ARG", (5, 2, 1), (0, 0, 0)),
        CountryRow::new("Brazil", "BRA", (7, 6, 6), (0, 0, 0)),
        CountryRow::new("Norway", "NOR", (3, 1, 1), (16, 14, 11)),
        CountryRow::new("Australia", "AUS", (2, 4, 4), (0, 1, 1)),
        CountryRow::new("Denmark", "DEN", (2, 4, 4), (0, 0, 0)),
    ])
    .unwrap()
}

#[test]
fn test_row_count() {
    assert_eq!(query::row_count(&games()), 5);
    assert_eq!(query::row_count(&MedalTable::empty()), 0);
}

#[test]
fn test_column_count_is_fixed_by_schema() {
    assert_eq!(query::column_count(&games()), podium::COLUMNS.len());
    assert_eq!(
        query::column_count(&MedalTable::empty()),
        query::column_count(&games())
    );
}

#[test]
fn test_total_gold_agrees_with_precomputed_column() {
    let games = games();
    let from_seasons: u64 = games
        .rows()
        .iter()
        .map(|r| u64::from(r.gold_summer) + u64::from(r.gold_winter))
        .sum();
    assert_eq!(query::total_gold(&games), from_seasons);
    assert_eq!(query::total_gold(&games), 5 + 7 + 3 + 16 + 2 + 2);
}

#[test]
fn test_summer_gold_of_country() {
    let games = games();
    assert_eq!(query::summer_gold_of(&games, "Brazil").unwrap(), 7);
    assert_eq!(query::summer_gold_of(&games, "Norway").unwrap(), 3);

    match query::summer_gold_of(&games, "France") {
        Err(Error::NotFound(name)) => assert_eq!(name, "France"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_top_summer_gold_first_occurrence_wins() {
    // GoldS values 2, 9, 9, 1: the first 9 (row 1) must win
    let games = MedalTable::new(vec![
        CountryRow::new("Chile", "CHI", (2, 0, 0), (0, 0, 0)),
        CountryRow::new("Kenya", "KEN", (9, 0, 0), (0, 0, 0)),
        CountryRow::new("Ghana", "GHA", (9, 0, 0), (0, 0, 0)),
        CountryRow::new("Peru", "PER", (1, 0, 0), (0, 0, 0)),
    ])
    .unwrap();
    assert_eq!(query::code_of_top_summer_gold(&games).unwrap(), "KEN");

    assert!(matches!(
        query::code_of_top_summer_gold(&MedalTable::empty()),
        Err(Error::EmptyTable)
    ));
}

#[test]
fn test_rank_zero_matches_full_sort() {
    let games = games();
    let mut sorted: Vec<_> = games.rows().iter().collect();
    sorted.sort_by(|a, b| {
        b.gold_summer
            .cmp(&a.gold_summer)
            .then_with(|| b.silver_summer.cmp(&a.silver_summer))
            .then_with(|| b.bronze_summer.cmp(&a.bronze_summer))
            .then_with(|| a.country.cmp(&b.country))
    });
    assert_eq!(
        query::nth_best_summer_country(&games, 0).unwrap(),
        sorted[0].country
    );
}

#[test]
fn test_rank_alphabetic_tie_break() {
    let games = games();
    // Australia and Denmark tie on (2, 4, 4); Australia sorts first
    assert_eq!(query::nth_best_summer_country(&games, 3).unwrap(), "Australia");
    assert_eq!(query::nth_best_summer_country(&games, 4).unwrap(), "Denmark");
}

#[test]
fn test_rank_out_of_range() {
    let games = games();
    let n = query::row_count(&games);
    assert!(matches!(
        query::nth_best_summer_country(&games, n),
        Err(Error::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_winter_threshold_monotonicity() {
    let games = games();
    let mut previous = query::count_above_winter_medal_threshold(&games, -5);
    assert_eq!(previous, 5);
    for threshold in -4..60 {
        let count = query::count_above_winter_medal_threshold(&games, threshold);
        assert!(count <= previous, "count rose at threshold {}", threshold);
        previous = count;
    }
    assert_eq!(previous, 0);
}

#[test]
fn test_above_average_winter_gold_all_equal_is_zero() {
    let games = MedalTable::new(vec![
        CountryRow::new("Chile", "CHI", (0, 0, 0), (3, 0, 0)),
        CountryRow::new("Kenya", "KEN", (0, 0, 0), (3, 0, 0)),
    ])
    .unwrap();
    assert_eq!(query::count_above_average_winter_gold(&games), 0);
}

#[test]
fn test_gold_count_by_letter_case_normalized() {
    let games = MedalTable::new(vec![
        CountryRow::new("Argentina", "ARG", (5, 0, 0), (0, 0, 0)),
        CountryRow::new("Brazil", "BRA", (3, 0, 0), (0, 0, 0)),
        CountryRow::new("Australia", "AUS", (2, 0, 0), (0, 0, 0)),
    ])
    .unwrap();
    assert_eq!(
        query::gold_count_for_countries_starting_with(&games, "a").unwrap(),
        7
    );
    assert_eq!(
        query::gold_count_for_countries_starting_with(&games, "A").unwrap(),
        7
    );
    assert!(matches!(
        query::gold_count_for_countries_starting_with(&games, "ab"),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_hybernal_boundary() {
    let equal = MedalTable::new(vec![CountryRow::new("Chile", "CHI", (1, 1, 1), (1, 1, 1))])
        .unwrap();
    assert_eq!(query::count_hybernal_countries(&equal), 1);

    let one_less = MedalTable::new(vec![CountryRow::new("Chile", "CHI", (1, 1, 1), (1, 1, 0))])
        .unwrap();
    assert_eq!(query::count_hybernal_countries(&one_less), 0);
}

#[test]
fn test_queries_are_idempotent() {
    let games = games();
    for _ in 0..2 {
        assert_eq!(query::total_gold(&games), 35);
        assert_eq!(query::code_of_top_summer_gold(&games).unwrap(), "BRA");
        assert_eq!(query::count_hybernal_countries(&games), 1);
    }
}
