//! Loads a medal CSV file and prints the summary report.
//!
//! ```bash
//! cargo run --example medal_report -- games.csv
//! ```

use podium::logging::LogConfig;
use podium::{load_table, MedalReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = LogConfig::info().init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "games.csv".to_string());

    let games = load_table(&path)?;
    let report = MedalReport::for_table(&games)?;
    print!("{}", report);

    Ok(())
}
