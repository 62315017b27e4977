#![no_main]

use libfuzzer_sys::fuzz_target;
use podium_csv::read_table;

fuzz_target!(|data: &[u8]| {
    // Limit input size to prevent timeout
    if data.len() > 1_000_000 {
        return;
    }

    // Try to read a table - should never panic
    let _ = read_table(data);
});
