//! Character-frequency tabulation for manual cryptanalysis.

use std::collections::HashMap;

/// Builds a relative frequency table over the 26 uppercase Latin letters.
///
/// Non-alphabetic characters are stripped and case is folded before
/// counting. Every letter appears in the table (0.0 when absent), and
/// frequencies are rounded to five decimal places. An input with no
/// letters yields an all-zero table.
pub fn frequency_distribution(text: &str) -> HashMap<char, f64> {
    let letters: Vec<char> = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let mut table: HashMap<char, f64> = ('A'..='Z').map(|c| (c, 0.0)).collect();
    for letter in &letters {
        *table.get_mut(letter).expect("table covers A-Z") += 1.0;
    }
    if !letters.is_empty() {
        for frequency in table.values_mut() {
            *frequency = round_to(*frequency / letters.len() as f64, 5);
        }
    }
    table
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
