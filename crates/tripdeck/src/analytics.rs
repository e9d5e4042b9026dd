//! Derived trip statistics.
//!
//! Summary metrics over the trip collection: trip count, total budget,
//! distinct destination count, and the most-frequent destination. Everything
//! is recomputed from scratch on each call by a single pass over the list;
//! there is no incremental maintenance.

use serde::Serialize;

use crate::number;
use crate::trip::Trip;

/// Summary statistics over a trip collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripStats {
    /// Number of trips.
    pub count: usize,
    /// Sum of trip budgets, treating `NaN`/missing as 0.
    pub total_budget: f64,
    /// Count of unique case-insensitive, trimmed, non-empty destinations.
    pub distinct_destinations: usize,
    /// Most frequent destination, first-character-capitalized; `"-"` when
    /// there are no trips.
    pub top_destination: String,
}

/// Compute summary statistics for the given trips.
///
/// Pure function of the collection. Destination comparison is on trimmed,
/// lowercased values; empty destinations are ignored for the distinct and
/// top-destination metrics (but still count toward `count` and the budget).
#[must_use]
pub fn compute(trips: &[Trip]) -> TripStats {
    let total_budget = trips.iter().map(|trip| number::or_zero(trip.budget)).sum();

    let destinations: Vec<String> = trips
        .iter()
        .map(|trip| trip.destination.trim().to_lowercase())
        .filter(|destination| !destination.is_empty())
        .collect();

    // Frequency table in first-encounter order. Small lists, so a linear
    // scan beats pulling in an ordered map.
    let mut frequency: Vec<(String, usize)> = Vec::new();
    for destination in &destinations {
        match frequency.iter_mut().find(|(name, _)| name == destination) {
            Some((_, count)) => *count += 1,
            None => frequency.push((destination.clone(), 1)),
        }
    }
    let distinct_destinations = frequency.len();

    // Stable sort by descending count: on ties, the destination first
    // inserted into the table stays in front.
    frequency.sort_by(|a, b| b.1.cmp(&a.1));
    let top_destination = frequency
        .first()
        .map_or_else(|| "-".to_string(), |(name, _)| capitalize(name));

    TripStats {
        count: trips.len(),
        total_budget,
        distinct_destinations,
        top_destination,
    }
}

/// Uppercase only the first character, for display.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render the metrics panel.
#[must_use]
pub fn render(stats: &TripStats) -> String {
    [
        format!("Total trips:           {}", stats.count),
        format!("Total budget:          ${}", format_amount(stats.total_budget)),
        format!("Distinct destinations: {}", stats.distinct_destinations),
        format!("Top destination:       {}", stats.top_destination),
    ]
    .join("\n")
}

/// Format an amount with thousands separators, `toLocaleString`-style.
///
/// Non-finite values display as-is (`NaN`).
fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let raw = value.to_string();
    let (number, fraction) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (raw, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number.as_str()),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
