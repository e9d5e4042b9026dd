//! Trip records and the trip list.
//!
//! Trips are stored as one ordered JSON snapshot under `travel.trips`;
//! insertion order is list order, and deletion is by position against a
//! snapshot re-read at delete time. Each trip carries a generated three-day
//! itinerary derived purely from its destination and interests.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::number;
use crate::store::{keys, Store};

/// Day 2 focus used when no interests were given.
const DEFAULT_INTERESTS: &str = "top attractions";

/// A user-authored travel plan record.
///
/// Persisted inside the `travel.trips` sequence with camelCase field names.
/// `budget` and `travelers` keep their loosely-coerced values,
/// including `NaN` for unparseable input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Destination, trimmed.
    pub destination: String,
    /// Start date, as entered.
    #[serde(default)]
    pub start_date: String,
    /// End date, as entered.
    #[serde(default)]
    pub end_date: String,
    /// Budget in dollars; `NaN` when the input didn't parse.
    #[serde(with = "number::lenient", default)]
    pub budget: f64,
    /// Traveler count; `NaN` when the input didn't parse.
    #[serde(with = "number::lenient", default)]
    pub travelers: f64,
    /// Free-text interests, trimmed.
    #[serde(default)]
    pub interests: String,
    /// Free-text notes, trimmed.
    #[serde(default)]
    pub notes: String,
    /// The generated three-day plan.
    #[serde(default)]
    pub itinerary: Vec<String>,
}

/// Raw trip form fields, before trimming and coercion.
#[derive(Debug, Clone, Default)]
pub struct TripInput {
    /// Destination field, as typed.
    pub destination: String,
    /// Start date field, as typed.
    pub start_date: String,
    /// End date field, as typed.
    pub end_date: String,
    /// Budget field, as typed; coerced, never validated.
    pub budget: String,
    /// Travelers field, as typed; coerced, never validated.
    pub travelers: String,
    /// Interests field, as typed.
    pub interests: String,
    /// Notes field, as typed.
    pub notes: String,
}

/// Generate the fixed three-day itinerary for a trip.
///
/// Pure function of `(destination, interests)`; Day 2 falls back to
/// "top attractions" when interests is empty.
#[must_use]
pub fn generate_itinerary(destination: &str, interests: &str) -> Vec<String> {
    let focus = if interests.is_empty() {
        DEFAULT_INTERESTS
    } else {
        interests
    };

    vec![
        format!("Day 1: Arrive in {destination}, check-in, and local neighborhood walk."),
        format!("Day 2: Focus on {focus} and local cuisine tours."),
        "Day 3: Flexible day for shopping, hidden gems, and evening cultural activity.".to_string(),
    ]
}

/// Load the stored trip collection in insertion order.
#[must_use]
pub fn load(store: &Store) -> Vec<Trip> {
    store.get(keys::TRIPS, Vec::new())
}

/// Build a trip from form input, append it, and persist the collection.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub fn add(store: &Store, input: &TripInput) -> Result<Trip> {
    let destination = input.destination.trim().to_string();
    let interests = input.interests.trim().to_string();
    let itinerary = generate_itinerary(&destination, &interests);

    let trip = Trip {
        destination,
        start_date: input.start_date.trim().to_string(),
        end_date: input.end_date.trim().to_string(),
        budget: number::coerce(&input.budget),
        travelers: number::coerce(&input.travelers),
        interests,
        notes: input.notes.trim().to_string(),
        itinerary,
    };

    let mut trips = load(store);
    trips.push(trip.clone());
    store.set(keys::TRIPS, &trips)?;
    Ok(trip)
}

/// Delete the trip at `index`, re-reading the collection first.
///
/// Returns `true` if a trip was removed, `false` for an out-of-range index
/// (a silent no-op, never an error).
///
/// # Errors
///
/// Returns an error if the store write fails.
pub fn delete(store: &Store, index: usize) -> Result<bool> {
    // Positions are only meaningful against the snapshot current at the
    // moment of the delete, not whatever was last rendered.
    let mut trips = load(store);
    if index >= trips.len() {
        debug!("Delete index {index} out of range ({} trips)", trips.len());
        return Ok(false);
    }

    trips.remove(index);
    store.set(keys::TRIPS, &trips)?;
    Ok(true)
}

/// Render the trip list in storage order.
///
/// Each entry shows its current index (the handle for `trip delete`),
/// destination, date range, budget, traveler count, and itinerary. An empty
/// collection renders a single placeholder line.
#[must_use]
pub fn render(trips: &[Trip]) -> String {
    if trips.is_empty() {
        return "No trips saved yet.".to_string();
    }

    let mut lines = Vec::new();
    for (index, trip) in trips.iter().enumerate() {
        lines.push(format!("[{index}] {}", trip.destination));
        lines.push(format!(
            "    {} → {} · ${} · {} traveler(s)",
            trip.start_date, trip.end_date, trip.budget, trip.travelers
        ));
        for item in &trip.itinerary {
            lines.push(format!("      - {item}"));
        }
        if !trip.notes.is_empty() {
            lines.push(format!("    Notes: {}", trip.notes));
        }
    }
    lines.join("\n")
}
