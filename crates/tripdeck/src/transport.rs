//! Mock transport search.
//!
//! Synthesizes three priced and timed options from a fixed per-mode base
//! price. Deterministic for identical inputs; nothing here touches the store
//! and results are regenerated on every search.

/// A transport search query, straight from the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportQuery {
    /// Origin, trimmed.
    pub from: String,
    /// Destination, trimmed.
    pub to: String,
    /// Travel date, echoed into the rendered results.
    pub date: String,
    /// Mode label in plural form ("Flights", "Trains", "Buses").
    /// Unknown modes are allowed and fall back to the default base price.
    pub mode: String,
}

/// Base price for a mode; unknown modes default to 100.
#[must_use]
pub fn base_price(mode: &str) -> u32 {
    match mode {
        "Flights" => 230,
        "Trains" => 60,
        "Buses" => 35,
        _ => 100,
    }
}

/// Synthesize exactly three transport options for the query.
///
/// For option `i` in 1..=3: price is `base + 25 * i`; duration is
/// `"{2+i}h {20+5i}m"` for Flights and `"{5+i}h"` for every other mode. The
/// label starts with the singular form of the mode (plural minus its final
/// character).
#[must_use]
pub fn search(query: &TransportQuery) -> Vec<String> {
    let base = base_price(&query.mode);
    let singular = singularize(&query.mode);

    (1..=3)
        .map(|i| {
            let price = base + i * 25;
            let duration = if query.mode == "Flights" {
                format!("{}h {}m", 2 + i, 20 + i * 5)
            } else {
                format!("{}h", 5 + i)
            };
            format!(
                "{singular} {} → {} · {duration} · ${price}",
                query.from, query.to
            )
        })
        .collect()
}

/// Drop the final character of the plural mode label.
fn singularize(mode: &str) -> &str {
    match mode.char_indices().next_back() {
        Some((index, _)) => &mode[..index],
        None => mode,
    }
}

/// Render the results list, echoing the travel date onto each option.
#[must_use]
pub fn render(query: &TransportQuery, options: &[String]) -> String {
    options
        .iter()
        .map(|option| format!("{option} · {}", query.date))
        .collect::<Vec<_>>()
        .join("\n")
}
