//! Loose numeric coercion for form-style input.
//!
//! Trip budgets and traveler counts are taken from free-text input and are
//! deliberately never validated: empty input coerces to `0`, unparseable
//! input coerces to `NaN`, and both are stored as-is. The JSON encoding
//! mirrors this — a non-finite value is written as `null` and read back as
//! `NaN` — so a stored collection with a bad number in it still round-trips
//! instead of being dropped wholesale.

/// Coerce a raw input string to a number.
///
/// Empty or whitespace-only input yields `0.0`; anything that fails to parse
/// yields `NaN`. Never rejects.
#[must_use]
pub fn coerce(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Treat a value as zero when it is not a usable number.
///
/// `NaN` sums as zero in the analytics totals; every finite value, including
/// negatives, counts as-is.
#[must_use]
pub fn or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Serde adapter that writes non-finite numbers as JSON `null`.
///
/// Reading maps `null` (or a missing field, via `#[serde(default)]`) back to
/// `NaN`, keeping the rest of the record intact.
pub mod lenient {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize, mapping non-finite values to `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    /// Deserialize, mapping `null` back to `NaN`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value is neither a number nor `null`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
