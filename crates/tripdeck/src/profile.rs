//! The traveler profile.
//!
//! A single local identity record used for the status line and for post
//! attribution. Saving overwrites the whole record; there is no uniqueness or
//! format validation beyond trimming.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{keys, Store};

/// The singleton traveler profile record.
///
/// Persisted under `travel.profile` with camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name, used in the status line and as post author.
    pub name: String,
    /// Contact email. Stored but only ever echoed back.
    pub email: String,
    /// Home city shown in the status line.
    #[serde(default)]
    pub home_city: String,
}

/// Raw profile form fields, before trimming.
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    /// Name field, as typed.
    pub name: String,
    /// Email field, as typed.
    pub email: String,
    /// Home city field, as typed.
    pub home_city: String,
}

/// Load the saved profile, if any.
#[must_use]
pub fn load(store: &Store) -> Option<Profile> {
    store.get(keys::PROFILE, None)
}

/// Save the profile wholesale and return the stored record.
///
/// Fields are trimmed; the returned record is exactly what a subsequent
/// [`load`] will see.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub fn save(store: &Store, input: &ProfileInput) -> Result<Profile> {
    let profile = Profile {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        home_city: input.home_city.trim().to_string(),
    };

    store.set(keys::PROFILE, &profile)?;
    Ok(profile)
}

/// Render the login status line.
#[must_use]
pub fn status_line(profile: Option<&Profile>) -> String {
    match profile {
        Some(profile) => {
            let city = if profile.home_city.is_empty() {
                "traveler"
            } else {
                &profile.home_city
            };
            format!("Welcome {} ({city})", profile.name)
        }
        None => "Not logged in".to_string(),
    }
}
