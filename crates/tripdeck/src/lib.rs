//! `tripdeck` - A local-first travel planner
//!
//! This library provides the key/value store adapter, domain records, and
//! pure derivation functions (itinerary generation, trip analytics, mock
//! transport synthesis) behind the `tripdeck` CLI. All state lives in one
//! local database as whole-collection JSON snapshots; every mutation is
//! read-modify-write with last-writer-wins semantics.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod analytics;
pub mod cli;
pub mod community;
pub mod config;
pub mod error;
pub mod logging;
pub mod number;
pub mod profile;
pub mod store;
pub mod transport;
pub mod trip;

pub use analytics::TripStats;
pub use community::CommunityPost;
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use profile::Profile;
pub use store::Store;
pub use transport::TransportQuery;
pub use trip::Trip;
