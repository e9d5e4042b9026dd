//! CLI command definitions.
//!
//! One subcommand per panel of the planner: profile, trips, stats, transport
//! search, and the community feed.

use clap::{Args, Subcommand};

/// Profile commands.
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Save the traveler profile (overwrites the previous one)
    Set {
        /// Display name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long, default_value = "")]
        email: String,

        /// Home city shown in the status line
        #[arg(long, default_value = "")]
        home_city: String,
    },

    /// Show the login status line
    Show,
}

/// Trip commands.
#[derive(Debug, Subcommand)]
pub enum TripCommand {
    /// Plan a trip and generate its itinerary
    Add {
        /// Where you're going
        destination: String,

        /// Start date (e.g. 2026-05-01)
        #[arg(long, default_value = "")]
        start_date: String,

        /// End date
        #[arg(long, default_value = "")]
        end_date: String,

        /// Budget in dollars; empty counts as 0, anything unparseable is
        /// stored as NaN
        #[arg(long, default_value = "")]
        budget: String,

        /// Number of travelers; coerced like the budget
        #[arg(long, default_value = "")]
        travelers: String,

        /// Interests used for the Day 2 itinerary line
        #[arg(long, default_value = "")]
        interests: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List saved trips with their current indexes
    List,

    /// Delete the trip at the given index (as shown by `trip list`)
    Delete {
        /// Position in the current list; out-of-range is a no-op
        index: usize,
    },
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Transport search command arguments.
#[derive(Debug, Args)]
pub struct TransportCommand {
    /// Origin
    #[arg(long)]
    pub from: String,

    /// Destination
    #[arg(long)]
    pub to: String,

    /// Travel date, echoed into the results
    #[arg(long, default_value = "")]
    pub date: String,

    /// Mode of transport: Flights, Trains, or Buses (anything else gets the
    /// default base price)
    #[arg(long, default_value = "Flights")]
    pub mode: String,
}

/// Community feed commands.
#[derive(Debug, Subcommand)]
pub enum PostCommand {
    /// Post a message to the community feed
    Add {
        /// The message text
        message: String,
    },

    /// Show the feed, newest first
    List,
}
