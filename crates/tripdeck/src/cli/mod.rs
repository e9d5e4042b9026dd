//! Command-line interface for tripdeck.
//!
//! This module provides the CLI structure for the `tripdeck` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{PostCommand, ProfileCommand, StatsCommand, TransportCommand, TripCommand};

/// tripdeck - Plan trips from your terminal
///
/// A local-first travel planner: keep a profile, plan trips with generated
/// itineraries, browse mock transport options, and post to a community feed,
/// all stored in a local database.
#[derive(Debug, Parser)]
#[command(name = "tripdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the traveler profile
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Plan, list, and delete trips
    #[command(subcommand)]
    Trip(TripCommand),

    /// Show summary statistics over saved trips
    Stats(StatsCommand),

    /// Search mock transport options
    Transport(TransportCommand),

    /// Post to and read the community feed
    #[command(subcommand)]
    Post(PostCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
