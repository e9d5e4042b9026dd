//! `tripdeck` - CLI for the local-first travel planner
//!
//! Each subcommand mirrors one panel of the planner: the handler re-reads
//! the relevant collection from the store, applies the change, writes the
//! whole collection back, and prints the freshly rendered view.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use tripdeck::cli::{Cli, Command, PostCommand, ProfileCommand, TripCommand};
use tripdeck::profile::ProfileInput;
use tripdeck::trip::TripInput;
use tripdeck::{analytics, community, profile, transport, trip};
use tripdeck::{init_logging, Config, Store, TransportQuery};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration and open the store
    let config = Config::load_from(cli.config.clone())?;
    let store = Store::open(config.database_path())?;

    // Execute the command
    match cli.command {
        Command::Profile(profile_cmd) => handle_profile(&store, &profile_cmd)?,
        Command::Trip(trip_cmd) => handle_trip(&store, &trip_cmd)?,
        Command::Stats(stats_cmd) => handle_stats(&store, stats_cmd.json)?,
        Command::Transport(transport_cmd) => {
            let query = TransportQuery {
                from: transport_cmd.from.trim().to_string(),
                to: transport_cmd.to.trim().to_string(),
                date: transport_cmd.date.clone(),
                mode: transport_cmd.mode.clone(),
            };
            let options = transport::search(&query);
            println!("{}", transport::render(&query, &options));
        }
        Command::Post(post_cmd) => handle_post(&store, &post_cmd)?,
    }

    Ok(())
}

fn handle_profile(store: &Store, cmd: &ProfileCommand) -> tripdeck::Result<()> {
    match cmd {
        ProfileCommand::Set {
            name,
            email,
            home_city,
        } => {
            let saved = profile::save(
                store,
                &ProfileInput {
                    name: name.clone(),
                    email: email.clone(),
                    home_city: home_city.clone(),
                },
            )?;
            println!("{}", profile::status_line(Some(&saved)));
        }
        ProfileCommand::Show => {
            println!("{}", profile::status_line(profile::load(store).as_ref()));
        }
    }
    Ok(())
}

fn handle_trip(store: &Store, cmd: &TripCommand) -> tripdeck::Result<()> {
    match cmd {
        TripCommand::Add {
            destination,
            start_date,
            end_date,
            budget,
            travelers,
            interests,
            notes,
        } => {
            trip::add(
                store,
                &TripInput {
                    destination: destination.clone(),
                    start_date: start_date.clone(),
                    end_date: end_date.clone(),
                    budget: budget.clone(),
                    travelers: travelers.clone(),
                    interests: interests.clone(),
                    notes: notes.clone(),
                },
            )?;
            print_trips_and_stats(store);
        }
        TripCommand::List => {
            println!("{}", trip::render(&trip::load(store)));
        }
        TripCommand::Delete { index } => {
            // Out-of-range indexes fall through silently; the re-rendered
            // list is the only feedback either way.
            trip::delete(store, *index)?;
            print_trips_and_stats(store);
        }
    }
    Ok(())
}

fn print_trips_and_stats(store: &Store) {
    let trips = trip::load(store);
    println!("{}", trip::render(&trips));
    println!();
    println!("{}", analytics::render(&analytics::compute(&trips)));
}

fn handle_stats(store: &Store, json: bool) -> tripdeck::Result<()> {
    let stats = analytics::compute(&trip::load(store));
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", analytics::render(&stats));
    }
    Ok(())
}

fn handle_post(store: &Store, cmd: &PostCommand) -> tripdeck::Result<()> {
    match cmd {
        PostCommand::Add { message } => {
            community::submit(store, message)?;
            println!("{}", community::render(&community::load(store)));
        }
        PostCommand::List => {
            println!("{}", community::render(&community::load(store)));
        }
    }
    Ok(())
}
