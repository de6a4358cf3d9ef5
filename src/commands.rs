//! Text front end for the tracker operations
//!
//! Every message a user sees is written here, to whatever writer the caller
//! passes in. Operation failures are reported as text and never turn into a
//! non-zero exit; only a failing writer does.

use std::io::{self, Write};

use tracing::debug;

use crate::cli::Command;
use crate::dao::JsonStore;
use crate::error::TrackError;
use crate::service::{table, tracker, GeoClient};

pub const WELCOME: &str = "Welcome to Koppel! Use 'koppel help' to see available commands.";
pub const TRACK_USAGE: &str = "Usage: koppel track <ip_address>";
pub const TRACK_SAVED: &str = "IP information saved successfully.";
pub const TRACK_FAILED: &str = "Failed to retrieve IP information.";
pub const LIST_EMPTY: &str = "No tracked IP addresses.";
pub const CLEAR_DONE: &str = "Tracked IP list cleared successfully.";

/// Dependencies shared by all commands.
pub struct Context {
    pub store: JsonStore,
    pub geo: GeoClient,
}

pub async fn run<W: Write>(
    command: Option<&Command>,
    ctx: &Context,
    out: &mut W,
) -> io::Result<()> {
    match command {
        None => writeln!(out, "{}", WELCOME),
        Some(Command::Track { args }) => run_track(ctx, args, out).await,
        Some(Command::List) => run_list(ctx, out),
        Some(Command::Clear) => run_clear(ctx, out),
    }
}

async fn run_track<W: Write>(ctx: &Context, args: &[String], out: &mut W) -> io::Result<()> {
    let ip = match args {
        [ip] => ip,
        _ => {
            debug!("track called with {} arguments", args.len());
            return writeln!(out, "{}", TRACK_USAGE);
        }
    };

    match tracker::track(&ctx.store, &ctx.geo, ip).await {
        Ok(_) => writeln!(out, "{}", TRACK_SAVED),
        Err(TrackError::Fetch(e)) => {
            writeln!(out, "{}", e)?;
            writeln!(out, "{}", TRACK_FAILED)
        }
        Err(TrackError::Store(e)) => writeln!(out, "{}", e),
    }
}

fn run_list<W: Write>(ctx: &Context, out: &mut W) -> io::Result<()> {
    match tracker::list(&ctx.store) {
        Ok(collection) if collection.is_empty() => writeln!(out, "{}", LIST_EMPTY),
        Ok(collection) => table::render(&collection, out),
        // An unreadable store lists as empty, as it always has
        Err(e) => {
            writeln!(out, "{}", e)?;
            writeln!(out, "{}", LIST_EMPTY)
        }
    }
}

fn run_clear<W: Write>(ctx: &Context, out: &mut W) -> io::Result<()> {
    match tracker::clear(&ctx.store) {
        Ok(()) => writeln!(out, "{}", CLEAR_DONE),
        Err(e) => writeln!(out, "Failed to clear tracked IP list: {}", e),
    }
}
