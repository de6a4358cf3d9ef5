mod cli;
mod commands;
mod dao;
mod error;
mod model;
mod service;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{debug, Level};

use cli::Args;
use commands::Context;
use dao::JsonStore;
use service::GeoClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help / --version land here too and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print()?;
            std::process::exit(code);
        }
    };

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context {
        store: JsonStore::new(args.store.clone()),
        geo: GeoClient::new(),
    };
    debug!("Using store {}", ctx.store.path().display());

    let mut stdout = std::io::stdout();
    commands::run(args.command.as_ref(), &ctx, &mut stdout)
        .await
        .context("Failed to write command output")?;

    Ok(())
}
