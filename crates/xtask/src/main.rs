//! Development tasks for the room navigation project
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{InspectMap, RenderRoom, Simulate};

/// Development tasks for the room navigation project
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Map and session tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List the rooms of a map with their exits
    InspectMap(InspectMap),

    /// Draw one room's walkability grid
    RenderRoom(RenderRoom),

    /// Run an input script through a session and print its events
    Simulate(Simulate),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::InspectMap(cmd) => cmd.execute(),
        Command::RenderRoom(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
    }
}
