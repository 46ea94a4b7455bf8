//! Emberlog CLI
//!
//! Command-line surface for inspecting the emberlog unit.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "emberlog")]
#[command(about = "Emberlog - loadable logging unit tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the log unit and print its published build constants
    Info(commands::info::InfoArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info(args) => commands::info::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
