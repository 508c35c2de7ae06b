//! Chordsheet - cheat-sheet generator for chorded keyboards
//!
//! This tool renders the chord table of a chorded keyboard as paginated SVG
//! cheat sheets, plus a reference sheet for the firmware's LED signals.

use chordsheet::cli::{CliResult, InspectArgs, LedsArgs, RenderArgs};
use clap::{Parser, Subcommand};

/// Chordsheet - cheat-sheet generator for chorded keyboards
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the chord cheat-sheet SVG pages
    Render(RenderArgs),
    /// Render the LED signal reference sheet
    Leds(LedsArgs),
    /// Inspect parsed chord records and their ease scores
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();
    let result: CliResult<()> = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Leds(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
