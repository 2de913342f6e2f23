use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// BAC Simulator: estimates blood alcohol concentration over time from a drink log.
#[derive(Parser, Debug)]
#[command(name = "bac_simulator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the drink log (profile line followed by intakes).
    #[arg(short, long, default_value = "bac-simulator-data.txt")]
    pub file: PathBuf,

    /// Optional TOML file with engine and report settings.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate and print the BAC table.
    Simulate {
        /// Also write the series to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also write the series to this JSON file.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Simulate and print only the peak and sober time.
    Summary,

    /// Parse and validate the drink log without simulating.
    Check,
}

impl Default for Command {
    fn default() -> Self {
        Command::Simulate {
            csv: None,
            json: None,
        }
    }
}
