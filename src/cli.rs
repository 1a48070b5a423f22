use clap::{Args, Parser, Subcommand};
use ltl_quote::freight::Pallet;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ltl-quote", version, about = "LTL freight quote calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the quote server (default)
    Start,

    /// Price a shipment from the command line
    Quote(QuoteArgs),

    /// List origins, hub and destination rates
    Routes,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Pickup city
    #[arg(short, long)]
    pub origin: String,

    /// Destination city (key into the rate table)
    #[arg(short, long)]
    pub destination: String,

    /// Pallet as LxWxH:WEIGHT[:QTY] in cm and kg, e.g. 120x80x100:200:3 (repeatable)
    #[arg(short, long = "pallet", required = true)]
    pub pallets: Vec<Pallet>,

    /// Insurance rate, interpreted per the configured insurance basis
    #[arg(long, default_value = "0")]
    pub insurance_rate: f64,

    /// Declared cargo value
    #[arg(long, default_value = "0")]
    pub cargo_value: f64,

    /// Mark the cargo as stackable on the printout
    #[arg(long)]
    pub stackable: bool,

    /// Company name for the printout header
    #[arg(long)]
    pub company: Option<String>,

    /// Print the quote as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
