use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::station::StationId;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: fetch the current prices, compare them with the last
    /// run, and raise desktop alerts.
    Check(CheckArgs),

    /// Catalog discovery tools for picking station identifiers.
    Lookup(LookupArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Monitored-stations configuration.
    #[clap(long, env = "CARBUALERT_CONFIG", default_value = "config.json")]
    pub config_path: PathBuf,

    /// Price snapshot preserved between runs.
    #[clap(long, env = "CARBUALERT_PRICES", default_value = "last_prices.json")]
    pub prices_path: PathBuf,
}

#[derive(Parser)]
pub struct LookupArgs {
    #[command(subcommand)]
    pub command: LookupCommand,
}

#[derive(Subcommand)]
pub enum LookupCommand {
    /// Search stations by city name or postal code.
    Search(SearchArgs),

    /// Fetch a single station by its identifier.
    Station(StationArgs),
}

#[derive(Parser)]
pub struct SearchArgs {
    /// City name or postal code.
    pub query: String,

    #[clap(long, value_enum, default_value = "ville")]
    pub by: SearchBy,
}

#[derive(Copy, Clone, clap::ValueEnum)]
pub enum SearchBy {
    /// Postal code (exact match).
    Cp,

    /// City name (full-text search).
    Ville,
}

#[derive(Parser)]
pub struct StationArgs {
    pub id: StationId,
}
