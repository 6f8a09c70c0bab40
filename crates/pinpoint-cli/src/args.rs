use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{MapCommands, PointCommands, SearchArgs};

/// Command-line interface for Pinpoint
///
/// Pinpoint keeps named maps of geographic points on a remote API. Points are
/// placed at a coordinate (the equivalent of a map click) or found by
/// searching an address, and can be renamed or deleted afterwards.
#[derive(Parser)]
#[command(version, about, name = "pin")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/pinpoint/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the maps API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Base URL of the Nominatim-compatible geocoding service
    #[arg(long, global = true)]
    pub geocoder_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// - `maps`: list, create, and delete maps
/// - `points`: manage the points of one map
/// - `search`: find an address and optionally keep it as a point
/// - `health`: check that the API is reachable
#[derive(Subcommand)]
pub enum Commands {
    /// Manage maps
    #[command(alias = "m")]
    Maps {
        #[command(subcommand)]
        command: MapCommands,
    },
    /// Manage the points of a map
    #[command(alias = "p")]
    Points {
        #[command(subcommand)]
        command: PointCommands,
    },
    /// Search an address
    #[command(alias = "s")]
    Search(SearchArgs),
    /// Check the API health endpoint
    Health,
}
