//! Pinpoint CLI Application
//!
//! Command-line front end for managing named points on remote maps.

mod args;
mod cli;
mod prompt;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use pinpoint_core::PinpointBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        api_url,
        geocoder_url,
        no_color,
        command,
    } = Args::parse();

    let pinpoint = PinpointBuilder::new()
        .with_config_path(config)
        .with_api_url(api_url)
        .with_geocoder_url(geocoder_url)
        .build()
        .context("Failed to initialize pinpoint")?;

    info!("Using maps API at {}", pinpoint.api().base_url());

    let cli = Cli::new(pinpoint, TerminalRenderer::new(!no_color));
    match command {
        Some(Maps { command }) => cli.handle_map_command(command).await,
        Some(Points { command }) => cli.handle_point_command(command).await,
        Some(Search(args)) => cli.search(args.into()).await,
        Some(Health) => cli.health().await,
        None => cli.list_maps().await,
    }
}
