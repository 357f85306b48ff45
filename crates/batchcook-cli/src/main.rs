//! batchcook command-line application.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use batchcook_core::KitchenBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, BatchcookMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let kitchen = KitchenBuilder::new()
        .with_config_path(config_file)
        .build()
        .await
        .context("Failed to load kitchen configuration")?;

    info!("batchcook started");

    let cli = |kitchen| Cli::new(kitchen, TerminalRenderer::new(!no_color), json);

    match command {
        Plan(args) => cli(kitchen).plan(args),
        Optimize(args) => cli(kitchen).optimize(args),
        Conflicts(args) => cli(kitchen).conflicts(args),
        Validate { command } => cli(kitchen).validate(command),
        Jules(args) => cli(kitchen).jules(args),
        Nap(args) => cli(kitchen).nap(args),
        Stats(args) => cli(kitchen).stats(args),
        History(args) => cli(kitchen).history(args),
        Appliances => cli(kitchen).appliances(),
        Format(args) => cli(kitchen).format(args.into()),
        Serve => {
            info!("Starting batchcook MCP server");
            run_stdio_server(BatchcookMcpServer::new(kitchen))
                .await
                .context("MCP server failed")
        }
    }
}
