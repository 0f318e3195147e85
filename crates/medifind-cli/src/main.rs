//! MediFind CLI - browse and serve the provider directory.

mod cli;
mod commands;
mod config;
mod logging;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use config::ServerConfig;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            enable_cors,
        } => commands::serve::run(
            ServerConfig {
                data_path: cli.data,
                host,
                port,
                enable_cors,
            },
            cli.verbose,
        ),

        Commands::List { filters, json } => {
            commands::list::run(cli.data, filters.into(), json, cli.verbose)
        }

        Commands::Add { file, json } => commands::add::run(cli.data, file, json, cli.verbose),

        Commands::Facets { json } => commands::facets::run(cli.data, json),

        Commands::Seed { force } => commands::seed::run(cli.data, force, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
