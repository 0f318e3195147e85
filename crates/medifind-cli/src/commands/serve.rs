//! Serve command - run the HTTP API over the data file.

use std::sync::Arc;

use colored::Colorize;
use medifind::JsonFileStore;

use crate::config::ServerConfig;
use crate::server::{app, state::AppState};

pub fn run(config: ServerConfig, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::new(&config.data_path);
    let state = AppState::new(Arc::new(store));

    println!();
    println!(
        "{} {}",
        "Starting MediFind API at".cyan().bold(),
        config.base_url().white().bold()
    );
    println!();
    println!("  Data: {}", state.store_location());
    println!("  Doctors: {}/api/doctors", config.base_url());
    if verbose {
        println!("  Facets: {}/api/doctors/facets", config.base_url());
        println!("  Health: {}/health", config.base_url());
        println!(
            "  CORS: {}",
            if config.enable_cors { "enabled" } else { "disabled" }
        );
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, &config))?;

    println!("{}", "Server stopped.".yellow());
    Ok(())
}
