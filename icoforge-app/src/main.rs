mod config;
mod convert;

use std::process::ExitCode;

use tracing::info;

use config::IconConfig;
use convert::create_ico;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting IcoForge");

    let config = IconConfig::load();

    ExitCode::from(run(&config))
}

/// One conversion run; returns the process exit status (0 success, 1 failure).
fn run(config: &IconConfig) -> u8 {
    println!("Converting PNG to ICO...");
    if create_ico(config) {
        println!("\nIcon created successfully!");
        println!("Location: {}", config.destination.display());
        0
    } else {
        println!("\nFailed to create icon.");
        1
    }
}
