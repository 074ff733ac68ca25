//! uni-admin - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uni_admin::{
    cli::{Cli, Commands},
    commands,
    config::{Config, DEFAULT_LOG_LEVEL},
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // .env must be applied before the log filter is chosen
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {} ({:?})", e, e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber: `--verbose`, then `RUST_LOG`, then `LOG_LEVEL`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG")
            .or_else(|_| std::env::var("LOG_LEVEL"))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
