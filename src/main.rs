//! userstore — in-memory user record HTTP service.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, ServeArgs};
use userstore::config::Config;
use userstore::env::Env;
use userstore::logging;
use userstore::server;
use userstore::store::UserStore;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => run_serve(args).await,
        Command::Version => {
            cli::print_version();
            Ok(())
        }
    }
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let work_dir = std::env::current_dir().ok();
    let mut config = Config::load(args.config.as_deref(), work_dir.as_deref(), &Env::real())
        .context("failed to load configuration")?;
    config.apply_overrides(args.overrides());

    logging::init(&config.log.level).context("failed to install logger")?;

    let listener = server::bind(&config.server)
        .await
        .with_context(|| format!("failed to bind {}", config.server.address()))?;

    let store = Arc::new(UserStore::new());
    server::serve(listener, store, server::shutdown_signal())
        .await
        .context("server error")
}
