//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use userstore::config::Overrides;

/// In-memory user record HTTP service.
#[derive(Parser, Debug)]
#[command(name = "userstore", version = userstore::constants::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server.
    Serve(ServeArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind (default: 127.0.0.1).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default: 8080).
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Config file to load instead of ./.userstore.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `userstore=trace` (RUST_LOG takes precedence).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl ServeArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
        }
    }
}
