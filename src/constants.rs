//! App-wide constants.
//!
//! Centralises the service name, config paths, environment variable names,
//! and defaults so a rename only requires changing this file.

/// Display name of the service (lowercase).
pub const APP_NAME: &str = "userstore";

/// Package version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for.
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.userstore.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".userstore.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "userstore";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_HOST: &str = "USERSTORE_HOST";
pub const ENV_PORT: &str = "USERSTORE_PORT";
pub const ENV_LOG: &str = "USERSTORE_LOG";
