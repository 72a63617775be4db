//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary via [`Config::apply_overrides`])
//! 2. Environment variables
//! 3. An explicit `--config` file, or `.userstore.toml` in the working directory
//! 4. `~/.config/userstore/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT, ENV_HOST,
    ENV_LOG, ENV_PORT,
};
use crate::env::{Env, EnvValue};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub log: LogConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port` as shown in logs.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `userstore=debug`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values given on the command line. `None` leaves the layered value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` replaces the local `.userstore.toml` lookup in `work_dir`
    /// and must exist.
    pub fn load(explicit: Option<&Path>, work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: explicit or working-directory config
        match explicit {
            Some(path) => config.merge(Self::load_file(path)?),
            None => {
                if let Some(dir) = work_dir {
                    let local_path = dir.join(CONFIG_FILENAME);
                    if local_path.exists() {
                        config.merge(Self::load_file(&local_path)?);
                    }
                }
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Apply command-line overrides (layer 1).
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one; only non-default values in `other` win.
    fn merge(&mut self, other: Config) {
        let defaults = Config::default();
        if other.server.host != defaults.server.host {
            self.server.host = other.server.host;
        }
        if other.server.port != defaults.server.port {
            self.server.port = other.server.port;
        }
        if other.log.level != defaults.log.level {
            self.log.level = other.log.level;
        }
    }

    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(host) = env.var(ENV_HOST) {
            self.server.host = host;
        }
        match env.parse::<u16>(ENV_PORT) {
            EnvValue::Parsed(port) => self.server.port = port,
            // The logger is not installed yet while config loads.
            EnvValue::Invalid(val) => eprintln!("Warning: ignoring invalid {ENV_PORT} value: {val}"),
            EnvValue::Unset => {}
        }
        if let Some(level) = env.var(ENV_LOG) {
            self.log.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.server.address(), "127.0.0.1:8080");
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn merge_overrides_non_default_values() {
        let mut base = Config::default();
        let mut other = Config::default();
        other.server.host = "0.0.0.0".into();
        other.log.level = "debug".into();

        base.merge(other);

        assert_eq!(base.server.host, "0.0.0.0");
        assert_eq!(base.server.port, 8080);
        assert_eq!(base.log.level, "debug");
    }

    #[test]
    fn merge_keeps_base_when_other_is_default() {
        let mut base = Config::default();
        base.server.port = 3000;
        base.merge(Config::default());
        assert_eq!(base.server.port, 3000);
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = Config::load(Some(&missing), None, &no_env()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn load_from_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".userstore.toml"),
            "[server]\nhost = \"0.0.0.0\"\nport = 9100\n\n[log]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let config = Config::load(None, Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn explicit_file_replaces_work_dir_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".userstore.toml"), "[server]\nport = 9100\n").unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "[server]\nport = 9200\n").unwrap();

        let config = Config::load(Some(&explicit), Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn env_vars_override_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".userstore.toml"), "[server]\nport = 9100\n").unwrap();
        let env = Env::mock([
            ("USERSTORE_PORT", "9300"),
            ("USERSTORE_HOST", "::1"),
            ("USERSTORE_LOG", "userstore=trace"),
        ]);

        let config = Config::load(None, Some(dir.path()), &env).unwrap();
        assert_eq!(config.server.port, 9300);
        assert_eq!(config.server.host, "::1");
        assert_eq!(config.log.level, "userstore=trace");
    }

    #[test]
    fn invalid_port_env_is_ignored() {
        let env = Env::mock([("USERSTORE_PORT", "eighty")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn cli_overrides_win() {
        let env = Env::mock([("USERSTORE_PORT", "9300")]);
        let mut config = Config::load(None, None, &env).unwrap();
        config.apply_overrides(Overrides {
            host: None,
            port: Some(1234),
            log_level: Some("debug".into()),
        });
        assert_eq!(config.server.port, 1234);
        assert_eq!(config.log.level, "debug");
    }
}
