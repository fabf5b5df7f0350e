//! Configuration management.
//!
//! Settings come from an optional TOML file with `PAPERSHELF_*`
//! environment variables layered on top:
//!
//! ```toml
//! [server]
//! base_url = "http://127.0.0.1:8000/api"
//! timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Paper service connection settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Paper service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the service's API surface
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Load configuration from a file, with environment variable overrides
/// (`PAPERSHELF_SERVER__BASE_URL`, `PAPERSHELF_SERVER__TIMEOUT_SECS`).
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("PAPERSHELF").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the conventional locations: `papershelf.toml`
/// in the working directory, then `papershelf/config.toml` under the
/// platform config directory.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("papershelf.toml");
    if local.is_file() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("papershelf").join("config.toml");
    if user.is_file() {
        return Some(user);
    }

    None
}
