//! Runtime server configuration.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! `ROSTER_*` environment variables, each layer overriding the previous one.

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

/// Sentinel `database_path` that selects an in-memory store.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

/// Where the SQLite database lives.
#[derive(Debug, PartialEq, Eq)]
pub enum Database {
  InMemory,
  File(PathBuf),
}

impl ServerConfig {
  /// Load the layered configuration; a missing file at `path` is not an error.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    defaults()?
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("ROSTER").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }

  pub fn database(&self) -> Database {
    if self.database_path == Path::new(IN_MEMORY) {
      Database::InMemory
    } else {
      Database::File(expand_tilde(&self.database_path))
    }
  }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
  Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080)?
    .set_default("database_path", "roster.db")
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
