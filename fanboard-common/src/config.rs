//! Configuration loading and data directory resolution
//!
//! Every key resolves through the same priority ladder:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`FANBOARD_*`)
//! 3. TOML config file (`fanboard.toml` in the data directory, or `--config` path)
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:5720";

/// Default request header carrying the externally-resolved identity
pub const DEFAULT_IDENTITY_HEADER: &str = "x-user-id";

/// Default broadcast channel depth for SSE fan-out
pub const DEFAULT_SSE_CAPACITY: usize = 100;

/// Fully resolved server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address, e.g. `127.0.0.1:5720`
    pub bind: String,
    /// SQLite database file path
    pub database: PathBuf,
    /// Request header the identity provider/front proxy writes the user id into
    pub identity_header: String,
    /// Broadcast channel depth for the SSE fan-out
    pub sse_capacity: usize,
}

/// Optional keys read from `fanboard.toml`
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    bind: Option<String>,
    database: Option<PathBuf>,
    identity_header: Option<String>,
    sse_capacity: Option<usize>,
}

/// Per-key command-line overrides, passed in by the binary's clap layer
#[derive(Debug, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub bind: Option<String>,
    pub database: Option<PathBuf>,
    pub identity_header: Option<String>,
    pub sse_capacity: Option<usize>,
}

/// Resolve the data directory: CLI argument, then `FANBOARD_DATA`,
/// then the OS-dependent per-user data directory.
pub fn resolve_data_dir(cli_arg: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var("FANBOARD_DATA") {
        return PathBuf::from(path);
    }

    dirs::data_local_dir()
        .map(|d| d.join("fanboard"))
        .unwrap_or_else(|| PathBuf::from("./fanboard_data"))
}

/// Create the data directory if it does not exist yet
pub fn ensure_data_dir(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    Ok(())
}

/// Resolve the full server configuration
pub fn load(overrides: &Overrides) -> Result<ServerConfig> {
    let data_dir = resolve_data_dir(overrides.data_dir.as_deref());

    let file = load_config_file(overrides.config_file.as_deref(), &data_dir)?;

    let bind = overrides
        .bind
        .clone()
        .or_else(|| std::env::var("FANBOARD_BIND").ok())
        .or(file.bind)
        .unwrap_or_else(|| DEFAULT_BIND.to_string());

    let database = overrides
        .database
        .clone()
        .or_else(|| std::env::var("FANBOARD_DATABASE").ok().map(PathBuf::from))
        .or(file.database)
        .unwrap_or_else(|| data_dir.join("fanboard.db"));

    let identity_header = overrides
        .identity_header
        .clone()
        .or_else(|| std::env::var("FANBOARD_IDENTITY_HEADER").ok())
        .or(file.identity_header)
        .unwrap_or_else(|| DEFAULT_IDENTITY_HEADER.to_string())
        .to_ascii_lowercase();

    let sse_capacity = overrides
        .sse_capacity
        .or_else(|| {
            std::env::var("FANBOARD_SSE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(file.sse_capacity)
        .unwrap_or(DEFAULT_SSE_CAPACITY);

    // broadcast::channel panics on a zero capacity
    if sse_capacity == 0 {
        return Err(Error::Config(
            "sse_capacity must be at least 1".to_string(),
        ));
    }

    Ok(ServerConfig {
        bind,
        database,
        identity_header,
        sse_capacity,
    })
}

/// Read the TOML config file if one exists.
///
/// An explicitly named file must exist and parse; the implicit
/// `<data_dir>/fanboard.toml` is optional.
fn load_config_file(explicit: Option<&Path>, data_dir: &Path) -> Result<FileConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let implicit = data_dir.join("fanboard.toml");
            if !implicit.exists() {
                return Ok(FileConfig::default());
            }
            implicit
        }
    };

    let content = std::fs::read_to_string(&path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}
