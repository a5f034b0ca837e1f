//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.helpdesk/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::store::DEFAULT_STORAGE_KEY;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HelpdeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
    pub key: Option<String>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub storage_key: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
const APP_DIR: &str = ".helpdesk";
const DEFAULT_DATA_SUBDIR: &str = "data";
const DEFAULT_LOG_FILE: &str = "helpdesk.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.helpdesk`, the home of config, data and logs.
fn app_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(APP_DIR))
}

/// Returns the path to `~/.helpdesk/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DIR).join("config.toml"))
}

/// Load config from `path`, or from `~/.helpdesk/config.toml` when `None`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `HelpdeskConfig::default()`. An explicit path that doesn't exist
/// is an `Io` error. A malformed file is `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<HelpdeskConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let Some(p) = config_path() else {
                warn!("Could not determine home directory, using default config");
                return Ok(HelpdeskConfig::default());
            };
            if !p.exists() {
                info!("No config file found, generating default at {}", p.display());
                generate_default_config(&p);
                return Ok(HelpdeskConfig::default());
            }
            p
        }
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<HelpdeskConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Helpdesk Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "~/.helpdesk/helpdesk.log"   # Or set HELPDESK_LOG_FILE
# log_level = "debug"                     # "off", "error", "warn", "info", "debug", "trace"

# [storage]
# data_dir = "~/.helpdesk/data"           # Or HELPDESK_DATA_DIR / --data-dir
# key = "tickets"                         # Or HELPDESK_STORAGE_KEY / --key
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &HelpdeskConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Data dir: CLI → env → config → default
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var("HELPDESK_DATA_DIR").ok().map(|s| expand_home(&s)))
        .or_else(|| config.storage.data_dir.as_deref().map(expand_home))
        .unwrap_or_else(|| app_dir().join(DEFAULT_DATA_SUBDIR));

    // Storage key: CLI → env → config → default
    let storage_key = cli
        .storage_key
        .clone()
        .or_else(|| std::env::var("HELPDESK_STORAGE_KEY").ok())
        .or_else(|| config.storage.key.clone())
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

    // Log file: env → config → default
    let log_file = std::env::var("HELPDESK_LOG_FILE")
        .ok()
        .map(|s| expand_home(&s))
        .or_else(|| config.general.log_file.as_deref().map(expand_home))
        .unwrap_or_else(|| app_dir().join(DEFAULT_LOG_FILE));

    // Log level: env → config → default; unknown names fall back to the default
    let log_level = std::env::var("HELPDESK_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        data_dir,
        storage_key,
        log_file,
        log_level,
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
