mod config;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use spotidal_core::{SpotidalError, SpotidalResult};
use tracing::{debug, warn};

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, LookupConfig, SpotidalConfig,
};

pub const ENV_LOOKUP_URL: &str = "SPOTIDAL_LOOKUP_URL";
pub const ENV_TIMEOUT_SECS: &str = "SPOTIDAL_TIMEOUT_SECS";

pub fn config_path() -> SpotidalResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SpotidalError::Config("home directory not found".to_string()))?;
    Ok(home.join(".spotidal").join("config.toml"))
}

/// Loads `~/.spotidal/config.toml`, or the defaults when it does not exist.
pub fn load_config() -> SpotidalResult<SpotidalConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(SpotidalConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> SpotidalResult<SpotidalConfig> {
    let content = fs::read_to_string(path)
        .map_err(|err| SpotidalError::Config(format!("failed to read config: {err}")))?;
    let config = toml::from_str(&content)
        .map_err(|err| SpotidalError::Config(format!("failed to parse config: {err}")))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Like [`load_config`], but never fails: problems are logged and the defaults used.
pub fn load_config_or_default() -> SpotidalConfig {
    load_config().unwrap_or_else(|err| {
        warn!("{err}; using default lookup settings");
        SpotidalConfig::default()
    })
}

pub fn resolve_lookup_config(config: &SpotidalConfig) -> LookupConfig {
    apply_overrides(
        config.lookup.clone(),
        env::var(ENV_LOOKUP_URL).ok(),
        env::var(ENV_TIMEOUT_SECS).ok(),
    )
}

fn apply_overrides(
    mut lookup: LookupConfig,
    base_url: Option<String>,
    timeout_secs: Option<String>,
) -> LookupConfig {
    if let Some(value) = base_url
        && !value.trim().is_empty()
    {
        lookup.base_url = value.trim().to_string();
    }

    if let Some(value) = timeout_secs {
        match parse_timeout_secs(&value) {
            Some(secs) => lookup.timeout_secs = secs,
            None => warn!("ignoring {ENV_TIMEOUT_SECS}={value:?}: expected a positive integer"),
        }
    }

    lookup
}

fn parse_timeout_secs(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}
