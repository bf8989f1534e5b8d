use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const ENV_SERVER_URL: &str = "ROSTER_SERVER_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ROSTER_REQUEST_TIMEOUT_SECS";
pub const ENV_MIN_SPINNER_MS: &str = "ROSTER_MIN_SPINNER_MS";
pub const ENV_TOAST_TTL_MS: &str = "ROSTER_TOAST_TTL_MS";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const APP_DIR: &str = "roster";
const CONFIG_FILE: &str = "config.json";

/// Persisted dashboard settings.
///
/// Every field has a default so partial config files are fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    /// Zero is not a usable timeout and falls back to the default
    pub request_timeout_secs: u64,
    /// Minimum time the loading overlay stays up for a request
    pub min_spinner_ms: u64,
    pub toast_ttl_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            min_spinner_ms: 0,
            toast_ttl_ms: 4_000,
        }
    }
}

impl Config {
    /// Defaults, then the config file, then environment overrides
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => match Self::load_from_file(&path) {
                Ok(config) => {
                    log::info!("[Config] Loaded {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("[Config] Ignoring config file: {:#}", err);
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn request_timeout(&self) -> Duration {
        if self.request_timeout_secs == 0 {
            log::warn!(
                "[Config] Request timeout of 0s is not usable, using {}s",
                DEFAULT_REQUEST_TIMEOUT_SECS
            );
            return Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS);
        }
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `<config_dir>/roster/config.json`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))
    }

    /// Apply `ROSTER_*` overrides from `lookup`.
    ///
    /// Numeric values that fail to parse are skipped with a warning, as is a
    /// zero request timeout.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(server_url) = lookup(ENV_SERVER_URL)
            && !server_url.trim().is_empty()
        {
            self.server_url = server_url;
        }

        match parse_override(&lookup, ENV_REQUEST_TIMEOUT_SECS) {
            Some(0) => log::warn!(
                "[Config] Ignoring {}=0: timeout must be at least one second",
                ENV_REQUEST_TIMEOUT_SECS
            ),
            Some(secs) => self.request_timeout_secs = secs,
            None => {}
        }
        if let Some(ms) = parse_override(&lookup, ENV_MIN_SPINNER_MS) {
            self.min_spinner_ms = ms;
        }
        if let Some(ms) = parse_override(&lookup, ENV_TOAST_TTL_MS) {
            self.toast_ttl_ms = ms;
        }
    }
}

fn parse_override<F>(lookup: &F, key: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("[Config] Ignoring {}={:?}: {}", key, raw, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://localhost:8080");
        assert_eq!(config.min_spinner_ms, 0);
    }

    #[test]
    fn environment_overrides_defaults() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            (ENV_SERVER_URL, "http://users.internal:9000"),
            (ENV_MIN_SPINNER_MS, "750"),
            (ENV_TOAST_TTL_MS, "2500"),
        ]));

        assert_eq!(config.server_url, "http://users.internal:9000");
        assert_eq!(config.min_spinner_ms, 750);
        assert_eq!(config.toast_ttl_ms, 2500);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn invalid_numbers_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            (ENV_REQUEST_TIMEOUT_SECS, "soon"),
            (ENV_SERVER_URL, "   "),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_timeout_override_is_rejected() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[(ENV_REQUEST_TIMEOUT_SECS, "0")]));
        assert_eq!(config.request_timeout_secs, 30);

        config.apply_overrides(lookup_from(&[(ENV_REQUEST_TIMEOUT_SECS, "12")]));
        assert_eq!(config.request_timeout(), Duration::from_secs(12));
    }

    #[test]
    fn zero_timeout_from_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"request_timeout_secs":0}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn partial_files_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"server_url":"http://10.0.0.5:8080"}"#)
            .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.server_url, "http://10.0.0.5:8080");
        assert_eq!(config.toast_ttl_ms, 4_000);
    }

    #[test]
    fn malformed_files_report_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing"));
    }
}
