//! Client configuration: credential, endpoint and timeout.
//!
//! Nothing here is global. The resolved [`FredConfig`] is handed to
//! [`crate::data::FredClient::new`] so tests can point the client at a mock
//! server with a fake key.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org/fred";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_API_KEY: &str = "FRED_API_KEY";
const ENV_BASE_URL: &str = "FRED_BASE_URL";
const ENV_TIMEOUT: &str = "FRED_TIMEOUT_SECS";

/// FRED API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct FredConfig {
    pub api_key: ApiKey,
    /// Base address without a trailing slash, e.g. `https://api.stlouisfed.org/fred`.
    pub base_url: String,
    /// Whole-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl FredConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve config from the process environment (after loading `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::resolve(&ConfigOverrides::default(), |name| std::env::var(name).ok())
    }

    /// Merge explicit overrides, an optional key file, and environment lookups.
    ///
    /// Precedence for each field: override, then key file (credential only),
    /// then environment, then built-in default.
    pub fn resolve<F>(overrides: &ConfigOverrides, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_file = match &overrides.key_file {
            Some(path) => load_key_file(path)?,
            None => None,
        };

        let api_key = overrides
            .api_key
            .clone()
            .or(from_file)
            .or_else(|| env(ENV_API_KEY))
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = overrides
            .base_url
            .clone()
            .or_else(|| env(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match overrides.timeout_secs {
            Some(secs) => timeout_from_secs(secs),
            None => match env(ENV_TIMEOUT) {
                Some(raw) => parse_timeout(&raw)?,
                None => Some(DEFAULT_TIMEOUT),
            },
        };

        Ok(Self::new(ApiKey::new(api_key))
            .with_base_url(base_url)
            .with_timeout(timeout))
    }
}

/// Values supplied on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub key_file: Option<std::path::PathBuf>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct KeyFile {
    #[serde(default)]
    api_keys: KeyFileKeys,
}

#[derive(Debug, Default, Deserialize)]
struct KeyFileKeys {
    fred: Option<String>,
}

/// Read `{"api_keys": {"fred": "..."}}`. Other providers' keys are ignored.
pub fn load_key_file(path: &Path) -> Result<Option<String>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::KeyFileRead {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: KeyFile = serde_json::from_str(&raw).map_err(|source| ConfigError::KeyFileParse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parsed.api_keys.fred.filter(|k| !k.trim().is_empty()))
}

fn parse_timeout(raw: &str) -> Result<Option<Duration>, ConfigError> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
    Ok(timeout_from_secs(secs))
}

// 0 disables the timeout.
fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn env_supplies_all_fields() {
        let env = env_of(&[
            ("FRED_API_KEY", "abc"),
            ("FRED_BASE_URL", "http://localhost:9000/fred/"),
            ("FRED_TIMEOUT_SECS", "5"),
        ]);
        let cfg = FredConfig::resolve(&ConfigOverrides::default(), env).unwrap();
        assert_eq!(cfg.api_key.expose(), "abc");
        assert_eq!(cfg.base_url, "http://localhost:9000/fred");
        assert_eq!(cfg.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn defaults_when_only_key_is_set() {
        let cfg = FredConfig::resolve(&ConfigOverrides::default(), env_of(&[("FRED_API_KEY", "k")])).unwrap();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn overrides_beat_environment() {
        let overrides = ConfigOverrides {
            api_key: Some("flag".to_string()),
            base_url: Some("http://mock".to_string()),
            timeout_secs: Some(0),
            ..Default::default()
        };
        let env = env_of(&[("FRED_API_KEY", "env"), ("FRED_TIMEOUT_SECS", "9")]);
        let cfg = FredConfig::resolve(&overrides, env).unwrap();
        assert_eq!(cfg.api_key.expose(), "flag");
        assert_eq!(cfg.base_url, "http://mock");
        assert_eq!(cfg.timeout, None);
    }

    #[test]
    fn missing_or_blank_key_is_an_error() {
        let err = FredConfig::resolve(&ConfigOverrides::default(), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));

        let err = FredConfig::resolve(&ConfigOverrides::default(), env_of(&[("FRED_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let env = env_of(&[("FRED_API_KEY", "k"), ("FRED_TIMEOUT_SECS", "soon")]);
        let err = FredConfig::resolve(&ConfigOverrides::default(), env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout(ref s) if s == "soon"));
    }

    #[test]
    fn key_file_is_used_before_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_keys": {{"fred": "from-file", "ecb": "other"}}}}"#).unwrap();

        let overrides = ConfigOverrides {
            key_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let cfg = FredConfig::resolve(&overrides, env_of(&[("FRED_API_KEY", "env")])).unwrap();
        assert_eq!(cfg.api_key.expose(), "from-file");
    }

    #[test]
    fn key_file_without_fred_entry_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_keys": {{}}}}"#).unwrap();
        assert_eq!(load_key_file(file.path()).unwrap(), None);
    }

    #[test]
    fn invalid_key_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_key_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::KeyFileParse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn debug_redacts_the_key() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        let cfg = FredConfig::new(key);
        assert!(!format!("{cfg:?}").contains("super-secret"));
    }
}
