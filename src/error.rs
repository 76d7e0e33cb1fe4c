use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single FRED request.
///
/// Every variant carries the series identifier that was requested so the
/// message alone is enough to tell which call went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    /// FRED answered with a non-2xx status.
    #[error("FRED fetch failed for series {series_id} (status {status}).")]
    Status { series_id: String, status: StatusCode },

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("FRED request for series {series_id} failed: {source}")]
    Transport {
        series_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape we expect.
    #[error("Failed to parse FRED response for series {series_id}: {source}")]
    Decode {
        series_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// 2xx response whose observation list was empty.
    #[error("No observations returned for series {series_id}.")]
    NoObservations { series_id: String },

    /// 2xx response from `/series` with no metadata record.
    #[error("No series metadata returned for series {series_id}.")]
    NoSeriesInfo { series_id: String },
}

impl FetchError {
    pub fn series_id(&self) -> &str {
        match self {
            FetchError::Status { series_id, .. }
            | FetchError::Transport { series_id, .. }
            | FetchError::Decode { series_id, .. }
            | FetchError::NoObservations { series_id }
            | FetchError::NoSeriesInfo { series_id } => series_id,
        }
    }
}

/// Problems resolving the client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing FRED API key: pass --api-key, --config <file>, or set FRED_API_KEY (.env).")]
    MissingApiKey,

    #[error("Failed to read key file {path}: {source}")]
    KeyFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid key file {path}: {source}")]
    KeyFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid timeout '{0}': expected a whole number of seconds.")]
    InvalidTimeout(String),

    #[error("Invalid FRED base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Top-level error for the `fred` binary: a message plus the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        AppError::new(4, err.to_string())
    }
}
