//! FRED API client: latest observation per series, plus series metadata.

use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{ApiKey, FredConfig};
use crate::domain::{Indicator, Observation, SeriesInfo};
use crate::error::{ConfigError, FetchError};

/// Stateless FRED client. Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct FredClient {
    client: Client,
    api_key: ApiKey,
    observations_endpoint: Url,
    series_endpoint: Url,
}

impl FredClient {
    pub fn new(config: FredConfig) -> Result<Self, ConfigError> {
        let observations_endpoint = endpoint(&config.base_url, "series/observations")?;
        let series_endpoint = endpoint(&config.base_url, "series")?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            api_key: config.api_key,
            observations_endpoint,
            series_endpoint,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(FredConfig::from_env()?)
    }

    /// Query URL for the newest observation of `series_id`.
    ///
    /// The identifier is forwarded as-is; FRED decides whether it exists.
    pub fn observations_url(&self, series_id: &str) -> Url {
        let mut url = self.observations_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("series_id", series_id)
            .append_pair("api_key", self.api_key.expose())
            .append_pair("file_type", "json")
            .append_pair("sort_order", "desc")
            .append_pair("limit", "1");
        url
    }

    fn series_url(&self, series_id: &str) -> Url {
        let mut url = self.series_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("series_id", series_id)
            .append_pair("api_key", self.api_key.expose())
            .append_pair("file_type", "json");
        url
    }

    /// Fetch the most recent observation of a series with a single GET.
    pub async fn fetch_latest_observation(&self, series_id: &str) -> Result<Observation, FetchError> {
        let body: ObservationsResponse = self.get_json(self.observations_url(series_id), series_id).await?;

        body.observations
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NoObservations {
                series_id: series_id.to_string(),
            })
    }

    pub async fn fetch_series_info(&self, series_id: &str) -> Result<SeriesInfo, FetchError> {
        let body: SeriesResponse = self.get_json(self.series_url(series_id), series_id).await?;

        body.seriess
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NoSeriesInfo {
                series_id: series_id.to_string(),
            })
    }

    pub async fn latest_indicator(&self, indicator: Indicator) -> Result<Observation, FetchError> {
        self.fetch_latest_observation(indicator.series_id()).await
    }

    pub async fn latest_gdp(&self) -> Result<Observation, FetchError> {
        self.latest_indicator(Indicator::Gdp).await
    }

    pub async fn latest_inflation(&self) -> Result<Observation, FetchError> {
        self.latest_indicator(Indicator::Inflation).await
    }

    pub async fn latest_unemployment(&self) -> Result<Observation, FetchError> {
        self.latest_indicator(Indicator::Unemployment).await
    }

    pub async fn latest_interest_rate(&self) -> Result<Observation, FetchError> {
        self.latest_indicator(Indicator::InterestRate).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, series_id: &str) -> Result<T, FetchError> {
        // reqwest errors embed the request URL, which carries the api key.
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                series_id: series_id.to_string(),
                source: e.without_url(),
            })?;

        let status = resp.status();
        debug!(series_id, %status, "FRED response");

        if !status.is_success() {
            return Err(FetchError::Status {
                series_id: series_id.to_string(),
                status,
            });
        }

        resp.json::<T>().await.map_err(|e| FetchError::Decode {
            series_id: series_id.to_string(),
            source: e.without_url(),
        })
    }
}

fn endpoint(base_url: &str, path: &str) -> Result<Url, ConfigError> {
    let raw = format!("{}/{path}", base_url.trim_end_matches('/'));
    let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: "not an http(s) base address".to_string(),
        });
    }
    Ok(url)
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    seriess: Vec<SeriesInfo>,
}
