//! Top-level application orchestration.
//!
//! `src/main.rs` only sets up logging and maps errors to exit codes; this
//! module parses arguments, builds the client and prints results.

use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::FredConfig;
use crate::data::FredClient;
use crate::domain::Indicator;
use crate::error::AppError;
use crate::report::{self, IndicatorRow};

/// Entry point for the `fred` binary.
pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    run_with(cli).await
}

pub async fn run_with(cli: Cli) -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = FredConfig::resolve(&cli.global.config_overrides(), |name| std::env::var(name).ok())?;
    info!(base_url = %config.base_url, timeout = ?config.timeout, "FRED client configured");
    let client = FredClient::new(config)?;

    let output = execute(&client, cli.command, cli.global.json).await?;
    println!("{output}");
    Ok(())
}

/// Run one command against `client` and render its output.
pub async fn execute(client: &FredClient, command: Command, json: bool) -> Result<String, AppError> {
    match command {
        Command::Latest { series_id } => {
            let obs = client.fetch_latest_observation(&series_id).await?;
            if json {
                to_json(&obs)
            } else {
                Ok(report::format_observation(&series_id, &obs))
            }
        }
        Command::Indicator { indicator } => {
            let obs = client.latest_indicator(indicator).await?;
            if json {
                to_json(&IndicatorRow::new(indicator, obs))
            } else {
                Ok(report::format_observation(indicator.series_id(), &obs))
            }
        }
        Command::Dashboard => {
            let rows = fetch_dashboard(client).await?;
            if json {
                to_json(&rows)
            } else {
                Ok(report::format_dashboard(&rows))
            }
        }
        Command::Info { series_id } => {
            let info = client.fetch_series_info(&series_id).await?;
            if json {
                to_json(&info)
            } else {
                Ok(report::format_series_info(&info))
            }
        }
    }
}

/// One request per indicator, issued in order; the first failure aborts.
pub async fn fetch_dashboard(client: &FredClient) -> Result<Vec<IndicatorRow>, AppError> {
    let mut rows = Vec::with_capacity(Indicator::ALL.len());
    for indicator in Indicator::ALL {
        let obs = client.latest_indicator(indicator).await?;
        rows.push(IndicatorRow::new(indicator, obs));
    }
    Ok(rows)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::new(4, format!("Failed to encode JSON output: {e}")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ApiKey;

    async fn mount(server: &MockServer, series_id: &str, value: &str) {
        Mock::given(method("GET"))
            .and(path("/series/observations"))
            .and(query_param("series_id", series_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "observations": [{ "date": "2025-05-01", "value": value }]
            })))
            .mount(server)
            .await;
    }

    fn client_for(server: &MockServer) -> FredClient {
        FredClient::new(FredConfig::new(ApiKey::new("k")).with_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn dashboard_fetches_all_four_in_order() {
        let server = MockServer::start().await;
        mount(&server, "GDP", "29962.047").await;
        mount(&server, "CPIAUCSL", "320.580").await;
        mount(&server, "UNRATE", "4.2").await;
        mount(&server, "FEDFUNDS", "4.33").await;

        let rows = fetch_dashboard(&client_for(&server)).await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.series_id).collect();
        assert_eq!(ids, ["GDP", "CPIAUCSL", "UNRATE", "FEDFUNDS"]);
        assert_eq!(rows[2].observation.value, "4.2");
    }

    #[tokio::test]
    async fn dashboard_failure_maps_to_fetch_exit_code() {
        let server = MockServer::start().await;
        mount(&server, "GDP", "29962.047").await;
        Mock::given(method("GET"))
            .and(path("/series/observations"))
            .and(query_param("series_id", "CPIAUCSL"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = fetch_dashboard(&client_for(&server)).await.unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("CPIAUCSL"));
    }

    #[tokio::test]
    async fn indicator_json_output_carries_series_and_raw_value() {
        let server = MockServer::start().await;
        mount(&server, "UNRATE", "4.2").await;

        let out = execute(
            &client_for(&server),
            Command::Indicator {
                indicator: Indicator::Unemployment,
            },
            true,
        )
        .await
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["indicator"], "unemployment");
        assert_eq!(parsed["series_id"], "UNRATE");
        assert_eq!(parsed["observation"]["value"], "4.2");
    }

    #[tokio::test]
    async fn latest_text_output() {
        let server = MockServer::start().await;
        mount(&server, "T10Y2Y", "0.52").await;

        let out = execute(
            &client_for(&server),
            Command::Latest {
                series_id: "T10Y2Y".to_string(),
            },
            false,
        )
        .await
        .unwrap();
        assert_eq!(out, "T10Y2Y 2025-05-01 0.520");
    }
}
