//! FRED data fetcher
//!
//! Fetches the latest observation of an interest-rate series from the
//! St. Louis Fed's FRED API and converts it from percentage points to a
//! decimal annual rate.
//!
//! FRED requires an API key; it is injected at construction so tests can
//! substitute a fake [`RateSource`](crate::data::RateSource) without
//! touching the process environment.

use std::time::Duration;

use serde::Deserialize;

use crate::core::{PricerError, PricerResult, RateSeries};
use crate::data::{RateSource, REQUEST_TIMEOUT_SECS};

/// Environment variable the CLI reads the API key from.
pub const FRED_API_KEY_VAR: &str = "FRED_API_KEY";

/// FRED API client
#[derive(Debug)]
pub struct FredClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl FredClient {
    pub fn new(api_key: impl Into<String>) -> PricerResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(PricerError::MissingCredential(
                "FRED API key is empty".into(),
            ));
        }

        Ok(Self {
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: "https://api.stlouisfed.org/fred".to_string(),
            api_key,
        })
    }

    /// Read the API key from `FRED_API_KEY`.
    pub fn from_env() -> PricerResult<Self> {
        match std::env::var(FRED_API_KEY_VAR) {
            Ok(key) => Self::new(key),
            Err(_) => Err(PricerError::MissingCredential(format!(
                "{} is not set",
                FRED_API_KEY_VAR
            ))),
        }
    }

    /// Latest observation of the series as a decimal annual rate
    /// (FRED reports percentage points, so 4.50 becomes 0.045).
    pub fn latest_rate(&self, series: RateSeries) -> PricerResult<f64> {
        let url = format!(
            "{}/series/observations?series_id={}&api_key={}&file_type=json&sort_order=asc",
            self.base_url, series, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PricerError::unavailable(e.to_string()))?;

        // FRED answers 400 for unknown series ids
        if response.status() == reqwest::StatusCode::BAD_REQUEST {
            return Err(PricerError::series_not_found(series.as_str()));
        }
        if !response.status().is_success() {
            return Err(PricerError::unavailable(format!(
                "FRED returned HTTP {}",
                response.status()
            )));
        }

        let response: ObservationsResponse = response.json().map_err(|e| {
            PricerError::unavailable(format!("Failed to parse observations: {}", e))
        })?;

        let rate = latest_numeric(&response.observations)
            .ok_or_else(|| PricerError::NoObservations(series.as_str().to_string()))?;

        tracing::debug!(series = %series, rate, "fetched risk-free rate");
        Ok(rate / 100.0)
    }
}

impl RateSource for FredClient {
    fn latest_rate(&self, series: RateSeries) -> PricerResult<f64> {
        FredClient::latest_rate(self, series)
    }
}

/// Most recent numeric observation. FRED marks missing observations with
/// a "." value; those are skipped.
fn latest_numeric(observations: &[Observation]) -> Option<f64> {
    observations
        .iter()
        .rev()
        .find_map(|obs| obs.value.trim().parse::<f64>().ok())
}

// FRED API response structures

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    #[allow(dead_code)]
    date: String,
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(date: &str, value: &str) -> Observation {
        Observation {
            date: date.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_latest_observation_converted_to_decimal() {
        let observations = [obs("2024-01-02", "4.25"), obs("2024-01-03", "4.50")];
        let rate = latest_numeric(&observations).unwrap() / 100.0;
        assert!((rate - 0.045).abs() < 1e-12);
    }

    #[test]
    fn test_missing_observations_skipped() {
        let observations = [obs("2024-01-02", "4.25"), obs("2024-01-03", ".")];
        assert_eq!(latest_numeric(&observations), Some(4.25));
    }

    #[test]
    fn test_all_missing_is_none() {
        let observations = [obs("2024-01-02", "."), obs("2024-01-03", ".")];
        assert_eq!(latest_numeric(&observations), None);
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = FredClient::new("").unwrap_err();
        assert!(matches!(err, PricerError::MissingCredential(_)));
        let err = FredClient::new("   ").unwrap_err();
        assert!(matches!(err, PricerError::MissingCredential(_)));
    }

    #[test]
    #[ignore] // Requires network and FRED_API_KEY
    fn test_latest_rate() {
        let client = FredClient::from_env().unwrap();
        let rate = client.latest_rate(RateSeries::Dgs10).unwrap();

        // Decimal annual rate, not percentage points
        assert!(rate > 0.0 && rate < 0.25);
        println!("DGS10: {:.4}", rate);
    }
}
