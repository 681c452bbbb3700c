//! Yahoo Finance data fetcher
//!
//! Fetches the current quote and daily close history for a ticker.
//! Uses Yahoo Finance's unofficial API.
//!
//! Note: Yahoo Finance data is delayed ~15 minutes and intended for
//! personal use.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde::Deserialize;

use crate::core::{ClosingBar, PricerError, PricerResult, PriceSeries};
use crate::data::{MarketData, MarketSnapshot, REQUEST_TIMEOUT_SECS};

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: "https://query1.finance.yahoo.com".to_string(),
        }
    }

    /// Get the current quote for a symbol.
    pub fn get_quote(&self, symbol: &str) -> PricerResult<SpotQuote> {
        let url = format!("{}/v7/finance/quote?symbols={}", self.base_url, symbol);

        let response: YahooQuoteResponse = self
            .client
            .get(&url)
            .send()
            .map_err(transport_error)?
            .json()
            .map_err(|e| PricerError::unavailable(format!("Failed to parse quote: {}", e)))?;

        let result = response
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| PricerError::ticker_not_found(symbol))?;

        Ok(SpotQuote {
            symbol: symbol.to_string(),
            price: result.regular_market_price,
        })
    }

    /// Get daily close history over a Yahoo range string ("1mo", "6mo",
    /// "1y", ...), ascending by date. Bars without a close are dropped.
    pub fn get_history(&self, symbol: &str, range: &str) -> PricerResult<PriceSeries> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, symbol, range
        );

        let response = self.client.get(&url).send().map_err(transport_error)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(PricerError::ticker_not_found(symbol));
        }

        let response: YahooChartResponse = response
            .json()
            .map_err(|e| PricerError::unavailable(format!("Failed to parse chart: {}", e)))?;

        if let Some(error) = response.chart.error {
            tracing::debug!(symbol, code = %error.code, "chart error from Yahoo");
            return Err(PricerError::ticker_not_found(symbol));
        }

        let result = response
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| PricerError::ticker_not_found(symbol))?;

        let bars = close_bars(&result);
        Ok(PriceSeries::new(symbol, bars))
    }

    /// One-call fetch of everything the pricer needs for a ticker.
    pub fn fetch(&self, ticker: &str, history_range: &str) -> PricerResult<MarketSnapshot> {
        let quote = self.get_quote(ticker)?;
        let series = self.get_history(ticker, history_range)?;
        let volatility = series.annualized_volatility()?;

        tracing::debug!(
            ticker,
            spot = quote.price,
            bars = series.len(),
            volatility,
            "fetched market snapshot"
        );

        Ok(MarketSnapshot {
            series,
            spot: quote.price,
            volatility,
        })
    }
}

impl MarketData for YahooClient {
    fn snapshot(&self, ticker: &str, history_range: &str) -> PricerResult<MarketSnapshot> {
        self.fetch(ticker, history_range)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

fn transport_error(e: reqwest::Error) -> PricerError {
    if e.is_timeout() {
        PricerError::unavailable(format!("request timed out: {}", e))
    } else {
        PricerError::unavailable(e.to_string())
    }
}

/// Pair chart timestamps with closes, dropping bars where Yahoo reports a
/// null close (halted or partial sessions).
fn close_bars(result: &YahooChartResult) -> Vec<ClosingBar> {
    let timestamps = result.timestamp.as_deref().unwrap_or(&[]);
    let closes = result
        .indicators
        .quote
        .first()
        .map(|q| q.close.as_slice())
        .unwrap_or(&[]);

    timestamps
        .iter()
        .zip(closes)
        .filter_map(|(&ts, close)| {
            let close = (*close)?;
            let date = Utc.timestamp_opt(ts, 0).single()?.date_naive();
            Some(ClosingBar { date, close })
        })
        .collect()
}

/// Spot price quote
#[derive(Debug, Clone)]
pub struct SpotQuote {
    pub symbol: String,
    pub price: f64,
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: YahooQuoteResult,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteResult {
    result: Vec<YahooQuoteData>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteData {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: f64,
}

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooChartResult>>,
    error: Option<YahooChartError>,
}

#[derive(Debug, Deserialize)]
struct YahooChartError {
    code: String,
    #[allow(dead_code)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteBlock {
    close: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_bars_drops_nulls() {
        let raw = r#"{
            "timestamp": [1704067200, 1704153600, 1704240000],
            "indicators": { "quote": [ { "close": [100.0, null, 102.5] } ] }
        }"#;
        let result: YahooChartResult = serde_json::from_str(raw).unwrap();

        let bars = close_bars(&result);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, 100.0);
        assert_eq!(bars[1].close, 102.5);
        assert!(bars[0].date < bars[1].date);
    }

    #[test]
    fn test_chart_error_shape_parses() {
        let raw = r#"{
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found" }
            }
        }"#;
        let response: YahooChartResponse = serde_json::from_str(raw).unwrap();
        assert!(response.chart.result.is_none());
        assert_eq!(response.chart.error.unwrap().code, "Not Found");
    }

    #[test]
    #[ignore] // Requires network
    fn test_get_quote() {
        let client = YahooClient::new();
        let quote = client.get_quote("AAPL").unwrap();

        assert!(quote.price > 0.0);
        println!("AAPL price: {}", quote.price);
    }

    #[test]
    #[ignore] // Requires network
    fn test_fetch_snapshot() {
        let client = YahooClient::new();
        let snapshot = client.fetch("AAPL", "1y").unwrap();

        assert!(snapshot.spot > 0.0);
        assert!(snapshot.volatility > 0.0);
        assert!(snapshot.series.len() > 100);
    }

    #[test]
    #[ignore] // Requires network
    fn test_unknown_ticker() {
        let client = YahooClient::new();
        let err = client.fetch("NOSUCHTICKERXYZ", "1y").unwrap_err();
        assert!(matches!(err, PricerError::TickerNotFound(_)));
    }
}
