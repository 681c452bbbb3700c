//! Data fetching
//!
//! Handles:
//! - Yahoo Finance API for spot price and daily close history
//! - FRED API for the risk-free rate series
//!
//! Both providers sit behind small traits so the orchestrator can be tested
//! with fakes instead of live HTTP.

pub mod fred;
pub mod yahoo;

pub use fred::*;
pub use yahoo::*;

use crate::core::{PricerResult, PriceSeries, RateSeries};

/// Default history window used to estimate volatility.
pub const DEFAULT_HISTORY_RANGE: &str = "1y";

/// Bounded timeout for every external request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Everything the market-data provider returns for one ticker: the close
/// history, the current spot and the volatility derived from the history.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub series: PriceSeries,
    pub spot: f64,
    pub volatility: f64,
}

/// Source of spot price and historical volatility for a ticker.
pub trait MarketData {
    fn snapshot(&self, ticker: &str, history_range: &str) -> PricerResult<MarketSnapshot>;
}

/// Source of the latest risk-free rate, as a decimal annual rate.
pub trait RateSource {
    fn latest_rate(&self, series: RateSeries) -> PricerResult<f64>;
}
