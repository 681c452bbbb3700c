//! # BS Pricer - Black-Scholes Option Pricing Calculator
//!
//! Prices European call and put options with the closed-form Black-Scholes
//! model, fed by live market data:
//!
//! - **Spot price and volatility**: Yahoo Finance daily closes; volatility is
//!   the annualized sample stdev of daily returns
//! - **Risk-free rate**: latest observation of a FRED series (Treasury
//!   yields, fed funds)
//!
//! ## Key Components
//!
//! - **Core types**: validated `PricingInput`, `PriceSeries`, `RateSeries`
//! - **Data Fetching**: `YahooClient` (market data) and `FredClient` (rates),
//!   behind the `MarketData` / `RateSource` traits
//! - **Black-Scholes**: pure call/put valuation
//! - **Orchestration**: `Calculator` runs one request end to end
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bs_pricer::prelude::*;
//!
//! let market = YahooClient::new();
//! let rates = FredClient::from_env().unwrap();
//! let calculator = Calculator::new(market, rates);
//!
//! let report = calculator.evaluate(&PricingRequest {
//!     ticker: "AAPL".into(),
//!     rate_series: RateSeries::Dgs10,
//!     time_years: 1.0,
//!     strike: 180.0,
//! }).unwrap();
//!
//! println!("call ${:.2}  put ${:.2}", report.result.call, report.result.put);
//! ```
//!
//! ## What This Calculator Does NOT Do
//!
//! - American exercise, Greeks, implied volatility
//! - Multi-leg strategies or backtesting
//! - Persist results; every request recomputes from live data

pub mod core;
pub mod data;
pub mod models;
pub mod pricing;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        ClosingBar, OptionType, PricerError, PricerResult, PriceSeries, PricingInput,
        PricingResult, RateSeries,
    };

    // Data fetching
    pub use crate::data::{
        FredClient, MarketData, MarketSnapshot, RateSource, SpotQuote, YahooClient,
        DEFAULT_HISTORY_RANGE,
    };

    // Models
    pub use crate::models::{norm_cdf, norm_pdf, price as bs_price};

    // Orchestration
    pub use crate::pricing::{Calculator, PricingReport, PricingRequest, MAX_TIME_YEARS};
}

// Re-export main types at crate root
pub use crate::core::{PricerError, PricerResult};
pub use crate::pricing::{Calculator, PricingRequest};
