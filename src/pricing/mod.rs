//! Request orchestration
//!
//! Glues the providers to the model: validate the user's form inputs, fetch
//! market data and the risk-free rate, assemble a [`PricingInput`] and price
//! both legs. One synchronous pass per user trigger; any failure aborts the
//! whole request, so a caller never sees a partial or stale report.

use serde::{Deserialize, Serialize};

use crate::core::{
    PricerError, PricerResult, PriceSeries, PricingInput, PricingResult, RateSeries,
};
use crate::data::{MarketData, RateSource, DEFAULT_HISTORY_RANGE};
use crate::models::black_scholes;

/// Longest horizon the form accepts, in years.
pub const MAX_TIME_YEARS: f64 = 5.0;

/// The user's form inputs for one computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRequest {
    pub ticker: String,
    pub rate_series: RateSeries,
    pub time_years: f64,
    pub strike: f64,
}

impl Default for PricingRequest {
    fn default() -> Self {
        Self {
            ticker: "AAPL".to_string(),
            rate_series: RateSeries::default(),
            time_years: 1.0,
            strike: 100.0,
        }
    }
}

impl PricingRequest {
    /// Check the form contract before any provider is contacted.
    pub fn validate(&self) -> PricerResult<()> {
        if self.ticker.trim().is_empty() {
            return Err(PricerError::invalid_input("ticker must not be empty"));
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricerError::invalid_input(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        if !self.time_years.is_finite()
            || self.time_years <= 0.0
            || self.time_years > MAX_TIME_YEARS
        {
            return Err(PricerError::invalid_input(format!(
                "time must be in (0, {}] years, got {}",
                MAX_TIME_YEARS, self.time_years
            )));
        }
        Ok(())
    }
}

/// Everything the display layer shows for one successful request.
#[derive(Debug, Clone)]
pub struct PricingReport {
    pub ticker: String,
    pub rate_series: RateSeries,
    pub spot: f64,
    pub strike: f64,
    pub time_years: f64,
    pub rate: f64,
    pub volatility: f64,
    pub result: PricingResult,
    pub series: PriceSeries,
}

/// Per-request orchestrator over a market-data source and a rate source.
pub struct Calculator<M, R> {
    market: M,
    rates: R,
    history_range: String,
}

impl<M: MarketData, R: RateSource> Calculator<M, R> {
    pub fn new(market: M, rates: R) -> Self {
        Self {
            market,
            rates,
            history_range: DEFAULT_HISTORY_RANGE.to_string(),
        }
    }

    pub fn with_history_range(mut self, range: impl Into<String>) -> Self {
        self.history_range = range.into();
        self
    }

    /// Run one full request: validate, fetch, price. Errors propagate
    /// unchanged from the failing step.
    pub fn evaluate(&self, request: &PricingRequest) -> PricerResult<PricingReport> {
        request.validate()?;

        let ticker = request.ticker.trim().to_ascii_uppercase();
        let snapshot = self.market.snapshot(&ticker, &self.history_range)?;
        let rate = self.rates.latest_rate(request.rate_series)?;

        let input = PricingInput::new(
            snapshot.spot,
            request.strike,
            rate,
            request.time_years,
            snapshot.volatility,
        )?;
        let result = black_scholes::evaluate(&input);

        tracing::debug!(
            ticker = %ticker,
            call = result.call,
            put = result.put,
            "priced request"
        );

        Ok(PricingReport {
            ticker,
            rate_series: request.rate_series,
            spot: snapshot.spot,
            strike: request.strike,
            time_years: request.time_years,
            rate,
            volatility: snapshot.volatility,
            result,
            series: snapshot.series,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClosingBar;
    use crate::data::MarketSnapshot;
    use chrono::NaiveDate;
    use std::cell::Cell;

    struct FakeMarket {
        spot: f64,
        closes: Vec<f64>,
        error: Option<fn() -> PricerError>,
        calls: Cell<usize>,
    }

    impl FakeMarket {
        fn with_closes(spot: f64, closes: &[f64]) -> Self {
            Self {
                spot,
                closes: closes.to_vec(),
                error: None,
                calls: Cell::new(0),
            }
        }

        fn failing(error: fn() -> PricerError) -> Self {
            Self {
                spot: 0.0,
                closes: Vec::new(),
                error: Some(error),
                calls: Cell::new(0),
            }
        }
    }

    impl MarketData for FakeMarket {
        fn snapshot(&self, ticker: &str, _range: &str) -> PricerResult<MarketSnapshot> {
            self.calls.set(self.calls.get() + 1);
            if let Some(error) = self.error {
                return Err(error());
            }
            let bars = self
                .closes
                .iter()
                .enumerate()
                .map(|(i, &close)| ClosingBar {
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                        + chrono::Duration::days(i as i64),
                    close,
                })
                .collect();
            let series = PriceSeries::new(ticker, bars);
            let volatility = series.annualized_volatility()?;
            Ok(MarketSnapshot {
                series,
                spot: self.spot,
                volatility,
            })
        }
    }

    struct FakeRates {
        rate: f64,
    }

    impl RateSource for FakeRates {
        fn latest_rate(&self, _series: RateSeries) -> PricerResult<f64> {
            Ok(self.rate)
        }
    }

    fn request(ticker: &str, time: f64, strike: f64) -> PricingRequest {
        PricingRequest {
            ticker: ticker.to_string(),
            rate_series: RateSeries::Dgs10,
            time_years: time,
            strike,
        }
    }

    #[test]
    fn test_happy_path() {
        let market = FakeMarket::with_closes(104.0, &[100.0, 102.0, 101.0, 105.0]);
        let calc = Calculator::new(market, FakeRates { rate: 0.045 });

        let report = calc.evaluate(&request("aapl", 1.0, 100.0)).unwrap();
        assert_eq!(report.ticker, "AAPL");
        assert_eq!(report.spot, 104.0);
        assert_eq!(report.rate, 0.045);
        assert_eq!(report.series.len(), 4);
        assert!(report.volatility > 0.0);
        assert!(report.result.call > 0.0 && report.result.put > 0.0);

        // Put-call parity ties the report together
        let parity = report.spot - report.strike * (-report.rate * report.time_years).exp();
        assert!((report.result.call - report.result.put - parity).abs() < 1e-9);
    }

    #[test]
    fn test_user_strike_is_used() {
        // The strike in the formulas is the user's, not the spot
        let market = FakeMarket::with_closes(104.0, &[100.0, 102.0, 101.0, 105.0]);
        let calc = Calculator::new(market, FakeRates { rate: 0.045 });

        let low = calc.evaluate(&request("AAPL", 1.0, 80.0)).unwrap();
        let high = calc.evaluate(&request("AAPL", 1.0, 130.0)).unwrap();
        assert!(low.result.call > high.result.call);
        assert!(low.result.put < high.result.put);
    }

    #[test]
    fn test_invalid_requests_never_reach_providers() {
        let market = FakeMarket::with_closes(104.0, &[100.0, 102.0, 101.0]);
        let calc = Calculator::new(market, FakeRates { rate: 0.045 });

        for req in [
            request("", 1.0, 100.0),
            request("AAPL", 0.0, 100.0),
            request("AAPL", 5.1, 100.0),
            request("AAPL", 1.0, 0.0),
            request("AAPL", f64::NAN, 100.0),
        ] {
            let err = calc.evaluate(&req).unwrap_err();
            assert!(matches!(err, PricerError::InvalidInput(_)));
        }
        assert_eq!(calc.market.calls.get(), 0);
    }

    #[test]
    fn test_provider_errors_propagate_unchanged() {
        let market = FakeMarket::failing(|| PricerError::ticker_not_found("NOPE"));
        let calc = Calculator::new(market, FakeRates { rate: 0.045 });

        let err = calc.evaluate(&request("NOPE", 1.0, 100.0)).unwrap_err();
        assert!(matches!(err, PricerError::TickerNotFound(_)));
        assert_eq!(err.step(), "market data fetch");
    }

    #[test]
    fn test_failed_request_yields_no_report() {
        let market = FakeMarket::with_closes(104.0, &[100.0, 101.0]);
        let calc = Calculator::new(market, FakeRates { rate: 0.045 });

        // Two bars give one return, not enough for a stdev
        let result = calc.evaluate(&request("AAPL", 1.0, 100.0));
        assert!(matches!(
            result,
            Err(PricerError::InsufficientHistory { bars: 2, .. })
        ));
    }
}
