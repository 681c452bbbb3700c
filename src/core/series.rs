//! Daily close-price series and the volatility statistic derived from it

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{PricerError, PricerResult};

/// Trading days per year, used to annualize the daily return stdev.
pub const TRADING_DAYS: f64 = 252.0;

/// One daily bar, reduced to the close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosingBar {
    pub date: NaiveDate,
    pub close: f64,
}

/// Close-price history for one ticker, ascending by date, no duplicate dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub ticker: String,
    bars: Vec<ClosingBar>,
}

impl PriceSeries {
    /// Build a series from provider bars. Bars are sorted by date and a later
    /// bar for the same date replaces the earlier one.
    pub fn new(ticker: impl Into<String>, mut bars: Vec<ClosingBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        bars.dedup_by(|next, prev| {
            if next.date == prev.date {
                prev.close = next.close;
                true
            } else {
                false
            }
        });
        Self {
            ticker: ticker.into(),
            bars,
        }
    }

    pub fn bars(&self) -> &[ClosingBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Most recent close in the series.
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    /// Simple daily returns, `(close[t] - close[t-1]) / close[t-1]`. The
    /// first bar has no prior close and is excluded.
    pub fn returns(&self) -> Vec<f64> {
        self.bars
            .windows(2)
            .map(|w| (w[1].close - w[0].close) / w[0].close)
            .collect()
    }

    /// Annualized volatility: sample standard deviation of daily returns
    /// scaled by sqrt(252).
    ///
    /// The sample stdev needs at least two returns (three bars); shorter
    /// series fail rather than produce NaN.
    pub fn annualized_volatility(&self) -> PricerResult<f64> {
        let returns = self.returns();
        if returns.len() < 2 {
            return Err(PricerError::InsufficientHistory {
                ticker: self.ticker.clone(),
                bars: self.bars.len(),
            });
        }

        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
        Ok(variance.sqrt() * TRADING_DAYS.sqrt())
    }
}
