//! Error types for the pricing calculator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ticker not found: {0}")]
    TickerNotFound(String),

    #[error("Insufficient history for {ticker}: {bars} bar(s), need at least 2")]
    InsufficientHistory { ticker: String, bars: usize },

    #[error("Rate series not found: {0}")]
    SeriesNotFound(String),

    #[error("Rate series {0} has no observations")]
    NoObservations(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub type PricerResult<T> = Result<T, PricerError>;

impl PricerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn ticker_not_found(ticker: impl Into<String>) -> Self {
        Self::TickerNotFound(ticker.into())
    }

    pub fn series_not_found(series: impl Into<String>) -> Self {
        Self::SeriesNotFound(series.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::ProviderUnavailable(msg.into())
    }

    /// Which step of a pricing request failed, for user-facing messages.
    pub fn step(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "input validation",
            Self::TickerNotFound(_) | Self::InsufficientHistory { .. } => "market data fetch",
            Self::SeriesNotFound(_) | Self::NoObservations(_) | Self::MissingCredential(_) => {
                "rate fetch"
            }
            Self::ProviderUnavailable(_) => "provider request",
            Self::IO(_) => "io",
        }
    }
}
