//! Risk-free rate series offered by the calculator
//!
//! Each variant maps to a FRED series id. Treasury constant-maturity yields
//! (DGS*), the 10-year breakeven inflation rate and the federal funds rate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::PricerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateSeries {
    Dgs1Mo,
    Dgs2Mo,
    Dgs3Mo,
    Dgs6Mo,
    Dgs1,
    Dgs2,
    Dgs3,
    Dgs5,
    Dgs7,
    Dgs10,
    Dgs20,
    Dgs30,
    T10Yie,
    FedFunds,
}

impl RateSeries {
    /// All selectable series, shortest maturity first.
    pub const ALL: [RateSeries; 14] = [
        RateSeries::Dgs1Mo,
        RateSeries::Dgs2Mo,
        RateSeries::Dgs3Mo,
        RateSeries::Dgs6Mo,
        RateSeries::Dgs1,
        RateSeries::Dgs2,
        RateSeries::Dgs3,
        RateSeries::Dgs5,
        RateSeries::Dgs7,
        RateSeries::Dgs10,
        RateSeries::Dgs20,
        RateSeries::Dgs30,
        RateSeries::T10Yie,
        RateSeries::FedFunds,
    ];

    /// FRED series identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RateSeries::Dgs1Mo => "DGS1MO",
            RateSeries::Dgs2Mo => "DGS2MO",
            RateSeries::Dgs3Mo => "DGS3MO",
            RateSeries::Dgs6Mo => "DGS6MO",
            RateSeries::Dgs1 => "DGS1",
            RateSeries::Dgs2 => "DGS2",
            RateSeries::Dgs3 => "DGS3",
            RateSeries::Dgs5 => "DGS5",
            RateSeries::Dgs7 => "DGS7",
            RateSeries::Dgs10 => "DGS10",
            RateSeries::Dgs20 => "DGS20",
            RateSeries::Dgs30 => "DGS30",
            RateSeries::T10Yie => "T10YIE",
            RateSeries::FedFunds => "FEDFUNDS",
        }
    }

    /// Human-readable label for the form.
    pub fn label(&self) -> &'static str {
        match self {
            RateSeries::Dgs1Mo => "1-Month Treasury",
            RateSeries::Dgs2Mo => "2-Month Treasury",
            RateSeries::Dgs3Mo => "3-Month Treasury",
            RateSeries::Dgs6Mo => "6-Month Treasury",
            RateSeries::Dgs1 => "1-Year Treasury",
            RateSeries::Dgs2 => "2-Year Treasury",
            RateSeries::Dgs3 => "3-Year Treasury",
            RateSeries::Dgs5 => "5-Year Treasury",
            RateSeries::Dgs7 => "7-Year Treasury",
            RateSeries::Dgs10 => "10-Year Treasury",
            RateSeries::Dgs20 => "20-Year Treasury",
            RateSeries::Dgs30 => "30-Year Treasury",
            RateSeries::T10Yie => "10-Year Breakeven Inflation",
            RateSeries::FedFunds => "Federal Funds Rate",
        }
    }
}

impl Default for RateSeries {
    fn default() -> Self {
        RateSeries::Dgs10
    }
}

impl fmt::Display for RateSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateSeries {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|series| series.as_str() == upper)
            .copied()
            .ok_or_else(|| PricerError::series_not_found(s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for series in RateSeries::ALL {
            assert_eq!(series.as_str().parse::<RateSeries>().unwrap(), series);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("dgs10".parse::<RateSeries>().unwrap(), RateSeries::Dgs10);
        assert_eq!(
            " fedfunds ".parse::<RateSeries>().unwrap(),
            RateSeries::FedFunds
        );
    }

    #[test]
    fn test_unknown_series() {
        let err = "DGS42".parse::<RateSeries>().unwrap_err();
        assert!(matches!(err, PricerError::SeriesNotFound(_)));
    }

    #[test]
    fn test_default_is_ten_year() {
        assert_eq!(RateSeries::default(), RateSeries::Dgs10);
    }
}
