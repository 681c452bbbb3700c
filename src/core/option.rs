//! Option types and validated pricing inputs

use serde::{Deserialize, Serialize};

use crate::core::{PricerError, PricerResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// Validated inputs for a Black-Scholes valuation.
///
/// All five fields must be strictly positive and finite. Construction is the
/// only way to obtain a value, so downstream code never has to re-check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricingInput {
    /// Current price of the underlying
    pub spot: f64,
    /// Exercise price of the contract
    pub strike: f64,
    /// Annualized risk-free rate as a decimal (0.05 = 5%)
    pub rate: f64,
    /// Time to expiry in years
    pub time: f64,
    /// Annualized volatility as a decimal (0.20 = 20%)
    pub volatility: f64,
}

impl PricingInput {
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        time: f64,
        volatility: f64,
    ) -> PricerResult<Self> {
        check_positive("spot", spot)?;
        check_positive("strike", strike)?;
        check_positive("rate", rate)?;
        check_positive("time", time)?;
        check_positive("volatility", volatility)?;
        Ok(Self {
            spot,
            strike,
            rate,
            time,
            volatility,
        })
    }
}

fn check_positive(name: &str, value: f64) -> PricerResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PricerError::invalid_input(format!(
            "{} must be strictly positive and finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Call and put prices for one computation request. Immutable; the display
/// layer reads it and throws it away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub call: f64,
    pub put: f64,
}
