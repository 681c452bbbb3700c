//! Black-Scholes Model
//!
//! Closed-form European option pricing without dividends:
//!
//! ```text
//! d1   = (ln(S/K) + T*(r + 0.5*sigma^2)) / (sigma*sqrt(T))
//! d2   = d1 - sigma*sqrt(T)
//! call = S*N(d1) - K*e^(-rT)*N(d2)
//! put  = K*e^(-rT)*N(-d2) - S*N(-d1)
//! ```
//!
//! Inputs arrive as a validated [`PricingInput`], so the formulas never see a
//! non-positive spot, strike, volatility or time. Pure computation, no I/O.

use std::f64::consts::PI;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{OptionType, PricingInput, PricingResult};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(input: &PricingInput) -> f64 {
    let PricingInput {
        spot,
        strike,
        rate,
        time,
        volatility,
    } = *input;
    ((spot / strike).ln() + time * (rate + 0.5 * volatility * volatility))
        / (volatility * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(input: &PricingInput) -> f64 {
    d1(input) - input.volatility * input.time.sqrt()
}

/// Black-Scholes European option price
pub fn price(input: &PricingInput, option_type: OptionType) -> f64 {
    let d1 = d1(input);
    let d2 = d2(input);
    let discounted_strike = input.strike * (-input.rate * input.time).exp();

    match option_type {
        OptionType::Call => input.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionType::Put => discounted_strike * norm_cdf(-d2) - input.spot * norm_cdf(-d1),
    }
}

/// Price both legs for one request.
pub fn evaluate(input: &PricingInput) -> PricingResult {
    PricingResult {
        call: price(input, OptionType::Call),
        put: price(input, OptionType::Put),
    }
}
