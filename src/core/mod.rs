//! Core data types for the pricing calculator
//!
//! Defines fundamental types:
//! - PricingInput: validated Black-Scholes parameters
//! - PricingResult: call and put price for one request
//! - PriceSeries: daily close history and the derived volatility
//! - RateSeries: selectable risk-free rate series

pub mod error;
pub mod option;
pub mod rates;
pub mod series;

pub use error::*;
pub use option::*;
pub use rates::*;
pub use series::*;
