//! Pricing models
//!
//! Black-Scholes closed-form European valuation. The model layer is pure:
//! validated inputs in, prices out, no I/O.

pub mod black_scholes;

pub use black_scholes::*;
