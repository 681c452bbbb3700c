//! Example: Black-Scholes pricing with fixed inputs
//!
//! Run with: cargo run --example basic_pricing

use bs_pricer::prelude::*;

fn main() {
    // Option parameters
    let spot = 100.0;
    let strike = 105.0;
    let rate = 0.05; // 5% risk-free rate
    let time = 0.25; // 3 months
    let vol = 0.20; // 20% volatility

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", spot);
    println!("Strike:   ${:.2}", strike);
    println!("Time:     {:.2} years ({:.0} days)", time, time * 365.0);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    let input = PricingInput::new(spot, strike, rate, time, vol).expect("valid inputs");

    let call_price = bs_price(&input, OptionType::Call);
    println!("Call Price: ${:.4}", call_price);

    let put_price = bs_price(&input, OptionType::Put);
    println!("Put Price:  ${:.4}", put_price);

    // Verify put-call parity: C - P = S - K*e^(-rT)
    let parity_lhs = call_price - put_price;
    let parity_rhs = spot - strike * (-rate * time).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.6}", (parity_lhs - parity_rhs).abs());

    // Live pricing needs network access and FRED_API_KEY; uncomment to try.
    //
    // let calculator = Calculator::new(YahooClient::new(), FredClient::from_env().unwrap());
    // let report = calculator.evaluate(&PricingRequest::default()).unwrap();
    // println!("AAPL call: ${:.2}", report.result.call);
}
