//! Black-Scholes calculator CLI
//!
//! Interactive form for the pricing calculator: prompts for ticker, rate
//! series, time horizon and strike, then fetches live data and prints call
//! and put prices with a close-price chart. Re-runs the whole computation on
//! every trigger; a failed request prints the failing step and the form
//! stays usable.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use bs_pricer::prelude::*;

const SPARKLINE_WIDTH: usize = 60;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Black-Scholes Option Pricing Calculator");
    println!("=======================================\n");

    // The FRED key is a startup requirement, not a mid-request surprise
    let rates = match FredClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Cannot start: {}", e);
            eprintln!("Get a free key at https://fred.stlouisfed.org/docs/api/api_key.html");
            std::process::exit(1);
        }
    };

    let calculator = Calculator::new(YahooClient::new(), rates);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut request = PricingRequest::default();

    loop {
        match read_request(&mut lines, &request) {
            Ok(Some(next)) => request = next,
            Ok(None) => break,
            Err(e) => {
                println!("\nError during input validation: {}\n", e);
                continue;
            }
        }

        println!("\nFetching data for {}...", request.ticker.to_ascii_uppercase());
        match calculator.evaluate(&request) {
            Ok(report) => render(&report),
            Err(e) => println!("\nError during {}: {}\n", e.step(), e),
        }

        match prompt(&mut lines, "Price another option? [Y/n]") {
            Some(answer) if answer.eq_ignore_ascii_case("n") => break,
            Some(_) => println!(),
            None => break,
        }
    }

    println!("Goodbye.");
}

/// Prompt for each form field, keeping the previous value on empty input.
/// Returns `None` when stdin is closed.
fn read_request(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    current: &PricingRequest,
) -> PricerResult<Option<PricingRequest>> {
    let ticker = match prompt(lines, &format!("Ticker [{}]", current.ticker)) {
        Some(s) if s.is_empty() => current.ticker.clone(),
        Some(s) => s,
        None => return Ok(None),
    };

    println!("Rate series:");
    for series in RateSeries::ALL {
        println!("  {:<8} {}", series.as_str(), series.label());
    }
    let rate_series = match prompt(lines, &format!("Series [{}]", current.rate_series)) {
        Some(s) if s.is_empty() => current.rate_series,
        Some(s) => s.parse()?,
        None => return Ok(None),
    };

    let time_years = match prompt(
        lines,
        &format!("Time in years, up to {} [{}]", MAX_TIME_YEARS, current.time_years),
    ) {
        Some(s) if s.is_empty() => current.time_years,
        Some(s) => s
            .parse::<f64>()
            .map_err(|_| PricerError::invalid_input(format!("not a number: {}", s)))?,
        None => return Ok(None),
    };

    let strike = match prompt(lines, &format!("Strike price [{}]", current.strike)) {
        Some(s) if s.is_empty() => current.strike,
        Some(s) => s
            .parse::<f64>()
            .map_err(|_| PricerError::invalid_input(format!("not a number: {}", s)))?,
        None => return Ok(None),
    };

    let request = PricingRequest {
        ticker,
        rate_series,
        time_years,
        strike,
    };
    request.validate()?;
    Ok(Some(request))
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Option<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let line = lines.next()?.ok()?;
    Some(line.trim().to_string())
}

fn render(report: &PricingReport) {
    let closes: Vec<f64> = report.series.bars().iter().map(|b| b.close).collect();

    println!("\nInputs");
    println!("------");
    println!("Ticker: {}", report.ticker);
    println!("{}", sparkline(&closes, SPARKLINE_WIDTH));
    if let (Some(first), Some(last)) = (report.series.bars().first(), report.series.bars().last())
    {
        println!("Close history: {} to {} ({} bars)", first.date, last.date, closes.len());
    }
    println!("Spot price: ${:.2}", report.spot);
    println!("Strike price: ${:.2}", report.strike);
    println!("Time: {} years", report.time_years);
    println!(
        "Risk-free rate ({}): {:.2}%",
        report.rate_series,
        report.rate * 100.0
    );
    println!("Volatility: {:.2}%", report.volatility * 100.0);

    println!("\nOutputs");
    println!("-------");
    println!("Option price: ${:.2} for call", report.result.call);
    println!("Option price: ${:.2} for put", report.result.put);
    println!();
}

/// Close-price chart as a unicode sparkline, downsampled to `width` columns.
fn sparkline(values: &[f64], width: usize) -> String {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    if values.is_empty() || width == 0 {
        return String::new();
    }

    let sampled: Vec<f64> = if values.len() <= width {
        values.to_vec()
    } else {
        (0..width)
            .map(|i| values[i * (values.len() - 1) / (width - 1).max(1)])
            .collect()
    };

    let min = sampled.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = sampled.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    sampled
        .iter()
        .map(|v| {
            let level = if span > 0.0 {
                (((v - min) / span) * (BLOCKS.len() - 1) as f64).round() as usize
            } else {
                0
            };
            BLOCKS[level.min(BLOCKS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_spans_range() {
        let line = sparkline(&[1.0, 2.0, 3.0, 4.0], 10);
        assert_eq!(line.chars().count(), 4);
        assert_eq!(line.chars().next(), Some('▁'));
        assert_eq!(line.chars().last(), Some('█'));
    }

    #[test]
    fn test_sparkline_downsamples() {
        let values: Vec<f64> = (0..500).map(|i| i as f64).collect();
        let line = sparkline(&values, 60);
        assert_eq!(line.chars().count(), 60);
    }

    #[test]
    fn test_sparkline_flat_series() {
        let line = sparkline(&[5.0, 5.0, 5.0], 10);
        assert!(line.chars().all(|c| c == '▁'));
    }
}
