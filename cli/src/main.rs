//! Command-line runner for the storage contract simulator.
//!
//! Usage:
//!
//! ```text
//! storage-sim [scenario.json]
//! ```
//!
//! With no argument, a built-in demo scenario is evaluated. A scenario file
//! is a JSON object with the four parallel date/price sequences and the
//! contract terms:
//!
//! ```json
//! {
//!     "injection_dates": ["2023-10-01"],
//!     "purchase_prices": [2.0],
//!     "withdrawal_dates": ["2024-04-01"],
//!     "sale_prices": [3.0],
//!     "flow_rate": 1000.0,
//!     "total_capacity": 500000.0,
//!     "monthly_storage_fee": 1000.0,
//!     "handling_rate": 0.0005
//! }
//! ```

use std::env;
use std::fs;
use std::process;

use chrono::NaiveDate;
use serde::Deserialize;
use storage_simulator_core_rs::{ContractSchedule, ContractTerms, EventLog, Simulator};

/// Scenario file contents
#[derive(Debug, Deserialize)]
struct Scenario {
    injection_dates: Vec<NaiveDate>,
    purchase_prices: Vec<f64>,
    withdrawal_dates: Vec<NaiveDate>,
    sale_prices: Vec<f64>,
    #[serde(flatten)]
    terms: ContractTerms,
}

const DEMO_SCENARIO: &str = r#"{
    "injection_dates": ["2023-10-01", "2023-11-01"],
    "purchase_prices": [2.0, 2.2],
    "withdrawal_dates": ["2024-04-01", "2024-06-01"],
    "sale_prices": [3.0, 3.5],
    "flow_rate": 1000.0,
    "total_capacity": 500000.0,
    "monthly_storage_fee": 1000.0,
    "handling_rate": 0.0005
}"#;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let raw = match args.get(1) {
        Some(path) => fs::read_to_string(path)?,
        None => DEMO_SCENARIO.to_string(),
    };

    let scenario: Scenario = serde_json::from_str(&raw)?;
    let schedule = ContractSchedule::new(
        &scenario.injection_dates,
        &scenario.purchase_prices,
        &scenario.withdrawal_dates,
        &scenario.sale_prices,
    )?;
    let simulator = Simulator::new(schedule, scenario.terms)?;

    let mut log = EventLog::new();
    let valuation = simulator.run_with_sink(&mut log);

    for event in log.events() {
        println!("{event}");
    }
    println!(
        "The value of the storage contract is: {:.2}",
        valuation.value()
    );

    Ok(())
}
