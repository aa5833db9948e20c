//! Exported contract valuation functions
//!
//! # Example (from Python)
//!
//! ```python
//! from datetime import date
//! from storage_simulator_core_rs import contract_value
//!
//! value = contract_value(
//!     injection_dates=[date(2023, 10, 1)],
//!     purchase_prices=[2.0],
//!     withdrawal_dates=[date(2023, 11, 30)],
//!     sale_prices=[3.0],
//!     flow_rate=1000.0,
//!     total_capacity=500_000.0,
//!     monthly_storage_fee=1000.0,
//!     handling_rate=0.0005,
//! )
//! ```

use chrono::NaiveDate;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{valuation_error_to_py, valuation_to_py};
use crate::models::event::EventLog;
use crate::models::schedule::ContractSchedule;
use crate::simulator::{ContractTerms, Simulator};

/// Net contract value as a single float
///
/// Raises ValueError on malformed input (mismatched sequence lengths,
/// empty date lists, duplicate dates, negative prices or fees,
/// non-positive flow rate).
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn contract_value(
    injection_dates: Vec<NaiveDate>,
    purchase_prices: Vec<f64>,
    withdrawal_dates: Vec<NaiveDate>,
    sale_prices: Vec<f64>,
    flow_rate: f64,
    total_capacity: f64,
    monthly_storage_fee: f64,
    handling_rate: f64,
) -> PyResult<f64> {
    crate::simulator::contract_value(
        &injection_dates,
        &purchase_prices,
        &withdrawal_dates,
        &sale_prices,
        flow_rate,
        total_capacity,
        monthly_storage_fee,
        handling_rate,
    )
    .map_err(valuation_error_to_py)
}

/// Full simulation result as a dict
///
/// Returns the value, the per-category cash flow breakdown, the
/// executed/skipped counts, the final stored volume, and the event trail
/// (one dict per event, dates as `datetime.date`).
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub fn simulate_contract(
    py: Python,
    injection_dates: Vec<NaiveDate>,
    purchase_prices: Vec<f64>,
    withdrawal_dates: Vec<NaiveDate>,
    sale_prices: Vec<f64>,
    flow_rate: f64,
    total_capacity: f64,
    monthly_storage_fee: f64,
    handling_rate: f64,
) -> PyResult<Py<PyDict>> {
    let schedule = ContractSchedule::new(
        &injection_dates,
        &purchase_prices,
        &withdrawal_dates,
        &sale_prices,
    )
    .map_err(|e| valuation_error_to_py(e.into()))?;
    let terms = ContractTerms {
        flow_rate,
        total_capacity,
        monthly_storage_fee,
        handling_rate,
    };
    let simulator = Simulator::new(schedule, terms).map_err(valuation_error_to_py)?;

    let mut log = EventLog::new();
    let valuation = simulator.run_with_sink(&mut log);

    valuation_to_py(py, &valuation, log.events())
}
