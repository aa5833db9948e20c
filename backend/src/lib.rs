//! Storage Contract Simulator - Rust Engine
//!
//! Deterministic valuation of commodity storage contracts: replay a
//! scheduled injection/withdrawal timeline against a capacity-constrained
//! facility and accrue the resulting cash flows.
//!
//! # Architecture
//!
//! - **core**: Calendar span helpers (billing months)
//! - **models**: Domain types (Facility, ContractSchedule, Event)
//! - **simulator**: Contract terms and the valuation engine
//!
//! # Critical Invariants
//!
//! 1. Volumes and money are f64 in consistent units
//! 2. Events replay in strictly ascending date order
//! 3. Input validation happens before any state mutation
//! 4. Observers (event sinks) never affect the returned value
//! 5. FFI boundary is minimal and safe

// Module declarations
pub mod core;
pub mod models;
pub mod simulator;

// Re-exports for convenience
pub use crate::core::calendar::{billing_months, days_between, DAYS_PER_BILLING_MONTH};
pub use models::{
    event::{Event, EventLog, EventSink, NullSink},
    facility::{Facility, FacilityError},
    schedule::{ContractSchedule, EventKind, ScheduleError},
};
pub use simulator::{
    contract_value, CashFlowBreakdown, ContractTerms, Simulator, TermsError, Valuation,
    ValuationError,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn storage_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::contract::contract_value, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::contract::simulate_contract, m)?)?;
    Ok(())
}
