//! Valuation engine
//!
//! Replays the contract schedule against the facility state in one
//! deterministic pass:
//!
//! ```text
//! 1. Build the timeline (sorted union of injection and withdrawal dates)
//! 2. For each date, in order:
//!    - injection date: inject at the full flow rate or skip
//!    - withdrawal date: withdraw at the full flow rate or skip
//!    (a date scheduled for both is treated as an injection date only)
//! 3. Assess the storage charge over the nominal contract span
//! 4. Return the valuation
//! ```
//!
//! Skipped events are not failures: they contribute no cash flow and the
//! replay continues. The storage charge depends only on the scheduled
//! first-injection/last-withdrawal span, not on which events executed.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use storage_simulator_core_rs::{ContractSchedule, ContractTerms, Simulator};
//!
//! let inject = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
//! let withdraw = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();
//! let schedule = ContractSchedule::new(&[inject], &[2.0], &[withdraw], &[3.0]).unwrap();
//! let terms = ContractTerms {
//!     flow_rate: 1000.0,
//!     total_capacity: 500_000.0,
//!     monthly_storage_fee: 1000.0,
//!     handling_rate: 0.0005,
//! };
//!
//! let valuation = Simulator::new(schedule, terms).unwrap().run();
//! assert_eq!(valuation.value(), -1001.0);
//! ```

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::calendar::billing_months;
use crate::models::event::{Event, EventSink, NullSink};
use crate::models::facility::Facility;
use crate::models::schedule::{ContractSchedule, ScheduleError};
use crate::simulator::terms::{ContractTerms, TermsError};

// ============================================================================
// Errors
// ============================================================================

/// Validation errors raised before any simulation state is mutated
#[derive(Debug, Error, PartialEq)]
pub enum ValuationError {
    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("invalid terms: {0}")]
    Terms(#[from] TermsError),
}

// ============================================================================
// Results
// ============================================================================

/// Signed cash flow per category, accrued over one run
///
/// Costs are stored as positive magnitudes; [`CashFlowBreakdown::net`]
/// applies the signs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CashFlowBreakdown {
    /// Commodity purchase cost across executed injections
    pub purchase_cost: f64,

    /// Handling fees across executed injections
    pub injection_fees: f64,

    /// Sale revenue across executed withdrawals
    pub sale_revenue: f64,

    /// Handling fees across executed withdrawals
    pub withdrawal_fees: f64,

    /// Storage charge over the nominal contract span
    pub storage_cost: f64,
}

impl CashFlowBreakdown {
    /// Net contract value: revenue less purchases, fees, and storage
    pub fn net(&self) -> f64 {
        self.sale_revenue
            - self.withdrawal_fees
            - self.purchase_cost
            - self.injection_fees
            - self.storage_cost
    }
}

/// Result of one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    /// Cash flow per category
    pub breakdown: CashFlowBreakdown,

    /// Injections executed at the full flow rate
    pub executed_injections: usize,

    /// Injections skipped for lack of storage space
    pub skipped_injections: usize,

    /// Withdrawals executed at the full flow rate
    pub executed_withdrawals: usize,

    /// Withdrawals skipped for lack of stored volume
    pub skipped_withdrawals: usize,

    /// Volume left in the facility after the last event
    pub final_volume: f64,
}

impl Valuation {
    /// Net contract value; positive means net profit
    pub fn value(&self) -> f64 {
        self.breakdown.net()
    }
}

// ============================================================================
// Simulator
// ============================================================================

/// Deterministic storage contract simulator
///
/// Owns the validated schedule and terms; each [`Simulator::run`] creates
/// fresh facility state, replays the timeline once, and discards the state.
/// Runs are independent and side-effect free.
pub struct Simulator {
    schedule: ContractSchedule,
    terms: ContractTerms,
}

impl Simulator {
    /// Create a simulator, validating the terms first
    ///
    /// Schedule validation happens when the [`ContractSchedule`] is built;
    /// nothing is simulated until both have passed.
    pub fn new(schedule: ContractSchedule, terms: ContractTerms) -> Result<Self, ValuationError> {
        terms.validate()?;
        Ok(Self { schedule, terms })
    }

    /// The schedule this simulator replays
    pub fn schedule(&self) -> &ContractSchedule {
        &self.schedule
    }

    /// The contract terms in force
    pub fn terms(&self) -> &ContractTerms {
        &self.terms
    }

    /// Run the simulation, discarding events
    pub fn run(&self) -> Valuation {
        self.run_with_sink(&mut NullSink)
    }

    /// Run the simulation, reporting every event to `sink`
    ///
    /// The sink observes the run; it cannot change the returned valuation.
    pub fn run_with_sink(&self, sink: &mut dyn EventSink) -> Valuation {
        let rate = self.terms.flow_rate;
        let mut facility = Facility::new(self.terms.total_capacity);
        let mut breakdown = CashFlowBreakdown::default();
        let mut executed_injections = 0;
        let mut skipped_injections = 0;
        let mut executed_withdrawals = 0;
        let mut skipped_withdrawals = 0;

        for date in self.schedule.timeline() {
            // A date scheduled for both kinds is visited once, as an
            // injection; the withdrawal branch is not evaluated that day.
            if let Some(price) = self.schedule.purchase_price(date) {
                match facility.try_inject(rate) {
                    Ok(()) => {
                        let cost = rate * price;
                        let fee = rate * self.terms.handling_rate;
                        breakdown.purchase_cost += cost;
                        breakdown.injection_fees += fee;
                        executed_injections += 1;
                        sink.record(&Event::Injected {
                            date,
                            price,
                            volume: rate,
                            cost,
                            fee,
                        });
                    }
                    Err(_) => {
                        skipped_injections += 1;
                        sink.record(&Event::InjectionSkipped {
                            date,
                            requested: rate,
                            stored: facility.stored_volume(),
                            headroom: facility.headroom(),
                        });
                    }
                }
            } else if let Some(price) = self.schedule.sale_price(date) {
                match facility.try_withdraw(rate) {
                    Ok(()) => {
                        let revenue = rate * price;
                        let fee = rate * self.terms.handling_rate;
                        breakdown.sale_revenue += revenue;
                        breakdown.withdrawal_fees += fee;
                        executed_withdrawals += 1;
                        sink.record(&Event::Withdrawn {
                            date,
                            price,
                            volume: rate,
                            revenue,
                            fee,
                        });
                    }
                    Err(_) => {
                        skipped_withdrawals += 1;
                        sink.record(&Event::WithdrawalSkipped {
                            date,
                            requested: rate,
                            stored: facility.stored_volume(),
                        });
                    }
                }
            }
            // The timeline is exactly the union of both legs, so one of the
            // branches above always matches.
        }

        // Storage is billed over the nominal span between the first
        // scheduled injection and the last scheduled withdrawal, whether or
        // not those events executed.
        let first_injection = self.schedule.first_injection();
        let last_withdrawal = self.schedule.last_withdrawal();
        let months = billing_months(first_injection, last_withdrawal);
        let amount = months as f64 * self.terms.monthly_storage_fee;
        breakdown.storage_cost = amount;
        sink.record(&Event::StorageCharged {
            first_injection,
            last_withdrawal,
            months,
            amount,
        });

        Valuation {
            breakdown,
            executed_injections,
            skipped_injections,
            executed_withdrawals,
            skipped_withdrawals,
            final_volume: facility.stored_volume(),
        }
    }
}

// ============================================================================
// One-call API
// ============================================================================

/// Value a storage contract in a single call
///
/// `injection_dates`/`purchase_prices` and `withdrawal_dates`/`sale_prices`
/// are parallel sequences (same index, same event). Returns the net contract
/// value; positive means net profit.
///
/// # Errors
///
/// Fails fast with a [`ValuationError`] on malformed input (mismatched
/// parallel-sequence lengths, empty date lists, duplicate dates within a
/// kind, negative prices, non-positive flow rate, negative fees). Events
/// that cannot execute at replay time are skips, never errors.
#[allow(clippy::too_many_arguments)]
pub fn contract_value(
    injection_dates: &[NaiveDate],
    purchase_prices: &[f64],
    withdrawal_dates: &[NaiveDate],
    sale_prices: &[f64],
    flow_rate: f64,
    total_capacity: f64,
    monthly_storage_fee: f64,
    handling_rate: f64,
) -> Result<f64, ValuationError> {
    let schedule = ContractSchedule::new(
        injection_dates,
        purchase_prices,
        withdrawal_dates,
        sale_prices,
    )?;
    let terms = ContractTerms {
        flow_rate,
        total_capacity,
        monthly_storage_fee,
        handling_rate,
    };
    let simulator = Simulator::new(schedule, terms)?;
    Ok(simulator.run().value())
}
