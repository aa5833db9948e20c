//! Contract delivery schedule
//!
//! The schedule pairs injection dates with purchase prices and withdrawal
//! dates with sale prices. Callers supply parallel sequences (same index,
//! same event); construction validates them and builds per-kind date→price
//! maps so replay looks prices up associatively instead of scanning the
//! input lists.
//!
//! # Critical Invariants
//!
//! 1. Both legs are non-empty (the storage billing span dereferences the
//!    first injection and last withdrawal dates)
//! 2. Dates are unique within a leg
//! 3. Prices are non-negative

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use thiserror::Error;

/// Direction of a scheduled delivery event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Volume purchased and added to storage
    Injection,
    /// Volume removed from storage and sold
    Withdrawal,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Injection => write!(f, "injection"),
            EventKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// Errors that can occur while building a schedule
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("{kind} leg has {dates} date(s) but {prices} price(s)")]
    LengthMismatch {
        kind: EventKind,
        dates: usize,
        prices: usize,
    },

    #[error("{kind} leg must contain at least one date")]
    EmptyLeg { kind: EventKind },

    #[error("duplicate {kind} date {date}")]
    DuplicateDate { kind: EventKind, date: NaiveDate },

    #[error("negative {kind} price {price} on {date}")]
    NegativePrice {
        kind: EventKind,
        date: NaiveDate,
        price: f64,
    },
}

/// Validated injection/withdrawal schedule with per-kind price lookups
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use storage_simulator_core_rs::ContractSchedule;
///
/// let inject = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
/// let withdraw = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
///
/// let schedule = ContractSchedule::new(&[inject], &[2.0], &[withdraw], &[3.0]).unwrap();
/// assert_eq!(schedule.purchase_price(inject), Some(2.0));
/// assert_eq!(schedule.sale_price(withdraw), Some(3.0));
/// assert_eq!(schedule.timeline(), vec![inject, withdraw]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContractSchedule {
    /// Injection date → purchase price
    injections: BTreeMap<NaiveDate, f64>,

    /// Withdrawal date → sale price
    withdrawals: BTreeMap<NaiveDate, f64>,
}

impl ContractSchedule {
    /// Build a schedule from parallel date/price sequences
    ///
    /// Fails fast on malformed input; no partially built schedule escapes.
    pub fn new(
        injection_dates: &[NaiveDate],
        purchase_prices: &[f64],
        withdrawal_dates: &[NaiveDate],
        sale_prices: &[f64],
    ) -> Result<Self, ScheduleError> {
        let injections = Self::build_leg(EventKind::Injection, injection_dates, purchase_prices)?;
        let withdrawals = Self::build_leg(EventKind::Withdrawal, withdrawal_dates, sale_prices)?;
        Ok(Self {
            injections,
            withdrawals,
        })
    }

    fn build_leg(
        kind: EventKind,
        dates: &[NaiveDate],
        prices: &[f64],
    ) -> Result<BTreeMap<NaiveDate, f64>, ScheduleError> {
        if dates.len() != prices.len() {
            return Err(ScheduleError::LengthMismatch {
                kind,
                dates: dates.len(),
                prices: prices.len(),
            });
        }
        if dates.is_empty() {
            return Err(ScheduleError::EmptyLeg { kind });
        }

        let mut leg = BTreeMap::new();
        for (&date, &price) in dates.iter().zip(prices) {
            if price < 0.0 {
                return Err(ScheduleError::NegativePrice { kind, date, price });
            }
            if leg.insert(date, price).is_some() {
                return Err(ScheduleError::DuplicateDate { kind, date });
            }
        }
        Ok(leg)
    }

    /// Sorted, deduplicated union of all injection and withdrawal dates
    pub fn timeline(&self) -> Vec<NaiveDate> {
        self.injections
            .keys()
            .chain(self.withdrawals.keys())
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Purchase price for an injection date, if the date is scheduled
    pub fn purchase_price(&self, date: NaiveDate) -> Option<f64> {
        self.injections.get(&date).copied()
    }

    /// Sale price for a withdrawal date, if the date is scheduled
    pub fn sale_price(&self, date: NaiveDate) -> Option<f64> {
        self.withdrawals.get(&date).copied()
    }

    /// Earliest scheduled injection date
    pub fn first_injection(&self) -> NaiveDate {
        self.injections
            .keys()
            .next()
            .copied()
            .expect("injection leg is never empty")
    }

    /// Latest scheduled withdrawal date
    pub fn last_withdrawal(&self) -> NaiveDate {
        self.withdrawals
            .keys()
            .next_back()
            .copied()
            .expect("withdrawal leg is never empty")
    }

    /// Number of scheduled injections
    pub fn num_injections(&self) -> usize {
        self.injections.len()
    }

    /// Number of scheduled withdrawals
    pub fn num_withdrawals(&self) -> usize {
        self.withdrawals.len()
    }
}
