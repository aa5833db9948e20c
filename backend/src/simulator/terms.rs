//! Contract terms
//!
//! Immutable commercial parameters of a storage contract. Volumes and
//! monetary amounts are f64 in consistent units.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by terms validation
#[derive(Debug, Error, PartialEq)]
pub enum TermsError {
    #[error("flow rate must be positive, got {flow_rate}")]
    NonPositiveFlowRate { flow_rate: f64 },

    #[error("total capacity must be non-negative, got {capacity}")]
    NegativeCapacity { capacity: f64 },

    #[error("monthly storage fee must be non-negative, got {fee}")]
    NegativeStorageFee { fee: f64 },

    #[error("handling rate must be non-negative, got {rate}")]
    NegativeHandlingRate { rate: f64 },
}

/// Commercial parameters of a storage contract
///
/// # Example
/// ```
/// use storage_simulator_core_rs::ContractTerms;
///
/// let terms = ContractTerms {
///     flow_rate: 1000.0,
///     total_capacity: 500_000.0,
///     monthly_storage_fee: 1000.0,
///     handling_rate: 0.0005,
/// };
/// assert!(terms.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTerms {
    /// Fixed quantity moved per injection or withdrawal event (volume units)
    pub flow_rate: f64,

    /// Maximum quantity the facility can hold (volume units)
    pub total_capacity: f64,

    /// Storage fee charged per 30-day billing month over the contract span
    pub monthly_storage_fee: f64,

    /// Per-unit handling fee charged on both injections and withdrawals
    /// (e.g. 0.0005 = 5 bps of a unit-priced commodity per unit moved)
    pub handling_rate: f64,
}

impl ContractTerms {
    /// Check the terms before any simulation state is created
    pub fn validate(&self) -> Result<(), TermsError> {
        if self.flow_rate <= 0.0 {
            return Err(TermsError::NonPositiveFlowRate {
                flow_rate: self.flow_rate,
            });
        }
        if self.total_capacity < 0.0 {
            return Err(TermsError::NegativeCapacity {
                capacity: self.total_capacity,
            });
        }
        if self.monthly_storage_fee < 0.0 {
            return Err(TermsError::NegativeStorageFee {
                fee: self.monthly_storage_fee,
            });
        }
        if self.handling_rate < 0.0 {
            return Err(TermsError::NegativeHandlingRate {
                rate: self.handling_rate,
            });
        }
        Ok(())
    }
}
