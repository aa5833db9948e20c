//! Storage facility model
//!
//! Represents the physical storage the contract operates against.
//! The facility has:
//! - Current stored volume (never negative)
//! - Total capacity (stored volume never exceeds it)
//!
//! Transitions are atomic at the full requested quantity: an injection or
//! withdrawal either applies in full or leaves the facility untouched.

use thiserror::Error;

/// Errors that can occur during facility operations
#[derive(Debug, Error, PartialEq)]
pub enum FacilityError {
    #[error("Insufficient storage space: requested {requested}, headroom {headroom}")]
    CapacityExceeded { requested: f64, headroom: f64 },

    #[error("Insufficient stored volume: requested {requested}, stored {stored}")]
    InsufficientVolume { requested: f64, stored: f64 },
}

/// Mutable storage state for one simulation run
///
/// # Invariant
///
/// `0 <= stored_volume <= total_capacity` holds after every operation.
///
/// # Example
/// ```
/// use storage_simulator_core_rs::Facility;
///
/// let mut facility = Facility::new(1500.0);
/// facility.try_inject(1000.0).unwrap();
/// assert_eq!(facility.stored_volume(), 1000.0);
///
/// // A second full injection would exceed capacity and changes nothing.
/// assert!(facility.try_inject(1000.0).is_err());
/// assert_eq!(facility.stored_volume(), 1000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    /// Current stored quantity (volume units)
    stored_volume: f64,

    /// Maximum quantity the facility can hold (volume units)
    total_capacity: f64,
}

impl Facility {
    /// Create an empty facility with the given total capacity
    pub fn new(total_capacity: f64) -> Self {
        Self {
            stored_volume: 0.0,
            total_capacity,
        }
    }

    /// Current stored quantity
    pub fn stored_volume(&self) -> f64 {
        self.stored_volume
    }

    /// Total capacity
    pub fn total_capacity(&self) -> f64 {
        self.total_capacity
    }

    /// Remaining space before the facility is full
    pub fn headroom(&self) -> f64 {
        self.total_capacity - self.stored_volume
    }

    /// Whether a full injection of `quantity` fits within capacity
    pub fn can_inject(&self, quantity: f64) -> bool {
        self.stored_volume + quantity <= self.total_capacity
    }

    /// Whether a full withdrawal of `quantity` is covered by stored volume
    pub fn can_withdraw(&self, quantity: f64) -> bool {
        self.stored_volume >= quantity
    }

    /// Inject `quantity` in full, or fail without changing state
    pub fn try_inject(&mut self, quantity: f64) -> Result<(), FacilityError> {
        if !self.can_inject(quantity) {
            return Err(FacilityError::CapacityExceeded {
                requested: quantity,
                headroom: self.headroom(),
            });
        }
        self.stored_volume += quantity;
        Ok(())
    }

    /// Withdraw `quantity` in full, or fail without changing state
    pub fn try_withdraw(&mut self, quantity: f64) -> Result<(), FacilityError> {
        if !self.can_withdraw(quantity) {
            return Err(FacilityError::InsufficientVolume {
                requested: quantity,
                stored: self.stored_volume,
            });
        }
        self.stored_volume -= quantity;
        Ok(())
    }
}
