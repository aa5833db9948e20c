//! Contract Simulator - deterministic valuation engine
//!
//! Replays the delivery schedule in date order against the facility state
//! and accrues cash flow per category.
//!
//! See `engine.rs` for the replay loop.

pub mod engine;
pub mod terms;

// Re-export main types for convenience
pub use engine::{contract_value, CashFlowBreakdown, Simulator, Valuation, ValuationError};
pub use terms::{ContractTerms, TermsError};
