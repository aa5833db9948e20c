//! Python FFI layer
//!
//! Thin pyo3 wrappers over the valuation engine. All conversions live in
//! `types.rs`; `contract.rs` holds the exported functions.

pub mod contract;
pub mod types;
