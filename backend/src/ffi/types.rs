//! Conversions between engine types and Python objects

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::models::event::Event;
use crate::simulator::engine::Valuation;
use crate::simulator::ValuationError;

/// Map a validation error to a Python ValueError
pub fn valuation_error_to_py(err: ValuationError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Convert one event to a Python dict
pub fn event_to_py(py: Python, event: &Event) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("type", event.event_type())?;
    dict.set_item("date", event.date())?;

    match event {
        Event::Injected {
            price, volume, cost, fee, ..
        } => {
            dict.set_item("price", price)?;
            dict.set_item("volume", volume)?;
            dict.set_item("cost", cost)?;
            dict.set_item("fee", fee)?;
        }
        Event::InjectionSkipped {
            requested, stored, headroom, ..
        } => {
            dict.set_item("requested", requested)?;
            dict.set_item("stored", stored)?;
            dict.set_item("headroom", headroom)?;
        }
        Event::Withdrawn {
            price, volume, revenue, fee, ..
        } => {
            dict.set_item("price", price)?;
            dict.set_item("volume", volume)?;
            dict.set_item("revenue", revenue)?;
            dict.set_item("fee", fee)?;
        }
        Event::WithdrawalSkipped {
            requested, stored, ..
        } => {
            dict.set_item("requested", requested)?;
            dict.set_item("stored", stored)?;
        }
        Event::StorageCharged {
            first_injection,
            last_withdrawal,
            months,
            amount,
        } => {
            dict.set_item("first_injection", first_injection)?;
            dict.set_item("last_withdrawal", last_withdrawal)?;
            dict.set_item("months", months)?;
            dict.set_item("amount", amount)?;
        }
    }

    Ok(dict.into())
}

/// Convert a valuation plus its event trail to a Python dict
pub fn valuation_to_py(py: Python, valuation: &Valuation, events: &[Event]) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("value", valuation.value())?;
    dict.set_item("purchase_cost", valuation.breakdown.purchase_cost)?;
    dict.set_item("injection_fees", valuation.breakdown.injection_fees)?;
    dict.set_item("sale_revenue", valuation.breakdown.sale_revenue)?;
    dict.set_item("withdrawal_fees", valuation.breakdown.withdrawal_fees)?;
    dict.set_item("storage_cost", valuation.breakdown.storage_cost)?;
    dict.set_item("executed_injections", valuation.executed_injections)?;
    dict.set_item("skipped_injections", valuation.skipped_injections)?;
    dict.set_item("executed_withdrawals", valuation.executed_withdrawals)?;
    dict.set_item("skipped_withdrawals", valuation.skipped_withdrawals)?;
    dict.set_item("final_volume", valuation.final_volume)?;

    let event_dicts = PyList::empty_bound(py);
    for event in events {
        event_dicts.append(event_to_py(py, event)?)?;
    }
    dict.set_item("events", event_dicts)?;

    Ok(dict.into())
}
