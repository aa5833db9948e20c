//! Event records for simulation narration and auditing.
//!
//! Every significant action during replay is reported as an `Event`:
//! executed injections and withdrawals, skipped events, and the final
//! storage charge. Events enable:
//! - Narration (the `Display` impl renders the human-readable messages)
//! - Auditing (verify which scheduled events actually executed)
//! - Analysis (cross-check cash flow against the per-event amounts)
//!
//! Events flow through an [`EventSink`] injected into the simulator, so the
//! valuation core stays pure: sinks observe the run but cannot change the
//! returned value.

use chrono::NaiveDate;

/// Simulation event capturing one replay action.
///
/// All events carry the calendar date they pertain to. Events are reported
/// in the order they occur, which is ascending date order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Injection executed: volume purchased and stored
    Injected {
        date: NaiveDate,
        price: f64,
        volume: f64,
        cost: f64,
        fee: f64,
    },

    /// Injection skipped: a full injection would exceed capacity
    InjectionSkipped {
        date: NaiveDate,
        requested: f64,
        stored: f64,
        headroom: f64,
    },

    /// Withdrawal executed: volume removed from storage and sold
    Withdrawn {
        date: NaiveDate,
        price: f64,
        volume: f64,
        revenue: f64,
        fee: f64,
    },

    /// Withdrawal skipped: stored volume does not cover a full withdrawal
    WithdrawalSkipped {
        date: NaiveDate,
        requested: f64,
        stored: f64,
    },

    /// Storage charge assessed over the nominal contract span
    StorageCharged {
        first_injection: NaiveDate,
        last_withdrawal: NaiveDate,
        months: i64,
        amount: f64,
    },
}

impl Event {
    /// Calendar date this event pertains to
    ///
    /// The storage charge is dated at the end of the billed span.
    pub fn date(&self) -> NaiveDate {
        match self {
            Event::Injected { date, .. } => *date,
            Event::InjectionSkipped { date, .. } => *date,
            Event::Withdrawn { date, .. } => *date,
            Event::WithdrawalSkipped { date, .. } => *date,
            Event::StorageCharged {
                last_withdrawal, ..
            } => *last_withdrawal,
        }
    }

    /// Short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Injected { .. } => "Injected",
            Event::InjectionSkipped { .. } => "InjectionSkipped",
            Event::Withdrawn { .. } => "Withdrawn",
            Event::WithdrawalSkipped { .. } => "WithdrawalSkipped",
            Event::StorageCharged { .. } => "StorageCharged",
        }
    }

    /// Whether this event records a skipped delivery
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Event::InjectionSkipped { .. } | Event::WithdrawalSkipped { .. }
        )
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Injected { date, price, .. } => {
                write!(f, "Injected on {} at a price of {}", date, price)
            }
            Event::InjectionSkipped { date, .. } => write!(
                f,
                "Injection is not possible on {} due to insufficient storage space",
                date
            ),
            Event::Withdrawn { date, price, .. } => {
                write!(f, "Extracted on {} at a price of {}", date, price)
            }
            Event::WithdrawalSkipped { date, .. } => write!(
                f,
                "Extraction is not possible on {} due to insufficient stored volume",
                date
            ),
            Event::StorageCharged { months, amount, .. } => {
                write!(f, "Storage charged for {} month(s): {}", months, amount)
            }
        }
    }
}

/// Observer capability for simulation events.
///
/// The simulator reports every event to the sink it is given. Sinks must
/// not influence the valuation; they only observe.
pub trait EventSink {
    /// Receive one event
    fn record(&mut self, event: &Event);
}

/// Sink that discards every event
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &Event) {}
}

/// Event log for storing and querying simulation events.
///
/// A simple wrapper around `Vec<Event>` with convenience queries. Also
/// usable directly as an [`EventSink`].
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific date
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date() == date).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn record(&mut self, event: &Event) {
        self.log(event.clone());
    }
}
