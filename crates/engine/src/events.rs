//! Change notifications for the live-update contract.
//!
//! A `Calculator` emits exactly one `Recalculated` event per input change,
//! after the new result has been computed. Subscribers run synchronously,
//! in subscription order, before the mutating call returns.

use crate::calc::RoiResult;
use crate::params::{ParamKey, Parameters};

/// What triggered a recalculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeCause {
    /// One input field changed.
    Input(ParamKey),
    /// All inputs were replaced (reset or bulk load).
    Replaced,
}

impl ChangeCause {
    pub fn key(&self) -> Option<ParamKey> {
        match self {
            Self::Input(key) => Some(*key),
            Self::Replaced => None,
        }
    }
}

/// Emitted after every recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecalculatedEvent {
    /// Monotonic counter, incremented once per change.
    pub revision: u64,
    pub cause: ChangeCause,
    /// The snapshot the result was computed from.
    pub params: Parameters,
    pub result: RoiResult,
}

/// Callback type for receiving recalculation events.
pub type EventCallback = Box<dyn FnMut(&RecalculatedEvent) + Send>;

/// Handle returned by `Calculator::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Simple event collector for testing.
#[derive(Debug, Default)]
pub struct EventCollector {
    events: Vec<RecalculatedEvent>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: RecalculatedEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[RecalculatedEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&RecalculatedEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Events caused by a change to `key`.
    pub fn for_key(&self, key: ParamKey) -> Vec<&RecalculatedEvent> {
        self.events
            .iter()
            .filter(|e| e.cause.key() == Some(key))
            .collect()
    }
}
