//! Calculator: owns the mutable parameter store and drives recomputation.
//!
//! Every input change reads a fresh snapshot from the store, computes the
//! result from scratch, and notifies subscribers before returning.

use crate::assumptions::Assumptions;
use crate::calc::{compute_with, RoiResult};
use crate::events::{ChangeCause, EventCallback, RecalculatedEvent, SubscriptionId};
use crate::params::{ParamKey, Parameters};
use crate::store::ParameterStore;

pub struct Calculator {
    store: ParameterStore,
    defaults: Parameters,
    assumptions: Assumptions,
    params: Parameters,
    result: RoiResult,
    revision: u64,
    subscribers: Vec<(SubscriptionId, EventCallback)>,
    next_subscription: u64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Parameters::default(), Assumptions::default())
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("params", &self.params)
            .field("assumptions", &self.assumptions)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Calculator {
    /// Create a calculator whose inputs start at `defaults`.
    ///
    /// The initial result is computed immediately (revision 0) without
    /// notifying anyone.
    pub fn new(defaults: Parameters, assumptions: Assumptions) -> Self {
        let store = ParameterStore::from_params(&defaults);
        let params = store.read();
        let result = compute_with(&params, &assumptions);
        Self {
            store,
            defaults,
            assumptions,
            params,
            result,
            revision: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn result(&self) -> &RoiResult {
        &self.result
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Raw text currently held for `key`.
    pub fn input(&self, key: ParamKey) -> Option<&str> {
        self.store.input(key)
    }

    /// Register a callback for every subsequent recalculation.
    pub fn subscribe(&mut self, callback: EventCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Replace the raw text of one input field and recalculate.
    pub fn set_input(&mut self, key: ParamKey, raw: &str) -> &RoiResult {
        self.store.set_input(key, raw);
        self.recalculate(ChangeCause::Input(key))
    }

    /// Replace one input with a numeric value and recalculate.
    pub fn set_value(&mut self, key: ParamKey, value: f64) -> &RoiResult {
        self.store.set_value(key, value);
        self.recalculate(ChangeCause::Input(key))
    }

    /// Replace every input and recalculate once.
    pub fn load(&mut self, params: &Parameters) -> &RoiResult {
        self.store = ParameterStore::from_params(params);
        self.recalculate(ChangeCause::Replaced)
    }

    /// Restore the inputs the calculator was created with.
    pub fn reset(&mut self) -> &RoiResult {
        let defaults = self.defaults;
        self.load(&defaults)
    }

    fn recalculate(&mut self, cause: ChangeCause) -> &RoiResult {
        self.params = self.store.read();
        self.result = compute_with(&self.params, &self.assumptions);
        self.revision += 1;

        log::debug!(
            "recalculated revision {} ({:?}): savings={} roi={}",
            self.revision,
            cause,
            self.result.roi.annual_savings,
            self.result.roi.roi_percent
        );

        if !self.subscribers.is_empty() {
            let event = RecalculatedEvent {
                revision: self.revision,
                cause,
                params: self.params,
                result: self.result,
            };
            for (_, callback) in self.subscribers.iter_mut() {
                callback(&event);
            }
        }

        &self.result
    }
}
