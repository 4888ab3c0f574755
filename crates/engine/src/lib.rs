//! `roicalc-engine`: parameter model and cost comparison for automating
//! invoice processing.
//!
//! Pure engine crate: no IO, no CLI. The `Calculator` is the stateful
//! binder; everything below it is a function of its inputs.

pub mod assumptions;
pub mod calc;
pub mod calculator;
pub mod events;
pub mod format;
pub mod params;
pub mod store;

pub use assumptions::Assumptions;
pub use calc::{compute, compute_with, AiCosts, CurrentCosts, DerivedMetrics, RoiMetrics, RoiResult};
pub use calculator::Calculator;
pub use events::{ChangeCause, EventCallback, RecalculatedEvent, SubscriptionId};
pub use format::{CurrencyFormat, ResultDisplay};
pub use params::{ParamKey, Parameters};
pub use store::{read_params, ParameterSource, ParameterStore};
