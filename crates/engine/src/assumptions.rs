//! Fixed modelling assumptions for the AI cost projection.

use serde::{Deserialize, Serialize};

/// Seconds of labor per invoice once processing is automated.
pub const DEFAULT_AI_PROCESSING_SECONDS: f64 = 15.0;

/// Residual error rate after automation, in percent.
pub const DEFAULT_AI_ERROR_RATE: f64 = 0.1;

/// Audit cost under automation as a fraction of the current audit cost.
pub const DEFAULT_AI_AUDIT_FACTOR: f64 = 0.1;

/// Lower bound on the manual error rate when it is used as a divisor.
pub const DEFAULT_ERROR_RATE_FLOOR: f64 = 0.1;

/// Assumption constants used by [`crate::calc::compute_with`].
///
/// Defaults match the published model. Configuration and tests may
/// override individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Assumptions {
    pub ai_processing_seconds: f64,
    pub ai_error_rate: f64,
    pub ai_audit_factor: f64,
    pub error_rate_floor: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            ai_processing_seconds: DEFAULT_AI_PROCESSING_SECONDS,
            ai_error_rate: DEFAULT_AI_ERROR_RATE,
            ai_audit_factor: DEFAULT_AI_AUDIT_FACTOR,
            error_rate_floor: DEFAULT_ERROR_RATE_FLOOR,
        }
    }
}

impl Assumptions {
    /// Fields by name, for validation and listings.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("ai_processing_seconds", self.ai_processing_seconds),
            ("ai_error_rate", self.ai_error_rate),
            ("ai_audit_factor", self.ai_audit_factor),
            ("error_rate_floor", self.error_rate_floor),
        ]
    }
}
