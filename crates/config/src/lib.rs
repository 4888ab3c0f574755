// Configuration loading: user settings and scenario files

pub mod error;
pub mod scenario;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use scenario::Scenario;
pub use settings::Settings;

use std::collections::BTreeMap;

use roicalc_engine::{Assumptions, ParamKey, Parameters};

/// Reject assumption values the model cannot use.
pub fn validate_assumptions(assumptions: &Assumptions) -> ConfigResult<()> {
    for (name, value) in assumptions.fields() {
        if !value.is_finite() {
            return Err(ConfigError::InvalidAssumption {
                name: name.to_string(),
                reason: format!("must be a finite number, got {value}"),
            });
        }
    }
    // Used as a divisor floor.
    if assumptions.error_rate_floor <= 0.0 {
        return Err(ConfigError::InvalidAssumption {
            name: "error_rate_floor".to_string(),
            reason: format!("must be > 0, got {}", assumptions.error_rate_floor),
        });
    }
    Ok(())
}

/// Overlay named values onto `base`.
///
/// Unknown names are an error. Non-finite values are stored as 0.
pub fn overlay_params(
    base: Parameters,
    values: &BTreeMap<String, f64>,
    origin: &str,
) -> ConfigResult<Parameters> {
    let mut params = base;
    for (name, value) in values {
        let key = ParamKey::from_name(name)
            .ok_or_else(|| ConfigError::UnknownParameter(name.clone()))?;
        if !value.is_finite() {
            log::warn!("{origin}: {name} = {value} is not finite, using 0");
        }
        params.set(key, *value);
    }
    Ok(params)
}
