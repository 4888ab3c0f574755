use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use roicalc_engine::{Assumptions, Parameters};

use crate::error::{ConfigError, ConfigResult};
use crate::{overlay_params, validate_assumptions};

/// A named set of parameter values, loaded from TOML.
///
/// ```toml
/// name = "High volume"
///
/// [params]
/// monthlyVolume = 5000
/// hourlyCost = 55
///
/// [assumptions]
/// ai_processing_seconds = 20
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
    #[serde(default)]
    pub assumptions: Option<Assumptions>,
}

impl Scenario {
    pub fn from_toml(input: &str) -> ConfigResult<Self> {
        Self::parse(input, "scenario")
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    fn parse(input: &str, origin: &str) -> ConfigResult<Self> {
        let scenario: Scenario = toml::from_str(input).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            message: e.message().to_string(),
        })?;
        scenario.validate(origin)?;
        Ok(scenario)
    }

    pub fn validate(&self, origin: &str) -> ConfigResult<()> {
        if let Some(assumptions) = &self.assumptions {
            validate_assumptions(assumptions)?;
        }
        overlay_params(Parameters::default(), &self.params, origin)?;
        Ok(())
    }

    /// Apply this scenario's values on top of `base`.
    pub fn apply(&self, base: Parameters) -> ConfigResult<Parameters> {
        let origin = self.name.as_deref().unwrap_or("scenario");
        overlay_params(base, &self.params, origin)
    }

    /// This scenario's assumptions, or `fallback` when it has none.
    pub fn assumptions_or(&self, fallback: Assumptions) -> Assumptions {
        self.assumptions.unwrap_or(fallback)
    }
}
