// Application settings
// Loaded from ~/.config/roicalc/settings.json

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use roicalc_engine::{Assumptions, CurrencyFormat, Parameters};

use crate::error::{ConfigError, ConfigResult};
use crate::{overlay_params, validate_assumptions};

const DEFAULT_SETTINGS: &str = r#"{
    // Starting values for the calculator inputs.
    // Any of: monthlyVolume, manualMinutes, hourlyCost, errorRate,
    // averageInvoiceValue, auditCost, aiPlatformCost, aiImplementationCost
    "defaults": {
        "monthlyVolume": 1000,
        "manualMinutes": 10,
        "hourlyCost": 40
    },

    // Model assumptions for the automated process
    "assumptions": {
        "ai_processing_seconds": 15,
        "ai_error_rate": 0.1,
        "ai_audit_factor": 0.1,
        "error_rate_floor": 0.1
    },

    // Currency shown in results
    "display": {
        "currency_symbol": "€",
        "currency_code": "EUR"
    }
}
"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Parameter name -> starting value. Overlays the built-in defaults.
    pub defaults: BTreeMap<String, f64>,

    pub assumptions: Assumptions,

    pub display: CurrencyFormat,
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roicalc");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}");
                log::warn!("using default settings");
                Self::default()
            }
        }
    }

    /// Load and validate a specific settings file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents, &path.display().to_string())
    }

    /// Parse settings JSON. Lines starting with `//` are comments.
    pub fn from_json(contents: &str, origin: &str) -> ConfigResult<Self> {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        let settings: Settings =
            serde_json::from_str(&cleaned).map_err(|e| ConfigError::Parse {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;
        settings.validate(origin)?;
        Ok(settings)
    }

    pub fn validate(&self, origin: &str) -> ConfigResult<()> {
        validate_assumptions(&self.assumptions)?;
        overlay_params(Parameters::default(), &self.defaults, origin)?;
        Ok(())
    }

    /// Built-in defaults with this file's `defaults` applied.
    pub fn default_params(&self) -> ConfigResult<Parameters> {
        overlay_params(Parameters::default(), &self.defaults, "settings")
    }

    /// Save current settings to `path`
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            origin: path.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(path, json).map_err(io_err)
    }

    /// Write the commented default file to `path` unless one exists.
    /// Returns false if a file was already there.
    pub fn init_at(path: &Path) -> ConfigResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, DEFAULT_SETTINGS).map_err(io_err)?;
        Ok(true)
    }

    /// Get the config file path for display
    pub fn config_path_display() -> String {
        Self::config_path().to_string_lossy().to_string()
    }
}
