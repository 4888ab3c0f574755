//! Parameter model for the cost comparison.
//!
//! Exactly eight named parameters exist. `ParamKey` is the closed set of
//! names and `Parameters` is an immutable snapshot of their values, taken
//! once per computation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight user-adjustable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamKey {
    MonthlyVolume,
    ManualMinutes,
    HourlyCost,
    ErrorRate,
    AverageInvoiceValue,
    AuditCost,
    AiPlatformCost,
    AiImplementationCost,
}

impl ParamKey {
    /// All keys in display order.
    pub const ALL: [ParamKey; 8] = [
        ParamKey::MonthlyVolume,
        ParamKey::ManualMinutes,
        ParamKey::HourlyCost,
        ParamKey::ErrorRate,
        ParamKey::AverageInvoiceValue,
        ParamKey::AuditCost,
        ParamKey::AiPlatformCost,
        ParamKey::AiImplementationCost,
    ];

    /// The external field name (camelCase), e.g. `monthlyVolume`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MonthlyVolume => "monthlyVolume",
            Self::ManualMinutes => "manualMinutes",
            Self::HourlyCost => "hourlyCost",
            Self::ErrorRate => "errorRate",
            Self::AverageInvoiceValue => "averageInvoiceValue",
            Self::AuditCost => "auditCost",
            Self::AiPlatformCost => "aiPlatformCost",
            Self::AiImplementationCost => "aiImplementationCost",
        }
    }

    /// Look up a key by its external name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    pub fn default_value(&self) -> f64 {
        match self {
            Self::MonthlyVolume => 1000.0,
            Self::ManualMinutes => 10.0,
            Self::HourlyCost => 40.0,
            Self::ErrorRate => 2.0,
            Self::AverageInvoiceValue => 5000.0,
            Self::AuditCost => 20000.0,
            Self::AiPlatformCost => 5000.0,
            Self::AiImplementationCost => 15000.0,
        }
    }

    /// Human-readable label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MonthlyVolume => "Invoices processed per month",
            Self::ManualMinutes => "Minutes of manual labor per invoice",
            Self::HourlyCost => "Labor cost per hour",
            Self::ErrorRate => "Manual error rate (%)",
            Self::AverageInvoiceValue => "Average invoice value (informational)",
            Self::AuditCost => "Annual audit cost, current process",
            Self::AiPlatformCost => "Annual AI platform subscription",
            Self::AiImplementationCost => "One-time AI implementation cost",
        }
    }

    /// Whether the input display shows thousands separators for this field.
    pub fn uses_separators(&self) -> bool {
        matches!(
            self,
            Self::MonthlyVolume
                | Self::AverageInvoiceValue
                | Self::AuditCost
                | Self::AiPlatformCost
                | Self::AiImplementationCost
        )
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of all parameter values.
///
/// Values are always finite: the store coerces anything else to 0 before a
/// snapshot is built. Negative values are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub monthly_volume: f64,
    pub manual_minutes: f64,
    pub hourly_cost: f64,
    pub error_rate: f64,
    pub average_invoice_value: f64,
    pub audit_cost: f64,
    pub ai_platform_cost: f64,
    pub ai_implementation_cost: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        let mut params = Self::zeroed();
        for key in ParamKey::ALL {
            params.set(key, key.default_value());
        }
        params
    }
}

impl Parameters {
    /// All parameters set to 0.
    pub fn zeroed() -> Self {
        Self {
            monthly_volume: 0.0,
            manual_minutes: 0.0,
            hourly_cost: 0.0,
            error_rate: 0.0,
            average_invoice_value: 0.0,
            audit_cost: 0.0,
            ai_platform_cost: 0.0,
            ai_implementation_cost: 0.0,
        }
    }

    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::MonthlyVolume => self.monthly_volume,
            ParamKey::ManualMinutes => self.manual_minutes,
            ParamKey::HourlyCost => self.hourly_cost,
            ParamKey::ErrorRate => self.error_rate,
            ParamKey::AverageInvoiceValue => self.average_invoice_value,
            ParamKey::AuditCost => self.audit_cost,
            ParamKey::AiPlatformCost => self.ai_platform_cost,
            ParamKey::AiImplementationCost => self.ai_implementation_cost,
        }
    }

    /// Set a value. Non-finite values are stored as 0.
    pub fn set(&mut self, key: ParamKey, value: f64) {
        let value = finite_or_zero(value);
        let slot = match key {
            ParamKey::MonthlyVolume => &mut self.monthly_volume,
            ParamKey::ManualMinutes => &mut self.manual_minutes,
            ParamKey::HourlyCost => &mut self.hourly_cost,
            ParamKey::ErrorRate => &mut self.error_rate,
            ParamKey::AverageInvoiceValue => &mut self.average_invoice_value,
            ParamKey::AuditCost => &mut self.audit_cost,
            ParamKey::AiPlatformCost => &mut self.ai_platform_cost,
            ParamKey::AiImplementationCost => &mut self.ai_implementation_cost,
        };
        *slot = value;
    }

    /// Builder-style variant of [`Parameters::set`].
    pub fn with(mut self, key: ParamKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Iterate `(key, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, f64)> + '_ {
        ParamKey::ALL.iter().map(move |k| (*k, self.get(*k)))
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for key in ParamKey::ALL {
            assert_eq!(ParamKey::from_name(key.name()), Some(key));
        }
        assert_eq!(ParamKey::from_name("MonthlyVolume"), None);
        assert_eq!(ParamKey::from_name("bogus"), None);
    }

    #[test]
    fn test_defaults() {
        let p = Parameters::default();
        assert_eq!(p.monthly_volume, 1000.0);
        assert_eq!(p.manual_minutes, 10.0);
        assert_eq!(p.hourly_cost, 40.0);
        assert_eq!(p.error_rate, 2.0);
        assert_eq!(p.average_invoice_value, 5000.0);
        assert_eq!(p.audit_cost, 20000.0);
        assert_eq!(p.ai_platform_cost, 5000.0);
        assert_eq!(p.ai_implementation_cost, 15000.0);
    }

    #[test]
    fn test_set_coerces_non_finite() {
        let mut p = Parameters::default();
        p.set(ParamKey::HourlyCost, f64::NAN);
        assert_eq!(p.hourly_cost, 0.0);
        p.set(ParamKey::AuditCost, f64::INFINITY);
        assert_eq!(p.audit_cost, 0.0);
        p.set(ParamKey::ErrorRate, -3.5);
        assert_eq!(p.error_rate, -3.5);
    }

    #[test]
    fn test_serializes_with_field_names() {
        let json = serde_json::to_value(Parameters::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        for key in ParamKey::ALL {
            assert!(obj.contains_key(key.name()), "missing {}", key.name());
        }
    }

    #[test]
    fn test_separator_fields() {
        let formatted: Vec<_> = ParamKey::ALL
            .iter()
            .filter(|k| k.uses_separators())
            .map(|k| k.name())
            .collect();
        assert_eq!(
            formatted,
            vec![
                "monthlyVolume",
                "averageInvoiceValue",
                "auditCost",
                "aiPlatformCost",
                "aiImplementationCost"
            ]
        );
    }
}
