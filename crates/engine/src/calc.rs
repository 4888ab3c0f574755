//! The cost model: current (manual) process vs. AI-automated process.
//!
//! `compute` is a pure, total function of its inputs. Every field of the
//! result is recomputed from the snapshot; nothing is carried between calls.

use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;
use crate::params::Parameters;

const MONTHS_PER_YEAR: f64 = 12.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Annual cost of the current, manual process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCosts {
    pub labor_cost: f64,
    pub audit_cost: f64,
    pub total: f64,
}

/// Projected annual cost once processing is automated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiCosts {
    pub labor_cost: f64,
    pub audit_cost: f64,
    pub platform_cost: f64,
    pub implementation_cost: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiMetrics {
    pub annual_savings: f64,
    /// 0 when the AI total is not positive.
    pub roi_percent: f64,
    /// `None` when monthly savings are zero or negative: payback is never
    /// reached.
    pub payback_months: Option<f64>,
}

/// Intermediate quantities that are not part of the headline figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub annual_invoices: f64,
    pub manual_hours: f64,
    pub monthly_savings: f64,
    /// AI residual error rate relative to the (floored) manual error rate.
    pub error_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub current: CurrentCosts,
    pub ai: AiCosts,
    pub roi: RoiMetrics,
    pub derived: DerivedMetrics,
}

/// Compute with the default assumptions.
pub fn compute(params: &Parameters) -> RoiResult {
    compute_with(params, &Assumptions::default())
}

pub fn compute_with(params: &Parameters, assumptions: &Assumptions) -> RoiResult {
    let annual_invoices = params.monthly_volume * MONTHS_PER_YEAR;
    let manual_hours = annual_invoices * (params.manual_minutes / MINUTES_PER_HOUR);
    let labor_cost = manual_hours * params.hourly_cost;
    let audit_cost = params.audit_cost;
    let current_total = labor_cost + audit_cost;

    let ai_labor = annual_invoices
        * (assumptions.ai_processing_seconds / SECONDS_PER_HOUR)
        * params.hourly_cost;
    let safe_error_rate = params.error_rate.max(assumptions.error_rate_floor);
    let error_ratio = assumptions.ai_error_rate / safe_error_rate;
    let ai_audit = audit_cost * assumptions.ai_audit_factor;
    let ai_total =
        ai_labor + ai_audit + params.ai_platform_cost + params.ai_implementation_cost;

    let annual_savings = current_total - ai_total;
    let roi_percent = if ai_total > 0.0 {
        (annual_savings / ai_total) * 100.0
    } else {
        0.0
    };
    let monthly_savings = annual_savings / MONTHS_PER_YEAR;
    let payback_months = if monthly_savings > 0.0 {
        Some((params.ai_platform_cost + params.ai_implementation_cost) / monthly_savings)
    } else {
        None
    };

    RoiResult {
        current: CurrentCosts {
            labor_cost,
            audit_cost,
            total: current_total,
        },
        ai: AiCosts {
            labor_cost: ai_labor,
            audit_cost: ai_audit,
            platform_cost: params.ai_platform_cost,
            implementation_cost: params.ai_implementation_cost,
            total: ai_total,
        },
        roi: RoiMetrics {
            annual_savings,
            roi_percent,
            payback_months,
        },
        derived: DerivedMetrics {
            annual_invoices,
            manual_hours,
            monthly_savings,
            error_ratio,
        },
    }
}

impl RoiResult {
    /// Every numeric field, for finiteness checks.
    pub fn numbers(&self) -> Vec<f64> {
        let mut out = vec![
            self.current.labor_cost,
            self.current.audit_cost,
            self.current.total,
            self.ai.labor_cost,
            self.ai.audit_cost,
            self.ai.platform_cost,
            self.ai.implementation_cost,
            self.ai.total,
            self.roi.annual_savings,
            self.roi.roi_percent,
            self.derived.annual_invoices,
            self.derived.manual_hours,
            self.derived.monthly_savings,
            self.derived.error_ratio,
        ];
        if let Some(months) = self.roi.payback_months {
            out.push(months);
        }
        out
    }
}
