//! Display formatting for results and input echoes.
//!
//! One currency/locale convention is supported: en-US digit grouping with a
//! currency symbol prefix (`€76,000`, `-€4,000`).

use serde::{Deserialize, Serialize};

use crate::calc::RoiResult;

/// Shown in place of a payback figure when savings never cover the cost.
pub const PAYBACK_NOT_REACHED: &str = "Not reached";

/// Unit label appended to a payback figure.
pub const PAYBACK_UNIT: &str = "months";

/// Maximum fraction digits for separator display when the input has no
/// explicit decimal point.
const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub currency_symbol: String,
    pub currency_code: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            currency_code: "EUR".to_string(),
        }
    }
}

impl CurrencyFormat {
    /// Format as whole currency units, rounding half up.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return String::new();
        }
        let rounded = round_half_up(value);
        let digits = group_digits(&format!("{:.0}", rounded.abs()));
        if rounded < 0.0 {
            format!("-{}{}", self.currency_symbol, digits)
        } else {
            format!("{}{}", self.currency_symbol, digits)
        }
    }
}

/// Percentage with one decimal place, e.g. `316.7%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", fixed_one_decimal(value))
}

/// Payback period with one decimal and a unit, or the not-reached sentinel.
pub fn format_payback(months: Option<f64>) -> String {
    match months {
        Some(m) => format!("{} {}", fixed_one_decimal(m), PAYBACK_UNIT),
        None => PAYBACK_NOT_REACHED.to_string(),
    }
}

/// Echo a raw input string with thousands separators.
///
/// Keeps the number of decimals the user typed (`"1234.50"` becomes
/// `"1,234.50"`). Returns an empty string when the input is empty or not a
/// finite number.
pub fn format_with_separators(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let value = match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return String::new(),
    };

    let text = match raw.split_once('.') {
        Some((_, fraction)) => {
            let decimals = fraction.trim_end().len();
            format!("{:.*}", decimals, value.abs())
        }
        None => {
            let s = format!("{:.*}", DEFAULT_MAX_FRACTION_DIGITS, value.abs());
            let s = s.trim_end_matches('0');
            s.trim_end_matches('.').to_string()
        }
    };

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let negative = value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Insert a comma between every group of three digits.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One decimal place, exact ties rounded away from zero.
///
/// `{:.1}` alone rounds ties to even, so `12.25` would print `12.2`. A double
/// sits exactly on a tie only when its fractional part is `.25` or `.75`.
fn fixed_one_decimal(value: f64) -> String {
    let magnitude = value.abs();
    let quarters = magnitude * 4.0;
    let text = if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        format!("{:.1}", (magnitude * 10.0 + 0.5).floor() / 10.0)
    } else {
        format!("{:.1}", magnitude)
    };
    if value < 0.0 {
        format!("-{}", text)
    } else {
        text
    }
}

/// Round to the nearest integer, ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded + 0.0
}

/// Formatted strings for each display surface, keyed by surface id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDisplay {
    pub current_labor: String,
    pub current_audit: String,
    pub current_total: String,
    pub ai_labor: String,
    pub ai_audit: String,
    pub ai_platform: String,
    pub ai_implementation: String,
    pub ai_total: String,
    pub annual_savings: String,
    pub roi_percent: String,
    pub payback: String,
}

impl ResultDisplay {
    pub fn render(result: &RoiResult, currency: &CurrencyFormat) -> Self {
        Self {
            current_labor: currency.format(result.current.labor_cost),
            current_audit: currency.format(result.current.audit_cost),
            current_total: currency.format(result.current.total),
            ai_labor: currency.format(result.ai.labor_cost),
            ai_audit: currency.format(result.ai.audit_cost),
            ai_platform: currency.format(result.ai.platform_cost),
            ai_implementation: currency.format(result.ai.implementation_cost),
            ai_total: currency.format(result.ai.total),
            annual_savings: currency.format(result.roi.annual_savings),
            roi_percent: format_percent(result.roi.roi_percent),
            payback: format_payback(result.roi.payback_months),
        }
    }

    /// `(surface id, text)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("currentLabor", &self.current_labor),
            ("currentAudit", &self.current_audit),
            ("currentTotal", &self.current_total),
            ("aiLabor", &self.ai_labor),
            ("aiAudit", &self.ai_audit),
            ("aiPlatform", &self.ai_platform),
            ("aiImplementation", &self.ai_implementation),
            ("aiTotal", &self.ai_total),
            ("annualSavings", &self.annual_savings),
            ("roiPercent", &self.roi_percent),
            ("payback", &self.payback),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::compute;
    use crate::params::{ParamKey, Parameters};

    #[test]
    fn test_currency_grouping() {
        let eur = CurrencyFormat::default();
        assert_eq!(eur.format(0.0), "€0");
        assert_eq!(eur.format(999.0), "€999");
        assert_eq!(eur.format(1000.0), "€1,000");
        assert_eq!(eur.format(76000.0), "€76,000");
        assert_eq!(eur.format(1234567.0), "€1,234,567");
        assert_eq!(eur.format(-4000.0), "-€4,000");
    }

    #[test]
    fn test_currency_rounding() {
        let eur = CurrencyFormat::default();
        assert_eq!(eur.format(1999.5), "€2,000");
        assert_eq!(eur.format(1999.49), "€1,999");
        assert_eq!(eur.format(-2.5), "-€2");
        assert_eq!(eur.format(-0.3), "€0");
    }

    #[test]
    fn test_currency_custom_symbol() {
        let usd = CurrencyFormat {
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
        };
        assert_eq!(usd.format(12345.0), "$12,345");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(316.666_666), "316.7%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(-0.0), "0.0%");
        assert_eq!(format_percent(-12.34), "-12.3%");
    }

    #[test]
    fn test_payback() {
        assert_eq!(format_payback(Some(3.157_894)), "3.2 months");
        assert_eq!(format_payback(Some(0.0)), "0.0 months");
        assert_eq!(format_payback(None), "Not reached");
    }

    #[test]
    fn test_one_decimal_ties_round_up() {
        assert_eq!(format_percent(12.25), "12.3%");
        assert_eq!(format_percent(12.75), "12.8%");
        assert_eq!(format_percent(-12.25), "-12.3%");
        assert_eq!(format_percent(0.15), "0.1%");
        assert_eq!(format_payback(Some(0.25)), "0.3 months");
        assert_eq!(format_payback(Some(2.75)), "2.8 months");
    }

    #[test]
    fn test_roi_tie_from_compute() {
        let params = Parameters::zeroed()
            .with(ParamKey::MonthlyVolume, 7.0)
            .with(ParamKey::ManualMinutes, 60.0)
            .with(ParamKey::HourlyCost, 52.0)
            .with(ParamKey::AiImplementationCost, 33.0);
        let result = compute(&params);
        assert_eq!(format_percent(result.roi.roi_percent), "8431.3%");
    }

    #[test]
    fn test_separators() {
        assert_eq!(format_with_separators("1000"), "1,000");
        assert_eq!(format_with_separators("1234.50"), "1,234.50");
        assert_eq!(format_with_separators("1234."), "1,234");
        assert_eq!(format_with_separators("-15000"), "-15,000");
        assert_eq!(format_with_separators("12"), "12");
        assert_eq!(format_with_separators("0.1234"), "0.1234");
        assert_eq!(format_with_separators("1e3"), "1,000");
    }

    #[test]
    fn test_separators_rejects_bad_input() {
        assert_eq!(format_with_separators(""), "");
        assert_eq!(format_with_separators("   "), "");
        assert_eq!(format_with_separators("12abc"), "");
        assert_eq!(format_with_separators("inf"), "");
    }

    #[test]
    fn test_render_defaults() {
        let display = ResultDisplay::render(&compute(&Parameters::default()), &CurrencyFormat::default());
        assert_eq!(display.current_labor, "€80,000");
        assert_eq!(display.current_audit, "€20,000");
        assert_eq!(display.current_total, "€100,000");
        assert_eq!(display.ai_labor, "€2,000");
        assert_eq!(display.ai_audit, "€2,000");
        assert_eq!(display.ai_platform, "€5,000");
        assert_eq!(display.ai_implementation, "€15,000");
        assert_eq!(display.ai_total, "€24,000");
        assert_eq!(display.annual_savings, "€76,000");
        assert_eq!(display.roi_percent, "316.7%");
        assert_eq!(display.payback, "3.2 months");
    }

    #[test]
    fn test_render_zero_scenario() {
        let display = ResultDisplay::render(&compute(&Parameters::zeroed()), &CurrencyFormat::default());
        assert_eq!(display.ai_total, "€0");
        assert_eq!(display.roi_percent, "0.0%");
        assert_eq!(display.payback, PAYBACK_NOT_REACHED);
    }

    #[test]
    fn test_display_entries_keys() {
        let display = ResultDisplay::render(&compute(&Parameters::default()), &CurrencyFormat::default());
        let json = serde_json::to_value(&display).unwrap();
        for (id, text) in display.entries() {
            assert_eq!(json[id].as_str(), Some(text));
        }
    }
}
