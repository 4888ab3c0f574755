//! Text and JSON rendering for `calc` and `watch`.

use serde_json::{json, Value};

use roicalc_engine::format::format_with_separators;
use roicalc_engine::store::parse_lenient;
use roicalc_engine::{ParamKey, Parameters, ResultDisplay, RoiResult};

use crate::util::{display_width, pad_left, pad_right};

const LABEL_WIDTH: usize = 16;
const MIN_VALUE_WIDTH: usize = 10;
const NOT_APPLICABLE: &str = "-";

/// Echo each input as typed, with separators where the field uses them.
///
/// Inputs that do not parse show the value actually used (0) next to the
/// original text.
pub fn render_params(inputs: &[(ParamKey, String)]) -> String {
    let label_width = inputs
        .iter()
        .map(|(k, _)| display_width(k.label()))
        .max()
        .unwrap_or(0);

    let mut out = String::from("Parameters\n");
    for (key, raw) in inputs {
        let shown = if !parse_lenient(raw).is_finite() {
            format!("0  (input {:?})", raw)
        } else if key.uses_separators() {
            let formatted = format_with_separators(raw);
            if formatted.is_empty() {
                raw.trim().to_string()
            } else {
                formatted
            }
        } else {
            raw.trim().to_string()
        };
        out.push_str(&format!("  {}  {}\n", pad_right(key.label(), label_width), shown));
    }
    out
}

/// Side-by-side cost comparison followed by the ROI block.
pub fn render_comparison(display: &ResultDisplay) -> String {
    let rows: [(&str, &str, &str); 5] = [
        ("Labor", display.current_labor.as_str(), display.ai_labor.as_str()),
        ("Audit", display.current_audit.as_str(), display.ai_audit.as_str()),
        ("Platform", NOT_APPLICABLE, display.ai_platform.as_str()),
        ("Implementation", NOT_APPLICABLE, display.ai_implementation.as_str()),
        ("Total", display.current_total.as_str(), display.ai_total.as_str()),
    ];

    let width = rows
        .iter()
        .flat_map(|(_, a, b)| [display_width(a), display_width(b)])
        .max()
        .unwrap_or(0)
        .max(MIN_VALUE_WIDTH);

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  {}\n",
        pad_right("", LABEL_WIDTH),
        pad_left("Current", width),
        pad_left("AI", width)
    ));
    for (label, current, ai) in rows {
        out.push_str(&format!(
            "{}  {}  {}\n",
            pad_right(label, LABEL_WIDTH),
            pad_left(current, width),
            pad_left(ai, width)
        ));
    }
    out.push('\n');
    out.push_str(&format!("{}{}\n", pad_right("Annual savings", LABEL_WIDTH + 2), display.annual_savings));
    out.push_str(&format!("{}{}\n", pad_right("ROI", LABEL_WIDTH + 2), display.roi_percent));
    out.push_str(&format!("{}{}\n", pad_right("Payback", LABEL_WIDTH + 2), display.payback));
    out
}

/// Full human report for `calc`.
pub fn render_report(
    title: Option<&str>,
    inputs: &[(ParamKey, String)],
    display: &ResultDisplay,
) -> String {
    let mut out = String::new();
    if let Some(title) = title {
        out.push_str(&format!("Scenario: {}\n\n", title));
    }
    out.push_str(&render_params(inputs));
    out.push('\n');
    out.push_str(&render_comparison(display));
    out
}

/// Header line plus comparison, printed by `watch` after each change.
pub fn render_update(revision: u64, label: &str, display: &ResultDisplay) -> String {
    let header = if revision == 0 {
        "-- initial --".to_string()
    } else {
        format!("-- revision {}: {} --", revision, label)
    };
    format!("{}\n{}", header, render_comparison(display))
}

/// The single JSON object printed by `calc --json`.
pub fn calc_json(
    title: Option<&str>,
    params: &Parameters,
    result: &RoiResult,
    display: &ResultDisplay,
) -> Value {
    json!({
        "scenario": title,
        "params": params,
        "result": result,
        "display": display,
    })
}

/// One NDJSON line printed by `watch --json`.
pub fn update_json(
    revision: u64,
    changed: Option<ParamKey>,
    result: &RoiResult,
    display: &ResultDisplay,
) -> Value {
    json!({
        "revision": revision,
        "changed": changed.map(|k| k.name()),
        "result": result,
        "display": display,
    })
}
