// Property-based tests for the cost model.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use roicalc_engine::{compute, read_params, ParamKey, Parameters};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Business-sized values, including negatives for what-if inputs.
fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => 0.0..1_000_000.0f64,
        1 => -1_000_000.0..0.0f64,
        1 => Just(0.0),
    ]
}

fn arb_params() -> impl Strategy<Value = Parameters> {
    proptest::collection::vec(arb_value(), 8).prop_map(|values| {
        let mut p = Parameters::zeroed();
        for (key, value) in ParamKey::ALL.iter().zip(values) {
            p.set(*key, value);
        }
        p
    })
}

/// Raw field text: numbers, junk, and the empty string.
fn arb_raw() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => r"-?[0-9]{1,7}(\.[0-9]{1,3})?",
        1 => r"[a-zA-Z ,]{0,8}",
        1 => Just("Infinity".to_string()),
        1 => Just("1e999".to_string()),
        1 => Just(String::new()),
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn compute_is_deterministic(p in arb_params()) {
        let a = compute(&p);
        let b = compute(&p);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn totals_are_exact_sums(p in arb_params()) {
        let r = compute(&p);
        prop_assert_eq!(r.current.total, r.current.labor_cost + r.current.audit_cost);
        prop_assert_eq!(
            r.ai.total,
            r.ai.labor_cost + r.ai.audit_cost + r.ai.platform_cost + r.ai.implementation_cost
        );
        prop_assert_eq!(r.roi.annual_savings, r.current.total - r.ai.total);
    }

    #[test]
    fn roi_is_zero_without_ai_cost(p in arb_params()) {
        let r = compute(&p);
        if r.ai.total <= 0.0 {
            prop_assert_eq!(r.roi.roi_percent, 0.0);
        }
    }

    #[test]
    fn no_payback_without_savings(p in arb_params()) {
        let r = compute(&p);
        if r.roi.annual_savings <= 0.0 {
            prop_assert_eq!(r.roi.payback_months, None);
        } else {
            prop_assert!(r.roi.payback_months.is_some());
        }
    }

    #[test]
    fn outputs_are_finite(p in arb_params()) {
        let r = compute(&p);
        for n in r.numbers() {
            prop_assert!(n.is_finite(), "non-finite output {} for {:?}", n, p);
        }
    }

    #[test]
    fn labor_costs_grow_with_volume(
        p in arb_params(),
        minutes in 0.1..600.0f64,
        hourly in 0.1..500.0f64,
        volume in 0.0..100_000.0f64,
        extra in 1.0..100_000.0f64,
    ) {
        let base = p
            .with(ParamKey::ManualMinutes, minutes)
            .with(ParamKey::HourlyCost, hourly)
            .with(ParamKey::MonthlyVolume, volume);
        let more = base.with(ParamKey::MonthlyVolume, volume + extra);

        let a = compute(&base);
        let b = compute(&more);
        prop_assert!(b.current.labor_cost > a.current.labor_cost);
        prop_assert!(b.ai.labor_cost > a.ai.labor_cost);
    }

    #[test]
    fn store_never_yields_non_finite(raws in proptest::collection::vec(arb_raw(), 8)) {
        let map: HashMap<String, String> = ParamKey::ALL
            .iter()
            .zip(raws)
            .map(|(k, raw)| (k.name().to_string(), raw))
            .collect();
        let p = read_params(&map);
        for (_, value) in p.iter() {
            prop_assert!(value.is_finite());
        }
        for n in compute(&p).numbers() {
            prop_assert!(n.is_finite());
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_zero_everything() {
    let r = compute(&Parameters::zeroed());
    assert_eq!(r.current.labor_cost, 0.0);
    assert_eq!(r.current.total, 0.0);
    assert_eq!(r.ai.labor_cost, 0.0);
    assert_eq!(r.ai.audit_cost, 0.0);
    assert_eq!(r.ai.total, 0.0);
    assert_eq!(r.roi.roi_percent, 0.0);
    assert_eq!(r.roi.payback_months, None);
}

#[test]
fn scenario_zero_error_rate() {
    let r = compute(&Parameters::default().with(ParamKey::ErrorRate, 0.0));
    assert_eq!(r.derived.error_ratio, 1.0);
    assert!(r.numbers().iter().all(|n| n.is_finite()));
}
