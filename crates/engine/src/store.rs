//! Parameter store: holds the raw text of each input field and reads it
//! back as a `Parameters` snapshot.
//!
//! Reading never fails. Absent, unparseable, or non-finite input becomes 0.

use std::collections::{BTreeMap, HashMap};

use rustc_hash::FxHashMap;

use crate::params::{finite_or_zero, ParamKey, Parameters};

/// Anything that can supply the raw text of an input field.
pub trait ParameterSource {
    fn raw_value(&self, key: ParamKey) -> Option<&str>;
}

/// Build a snapshot from a source, coercing bad input to 0.
pub fn read_params<S: ParameterSource + ?Sized>(source: &S) -> Parameters {
    let mut params = Parameters::zeroed();
    for key in ParamKey::ALL {
        let value = match source.raw_value(key) {
            Some(raw) => {
                let parsed = parse_lenient(raw);
                if !parsed.is_finite() {
                    log::debug!("{}: {:?} is not a finite number, using 0", key, raw);
                }
                parsed
            }
            None => 0.0,
        };
        params.set(key, value);
    }
    params
}

/// Parse the leading numeric prefix of `raw`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12abc"`
/// is 12 and `"  3.5 "` is 3.5. Returns NaN when no prefix parses. The result
/// may be infinite for overflowing literals; callers coerce.
pub fn parse_lenient(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let frac_digits = j - frac_start;
        if mantissa_digits > 0 || frac_digits > 0 {
            mantissa_digits += frac_digits;
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// Lenient parse with the store's coercion applied.
pub fn coerce_input(raw: &str) -> f64 {
    finite_or_zero(parse_lenient(raw))
}

/// Holds the current raw text of each of the eight input fields.
///
/// Created from defaults and mutated only through [`ParameterStore::set_input`].
#[derive(Debug, Clone)]
pub struct ParameterStore {
    inputs: FxHashMap<ParamKey, String>,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ParameterStore {
    /// A store populated with every key's default value.
    pub fn with_defaults() -> Self {
        Self::from_params(&Parameters::default())
    }

    /// A store populated from an existing snapshot.
    pub fn from_params(params: &Parameters) -> Self {
        let inputs = params
            .iter()
            .map(|(key, value)| (key, format_input_value(value)))
            .collect();
        Self { inputs }
    }

    /// Replace the raw text of one field.
    pub fn set_input(&mut self, key: ParamKey, raw: impl Into<String>) {
        self.inputs.insert(key, raw.into());
    }

    /// Replace one field with a numeric value.
    pub fn set_value(&mut self, key: ParamKey, value: f64) {
        self.inputs.insert(key, format_input_value(value));
    }

    pub fn input(&self, key: ParamKey) -> Option<&str> {
        self.inputs.get(&key).map(String::as_str)
    }

    /// Snapshot the current values.
    pub fn read(&self) -> Parameters {
        read_params(self)
    }
}

impl ParameterSource for ParameterStore {
    fn raw_value(&self, key: ParamKey) -> Option<&str> {
        self.input(key)
    }
}

impl ParameterSource for HashMap<String, String> {
    fn raw_value(&self, key: ParamKey) -> Option<&str> {
        self.get(key.name()).map(String::as_str)
    }
}

impl ParameterSource for BTreeMap<String, String> {
    fn raw_value(&self, key: ParamKey) -> Option<&str> {
        self.get(key.name()).map(String::as_str)
    }
}

/// Text that reads back as exactly `value`.
fn format_input_value(value: f64) -> String {
    let value = finite_or_zero(value);
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
