//! Parameter canonicalization.
//!
//! Turns an unordered parameter mapping into the deterministic plain-text
//! signature basis everything else hashes over. Each entry becomes the
//! string `key ++ value`; the parts are sorted byte-lexicographically over
//! the concatenated form (not by key alone) and joined with no delimiter.
//!
//! There is no escaping between key and value, so distinct sets can in
//! principle collide (`{"a": "1b"}` and `{"ab": "1"}` canonicalize
//! identically). This is a known weakness of the wire scheme, preserved
//! for compatibility with existing tokens.
//!
//! Floats stringify in Rust's shortest round-trip form, so a whole-valued
//! float renders as `1`, not `1.0`. Runtimes that always print a decimal
//! point will canonicalize such values differently; the interoperable data
//! model is strings and integers, with floats a best-effort extension.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A parameter value: string, integer, or float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Signed integer, stringified in base 10.
    Int(i64),
    /// Float, stringified in its natural text form.
    Float(f64),
    /// String, passed through unchanged.
    Str(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Int(i64::from(n))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

/// An unordered set of named parameters to sign a token over.
pub type ParamSet = HashMap<String, ParamValue>;

/// Computes the canonical plain signature of a parameter set.
///
/// Pure function: identical key/value pairs produce the identical output
/// regardless of the map's internal iteration order.
#[must_use]
pub fn plain_signature(params: &ParamSet) -> String {
    let mut parts: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}{value}"))
        .collect();
    parts.sort_unstable();
    parts.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, ParamValue)]) -> ParamSet {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_single_entry() {
        let set = params(&[("blah", 123.into())]);
        assert_eq!(plain_signature(&set), "blah123");
    }

    #[test]
    fn test_sorted_concatenation() {
        let set = params(&[
            ("blah", 123.into()),
            ("test", "working".into()),
            ("hello", "world".into()),
        ]);
        assert_eq!(plain_signature(&set), "blah123helloworldtestworking");
    }

    #[test]
    fn test_order_invariance() {
        let forward = params(&[("a", 1.into()), ("b", 2.into()), ("c", 3.into())]);
        let reverse = params(&[("c", 3.into()), ("b", 2.into()), ("a", 1.into())]);
        assert_eq!(plain_signature(&forward), plain_signature(&reverse));
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(plain_signature(&ParamSet::new()), "");
    }

    #[test]
    fn test_sort_over_concatenated_form() {
        // "a10" < "a9" byte-lexicographically, so the value participates
        // in the ordering, not just the key.
        let set = params(&[("a", 9.into()), ("a1", 0.into())]);
        assert_eq!(plain_signature(&set), "a10a9");
    }

    #[test]
    fn test_float_shortest_form() {
        // Whole-valued floats drop the decimal point.
        let set = params(&[("ratio", 1.0.into())]);
        assert_eq!(plain_signature(&set), "ratio1");

        let set = params(&[("ratio", 1.5.into())]);
        assert_eq!(plain_signature(&set), "ratio1.5");
    }

    #[test]
    fn test_known_ambiguity_preserved() {
        let left = params(&[("a", "1b".into())]);
        let right = params(&[("ab", "1".into())]);
        assert_eq!(plain_signature(&left), plain_signature(&right));
    }

    #[test]
    fn test_value_from_json() {
        let set: ParamSet =
            serde_json::from_str(r#"{"blah": 123, "test": "working"}"#).unwrap();
        assert_eq!(plain_signature(&set), "blah123testworking");
    }
}
