//! Tolerant accessors over untyped JSON.
//!
//! The service's payloads are loosely typed: scores arrive as strings,
//! booleans as `"1"`, and fields come and go between API revisions. Every
//! accessor here degrades instead of failing:
//!
//! | Accessor | Missing or mis-shaped value yields |
//! |----------|------------------------------------|
//! | [`parse_document`] | an empty [`Document`] |
//! | [`get_string`], [`get_string_at`] | `None` |
//! | [`get_boolean`] | `None` if absent, `Some(false)` if unrecognised |
//! | [`get_integer`], [`get_long`], [`get_double`] | `None` |
//! | [`get_object`], [`get_object_at`] | `None` |
//! | [`get_array`] | an empty slice, never `None` |
//!
//! The array accessor is deliberately asymmetric with the others; hooks
//! iterate the result directly without unwrapping.
//!
//! JSON `null` under a present key cannot be coerced to a string or a
//! number, so those accessors yield `None` for it. [`get_boolean`] follows
//! its own rule and reads it as `false`.

use serde_json::{Map, Value};
use tracing::debug;

/// A parsed top-level JSON object.
pub type Document = Map<String, Value>;

/// Strings accepted as `true` by [`get_boolean`], compared case-insensitively.
const TRUTHY: &[&str] = &["true", "yes", "y", "t", "on", "1"];

/// Parse a raw response body into a [`Document`].
///
/// Absent input, blank input, malformed JSON and a root that is not an object
/// all yield an empty document. Nothing is surfaced to the caller.
pub fn parse_document<'a>(raw: impl Into<Option<&'a str>>) -> Document {
    let raw = match raw.into() {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            debug!("response body is absent or blank; using empty document");
            return Document::new();
        }
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(doc)) => doc,
        Ok(other) => {
            debug!(kind = kind_of(&other), "response root is not an object; using empty document");
            Document::new()
        }
        Err(e) => {
            debug!(error = %e, "response body is not valid JSON; using empty document");
            Document::new()
        }
    }
}

/// `true` iff `doc` is present and contains `key`.
pub fn has_key(doc: Option<&Document>, key: &str) -> bool {
    doc.is_some_and(|d| d.contains_key(key))
}

/// The value under `key` as a string.
///
/// Non-string scalars are stringified (`12312` → `"12312"`, `true` →
/// `"true"`); objects and arrays become their compact JSON text.
pub fn get_string(doc: &Document, key: &str) -> Option<String> {
    doc.get(key).and_then(value_to_string)
}

/// The element at `index` as a string, following the same rules as
/// [`get_string`]. Negative and out-of-range indexes yield `None`.
pub fn get_string_at<I: TryInto<usize>>(array: &[Value], index: I) -> Option<String> {
    element(array, index).and_then(value_to_string)
}

/// The value under `key` as a boolean.
///
/// Real booleans are returned verbatim. Strings (and numbers, after
/// stringifying) are `true` when they match one of the service's truthy
/// spellings such as `"yes"` or `"1"`. Anything else present, including
/// `null`, objects and arrays, is `false`. Only a missing key is `None`.
pub fn get_boolean(doc: &Document, key: &str) -> Option<bool> {
    match doc.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => Some(is_truthy(s)),
        Value::Number(n) => Some(is_truthy(&n.to_string())),
        Value::Null | Value::Object(_) | Value::Array(_) => Some(false),
    }
}

/// The value under `key` as an `i32`. Fractions are truncated; values outside
/// the `i32` range yield `None`.
pub fn get_integer(doc: &Document, key: &str) -> Option<i32> {
    doc.get(key)
        .and_then(value_to_i64)
        .and_then(|n| i32::try_from(n).ok())
}

/// The value under `key` as an `i64`. Fractions are truncated; values outside
/// the `i64` range yield `None`.
pub fn get_long(doc: &Document, key: &str) -> Option<i64> {
    doc.get(key).and_then(value_to_i64)
}

/// The value under `key` as a finite `f64`.
pub fn get_double(doc: &Document, key: &str) -> Option<f64> {
    doc.get(key).and_then(value_to_f64)
}

/// The nested object under `key`.
pub fn get_object<'d>(doc: &'d Document, key: &str) -> Option<&'d Document> {
    doc.get(key).and_then(Value::as_object)
}

/// The object at `index`. Negative and out-of-range indexes yield `None`.
pub fn get_object_at<I: TryInto<usize>>(array: &[Value], index: I) -> Option<&Document> {
    element(array, index).and_then(Value::as_object)
}

/// The array under `key`, or an empty slice when absent or not an array.
pub fn get_array<'d>(doc: &'d Document, key: &str) -> &'d [Value] {
    match doc.get(key) {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

// --- helpers -----------------------------------------------------------------

fn element<I: TryInto<usize>>(array: &[Value], index: I) -> Option<&Value> {
    index.try_into().ok().and_then(|i| array.get(i))
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn is_truthy(s: &str) -> bool {
    let s = s.trim();
    TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(s))
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_to_i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate_to_i64))
        }
        _ => None,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    let f = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    f.is_finite().then_some(f)
}

/// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn truncate_to_i64(f: f64) -> Option<i64> {
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// --- tests -------------------------------------------------------------------
