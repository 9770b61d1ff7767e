//! Query-parameter serialization.
//!
//! # Design
//! `ParamValue` models the value shapes the remote API accepts: scalars,
//! repeated keys (lists), bracket-indexed sub-keys (maps), and an explicit
//! none that drops the key. [`make_url_args`] walks a slice of pairs in order
//! and percent-encodes through `form_urlencoded`, so the output is a query
//! string ready to append to a request path.

use url::form_urlencoded::Serializer;

/// A single query-parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Serializes by repeating the key once per element.
    List(Vec<ParamValue>),
    /// Serializes each entry as `key[sub]=value`, recursing into the value.
    Map(Vec<(String, ParamValue)>),
    /// The key is omitted from the output entirely.
    None,
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => ParamValue::None,
        }
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(v: Vec<ParamValue>) -> Self {
        ParamValue::List(v)
    }
}

/// Callers that already describe a parameter set as JSON can convert it
/// directly; `null` maps to [`ParamValue::None`].
impl From<serde_json::Value> for ParamValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => ParamValue::None,
            serde_json::Value::Bool(b) => ParamValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => ParamValue::Int(i),
                None => ParamValue::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => ParamValue::Str(s),
            serde_json::Value::Array(items) => {
                ParamValue::List(items.into_iter().map(ParamValue::from).collect())
            }
            serde_json::Value::Object(entries) => ParamValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, ParamValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Serialize parameter pairs into a URL-encoded query string.
///
/// Pair order is preserved. List values repeat the key, map values produce
/// bracket-indexed sub-keys (`foo[bar]=baz`, brackets percent-encoded), bools
/// become the literal words `true`/`false`, and none values are dropped. A
/// parameter set with nothing to emit yields the empty string.
pub fn make_url_args(params: &[(&str, ParamValue)]) -> String {
    let mut serializer = Serializer::new(String::new());
    for (key, value) in params {
        append_param(&mut serializer, key, value);
    }
    serializer.finish()
}

fn append_param(serializer: &mut Serializer<String>, key: &str, value: &ParamValue) {
    match value {
        ParamValue::List(items) => {
            for item in items {
                append_param(serializer, key, item);
            }
        }
        ParamValue::Map(entries) => {
            for (sub, item) in entries {
                append_param(serializer, &format!("{key}[{sub}]"), item);
            }
        }
        ParamValue::Str(s) => {
            serializer.append_pair(key, s);
        }
        ParamValue::Int(i) => {
            serializer.append_pair(key, &i.to_string());
        }
        ParamValue::Float(f) => {
            serializer.append_pair(key, &format_float(*f));
        }
        ParamValue::Bool(b) => {
            serializer.append_pair(key, if *b { "true" } else { "false" });
        }
        ParamValue::None => {}
    }
}

// Whole floats keep their trailing `.0` (`2.0` serializes as "2.0", not "2"),
// matching the remote API's string coercion of float parameters.
fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}
