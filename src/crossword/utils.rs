//! Small helpers shared by the format parsers.
//!
//! The JSON accessors mirror how loosely-typed sources are usually read:
//! absent or `null` values fall back to a default, and scalars are coerced
//! instead of rejected.

use encoding_rs::Encoding;
use serde_json::{Map, Value};

/// Resolves an encoding label, folding the legacy Chinese labels into GB18030.
pub fn parse_encoding(label: &str) -> Option<&'static Encoding> {
    let label = label.trim();
    let label = if label.eq_ignore_ascii_case("GBK") || label.eq_ignore_ascii_case("GB2312") {
        "GB18030"
    } else {
        label
    };
    Encoding::for_label(label.as_bytes())
}

/// Returns the nested object at `key`, if there is one.
pub fn opt_object<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    obj.get(key).and_then(Value::as_object)
}

/// Returns the array at `key`, if there is one.
pub fn opt_array<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Vec<Value>> {
    obj.get(key).and_then(Value::as_array)
}

/// Returns the value at `key` as text, or `None` when absent or `null`.
///
/// Numbers and booleans are rendered as their JSON text.
pub fn get_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Like [`get_string`], but absent values become the empty string.
pub fn opt_string(obj: &Map<String, Value>, key: &str) -> String {
    get_string(obj, key).unwrap_or_default()
}

/// Returns the value at `key` as an integer.
///
/// Accepts JSON numbers (fractions are truncated) and numeric strings.
pub fn opt_int(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn strings_fall_back_to_empty() {
        let obj = object(json!({ "title": "Hello", "empty": "", "nil": null, "num": 12 }));
        assert_eq!(opt_string(&obj, "title"), "Hello");
        assert_eq!(opt_string(&obj, "empty"), "");
        assert_eq!(opt_string(&obj, "nil"), "");
        assert_eq!(opt_string(&obj, "missing"), "");
        assert_eq!(opt_string(&obj, "num"), "12");
        assert_eq!(get_string(&obj, "missing"), None);
    }

    #[test]
    fn ints_accept_numbers_and_numeric_strings() {
        let obj = object(json!({ "a": 15, "b": "21", "c": 3.9, "d": "x", "e": true }));
        assert_eq!(opt_int(&obj, "a"), Some(15));
        assert_eq!(opt_int(&obj, "b"), Some(21));
        assert_eq!(opt_int(&obj, "c"), Some(3));
        assert_eq!(opt_int(&obj, "d"), None);
        assert_eq!(opt_int(&obj, "e"), None);
        assert_eq!(opt_int(&obj, "missing"), None);
    }

    #[test]
    fn encoding_labels() {
        assert_eq!(parse_encoding("utf-8"), Some(encoding_rs::UTF_8));
        assert_eq!(parse_encoding("GBK"), Some(encoding_rs::GB18030));
        assert_eq!(parse_encoding(" latin1 "), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(parse_encoding("klingon"), None);
    }
}
