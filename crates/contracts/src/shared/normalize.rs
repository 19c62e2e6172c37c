//! Tolerant reading of backend records whose field names drift between
//! spellings (`Supplier_Id`, `supplier_Id`, `id`, ...).
//!
//! Candidate keys are tried in order and the first key *present* on the
//! record wins, even when its value is `null`. No merging across keys.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Untyped backend record.
pub type Record = Map<String, Value>;

/// Raw value of the first candidate key present on the record.
pub fn extract_value<'a>(record: &'a Record, candidate_keys: &[&str]) -> Option<&'a Value> {
    candidate_keys.iter().find_map(|key| record.get(*key))
}

/// Value of the first present candidate key converted into `T`, or `fallback`.
///
/// `fallback` is returned when no candidate key is present, and also when
/// the first present key holds a value that does not convert into `T` (the
/// lookup does not continue to later keys). Use [`extract_value`] to tell
/// "no key present" apart from "present but unconvertible": it returns
/// `None` exactly when no candidate key is present.
pub fn extract<T: DeserializeOwned>(record: &Record, candidate_keys: &[&str], fallback: T) -> T {
    match extract_value(record, candidate_keys) {
        Some(value) => serde_json::from_value(value.clone()).unwrap_or(fallback),
        None => fallback,
    }
}

/// Like [`extract`] but also accepts numeric strings (`"42"`).
pub fn extract_i64(record: &Record, candidate_keys: &[&str], fallback: i64) -> i64 {
    match extract_value(record, candidate_keys) {
        Some(value) => value_as_i64(value).unwrap_or(fallback),
        None => fallback,
    }
}

/// Like [`extract`] but also accepts numeric strings.
pub fn extract_f64(record: &Record, candidate_keys: &[&str], fallback: f64) -> f64 {
    match extract_value(record, candidate_keys) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(fallback),
        Some(Value::String(s)) => s.trim().replace(',', ".").parse().unwrap_or(fallback),
        _ => fallback,
    }
}

/// String value; numbers and booleans are rendered, `null` becomes empty.
pub fn extract_string(record: &Record, candidate_keys: &[&str], fallback: &str) -> String {
    match extract_value(record, candidate_keys) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) => String::new(),
        Some(_) => fallback.to_string(),
        None => fallback.to_string(),
    }
}

/// Optional string: `None` when absent, `null` or blank.
pub fn extract_opt_string(record: &Record, candidate_keys: &[&str]) -> Option<String> {
    let value = extract_string(record, candidate_keys, "");
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Boolean value; accepts `true/false`, `0/1` and their string forms.
pub fn extract_bool(record: &Record, candidate_keys: &[&str], fallback: bool) -> bool {
    match extract_value(record, candidate_keys) {
        Some(value) => value_as_bool(value).unwrap_or(fallback),
        None => fallback,
    }
}

/// Optional boolean: `None` when absent or not interpretable.
pub fn extract_opt_bool(record: &Record, candidate_keys: &[&str]) -> Option<bool> {
    extract_value(record, candidate_keys).and_then(value_as_bool)
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Types that can be built from an untyped backend record.
pub trait FromRecord: Sized {
    fn from_record(record: &Record) -> Self;
}

/// Items array of a page envelope (`items` / `Items` / `data`).
pub const ENVELOPE_ITEMS_KEYS: &[&str] = &["items", "Items", "data", "Data"];

/// Total count of a page envelope.
pub const ENVELOPE_TOTAL_KEYS: &[&str] = &["totalItems", "TotalItems", "total_items", "total", "Total"];

/// Reads a `{items, totalItems}` page envelope. Non-object items are skipped.
/// When the total is missing the number of returned items is used.
pub fn read_page_envelope<T: FromRecord>(envelope: &Value) -> crate::shared::pagination::PageResponse<T> {
    use crate::shared::pagination::PageResponse;

    let Some(object) = envelope.as_object() else {
        return PageResponse::empty();
    };

    let items: Vec<T> = match extract_value(object, ENVELOPE_ITEMS_KEYS) {
        Some(Value::Array(rows)) => rows
            .iter()
            .filter_map(|row| row.as_object().map(T::from_record))
            .collect(),
        _ => Vec::new(),
    };

    let total = extract_i64(object, ENVELOPE_TOTAL_KEYS, items.len() as i64).max(0) as usize;
    PageResponse::new(items, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn test_unconvertible_value_is_present_but_falls_back() {
        let r = record(json!({ "Supplier_Id": "not a number", "id": 4 }));
        let keys = ["Supplier_Id", "id"];
        assert_eq!(extract_value(&r, &keys), Some(&json!("not a number")));
        assert_eq!(extract(&r, &keys, -1i64), -1);

        let empty = record(json!({}));
        assert_eq!(extract_value(&empty, &keys), None);
        assert_eq!(extract(&empty, &keys, -1i64), -1);
    }

    #[test]
    fn test_first_present_key_wins() {
        let r = record(json!({ "id": 3, "Supplier_Id": 7 }));
        assert_eq!(extract(&r, &["Supplier_Id", "supplier_Id", "id"], 0i64), 7);
        assert_eq!(extract(&r, &["supplier_Id", "id", "Supplier_Id"], 0i64), 3);
    }

    #[test]
    fn test_fallback_iff_no_candidate_present() {
        let r = record(json!({ "name": "x" }));
        assert_eq!(extract(&r, &["Name", "label"], "fallback".to_string()), "fallback");
        assert_eq!(extract(&r, &["Name", "name"], "fallback".to_string()), "x");
        assert_eq!(extract(&r, &[], 9i64), 9);
    }

    #[test]
    fn test_null_counts_as_present() {
        let r = record(json!({ "Country_Name": null, "name": "France" }));
        assert_eq!(extract_value(&r, &["Country_Name", "name"]), Some(&Value::Null));
        assert_eq!(extract_string(&r, &["Country_Name", "name"], "?"), "");
        assert_eq!(extract::<Option<String>>(&r, &["Country_Name", "name"], Some("x".into())), None);
    }

    #[test]
    fn test_tolerant_scalars() {
        let r = record(json!({ "a": "42", "b": 1, "c": "false", "d": 12.5, "e": "7,25" }));
        assert_eq!(extract_i64(&r, &["a"], 0), 42);
        assert!(extract_bool(&r, &["b"], false));
        assert!(!extract_bool(&r, &["c"], true));
        assert_eq!(extract_string(&r, &["d"], ""), "12.5");
        assert_eq!(extract_f64(&r, &["e"], 0.0), 7.25);
        assert_eq!(extract_opt_bool(&r, &["missing"]), None);
        assert_eq!(extract_opt_string(&r, &["missing"]), None);
    }

    struct Row {
        id: i64,
    }

    impl FromRecord for Row {
        fn from_record(record: &Record) -> Self {
            Self {
                id: extract_i64(record, &["id", "Id"], 0),
            }
        }
    }

    #[test]
    fn test_page_envelope_casing() {
        let page: crate::shared::pagination::PageResponse<Row> =
            read_page_envelope(&json!({ "Items": [{ "Id": 1 }, { "id": 2 }, 5], "TotalItems": 40 }));
        assert_eq!(page.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(page.total_items, 40);
    }

    #[test]
    fn test_page_envelope_missing_total() {
        let page: crate::shared::pagination::PageResponse<Row> =
            read_page_envelope(&json!({ "items": [{ "id": 1 }] }));
        assert_eq!(page.total_items, 1);

        let empty: crate::shared::pagination::PageResponse<Row> = read_page_envelope(&json!([]));
        assert!(empty.items.is_empty());
        assert_eq!(empty.total_items, 0);
    }
}
