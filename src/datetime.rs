//! Field Value Coercion
//!
//! Form answers travel as loose JSON values. These helpers coerce them into
//! what each input widget needs: invalid or absent date/time values become
//! `None` instead of erroring, booleans default to false, text to "".

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Wire format used by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format used by `<input type="datetime-local">`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Wire format used by `<input type="time">`
pub const TIME_FORMAT: &str = "%H:%M";

fn value_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim()),
        _ => None,
    }
}

pub fn parse_date(value: Option<&Value>) -> Option<NaiveDate> {
    let s = value_str(value)?;
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn parse_date_time(value: Option<&Value>) -> Option<NaiveDateTime> {
    let s = value_str(value)?;
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

pub fn parse_time(value: Option<&Value>) -> Option<NaiveTime> {
    let s = value_str(value)?;
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Text fields treat absent/non-string values as an empty string
pub fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Boolean fields treat absent/falsy values as unchecked
pub fn coerce_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_blank_parse_to_none() {
        assert!(parse_date(None).is_none());
        assert!(parse_date(Some(&Value::Null)).is_none());
        assert!(parse_date(Some(&json!("   "))).is_none());
    }

    #[test]
    fn test_invalid_dates_are_absent_not_errors() {
        assert!(parse_date(Some(&json!("not-a-date"))).is_none());
        assert!(parse_date(Some(&json!("2025-13-40"))).is_none());
        assert!(parse_time(Some(&json!("25:70"))).is_none());
    }

    #[test]
    fn test_valid_values_parse() {
        let date = parse_date(Some(&json!("2025-03-31"))).unwrap();
        assert_eq!(date.format(DATE_FORMAT).to_string(), "2025-03-31");

        let dt = parse_date_time(Some(&json!("2025-03-31T14:05"))).unwrap();
        assert_eq!(dt.format(DATE_TIME_FORMAT).to_string(), "2025-03-31T14:05");

        let dt_seconds = parse_date_time(Some(&json!("2025-03-31T14:05:09"))).unwrap();
        assert_eq!(dt_seconds.format("%S").to_string(), "09");

        let time = parse_time(Some(&json!("09:30"))).unwrap();
        assert_eq!(time.format(TIME_FORMAT).to_string(), "09:30");
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(coerce_text(None), "");
        assert_eq!(coerce_text(Some(&Value::Null)), "");
        assert_eq!(coerce_text(Some(&json!("abc"))), "abc");
        assert_eq!(coerce_text(Some(&json!(12))), "12");
    }

    #[test]
    fn test_bool_coercion() {
        assert!(!coerce_bool(None));
        assert!(!coerce_bool(Some(&Value::Null)));
        assert!(!coerce_bool(Some(&json!(false))));
        assert!(coerce_bool(Some(&json!(true))));
        assert!(!coerce_bool(Some(&json!(""))));
        assert!(coerce_bool(Some(&json!("Sim"))));
    }
}
