use crate::caller::Caller;
use crate::level::Level;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

/// Structured key-value data attached to a record.
///
/// A `BTreeMap`, so fields always render sorted by key.
///
/// JSON has no NaN or infinities: `fields!` (like `serde_json::json!`) turns
/// those into `null`. Wrap floats that may be non-finite in [`float_value`].
pub type Fields = BTreeMap<String, serde_json::Value>;

/// One log event, assembled per `write` call and consumed by the formatter.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
    pub fields: Fields,
    pub caller: Caller,
}

impl LogRecord {
    /// Build a record stamped with the current local time.
    pub fn now(level: Level, message: impl Into<String>, fields: Fields, caller: Caller) -> Self {
        LogRecord {
            timestamp: Local::now(),
            level,
            message: message.into(),
            fields,
            caller,
        }
    }
}

/// Field value for a float. Finite values become JSON numbers; NaN and the
/// infinities keep their text (`NaN`, `inf`, `-inf`).
pub fn float_value(value: f64) -> serde_json::Value {
    serde_json::Number::from_f64(value)
        .map(serde_json::Value::Number)
        .unwrap_or_else(|| serde_json::Value::String(value.to_string()))
}

/// Default textual form of a field value: strings bare, everything else as
/// its JSON text.
pub fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build a [`Fields`] map from `key => value` pairs.
///
/// ```
/// use console_log_provider::fields;
///
/// let fields = fields! { "user_id" => 123, "role" => "admin" };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::record::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::record::Fields::new();
        $(
            fields.insert(::std::string::String::from($key), $crate::serde_json::json!($value));
        )+
        fields
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_render_without_quotes() {
        assert_eq!(render_value(&json!("alice")), "alice");
    }

    #[test]
    fn non_strings_render_as_json_text() {
        assert_eq!(render_value(&json!(123)), "123");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(null)), "null");
        assert_eq!(render_value(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn non_finite_floats_keep_their_text() {
        assert_eq!(render_value(&float_value(f64::NAN)), "NaN");
        assert_eq!(render_value(&float_value(f64::INFINITY)), "inf");
        assert_eq!(render_value(&float_value(f64::NEG_INFINITY)), "-inf");
        assert_eq!(float_value(0.25), json!(0.25));

        let fields = fields! { "latency" => float_value(f64::INFINITY) };
        assert_eq!(render_value(&fields["latency"]), "inf");
    }

    #[test]
    fn fields_macro_collects_pairs() {
        let fields = fields! { "b" => 2, "a" => "x" };
        let keys: Vec<_> = fields.keys().cloned().collect();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(fields["b"], json!(2));
        assert!(fields!().is_empty());
    }
}
