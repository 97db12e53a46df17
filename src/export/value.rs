//! Generic stringification of field values

use serde_json::Value;

/// Render a field value as a CSV cell.
///
/// Strings are written verbatim, numbers and booleans in their JSON text
/// form, null as an empty cell, and arrays/objects as compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stringify_scalars() {
        assert_eq!(stringify(&json!("plain text")), "plain text");
        assert_eq!(stringify(&json!(42)), "42");
        assert_eq!(stringify(&json!(-1.5)), "-1.5");
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&Value::Null), "");
    }

    #[test]
    fn test_stringify_nested() {
        assert_eq!(stringify(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(stringify(&json!({"geo": {"lat": 1}})), r#"{"geo":{"lat":1}}"#);
    }
}
