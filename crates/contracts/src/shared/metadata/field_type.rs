//! Input kind of an editable field

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,      // yyyy-mm-dd
    Checkbox,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
        }
    }

    /// HTML `type` attribute of the matching `<input>`.
    pub fn input_type(&self) -> &'static str {
        self.as_str()
    }
}

impl FieldKind {
    /// Converts raw `<input>` text into the JSON value stored in the form.
    /// Blank input becomes `null` except for text fields.
    pub fn parse_input(&self, raw: &str) -> serde_json::Value {
        use serde_json::Value;

        let trimmed = raw.trim();
        match self {
            Self::Text => Value::String(raw.to_string()),
            Self::Checkbox => Value::Bool(matches!(trimmed, "true" | "on" | "1")),
            Self::Date => {
                if trimmed.is_empty() {
                    Value::Null
                } else {
                    Value::String(trimmed.to_string())
                }
            }
            Self::Number => {
                let normalized = trimmed.replace(',', ".");
                if let Ok(int) = normalized.parse::<i64>() {
                    Value::from(int)
                } else if let Ok(float) = normalized.parse::<f64>() {
                    serde_json::Number::from_f64(float)
                        .map(Value::Number)
                        .unwrap_or(Value::Null)
                } else if trimmed.is_empty() {
                    Value::Null
                } else {
                    // keep it so the DTO conversion reports the bad value
                    Value::String(trimmed.to_string())
                }
            }
        }
    }

    /// Text shown in an `<input>` for a stored form value.
    pub fn display_value(value: Option<&serde_json::Value>) -> String {
        use serde_json::Value;

        match value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_parse_input() {
        assert_eq!(FieldKind::Number.parse_input("42"), json!(42));
        assert_eq!(FieldKind::Number.parse_input("12,5"), json!(12.5));
        assert_eq!(FieldKind::Number.parse_input(" "), Value::Null);
        assert_eq!(FieldKind::Number.parse_input("abc"), json!("abc"));
        assert_eq!(FieldKind::Date.parse_input(""), Value::Null);
        assert_eq!(FieldKind::Checkbox.parse_input("true"), json!(true));
        assert_eq!(FieldKind::Text.parse_input(" x "), json!(" x "));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(FieldKind::display_value(Some(&json!(3))), "3");
        assert_eq!(FieldKind::display_value(Some(&Value::Null)), "");
        assert_eq!(FieldKind::display_value(None), "");
    }
}
