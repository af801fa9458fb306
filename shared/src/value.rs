use serde::{Deserialize, Serialize};
use std::fmt;

/// Current content of a numeric form field.
///
/// While the user is typing, the field can hold text that is not a number yet
/// (a lone `-`, an empty string). That text is kept verbatim as `Raw` so the
/// input does not fight the user mid-edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Raw(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, FieldValue::Raw(_))
    }

    /// Whether an input currently showing `text` (read by the browser as
    /// `value_as_number`) already displays this value. Numbers compare by
    /// value so `1.0` is not rewritten to `1` mid-edit.
    pub fn matches_input(&self, text: &str, value_as_number: f64) -> bool {
        match self {
            FieldValue::Number(n) => value_as_number == *n,
            FieldValue::Raw(s) => text == s,
        }
    }

    /// Position shown on the slider. Anything that is not a finite number
    /// sits at zero.
    pub fn slider_position(&self) -> f64 {
        match self {
            FieldValue::Number(n) if n.is_finite() => *n,
            _ => 0.0,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Number(0.0)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // -0 is rendered as 0 by number inputs
            FieldValue::Number(n) if *n == 0.0 => write!(f, "0"),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Raw(s) => f.write_str(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Raw(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Raw(value.to_string())
    }
}
