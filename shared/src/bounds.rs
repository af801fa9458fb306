use crate::value::FieldValue;

/// Default increment of a numeric field.
pub const DEFAULT_STEP: f64 = 1.0;

/// Range properties of a numeric field, as declared on the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberConstraints {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
    pub step: f64,
    pub is_integer: bool,
}

impl Default for NumberConstraints {
    fn default() -> Self {
        Self {
            minimum: None,
            maximum: None,
            exclusive_minimum: None,
            exclusive_maximum: None,
            step: DEFAULT_STEP,
            is_integer: false,
        }
    }
}

/// Inclusive bounds of a numeric field.
///
/// Exclusive bounds are turned into inclusive ones by moving them one step
/// inwards. An exclusive bound wins over its inclusive counterpart when both
/// are set. `min <= max` is not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericBounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn derive(constraints: &NumberConstraints) -> Self {
        let step = constraints.step;
        let min = match constraints.exclusive_minimum {
            Some(exclusive) => Some(exclusive + step),
            None => constraints.minimum,
        };
        let max = match constraints.exclusive_maximum {
            Some(exclusive) => Some(exclusive - step),
            None => constraints.maximum,
        };
        Self { min, max }
    }

    /// The slider is only shown for a closed range.
    pub fn has_slider(&self) -> bool {
        self.min.is_some() && self.max.is_some()
    }

    /// Pull `value` into range. The upper bound is applied first.
    pub fn clamp(&self, value: f64) -> f64 {
        let mut value = value;
        if let Some(max) = self.max {
            if value > max {
                value = max;
            }
        }
        if let Some(min) = self.min {
            if value < min {
                value = min;
            }
        }
        value
    }

    /// Turn an edit of the number field into the value to hand to the form.
    ///
    /// `value_as_number` is the browser's numeric reading of `raw`; it is NaN
    /// while the text is not a number, in which case `raw` is passed on as is.
    pub fn resolve(&self, raw: &str, value_as_number: f64, is_integer: bool) -> FieldValue {
        if !value_as_number.is_finite() {
            log::trace!("Passing through non-numeric input {:?}", raw);
            return FieldValue::Raw(raw.to_string());
        }

        let value = if is_integer {
            value_as_number.floor()
        } else {
            value_as_number
        };

        let clamped = self.clamp(value);
        if clamped != value {
            log::debug!("Clamped {} to {} (bounds {:?}..{:?})", value, clamped, self.min, self.max);
        }
        FieldValue::Number(clamped)
    }

    /// Same as [`NumericBounds::resolve`], reading the number from the text.
    pub fn resolve_text(&self, raw: &str, is_integer: bool) -> FieldValue {
        let value = parse_number(raw).unwrap_or(f64::NAN);
        self.resolve(raw, value, is_integer)
    }
}

/// Parse text the way a number input reads it: an optional `-`, digits with
/// an optional fraction, and an optional exponent. Everything else (empty
/// text, a lone sign, `+1`, `inf`, surrounding whitespace) is not a number.
pub fn parse_number(text: &str) -> Option<f64> {
    let mantissa_end = text.find(['e', 'E']).unwrap_or(text.len());
    let (mantissa, exponent) = text.split_at(mantissa_end);

    let digits = mantissa.strip_prefix('-').unwrap_or(mantissa);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) {
        return None;
    }
    match frac_part {
        Some(frac) if frac.is_empty() || !all_digits(frac) => return None,
        None if int_part.is_empty() => return None,
        _ => {}
    }

    if !exponent.is_empty() {
        let exp_digits = &exponent[1..];
        let exp_digits = exp_digits
            .strip_prefix(['+', '-'])
            .unwrap_or(exp_digits);
        if exp_digits.is_empty() || !all_digits(exp_digits) {
            return None;
        }
    }

    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(min: f64, max: f64) -> NumericBounds {
        NumericBounds::new(Some(min), Some(max))
    }

    #[test]
    fn test_derive_inclusive() {
        let bounds = NumericBounds::derive(&NumberConstraints {
            minimum: Some(1.0),
            maximum: Some(20.0),
            ..Default::default()
        });
        assert_eq!(bounds, closed(1.0, 20.0));
    }

    #[test]
    fn test_derive_exclusive_offsets_one_step() {
        let bounds = NumericBounds::derive(&NumberConstraints {
            exclusive_minimum: Some(5.0),
            exclusive_maximum: Some(10.0),
            ..Default::default()
        });
        assert_eq!(bounds, closed(6.0, 9.0));

        let bounds = NumericBounds::derive(&NumberConstraints {
            exclusive_minimum: Some(0.0),
            exclusive_maximum: Some(1.0),
            step: 0.25,
            ..Default::default()
        });
        assert_eq!(bounds, closed(0.25, 0.75));
    }

    #[test]
    fn test_derive_exclusive_wins() {
        let bounds = NumericBounds::derive(&NumberConstraints {
            minimum: Some(0.0),
            exclusive_minimum: Some(5.0),
            maximum: Some(100.0),
            exclusive_maximum: Some(10.0),
            ..Default::default()
        });
        assert_eq!(bounds, closed(6.0, 9.0));
    }

    #[test]
    fn test_has_slider() {
        assert!(!NumericBounds::derive(&NumberConstraints::default()).has_slider());
        assert!(!NumericBounds::new(Some(0.0), None).has_slider());
        assert!(!NumericBounds::new(None, Some(0.0)).has_slider());
        assert!(closed(0.0, 1.0).has_slider());
    }

    #[test]
    fn test_clamp() {
        let bounds = closed(0.0, 10.0);
        assert_eq!(bounds.clamp(5.0), 5.0);
        assert_eq!(bounds.clamp(0.0), 0.0);
        assert_eq!(bounds.clamp(10.0), 10.0);
        assert_eq!(bounds.clamp(11.0), 10.0);
        assert_eq!(bounds.clamp(-3.0), 0.0);

        let open = NumericBounds::default();
        assert_eq!(open.clamp(-1e9), -1e9);
        assert_eq!(NumericBounds::new(Some(2.0), None).clamp(1.0), 2.0);
        assert_eq!(NumericBounds::new(None, Some(2.0)).clamp(3.0), 2.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_applies_max_then_min() {
        // min > max is not rejected; the lower bound has the last word
        let bounds = closed(10.0, 5.0);
        assert_eq!(bounds.clamp(7.0), 10.0);
        assert_eq!(bounds.clamp(20.0), 10.0);
    }

    #[test]
    fn test_resolve_in_range_is_unchanged() {
        let bounds = closed(-5.0, 5.0);
        for v in [-5.0, -2.5, 0.0, 1.0, 4.75, 5.0] {
            assert_eq!(bounds.resolve(&v.to_string(), v, false), FieldValue::Number(v));
        }
    }

    #[test]
    fn test_resolve_clamps() {
        let bounds = closed(6.0, 9.0);
        assert_eq!(bounds.resolve("42", 42.0, false), FieldValue::Number(9.0));
        assert_eq!(bounds.resolve("1", 1.0, false), FieldValue::Number(6.0));
    }

    #[test]
    fn test_resolve_integer_floors() {
        let bounds = NumericBounds::default();
        assert_eq!(bounds.resolve("3.7", 3.7, true), FieldValue::Number(3.0));
        assert_eq!(bounds.resolve("-3.2", -3.2, true), FieldValue::Number(-4.0));
        assert_eq!(bounds.resolve("3.7", 3.7, false), FieldValue::Number(3.7));
    }

    #[test]
    fn test_resolve_integer_then_clamp() {
        let bounds = closed(4.0, 8.0);
        assert_eq!(bounds.resolve("3.9", 3.9, true), FieldValue::Number(4.0));
        assert_eq!(bounds.resolve("8.9", 8.9, true), FieldValue::Number(8.0));
    }

    #[test]
    fn test_resolve_passes_raw_text_through() {
        let bounds = closed(0.0, 10.0);
        assert_eq!(bounds.resolve("-", f64::NAN, false), FieldValue::Raw("-".to_string()));
        assert_eq!(bounds.resolve("", f64::NAN, true), FieldValue::Raw(String::new()));
    }

    #[test]
    fn test_resolve_text() {
        let bounds = closed(0.0, 10.0);
        assert_eq!(bounds.resolve_text("4", false), FieldValue::Number(4.0));
        assert_eq!(bounds.resolve_text("12", false), FieldValue::Number(10.0));
        assert_eq!(bounds.resolve_text("-", false), FieldValue::Raw("-".to_string()));
        assert_eq!(bounds.resolve_text("abc", false), FieldValue::Raw("abc".to_string()));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number("-12"), Some(-12.0));
        assert_eq!(parse_number("3.25"), Some(3.25));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2.5E-1"), Some(0.25));

        for text in ["", "-", "+1", "1.", ".", "inf", "NaN", " 1", "1 ", "1e", "1e+", "--1", "1-", "0x10", "1e999"] {
            assert_eq!(parse_number(text), None, "{:?} should not parse", text);
        }
    }
}
