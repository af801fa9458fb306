/// Decide whether a slider movement is reported to the form.
///
/// Only truthy positions are forwarded: a drag that lands on exactly zero (or
/// yields NaN) is dropped and the field keeps its previous value.
pub fn forward_slider_value(value: f64) -> Option<f64> {
    if value == 0.0 || value.is_nan() {
        log::trace!("Ignoring slider position {}", value);
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwards_non_zero_positions() {
        assert_eq!(forward_slider_value(1.0), Some(1.0));
        assert_eq!(forward_slider_value(-2.5), Some(-2.5));
        assert_eq!(forward_slider_value(0.001), Some(0.001));
    }

    #[test]
    fn test_drops_zero_and_nan() {
        assert_eq!(forward_slider_value(0.0), None);
        assert_eq!(forward_slider_value(-0.0), None);
        assert_eq!(forward_slider_value(f64::NAN), None);
    }
}
