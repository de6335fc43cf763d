// ABOUTME: Numeric input abstraction accepting numbers or numeric form strings
// ABOUTME: Yields a finite f64 or None so callers can degrade unusable input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// A value that may be interpreted as a finite measurement
///
/// Form fields arrive as text while programmatic callers pass numbers; both
/// go through this trait so the engine applies one parsing rule.
pub trait Measurement {
    /// The value as a finite `f64`, or `None` when it is absent, unparseable, NaN or infinite
    fn finite_value(&self) -> Option<f64>;
}

impl Measurement for f64 {
    fn finite_value(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl Measurement for f32 {
    fn finite_value(&self) -> Option<f64> {
        f64::from(*self).finite_value()
    }
}

impl Measurement for u32 {
    fn finite_value(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl Measurement for i32 {
    fn finite_value(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl Measurement for i64 {
    fn finite_value(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl Measurement for str {
    fn finite_value(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()?.finite_value()
    }
}

impl Measurement for String {
    fn finite_value(&self) -> Option<f64> {
        self.as_str().finite_value()
    }
}

impl<T: Measurement + ?Sized> Measurement for &T {
    fn finite_value(&self) -> Option<f64> {
        (**self).finite_value()
    }
}

impl<T: Measurement> Measurement for Option<T> {
    fn finite_value(&self) -> Option<f64> {
        self.as_ref().and_then(Measurement::finite_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_parse_after_trimming() {
        assert_eq!(" 70.5 ".finite_value(), Some(70.5));
        assert_eq!(String::from("175").finite_value(), Some(175.0));
    }

    #[test]
    fn test_unusable_values_yield_none() {
        assert_eq!("abc".finite_value(), None);
        assert_eq!("".finite_value(), None);
        assert_eq!("NaN".finite_value(), None);
        assert_eq!("inf".finite_value(), None);
        assert_eq!(f64::NAN.finite_value(), None);
        assert_eq!(None::<f64>.finite_value(), None);
    }

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(30_u32.finite_value(), Some(30.0));
        assert_eq!((-4_i32).finite_value(), Some(-4.0));
        assert_eq!(Some(2.5_f64).finite_value(), Some(2.5));
    }
}
