//! Bounded, stepped numeric range used by the digest sliders.

use crate::locale::Locale;

/// Inclusive range with a step and a fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    /// Used only when no value is supplied.
    pub default_value: u32,
}

impl StepRange {
    pub const fn new(min: u32, max: u32, step: u32, default_value: u32) -> Self {
        Self {
            min,
            max,
            step,
            default_value,
        }
    }

    /// Clamps `raw` into the range and snaps it to the nearest step from `min`.
    ///
    /// The result never exceeds `max`, even when `max - min` is not a whole
    /// number of steps.
    pub fn snap(&self, raw: i64) -> u32 {
        let min = i64::from(self.min);
        let max = i64::from(self.max);
        let step = i64::from(self.step.max(1));

        let clamped = raw.clamp(min, max);
        let steps = (clamped - min + step / 2) / step;
        let mut snapped = min + steps * step;
        if snapped > max {
            snapped -= step;
        }
        u32::try_from(snapped).unwrap_or(self.min)
    }

    /// The value the slider shows: `value` when supplied, else the default.
    pub fn value_or_default(&self, value: Option<u32>) -> u32 {
        self.snap(i64::from(value.unwrap_or(self.default_value)))
    }

    /// Parses a slider input event value (which may arrive as `"300"` or
    /// `"300.0"`) into an in-range step value.
    pub fn parse_input(&self, raw: &str) -> Option<u32> {
        let parsed = raw.trim().parse::<f64>().ok()?;
        if !parsed.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let rounded = parsed.round() as i64;
        Some(self.snap(rounded))
    }
}

/// Formats a second count as a minute label, e.g. `1 minute` or `5 minutes`.
pub fn format_minutes(locale: &Locale, seconds: u32) -> String {
    let minutes = seconds / 60;
    let unit = if minutes == 1 { "minute" } else { "minutes" };
    format!("{minutes} {}", locale.t(unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: StepRange = StepRange::new(60, 3600, 60, 300);

    #[test]
    fn snap_clamps_to_bounds() {
        assert_eq!(DIGEST.snap(0), 60);
        assert_eq!(DIGEST.snap(-500), 60);
        assert_eq!(DIGEST.snap(99_999), 3600);
    }

    #[test]
    fn snap_rounds_to_nearest_step() {
        assert_eq!(DIGEST.snap(89), 60);
        assert_eq!(DIGEST.snap(90), 120);
        assert_eq!(DIGEST.snap(301), 300);
    }

    #[test]
    fn snapped_values_are_always_in_range_and_stepped() {
        for raw in (-120..4000).step_by(7) {
            let value = DIGEST.snap(raw);
            assert!((60..=3600).contains(&value), "{raw} -> {value}");
            assert_eq!(value % 60, 0, "{raw} -> {value}");
        }
    }

    #[test]
    fn snap_never_exceeds_uneven_max() {
        let range = StepRange::new(0, 100, 30, 0);
        assert_eq!(range.snap(100), 90);
    }

    #[test]
    fn default_used_only_when_missing() {
        assert_eq!(DIGEST.value_or_default(None), 300);
        assert_eq!(DIGEST.value_or_default(Some(600)), 600);
    }

    #[test]
    fn parse_input_accepts_float_strings() {
        assert_eq!(DIGEST.parse_input("600"), Some(600));
        assert_eq!(DIGEST.parse_input("600.0"), Some(600));
        assert_eq!(DIGEST.parse_input("12345"), Some(3600));
        assert_eq!(DIGEST.parse_input("abc"), None);
        assert_eq!(DIGEST.parse_input("NaN"), None);
    }

    #[test]
    fn format_minutes_pluralizes() {
        let locale = Locale::english();
        assert_eq!(format_minutes(&locale, 60), "1 minute");
        assert_eq!(format_minutes(&locale, 300), "5 minutes");
        assert_eq!(format_minutes(&locale, 3600), "60 minutes");
    }
}
