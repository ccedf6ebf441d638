/// Easing curves used by counters and interpolated poses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    OutCubic,
    OutQuart,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Easing::Linear => t,
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::OutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Nearest,
    Floor,
}

/// Fraction of a tween that has elapsed, clamped to `[0, 1]`.
/// A non-positive duration means the tween is already finished.
pub fn tween_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if !(duration_ms > 0.0) {
        return 1.0;
    }
    if !elapsed_ms.is_finite() {
        return 0.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Displayed value of a count-up animation at `progress`.
/// At `progress >= 1` this is exactly `end`, whatever the rounding.
pub fn counter_value(start: i64, end: i64, progress: f64, easing: Easing, rounding: Rounding) -> i64 {
    if progress >= 1.0 {
        return end;
    }
    let eased = easing.apply(progress);
    let raw = start as f64 + (end - start) as f64 * eased;
    match rounding {
        Rounding::Nearest => raw.round() as i64,
        Rounding::Floor => raw.floor() as i64,
    }
}

/// `1234567` -> `"1,234,567"`, matching `toLocaleString()` for en-US.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_hit_endpoints() {
        for easing in [Easing::Linear, Easing::OutCubic, Easing::OutQuart] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(f64::NAN), 0.0);
        }
        assert!(Easing::OutQuart.apply(0.5) > Easing::OutCubic.apply(0.5));
    }

    #[test]
    fn zero_duration_tween_is_complete() {
        assert_eq!(tween_progress(0.0, 0.0), 1.0);
        assert_eq!(tween_progress(400.0, 800.0), 0.5);
        assert_eq!(tween_progress(5000.0, 800.0), 1.0);
    }

    #[test]
    fn counter_lands_exactly_on_end() {
        assert_eq!(counter_value(0, 150, 1.0, Easing::OutQuart, Rounding::Floor), 150);
        assert_eq!(counter_value(0, 150, 0.0, Easing::OutQuart, Rounding::Floor), 0);
        let mid = counter_value(0, 100, 0.5, Easing::OutCubic, Rounding::Nearest);
        assert_eq!(mid, 88);
    }

    #[test]
    fn counter_is_monotone_over_time() {
        let mut last = 0;
        for step in 0..=20 {
            let value = counter_value(0, 300, step as f64 / 20.0, Easing::OutQuart, Rounding::Floor);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-4500), "-4,500");
    }
}
