use super::{finite_or_zero, Point};

/// Percentage of the page scrolled, in `[0, 100]`.
///
/// Returns `0` when the document is not taller than the viewport.
pub fn page_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// How far an element has travelled through the viewport, in `[0, 1]`.
///
/// `0` while it is still below the fold, `1` once it has left through the top.
pub fn element_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + height;
    if !(span > 0.0) || !top.is_finite() {
        return 0.0;
    }
    finite_or_zero((viewport_height - top) / span).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParallaxDirection {
    /// Moves against the scroll, the element drifts upwards.
    Up,
    /// Moves with the scroll.
    #[default]
    Down,
    Left,
    Right,
}

pub fn parallax_offset(scroll_y: f64, speed: f64, direction: ParallaxDirection) -> Point {
    let movement = finite_or_zero(scroll_y * speed);
    match direction {
        ParallaxDirection::Up => Point::new(0.0, -movement),
        ParallaxDirection::Down => Point::new(0.0, movement),
        ParallaxDirection::Left => Point::new(-movement, 0.0),
        ParallaxDirection::Right => Point::new(movement, 0.0),
    }
}

pub fn parallax_style(offset: Point) -> String {
    format!(
        "transform: translate3d({}px, {}px, 0); will-change: transform;",
        finite_or_zero(offset.x),
        finite_or_zero(offset.y)
    )
}

/// Circle geometry for a ring of outer size `size` drawn with `stroke_width`.
pub fn ring_geometry(size: f64, stroke_width: f64) -> (f64, f64) {
    let radius = ((size - stroke_width) / 2.0).max(0.0);
    (radius, radius * 2.0 * std::f64::consts::PI)
}

/// `stroke-dashoffset` that draws `progress` percent of the ring.
pub fn ring_dash_offset(progress: f64, circumference: f64) -> f64 {
    let circumference = finite_or_zero(circumference);
    let progress = finite_or_zero(progress).clamp(0.0, 100.0);
    circumference - progress / 100.0 * circumference
}

/// Background that drifts and warms up as the section scrolls through view.
pub fn morph_style(progress: f64) -> String {
    let p = finite_or_zero(progress).clamp(0.0, 1.0);
    let pct = p * 100.0;
    format!(
        "background: radial-gradient(ellipse at {:.1}% {:.1}%, rgba(239, 68, 68, {:.3}) 0%, transparent 50%), \
         radial-gradient(ellipse at {:.1}% {:.1}%, rgba(220, 38, 38, {:.3}) 0%, transparent 50%); \
         border-radius: {:.1}px; transform: scale({:.4});",
        50.0 + pct * 0.5,
        50.0 + pct * 0.3,
        0.1 + p * 0.1,
        50.0 - pct * 0.3,
        50.0 - pct * 0.5,
        0.08 + p * 0.1,
        20.0 + p * 30.0,
        1.0 + p * 0.05,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_at_top_and_bottom() {
        assert_eq!(page_progress(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(page_progress(1200.0, 2000.0, 800.0), 100.0);
        assert_eq!(page_progress(600.0, 2000.0, 800.0), 50.0);
        assert_eq!(page_progress(5000.0, 2000.0, 800.0), 100.0);
    }

    #[test]
    fn progress_without_scrollable_height_is_zero() {
        assert_eq!(page_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(page_progress(300.0, 800.0, 800.0), 0.0);
        assert_eq!(page_progress(300.0, 500.0, 800.0), 0.0);
        assert_eq!(page_progress(f64::NAN, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_bounded_and_monotone() {
        let mut last = 0.0;
        for step in 0..=120 {
            let value = page_progress(step as f64 * 10.0, 2000.0, 800.0);
            assert!((0.0..=100.0).contains(&value));
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn element_progress_through_viewport() {
        assert_eq!(element_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(element_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(element_progress(200.0, 400.0, 800.0), 0.5);
        assert_eq!(element_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn element_progress_with_non_finite_viewport() {
        assert_eq!(element_progress(0.0, 100.0, f64::INFINITY), 0.0);
        assert_eq!(element_progress(0.0, f64::INFINITY, 800.0), 0.0);
        assert_eq!(element_progress(0.0, 100.0, f64::NAN), 0.0);
    }

    #[test]
    fn parallax_axis_and_sign() {
        assert_eq!(parallax_offset(100.0, 0.5, ParallaxDirection::Up), Point::new(0.0, -50.0));
        assert_eq!(parallax_offset(100.0, 0.5, ParallaxDirection::Down), Point::new(0.0, 50.0));
        assert_eq!(parallax_offset(100.0, 0.3, ParallaxDirection::Left).y, 0.0);
        assert_eq!(parallax_offset(f64::INFINITY, 0.3, ParallaxDirection::Right), Point::ORIGIN);
    }

    #[test]
    fn ring_offsets() {
        let (radius, circumference) = ring_geometry(60.0, 4.0);
        assert_eq!(radius, 28.0);
        assert_eq!(ring_dash_offset(0.0, circumference), circumference);
        assert_eq!(ring_dash_offset(100.0, circumference), 0.0);
        assert_eq!(ring_dash_offset(f64::NAN, circumference), circumference);
        assert_eq!(ring_dash_offset(50.0, f64::NAN), 0.0);
        assert_eq!(ring_dash_offset(50.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn morph_style_is_renderable() {
        let style = morph_style(f64::NAN);
        assert!(style.contains("border-radius: 20.0px"));
        assert!(!style.contains("NaN"));
    }
}
