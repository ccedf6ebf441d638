//! Scroll-reveal poses.
//!
//! A reveal moves an element from a hidden pose (offset, transparent) to the
//! resting pose (identity, opaque) the first time it becomes visible. The CSS
//! transition does the tweening in the browser; `Reveal::pose_at` gives the
//! same curve in Rust for the places that need the intermediate value.

use super::easing::Easing;
use super::finite_or_zero;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Fade,
    Scale,
    Rotate,
}

/// Whether a reveal latches on first sight or follows visibility both ways.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Trigger {
    #[default]
    Once,
    Continuous,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
}

impl Pose {
    pub const RESTING: Pose = Pose {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
        opacity: 1.0,
    };

    pub fn lerp(from: Pose, to: Pose, t: f64) -> Pose {
        let t = finite_or_zero(t).clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            translate_x: mix(from.translate_x, to.translate_x),
            translate_y: mix(from.translate_y, to.translate_y),
            scale: mix(from.scale, to.scale),
            rotate_deg: mix(from.rotate_deg, to.rotate_deg),
            opacity: mix(from.opacity, to.opacity),
        }
    }

    /// CSS `transform` for this pose. Translation is always spelled out so the
    /// resting pose reads `translateX(0) translateY(0)`.
    pub fn transform_css(&self) -> String {
        let mut parts = vec![
            format!("translateX({})", css_length(self.translate_x)),
            format!("translateY({})", css_length(self.translate_y)),
        ];
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate_deg != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate_deg));
        }
        parts.join(" ")
    }
}

fn css_length(px: f64) -> String {
    if px == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", px)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::RESTING
    }
}

pub fn hidden_pose(direction: Direction, distance: f64) -> Pose {
    let distance = finite_or_zero(distance);
    let base = Pose { opacity: 0.0, ..Pose::RESTING };
    match direction {
        Direction::Up => Pose { translate_y: distance, ..base },
        Direction::Down => Pose { translate_y: -distance, ..base },
        Direction::Left => Pose { translate_x: distance, ..base },
        Direction::Right => Pose { translate_x: -distance, ..base },
        Direction::Fade => base,
        Direction::Scale => Pose { scale: 0.8, ..base },
        Direction::Rotate => Pose { rotate_deg: 180.0, ..base },
    }
}

/// Visibility latch shared by every reveal variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RevealLatch {
    trigger: Trigger,
    shown: bool,
}

impl RevealLatch {
    pub fn new(trigger: Trigger) -> Self {
        Self { trigger, shown: false }
    }

    /// Start over with `trigger` if it differs from the current one.
    pub fn retarget(&mut self, trigger: Trigger) {
        if self.trigger != trigger {
            *self = Self::new(trigger);
        }
    }

    /// Feed the latest visibility sample; returns whether to show the resting pose.
    pub fn observe(&mut self, visible: bool) -> bool {
        self.shown = match self.trigger {
            Trigger::Once => self.shown || visible,
            Trigger::Continuous => visible,
        };
        self.shown
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub direction: Direction,
    pub distance: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Reveal {
    pub fn hidden(&self) -> Pose {
        hidden_pose(self.direction, self.distance)
    }

    pub fn pose(&self, shown: bool) -> Pose {
        if shown {
            Pose::RESTING
        } else {
            self.hidden()
        }
    }

    /// Inline style for the current state; the browser transitions between states.
    pub fn style(&self, shown: bool) -> String {
        let pose = self.pose(shown);
        format!(
            "transform: {}; opacity: {}; transition-property: transform, opacity; transition-timing-function: ease-out; transition-duration: {}s; transition-delay: {}s;",
            pose.transform_css(),
            pose.opacity,
            finite_or_zero(self.duration_s).max(0.0),
            finite_or_zero(self.delay_s).max(0.0),
        )
    }

    /// Pose `elapsed_s` seconds after the element became visible.
    pub fn pose_at(&self, elapsed_s: f64) -> Pose {
        let delay = finite_or_zero(self.delay_s).max(0.0);
        let duration = finite_or_zero(self.duration_s).max(0.0);
        let since_start = finite_or_zero(elapsed_s) - delay;
        if since_start <= 0.0 {
            return self.hidden();
        }
        if duration == 0.0 || since_start >= duration {
            return Pose::RESTING;
        }
        Pose::lerp(self.hidden(), Pose::RESTING, Easing::OutCubic.apply(since_start / duration))
    }
}

/// Transition delay of the `index`-th item in a staggered group.
pub fn stagger_delay(base_s: f64, index: usize, step_s: f64) -> f64 {
    finite_or_zero(base_s) + index as f64 * finite_or_zero(step_s)
}

/// Non-breaking space for blank glyphs so per-character spans keep their width.
pub fn glyph(ch: char) -> String {
    if ch == ' ' {
        '\u{a0}'.to_string()
    } else {
        ch.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 7] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Fade,
        Direction::Scale,
        Direction::Rotate,
    ];

    #[test]
    fn hidden_pose_only_moves_along_its_axis() {
        for direction in ALL {
            let hidden = hidden_pose(direction, 60.0);
            let rest = Pose::RESTING;
            assert_eq!(hidden.opacity, 0.0);
            let moved_x = hidden.translate_x != rest.translate_x;
            let moved_y = hidden.translate_y != rest.translate_y;
            let scaled = hidden.scale != rest.scale;
            let rotated = hidden.rotate_deg != rest.rotate_deg;
            let expected = match direction {
                Direction::Up | Direction::Down => (false, true, false, false),
                Direction::Left | Direction::Right => (true, false, false, false),
                Direction::Fade => (false, false, false, false),
                Direction::Scale => (false, false, true, false),
                Direction::Rotate => (false, false, false, true),
            };
            assert_eq!((moved_x, moved_y, scaled, rotated), expected, "{direction:?}");
        }
    }

    #[test]
    fn opposite_directions_have_opposite_signs() {
        assert_eq!(hidden_pose(Direction::Up, 40.0).translate_y, 40.0);
        assert_eq!(hidden_pose(Direction::Down, 40.0).translate_y, -40.0);
        assert_eq!(hidden_pose(Direction::Left, 40.0).translate_x, 40.0);
        assert_eq!(hidden_pose(Direction::Right, 40.0).translate_x, -40.0);
    }

    #[test]
    fn once_latch_never_reverts() {
        let mut latch = RevealLatch::new(Trigger::Once);
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        for visible in [true, false, false, true, false] {
            assert!(latch.observe(visible));
        }
    }

    #[test]
    fn continuous_latch_tracks_visibility() {
        let mut latch = RevealLatch::new(Trigger::Continuous);
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
    }

    #[test]
    fn retargeted_latch_follows_the_new_trigger() {
        let mut latch = RevealLatch::new(Trigger::Once);
        assert!(latch.observe(true));
        latch.retarget(Trigger::Once);
        assert!(latch.observe(false), "same trigger keeps the latched state");

        latch.retarget(Trigger::Continuous);
        assert!(!latch.observe(false));
        assert!(latch.observe(true));

        latch.retarget(Trigger::Once);
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.observe(false));
    }

    #[test]
    fn visible_at_mount_reaches_rest_immediately() {
        let mut latch = RevealLatch::new(Trigger::Once);
        let reveal = Reveal { direction: Direction::Left, distance: 60.0, duration_s: 0.6, delay_s: 0.0 };
        assert_eq!(reveal.pose(latch.observe(true)), Pose::RESTING);
    }

    #[test]
    fn reveal_up_sequence() {
        let reveal = Reveal { direction: Direction::Up, distance: 60.0, duration_s: 0.6, delay_s: 0.0 };
        assert_eq!(reveal.hidden().transform_css(), "translateX(0) translateY(60px)");
        assert_eq!(reveal.pose_at(0.0).opacity, 0.0);

        let mut last = reveal.pose_at(0.0);
        for step in 1..=12 {
            let pose = reveal.pose_at(step as f64 * 0.05);
            assert!(pose.opacity >= last.opacity);
            assert!(pose.translate_y <= last.translate_y);
            last = pose;
        }
        assert_eq!(reveal.pose_at(0.6), Pose::RESTING);
        assert_eq!(reveal.pose_at(5.0), Pose::RESTING);

        let style = reveal.style(true);
        assert!(style.contains("transform: translateX(0) translateY(0);"));
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("transition-duration: 0.6s"));
    }

    #[test]
    fn delay_holds_the_hidden_pose() {
        let reveal = Reveal { direction: Direction::Scale, distance: 0.0, duration_s: 0.8, delay_s: 0.3 };
        assert_eq!(reveal.pose_at(0.2), reveal.hidden());
        assert_eq!(reveal.hidden().transform_css(), "translateX(0) translateY(0) scale(0.8)");
    }

    #[test]
    fn non_finite_inputs_stay_renderable() {
        let reveal = Reveal { direction: Direction::Up, distance: f64::NAN, duration_s: f64::INFINITY, delay_s: f64::NAN };
        let style = reveal.style(false);
        assert!(!style.contains("NaN"));
        assert!(!style.contains("inf"));
    }

    #[test]
    fn staggered_delays() {
        assert_eq!(stagger_delay(0.0, 0, 0.1), 0.0);
        assert!((stagger_delay(0.2, 3, 0.1) - 0.5).abs() < 1e-9);
        assert_eq!(glyph(' '), "\u{a0}");
    }
}
