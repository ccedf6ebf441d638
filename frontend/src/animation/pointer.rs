//! Pointer-following effects: tilt, magnetic text/buttons, particle repulsion
//! and the interactive dot grid.
//!
//! They share one shape: measure the distance from the pointer to a reference
//! point and scale the perturbation by proximity. Past the falloff radius the
//! perturbation is zero.

use super::{finite_or_zero, Point, Rect};

/// `(1 - distance / radius) * strength`, or zero at or beyond `radius`.
pub fn proximity_force(distance: f64, radius: f64, strength: f64) -> f64 {
    if !(radius > 0.0) || !distance.is_finite() || distance >= radius {
        return 0.0;
    }
    finite_or_zero((1.0 - distance.max(0.0) / radius) * strength)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub lifted: bool,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt { rotate_x: 0.0, rotate_y: 0.0, lifted: false };

    pub fn style(&self) -> String {
        if self.lifted {
            format!(
                "transform: perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg) scale3d(1.02, 1.02, 1.02); transition: none;",
                self.rotate_x, self.rotate_y
            )
        } else {
            "transform: perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1); transition: all 0.5s cubic-bezier(0.4, 0, 0.2, 1);".to_string()
        }
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Tilt::NEUTRAL
    }
}

/// Card tilt towards the pointer, bounded by `max_tilt` degrees on each axis.
pub fn tilt(pointer: Point, rect: Rect, max_tilt: f64) -> Tilt {
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    if !(center_x > 0.0) || !(center_y > 0.0) {
        return Tilt::NEUTRAL;
    }
    let local = rect.local(pointer);
    if !local.is_finite() || !center_x.is_finite() || !center_y.is_finite() {
        return Tilt::NEUTRAL;
    }
    let max_tilt = finite_or_zero(max_tilt).abs();
    Tilt {
        rotate_x: (((local.y - center_y) / center_y) * max_tilt).clamp(-max_tilt, max_tilt),
        rotate_y: (((center_x - local.x) / center_x) * max_tilt).clamp(-max_tilt, max_tilt),
        lifted: true,
    }
}

/// Per-letter displacement towards the pointer for a line of `count` glyphs
/// laid out evenly across `rect`.
pub fn magnetic_offsets(pointer: Point, rect: Rect, count: usize, strength: f64, radius: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let letter_y = rect.top + rect.height / 2.0;
    (0..count)
        .map(|i| {
            let letter = Point::new(rect.left + i as f64 * rect.width / count as f64, letter_y);
            let force = proximity_force(letter.distance_to(pointer), radius, strength);
            if force == 0.0 {
                return Point::ORIGIN;
            }
            Point::new(
                finite_or_zero((pointer.x - letter.x) * force),
                finite_or_zero((pointer.y - letter.y) * force),
            )
        })
        .collect()
}

/// Button drift towards the pointer, proportional to its offset from the center.
pub fn magnetic_button_offset(pointer: Point, rect: Rect, strength: f64) -> Point {
    let center = rect.center();
    let offset = Point::new((pointer.x - center.x) * strength, (pointer.y - center.y) * strength);
    if offset.is_finite() {
        offset
    } else {
        Point::ORIGIN
    }
}

/// Push a particle directly away from the pointer.
/// The push tends to `max_push` as the pointer lands on the particle.
pub fn repulsion(pointer: Point, particle: Point, radius: f64, max_push: f64) -> Point {
    let distance = particle.distance_to(pointer);
    let force = proximity_force(distance, radius, max_push);
    if force == 0.0 {
        return Point::ORIGIN;
    }
    let angle = (particle.y - pointer.y).atan2(particle.x - pointer.x);
    Point::new(angle.cos() * force, angle.sin() * force)
}

/// Opacity and scale of a background dot at `distance` from the pointer.
pub fn dot_response(distance: f64, radius: f64) -> (f64, f64) {
    if !(radius > 0.0) || !distance.is_finite() {
        return (0.1, 0.5);
    }
    let opacity = (1.0 - distance / radius).max(0.1);
    let scale = (1.0 - distance / (radius * 2.0)).max(0.5);
    (opacity, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f64 = 100.0;

    #[test]
    fn force_vanishes_at_and_past_radius() {
        for distance in [100.0, 100.0001, 250.0, f64::INFINITY, f64::NAN] {
            assert_eq!(proximity_force(distance, RADIUS, 0.3), 0.0);
        }
        assert_eq!(proximity_force(10.0, 0.0, 0.3), 0.0);
    }

    #[test]
    fn force_peaks_near_the_reference_point() {
        assert_eq!(proximity_force(0.0, RADIUS, 0.3), 0.3);
        assert!((proximity_force(1e-9, RADIUS, 0.3) - 0.3).abs() < 1e-9);
        assert!(proximity_force(50.0, RADIUS, 0.3) < proximity_force(10.0, RADIUS, 0.3));
    }

    #[test]
    fn repulsion_magnitude_and_direction() {
        let particle = Point::new(50.0, 50.0);
        assert_eq!(repulsion(Point::new(200.0, 50.0), particle, RADIUS, 20.0), Point::ORIGIN);

        let push = repulsion(Point::new(49.999, 50.0), particle, RADIUS, 20.0);
        assert!((push.magnitude() - 20.0).abs() < 1e-3);
        assert!(push.x > 0.0, "pointer on the left pushes right");

        let exact = repulsion(particle, particle, RADIUS, 20.0);
        assert!((exact.magnitude() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn magnetic_letters_outside_falloff_stay_put() {
        let rect = Rect::new(0.0, 0.0, 500.0, 40.0);
        let offsets = magnetic_offsets(Point::new(1000.0, 1000.0), rect, 10, 0.2, RADIUS);
        assert_eq!(offsets.len(), 10);
        assert!(offsets.iter().all(|p| *p == Point::ORIGIN));
    }

    #[test]
    fn magnetic_letters_pull_towards_pointer() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let offsets = magnetic_offsets(Point::new(10.0, 30.0), rect, 10, 0.3, RADIUS);
        let first = offsets[0];
        assert!(first.x > 0.0 && first.y > 0.0);
        assert!(magnetic_offsets(Point::ORIGIN, rect, 0, 0.3, RADIUS).is_empty());
    }

    #[test]
    fn tilt_is_bounded_and_neutral_at_center() {
        let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
        let centered = tilt(rect.center(), rect, 8.0);
        assert_eq!((centered.rotate_x, centered.rotate_y), (0.0, 0.0));

        let corner = tilt(Point::new(100.0, 100.0), rect, 8.0);
        assert_eq!(corner.rotate_x, -8.0);
        assert_eq!(corner.rotate_y, 8.0);

        let outside = tilt(Point::new(-5000.0, 5000.0), rect, 8.0);
        assert_eq!(outside.rotate_x, 8.0);
        assert_eq!(outside.rotate_y, 8.0);

        assert_eq!(tilt(Point::new(1.0, 1.0), Rect::default(), 8.0), Tilt::NEUTRAL);
        assert!(Tilt::NEUTRAL.style().contains("rotateX(0deg)"));
    }

    #[test]
    fn tilt_with_unmeasurable_box_is_neutral() {
        let pointer = Point::new(10.0, 10.0);
        assert_eq!(tilt(pointer, Rect::new(f64::NAN, 0.0, 100.0, 100.0), 8.0), Tilt::NEUTRAL);
        assert_eq!(tilt(pointer, Rect::new(0.0, f64::INFINITY, 100.0, 100.0), 8.0), Tilt::NEUTRAL);
        assert_eq!(tilt(pointer, Rect::new(0.0, 0.0, f64::INFINITY, 100.0), 8.0), Tilt::NEUTRAL);
        assert_eq!(tilt(Point::new(f64::NAN, 0.0), Rect::new(0.0, 0.0, 100.0, 100.0), 8.0), Tilt::NEUTRAL);

        let skewed = tilt(pointer, Rect::new(0.0, 0.0, 100.0, 100.0), f64::NAN);
        assert!(skewed.rotate_x.is_finite() && skewed.rotate_y.is_finite());
        assert!(!skewed.style().contains("NaN"));
    }

    #[test]
    fn button_offset_scales_with_strength() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let offset = magnetic_button_offset(Point::new(60.0, 20.0), rect, 0.3);
        assert!((offset.x - 3.0).abs() < 1e-9);
        assert_eq!(offset.y, 0.0);
        assert_eq!(magnetic_button_offset(rect.center(), rect, 0.3), Point::ORIGIN);
    }

    #[test]
    fn dots_have_a_floor() {
        assert_eq!(dot_response(0.0, RADIUS), (1.0, 1.0));
        assert_eq!(dot_response(500.0, RADIUS), (0.1, 0.5));
        assert_eq!(dot_response(f64::NAN, RADIUS), (0.1, 0.5));
    }
}
