use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::Point;

/// One floating particle, positioned in percent of its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x_pct: f64,
    pub y_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Particle {
    /// Particle center in container pixels.
    pub fn position_in(&self, width: f64, height: f64) -> Point {
        Point::new(self.x_pct / 100.0 * width, self.y_pct / 100.0 * height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleLayout {
    pub particles: Vec<Particle>,
}

impl ParticleLayout {
    /// Deterministic for a given seed, so tests and re-renders agree.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                x_pct: rng.gen_range(0.0..100.0),
                y_pct: rng.gen_range(0.0..100.0),
                size_px: rng.gen_range(2.0..6.0),
                delay_s: rng.gen_range(0.0..5.0),
                duration_s: rng.gen_range(10.0..20.0),
            })
            .collect();
        Self { particles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(ParticleLayout::generate(60, 7), ParticleLayout::generate(60, 7));
        assert_ne!(ParticleLayout::generate(60, 7), ParticleLayout::generate(60, 8));
    }

    #[test]
    fn particles_stay_inside_the_container() {
        let layout = ParticleLayout::generate(200, 42);
        assert_eq!(layout.particles.len(), 200);
        for p in &layout.particles {
            assert!((0.0..100.0).contains(&p.x_pct));
            assert!((0.0..100.0).contains(&p.y_pct));
            assert!((2.0..6.0).contains(&p.size_px));
        }
    }

    #[test]
    fn percent_to_pixels() {
        let p = Particle { x_pct: 50.0, y_pct: 25.0, size_px: 2.0, delay_s: 0.0, duration_s: 10.0 };
        assert_eq!(p.position_in(400.0, 200.0), Point::new(200.0, 50.0));
    }
}
