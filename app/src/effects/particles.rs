//! Drifting particles joined by fading lines when they come close.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    /// Largest speed along either axis, in pixels per frame.
    pub max_speed: f64,
    pub radius: f64,
    /// Pairs closer than this are linked.
    pub link_distance: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 70,
            max_speed: 0.6,
            radius: 1.8,
            link_distance: 120.0,
        }
    }
}

impl ParticleConfig {
    /// Scales the particle count to the canvas area so small screens stay sparse.
    pub fn for_area(width: f64, height: f64) -> Self {
        let base = Self::default();
        let density = (width * height / 14_000.0).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = density.clamp(12.0, base.count as f64) as usize;
        Self { count, ..base }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// A line between two particles, `alpha` in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    config: ParticleConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(width: f64, height: f64, config: ParticleConfig, rng: &mut R) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let speed = config.max_speed.abs();
        let particles = (0..config.count)
            .map(|_| Particle {
                x: rng.random_range(0.0..=width),
                y: rng.random_range(0.0..=height),
                vx: rng.random_range(-speed..=speed),
                vy: rng.random_range(-speed..=speed),
            })
            .collect();
        Self {
            width,
            height,
            config,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub const fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Advances every particle by one frame, bouncing off the edges.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > width {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, width);
            }
            if p.y < 0.0 || p.y > height {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, height);
            }
        }
    }

    /// Adopts a new canvas size, pulling stray particles back inside.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, self.width);
            p.y = p.y.clamp(0.0, self.height);
        }
    }

    /// Every pair of particles within `link_distance`, fading with distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max = self.config.link_distance;
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                (distance < max).then(|| Link {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    alpha: 1.0 - distance / max,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn field(width: f64, height: f64, config: ParticleConfig) -> ParticleField {
        ParticleField::new(width, height, config, &mut SmallRng::seed_from_u64(7))
    }

    fn assert_inside(field: &ParticleField) {
        let (w, h) = field.size();
        for p in field.particles() {
            assert!((0.0..=w).contains(&p.x), "x {} outside 0..={w}", p.x);
            assert!((0.0..=h).contains(&p.y), "y {} outside 0..={h}", p.y);
        }
    }

    #[test]
    fn test_new_scatters_requested_count_inside() {
        let config = ParticleConfig::default();
        let field = field(800.0, 600.0, config);
        assert_eq!(field.particles().len(), config.count);
        assert_inside(&field);
        for p in field.particles() {
            assert!(p.vx.abs() <= config.max_speed);
            assert!(p.vy.abs() <= config.max_speed);
        }
    }

    #[test]
    fn test_particles_stay_inside_after_many_steps() {
        let config = ParticleConfig {
            max_speed: 25.0,
            ..ParticleConfig::default()
        };
        let mut field = field(300.0, 200.0, config);
        for _ in 0..1_000 {
            field.step();
        }
        assert_inside(&field);
    }

    #[test]
    fn test_step_bounces_off_edge() {
        let mut field = field(100.0, 100.0, ParticleConfig { count: 0, ..ParticleConfig::default() });
        field.particles.push(Particle { x: 99.5, y: 50.0, vx: 2.0, vy: 0.0 });
        field.step();
        let p = field.particles()[0];
        assert_eq!(p.x, 100.0);
        assert_eq!(p.vx, -2.0);
        field.step();
        assert_eq!(field.particles()[0].x, 98.0);
    }

    #[test]
    fn test_links_only_for_close_pairs() {
        let mut field = field(500.0, 500.0, ParticleConfig { count: 0, link_distance: 100.0, ..ParticleConfig::default() });
        field.particles = vec![
            Particle { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0 },
            Particle { x: 30.0, y: 40.0, vx: 0.0, vy: 0.0 },
            Particle { x: 400.0, y: 400.0, vx: 0.0, vy: 0.0 },
        ];
        let links: Vec<_> = field.links().collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, (0.0, 0.0));
        assert_eq!(links[0].to, (30.0, 40.0));
        assert!((links[0].alpha - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_link_alpha_in_range() {
        let field = field(400.0, 400.0, ParticleConfig::default());
        for link in field.links() {
            assert!(link.alpha > 0.0 && link.alpha <= 1.0);
        }
    }

    #[test]
    fn test_resize_clamps() {
        let mut field = field(1000.0, 1000.0, ParticleConfig::default());
        field.resize(50.0, 40.0);
        assert_eq!(field.size(), (50.0, 40.0));
        assert_inside(&field);
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        let mut field = field(0.0, 0.0, ParticleConfig { max_speed: 0.0, ..ParticleConfig::default() });
        field.step();
        assert_inside(&field);
    }

    #[test]
    fn test_density_scaling() {
        assert_eq!(ParticleConfig::for_area(320.0, 200.0).count, 12);
        assert_eq!(ParticleConfig::for_area(4000.0, 3000.0).count, ParticleConfig::default().count);
    }
}
