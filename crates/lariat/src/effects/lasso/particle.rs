//! A single mote of dust kicked up by the cursor

use glam::Vec2;
use rand::Rng as _;

use crate::surface::Colour;

/// Flat, warm daylight dust.
const DAY_FILL: Colour = (0.78, 0.63, 0.47, 0.8);
/// Firelit night dust.
const NIGHT_FILL: Colour = (1.0, 0.78, 0.47, 0.9);
/// The halo around firelit night dust.
const NIGHT_GLOW: Colour = (1.0, 0.71, 0.35, 0.9);

/// How far beyond its disc a night mote's halo reaches, in pixels.
pub const HALO_REACH: f32 = 2.0;

/// The ambient palette a mote was born under. A mote keeps its shade for its whole life, even
/// when the ambient mode changes underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// Daylight: flat discs, no glow.
    Day,
    /// Night: brighter discs with a flickering halo.
    Night,
}

/// A single decaying dust mote.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Position in surface pixels.
    pub position: Vec2,
    /// Drift in pixels per frame. Fixed at spawn, no gravity or acceleration.
    pub velocity: Vec2,
    /// Disc radius in pixels, fixed at spawn.
    pub size: f32,
    /// Remaining life in (0, 1]. Doubles as the mote's opacity.
    pub life: f32,
    /// How much life is lost per frame. Fixed at spawn so lifespans vary.
    pub decay: f32,
    /// Ambient palette snapshot taken at spawn.
    pub shade: Shade,
}

impl Particle {
    /// Sample a new mote around the given origin. The offset is uniform per-axis within
    /// ±`jitter`, so the mote lands somewhere in a square centred on the origin.
    pub fn spawn(origin: Vec2, jitter: f32, config: &super::config::Config, shade: Shade) -> Self {
        let mut rng = rand::thread_rng();

        let mut position = origin;
        if jitter > 0.0 {
            position.x += rng.gen_range(-jitter..jitter);
            position.y += rng.gen_range(-jitter..jitter);
        }

        let speed = config.particle_speed;
        let velocity = if speed > 0.0 {
            Vec2::new(rng.gen_range(-speed..speed), rng.gen_range(-speed..speed))
        } else {
            Vec2::ZERO
        };

        let (size_min, size_max) = config.particle_size_range;
        let (decay_min, decay_max) = config.decay_range;

        Self {
            position,
            velocity,
            size: rng.gen_range(size_min..=size_max),
            life: 1.0,
            decay: rng.gen_range(decay_min..=decay_max),
            shade,
        }
    }

    /// Advance the mote by one frame. Returns false once it has expired, life exactly 0
    /// included.
    pub fn advance(&mut self) -> bool {
        self.position += self.velocity;
        self.life -= self.decay;
        self.life > 0.0
    }

    /// The disc colour, faded by the remaining life.
    #[must_use]
    pub fn fill(&self) -> Colour {
        let base = match self.shade {
            Shade::Day => DAY_FILL,
            Shade::Night => NIGHT_FILL,
        };
        (base.0, base.1, base.2, base.3 * self.life)
    }

    /// The halo colour for night motes, scaled by the fire-glow flicker. Day motes render flat
    /// and have no halo.
    #[must_use]
    pub fn halo(&self, flicker: f32) -> Option<Colour> {
        match self.shade {
            Shade::Day => None,
            Shade::Night => Some((
                NIGHT_GLOW.0,
                NIGHT_GLOW.1,
                NIGHT_GLOW.2,
                NIGHT_GLOW.3 * self.life * flicker,
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config() -> crate::effects::lasso::config::Config {
        crate::effects::lasso::config::Config::default()
    }

    #[test]
    fn spawn_samples_within_the_configured_ranges() {
        let config = config();
        for _ in 0_usize..100 {
            let particle = Particle::spawn(Vec2::new(10.0, 20.0), 0.0, &config, Shade::Day);
            assert_eq!(particle.position, Vec2::new(10.0, 20.0));
            assert!((particle.life - 1.0).abs() < f32::EPSILON);
            assert!(particle.size >= config.particle_size_range.0);
            assert!(particle.size <= config.particle_size_range.1);
            assert!(particle.decay >= config.decay_range.0);
            assert!(particle.decay <= config.decay_range.1);
            assert!(particle.velocity.x.abs() <= config.particle_speed);
            assert!(particle.velocity.y.abs() <= config.particle_speed);
        }
    }

    #[test]
    fn life_decreases_by_exactly_the_decay_rate() {
        let mut particle = Particle::spawn(Vec2::ZERO, 0.0, &config(), Shade::Day);
        particle.decay = 0.1;
        assert!(particle.advance());
        assert!((particle.life - 0.9).abs() < f32::EPSILON);
        assert!(particle.advance());
        assert!((particle.life - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn opacity_follows_life() {
        let mut particle = Particle::spawn(Vec2::ZERO, 0.0, &config(), Shade::Day);
        particle.life = 0.5;
        let (_, _, _, alpha) = particle.fill();
        assert!((alpha - 0.5 * 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn only_night_motes_have_halos() {
        let day = Particle::spawn(Vec2::ZERO, 0.0, &config(), Shade::Day);
        assert!(day.halo(1.0).is_none());

        let night = Particle::spawn(Vec2::ZERO, 0.0, &config(), Shade::Night);
        assert!(night.halo(1.0).is_some());
    }
}
