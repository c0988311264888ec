//! Per-frame state for the lasso rope and its dust field

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng as _;

use super::config::Config;
use super::particle::{Particle, Shade};
use super::pointer::Sample;
use super::rope::Rope;

/// Owns every piece of per-frame numeric state: the capacity-bounded dust field and the rope.
/// Nothing else mutates either.
pub struct Simulation {
    /// Width of the simulation in pixels
    pub width: f32,
    /// Height of the simulation in pixels (double the rows of the TTY)
    pub height: f32,
    /// All the dust motes, newest at the front.
    pub particles: VecDeque<Particle>,
    /// The lasso rope.
    pub rope: Rope,
    /// The tunables.
    pub config: Config,
    /// The fire-glow brightness for the current frame, resampled every tick. Only night-shaded
    /// motes use it, so any still burning after the mode flips back to day keep their halos.
    pub glow_flicker: f32,
    /// Is night mode active? Read at spawn time only; existing motes keep their shade.
    is_night: bool,
    /// When the simulation started. Drives the whip oscillation phase.
    started_at: std::time::Instant,
}

#[expect(
    clippy::cast_precision_loss,
    clippy::as_conversions,
    reason = "Terminal dimensions are tiny"
)]
impl Simulation {
    /// Initialise a new simulation
    #[must_use]
    pub fn new(width: usize, height: usize, config: Config) -> Self {
        let rope = Rope::new(
            config.rope_segments,
            config.rope_damping,
            config.whip_amplitude,
            config.whip_frequency,
        );
        Self {
            width: width as f32,
            height: height as f32,
            particles: VecDeque::default(),
            rope,
            config,
            glow_flicker: 0.0,
            is_night: false,
            started_at: std::time::Instant::now(),
        }
    }

    /// Whether the simulation has usable dimensions yet.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Track the size of the underlying terminal. The motes and rope points are left alone;
    /// anything now off the surface just isn't drawn.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width as f32;
        self.height = height as f32;
    }

    /// Set the ambient night mode. Only motes spawned from now on are affected.
    pub fn set_night(&mut self, is_night: bool) {
        self.is_night = is_night;
    }

    /// Is night mode active?
    #[must_use]
    pub const fn is_night(&self) -> bool {
        self.is_night
    }

    /// Kick up a single mote near the given point. The oldest mote is evicted first when the
    /// field is full, so sustained input keeps a steady visual density.
    pub fn spawn_particle(&mut self, x: f32, y: f32, jitter: f32) {
        let shade = if self.is_night {
            Shade::Night
        } else {
            Shade::Day
        };
        self.particles
            .push_front(Particle::spawn(Vec2::new(x, y), jitter, &self.config, shade));
        self.remove_overflowing_particles();
    }

    /// Kick up a cloud of motes at one origin, for discrete impacts like a button press.
    pub fn spawn_burst(&mut self, x: f32, y: f32, count: usize) {
        for _ in 0..count {
            self.spawn_particle(x, y, self.config.burst_jitter);
        }
    }

    /// Evict oldest-first from the back of the queue until we're back under capacity.
    fn remove_overflowing_particles(&mut self) {
        while self.particles.len() > self.config.max_particles {
            self.particles.pop_back();
        }
    }

    /// Advance the simulation by exactly one frame: the rope follows the cursor, then every
    /// mote drifts and decays, then the fire-glow flicker is resampled. A mote is removed the
    /// frame its life reaches zero, so it is never drawn expired.
    pub fn tick(&mut self, sample: &Sample) {
        let elapsed = self.started_at.elapsed().as_secs_f32();
        self.rope.follow(sample.position, sample.pressed, elapsed);

        self.particles.retain_mut(Particle::advance);

        self.glow_flicker = rand::thread_rng().gen_range(0.2..0.5);
    }
}

#[cfg(test)]
#[expect(
    clippy::indexing_slicing,
    clippy::float_cmp,
    reason = "Tests aren't so strict"
)]
mod test {
    use super::*;

    fn simulation() -> Simulation {
        Simulation::new(80, 48, Config::default())
    }

    fn still_cursor() -> Sample {
        Sample {
            position: Vec2::new(40.0, 24.0),
            velocity: Vec2::ZERO,
            pressed: false,
        }
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let mut sim = simulation();
        for i in 0_usize..200 {
            #[expect(
                clippy::cast_precision_loss,
                clippy::as_conversions,
                reason = "Tiny test values"
            )]
            sim.spawn_particle(i as f32, 0.0, 0.0);
            if i.rem_euclid(10) == 0 {
                sim.spawn_burst(0.0, 0.0, 8);
                sim.tick(&still_cursor());
            }
            assert!(sim.particles.len() <= sim.config.max_particles);
        }
    }

    #[test]
    fn overflow_evicts_the_oldest_first() {
        let mut sim = simulation();
        let capacity = sim.config.max_particles;

        #[expect(
            clippy::cast_precision_loss,
            clippy::as_conversions,
            reason = "Tiny test values"
        )]
        for i in 0..capacity + 10 {
            sim.spawn_particle(i as f32, 0.0, 0.0);
        }

        assert_eq!(sim.particles.len(), capacity);
        // Newest at the front, and the 10 oldest are gone.
        assert_eq!(sim.particles.front().unwrap().position.x, 59.0);
        assert_eq!(sim.particles.back().unwrap().position.x, 10.0);
    }

    #[test]
    fn a_burst_grows_the_field_by_at_most_the_remaining_capacity() {
        let mut sim = simulation();
        sim.spawn_burst(10.0, 10.0, 8);
        assert_eq!(sim.particles.len(), 8);

        let capacity = sim.config.max_particles;
        for _ in 0..capacity {
            sim.spawn_particle(0.0, 0.0, 0.0);
        }
        sim.spawn_burst(10.0, 10.0, 8);
        assert_eq!(sim.particles.len(), capacity);
    }

    #[test]
    fn a_fixed_decay_expires_on_an_exact_tick() {
        let mut sim = simulation();
        sim.spawn_particle(100.0, 100.0, 0.0);
        // 1/32 is binary-exact, so the life countdown hits exactly zero with no float drift.
        sim.particles[0].decay = 0.031_25;

        for _ in 0_usize..31 {
            sim.tick(&still_cursor());
        }
        // 31 ticks in, the mote clings on with one frame of life left.
        assert_eq!(sim.particles.len(), 1);
        assert!(sim.particles[0].life > 0.0);

        // The next tick takes life to exactly zero, which counts as expired.
        sim.tick(&still_cursor());
        assert!(sim.particles.is_empty());
    }

    #[test]
    fn the_default_decay_range_expires_motes_within_80_ticks() {
        let mut sim = simulation();
        sim.spawn_particle(100.0, 100.0, 0.0);

        // The slowest default decay is 0.015 per frame, so 80 frames is always fatal.
        for _ in 0_usize..80 {
            sim.tick(&still_cursor());
        }
        assert!(sim.particles.is_empty());
    }

    #[test]
    fn motes_drift_by_their_fixed_velocity() {
        let mut sim = simulation();
        sim.spawn_particle(10.0, 20.0, 0.0);
        sim.particles[0].velocity = Vec2::new(0.5, -0.25);

        sim.tick(&still_cursor());
        sim.tick(&still_cursor());

        assert_eq!(sim.particles[0].position, Vec2::new(11.0, 19.5));
    }

    #[test]
    fn shade_is_snapshotted_at_spawn() {
        let mut sim = simulation();
        sim.set_night(true);
        sim.spawn_particle(10.0, 10.0, 0.0);
        sim.set_night(false);

        for _ in 0_usize..10 {
            sim.tick(&still_cursor());
        }

        assert_eq!(sim.particles[0].shade, Shade::Night);
    }

    #[test]
    fn the_rope_head_tracks_the_sampled_cursor() {
        let mut sim = simulation();
        for i in 0_u16..20 {
            let sample = Sample {
                position: Vec2::new(f32::from(i), f32::from(i) * 2.0),
                velocity: Vec2::ZERO,
                pressed: false,
            };
            sim.tick(&sample);
            assert_eq!(sim.rope.points[0], sample.position);
        }
    }

    #[test]
    fn the_flicker_stays_within_its_band() {
        let mut sim = simulation();
        for _ in 0_usize..10 {
            sim.tick(&still_cursor());
            assert!(sim.glow_flicker >= 0.2);
            assert!(sim.glow_flicker < 0.5);
        }
    }
}
