//! All the variables that can be configured for the lasso and its dust

/// All the config for the lasso effect. The original web version of this effect hardcoded most
/// of these; here they're all tunable.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
#[non_exhaustive]
pub struct Config {
    /// The maximum number of dust motes. Spawning beyond this evicts the oldest motes.
    pub max_particles: usize,
    /// Displacement per mouse event, in pixels, above which movement kicks up dust.
    pub velocity_threshold: f32,
    /// How many motes a primary button press kicks up at once.
    pub burst_count: usize,
    /// The jitter radius for movement dust, in pixels.
    pub spawn_jitter: f32,
    /// The jitter radius for burst dust, in pixels.
    pub burst_jitter: f32,
    /// The minimum and maximum disc radius of a mote, in pixels.
    pub particle_size_range: (f32, f32),
    /// The maximum magnitude of each velocity component at spawn, in pixels per frame.
    pub particle_speed: f32,
    /// The minimum and maximum life lost per frame. At 30fps the defaults give motes roughly
    /// 1.5 to 2 seconds.
    pub decay_range: (f32, f32),
    /// The number of points in the rope.
    pub rope_segments: usize,
    /// The fraction of the remaining distance each rope point closes per frame.
    pub rope_damping: f32,
    /// The height of the rope's whip oscillation whilst the button is held, in pixels.
    pub whip_amplitude: f32,
    /// The speed of the whip oscillation in radians per second.
    pub whip_frequency: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_particles: 50,
            velocity_threshold: 4.0,
            burst_count: 8,
            spawn_jitter: 1.0,
            burst_jitter: 2.0,
            particle_size_range: (1.0, 3.0),
            particle_speed: 1.0,
            decay_range: (0.015, 0.025),
            rope_segments: 12,
            rope_damping: 0.4,
            whip_amplitude: 1.5,
            whip_frequency: 10.0,
        }
    }
}
