//! A lasso rope trails the cursor, and moving fast or clicking kicks up dust

use std::sync::Arc;

use color_eyre::eyre::Result;

use super::pointer::{Pointer, SpawnRequest};
use super::simulation::Simulation;
use crate::shared_state::SharedState;

/// The rope's stroke colour.
const ROPE_STROKE: crate::surface::Colour = (0.58, 0.42, 0.24, 0.8);

/// `Lasso`
pub(crate) struct Lasso {
    /// The base effect struct
    effect: crate::effects::effecter::Effecter,
    /// The rope and dust simulation
    simulation: Simulation,
    /// The pointer sampler
    pointer: Pointer,
    /// Dust requested by input, waiting to be applied after the next tick has drawn.
    pending_spawns: Vec<SpawnRequest>,
}

impl Lasso {
    /// Instantiate
    fn new(
        config: super::config::Config,
        output_channel: tokio::sync::mpsc::Sender<crate::run::FrameUpdate>,
    ) -> Self {
        let effect = crate::effects::effecter::Effecter::new("lasso".to_owned(), 1, output_channel);
        let pointer = Pointer::new(config.velocity_threshold);

        Self {
            effect,
            simulation: Simulation::new(0, 0, config),
            pointer,
            pending_spawns: Vec::new(),
        }
    }

    /// Initialise the simulation, because we don't have the dimensions when instantiating Self.
    fn initialise(&mut self) {
        let config = self.simulation.config.clone();
        let is_night = self.simulation.is_night();
        self.simulation = Simulation::new(
            self.effect.width.into(),
            usize::from(self.effect.height) * 2,
            config,
        );
        self.simulation.set_night(is_night);
        tracing::debug!("Lasso simulation initialised.");
    }

    /// Our main entrypoint.
    pub(crate) async fn start(
        state: Arc<SharedState>,
        output: tokio::sync::mpsc::Sender<crate::run::FrameUpdate>,
    ) -> Result<()> {
        let config = state.config.read().await.clone();
        let mut lasso = Self::new(config.lasso, output);
        lasso.effect.frame_rate = config.frame_rate;
        lasso.simulation.set_night(state.get_is_night().await);

        let tty_size = state.get_tty_size().await;
        lasso.effect.set_tty_size(tty_size.width, tty_size.height);

        let mut protocol = state.protocol_tx.subscribe();

        #[expect(
            clippy::integer_division_remainder_used,
            reason = "This is caused by the `tokio::select!`"
        )]
        loop {
            tokio::select! {
                () = lasso.effect.sleep_until_next_frame_tick() => {
                    lasso.render().await?;
                },
                Ok(message) = protocol.recv() => {
                    if matches!(message, crate::run::Protocol::End) {
                        break;
                    }
                    lasso.handle_protocol_message(&message);
                }
            }
        }

        Ok(())
    }

    /// Handle a message from the global protocol.
    fn handle_protocol_message(&mut self, message: &crate::run::Protocol) {
        #[expect(
            clippy::wildcard_enum_match_arm,
            reason = "The rest are common messages"
        )]
        match message {
            crate::run::Protocol::Input(input) => self.handle_input(input),
            crate::run::Protocol::NightMode(is_night) => self.simulation.set_night(*is_night),
            crate::run::Protocol::Config(config) => {
                self.effect.frame_rate = config.frame_rate;
                self.simulation.config = config.lasso.clone();
                self.pointer
                    .set_velocity_threshold(config.lasso.velocity_threshold);
            }
            _ => {
                self.effect.handle_common_protocol_messages(message);
                if let crate::run::Protocol::Resize { width, height } = message {
                    self.simulation
                        .resize((*width).into(), usize::from(*height) * 2);
                }
            }
        }
    }

    /// Fold raw user input into the pointer sampler. Any dust it requests is queued so that it
    /// first appears the frame after the current one.
    fn handle_input(&mut self, input: &crate::raw_input::ParsedInput) {
        if let termwiz::input::InputEvent::Mouse(event) = &input.event {
            if let Some(request) = self.pointer.handle_event(event) {
                self.pending_spawns.push(request);
            }
        }
    }

    /// One frame of the effect: advance the simulation, draw the rope then the dust, and only
    /// then let queued input requests spawn new dust.
    async fn render(&mut self) -> Result<()> {
        if !self.effect.is_ready() {
            return Ok(());
        }

        if !self.simulation.is_ready() {
            self.initialise();
        }

        self.effect.initialise_surface();

        let sample = self.pointer.sample();
        self.simulation.tick(&sample);

        self.draw_rope()?;
        self.draw_dust()?;
        self.apply_pending_spawns();

        self.effect.send_output().await
    }

    /// Draw the rope as a single connected polyline through all its points in order.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::as_conversions,
        reason = "Pixel positions fit comfortably in i64"
    )]
    fn draw_rope(&mut self) -> Result<()> {
        let points = &self.simulation.rope.points;
        for pair in points.windows(2) {
            let (Some(start), Some(end)) = (pair.first(), pair.last()) else {
                continue;
            };
            self.effect.surface.add_line(
                (start.x.round() as i64, start.y.round() as i64),
                (end.x.round() as i64, end.y.round() as i64),
                ROPE_STROKE,
            )?;
        }

        Ok(())
    }

    /// Draw every mote as a filled disc whose opacity is its remaining life. Night motes get a
    /// halo ring around the disc, scaled by the fire-glow flicker.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::as_conversions,
        reason = "Pixel positions are bounds-checked before casting"
    )]
    fn draw_dust(&mut self) -> Result<()> {
        let flicker = self.simulation.glow_flicker;
        for particle in &self.simulation.particles {
            let centre_x = particle.position.x.round() as i64;
            let centre_y = particle.position.y.round() as i64;
            let disc = particle.size;
            let reach = match particle.halo(flicker) {
                Some(_) => disc + super::particle::HALO_REACH,
                None => disc,
            };

            let span = reach.ceil() as i64;
            for offset_y in -span..=span {
                for offset_x in -span..=span {
                    let x = centre_x + offset_x;
                    let y = centre_y + offset_y;
                    if !self.effect.surface.contains(x, y) {
                        continue;
                    }

                    let distance_squared = (offset_x * offset_x + offset_y * offset_y) as f32;
                    if distance_squared <= disc * disc {
                        self.effect
                            .surface
                            .add_pixel(x as usize, y as usize, particle.fill())?;
                    } else if distance_squared <= reach * reach {
                        if let Some(halo) = particle.halo(flicker) {
                            self.effect.surface.add_pixel(x as usize, y as usize, halo)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Apply the dust requests queued by input since the last frame. New motes aren't drawn
    /// until the next frame.
    fn apply_pending_spawns(&mut self) {
        let spawn_jitter = self.simulation.config.spawn_jitter;
        let burst_count = self.simulation.config.burst_count;
        for request in std::mem::take(&mut self.pending_spawns) {
            match request {
                SpawnRequest::Drift { position } => {
                    self.simulation
                        .spawn_particle(position.x, position.y, spawn_jitter);
                }
                SpawnRequest::Burst { position } => {
                    self.simulation
                        .spawn_burst(position.x, position.y, burst_count);
                }
            }
        }
    }
}
