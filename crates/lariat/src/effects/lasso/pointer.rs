//! Sample raw terminal mouse events into cursor state and dust spawn requests

use glam::Vec2;

/// A snapshot of the cursor, consumed by the simulation at the start of each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sample {
    /// The cursor position in surface pixels.
    pub position: Vec2,
    /// The displacement between the 2 most recent raw events, in pixels.
    pub velocity: Vec2,
    /// Is the primary button currently held?
    pub pressed: bool,
}

/// A request to kick up dust. Produced when folding an event in, applied by the effect after
/// the next tick has updated and drawn, so new dust is first visible the frame after.
#[derive(Debug, Clone, Copy)]
pub enum SpawnRequest {
    /// A single mote from fast cursor movement.
    Drift {
        /// Where the cursor was when it moved fast.
        position: Vec2,
    },
    /// A cloud of motes from a primary button press.
    Burst {
        /// Where the cursor was when the button went down.
        position: Vec2,
    },
}

/// Converts raw terminal mouse events into [`Sample`]s and [`SpawnRequest`]s.
///
/// Terminals have no pointer-leave event, but SGR mouse reports carry the full button state on
/// every event, so the pressed flag is recomputed each time and can never get stuck.
#[derive(Debug, Default)]
pub struct Pointer {
    /// The most recent sample.
    sample: Sample,
    /// The previous raw event's position. `None` until the first event arrives.
    previous: Option<Vec2>,
    /// Displacement magnitude above which movement kicks up dust.
    velocity_threshold: f32,
}

impl Pointer {
    /// Instantiate
    #[must_use]
    pub fn new(velocity_threshold: f32) -> Self {
        Self {
            sample: Sample::default(),
            previous: None,
            velocity_threshold,
        }
    }

    /// The most recent sample.
    #[must_use]
    pub const fn sample(&self) -> Sample {
        self.sample
    }

    /// Update the dust threshold, for config reloads.
    pub fn set_velocity_threshold(&mut self, threshold: f32) {
        self.velocity_threshold = threshold;
    }

    /// Fold one raw mouse event into the sampler. This is a pure state transition: no IO, no
    /// drawing, just the new sample and maybe a spawn request.
    ///
    /// Terminal mouse coordinates are 1-based cells; the y axis is doubled into half-block
    /// pixel space.
    pub fn handle_event(&mut self, event: &termwiz::input::MouseEvent) -> Option<SpawnRequest> {
        let position = Vec2::new(
            f32::from(event.x.saturating_sub(1)),
            f32::from(event.y.saturating_sub(1)) * 2.0,
        );
        let velocity = self
            .previous
            .map_or(Vec2::ZERO, |previous| position - previous);
        self.previous = Some(position);

        let was_pressed = self.sample.pressed;
        let pressed = event
            .mouse_buttons
            .contains(termwiz::input::MouseButtons::LEFT);

        self.sample = Sample {
            position,
            velocity,
            pressed,
        };

        if pressed && !was_pressed {
            return Some(SpawnRequest::Burst { position });
        }
        if velocity.length() > self.velocity_threshold {
            return Some(SpawnRequest::Drift { position });
        }

        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn event(x: u16, y: u16, buttons: termwiz::input::MouseButtons) -> termwiz::input::MouseEvent {
        termwiz::input::MouseEvent {
            x,
            y,
            x_pixel_offset: 0,
            y_pixel_offset: 0,
            mouse_buttons: buttons,
            modifiers: termwiz::input::Modifiers::NONE,
        }
    }

    #[test]
    fn first_event_has_no_velocity() {
        let mut pointer = Pointer::new(4.0);
        let request = pointer.handle_event(&event(20, 10, termwiz::input::MouseButtons::NONE));
        assert!(request.is_none());

        let sample = pointer.sample();
        assert_eq!(sample.position, Vec2::new(19.0, 18.0));
        assert_eq!(sample.velocity, Vec2::ZERO);
        assert!(!sample.pressed);
    }

    #[test]
    fn velocity_is_the_delta_between_events() {
        let mut pointer = Pointer::new(100.0);
        pointer.handle_event(&event(10, 10, termwiz::input::MouseButtons::NONE));
        pointer.handle_event(&event(13, 11, termwiz::input::MouseButtons::NONE));

        assert_eq!(pointer.sample().velocity, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn fast_movement_requests_a_single_mote() {
        let mut pointer = Pointer::new(4.0);
        pointer.handle_event(&event(1, 1, termwiz::input::MouseButtons::NONE));
        let request = pointer.handle_event(&event(20, 1, termwiz::input::MouseButtons::NONE));

        assert!(matches!(request, Some(SpawnRequest::Drift { .. })));
    }

    #[test]
    fn slow_movement_requests_nothing() {
        let mut pointer = Pointer::new(4.0);
        pointer.handle_event(&event(1, 1, termwiz::input::MouseButtons::NONE));
        let request = pointer.handle_event(&event(2, 1, termwiz::input::MouseButtons::NONE));

        assert!(request.is_none());
    }

    #[test]
    fn a_press_edge_requests_a_burst() {
        let mut pointer = Pointer::new(4.0);
        pointer.handle_event(&event(5, 5, termwiz::input::MouseButtons::NONE));

        let request = pointer.handle_event(&event(5, 5, termwiz::input::MouseButtons::LEFT));
        assert!(matches!(request, Some(SpawnRequest::Burst { .. })));
        assert!(pointer.sample().pressed);

        // Holding the button down is not another press edge.
        let request = pointer.handle_event(&event(6, 5, termwiz::input::MouseButtons::LEFT));
        assert!(request.is_none());

        let request = pointer.handle_event(&event(6, 5, termwiz::input::MouseButtons::NONE));
        assert!(request.is_none());
        assert!(!pointer.sample().pressed);
    }
}
