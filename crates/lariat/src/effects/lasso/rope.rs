//! The lasso rope that trails the cursor

use glam::Vec2;

/// A fixed-length chain of points trailing the cursor. The points are created once and only
/// ever repositioned, never added or removed.
#[derive(Debug)]
pub struct Rope {
    /// The chain, head first. The head is pinned to the cursor every frame.
    pub points: Vec<Vec2>,
    /// The fraction of the remaining distance each point closes per frame.
    damping: f32,
    /// Whip oscillation height in pixels.
    whip_amplitude: f32,
    /// Whip oscillation speed in radians per second.
    whip_frequency: f32,
}

impl Rope {
    /// Lay out a new rope. All points start coiled at the origin until the first cursor sample
    /// drags them out.
    #[must_use]
    pub fn new(segments: usize, damping: f32, whip_amplitude: f32, whip_frequency: f32) -> Self {
        Self {
            points: vec![Vec2::ZERO; segments],
            damping,
            whip_amplitude,
            whip_frequency,
        }
    }

    /// Pin the head to the cursor and let the tail follow. Each point moves toward its
    /// predecessor's already-updated position by the damping fraction of the remaining
    /// distance. Whilst the button is held, every trailing point also gets a bounded
    /// sinusoidal offset from the elapsed time and its own index, which makes the rope whip.
    #[expect(
        clippy::cast_precision_loss,
        clippy::as_conversions,
        reason = "The point index is tiny"
    )]
    pub fn follow(&mut self, head: Vec2, pressed: bool, elapsed: f32) {
        let mut points = self.points.iter_mut();
        if let Some(first) = points.next() {
            *first = head;
        }

        let mut previous = head;
        for (index, point) in points.enumerate() {
            *point += (previous - *point) * self.damping;
            if pressed {
                let phase = elapsed * self.whip_frequency + (index + 1) as f32 * 0.7;
                point.y += phase.sin() * self.whip_amplitude;
            }
            previous = *point;
        }
    }
}

#[cfg(test)]
#[expect(clippy::indexing_slicing, reason = "Tests aren't so strict")]
mod test {
    use super::*;

    fn rope() -> Rope {
        Rope::new(12, 0.4, 1.5, 10.0)
    }

    #[test]
    fn head_is_pinned_to_the_cursor() {
        let mut rope = rope();
        for i in 0_u16..10 {
            let cursor = Vec2::new(f32::from(i) * 3.0, f32::from(i) * 7.0);
            rope.follow(cursor, false, 0.0);
            assert_eq!(rope.points[0], cursor);
        }
    }

    #[test]
    fn tail_converges_on_a_stationary_cursor() {
        let mut rope = rope();
        let cursor = Vec2::new(30.0, 40.0);
        for _ in 0_usize..50 {
            rope.follow(cursor, false, 0.0);
        }
        for point in &rope.points {
            assert!(point.distance(cursor) < 0.001);
        }
    }

    #[test]
    fn whip_offsets_are_bounded() {
        let mut rope = rope();
        let cursor = Vec2::new(30.0, 40.0);
        for tick in 0_usize..200 {
            #[expect(
                clippy::cast_precision_loss,
                clippy::as_conversions,
                reason = "Fake frame times"
            )]
            rope.follow(cursor, true, tick as f32 / 30.0);
        }
        // The sine offsets fight the damping, so the rope oscillates around the cursor rather
        // than running away.
        for point in &rope.points {
            assert!(point.distance(cursor) < 40.0);
        }
    }
}
