//! Animation parameters and the adjustments input can make to them.

/// Phase added to the rotation every tick.
pub const PHASE_STEP: f64 = 2.0;
/// Once the phase exceeds this it wraps to its negation.
pub const PHASE_LIMIT: f64 = 1000.0;
/// Circle count change per key press.
pub const CIRCLE_STEP: i32 = 5;

/// Parameters describing the current scene.
///
/// Plain values only, so the scheduler snapshots it by copy each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Advances every tick; wraps within `[-PHASE_LIMIT, PHASE_LIMIT]`.
    pub rotation_phase: f64,
    /// Scales circle size. Never negative.
    pub radius: f64,
    /// Circles drawn per frame (the generator draws `circle_count + 1`).
    pub circle_count: u32,
    /// Radial offset added to every circle's distance from the center.
    pub offset: i32,
    /// Horizontal translation of the scene origin in pixels.
    pub pan_x: i32,
    /// Vertical translation of the scene origin in pixels.
    pub pan_y: i32,
}

impl AnimationState {
    /// Defaults restored by reset.
    pub const DEFAULT: Self = Self {
        rotation_phase: 0.0,
        radius: 6.0,
        circle_count: 400,
        offset: 10,
        pan_x: 0,
        pan_y: 0,
    };

    /// Restore every field to [`AnimationState::DEFAULT`].
    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    /// Apply one input adjustment, clamping where the value has a floor.
    pub fn adjust(&mut self, adjustment: Adjustment) {
        match adjustment {
            Adjustment::Pan { dx, dy } => {
                self.pan_x = self.pan_x.saturating_add(dx);
                self.pan_y = self.pan_y.saturating_add(dy);
            }
            Adjustment::Radius(delta) => {
                self.radius = (self.radius + f64::from(delta)).max(0.0);
            }
            Adjustment::CircleCount(delta) => {
                self.circle_count = self.circle_count.saturating_add_signed(delta);
            }
            Adjustment::Offset(delta) => {
                self.offset = self.offset.saturating_add(delta);
            }
        }
    }

    /// Move the rotation one tick forward.
    pub fn advance(&mut self) {
        self.rotation_phase += PHASE_STEP;
        if self.rotation_phase > PHASE_LIMIT {
            self.rotation_phase = -PHASE_LIMIT;
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A relative change to one animation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Translate the scene origin.
    Pan {
        /// Pixels to the right (negative = left).
        dx: i32,
        /// Pixels down (negative = up).
        dy: i32,
    },
    /// Grow or shrink the circles.
    Radius(i32),
    /// Draw more or fewer circles.
    CircleCount(i32),
    /// Push circles away from or toward the center.
    Offset(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = AnimationState::default();
        assert_eq!(state.radius, 6.0);
        assert_eq!(state.circle_count, 400);
        assert_eq!(state.offset, 10);
        assert_eq!((state.pan_x, state.pan_y), (0, 0));
        assert_eq!(state.rotation_phase, 0.0);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = AnimationState {
            rotation_phase: 512.0,
            radius: 0.0,
            circle_count: 3,
            offset: -40,
            pan_x: 9,
            pan_y: -9,
        };
        state.reset();
        assert_eq!(state, AnimationState::DEFAULT);
    }

    #[test]
    fn test_radius_never_negative() {
        let mut state = AnimationState::default();
        for _ in 0..50 {
            state.adjust(Adjustment::Radius(-1));
        }
        assert_eq!(state.radius, 0.0);

        state.adjust(Adjustment::Radius(1));
        assert_eq!(state.radius, 1.0);
    }

    #[test]
    fn test_circle_count_clamped_at_zero() {
        let mut state = AnimationState::default();
        for _ in 0..200 {
            state.adjust(Adjustment::CircleCount(-CIRCLE_STEP));
        }
        assert_eq!(state.circle_count, 0);
    }

    #[test]
    fn test_circle_count_steps() {
        let mut state = AnimationState::default();
        for _ in 0..10 {
            state.adjust(Adjustment::CircleCount(CIRCLE_STEP));
        }
        for _ in 0..3 {
            state.adjust(Adjustment::CircleCount(-CIRCLE_STEP));
        }
        assert_eq!(state.circle_count, 400 + 10 * 5 - 3 * 5);
    }

    #[test]
    fn test_pan_and_offset() {
        let mut state = AnimationState::default();
        state.adjust(Adjustment::Pan { dx: 1, dy: 0 });
        state.adjust(Adjustment::Pan { dx: 0, dy: -1 });
        state.adjust(Adjustment::Offset(-1));
        assert_eq!((state.pan_x, state.pan_y), (1, -1));
        assert_eq!(state.offset, 9);
    }

    #[test]
    fn test_phase_wraps() {
        let mut state = AnimationState::default();
        state.advance();
        assert_eq!(state.rotation_phase, 2.0);

        state.rotation_phase = PHASE_LIMIT;
        state.advance();
        assert_eq!(state.rotation_phase, -PHASE_LIMIT);
    }
}
