//! Scene generator: turns [`AnimationState`] into a field of circles.
//!
//! Circle `i` sits on an angular spiral around a point near the middle of
//! the pixel canvas:
//!
//! ```text
//! t        = i / (400 + phase / 9)
//! distance = t * phase * 0.6 + 10 + offset
//! angle    = t * 2π * 20
//! center   = (cols + pan_x + cos(angle) * distance,
//!             cols - rows / 2 + pan_y + sin(angle) * distance)
//! radius   = t * state.radius
//! ```
//!
//! `cols` is half the canvas width in pixels and is used for both axes,
//! which skews the spiral upward on wide terminals.

use std::f64::consts::TAU;

use super::AnimationState;

/// Denominators closer to zero than this produce an empty scene.
const MIN_DENOMINATOR: f64 = 1e-6;

/// A filled circle in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Radius, never negative.
    pub r: f64,
}

/// Generate the scene for a `cols`×`rows` cell terminal into `scene`.
///
/// `scene` is cleared first so the caller can reuse its allocation.
pub fn generate_into(state: &AnimationState, cols: u16, rows: u16, scene: &mut Vec<Circle>) {
    scene.clear();

    let phase = state.rotation_phase;
    let denominator = 400.0 + phase / 9.0;
    if !denominator.is_finite() || denominator.abs() < MIN_DENOMINATOR {
        log::debug!("spiral denominator {denominator} at phase {phase}, skipping frame");
        return;
    }

    let origin_x = f64::from(i32::from(cols)) + f64::from(state.pan_x);
    let origin_y =
        f64::from(i32::from(cols) - i32::from(rows) / 2) + f64::from(state.pan_y);
    let offset = f64::from(state.offset);

    scene.reserve(state.circle_count as usize + 1);
    for i in 0..=state.circle_count {
        let t = f64::from(i) / denominator;
        let distance = t * phase * 0.6 + 10.0 + offset;
        let angle = t * TAU * 20.0;
        let circle = Circle {
            x: origin_x + angle.cos() * distance,
            y: origin_y + angle.sin() * distance,
            r: (t * state.radius).max(0.0),
        };
        if circle.x.is_finite() && circle.y.is_finite() && circle.r.is_finite() {
            scene.push(circle);
        }
    }
}

/// Generate the scene for a `cols`×`rows` cell terminal.
pub fn generate(state: &AnimationState, cols: u16, rows: u16) -> Vec<Circle> {
    let mut scene = Vec::new();
    generate_into(state, cols, rows, &mut scene);
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_generates_count_plus_one() {
        let state = AnimationState::default();
        let scene = generate(&state, 40, 20);
        assert_eq!(scene.len(), 401);
    }

    #[test]
    fn test_first_circle_has_zero_radius() {
        let state = AnimationState::default();
        let scene = generate(&state, 40, 20);
        let first = scene[0];
        assert!(approx(first.r, 0.0));
        // t = 0: angle 0, distance 10 + offset
        assert!(approx(first.x, 40.0 + 20.0));
        assert!(approx(first.y, 40.0 - 10.0));
    }

    #[test]
    fn test_spiral_point_matches_formula() {
        let state = AnimationState {
            rotation_phase: 90.0,
            radius: 8.0,
            circle_count: 100,
            offset: 3,
            pan_x: -2,
            pan_y: 5,
        };
        let scene = generate(&state, 30, 11);

        let i = 37.0;
        let t = i / (400.0 + 90.0 / 9.0);
        let d = t * 90.0 * 0.6 + 10.0 + 3.0;
        let a = t * TAU * 20.0;
        let c = scene[37];
        assert!(approx(c.x, 30.0 - 2.0 + a.cos() * d));
        // rows / 2 uses integer division: 11 / 2 == 5
        assert!(approx(c.y, 30.0 - 5.0 + 5.0 + a.sin() * d));
        assert!(approx(c.r, t * 8.0));
    }

    #[test]
    fn test_zero_count_is_single_dot_of_no_size() {
        let state = AnimationState {
            circle_count: 0,
            ..AnimationState::default()
        };
        let scene = generate(&state, 40, 20);
        assert_eq!(scene.len(), 1);
        assert!(approx(scene[0].r, 0.0));
    }

    #[test]
    fn test_degenerate_denominator_yields_empty_scene() {
        let state = AnimationState {
            rotation_phase: -3600.0,
            ..AnimationState::default()
        };
        assert!(generate(&state, 40, 20).is_empty());

        let state = AnimationState {
            rotation_phase: f64::NAN,
            ..AnimationState::default()
        };
        assert!(generate(&state, 40, 20).is_empty());
    }

    #[test]
    fn test_reuses_allocation() {
        let state = AnimationState::default();
        let mut scene = Vec::new();
        generate_into(&state, 40, 20, &mut scene);
        let capacity = scene.capacity();
        generate_into(&state, 40, 20, &mut scene);
        assert_eq!(scene.len(), 401);
        assert_eq!(scene.capacity(), capacity);
    }
}
