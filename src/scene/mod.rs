//! Scene: animation parameters and the vector scene generated from them.

mod generator;
mod state;

pub use generator::{generate, generate_into, Circle};
pub use state::{Adjustment, AnimationState, CIRCLE_STEP, PHASE_LIMIT, PHASE_STEP};
