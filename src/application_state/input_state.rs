//! # Input State
//!
//! This module defines the per-tick input snapshot the simulation core
//! consumes. The core never talks to input devices; a collaborator
//! (keyboard handler, touch joystick, or the demo's synthesizer) builds
//! one of these per tick and hands it to [`crate::sim_state::SimState::tick`].

use cgmath::Rad;

/// One tick's worth of movement input, consumed read-only by the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    /// Forward/backward axis in [-1, 1]; positive is forward.
    pub forward: f32,
    /// Left/right strafe axis in [-1, 1]; positive is right.
    pub strafe: f32,
    /// Whether a jump was requested this tick.
    pub jump_requested: bool,
    /// Player heading in radians; yaw 0 faces -Z.
    pub yaw: Rad<f32>,
}

impl Default for InputState {
    fn default() -> Self {
        InputState {
            forward: 0.0,
            strafe: 0.0,
            jump_requested: false,
            yaw: Rad(0.0),
        }
    }
}
