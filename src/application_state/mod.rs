//! # Application State Module
//!
//! The thin application loop around the simulation core. In a full client
//! this layer would pump a window's event loop, translate device input
//! into [`InputState`](input_state::InputState) snapshots, and hand chunk
//! events to a renderer. The headless demo here does the same shape of
//! work: it synthesizes a wandering walk, steps the sim on a fixed
//! timestep, and logs what a renderer would consume.

use cgmath::Rad;
use log::{debug, info};

use crate::config::SimConfig;
use crate::sim_state::voxels::events::ChunkEvent;
use crate::sim_state::SimState;
use input_state::InputState;

pub mod input_state;

/// Fixed timestep of the demo loop, in seconds.
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
/// Per-tick probability that the wanderer requests a jump.
const JUMP_CHANCE: f32 = 0.02;
/// Maximum per-tick heading drift, in radians.
const YAW_DRIFT: f32 = 0.05;

/// Synthesizes a heading-drifting forward walk with occasional jumps.
///
/// Stands in for the keyboard/joystick collaborator so the demo exercises
/// the streaming path without a window. Seeded, so a demo run is
/// reproducible.
pub struct WanderInput {
    rng: fastrand::Rng,
    yaw: f32,
}

impl WanderInput {
    /// Creates a wanderer with the given random seed.
    pub fn new(seed: u64) -> Self {
        WanderInput {
            rng: fastrand::Rng::with_seed(seed),
            yaw: 0.0,
        }
    }

    /// Produces the next tick's input snapshot.
    pub fn next_input(&mut self) -> InputState {
        self.yaw += (self.rng.f32() - 0.5) * 2.0 * YAW_DRIFT;
        InputState {
            forward: 1.0,
            strafe: 0.0,
            // Jumping occasionally gets the wanderer over one-block steps.
            jump_requested: self.rng.f32() < JUMP_CHANCE,
            yaw: Rad(self.yaw),
        }
    }
}

/// Runs the headless demo loop for the given number of ticks.
///
/// Loads configuration from `voxel-sim.json` if present, streams and
/// simulates with a wandering player, and logs chunk events at `debug`
/// and the player's position once a second at `info`.
///
/// # Arguments
/// * `ticks` - Number of fixed-timestep ticks to simulate
pub fn run_demo(ticks: u64) {
    let config = SimConfig::load_or_default("voxel-sim.json");
    let mut sim = SimState::new(config);
    let mut wander = WanderInput::new(0);

    for tick in 0..ticks {
        let input = wander.next_input();
        let output = sim.tick(&input, FIXED_TIMESTEP);

        for event in &output.events {
            match event {
                ChunkEvent::Loaded { key, voxels } => {
                    debug!("Chunk ({}, {}) loaded: {} voxels", key.x, key.z, voxels.len());
                }
                ChunkEvent::Unloaded { key } => {
                    debug!("Chunk ({}, {}) unloaded", key.x, key.z);
                }
            }
        }

        if tick % 60 == 0 {
            let player = &output.player;
            info!(
                "t = {:>4}s  position ({:.2}, {:.2}, {:.2})  grounded: {}  chunks: {}",
                tick / 60,
                player.position.x,
                player.position.y,
                player.position.z,
                player.grounded,
                sim.world().resident_chunk_count()
            );
        }
    }

    info!(
        "Demo finished: {} ticks, {} voxels resident",
        ticks,
        sim.world().occupied_voxel_count()
    );
}
