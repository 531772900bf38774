#![warn(missing_docs)]

//! # Voxel Sim
//!
//! A first-person voxel-world simulation core: procedural chunk streaming
//! keyed to player position, combined with a per-tick physics integrator
//! that resolves axis-aligned collisions against the streamed voxel set.
//!
//! ## Key Modules
//!
//! * `application_state` - The thin loop around the core: input snapshots
//!   and the headless demo driver
//! * `config` - Tunable simulation parameters with JSON loading
//! * `sim_state` - The core itself: world streaming and player physics
//!
//! ## Architecture
//!
//! The core is a synchronous step function. Once per tick the application
//! loop supplies an input snapshot; physics advances the player against
//! the last-known voxel set, then the world generates and evicts chunks
//! around the player's new column. The caller receives the updated player
//! state plus incremental chunk events, which is everything a renderer
//! needs without re-querying the occupancy set. There is no async
//! boundary: chunk generation runs inline within the tick that requests
//! it, and all state is single-owner.
//!
//! ## Usage
//!
//! ```ignore
//! fn main() {
//!     voxel_sim::run();
//! }
//! ```
//!
//! Or drive the core directly:
//!
//! ```ignore
//! let mut sim = SimState::new(SimConfig::default());
//! let output = sim.tick(&InputState::default(), 1.0 / 60.0);
//! ```

use log::info;

pub mod application_state;
pub mod config;
pub mod sim_state;

pub use application_state::input_state::InputState;
pub use config::{ConfigError, SimConfig};
pub use sim_state::physics::PlayerState;
pub use sim_state::voxels::chunk::ChunkKey;
pub use sim_state::voxels::events::ChunkEvent;
pub use sim_state::{SimState, TickOutput};

/// Number of fixed-timestep ticks the demo binary simulates.
const DEMO_TICKS: u64 = 3600;

/// Initializes logging and runs the headless demo loop.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");
    application_state::run_demo(DEMO_TICKS);
}
