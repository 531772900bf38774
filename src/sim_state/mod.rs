//! # Sim State Module
//!
//! The core simulation module: the streaming voxel world and the player
//! physics integrator, evaluated once per tick.
//!
//! ## Key Components
//!
//! * `SimState` - The central coordinator owning world and physics
//! * `physics` - Player kinematics and voxel collision resolution
//! * `voxels` - Terrain generation, chunks, streaming, and chunk events
//!
//! ## Architecture
//!
//! `SimState` is a synchronous step function, not an event hub: the
//! surrounding application loop calls [`SimState::tick`] with this
//! tick's input snapshot and a timestep, and receives the updated player
//! state plus the chunk events a renderer needs. Per tick the order is
//! fixed: physics advances the player against the last-known voxel set,
//! then the world re-streams chunks around the player's new column. The
//! two are deliberately coupled through position alone; physics only ever
//! reads the world through occupancy queries.

use cgmath::Point3;

use crate::application_state::input_state::InputState;
use crate::config::SimConfig;
use physics::{PhysicsIntegrator, PlayerState};
use voxels::chunk::ChunkKey;
use voxels::events::ChunkEvent;
use voxels::world::World;

pub mod physics;
pub mod voxels;

/// Feet position the player spawns at, a little above the terrain so
/// gravity settles them onto it.
const SPAWN_POSITION: Point3<f32> = Point3::new(0.5, 8.0, 0.5);

/// What one tick hands back to the caller: the updated player state and
/// the residency changes a renderer should apply.
#[derive(Debug)]
pub struct TickOutput {
    /// The player state after this tick.
    pub player: PlayerState,
    /// Chunk loads and unloads that happened during this tick.
    pub events: Vec<ChunkEvent>,
}

/// The main state container for the simulation core.
///
/// Owns the streaming world and the physics integrator, and coordinates
/// their once-per-tick interaction.
///
/// # Examples
///
/// ```ignore
/// let mut sim = SimState::new(SimConfig::default());
///
/// // Application loop
/// loop {
///     let input = gather_input();
///     let output = sim.tick(&input, 1.0 / 60.0);
///     renderer.apply(&output.events);
///     renderer.draw(&output.player);
/// }
/// ```
pub struct SimState {
    /// Current simulation configuration. `render_radius` is read fresh
    /// every tick, so runtime changes apply on the next pass.
    config: SimConfig,
    /// The streaming voxel world containing all resident chunk data.
    world: World,
    /// The integrator owning the player's kinematic state.
    physics: PhysicsIntegrator,
    /// Chunk the player occupied after the previous tick, for logging
    /// chunk crossings.
    last_player_chunk: ChunkKey,
}

impl SimState {
    /// Creates a simulation with chunks streamed in around the spawn
    /// point, so the first tick already has ground to collide with.
    ///
    /// # Arguments
    /// * `config` - Simulation parameters, fixed except `render_radius`
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new(config.chunk_size, config.noise_seed);
        let physics = PhysicsIntegrator::new(&config, SPAWN_POSITION);

        let spawn_column_x = SPAWN_POSITION.x.floor() as i32;
        let spawn_column_z = SPAWN_POSITION.z.floor() as i32;
        world.ensure_resident(spawn_column_x, spawn_column_z, config.render_radius);

        let last_player_chunk =
            ChunkKey::containing_column(spawn_column_x, spawn_column_z, config.chunk_size);
        log::info!(
            "World created: seed {}, chunk size {}, render radius {}",
            config.noise_seed,
            config.chunk_size,
            config.render_radius
        );

        SimState {
            config,
            world,
            physics,
            last_player_chunk,
        }
    }

    /// Advances the simulation one tick.
    ///
    /// Physics runs first against the voxel set streamed in by the
    /// previous tick, then chunk residency is updated around the player's
    /// new position.
    ///
    /// # Arguments
    /// * `input` - This tick's input snapshot
    /// * `dt` - Tick duration in seconds
    ///
    /// # Returns
    /// The updated player state and the chunk events of this tick.
    pub fn tick(&mut self, input: &InputState, dt: f32) -> TickOutput {
        self.physics.step(input, &self.world, dt);

        let position = self.physics.player().position;
        let column_x = position.x.floor() as i32;
        let column_z = position.z.floor() as i32;
        let radius = self.config.render_radius;

        self.world.ensure_resident(column_x, column_z, radius);
        self.world.evict_out_of_range(column_x, column_z, radius);

        let player_chunk = ChunkKey::containing_column(column_x, column_z, self.config.chunk_size);
        if player_chunk != self.last_player_chunk {
            log::debug!(
                "Player crossed into chunk ({}, {})",
                player_chunk.x,
                player_chunk.z
            );
            self.last_player_chunk = player_chunk;
        }

        TickOutput {
            player: *self.physics.player(),
            events: self.world.drain_events(),
        }
    }

    /// Changes the render radius; the next tick's streaming pass picks it
    /// up. Values below 1 are clamped to 1.
    pub fn set_render_radius(&mut self, radius: i32) {
        self.config.render_radius = radius.max(1);
    }

    /// The streamed world, for occupancy queries and residency inspection.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player state after the most recent tick.
    pub fn player(&self) -> &PlayerState {
        self.physics.player()
    }
}
