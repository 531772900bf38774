//! # Physics Module
//!
//! This module provides the `PhysicsIntegrator`, which owns the player's
//! kinematic state and advances it one tick at a time against the world's
//! voxel occupancy set.
//!
//! ## Tick Sequence
//!
//! Each step applies, in order: input-driven horizontal acceleration,
//! gravity, a single combined displacement proposal, collision resolution
//! against intersecting voxels, horizontal damping, a world-floor clamp,
//! and finally the jump impulse if one was requested while grounded.
//!
//! ## Collision Model
//!
//! Resolution is single-pass and not axis-separated: all three axes are
//! proposed at once, and every intersecting voxel independently adjusts
//! one axis-group of the proposal (landing, ceiling bump, or horizontal
//! cancel), last write wins. Candidate voxels are narrowed to the integer
//! cell range enclosing the proposed bounding box and scanned in ascending
//! `(x, y, z)` order so the outcome is deterministic. The single-pass
//! approach can tunnel through corners at grazing angles; that is a known
//! approximation of this model, not something this module corrects for.
//!
//! Nothing here fails: missing voxels contribute no collision, and a step
//! always yields a valid player state.

use cgmath::{InnerSpace, Point3, Rad, Vector3, Zero};

use super::voxels::VoxelLookup;
use crate::application_state::input_state::InputState;
use crate::config::SimConfig;

/// Width and depth of the player's bounding box, in voxels.
pub const PLAYER_WIDTH: f32 = 1.0;
/// Height of the player's bounding box, in voxels.
pub const PLAYER_HEIGHT: f32 = 2.0;
/// Tolerance when classifying a collision as a landing on a block top.
pub const LANDING_EPSILON: f32 = 0.01;
/// Vertical coordinate of the world floor; the player never falls below it.
pub const WORLD_FLOOR: f32 = 0.0;

/// The player's kinematic state, owned exclusively by the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// World-space position of the player's feet.
    pub position: Point3<f32>,
    /// Current velocity in voxels per second.
    pub velocity: Vector3<f32>,
    /// Whether the most recent vertical collision resolved as a landing.
    /// Recomputed every tick; enables jumping.
    pub grounded: bool,
}

impl PlayerState {
    /// Creates a state at rest at the given spawn position.
    pub fn at_rest(position: Point3<f32>) -> Self {
        PlayerState {
            position,
            velocity: Vector3::zero(),
            grounded: false,
        }
    }
}

/// An axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f32>,
    /// Maximum corner.
    pub max: Point3<f32>,
}

impl Aabb {
    /// The player's bounding box for a given feet position: centered on
    /// the feet horizontally, extending `PLAYER_HEIGHT` upward.
    pub fn player(feet: Point3<f32>) -> Self {
        let half_width = PLAYER_WIDTH / 2.0;
        Aabb {
            min: Point3::new(feet.x - half_width, feet.y, feet.z - half_width),
            max: Point3::new(
                feet.x + half_width,
                feet.y + PLAYER_HEIGHT,
                feet.z + half_width,
            ),
        }
    }

    /// The unit cube occupied by the voxel at `cell`.
    pub fn unit_cube(cell: Point3<i32>) -> Self {
        let min = Point3::new(cell.x as f32, cell.y as f32, cell.z as f32);
        Aabb {
            min,
            max: Point3::new(min.x + 1.0, min.y + 1.0, min.z + 1.0),
        }
    }

    /// Whether this box intersects `other`. Touching faces count as an
    /// intersection.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Advances the player's kinematic state one tick at a time.
pub struct PhysicsIntegrator {
    /// The player state this integrator owns.
    player: PlayerState,
    /// Downward acceleration in voxels per second squared.
    gravity: f32,
    /// Horizontal acceleration scale for movement input.
    move_speed: f32,
    /// Vertical velocity applied on a jump.
    jump_speed: f32,
    /// Per-tick horizontal velocity multiplier.
    damping_factor: f32,
}

impl PhysicsIntegrator {
    /// Creates an integrator with the given tuning, spawning the player
    /// at rest at `spawn`.
    ///
    /// # Arguments
    /// * `config` - Movement and gravity tuning
    /// * `spawn` - Initial feet position of the player
    pub fn new(config: &SimConfig, spawn: Point3<f32>) -> Self {
        PhysicsIntegrator {
            player: PlayerState::at_rest(spawn),
            gravity: config.gravity,
            move_speed: config.move_speed,
            jump_speed: config.jump_speed,
            damping_factor: config.damping_factor,
        }
    }

    /// The player state after the most recent step.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Advances the player one tick against the given voxel set.
    ///
    /// # Arguments
    /// * `input` - This tick's input snapshot, consumed read-only
    /// * `voxels` - Occupancy queries into the streamed world
    /// * `dt` - Tick duration in seconds
    pub fn step<V: VoxelLookup>(&mut self, input: &InputState, voxels: &V, dt: f32) {
        // 1. Input-driven horizontal acceleration.
        let wish = Self::wish_direction(input);
        self.player.velocity.x += wish.x * self.move_speed * dt;
        self.player.velocity.z += wish.z * self.move_speed * dt;

        // 2. Gravity, unconditionally.
        self.player.velocity.y -= self.gravity * dt;

        // 3. Propose the full displacement, all three axes at once.
        let current = self.player.position;
        let mut proposed = current + self.player.velocity * dt;

        // 4. Resolve collisions against every voxel intersecting the
        //    proposed bounding box. Grounded is recomputed from scratch.
        self.player.grounded = false;
        let player_box = Aabb::player(proposed);
        let min_cell = Point3::new(
            player_box.min.x.floor() as i32,
            player_box.min.y.floor() as i32,
            player_box.min.z.floor() as i32,
        );
        let max_cell = Point3::new(
            player_box.max.x.floor() as i32,
            player_box.max.y.floor() as i32,
            player_box.max.z.floor() as i32,
        );

        for cell_x in min_cell.x..=max_cell.x {
            for cell_y in min_cell.y..=max_cell.y {
                for cell_z in min_cell.z..=max_cell.z {
                    let cell = Point3::new(cell_x, cell_y, cell_z);
                    if !voxels.is_occupied(cell) {
                        continue;
                    }
                    let block = Aabb::unit_cube(cell);
                    if !player_box.intersects(&block) {
                        continue;
                    }

                    if current.y >= block.max.y - LANDING_EPSILON
                        && self.player.velocity.y <= 0.0
                    {
                        // Landing: feet snap to the block top.
                        proposed.y = block.max.y;
                        self.player.velocity.y = 0.0;
                        self.player.grounded = true;
                    } else if current.y <= block.min.y + PLAYER_HEIGHT
                        && self.player.velocity.y > 0.0
                    {
                        // Ceiling bump: head snaps to just below the block.
                        proposed.y = block.min.y - PLAYER_HEIGHT;
                        self.player.velocity.y = 0.0;
                    } else {
                        // Horizontal: cancel lateral motion, keep the
                        // proposed Y from gravity or jump handling.
                        self.player.velocity.x = 0.0;
                        self.player.velocity.z = 0.0;
                        proposed.x = current.x;
                        proposed.z = current.z;
                    }
                }
            }
        }

        // 5. Commit, then damp horizontal velocity.
        self.player.position = proposed;
        self.player.velocity.x *= self.damping_factor;
        self.player.velocity.z *= self.damping_factor;

        // 6. World floor clamp.
        if self.player.position.y < WORLD_FLOOR {
            self.player.position.y = WORLD_FLOOR;
            self.player.velocity.y = 0.0;
            self.player.grounded = true;
        }

        // 7. Jump, only from the ground.
        if input.jump_requested && self.player.grounded {
            self.player.velocity.y = self.jump_speed;
            self.player.grounded = false;
        }
    }

    /// World-space horizontal direction the input asks for, unit length
    /// or zero.
    ///
    /// Forward at yaw 0 points along -Z and strafe-right along +X, with
    /// yaw rotating the basis about the Y axis. A zero-length wish vector
    /// contributes no acceleration; normalization guards that case.
    fn wish_direction(input: &InputState) -> Vector3<f32> {
        let Rad(yaw) = input.yaw;
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let forward = Vector3::new(-sin_yaw, 0.0, -cos_yaw);
        let right = Vector3::new(cos_yaw, 0.0, -sin_yaw);

        let wish = forward * input.forward + right * input.strafe;
        if wish.magnitude2() <= f32::EPSILON {
            Vector3::zero()
        } else {
            wish.normalize()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::f32::consts::FRAC_PI_2;

    const DT: f32 = 1.0 / 60.0;

    fn no_input() -> InputState {
        InputState::default()
    }

    fn integrator_at(position: Point3<f32>) -> PhysicsIntegrator {
        PhysicsIntegrator::new(&SimConfig::default(), position)
    }

    /// A flat slab of blocks at y = 0 covering the given column range.
    fn slab(range: std::ops::RangeInclusive<i32>) -> HashSet<Point3<i32>> {
        let mut cells = HashSet::new();
        for x in range.clone() {
            for z in range.clone() {
                cells.insert(Point3::new(x, 0, z));
            }
        }
        cells
    }

    #[test]
    fn falling_onto_a_block_lands_grounded() {
        let blocks = slab(-2..=2);
        let mut physics = integrator_at(Point3::new(0.5, 1.5, 0.5));
        physics.player.velocity.y = -5.0;

        physics.step(&no_input(), &blocks, 0.2);

        let player = physics.player();
        assert!(player.grounded);
        assert_eq!(player.velocity.y, 0.0);
        assert_eq!(player.position.y, 1.0);
    }

    #[test]
    fn jump_from_grounded_rest_on_a_block_top() {
        let blocks = slab(-2..=2);
        let mut physics = integrator_at(Point3::new(0.0, 1.0, 0.0));
        physics.player.grounded = true;

        let input = InputState {
            jump_requested: true,
            ..InputState::default()
        };
        physics.step(&input, &blocks, DT);

        let player = physics.player();
        assert_eq!(player.velocity.y, SimConfig::default().jump_speed);
        assert!(!player.grounded);
        assert_eq!(player.position.y, 1.0);
    }

    #[test]
    fn free_fall_clamps_to_world_floor() {
        let blocks: HashSet<Point3<i32>> = HashSet::new();
        let mut physics = integrator_at(Point3::new(0.0, 0.5, 0.0));

        physics.step(&no_input(), &blocks, 1.0);

        let player = physics.player();
        assert_eq!(player.position.y, WORLD_FLOOR);
        assert_eq!(player.velocity.y, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn ceiling_bump_zeroes_upward_velocity() {
        let mut blocks = HashSet::new();
        blocks.insert(Point3::new(0, 3, 0));
        let mut physics = integrator_at(Point3::new(0.5, 1.2, 0.5));
        physics.player.velocity.y = 10.0;

        physics.step(&no_input(), &blocks, 0.1);

        let player = physics.player();
        assert_eq!(player.velocity.y, 0.0);
        assert_eq!(player.position.y, 1.0);
        assert!(!player.grounded);
    }

    #[test]
    fn horizontal_collision_cancels_lateral_motion() {
        let mut blocks = HashSet::new();
        // A wall column two blocks tall at x = 1.
        blocks.insert(Point3::new(1, 0, 0));
        blocks.insert(Point3::new(1, 1, 0));
        let mut physics = integrator_at(Point3::new(0.49, 0.0, 0.5));
        physics.player.velocity.x = 5.0;

        physics.step(&no_input(), &blocks, DT);

        let player = physics.player();
        assert_eq!(player.position.x, 0.49);
        assert_eq!(player.position.z, 0.5);
        assert_eq!(player.velocity.x, 0.0);
        assert_eq!(player.velocity.z, 0.0);
    }

    #[test]
    fn zero_input_produces_no_horizontal_acceleration() {
        let blocks: HashSet<Point3<i32>> = HashSet::new();
        let mut physics = integrator_at(Point3::new(0.0, 10.0, 0.0));

        physics.step(&no_input(), &blocks, DT);

        let player = physics.player();
        assert_eq!(player.velocity.x, 0.0);
        assert_eq!(player.velocity.z, 0.0);
        assert!(player.position.x.is_finite());
        assert!(player.velocity.y < 0.0);
    }

    #[test]
    fn forward_input_moves_along_negative_z_at_zero_yaw() {
        let blocks: HashSet<Point3<i32>> = HashSet::new();
        let mut physics = integrator_at(Point3::new(0.0, 10.0, 0.0));

        let input = InputState {
            forward: 1.0,
            ..InputState::default()
        };
        physics.step(&input, &blocks, DT);

        let player = physics.player();
        assert!(player.velocity.z < 0.0);
        assert!(player.velocity.x.abs() < 1e-6);
    }

    #[test]
    fn yaw_rotates_the_movement_basis() {
        let blocks: HashSet<Point3<i32>> = HashSet::new();
        let mut physics = integrator_at(Point3::new(0.0, 10.0, 0.0));

        // Facing yaw = pi/2: forward is -X.
        let input = InputState {
            forward: 1.0,
            yaw: Rad(FRAC_PI_2),
            ..InputState::default()
        };
        physics.step(&input, &blocks, DT);

        let player = physics.player();
        assert!(player.velocity.x < 0.0);
        assert!(player.velocity.z.abs() < 1e-6);
    }

    #[test]
    fn damping_decays_horizontal_velocity() {
        let blocks: HashSet<Point3<i32>> = HashSet::new();
        let mut physics = integrator_at(Point3::new(0.0, 100.0, 0.0));
        physics.player.velocity.x = 10.0;

        physics.step(&no_input(), &blocks, DT);

        let expected = 10.0 * SimConfig::default().damping_factor;
        assert!((physics.player().velocity.x - expected).abs() < 1e-5);
    }

    #[test]
    fn jump_is_ignored_while_airborne() {
        let blocks: HashSet<Point3<i32>> = HashSet::new();
        let mut physics = integrator_at(Point3::new(0.0, 50.0, 0.0));

        let input = InputState {
            jump_requested: true,
            ..InputState::default()
        };
        physics.step(&input, &blocks, DT);

        // Only gravity acted on the vertical axis.
        assert!(physics.player().velocity.y < 0.0);
        assert!(!physics.player().grounded);
    }

    #[test]
    fn grounded_player_stays_put_on_flat_ground() {
        let blocks = slab(-3..=3);
        let mut physics = integrator_at(Point3::new(0.5, 1.0, 0.5));

        for _ in 0..30 {
            physics.step(&no_input(), &blocks, DT);
        }

        let player = physics.player();
        assert!(player.grounded);
        assert_eq!(player.position.y, 1.0);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn aabb_touching_faces_intersect() {
        let a = Aabb::unit_cube(Point3::new(0, 0, 0));
        let b = Aabb::unit_cube(Point3::new(1, 0, 0));
        let c = Aabb::unit_cube(Point3::new(2, 0, 0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
