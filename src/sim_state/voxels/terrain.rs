//! # Terrain Generation
//!
//! This module provides the `TerrainGenerator`, a pure function from
//! integer column coordinates to a column height.
//!
//! ## Algorithm
//!
//! Heights come from a 2D Perlin noise field sampled at a fixed spatial
//! frequency, so neighboring columns have correlated heights and the
//! terrain rolls smoothly. The noise value (nominally in [-1, 1]) is
//! scaled by an amplitude, floored to an integer, and offset so that
//! every column is at least one voxel tall.
//!
//! ## Determinism
//!
//! The generator is seeded once at construction and has no other state:
//! the same coordinates always yield the same height for the lifetime of
//! a world instance, and two generators built with the same seed produce
//! identical height maps. There is no caching because a sample is cheap
//! to recompute.

use noise::{NoiseFn, Perlin};

/// Divisor applied to column coordinates before sampling the noise field.
///
/// Larger values stretch features over more columns.
pub const NOISE_SCALE_DIVISOR: f64 = 10.0;
/// Scale applied to the raw noise value before flooring to a height.
pub const HEIGHT_AMPLITUDE: f64 = 3.0;
/// Every column is at least this many voxels tall, guaranteeing solid
/// ground everywhere.
pub const MIN_COLUMN_HEIGHT: i32 = 1;

/// Deterministic column height source backed by 2D Perlin noise.
pub struct TerrainGenerator {
    /// The seeded noise field. Re-seeded only when a new world is created.
    perlin: Perlin,
}

impl TerrainGenerator {
    /// Creates a generator for the given seed.
    ///
    /// # Arguments
    /// * `seed` - Noise seed fixed for the lifetime of the world
    pub fn new(seed: u32) -> Self {
        TerrainGenerator {
            perlin: Perlin::new(seed),
        }
    }

    /// Returns the terrain height of the column at `(column_x, column_z)`.
    ///
    /// The result is always at least [`MIN_COLUMN_HEIGHT`]; a column of
    /// height `h` is solid for `y` in `0..h`.
    ///
    /// # Arguments
    /// * `column_x` - World-space X coordinate of the column
    /// * `column_z` - World-space Z coordinate of the column
    pub fn height_at(&self, column_x: i32, column_z: i32) -> i32 {
        let sample = self.perlin.get([
            column_x as f64 / NOISE_SCALE_DIVISOR,
            column_z as f64 / NOISE_SCALE_DIVISOR,
        ]);
        let height = (sample * HEIGHT_AMPLITUDE).floor() as i32 + MIN_COLUMN_HEIGHT;
        height.max(MIN_COLUMN_HEIGHT)
    }
}
