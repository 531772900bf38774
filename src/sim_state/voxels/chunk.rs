//! # Chunk Module
//!
//! This module provides the `Chunk` struct, a square column region of
//! voxels generated and evicted as one unit, plus the chunk-coordinate
//! arithmetic used by the streaming world.
//!
//! ## Lifecycle
//!
//! A chunk is created when the player's chunk coordinate brings it within
//! the render radius and destroyed when the player moves far enough that
//! it falls outside the radius. Existence is binary per chunk key: a
//! chunk is never partially regenerated, and its voxel list is fixed at
//! generation time. Keeping the owned voxel list on the chunk makes
//! eviction O(voxels-in-chunk) rather than a scan of the whole world.

use cgmath::Point3;

use super::terrain::TerrainGenerator;

/// Identifies one chunk: the integer chunk coordinates `(x, z)` of a
/// square column region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkKey {
    /// Chunk X coordinate (world column X divided by the chunk size, floored).
    pub x: i32,
    /// Chunk Z coordinate (world column Z divided by the chunk size, floored).
    pub z: i32,
}

impl ChunkKey {
    /// Creates a chunk key from chunk coordinates.
    pub fn new(x: i32, z: i32) -> Self {
        ChunkKey { x, z }
    }

    /// Returns the key of the chunk containing the given voxel column.
    ///
    /// Uses Euclidean floor division so negative columns map to the
    /// correct chunk (column -1 belongs to chunk -1, not chunk 0).
    ///
    /// # Arguments
    /// * `column_x` - World-space X coordinate of the column
    /// * `column_z` - World-space Z coordinate of the column
    /// * `chunk_size` - Edge length of a chunk in voxels
    pub fn containing_column(column_x: i32, column_z: i32, chunk_size: i32) -> Self {
        ChunkKey {
            x: column_x.div_euclid(chunk_size),
            z: column_z.div_euclid(chunk_size),
        }
    }

    /// Chebyshev distance to another chunk key, in chunks.
    ///
    /// The render radius is a Chebyshev threshold, so the resident set
    /// around a player is a square of chunks.
    pub fn chebyshev_distance(&self, other: &ChunkKey) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }
}

/// A generated chunk: its key and the voxels it spawned.
pub struct Chunk {
    /// The chunk coordinates of this chunk.
    pub key: ChunkKey,
    /// Every voxel coordinate this chunk inserted into the occupancy set.
    /// Owned exclusively by this chunk; removed as one unit on eviction.
    pub voxels: Vec<Point3<i32>>,
}

impl Chunk {
    /// Generates the chunk at `key`, delegating heights to the terrain
    /// generator.
    ///
    /// Iterates the chunk's local column grid and spawns one voxel per
    /// `(x, y, z)` for `y` in `0..height` of each column.
    ///
    /// # Arguments
    /// * `key` - Chunk coordinates of the chunk to generate
    /// * `chunk_size` - Edge length of the column grid in voxels
    /// * `terrain` - Height source for the chunk's columns
    ///
    /// # Returns
    /// The generated `Chunk` with its owned voxel list.
    pub fn generate(key: ChunkKey, chunk_size: i32, terrain: &TerrainGenerator) -> Self {
        let mut voxels = Vec::new();

        for local_x in 0..chunk_size {
            for local_z in 0..chunk_size {
                let column_x = key.x * chunk_size + local_x;
                let column_z = key.z * chunk_size + local_z;
                let height = terrain.height_at(column_x, column_z);
                for y in 0..height {
                    voxels.push(Point3::new(column_x, y, column_z));
                }
            }
        }

        Chunk { key, voxels }
    }
}
