//! # Voxels Module
//!
//! Voxel world data for the simulation core: procedural terrain heights,
//! chunk records, the streaming world that owns the occupancy set, and the
//! chunk events handed to the render collaborator.
//!
//! ## Key Components
//!
//! * `terrain` - Deterministic column height generation from 2D noise
//! * `chunk` - Chunk records and chunk-coordinate arithmetic
//! * `world` - The streaming manager owning the voxel occupancy set
//! * `events` - Incremental load/unload notifications for a renderer
//!
//! ## Coordinate Conventions
//!
//! A voxel coordinate is an integer triple identifying one unit cube whose
//! extent is `[x, x+1] x [y, y+1] x [z, z+1]` in world space. A chunk
//! coordinate is the Euclidean floor division of a voxel column coordinate
//! by the chunk size, which stays correct for negative columns.

use cgmath::Point3;

pub mod chunk;
pub mod events;
pub mod terrain;
pub mod world;

/// Read-only voxel occupancy queries.
///
/// This is the sole interface the physics integrator uses against the
/// world: a coordinate either holds a voxel or it does not. Coordinates
/// outside every resident chunk are simply absent, never an error.
pub trait VoxelLookup {
    /// Returns `true` if a voxel occupies the given coordinate.
    fn is_occupied(&self, cell: Point3<i32>) -> bool;
}

#[cfg(test)]
impl VoxelLookup for std::collections::HashSet<Point3<i32>> {
    fn is_occupied(&self, cell: Point3<i32>) -> bool {
        self.contains(&cell)
    }
}
