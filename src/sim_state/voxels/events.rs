//! # Chunk Events
//!
//! Incremental notifications the world emits as chunks are generated and
//! evicted. A render collaborator applies these to create or destroy
//! visual representations without re-querying the full occupancy set.
//! The core exposes no subscription model; the application loop drains
//! the pending events synchronously each tick.

use cgmath::Point3;

use super::chunk::ChunkKey;

/// A chunk residency change since the last drain.
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkEvent {
    /// A chunk was generated and its voxels entered the occupancy set.
    Loaded {
        /// Chunk coordinates of the new chunk.
        key: ChunkKey,
        /// Every voxel the chunk spawned, for the renderer to realize.
        voxels: Vec<Point3<i32>>,
    },
    /// A chunk fell outside the render radius and its voxels were removed.
    Unloaded {
        /// Chunk coordinates of the dropped chunk.
        key: ChunkKey,
    },
}

impl ChunkEvent {
    /// The chunk key this event refers to.
    pub fn key(&self) -> ChunkKey {
        match self {
            ChunkEvent::Loaded { key, .. } => *key,
            ChunkEvent::Unloaded { key } => *key,
        }
    }
}
