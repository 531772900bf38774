//! # World Module
//!
//! This module provides the `World` struct, the streaming manager that
//! owns the authoritative set of occupied voxel cells. It serves as the
//! central coordinator for chunk generation, eviction, and occupancy
//! queries.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks within the
//! render radius of the player are kept in memory. This allows for
//! effectively infinite world sizes while maintaining bounded memory
//! usage. Two structures are kept in lockstep:
//!
//! - the occupancy set, a hash set of voxel coordinates giving O(1)
//!   membership queries for collision;
//! - a chunk map from chunk key to the voxel list that chunk spawned,
//!   giving O(chunk) eviction.
//!
//! The invariant is that the occupancy set equals the disjoint union of
//! all resident chunks' voxel lists: no orphans, no duplicates.
//!
//! ## Streaming
//!
//! Both mutating operations are idempotent and safe to call every tick
//! with the player's latest column. The radius is a per-call argument, so
//! a runtime render-radius change takes effect on the next pass with no
//! special-casing. Generation is synchronous and runs inline within the
//! tick that requests it; on a large radius this can spike frame time,
//! which is an accepted limit of the single-threaded model.

use cgmath::Point3;
use std::collections::{HashMap, HashSet};

use super::chunk::{Chunk, ChunkKey};
use super::events::ChunkEvent;
use super::terrain::TerrainGenerator;
use super::VoxelLookup;

/// The streaming voxel world: resident chunks and their occupancy set.
///
/// # Examples
///
/// ```ignore
/// let mut world = World::new(16, 0);
///
/// // Stream chunks around the player's column, two chunks out.
/// world.ensure_resident(0, 0, 2);
/// world.evict_out_of_range(0, 0, 2);
///
/// // Physics queries occupancy; a renderer drains the change events.
/// let solid = world.is_occupied(Point3::new(0, 0, 0));
/// let events = world.drain_events();
/// ```
pub struct World {
    /// Edge length of a chunk's column grid, fixed at world creation.
    chunk_size: i32,
    /// Height source for newly generated chunks.
    terrain: TerrainGenerator,
    /// Every currently occupied voxel coordinate.
    occupancy: HashSet<Point3<i32>>,
    /// A mapping from chunk key to the chunk record owning its voxels.
    chunks: HashMap<ChunkKey, Chunk>,
    /// Residency changes accumulated since the last drain.
    events: Vec<ChunkEvent>,
}

impl World {
    /// Creates a new, empty world.
    ///
    /// # Arguments
    /// * `chunk_size` - Edge length of a chunk in voxels
    /// * `noise_seed` - Seed for the terrain noise field
    pub fn new(chunk_size: i32, noise_seed: u32) -> Self {
        World {
            chunk_size,
            terrain: TerrainGenerator::new(noise_seed),
            occupancy: HashSet::new(),
            chunks: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Edge length of a chunk in voxels.
    pub fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    /// Generates every non-resident chunk within `radius` of the player.
    ///
    /// The player's chunk is recomputed fresh from the given column; for
    /// every chunk key within Chebyshev distance `radius` of it that is
    /// not already resident, the chunk is generated, its voxels inserted
    /// into the occupancy set, and a [`ChunkEvent::Loaded`] recorded.
    /// Requesting an already-resident chunk is a no-op, so calling this
    /// twice with identical arguments changes nothing the second time.
    ///
    /// # Arguments
    /// * `player_column_x` - X of the voxel column the player stands in
    /// * `player_column_z` - Z of the voxel column the player stands in
    /// * `radius` - Render radius in chunks
    pub fn ensure_resident(&mut self, player_column_x: i32, player_column_z: i32, radius: i32) {
        let center = ChunkKey::containing_column(player_column_x, player_column_z, self.chunk_size);

        for chunk_x in (center.x - radius)..=(center.x + radius) {
            for chunk_z in (center.z - radius)..=(center.z + radius) {
                let key = ChunkKey::new(chunk_x, chunk_z);
                if self.chunks.contains_key(&key) {
                    continue;
                }

                let chunk = Chunk::generate(key, self.chunk_size, &self.terrain);
                for voxel in &chunk.voxels {
                    self.occupancy.insert(*voxel);
                }

                log::debug!(
                    "Generated chunk ({}, {}) with {} voxels",
                    key.x,
                    key.z,
                    chunk.voxels.len()
                );
                self.events.push(ChunkEvent::Loaded {
                    key,
                    voxels: chunk.voxels.clone(),
                });
                self.chunks.insert(key, chunk);
            }
        }
    }

    /// Evicts every resident chunk farther than `radius` from the player.
    ///
    /// Each evicted chunk's voxels are removed from the occupancy set,
    /// its record dropped, and a [`ChunkEvent::Unloaded`] recorded.
    ///
    /// # Arguments
    /// * `player_column_x` - X of the voxel column the player stands in
    /// * `player_column_z` - Z of the voxel column the player stands in
    /// * `radius` - Render radius in chunks
    pub fn evict_out_of_range(&mut self, player_column_x: i32, player_column_z: i32, radius: i32) {
        let center = ChunkKey::containing_column(player_column_x, player_column_z, self.chunk_size);

        let out_of_range: Vec<ChunkKey> = self
            .chunks
            .keys()
            .filter(|key| key.chebyshev_distance(&center) > radius)
            .copied()
            .collect();

        for key in out_of_range {
            if let Some(chunk) = self.chunks.remove(&key) {
                for voxel in &chunk.voxels {
                    self.occupancy.remove(voxel);
                }
                log::debug!("Evicted chunk ({}, {})", key.x, key.z);
                self.events.push(ChunkEvent::Unloaded { key });
            }
        }
    }

    /// Takes all residency events accumulated since the last drain.
    ///
    /// # Returns
    /// The pending [`ChunkEvent`]s in the order they occurred, leaving the
    /// internal buffer empty.
    pub fn drain_events(&mut self) -> Vec<ChunkEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of currently resident chunks.
    pub fn resident_chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of voxels in the occupancy set.
    pub fn occupied_voxel_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Keys of all currently resident chunks, in no particular order.
    pub fn resident_keys(&self) -> Vec<ChunkKey> {
        self.chunks.keys().copied().collect()
    }
}

impl VoxelLookup for World {
    fn is_occupied(&self, cell: Point3<i32>) -> bool {
        self.occupancy.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cheby_disc(center: ChunkKey, radius: i32) -> HashSet<ChunkKey> {
        let mut disc = HashSet::new();
        for x in (center.x - radius)..=(center.x + radius) {
            for z in (center.z - radius)..=(center.z + radius) {
                disc.insert(ChunkKey::new(x, z));
            }
        }
        disc
    }

    #[test]
    fn residency_matches_chebyshev_disc_exactly() {
        let mut world = World::new(16, 0);
        world.ensure_resident(0, 0, 2);
        world.evict_out_of_range(0, 0, 2);

        let resident: HashSet<ChunkKey> = world.resident_keys().into_iter().collect();
        assert_eq!(resident, cheby_disc(ChunkKey::new(0, 0), 2));
    }

    #[test]
    fn residency_follows_the_player() {
        let mut world = World::new(16, 0);
        world.ensure_resident(0, 0, 1);
        world.evict_out_of_range(0, 0, 1);

        // Move five chunks east; the disc recenters completely.
        world.ensure_resident(80, 0, 1);
        world.evict_out_of_range(80, 0, 1);

        let resident: HashSet<ChunkKey> = world.resident_keys().into_iter().collect();
        assert_eq!(resident, cheby_disc(ChunkKey::new(5, 0), 1));
    }

    #[test]
    fn ensure_resident_is_idempotent() {
        let mut world = World::new(16, 3);
        world.ensure_resident(5, -7, 2);
        let chunks_after_first = world.resident_chunk_count();
        let voxels_after_first = world.occupied_voxel_count();
        let events_after_first = world.drain_events().len();

        world.ensure_resident(5, -7, 2);
        assert_eq!(world.resident_chunk_count(), chunks_after_first);
        assert_eq!(world.occupied_voxel_count(), voxels_after_first);
        assert!(world.drain_events().is_empty());
        assert_eq!(events_after_first, chunks_after_first);
    }

    #[test]
    fn occupancy_is_the_union_of_resident_chunks() {
        let mut world = World::new(8, 11);
        world.ensure_resident(0, 0, 2);
        world.evict_out_of_range(100, 100, 1);
        world.ensure_resident(100, 100, 1);

        let mut union = HashSet::new();
        let mut total = 0usize;
        for key in world.resident_keys() {
            let chunk = world.chunks.get(&key).unwrap();
            total += chunk.voxels.len();
            for voxel in &chunk.voxels {
                union.insert(*voxel);
            }
        }

        // No duplicates across chunks, and no orphans left from eviction.
        assert_eq!(total, union.len());
        assert_eq!(union, world.occupancy);
    }

    #[test]
    fn eviction_removes_all_owned_voxels() {
        let mut world = World::new(16, 0);
        world.ensure_resident(0, 0, 0);
        assert!(world.is_occupied(Point3::new(0, 0, 0)));

        // Radius 0 around a column three chunks away evicts everything here.
        world.evict_out_of_range(100, 100, 0);
        assert_eq!(world.resident_chunk_count(), 0);
        assert_eq!(world.occupied_voxel_count(), 0);
        assert!(!world.is_occupied(Point3::new(0, 0, 0)));
    }

    #[test]
    fn unresident_coordinates_are_simply_absent() {
        let world = World::new(16, 0);
        assert!(!world.is_occupied(Point3::new(1000, 0, 1000)));
        assert!(!world.is_occupied(Point3::new(0, -5, 0)));
    }

    #[test]
    fn ground_level_is_always_occupied_within_radius() {
        let mut world = World::new(16, 9);
        world.ensure_resident(0, 0, 1);
        // Every column has height >= 1, so y = 0 is solid everywhere resident.
        for x in -16..32 {
            for z in -16..32 {
                assert!(world.is_occupied(Point3::new(x, 0, z)), "column ({x}, {z})");
            }
        }
    }

    #[test]
    fn events_mirror_loads_and_unloads() {
        let mut world = World::new(16, 0);
        world.ensure_resident(0, 0, 1);
        let events = world.drain_events();
        assert_eq!(events.len(), 9);
        assert!(events
            .iter()
            .all(|e| matches!(e, ChunkEvent::Loaded { .. })));

        world.ensure_resident(160, 0, 1);
        world.evict_out_of_range(160, 0, 1);
        let events = world.drain_events();
        let loaded = events
            .iter()
            .filter(|e| matches!(e, ChunkEvent::Loaded { .. }))
            .count();
        let unloaded = events
            .iter()
            .filter(|e| matches!(e, ChunkEvent::Unloaded { .. }))
            .count();
        assert_eq!(loaded, 9);
        assert_eq!(unloaded, 9);

        // Drained means drained.
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn loaded_event_carries_the_chunk_voxels() {
        let mut world = World::new(4, 2);
        world.ensure_resident(0, 0, 0);
        let events = world.drain_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            ChunkEvent::Loaded { key, voxels } => {
                assert_eq!(*key, ChunkKey::new(0, 0));
                assert_eq!(voxels.len(), world.occupied_voxel_count());
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn radius_change_takes_effect_next_pass() {
        let mut world = World::new(16, 0);
        world.ensure_resident(0, 0, 2);
        assert_eq!(world.resident_chunk_count(), 25);

        // Shrink: nothing new generated, outer ring evicted.
        world.ensure_resident(0, 0, 1);
        world.evict_out_of_range(0, 0, 1);
        assert_eq!(world.resident_chunk_count(), 9);

        // Grow again: the ring comes back.
        world.ensure_resident(0, 0, 2);
        world.evict_out_of_range(0, 0, 2);
        assert_eq!(world.resident_chunk_count(), 25);
    }
}
