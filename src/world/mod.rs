//! # World Module
//!
//! This module provides the `VoxelWorld` struct: the authoritative voxel
//! grid. It owns a dense 3-D array of chunks covering the playable volume,
//! routes coordinate-based reads and writes to the owning chunk, propagates
//! dirtiness across chunk boundaries, runs procedural generation, answers
//! ray-pick queries, and orchestrates full and incremental derivation
//! passes.
//!
//! ## Coordinate routing
//!
//! Every in-bounds world coordinate maps to exactly one chunk and one local
//! cell via floor division and modulo by the chunk dimension. Out-of-bounds
//! coordinates are defined, not erroneous: reads return air and writes are
//! no-ops, which keeps the hot-path coordinate math branch-light.
//!
//! ## Ownership
//!
//! The chunk array is exclusively owned by the world. All mutation goes
//! through the world's routing methods so boundary dirtying and
//! indestructibility rules are enforced uniformly; no collaborator touches
//! chunk contents directly. The world assumes a single owning thread (the
//! simulation loop) for every call.

use cgmath::Point3;
use log::{debug, info};

use crate::block::palette::Palette;
use crate::block::{BlockId, AIR};
use crate::chunk::collision::CollisionSink;
use crate::chunk::{Chunk, CHUNK_DIM};

pub mod generation;
pub mod persistence;
pub mod pick;

/// Per-ore parameters for the vein generation stage.
#[derive(Clone, Debug)]
pub struct OreVeinConfig {
    /// The ore identity placed by this entry.
    pub block: BlockId,
    /// How many vein walks are attempted.
    pub attempts: u32,
    /// Exclusive upper bound on the starting height of a walk.
    pub max_height: i32,
    /// Steps taken by each walk.
    pub walk_steps: u32,
}

/// Static world parameters: extent, terrain shaping, and the knobs of each
/// generation stage. [`WorldConfig::default`] is the shipped island setup.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// World extent in cells along X.
    pub size_x: i32,
    /// World extent in cells along Y.
    pub size_y: i32,
    /// World extent in cells along Z.
    pub size_z: i32,
    /// Terrain height around which the noise offset oscillates.
    pub base_height: i32,
    /// Scale applied to the 2-D noise sample to get the height offset.
    pub height_amplitude: f64,
    /// Horizontal frequency of the 2-D height noise.
    pub height_noise_scale: f64,
    /// Chebyshev radius of solid land around the world center.
    pub land_radius: i32,
    /// Width of the sand beach ring outside the land radius.
    pub sand_width: i32,
    /// Width of the ocean ring outside the beach.
    pub water_width: i32,
    /// Highest cell filled with water in ocean columns.
    pub water_level: i32,
    /// Caves are only carved at least this far below the column surface.
    pub cave_min_depth: i32,
    /// Frequency of the 3-D cave noise.
    pub cave_noise_scale: f64,
    /// Cave noise values above this threshold carve the cell to air.
    pub cave_threshold: f64,
    /// Vein placements per ore type, run in table order.
    pub ore_veins: Vec<OreVeinConfig>,
    /// A grass column sprouts a tree with probability 1 in `tree_chance`;
    /// `0` disables the stage.
    pub tree_chance: u32,
    /// Minimum trunk height.
    pub trunk_min: i32,
    /// Maximum trunk height (inclusive).
    pub trunk_max: i32,
    /// Target blocks placed by the minigame stage; `0` disables it.
    pub target_count: u32,
    /// Retry budget for target placement.
    pub target_attempts: u32,
    /// Cells of clearance above the top solid cell for the recommended
    /// spawn.
    pub spawn_clearance: f32,
    /// Spawn height used when the center column has no solid cell.
    pub fallback_spawn_height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        use crate::block::BlockKind;
        WorldConfig {
            size_x: 128,
            size_y: 64,
            size_z: 128,
            base_height: 24,
            height_amplitude: 6.0,
            height_noise_scale: 0.04,
            land_radius: 40,
            sand_width: 6,
            water_width: 14,
            water_level: 20,
            cave_min_depth: 6,
            cave_noise_scale: 0.09,
            cave_threshold: 0.58,
            ore_veins: vec![
                OreVeinConfig {
                    block: BlockKind::CoalOre.id(),
                    attempts: 60,
                    max_height: 28,
                    walk_steps: 8,
                },
                OreVeinConfig {
                    block: BlockKind::IronOre.id(),
                    attempts: 40,
                    max_height: 20,
                    walk_steps: 6,
                },
                OreVeinConfig {
                    block: BlockKind::GoldOre.id(),
                    attempts: 18,
                    max_height: 12,
                    walk_steps: 5,
                },
            ],
            tree_chance: 300,
            trunk_min: 3,
            trunk_max: 6,
            target_count: 8,
            target_attempts: 200,
            spawn_clearance: 1.5,
            fallback_spawn_height: 40.0,
        }
    }
}

/// The authoritative voxel grid and the hub of the terrain engine.
pub struct VoxelWorld {
    config: WorldConfig,
    palette: Palette,
    chunks: Vec<Chunk>,
    chunks_x: i32,
    chunks_y: i32,
    chunks_z: i32,
    seed: u64,
}

impl VoxelWorld {
    /// Creates a world of all-air chunks covering the configured extent.
    ///
    /// Chunk counts per axis are the ceiling of extent over chunk size, so
    /// extents that are not multiples of 16 are covered by a partially
    /// out-of-extent border chunk.
    ///
    /// # Arguments
    /// * `config` - World extent and generation parameters
    /// * `palette` - The block-type registry; owned by the world
    pub fn new(config: WorldConfig, palette: Palette) -> Self {
        let chunks_x = div_ceil(config.size_x, CHUNK_DIM);
        let chunks_y = div_ceil(config.size_y, CHUNK_DIM);
        let chunks_z = div_ceil(config.size_z, CHUNK_DIM);

        let mut chunks = Vec::with_capacity((chunks_x * chunks_y * chunks_z) as usize);
        for cy in 0..chunks_y {
            for cz in 0..chunks_z {
                for cx in 0..chunks_x {
                    chunks.push(Chunk::new(Point3::new(cx, cy, cz)));
                }
            }
        }

        info!(
            "world created: {}x{}x{} cells in {}x{}x{} chunks",
            config.size_x, config.size_y, config.size_z, chunks_x, chunks_y, chunks_z
        );

        VoxelWorld {
            config,
            palette,
            chunks,
            chunks_x,
            chunks_y,
            chunks_z,
            seed: 0,
        }
    }

    /// The world's configuration.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The block-type registry.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The seed of the last generation run (or of an imported snapshot).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub(crate) fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Chunk-grid dimensions along each axis.
    pub fn chunk_counts(&self) -> (i32, i32, i32) {
        (self.chunks_x, self.chunks_y, self.chunks_z)
    }

    /// Iterates all chunks; the renderer walks this to pick up built
    /// meshes.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter()
    }

    /// Whether a world coordinate lies inside the configured extent.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && x < self.config.size_x
            && y < self.config.size_y
            && z < self.config.size_z
    }

    #[inline]
    fn chunk_index(&self, cx: i32, cy: i32, cz: i32) -> usize {
        ((cy * self.chunks_z + cz) * self.chunks_x + cx) as usize
    }

    /// Borrows the chunk at a chunk-grid coordinate.
    pub fn chunk_at(&self, cx: i32, cy: i32, cz: i32) -> Option<&Chunk> {
        if cx < 0 || cy < 0 || cz < 0 || cx >= self.chunks_x || cy >= self.chunks_y || cz >= self.chunks_z
        {
            return None;
        }
        Some(&self.chunks[self.chunk_index(cx, cy, cz)])
    }

    /// Reads the identity at a world coordinate.
    ///
    /// # Returns
    /// The stored identity, or air for out-of-bounds coordinates.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockId {
        if !self.in_bounds(x, y, z) {
            return AIR;
        }
        let (cx, lx) = (x.div_euclid(CHUNK_DIM), x.rem_euclid(CHUNK_DIM));
        let (cy, ly) = (y.div_euclid(CHUNK_DIM), y.rem_euclid(CHUNK_DIM));
        let (cz, lz) = (z.div_euclid(CHUNK_DIM), z.rem_euclid(CHUNK_DIM));
        self.chunks[self.chunk_index(cx, cy, cz)].get(lx, ly, lz)
    }

    /// O(1) solidity check at a world coordinate, backed by the chunks'
    /// bit vectors. Out-of-bounds coordinates are not solid.
    #[inline]
    pub fn is_solid_at(&self, x: i32, y: i32, z: i32) -> bool {
        if !self.in_bounds(x, y, z) {
            return false;
        }
        let (cx, lx) = (x.div_euclid(CHUNK_DIM), x.rem_euclid(CHUNK_DIM));
        let (cy, ly) = (y.div_euclid(CHUNK_DIM), y.rem_euclid(CHUNK_DIM));
        let (cz, lz) = (z.div_euclid(CHUNK_DIM), z.rem_euclid(CHUNK_DIM));
        self.chunks[self.chunk_index(cx, cy, cz)].is_solid(lx, ly, lz)
    }

    /// Writes an identity at a world coordinate.
    ///
    /// Marks the owning chunk dirty, and whenever the cell lies on a chunk
    /// boundary also marks the neighboring chunk across that face dirty:
    /// face culling reads immediate neighbors, so a boundary write makes
    /// the neighbor's derived geometry stale too. Out-of-bounds writes are
    /// no-ops.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, id: BlockId) {
        if !self.in_bounds(x, y, z) {
            return;
        }
        let (cx, lx) = (x.div_euclid(CHUNK_DIM), x.rem_euclid(CHUNK_DIM));
        let (cy, ly) = (y.div_euclid(CHUNK_DIM), y.rem_euclid(CHUNK_DIM));
        let (cz, lz) = (z.div_euclid(CHUNK_DIM), z.rem_euclid(CHUNK_DIM));

        let index = self.chunk_index(cx, cy, cz);
        self.chunks[index].set(lx, ly, lz, id, &self.palette);

        if lx == 0 {
            self.mark_chunk_dirty(cx - 1, cy, cz);
        }
        if lx == CHUNK_DIM - 1 {
            self.mark_chunk_dirty(cx + 1, cy, cz);
        }
        if ly == 0 {
            self.mark_chunk_dirty(cx, cy - 1, cz);
        }
        if ly == CHUNK_DIM - 1 {
            self.mark_chunk_dirty(cx, cy + 1, cz);
        }
        if lz == 0 {
            self.mark_chunk_dirty(cx, cy, cz - 1);
        }
        if lz == CHUNK_DIM - 1 {
            self.mark_chunk_dirty(cx, cy, cz + 1);
        }
    }

    fn mark_chunk_dirty(&mut self, cx: i32, cy: i32, cz: i32) {
        if cx < 0 || cy < 0 || cz < 0 || cx >= self.chunks_x || cy >= self.chunks_y || cz >= self.chunks_z
        {
            return;
        }
        let index = self.chunk_index(cx, cy, cz);
        self.chunks[index].mark_dirty();
    }

    /// Breaks the block at a world coordinate.
    ///
    /// # Returns
    /// `false` when the identity's descriptor is unbreakable (bedrock),
    /// leaving the cell untouched; `true` after writing air otherwise.
    pub fn break_at(&mut self, x: i32, y: i32, z: i32) -> bool {
        let id = self.get_block(x, y, z);
        if self.palette.get(id).is_unbreakable() {
            debug!("refused to break unbreakable block at ({}, {}, {})", x, y, z);
            return false;
        }
        self.set_block(x, y, z, AIR);
        true
    }

    /// Builds the face-culled mesh of every chunk. Part of the initial full
    /// derivation; incremental updates go through
    /// [`VoxelWorld::rebuild_dirty_chunks`].
    pub fn build_meshes(&mut self) {
        for chunk in &mut self.chunks {
            chunk.build_mesh(&self.palette);
        }
        info!("built meshes for {} chunks", self.chunks.len());
    }

    /// Derives the collision body of every chunk into the sink. Pairs with
    /// [`VoxelWorld::build_meshes`] for the initial full derivation.
    pub fn build_physics(&mut self, sink: &mut dyn CollisionSink) {
        for chunk in &self.chunks {
            chunk.update_physics(sink, &self.palette);
        }
        for chunk in &mut self.chunks {
            chunk.clear_dirty();
        }
        info!("built collision for {} chunks", self.chunks.len());
    }

    /// Regenerates mesh and collision for every dirty chunk, then clears
    /// its flag.
    ///
    /// This is the only place derived geometry is regenerated after the
    /// initial build. The pass is designed to cost nothing when nothing
    /// changed.
    ///
    /// # Returns
    /// The number of chunks rebuilt; `0` means the pass did no work.
    pub fn rebuild_dirty_chunks(&mut self, sink: &mut dyn CollisionSink) -> usize {
        let mut rebuilt = 0;
        for index in 0..self.chunks.len() {
            if !self.chunks[index].is_dirty() {
                continue;
            }
            self.chunks[index].build_mesh(&self.palette);
            self.chunks[index].update_physics(sink, &self.palette);
            self.chunks[index].clear_dirty();
            rebuilt += 1;
        }
        if rebuilt > 0 {
            debug!("rebuilt {} dirty chunks", rebuilt);
        }
        rebuilt
    }

    /// The highest solid cell in a column, if any.
    pub fn get_top_solid_y(&self, x: i32, z: i32) -> Option<i32> {
        (0..self.config.size_y).rev().find(|&y| self.is_solid_at(x, y, z))
    }

    /// A safe place to drop the player: above the top solid cell of the
    /// world-center column, with the configured clearance. Falls back to a
    /// fixed height when the center column is empty.
    pub fn recommended_spawn(&self) -> Point3<f32> {
        let cx = self.config.size_x / 2;
        let cz = self.config.size_z / 2;
        let y = match self.get_top_solid_y(cx, cz) {
            Some(top) => top as f32 + 1.0 + self.config.spawn_clearance,
            None => self.config.fallback_spawn_height,
        };
        Point3::new(cx as f32 + 0.5, y, cz as f32 + 0.5)
    }

    pub(crate) fn reset_all_chunks(&mut self) {
        for chunk in &mut self.chunks {
            chunk.fill_air();
        }
    }

    pub(crate) fn chunk_index_checked(&self, cx: i32, cy: i32, cz: i32) -> Option<usize> {
        if cx < 0 || cy < 0 || cz < 0 || cx >= self.chunks_x || cy >= self.chunks_y || cz >= self.chunks_z
        {
            return None;
        }
        Some(self.chunk_index(cx, cy, cz))
    }

    pub(crate) fn chunk_len(&self) -> usize {
        self.chunks.len()
    }
}

#[inline]
fn div_ceil(a: i32, b: i32) -> i32 {
    (a + b - 1) / b
}
