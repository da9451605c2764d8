//! # Chunk Module
//!
//! This module provides the `Chunk` struct managing one fixed-size 16x16x16
//! sub-volume of the voxel grid. A chunk owns the raw block identities for
//! its region, tracks whether its derived geometry is stale, and derives a
//! face-culled mesh and a filtered collision representation on demand.
//!
//! ## Storage
//!
//! Cells are a dense one-byte-per-cell array in a fixed index order, plus a
//! parallel solidity bit vector kept consistent with the palette on every
//! write. The bit vector gives the mesher and the ray traversal O(1)
//! solidity checks without a descriptor lookup in the inner loop.
//!
//! ## Dirty protocol
//!
//! A chunk starts dirty so the first derivation pass always builds it. Any
//! mutation of its own cells marks it dirty again; the world additionally
//! marks neighbors when a mutation lands on a shared boundary, because face
//! culling depends on adjacent cells. The flag is cleared only by the
//! world's rebuild pass, strictly after both mesh and collision derivation
//! completed.

use bitvec::prelude::BitVec;
use bitvec::bitvec;
use cgmath::Point3;
use log::warn;

use crate::block::palette::Palette;
use crate::block::{BlockId, AIR};

use self::mesh::ChunkMesh;

pub mod collision;
pub mod mesh;

/// The dimension (width, height, depth) of a chunk in cells.
pub const CHUNK_DIM: i32 = 16;
/// The number of cells in a single 2-D plane of a chunk.
pub const CHUNK_PLANE: i32 = CHUNK_DIM * CHUNK_DIM;
/// The total number of cells in a chunk.
pub const CHUNK_VOLUME: usize = (CHUNK_PLANE * CHUNK_DIM) as usize;

/// One fixed-size cubic sub-volume of the world grid: the unit of mesh and
/// collision derivation and of dirty tracking.
pub struct Chunk {
    /// The position of this chunk in chunk-grid coordinates (not cell
    /// coordinates).
    position: Point3<i32>,

    /// Dense block identities, one byte per cell, indexed by
    /// [`Chunk::cell_index`].
    cells: Box<[BlockId; CHUNK_VOLUME]>,

    /// One bit per cell, set iff the cell's identity resolves to a solid
    /// descriptor. Kept consistent with `cells` on every write.
    solid: BitVec,

    /// Whether derived geometry is stale relative to the cell data.
    dirty: bool,

    /// The face-culled mesh from the last build, if any.
    mesh: Option<ChunkMesh>,
}

impl Chunk {
    /// Creates a chunk with every cell set to air.
    ///
    /// New chunks start dirty so the first derivation pass builds them.
    ///
    /// # Arguments
    /// * `position` - The chunk-grid coordinates of the new chunk
    pub fn new(position: Point3<i32>) -> Self {
        Chunk {
            position,
            cells: Box::new([AIR; CHUNK_VOLUME]),
            solid: bitvec![0; CHUNK_VOLUME],
            dirty: true,
            mesh: None,
        }
    }

    /// The flat index of a local cell coordinate.
    ///
    /// The order is fixed (x fastest, then z, then y) and shared with the
    /// sparse snapshot payload, so it must never change.
    #[inline]
    pub fn cell_index(lx: i32, ly: i32, lz: i32) -> usize {
        ((ly * CHUNK_DIM + lz) * CHUNK_DIM + lx) as usize
    }

    /// This chunk's position in chunk-grid coordinates.
    #[inline]
    pub fn position(&self) -> Point3<i32> {
        self.position
    }

    /// Reads the identity at a local coordinate (0..16 per axis).
    ///
    /// The world is responsible for translating global coordinates; local
    /// coordinates are always in range by contract.
    #[inline]
    pub fn get(&self, lx: i32, ly: i32, lz: i32) -> BlockId {
        self.cells[Self::cell_index(lx, ly, lz)]
    }

    /// Writes the identity at a local coordinate and marks the chunk dirty.
    ///
    /// # Arguments
    /// * `lx`, `ly`, `lz` - Local cell coordinates (0..16)
    /// * `id` - The identity to store
    /// * `palette` - Used to refresh the solidity bit for the cell
    pub fn set(&mut self, lx: i32, ly: i32, lz: i32, id: BlockId, palette: &Palette) {
        let index = Self::cell_index(lx, ly, lz);
        self.cells[index] = id;
        self.solid.set(index, palette.is_solid(id));
        self.dirty = true;
    }

    /// O(1) solidity check backed by the bit vector.
    #[inline]
    pub fn is_solid(&self, lx: i32, ly: i32, lz: i32) -> bool {
        self.solid[Self::cell_index(lx, ly, lz)]
    }

    /// Marks derived geometry as stale.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether derived geometry is stale.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag. Called by the world's rebuild pass only,
    /// strictly after mesh and collision derivation both completed.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Whether the chunk holds no non-air cell. Empty chunks are skipped by
    /// the sparse snapshot export.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&id| id == AIR)
    }

    /// Raw cell payload in index order, for snapshotting.
    pub fn cells(&self) -> &[BlockId; CHUNK_VOLUME] {
        &self.cells
    }

    /// Resets every cell to air and marks the chunk dirty.
    pub fn fill_air(&mut self) {
        self.cells.fill(AIR);
        self.solid.fill(false);
        self.mesh = None;
        self.dirty = true;
    }

    /// Replaces the whole cell payload from a snapshot and marks the chunk
    /// dirty.
    ///
    /// Identities the palette does not know resolve to air: a save written
    /// by a build with more registered types loads as "nothing here"
    /// instead of failing or meshing phantom geometry.
    pub fn apply_cells(&mut self, payload: &[BlockId], palette: &Palette) {
        debug_assert_eq!(payload.len(), CHUNK_VOLUME);
        let mut unknown = 0usize;
        for (index, &id) in payload.iter().enumerate() {
            let id = if (id as usize) < palette.len() {
                id
            } else {
                unknown += 1;
                AIR
            };
            self.cells[index] = id;
            self.solid.set(index, palette.is_solid(id));
        }
        if unknown > 0 {
            warn!(
                "chunk {:?}: {} cells held identities unknown to the palette, loaded as air",
                self.position, unknown
            );
        }
        self.dirty = true;
    }

    /// The face-culled mesh from the last build, if one was built.
    pub fn mesh(&self) -> Option<&ChunkMesh> {
        self.mesh.as_ref()
    }

    pub(crate) fn set_mesh(&mut self, mesh: ChunkMesh) {
        self.mesh = Some(mesh);
    }
}
