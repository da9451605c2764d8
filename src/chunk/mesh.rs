//! # Chunk Mesh Module
//!
//! This module derives renderable geometry from a chunk's cell data using
//! face culling: a face is emitted only when the neighboring cell would not
//! occlude it. Faces are grouped per block identity so each identity yields
//! at most one batch per chunk, and transparent identities are flagged for
//! the separate render pass.
//!
//! Neighbor checks are chunk-local on purpose: a cell in the adjacent chunk
//! counts as non-solid for emission. That is geometrically conservative
//! (seam faces may be over-drawn) but never wrong, and it keeps mesh
//! derivation a pure function of one chunk's data.

use std::collections::BTreeMap;

use crate::block::block_side::BlockSide;
use crate::block::palette::Palette;
use crate::block::{BlockId, AIR};

use super::{Chunk, CHUNK_DIM};

/// One mesh vertex as handed to the renderer.
///
/// `#[repr(C)]` plus the bytemuck derives let a batch's vertex vector be
/// uploaded as a raw byte slice.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Cell-space corner position, in world cell units.
    pub position: [f32; 3],
    /// Outward face normal.
    pub normal: [f32; 3],
    /// Texture coordinate within the face.
    pub uv: [f32; 2],
}

/// All faces of one block identity within one chunk.
#[derive(Debug)]
pub struct MeshBatch {
    /// The identity every face in this batch belongs to.
    pub block: BlockId,
    /// Whether the batch renders in the separate transparent pass.
    pub transparent: bool,
    /// Vertex data, four vertices per face.
    pub vertices: Vec<MeshVertex>,
    /// Index data, six indices (two triangles) per face.
    pub indices: Vec<u32>,
}

impl MeshBatch {
    fn new(block: BlockId, transparent: bool) -> Self {
        MeshBatch {
            block,
            transparent,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// The number of faces in this batch.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / 4
    }
}

/// The face-culled mesh of one chunk: one batch per identity present,
/// degenerate (empty) batches omitted.
#[derive(Debug, Default)]
pub struct ChunkMesh {
    /// Non-empty batches in ascending identity order.
    pub batches: Vec<MeshBatch>,
}

impl ChunkMesh {
    /// Total face count across all batches.
    pub fn face_count(&self) -> usize {
        self.batches.iter().map(MeshBatch::face_count).sum()
    }
}

/// Unit-cube corner positions per face, wound counter-clockwise seen from
/// outside the cube. Indexed by the `BlockSide` discriminant.
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    // NegX
    [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 1.0],
    ],
    // PosX
    [
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 1.0, 0.0],
    ],
    // NegY
    [
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
    ],
    // PosY
    [
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ],
    // NegZ
    [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ],
    // PosZ
    [
        [1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
    ],
];

const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

impl Chunk {
    /// Rebuilds this chunk's face-culled mesh from its cell data.
    ///
    /// For every non-air cell, a face is emitted toward each neighbor that
    /// is not solid; air, transparent water, and cells outside this chunk's
    /// own bounds all count as not solid. The result replaces any previous
    /// mesh. Building does not clear the dirty flag; the world does that
    /// once collision derivation has completed too.
    ///
    /// # Arguments
    /// * `palette` - Descriptor lookup for solidity and transparency
    pub fn build_mesh(&mut self, palette: &Palette) {
        let mut batches: BTreeMap<BlockId, MeshBatch> = BTreeMap::new();
        let base_x = (self.position().x * CHUNK_DIM) as f32;
        let base_y = (self.position().y * CHUNK_DIM) as f32;
        let base_z = (self.position().z * CHUNK_DIM) as f32;

        for ly in 0..CHUNK_DIM {
            for lz in 0..CHUNK_DIM {
                for lx in 0..CHUNK_DIM {
                    let id = self.get(lx, ly, lz);
                    if id == AIR {
                        continue;
                    }
                    for side in BlockSide::all() {
                        if self.occludes(lx, ly, lz, side) {
                            continue;
                        }
                        let batch = batches.entry(id).or_insert_with(|| {
                            MeshBatch::new(id, palette.get(id).transparent)
                        });
                        emit_face(
                            batch,
                            side,
                            base_x + lx as f32,
                            base_y + ly as f32,
                            base_z + lz as f32,
                        );
                    }
                }
            }
        }

        self.set_mesh(ChunkMesh {
            batches: batches.into_values().collect(),
        });
    }

    /// Whether the neighbor across `side` occludes the face. Neighbors in
    /// adjacent chunks are treated as non-solid (see module docs).
    fn occludes(&self, lx: i32, ly: i32, lz: i32, side: BlockSide) -> bool {
        let o = side.offset();
        let (nx, ny, nz) = (lx + o.x, ly + o.y, lz + o.z);
        if !(0..CHUNK_DIM).contains(&nx)
            || !(0..CHUNK_DIM).contains(&ny)
            || !(0..CHUNK_DIM).contains(&nz)
        {
            return false;
        }
        self.is_solid(nx, ny, nz)
    }
}

/// Appends the four vertices and six indices of one face to a batch.
fn emit_face(batch: &mut MeshBatch, side: BlockSide, x: f32, y: f32, z: f32) {
    let base = batch.vertices.len() as u32;
    let normal = side.normal();
    let corners = &FACE_CORNERS[side as usize];
    for (corner, uv) in corners.iter().zip(FACE_UVS.iter()) {
        batch.vertices.push(MeshVertex {
            position: [x + corner[0], y + corner[1], z + corner[2]],
            normal: [normal.x, normal.y, normal.z],
            uv: *uv,
        });
    }
    batch
        .indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}
