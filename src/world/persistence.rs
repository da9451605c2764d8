//! # Persistence Module
//!
//! Sparse chunk-state export and import. Only chunks holding at least one
//! non-air cell are serialized, keyed by their chunk-grid coordinates. The
//! codec and the save thread are the save collaborator's business; this
//! module only defines the snapshot value and the synchronous
//! take/apply operations on the owning thread.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::chunk::CHUNK_VOLUME;

use super::VoxelWorld;

/// One non-empty chunk's payload: its grid coordinate and its dense cell
/// cube in [`crate::chunk::Chunk::cell_index`] order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkRecord {
    /// Chunk-grid coordinates `[cx, cy, cz]`.
    pub position: [i32; 3],
    /// Dense cell identities, `CHUNK_VOLUME` bytes.
    pub cells: Vec<u8>,
}

/// A complete sparse snapshot of the world's voxel content.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WorldSnapshot {
    /// The generation seed active when the snapshot was taken.
    pub seed: u64,
    /// Non-empty chunks only.
    pub chunks: Vec<ChunkRecord>,
}

impl VoxelWorld {
    /// Takes a sparse snapshot of the current voxel content.
    ///
    /// Must run on the owning thread; the returned value is safe to hand to
    /// a background save worker afterwards.
    pub fn export_chunks(&self) -> WorldSnapshot {
        let chunks: Vec<ChunkRecord> = self
            .chunks()
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| ChunkRecord {
                position: [chunk.position().x, chunk.position().y, chunk.position().z],
                cells: chunk.cells().to_vec(),
            })
            .collect();
        info!(
            "exported {} non-empty chunks of {}",
            chunks.len(),
            self.chunk_len()
        );
        WorldSnapshot {
            seed: self.seed(),
            chunks,
        }
    }

    /// Replaces the world's voxel content with a snapshot.
    ///
    /// Every chunk is first reset to air and marked dirty, then the sparse
    /// payload is applied, so the next rebuild pass regenerates geometry
    /// for the loaded state everywhere. Records with out-of-range
    /// coordinates or a malformed payload length are skipped with a
    /// warning; identities the palette does not know degrade to air
    /// behavior via the palette fallback.
    pub fn import_chunks(&mut self, snapshot: &WorldSnapshot) {
        self.reset_all_chunks();

        let mut applied = 0usize;
        for record in &snapshot.chunks {
            if record.cells.len() != CHUNK_VOLUME {
                warn!(
                    "skipping chunk record at {:?}: payload is {} bytes, expected {}",
                    record.position,
                    record.cells.len(),
                    CHUNK_VOLUME
                );
                continue;
            }
            let [cx, cy, cz] = record.position;
            let Some(index) = self.chunk_index_checked(cx, cy, cz) else {
                warn!(
                    "skipping chunk record at {:?}: outside the chunk grid",
                    record.position
                );
                continue;
            };
            self.chunks[index].apply_cells(&record.cells, &self.palette);
            applied += 1;
        }

        self.set_seed(snapshot.seed);
        info!("imported {} chunk records", applied);
    }
}
