//! # Chunk Collision Module
//!
//! This module derives the filtered collision representation of a chunk and
//! defines the seam to the physics collaborator. Collision reuses the
//! face-culled mesh but keeps only batches whose identity is solid, so
//! water is rendered yet never collided with.

use cgmath::Point3;

use crate::block::palette::Palette;

use super::Chunk;

/// Solid-only triangle geometry for one chunk, in world cell units.
#[derive(Debug, Default)]
pub struct ChunkCollider {
    /// Triangle vertices.
    pub vertices: Vec<[f32; 3]>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

impl ChunkCollider {
    /// The number of triangles in the collider.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// The physics collaborator seam.
///
/// The world calls this once per derivation for every chunk whose geometry
/// changed. `None` means the chunk has no solid geometry and any previous
/// body for it must be removed; `Some` replaces the previous body.
pub trait CollisionSink {
    /// Replaces (or removes) the collision body for one chunk.
    ///
    /// # Arguments
    /// * `chunk` - Chunk-grid coordinates identifying the body
    /// * `collider` - The new solid-only geometry, or `None`
    fn replace_collider(&mut self, chunk: Point3<i32>, collider: Option<ChunkCollider>);
}

impl Chunk {
    /// Rebuilds this chunk's collision body from its current mesh.
    ///
    /// Batches whose identity is not solid (water) are excluded even though
    /// they were meshed for rendering. When no solid geometry remains the
    /// sink is told to drop the body. The caller must have run
    /// [`Chunk::build_mesh`] first; the world's derivation passes always
    /// pair the two.
    ///
    /// # Arguments
    /// * `sink` - The physics collaborator receiving the geometry
    /// * `palette` - Descriptor lookup for the solid filter
    pub fn update_physics(&self, sink: &mut dyn CollisionSink, palette: &Palette) {
        let Some(mesh) = self.mesh() else {
            sink.replace_collider(self.position(), None);
            return;
        };

        let mut collider = ChunkCollider::default();
        for batch in &mesh.batches {
            if !palette.is_solid(batch.block) {
                continue;
            }
            let base = collider.vertices.len() as u32;
            collider
                .vertices
                .extend(batch.vertices.iter().map(|v| v.position));
            collider
                .indices
                .extend(batch.indices.iter().map(|i| i + base));
        }

        if collider.vertices.is_empty() {
            sink.replace_collider(self.position(), None);
        } else {
            sink.replace_collider(self.position(), Some(collider));
        }
    }
}
