//! # Block Side Module
//!
//! This module defines the six faces of a voxel block together with their
//! outward normals and neighbor-cell offsets. Face culling and mesh
//! emission iterate these in a fixed order.

use cgmath::Vector3;

/// Represents the six faces of a voxel block.
///
/// Each variant is assigned a stable integer value used to index
/// per-face lookup tables. The order is:
/// [NegX, PosX, NegY, PosY, NegZ, PosZ]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The face looking down the negative X axis.
    NegX = 0,

    /// The face looking down the positive X axis.
    PosX = 1,

    /// The bottom face (negative Y).
    NegY = 2,

    /// The top face (positive Y).
    PosY = 3,

    /// The face looking down the negative Z axis.
    NegZ = 4,

    /// The face looking down the positive Z axis.
    PosZ = 5,
}

impl BlockSide {
    /// Returns all six faces in table order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::NegX,
            BlockSide::PosX,
            BlockSide::NegY,
            BlockSide::PosY,
            BlockSide::NegZ,
            BlockSide::PosZ,
        ]
    }

    /// The integer offset from a cell to its neighbor across this face.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::NegX => Vector3::new(-1, 0, 0),
            BlockSide::PosX => Vector3::new(1, 0, 0),
            BlockSide::NegY => Vector3::new(0, -1, 0),
            BlockSide::PosY => Vector3::new(0, 1, 0),
            BlockSide::NegZ => Vector3::new(0, 0, -1),
            BlockSide::PosZ => Vector3::new(0, 0, 1),
        }
    }

    /// The outward unit normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        let o = self.offset();
        Vector3::new(o.x as f32, o.y as f32, o.z as f32)
    }
}
