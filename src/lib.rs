#![warn(missing_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Terrain
//!
//! A chunked voxel terrain engine: a volumetric grid that stores block
//! identities, procedurally generates island terrain, incrementally
//! rebuilds visual and collision geometry only where data changed, and
//! answers line-of-sight "first solid voxel" queries for mining, placing,
//! and interaction.
//!
//! ## Key Modules
//!
//! * `block` - Block identities, the descriptor record, and the ordered
//!   palette mapping one to the other
//! * `chunk` - Fixed-size 16x16x16 voxel containers with dirty tracking,
//!   face-culled meshing, and solid-only collision filtering
//! * `world` - The authoritative grid: coordinate routing, staged
//!   procedural generation, ray picking, rebuild orchestration, and sparse
//!   snapshot persistence
//!
//! ## Data Flow
//!
//! 1. [`world::VoxelWorld::generate`] populates all chunks from a seed
//! 2. [`world::VoxelWorld::build_meshes`] and
//!    [`world::VoxelWorld::build_physics`] perform the full first
//!    derivation
//! 3. Runtime mutations ([`world::VoxelWorld::set_block`],
//!    [`world::VoxelWorld::break_at`]) mark affected chunks dirty,
//!    including neighbors across shared boundaries
//! 4. A periodic [`world::VoxelWorld::rebuild_dirty_chunks`] pass
//!    regenerates geometry only where it is stale
//! 5. [`world::VoxelWorld::pick_first_solid`] is a pure read-only query
//!    usable at any time
//!
//! ## Threading
//!
//! The engine is single-threaded by design: one owning simulation thread
//! makes every call, and background saving works from a
//! [`world::persistence::WorldSnapshot`] taken synchronously on that
//! thread. There is no locking inside the engine.

pub mod block;
pub mod chunk;
pub mod world;

pub use block::block_side::BlockSide;
pub use block::descriptor::{BlockDescriptor, BreakHook, MineHook};
pub use block::palette::Palette;
pub use block::{BlockId, BlockKind, AIR};
pub use chunk::collision::{ChunkCollider, CollisionSink};
pub use chunk::mesh::{ChunkMesh, MeshBatch, MeshVertex};
pub use chunk::{Chunk, CHUNK_DIM, CHUNK_VOLUME};
pub use world::persistence::{ChunkRecord, WorldSnapshot};
pub use world::pick::Hit;
pub use world::{OreVeinConfig, VoxelWorld, WorldConfig};
