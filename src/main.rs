//! # Terrain Demo Entry Point
//!
//! A small native smoke run of the terrain engine: generate an island from
//! a seed, perform the full derivation, mutate a little, rebuild
//! incrementally, and report what happened. Useful for eyeballing
//! generation output and log volume without the surrounding game.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [seed]
//! ```

use cgmath::{Point3, Vector3};
use log::info;

use voxel_terrain::{ChunkCollider, CollisionSink, Palette, VoxelWorld, WorldConfig};

/// Counts collision geometry instead of handing it to a physics engine.
#[derive(Default)]
struct StatsSink {
    bodies: usize,
    triangles: usize,
}

impl CollisionSink for StatsSink {
    fn replace_collider(&mut self, _chunk: Point3<i32>, collider: Option<ChunkCollider>) {
        if let Some(collider) = collider {
            self.bodies += 1;
            self.triangles += collider.triangle_count();
        }
    }
}

fn main() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| fastrand::u64(..));

    let mut world = VoxelWorld::new(WorldConfig::default(), Palette::standard());
    world.generate(seed);

    world.build_meshes();
    let mut sink = StatsSink::default();
    world.build_physics(&mut sink);

    let faces: usize = world
        .chunks()
        .filter_map(|chunk| chunk.mesh())
        .map(|mesh| mesh.face_count())
        .sum();
    info!(
        "full derivation: {} faces, {} collision bodies, {} triangles",
        faces, sink.bodies, sink.triangles
    );

    let spawn = world.recommended_spawn();
    info!("recommended spawn: {:?}", spawn);

    // Look straight down from the spawn and mine whatever the crosshair
    // lands on, then show the incremental pass doing only that work.
    if let Some(hit) = world.pick_first_solid(spawn, Vector3::new(0.0, -1.0, 0.0), 64.0) {
        info!(
            "pick hit {:?} through face {:?} at distance {:.2}",
            hit.cell, hit.normal, hit.distance
        );
        world.break_at(hit.cell.x, hit.cell.y, hit.cell.z);
    }
    let rebuilt = world.rebuild_dirty_chunks(&mut sink);
    info!("incremental pass rebuilt {} chunks", rebuilt);

    let snapshot = world.export_chunks();
    match serde_json::to_vec(&snapshot) {
        Ok(bytes) => info!(
            "snapshot: {} non-empty chunks, {} KiB as JSON",
            snapshot.chunks.len(),
            bytes.len() / 1024
        ),
        Err(err) => log::error!("snapshot serialization failed: {}", err),
    }
}
