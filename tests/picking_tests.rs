//! Integration tests for the ray-voxel traversal: immediate hits, misses,
//! face normals, axis tie-breaking, and out-of-bounds skipping.

use cgmath::{Point3, Vector3};
use voxel_terrain::{BlockKind, Palette, VoxelWorld, WorldConfig};

fn empty_world() -> VoxelWorld {
    VoxelWorld::new(WorldConfig::default(), Palette::standard())
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn origin_inside_a_solid_cell_hits_at_distance_zero() {
    let mut world = empty_world();
    world.set_block(8, 8, 8, BlockKind::Stone.id());

    let hit = world
        .pick_first_solid(
            Point3::new(8.5, 8.5, 8.5),
            Vector3::new(1.0, 0.0, 0.0),
            10.0,
        )
        .expect("origin cell is solid");

    assert_eq!(hit.cell, Point3::new(8, 8, 8));
    assert_eq!(hit.normal, Vector3::new(0, 0, 0), "immediate hits carry a zero normal");
    assert_eq!(hit.distance, 0.0);
}

#[test]
fn ray_into_open_sky_misses() {
    let world = empty_world();
    let hit = world.pick_first_solid(
        Point3::new(8.5, 8.5, 8.5),
        Vector3::new(0.0, 1.0, 0.0),
        100.0,
    );
    assert!(hit.is_none());
}

#[test]
fn solid_beyond_the_distance_cap_is_not_reported() {
    let mut world = empty_world();
    world.set_block(20, 8, 8, BlockKind::Stone.id());

    let origin = Point3::new(8.5, 8.5, 8.5);
    let dir = Vector3::new(1.0, 0.0, 0.0);
    assert!(world.pick_first_solid(origin, dir, 5.0).is_none());
    assert!(world.pick_first_solid(origin, dir, 20.0).is_some());
}

#[test]
fn downward_ray_reports_the_top_face_and_travel_distance() {
    let mut world = empty_world();
    world.set_block(8, 5, 8, BlockKind::Grass.id());

    let hit = world
        .pick_first_solid(
            Point3::new(8.5, 10.0, 8.5),
            Vector3::new(0.0, -1.0, 0.0),
            64.0,
        )
        .expect("grass below the origin");

    assert_eq!(hit.cell, Point3::new(8, 5, 8));
    assert_eq!(hit.normal, Vector3::new(0, 1, 0), "entered through the top face");
    assert!(approx(hit.distance, 4.0), "distance was {}", hit.distance);
}

#[test]
fn horizontal_ray_crosses_a_chunk_seam() {
    let mut world = empty_world();
    world.set_block(16, 5, 5, BlockKind::Stone.id());

    let hit = world
        .pick_first_solid(
            Point3::new(14.5, 5.5, 5.5),
            Vector3::new(1.0, 0.0, 0.0),
            10.0,
        )
        .expect("stone in the next chunk over");

    assert_eq!(hit.cell, Point3::new(16, 5, 5));
    assert_eq!(hit.normal, Vector3::new(-1, 0, 0));
    assert!(approx(hit.distance, 1.5), "distance was {}", hit.distance);
}

#[test]
fn ray_grazing_exactly_along_a_chunk_boundary_still_hits() {
    let mut world = empty_world();
    // z = 16.0 is the plane between chunk rows; the traversal must keep
    // finding cells rather than slipping between them.
    world.set_block(4, 5, 16, BlockKind::Stone.id());

    let hit = world
        .pick_first_solid(
            Point3::new(0.5, 5.5, 16.0),
            Vector3::new(1.0, 0.0, 0.0),
            20.0,
        )
        .expect("stone along the seam row");

    assert_eq!(hit.cell, Point3::new(4, 5, 16));
    assert_eq!(hit.normal, Vector3::new(-1, 0, 0));
}

#[test]
fn axis_ties_resolve_x_before_y() {
    let mut world = empty_world();
    world.set_block(2, 1, 1, BlockKind::Stone.id());
    world.set_block(1, 2, 1, BlockKind::Stone.id());

    // From the cell center, both the x and y crossings are equidistant the
    // whole way; the fixed priority must pick X first.
    let hit = world
        .pick_first_solid(
            Point3::new(1.0, 1.0, 1.5),
            Vector3::new(1.0, 1.0, 0.0),
            10.0,
        )
        .expect("two candidate cells ahead");

    assert_eq!(hit.cell, Point3::new(2, 1, 1));
    assert_eq!(hit.normal, Vector3::new(-1, 0, 0));
}

#[test]
fn out_of_bounds_cells_are_skipped_not_terminal() {
    let mut world = empty_world();
    world.set_block(8, 5, 8, BlockKind::Stone.id());

    // The origin is above the world; the ray crosses out-of-bounds cells
    // first, then re-enters and must still find the block.
    let height = world.config().size_y as f32;
    let hit = world
        .pick_first_solid(
            Point3::new(8.5, height + 10.0, 8.5),
            Vector3::new(0.0, -1.0, 0.0),
            200.0,
        )
        .expect("ray re-enters the world volume");

    assert_eq!(hit.cell, Point3::new(8, 5, 8));
    assert_eq!(hit.normal, Vector3::new(0, 1, 0));
}

#[test]
fn zero_direction_reports_no_hit() {
    let world = empty_world();
    let hit = world.pick_first_solid(
        Point3::new(8.5, 8.5, 8.5),
        Vector3::new(0.0, 0.0, 0.0),
        10.0,
    );
    assert!(hit.is_none());
}

#[test]
fn picking_ignores_water() {
    let mut world = empty_world();
    world.set_block(10, 8, 8, BlockKind::Water.id());
    world.set_block(12, 8, 8, BlockKind::Sand.id());

    let hit = world
        .pick_first_solid(
            Point3::new(8.5, 8.5, 8.5),
            Vector3::new(1.0, 0.0, 0.0),
            10.0,
        )
        .expect("sand behind the water");

    assert_eq!(hit.cell, Point3::new(12, 8, 8), "the ray passes through water");
}
