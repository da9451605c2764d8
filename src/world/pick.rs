//! # Pick Module
//!
//! Ray-voxel traversal: discrete stepping of a ray through successive grid
//! cells (3-D DDA) to find the first solid cell it enters. This backs the
//! mining/placing crosshair query and any line-of-sight test the
//! surrounding game asks for.
//!
//! Ties between axes are broken in a fixed X, then Y, then Z priority so a
//! ray grazing exactly along a cell edge traverses the same cells on every
//! run. Out-of-bounds cells are skipped rather than terminating the cast,
//! so a ray may leave the world over a void region and re-enter it.

use cgmath::{InnerSpace, Point3, Vector3, Zero};

use super::VoxelWorld;

/// The result of a successful pick: which cell was hit, through which face
/// the ray entered it, and how far the ray travelled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Integer coordinate of the struck voxel.
    pub cell: Point3<i32>,
    /// Outward normal of the entry face: one axis at ±1, the others 0. The
    /// zero vector when the ray origin was already inside a solid cell.
    pub normal: Vector3<i32>,
    /// Distance travelled along the ray to the entry face.
    pub distance: f32,
}

impl VoxelWorld {
    /// Casts a ray and returns the first solid voxel it enters.
    ///
    /// # Arguments
    /// * `origin` - Continuous-space ray start
    /// * `direction` - Ray direction; normalized internally
    /// * `max_distance` - Travel cap; the cast reports no hit beyond it
    ///
    /// # Returns
    /// `Some(Hit)` at distance 0 with a zero normal when the origin's own
    /// cell is solid; otherwise the first in-bounds solid cell entered
    /// within the cap, or `None`.
    pub fn pick_first_solid(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<Hit> {
        if direction.magnitude2() <= f32::EPSILON {
            return None;
        }
        let dir = direction.normalize();

        let mut cell = Point3::new(
            origin.x.floor() as i32,
            origin.y.floor() as i32,
            origin.z.floor() as i32,
        );

        if self.is_solid_at(cell.x, cell.y, cell.z) {
            return Some(Hit {
                cell,
                normal: Vector3::zero(),
                distance: 0.0,
            });
        }

        // Per axis: the step sign, the parametric distance between grid
        // plane crossings, and the distance to the first crossing.
        let step = Vector3::new(sign(dir.x), sign(dir.y), sign(dir.z));
        let t_delta = Vector3::new(inv_abs(dir.x), inv_abs(dir.y), inv_abs(dir.z));
        let mut t_max = Vector3::new(
            first_crossing(origin.x, dir.x, cell.x),
            first_crossing(origin.y, dir.y, cell.y),
            first_crossing(origin.z, dir.z, cell.z),
        );

        loop {
            // Advance along the axis with the nearest pending crossing;
            // ties resolve X before Y before Z.
            let (distance, normal) = if t_max.x <= t_max.y && t_max.x <= t_max.z {
                cell.x += step.x;
                let d = t_max.x;
                t_max.x += t_delta.x;
                (d, Vector3::new(-step.x, 0, 0))
            } else if t_max.y <= t_max.z {
                cell.y += step.y;
                let d = t_max.y;
                t_max.y += t_delta.y;
                (d, Vector3::new(0, -step.y, 0))
            } else {
                cell.z += step.z;
                let d = t_max.z;
                t_max.z += t_delta.z;
                (d, Vector3::new(0, 0, -step.z))
            };

            if distance > max_distance {
                return None;
            }
            if self.is_solid_at(cell.x, cell.y, cell.z) {
                return Some(Hit {
                    cell,
                    normal,
                    distance,
                });
            }
        }
    }
}

#[inline]
fn sign(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

#[inline]
fn inv_abs(v: f32) -> f32 {
    if v == 0.0 {
        f32::INFINITY
    } else {
        1.0 / v.abs()
    }
}

/// Parametric distance from the origin to the first grid-plane crossing on
/// one axis; infinite when the ray never crosses planes on that axis.
#[inline]
fn first_crossing(origin: f32, dir: f32, cell: i32) -> f32 {
    if dir > 0.0 {
        ((cell + 1) as f32 - origin) / dir
    } else if dir < 0.0 {
        (origin - cell as f32) / -dir
    } else {
        f32::INFINITY
    }
}
