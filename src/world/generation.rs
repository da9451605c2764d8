//! # Generation Module
//!
//! Staged procedural generation of the island world. Stages run in a fixed
//! order, each depending on the previous: base terrain shapes the columns,
//! ore veins grow inside the stone, trees sprout on grass, and minigame
//! targets land last. All randomness flows from one seeded generator plus
//! two seeded noise fields, so a fixed seed reproduces the world
//! byte-for-byte.

use fastrand::Rng;
use log::info;
use noise::{NoiseFn, Perlin};

use crate::block::{BlockKind, AIR};

use super::VoxelWorld;

impl VoxelWorld {
    /// Regenerates the whole world from a seed.
    ///
    /// Resets every chunk to air, then runs the four stages. Every chunk
    /// ends up dirty, so the next derivation pass rebuilds everything.
    ///
    /// # Arguments
    /// * `seed` - Drives the noise fields and the random walks; the same
    ///   seed always produces identical voxel content
    pub fn generate(&mut self, seed: u64) {
        self.set_seed(seed);
        self.reset_all_chunks();

        let height_noise = Perlin::new(seed as u32);
        let cave_noise = Perlin::new((seed as u32).wrapping_add(0x9e37));
        let mut rng = Rng::with_seed(seed);

        self.stage_base_terrain(&height_noise, &cave_noise);
        self.stage_ore_veins(&mut rng);
        self.stage_trees(&mut rng);
        self.stage_targets(&mut rng);

        info!("generated world from seed {}", seed);
    }

    /// Stage 1: per-column terrain classified by Chebyshev distance from
    /// the world center into land, beach ring, ocean ring, and void.
    fn stage_base_terrain(&mut self, height_noise: &Perlin, cave_noise: &Perlin) {
        let cfg = self.config().clone();
        let center_x = cfg.size_x / 2;
        let center_z = cfg.size_z / 2;
        let beach_edge = cfg.land_radius + cfg.sand_width;
        let ocean_edge = beach_edge + cfg.water_width;

        let stone = BlockKind::Stone.id();
        let bedrock = BlockKind::Bedrock.id();
        let dirt = BlockKind::Dirt.id();
        let grass = BlockKind::Grass.id();
        let sand = BlockKind::Sand.id();
        let water = BlockKind::Water.id();

        for z in 0..cfg.size_z {
            for x in 0..cfg.size_x {
                let d = (x - center_x).abs().max((z - center_z).abs());

                if d <= cfg.land_radius {
                    let offset = height_noise.get([
                        x as f64 * cfg.height_noise_scale,
                        z as f64 * cfg.height_noise_scale,
                    ]) * cfg.height_amplitude;
                    let surface =
                        (cfg.base_height + offset.round() as i32).clamp(2, cfg.size_y - 2);

                    self.set_block(x, 0, z, bedrock);
                    for y in 1..=surface {
                        let id = if y <= surface - 4 {
                            stone
                        } else if y < surface {
                            dirt
                        } else {
                            grass
                        };
                        self.set_block(x, y, z, id);
                    }

                    // Cave carving stays below the surface band and above
                    // the bedrock floor.
                    for y in 1..=(surface - cfg.cave_min_depth) {
                        let sample = cave_noise.get([
                            x as f64 * cfg.cave_noise_scale,
                            y as f64 * cfg.cave_noise_scale,
                            z as f64 * cfg.cave_noise_scale,
                        ]);
                        if sample > cfg.cave_threshold {
                            self.set_block(x, y, z, AIR);
                        }
                    }
                } else if d <= beach_edge {
                    self.set_block(x, 0, z, bedrock);
                    for y in 1..cfg.water_level.saturating_sub(1) {
                        self.set_block(x, y, z, stone);
                    }
                    for y in (cfg.water_level - 1).max(1)..=cfg.water_level {
                        self.set_block(x, y, z, sand);
                    }
                } else if d <= ocean_edge {
                    for y in 0..=cfg.water_level {
                        self.set_block(x, y, z, water);
                    }
                }
                // Beyond the ocean ring: void, nothing to write.
            }
        }
        info!("base terrain pass complete");
    }

    /// Stage 2: biased random-walk ore veins.
    ///
    /// Each walk converts only cells currently holding generic stone (air,
    /// dirt, and other ores are never overwritten) and re-centers on the
    /// last successful placement so clusters come out connected.
    fn stage_ore_veins(&mut self, rng: &mut Rng) {
        let veins = self.config().ore_veins.clone();
        let (size_x, size_y, size_z) = {
            let cfg = self.config();
            (cfg.size_x, cfg.size_y, cfg.size_z)
        };
        let stone = BlockKind::Stone.id();

        let mut placed_total = 0usize;
        for vein in &veins {
            let max_height = vein.max_height.clamp(2, size_y);
            for _ in 0..vein.attempts {
                let mut last = (
                    rng.i32(0..size_x),
                    rng.i32(1..max_height),
                    rng.i32(0..size_z),
                );
                let mut cursor = last;
                for _ in 0..vein.walk_steps {
                    let (x, y, z) = cursor;
                    if self.get_block(x, y, z) == stone {
                        self.set_block(x, y, z, vein.block);
                        last = cursor;
                        placed_total += 1;
                    }
                    cursor = (
                        last.0 + rng.i32(-1..=1),
                        last.1 + rng.i32(-1..=1),
                        last.2 + rng.i32(-1..=1),
                    );
                }
            }
        }
        info!("ore pass placed {} ore cells", placed_total);
    }

    /// Stage 3: trees on grass columns inside the land radius.
    ///
    /// The spiky variant's trunk only overwrites air or leaves (never wood
    /// already standing) and its canopy only fills currently empty cells;
    /// the normal variant keeps trunks intact but otherwise claims the
    /// canopy cube.
    fn stage_trees(&mut self, rng: &mut Rng) {
        let cfg = self.config().clone();
        if cfg.tree_chance == 0 {
            return;
        }
        let center_x = cfg.size_x / 2;
        let center_z = cfg.size_z / 2;

        let grass = BlockKind::Grass.id();
        let wood = BlockKind::Wood.id();
        let spiky_wood = BlockKind::SpikyWood.id();
        let leaves = BlockKind::Leaves.id();

        let mut planted = 0usize;
        for z in 0..cfg.size_z {
            for x in 0..cfg.size_x {
                let d = (x - center_x).abs().max((z - center_z).abs());
                if d > cfg.land_radius {
                    continue;
                }
                if rng.u32(0..cfg.tree_chance) != 0 {
                    continue;
                }
                let Some(top) = self.get_top_solid_y(x, z) else {
                    continue;
                };
                if self.get_block(x, top, z) != grass {
                    continue;
                }

                let trunk_height = rng.i32(cfg.trunk_min..=cfg.trunk_max);
                let spiky = rng.u8(0..4) == 0;
                let crown = top + trunk_height;

                for y in (top + 1)..=crown {
                    if spiky {
                        let current = self.get_block(x, y, z);
                        if current == AIR || current == leaves {
                            self.set_block(x, y, z, spiky_wood);
                        }
                    } else {
                        self.set_block(x, y, z, wood);
                    }
                }

                // Cubic canopy around the trunk top, thinned per cell so
                // crowns never come out as perfect boxes.
                for dy in -2..=2 {
                    for dz in -2..=2 {
                        for dx in -2i32..=2 {
                            if dx == 0 && dz == 0 && dy <= 0 {
                                continue;
                            }
                            if rng.u8(0..3) == 0 {
                                continue;
                            }
                            let (px, py, pz) = (x + dx, crown + dy, z + dz);
                            let current = self.get_block(px, py, pz);
                            if spiky {
                                if current == AIR {
                                    self.set_block(px, py, pz, leaves);
                                }
                            } else if current != wood && current != spiky_wood {
                                self.set_block(px, py, pz, leaves);
                            }
                        }
                    }
                }
                planted += 1;
            }
        }
        info!("tree pass planted {} trees", planted);
    }

    /// Stage 4: minigame target blocks, on the surface or floating a few
    /// cells above it, within a bounded retry budget.
    fn stage_targets(&mut self, rng: &mut Rng) {
        let cfg = self.config().clone();
        if cfg.target_count == 0 {
            return;
        }
        let target = BlockKind::Target.id();

        let mut placed = 0u32;
        for _ in 0..cfg.target_attempts {
            if placed >= cfg.target_count {
                break;
            }
            let x = rng.i32(0..cfg.size_x);
            let z = rng.i32(0..cfg.size_z);
            let Some(top) = self.get_top_solid_y(x, z) else {
                continue;
            };
            let y = if rng.bool() {
                top + 1
            } else {
                top + 1 + rng.i32(2..=4)
            };
            if self.in_bounds(x, y, z) && self.get_block(x, y, z) == AIR {
                self.set_block(x, y, z, target);
                placed += 1;
            }
        }
        info!("target pass placed {}/{} targets", placed, cfg.target_count);
    }
}
