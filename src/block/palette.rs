//! # Palette Module
//!
//! This module provides the ordered registry that maps single-byte block
//! identities to their descriptors. Registration order is the identity
//! assignment, so the order in [`Palette::standard`] must never change for
//! existing entries; new block types are appended.
//!
//! Lookups never fail: identities outside the registered range resolve to a
//! shared "air" fallback so stale or corrupted save data degrades to
//! "nothing here" instead of crashing the load.

use log::{debug, info};

use super::descriptor::{BlockDescriptor, MineHook};
use super::{BlockId, BlockKind};

/// The hard cap on registered block types, fixed by the one-byte identity.
pub const MAX_BLOCK_TYPES: usize = 256;

/// Fallback descriptor returned for identities the palette does not know.
fn air_fallback() -> &'static BlockDescriptor {
    static FALLBACK: std::sync::OnceLock<BlockDescriptor> = std::sync::OnceLock::new();
    FALLBACK.get_or_init(|| {
        BlockDescriptor::new("air")
            .non_solid()
            .not_placeable()
            .hardness(0.0)
    })
}

/// An ordered table of block-type descriptors indexed by identity.
///
/// The palette is constructed once at world startup and treated as
/// immutable afterwards; every get/set, mesh, collision, and pick path
/// reads it but never writes it.
pub struct Palette {
    entries: Vec<BlockDescriptor>,
}

impl Palette {
    /// Creates an empty palette.
    ///
    /// Most callers want [`Palette::standard`] instead; an empty palette is
    /// the starting point for registering a custom block set.
    pub fn new() -> Self {
        Palette {
            entries: Vec::new(),
        }
    }

    /// Appends a descriptor and returns its newly assigned identity.
    ///
    /// # Arguments
    /// * `descriptor` - The immutable record for the new block type
    ///
    /// # Returns
    /// The 0-based registration index as the stable identity.
    ///
    /// # Panics
    /// Panics when a 257th entry is registered. Identities must fit in one
    /// byte, so this is a fatal configuration error surfaced at startup,
    /// never during gameplay.
    pub fn register(&mut self, descriptor: BlockDescriptor) -> BlockId {
        assert!(
            self.entries.len() < MAX_BLOCK_TYPES,
            "block palette overflow: at most {} block types fit in a one-byte identity",
            MAX_BLOCK_TYPES
        );
        let id = self.entries.len() as BlockId;
        debug!("registered block type {} as identity {}", descriptor.name, id);
        self.entries.push(descriptor);
        id
    }

    /// Looks up the descriptor for an identity.
    ///
    /// Out-of-range identities resolve to the air fallback rather than
    /// erroring, so forward-incompatible save data reads as empty space.
    #[inline]
    pub fn get(&self, id: BlockId) -> &BlockDescriptor {
        self.entries.get(id as usize).unwrap_or_else(|| air_fallback())
    }

    /// Whether the identity's descriptor participates in collision and
    /// face culling.
    #[inline]
    pub fn is_solid(&self, id: BlockId) -> bool {
        self.get(id).solid
    }

    /// The number of registered block types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no block types have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates registered descriptors in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &BlockDescriptor)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, d)| (i as BlockId, d))
    }

    /// Seconds of sustained mining needed to break `block` with `tool`.
    ///
    /// # Arguments
    /// * `block` - The identity being mined
    /// * `tool` - The identity wielded as a tool, if any
    ///
    /// # Returns
    /// `None` for unbreakable blocks, otherwise the descriptor hardness
    /// divided by the tool's mining-speed multiplier.
    pub fn break_time(&self, block: BlockId, tool: Option<BlockId>) -> Option<f32> {
        let descriptor = self.get(block);
        if descriptor.is_unbreakable() {
            return None;
        }
        let speed = tool.map(|t| self.get(t).mining_speed).unwrap_or(1.0);
        Some(descriptor.hardness / speed.max(f32::EPSILON))
    }

    /// Builds the standard palette in the fixed order named by
    /// [`BlockKind`].
    ///
    /// The registration sequence below is load-bearing: saved worlds store
    /// the resulting identities byte-for-byte. Append new entries at the
    /// end, never insert.
    pub fn standard() -> Self {
        let mut palette = Palette::new();

        palette.register(
            BlockDescriptor::new("air")
                .non_solid()
                .not_placeable()
                .hardness(0.0),
        );
        palette.register(BlockDescriptor::new("stone").hardness(1.5));
        palette.register(BlockDescriptor::new("bedrock").unbreakable());
        palette.register(BlockDescriptor::new("dirt").hardness(0.5));
        palette.register(
            BlockDescriptor::new("grass")
                .hardness(0.6)
                .drops(BlockKind::Dirt.id()),
        );
        palette.register(BlockDescriptor::new("wood").hardness(2.0));
        palette.register(
            BlockDescriptor::new("spiky wood")
                .hardness(2.0)
                .contact_damage(2.0)
                .on_mine(MineHook::Spiky {
                    damage_per_second: 1.0,
                })
                .drops(BlockKind::Stick.id()),
        );
        palette.register(
            BlockDescriptor::new("leaves")
                .hardness(0.2)
                .drops(BlockKind::Stick.id()),
        );
        palette.register(
            BlockDescriptor::new("coal ore")
                .hardness(3.0)
                .drops(BlockKind::CoalLump.id()),
        );
        palette.register(
            BlockDescriptor::new("iron ore")
                .hardness(4.0)
                .drops(BlockKind::IronNugget.id()),
        );
        palette.register(
            BlockDescriptor::new("gold ore")
                .hardness(5.0)
                .drops(BlockKind::GoldNugget.id()),
        );
        palette.register(BlockDescriptor::new("planks").hardness(1.5));
        palette.register(BlockDescriptor::new("stick").item());
        palette.register(BlockDescriptor::new("crafting table").hardness(2.0));
        palette.register(BlockDescriptor::new("sand").hardness(0.5));
        palette.register(
            BlockDescriptor::new("water")
                .non_solid()
                .transparent()
                .not_placeable()
                .hardness(0.0),
        );
        palette.register(
            BlockDescriptor::new("target")
                .hardness(0.5)
                .not_placeable(),
        );
        palette.register(BlockDescriptor::new("coal lump").item());
        palette.register(BlockDescriptor::new("iron nugget").item());
        palette.register(BlockDescriptor::new("gold nugget").item());
        palette.register(BlockDescriptor::new("lantern").item());
        palette.register(BlockDescriptor::new("pick head").item().tool(4.0));
        palette.register(BlockDescriptor::new("axe head").item().tool(2.5));

        info!("standard palette registered {} block types", palette.len());
        palette
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::standard()
    }
}
