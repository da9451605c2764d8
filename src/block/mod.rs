//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel
//! terrain engine. It includes the compact block identity type, the
//! well-known identity enum, block face handling, block-type descriptors,
//! and the ordered palette that maps identities to descriptors.

use num_derive::FromPrimitive;

pub mod block_side;
pub mod descriptor;
pub mod palette;

/// The compact integer type used to store block identities in chunk memory.
///
/// One byte per cell; identity `0` is always air. Every identity handed out
/// by the palette fits in this type, which is why the palette caps itself at
/// 256 registrations.
pub type BlockId = u8;

/// The reserved identity for "no block here".
pub const AIR: BlockId = 0;

/// Names every identity registered by [`palette::Palette::standard`], in
/// registration order.
///
/// The discriminants are load-bearing: saved worlds store these values
/// byte-for-byte, and generation and gameplay code refer to them as
/// constants. Existing variants must never be reordered or removed; new
/// kinds are appended at the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum BlockKind {
    /// Empty space. Non-solid, never rendered.
    Air = 0,
    /// The generic underground filler; the only identity ore veins replace.
    Stone,
    /// Indestructible world floor.
    Bedrock,
    /// Sub-surface soil under grass caps.
    Dirt,
    /// Surface cap of land columns; the only block trees grow on.
    Grass,
    /// Tree trunk material.
    Wood,
    /// Trunk material of the spiky tree variant; hurts while mined.
    SpikyWood,
    /// Tree canopy material.
    Leaves,
    /// Coal-bearing stone.
    CoalOre,
    /// Iron-bearing stone.
    IronOre,
    /// Gold-bearing stone.
    GoldOre,
    /// Crafted building material.
    Planks,
    /// Item-only crafting ingredient.
    Stick,
    /// Crafting surface block.
    CraftingTable,
    /// Beach ring material.
    Sand,
    /// Ocean fill; transparent and non-solid.
    Water,
    /// Minigame target block scattered by generation.
    Target,
    /// Item-only drop of coal ore.
    CoalLump,
    /// Item-only drop of iron ore.
    IronNugget,
    /// Item-only drop of gold ore.
    GoldNugget,
    /// Item-only light source.
    Lantern,
    /// Item-only tool head with a high mining-speed multiplier.
    PickHead,
    /// Item-only tool head tuned for wood.
    AxeHead,
}

impl BlockKind {
    /// Returns the stored identity value for this kind.
    #[inline]
    pub fn id(self) -> BlockId {
        self as BlockId
    }

    /// Converts a stored identity back to a well-known kind.
    ///
    /// # Arguments
    /// * `id` - The identity as read from chunk memory or a save payload
    ///
    /// # Returns
    /// `None` when the identity does not name a registered kind, which can
    /// happen when loading data written by a build with more block types.
    pub fn from_id(id: BlockId) -> Option<Self> {
        num::FromPrimitive::from_u8(id)
    }
}
