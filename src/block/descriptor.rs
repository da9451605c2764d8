//! # Block Descriptor Module
//!
//! This module defines the static, shared record describing one registered
//! block identity: its display name, how it participates in collision and
//! face culling, how long it takes to mine, what it drops, and the
//! enum-tagged behavior hooks that give variants like spiky wood their
//! special handling.
//!
//! Descriptors are plain data. All dispatch goes identity -> palette ->
//! descriptor -> hook tag, so adding a new variant never touches the world
//! or chunk code paths.

use super::BlockId;

/// Behavior applied to the miner while a block of this identity is being
/// mined.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MineHook {
    /// Mining has no side effect on the miner.
    Harmless,
    /// The block fights back: the miner takes damage for every second of
    /// sustained mining (spiky wood).
    Spiky {
        /// Damage applied per second of mining contact.
        damage_per_second: f32,
    },
}

/// Behavior triggered when a block of this identity is broken.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BreakHook {
    /// The cell simply becomes air.
    Vanish,
    /// The cell becomes air and the interaction layer should spawn a
    /// dropped-item entity carrying [`BlockDescriptor::drop_item`].
    SpawnDrop,
}

/// The immutable behavior/rendering record associated with one identity.
///
/// Built once per registration and shared for the lifetime of the palette.
/// The boolean flags feed face culling and collision filtering; the scalar
/// attributes feed the interaction layer (mining timers, contact damage,
/// tool multipliers).
#[derive(Clone, Debug, PartialEq)]
pub struct BlockDescriptor {
    /// Display name shown to the player.
    pub name: &'static str,

    /// Whether the block participates in collision and occludes neighbor
    /// faces during culling.
    pub solid: bool,

    /// Whether the player may deposit this identity into the world.
    pub placeable: bool,

    /// Whether the block renders in the separate transparent pass and does
    /// not occlude like a solid (water).
    pub transparent: bool,

    /// Seconds of sustained mining before the block breaks with a bare
    /// hand. Negative means unbreakable.
    pub hardness: f32,

    /// Identity yielded when the block breaks; `0` means it drops itself.
    pub drop_item: BlockId,

    /// Damage per second applied to entities overlapping the cell.
    pub contact_damage: f32,

    /// Mining-speed multiplier when this identity is wielded as a tool.
    pub mining_speed: f32,

    /// Hook applied to the miner during mining.
    pub on_mine: MineHook,

    /// Hook triggered when the block breaks.
    pub on_break: BreakHook,
}

impl BlockDescriptor {
    /// Starts a descriptor with the common defaults: a solid, placeable,
    /// opaque block that takes one second to mine, drops itself, and has no
    /// special hooks.
    pub fn new(name: &'static str) -> Self {
        BlockDescriptor {
            name,
            solid: true,
            placeable: true,
            transparent: false,
            hardness: 1.0,
            drop_item: 0,
            contact_damage: 0.0,
            mining_speed: 1.0,
            on_mine: MineHook::Harmless,
            on_break: BreakHook::Vanish,
        }
    }

    /// Sets the mining time in seconds.
    pub fn hardness(mut self, seconds: f32) -> Self {
        self.hardness = seconds;
        self
    }

    /// Marks the block as unbreakable and not placeable (bedrock).
    pub fn unbreakable(mut self) -> Self {
        self.hardness = -1.0;
        self.placeable = false;
        self
    }

    /// Marks the block as non-solid: no collision, no face occlusion.
    pub fn non_solid(mut self) -> Self {
        self.solid = false;
        self
    }

    /// Marks the block for the transparent render pass.
    pub fn transparent(mut self) -> Self {
        self.transparent = true;
        self
    }

    /// Marks the identity as not placeable by the player.
    pub fn not_placeable(mut self) -> Self {
        self.placeable = false;
        self
    }

    /// Marks an item-only identity: exists in inventories and drops, never
    /// in the grid, so it is neither solid nor placeable.
    pub fn item(mut self) -> Self {
        self.solid = false;
        self.placeable = false;
        self
    }

    /// Sets the identity yielded on break.
    pub fn drops(mut self, item: BlockId) -> Self {
        self.drop_item = item;
        self.on_break = BreakHook::SpawnDrop;
        self
    }

    /// Sets the damage per second applied to overlapping entities.
    pub fn contact_damage(mut self, dps: f32) -> Self {
        self.contact_damage = dps;
        self
    }

    /// Sets the mining-speed multiplier for tool-type identities.
    pub fn tool(mut self, multiplier: f32) -> Self {
        self.mining_speed = multiplier;
        self
    }

    /// Sets the mining hook.
    pub fn on_mine(mut self, hook: MineHook) -> Self {
        self.on_mine = hook;
        self
    }

    /// Whether [`crate::world::VoxelWorld::break_at`] must refuse to remove
    /// this block.
    #[inline]
    pub fn is_unbreakable(&self) -> bool {
        self.hardness < 0.0
    }

    /// The identity actually yielded when this block breaks, resolving the
    /// "0 = drops itself" convention against the block's own identity.
    #[inline]
    pub fn resolved_drop(&self, own_id: BlockId) -> BlockId {
        if self.drop_item == 0 {
            own_id
        } else {
            self.drop_item
        }
    }
}
