//! Integration tests for the block palette: registration order, fallback
//! lookups, the overflow guard, and the mining-time helper.

use voxel_terrain::{
    BlockDescriptor, BlockKind, BreakHook, MineHook, Palette,
};

#[test]
fn standard_palette_order_matches_the_well_known_identities() {
    let palette = Palette::standard();

    // Spot-check entries across the table; the discriminants of BlockKind
    // are the registration order by contract.
    assert_eq!(palette.get(BlockKind::Air.id()).name, "air");
    assert_eq!(palette.get(BlockKind::Stone.id()).name, "stone");
    assert_eq!(palette.get(BlockKind::Bedrock.id()).name, "bedrock");
    assert_eq!(palette.get(BlockKind::Water.id()).name, "water");
    assert_eq!(palette.get(BlockKind::Target.id()).name, "target");
    assert_eq!(palette.get(BlockKind::AxeHead.id()).name, "axe head");

    for (id, _descriptor) in palette.iter() {
        assert!(
            BlockKind::from_id(id).is_some(),
            "identity {} has no BlockKind name",
            id
        );
    }
}

#[test]
fn registration_hands_out_sequential_identities() {
    let mut palette = Palette::new();
    assert!(palette.is_empty());
    let a = palette.register(BlockDescriptor::new("first"));
    let b = palette.register(BlockDescriptor::new("second"));
    assert_eq!((a, b), (0, 1));
    assert_eq!(palette.len(), 2);
}

#[test]
#[should_panic(expected = "palette overflow")]
fn registering_a_257th_descriptor_is_fatal() {
    let mut palette = Palette::new();
    for _ in 0..=256 {
        palette.register(BlockDescriptor::new("filler"));
    }
}

#[test]
fn unknown_identities_resolve_to_the_air_fallback() {
    let palette = Palette::standard();
    let descriptor = palette.get(200);
    assert_eq!(descriptor.name, "air");
    assert!(!descriptor.solid);
    assert!(!descriptor.placeable);
}

#[test]
fn bedrock_is_unbreakable_and_water_is_transparent() {
    let palette = Palette::standard();
    assert!(palette.get(BlockKind::Bedrock.id()).is_unbreakable());
    assert!(palette.get(BlockKind::Water.id()).transparent);
    assert!(!palette.get(BlockKind::Water.id()).solid);
}

#[test]
fn item_only_descriptors_are_neither_solid_nor_placeable() {
    let palette = Palette::standard();
    for kind in [
        BlockKind::Stick,
        BlockKind::CoalLump,
        BlockKind::IronNugget,
        BlockKind::GoldNugget,
        BlockKind::Lantern,
        BlockKind::PickHead,
        BlockKind::AxeHead,
    ] {
        let descriptor = palette.get(kind.id());
        assert!(!descriptor.solid, "{} must not be solid", descriptor.name);
        assert!(
            !descriptor.placeable,
            "{} must not be placeable",
            descriptor.name
        );
    }
}

#[test]
fn spiky_wood_carries_the_overridden_hooks() {
    let palette = Palette::standard();
    let spiky = palette.get(BlockKind::SpikyWood.id());

    assert!(spiky.contact_damage > 0.0);
    assert!(matches!(spiky.on_mine, MineHook::Spiky { .. }));
    assert_eq!(spiky.on_break, BreakHook::SpawnDrop);

    let wood = palette.get(BlockKind::Wood.id());
    assert_eq!(wood.on_mine, MineHook::Harmless);
    assert_eq!(wood.contact_damage, 0.0);
}

#[test]
fn ores_drop_their_material_items() {
    let palette = Palette::standard();
    let coal = palette.get(BlockKind::CoalOre.id());
    assert_eq!(
        coal.resolved_drop(BlockKind::CoalOre.id()),
        BlockKind::CoalLump.id()
    );

    // Stone drops itself via the 0-means-self convention.
    let stone = palette.get(BlockKind::Stone.id());
    assert_eq!(
        stone.resolved_drop(BlockKind::Stone.id()),
        BlockKind::Stone.id()
    );
}

#[test]
fn break_time_scales_with_the_tool_multiplier() {
    let palette = Palette::standard();
    let bare = palette
        .break_time(BlockKind::CoalOre.id(), None)
        .expect("ore is breakable");
    let with_pick = palette
        .break_time(BlockKind::CoalOre.id(), Some(BlockKind::PickHead.id()))
        .expect("ore is breakable");

    assert!(with_pick < bare, "a pick must mine faster than a bare hand");
    assert!(palette
        .break_time(BlockKind::Bedrock.id(), None)
        .is_none());
}
