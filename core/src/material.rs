//! Material, colour and biome tags together with the spatial predicates
//! derived from them.

use serde::{Deserialize, Serialize};

/// Material tag stored in every cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Material {
    /// Empty space.
    Air,
    /// Natural stone.
    Stone,
    /// Plain dirt.
    Dirt,
    /// Dirt covered with grass.
    GrassBlock,
    /// Loose sand.
    Sand,
    /// Loose gravel.
    Gravel,
    /// Cobblestone.
    Cobblestone,
    /// Oak planks.
    OakPlanks,
    /// Oak log.
    OakLog,
    /// Glass.
    Glass,
    /// Nether rock.
    Netherrack,
    /// End stone.
    EndStone,
    /// Still or flowing water.
    Water,
    /// Still or flowing lava.
    Lava,
    /// Either half of a bed.
    Bed,
    /// Storage chest.
    Chest,
    /// Oak sapling.
    OakSapling,
    /// Spruce sapling.
    SpruceSapling,
    /// Birch sapling.
    BirchSapling,
    /// Jungle sapling.
    JungleSapling,
    /// Acacia sapling.
    AcaciaSapling,
    /// Dark oak sapling.
    DarkOakSapling,
    /// Powered rail.
    PoweredRail,
    /// Detector rail.
    DetectorRail,
    /// Plain rail.
    Rail,
    /// Activator rail.
    ActivatorRail,
    /// Tall grass.
    TallGrass,
    /// Large fern.
    LargeFern,
    /// Dead bush.
    DeadBush,
    /// Sunflower.
    Sunflower,
    /// Poppy.
    Poppy,
    /// Brown mushroom.
    BrownMushroom,
    /// Red mushroom.
    RedMushroom,
    /// Torch.
    Torch,
    /// Redstone torch.
    RedstoneTorch,
    /// Redstone dust.
    RedstoneWire,
    /// Carrot crop.
    Carrots,
    /// Potato crop.
    Potatoes,
    /// Wheat crop.
    Wheat,
    /// Lever.
    Lever,
    /// Stone button.
    StoneButton,
    /// Oak button.
    OakButton,
    /// Spruce button.
    SpruceButton,
    /// Birch button.
    BirchButton,
    /// Jungle button.
    JungleButton,
    /// Acacia button.
    AcaciaButton,
    /// Dark oak button.
    DarkOakButton,
    /// Thin snow layer.
    Snow,
    /// Sugar cane.
    SugarCane,
    /// Redstone comparator.
    Comparator,
    /// Redstone repeater.
    Repeater,
    /// Climbing vine.
    Vine,
    /// Tripwire hook.
    TripwireHook,
    /// Tripwire string.
    Tripwire,
    /// Flower pot.
    FlowerPot,
    /// Player head on the floor.
    PlayerHead,
    /// Skeleton skull on the floor.
    SkeletonSkull,
    /// Wither skeleton skull on the floor.
    WitherSkeletonSkull,
    /// Zombie head on the floor.
    ZombieHead,
    /// Creeper head on the floor.
    CreeperHead,
    /// Dragon head on the floor.
    DragonHead,
    /// Player head on a wall.
    PlayerWallHead,
    /// Skeleton skull on a wall.
    SkeletonWallSkull,
    /// Wither skeleton skull on a wall.
    WitherSkeletonWallSkull,
    /// Zombie head on a wall.
    ZombieWallHead,
    /// Creeper head on a wall.
    CreeperWallHead,
    /// Dragon head on a wall.
    DragonWallHead,
    /// Heavy weighted pressure plate.
    HeavyWeightedPressurePlate,
    /// Light weighted pressure plate.
    LightWeightedPressurePlate,
    /// Carpet of the given colour.
    Carpet(DyeColor),
}

impl Material {
    /// Whether the material belongs to the bed family.
    #[must_use]
    pub const fn is_bed_family(self) -> bool {
        matches!(self, Self::Bed)
    }

    /// Whether the material has collision and can carry an entity standing on it.
    #[must_use]
    pub const fn is_solid(self) -> bool {
        matches!(
            self,
            Self::Stone
                | Self::Dirt
                | Self::GrassBlock
                | Self::Sand
                | Self::Gravel
                | Self::Cobblestone
                | Self::OakPlanks
                | Self::OakLog
                | Self::Glass
                | Self::Netherrack
                | Self::EndStone
                | Self::Bed
                | Self::Chest
                | Self::Comparator
                | Self::Repeater
                | Self::FlowerPot
                | Self::PlayerHead
                | Self::SkeletonSkull
                | Self::WitherSkeletonSkull
                | Self::ZombieHead
                | Self::CreeperHead
                | Self::DragonHead
                | Self::PlayerWallHead
                | Self::SkeletonWallSkull
                | Self::WitherSkeletonWallSkull
                | Self::ZombieWallHead
                | Self::CreeperWallHead
                | Self::DragonWallHead
                | Self::HeavyWeightedPressurePlate
                | Self::LightWeightedPressurePlate
                | Self::Carpet(_)
        )
    }

    /// Whether a player may be placed inside a cell of this material.
    ///
    /// This is an explicit allow-list rather than the inverse of
    /// [`Material::is_solid`]: carpets and skulls are both solid and safe,
    /// while water and lava are neither.
    #[must_use]
    pub const fn is_spawn_safe(self) -> bool {
        matches!(
            self,
            Self::Air
                | Self::OakSapling
                | Self::SpruceSapling
                | Self::BirchSapling
                | Self::JungleSapling
                | Self::AcaciaSapling
                | Self::DarkOakSapling
                | Self::PoweredRail
                | Self::DetectorRail
                | Self::Rail
                | Self::ActivatorRail
                | Self::TallGrass
                | Self::LargeFern
                | Self::DeadBush
                | Self::Sunflower
                | Self::Poppy
                | Self::BrownMushroom
                | Self::RedMushroom
                | Self::Torch
                | Self::RedstoneTorch
                | Self::RedstoneWire
                | Self::Carrots
                | Self::Potatoes
                | Self::Wheat
                | Self::Lever
                | Self::StoneButton
                | Self::OakButton
                | Self::SpruceButton
                | Self::BirchButton
                | Self::JungleButton
                | Self::AcaciaButton
                | Self::DarkOakButton
                | Self::Snow
                | Self::SugarCane
                | Self::Comparator
                | Self::Repeater
                | Self::Vine
                | Self::TripwireHook
                | Self::Tripwire
                | Self::FlowerPot
                | Self::PlayerHead
                | Self::SkeletonSkull
                | Self::WitherSkeletonSkull
                | Self::ZombieHead
                | Self::CreeperHead
                | Self::DragonHead
                | Self::PlayerWallHead
                | Self::SkeletonWallSkull
                | Self::WitherSkeletonWallSkull
                | Self::ZombieWallHead
                | Self::CreeperWallHead
                | Self::DragonWallHead
                | Self::HeavyWeightedPressurePlate
                | Self::LightWeightedPressurePlate
                | Self::Carpet(_)
        )
    }
}

/// The sixteen dye colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DyeColor {
    /// Wool index 0.
    White,
    /// Wool index 1.
    Orange,
    /// Wool index 2.
    Magenta,
    /// Wool index 3.
    LightBlue,
    /// Wool index 4.
    Yellow,
    /// Wool index 5.
    Lime,
    /// Wool index 6.
    Pink,
    /// Wool index 7.
    Gray,
    /// Wool index 8.
    LightGray,
    /// Wool index 9.
    Cyan,
    /// Wool index 10.
    Purple,
    /// Wool index 11.
    Blue,
    /// Wool index 12.
    Brown,
    /// Wool index 13.
    Green,
    /// Wool index 14.
    Red,
    /// Wool index 15.
    Black,
}

impl DyeColor {
    const BY_WOOL_DATA: [DyeColor; 16] = [
        Self::White,
        Self::Orange,
        Self::Magenta,
        Self::LightBlue,
        Self::Yellow,
        Self::Lime,
        Self::Pink,
        Self::Gray,
        Self::LightGray,
        Self::Cyan,
        Self::Purple,
        Self::Blue,
        Self::Brown,
        Self::Green,
        Self::Red,
        Self::Black,
    ];

    /// Colour encoded by the low four bits of a wool data value.
    ///
    /// Higher bits are ignored, so every data value maps to one of the sixteen
    /// colours and item data such as `0x1E` reads as red.
    #[must_use]
    pub const fn from_wool_data(data: u8) -> Self {
        Self::BY_WOOL_DATA[(data & 0xF) as usize]
    }

    /// Wool data value of the colour.
    #[must_use]
    pub const fn wool_data(self) -> u8 {
        self as u8
    }
}

/// Biome tag of a world column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    /// Grassy plains.
    Plains,
    /// Temperate forest.
    Forest,
    /// Sandy desert.
    Desert,
    /// Cold taiga.
    Taiga,
    /// Open ocean.
    Ocean,
    /// Nether wastes.
    NetherWastes,
    /// Soul sand valley.
    SoulSandValley,
    /// Crimson forest.
    CrimsonForest,
    /// Warped forest.
    WarpedForest,
    /// Basalt deltas.
    BasaltDeltas,
    /// Central end island.
    TheEnd,
    /// End barrens.
    EndBarrens,
    /// End midlands.
    EndMidlands,
    /// End highlands.
    EndHighlands,
    /// Small end islands.
    SmallEndIslands,
}

impl Biome {
    /// Whether beds explode when used in this biome.
    #[must_use]
    pub const fn is_bed_explosive(self) -> bool {
        matches!(
            self,
            Self::NetherWastes
                | Self::SoulSandValley
                | Self::CrimsonForest
                | Self::WarpedForest
                | Self::BasaltDeltas
                | Self::TheEnd
                | Self::EndBarrens
                | Self::EndMidlands
                | Self::EndHighlands
                | Self::SmallEndIslands
        )
    }
}

impl Default for Biome {
    fn default() -> Self {
        Self::Plains
    }
}
