#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Bedstead engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative voxel world, and pure block systems. Adapters and systems
//! submit [`Command`] values describing desired mutations, the world executes
//! those commands via its `apply` entry point, and then broadcasts [`Event`]
//! values for systems to react to deterministically. Systems read the world
//! through the [`BlockAccess`] and [`WorldView`] traits and respond exclusively
//! with new command batches.

mod material;

pub use material::{Biome, DyeColor, Material};

use serde::{Deserialize, Serialize};

/// Number of ticks in a full day-night cycle.
pub const TICKS_PER_DAY: u64 = 24_000;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Sets the absolute world clock.
    SetTime {
        /// Absolute tick count the clock should report.
        time: u64,
    },
    /// Advances the world clock by the provided number of ticks.
    Tick {
        /// Ticks that elapsed since the previous tick command.
        ticks: u64,
    },
    /// Starts or stops a thunderstorm.
    SetThundering {
        /// Whether a thunderstorm should be active.
        thundering: bool,
    },
    /// Assigns a biome to a whole world column.
    SetBiome {
        /// Column x coordinate.
        x: i32,
        /// Column z coordinate.
        z: i32,
        /// Biome applied to every cell of the column.
        biome: Biome,
    },
    /// Overwrites the full state of a single cell.
    SetBlock {
        /// Cell receiving the new state.
        pos: BlockPos,
        /// Material, auxiliary bits and colour written to the cell.
        state: BlockState,
    },
    /// Overwrites only the auxiliary bits of a cell, keeping its material.
    SetBlockData {
        /// Cell receiving the new bits.
        pos: BlockPos,
        /// Auxiliary bits written to the cell.
        data: u8,
    },
    /// Requests that a new entity appear in the world.
    SpawnEntity {
        /// Kind of entity to create.
        kind: EntityKind,
        /// Initial location of the entity.
        location: Location,
        /// Whether the entity starts in its aggressive sub-state.
        angry: bool,
    },
    /// Toggles the aggressive sub-state of an entity.
    SetEntityAngry {
        /// Entity whose sub-state changes.
        entity: EntityId,
        /// New aggressive flag.
        angry: bool,
    },
    /// Removes an entity from the world.
    RemoveEntity {
        /// Entity to remove.
        entity: EntityId,
    },
    /// Connects a new player at the provided location.
    JoinPlayer {
        /// Initial location of the player.
        location: Location,
        /// Horizontal view angle in degrees.
        yaw: f32,
    },
    /// Moves a player and updates their view angle.
    MovePlayer {
        /// Player being moved.
        player: PlayerId,
        /// New location of the player.
        location: Location,
        /// New horizontal view angle in degrees.
        yaw: f32,
    },
    /// Delivers a localized notice to a player.
    SendNotice {
        /// Recipient of the notice.
        player: PlayerId,
        /// Notice to deliver.
        notice: Notice,
    },
    /// Sets off an explosion centred on a cell.
    Explode {
        /// Cell at the centre of the blast.
        center: BlockPos,
        /// Blast power.
        power: f32,
        /// Whether the blast sets fires.
        fire: bool,
    },
    /// Transitions a player into the sleeping state at the given bed head.
    EnterBed {
        /// Player going to sleep.
        player: PlayerId,
        /// Head cell of the bed.
        head: BlockPos,
    },
    /// Transitions a player out of the sleeping state.
    LeaveBed {
        /// Player waking up.
        player: PlayerId,
        /// Cell the player should stand in afterwards, if one was found.
        exit: Option<BlockPos>,
    },
    /// Drops items at a cell.
    DropItems {
        /// Cell where the items appear.
        pos: BlockPos,
        /// Items that were dropped.
        items: Vec<ItemStack>,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Indicates that the world clock changed.
    TimeChanged {
        /// Absolute tick count after the change.
        time: u64,
    },
    /// Indicates that a thunderstorm started or stopped.
    WeatherChanged {
        /// Whether a thunderstorm is active.
        thundering: bool,
    },
    /// Confirms that a cell changed its material, bits or colour.
    BlockChanged {
        /// Cell that changed.
        pos: BlockPos,
        /// State before the change.
        old: BlockState,
        /// State after the change.
        new: BlockState,
    },
    /// Confirms that an entity was created.
    EntitySpawned {
        /// Identifier assigned to the entity.
        entity: EntityId,
        /// Kind of the entity.
        kind: EntityKind,
    },
    /// Confirms that an entity was removed.
    EntityRemoved {
        /// Identifier of the removed entity.
        entity: EntityId,
    },
    /// Confirms that a player connected.
    PlayerJoined {
        /// Identifier assigned to the player.
        player: PlayerId,
    },
    /// Confirms that a notice was delivered.
    NoticeSent {
        /// Recipient of the notice.
        player: PlayerId,
        /// Delivered notice.
        notice: Notice,
    },
    /// Announces an explosion.
    ExplosionTriggered {
        /// Cell at the centre of the blast.
        center: BlockPos,
        /// Blast power.
        power: f32,
        /// Whether the blast sets fires.
        fire: bool,
    },
    /// Confirms that a player fell asleep.
    PlayerEnteredBed {
        /// Sleeping player.
        player: PlayerId,
        /// Head cell of the bed.
        head: BlockPos,
    },
    /// Confirms that a player woke up.
    PlayerLeftBed {
        /// Player that woke up.
        player: PlayerId,
        /// Location the player was placed at.
        location: Location,
    },
    /// Confirms that items were dropped.
    ItemsDropped {
        /// Cell where the items appeared.
        pos: BlockPos,
        /// Dropped items.
        items: Vec<ItemStack>,
    },
}

/// Integer coordinate of a single world cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    x: i32,
    y: i32,
    z: i32,
}

impl BlockPos {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// East-west coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// North-south coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Cell displaced by the provided deltas.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Neighbouring cell across the provided face.
    #[must_use]
    pub const fn relative(self, face: BlockFace) -> Self {
        self.offset(face.mod_x(), face.mod_y(), face.mod_z())
    }

    /// Cell directly beneath this one.
    #[must_use]
    pub const fn below(self) -> Self {
        self.relative(BlockFace::Down)
    }

    /// Cell directly above this one.
    #[must_use]
    pub const fn above(self) -> Self {
        self.relative(BlockFace::Up)
    }

    /// Face of this cell that touches `other`, if the cells are adjacent.
    #[must_use]
    pub fn face_to(self, other: BlockPos) -> Option<BlockFace> {
        let delta = (other.x - self.x, other.y - self.y, other.z - self.z);
        BlockFace::ALL
            .into_iter()
            .find(|face| (face.mod_x(), face.mod_y(), face.mod_z()) == delta)
    }
}

/// One of the six faces of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockFace {
    /// Toward decreasing z.
    North,
    /// Toward increasing x.
    East,
    /// Toward increasing z.
    South,
    /// Toward decreasing x.
    West,
    /// Toward increasing y.
    Up,
    /// Toward decreasing y.
    Down,
}

impl BlockFace {
    /// Every face in a fixed notification order.
    pub const ALL: [BlockFace; 6] = [
        BlockFace::North,
        BlockFace::East,
        BlockFace::South,
        BlockFace::West,
        BlockFace::Up,
        BlockFace::Down,
    ];

    /// Step along the x axis when crossing this face.
    #[must_use]
    pub const fn mod_x(self) -> i32 {
        match self {
            Self::East => 1,
            Self::West => -1,
            _ => 0,
        }
    }

    /// Step along the y axis when crossing this face.
    #[must_use]
    pub const fn mod_y(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
            _ => 0,
        }
    }

    /// Step along the z axis when crossing this face.
    #[must_use]
    pub const fn mod_z(self) -> i32 {
        match self {
            Self::South => 1,
            Self::North => -1,
            _ => 0,
        }
    }

    /// Face pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Horizontal direction stored in the two low auxiliary bits of oriented blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Encoded as `0`.
    South,
    /// Encoded as `1`.
    West,
    /// Encoded as `2`.
    North,
    /// Encoded as `3`.
    East,
}

impl Facing {
    /// Decodes the facing from the two low auxiliary bits.
    #[must_use]
    pub const fn from_data_bits(bits: u8) -> Self {
        match bits & 0x3 {
            0 => Self::South,
            1 => Self::West,
            2 => Self::North,
            _ => Self::East,
        }
    }

    /// Encodes the facing into the two low auxiliary bits.
    #[must_use]
    pub const fn data_bits(self) -> u8 {
        match self {
            Self::South => 0,
            Self::West => 1,
            Self::North => 2,
            Self::East => 3,
        }
    }

    /// Horizontal direction a viewer with the given yaw is looking toward.
    ///
    /// Yaw is measured in degrees with 0 looking south and 90 looking west;
    /// each direction covers the quadrant centred on its angle.
    #[must_use]
    pub fn from_yaw(yaw: f32) -> Self {
        let degrees = yaw.rem_euclid(360.0);
        let quadrant = ((degrees + 45.0) / 90.0).floor() as u8;
        Self::from_data_bits(quadrant % 4)
    }

    /// Direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::South => Self::North,
            Self::West => Self::East,
            Self::North => Self::South,
            Self::East => Self::West,
        }
    }

    /// Cell face matching the direction.
    #[must_use]
    pub const fn face(self) -> BlockFace {
        match self {
            Self::South => BlockFace::South,
            Self::West => BlockFace::West,
            Self::North => BlockFace::North,
            Self::East => BlockFace::East,
        }
    }
}

/// Writable portion of a cell: material, auxiliary bits and optional colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockState {
    /// Material occupying the cell.
    pub material: Material,
    /// Auxiliary bit field whose meaning depends on the material.
    pub data: u8,
    /// Colour attribute carried by coloured block entities such as beds.
    pub color: Option<DyeColor>,
}

impl BlockState {
    /// Empty cell.
    pub const AIR: BlockState = BlockState::new(Material::Air, 0);

    /// Creates an uncoloured state.
    #[must_use]
    pub const fn new(material: Material, data: u8) -> Self {
        Self {
            material,
            data,
            color: None,
        }
    }

    /// Returns the same state carrying the provided colour.
    #[must_use]
    pub const fn with_color(self, color: DyeColor) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Returns the same state carrying new auxiliary bits.
    #[must_use]
    pub const fn with_data(self, data: u8) -> Self {
        Self { data, ..self }
    }
}

impl Default for BlockState {
    fn default() -> Self {
        Self::AIR
    }
}

/// Read-only snapshot of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Material occupying the cell.
    pub material: Material,
    /// Auxiliary bit field.
    pub data: u8,
    /// Colour attribute, if any.
    pub color: Option<DyeColor>,
    /// Biome of the column containing the cell.
    pub biome: Biome,
}

impl Cell {
    /// Combines a stored state with the biome of its column.
    #[must_use]
    pub const fn from_state(state: BlockState, biome: Biome) -> Self {
        Self {
            material: state.material,
            data: state.data,
            color: state.color,
            biome,
        }
    }

    /// Writable portion of the cell.
    #[must_use]
    pub const fn state(&self) -> BlockState {
        BlockState {
            material: self.material,
            data: self.data,
            color: self.color,
        }
    }
}

/// Auxiliary bits of a bed cell.
///
/// Bits 0-1 hold the [`Facing`] from foot to head, `0x4` marks the bed as
/// occupied and `0x8` marks the head half.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BedData(u8);

impl BedData {
    /// Mask of the facing bits.
    pub const FACING_MASK: u8 = 0x3;
    /// Occupancy flag shared by both halves.
    pub const OCCUPIED: u8 = 0x4;
    /// Flag set only on the head half.
    pub const HEAD: u8 = 0x8;

    /// Interprets a state as bed bits, returning `None` for non-bed materials.
    #[must_use]
    pub fn from_state(state: &BlockState) -> Option<Self> {
        state
            .material
            .is_bed_family()
            .then_some(Self(state.data))
    }

    /// Wraps raw bits without checking the material.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw auxiliary bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Direction from the foot toward the head.
    #[must_use]
    pub const fn facing(self) -> Facing {
        Facing::from_data_bits(self.0)
    }

    /// Whether these bits belong to the head half.
    #[must_use]
    pub const fn is_head(self) -> bool {
        self.0 & Self::HEAD != 0
    }

    /// Whether the bed is marked as occupied.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        self.0 & Self::OCCUPIED != 0
    }

    /// Replaces the facing bits.
    #[must_use]
    pub const fn with_facing(self, facing: Facing) -> Self {
        Self((self.0 & !Self::FACING_MASK) | facing.data_bits())
    }

    /// Sets or clears the head flag.
    #[must_use]
    pub const fn with_head(self, head: bool) -> Self {
        Self::toggle(self.0, Self::HEAD, head)
    }

    /// Sets or clears the occupancy flag.
    #[must_use]
    pub const fn with_occupied(self, occupied: bool) -> Self {
        Self::toggle(self.0, Self::OCCUPIED, occupied)
    }

    const fn toggle(bits: u8, flag: u8, set: bool) -> Self {
        if set {
            Self(bits | flag)
        } else {
            Self(bits & !flag)
        }
    }
}

/// Continuous position of an entity or player.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// East-west coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// North-south coordinate.
    pub z: f64,
}

impl Location {
    /// Creates a location from raw coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Location standing in the middle of the provided cell's floor.
    #[must_use]
    pub fn standing_in(pos: BlockPos) -> Self {
        Self::new(
            f64::from(pos.x()) + 0.5,
            f64::from(pos.y()),
            f64::from(pos.z()) + 0.5,
        )
    }

    /// Cell containing the location.
    #[must_use]
    pub fn block(&self) -> BlockPos {
        BlockPos::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }

    /// Per-axis bound test against a cell's minimum corner.
    ///
    /// Holds when `|x - pos.x| <= dx`, `|y - pos.y| <= dy` and
    /// `|z - pos.z| <= dz`.
    #[must_use]
    pub fn is_within(&self, pos: BlockPos, dx: u32, dy: u32, dz: u32) -> bool {
        (self.x - f64::from(pos.x())).abs() <= f64::from(dx)
            && (self.y - f64::from(pos.y())).abs() <= f64::from(dy)
            && (self.z - f64::from(pos.z())).abs() <= f64::from(dz)
    }
}

/// Unique identifier assigned to a non-player entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    /// Creates a new entity identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a connected player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a new player identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Kinds of non-player entities tracked by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Hostile undead.
    Zombie,
    /// Hostile archer.
    Skeleton,
    /// Hostile exploder.
    Creeper,
    /// Hostile climber.
    Spider,
    /// Hostile potion thrower.
    Witch,
    /// Hostile teleporter.
    Enderman,
    /// Neutral mob that only threatens sleepers while angry.
    ZombifiedPiglin,
    /// Passive animal.
    Cow,
    /// Passive animal.
    Pig,
    /// Passive animal.
    Sheep,
    /// Passive animal.
    Chicken,
    /// Item lying on the ground.
    DroppedItem,
}

impl EntityKind {
    /// Whether the kind belongs to the monster family.
    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(
            self,
            Self::Zombie
                | Self::Skeleton
                | Self::Creeper
                | Self::Spider
                | Self::Witch
                | Self::Enderman
                | Self::ZombifiedPiglin
        )
    }
}

/// Immutable representation of a single entity used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntitySnapshot {
    /// Identifier assigned by the world.
    pub id: EntityId,
    /// Kind of the entity.
    pub kind: EntityKind,
    /// Current location.
    pub location: Location,
    /// Aggressive sub-state, meaningful for neutral species.
    pub angry: bool,
}

impl EntitySnapshot {
    /// Whether the entity prevents nearby players from sleeping.
    ///
    /// A zombified piglin only counts while it is angry.
    #[must_use]
    pub const fn is_threat(&self) -> bool {
        match self.kind {
            EntityKind::ZombifiedPiglin => self.angry,
            kind => kind.is_monster(),
        }
    }
}

/// Immutable representation of a connected player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSnapshot {
    /// Identifier assigned by the world.
    pub id: PlayerId,
    /// Current location.
    pub location: Location,
    /// Horizontal view angle in degrees.
    pub yaw: f32,
    /// Head cell of the bed the player sleeps in, if asleep.
    pub sleeping_in: Option<BlockPos>,
}

/// Stack of items held or dropped in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    /// Material of the item.
    pub material: Material,
    /// Number of items in the stack.
    pub amount: u8,
    /// Item-specific data; for beds this is the wool colour index.
    pub data: u8,
}

impl ItemStack {
    /// Creates a new item stack.
    #[must_use]
    pub const fn new(material: Material, amount: u8, data: u8) -> Self {
        Self {
            material,
            amount,
            data,
        }
    }
}

/// Localized notices delivered to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    /// Sleeping is only possible at night or during thunderstorms.
    BedDay,
    /// Someone else is already using the bed.
    BedOccupied,
    /// Monsters are too close to the bed.
    BedMonstersNearby,
    /// The space around the bed is blocked.
    BedObstructed,
    /// The bed no longer exists.
    BedMissing,
}

impl Notice {
    /// Localization key resolved by the messaging service.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BedDay => "block.minecraft.bed.no_sleep",
            Self::BedOccupied => "block.minecraft.bed.occupied",
            Self::BedMonstersNearby => "block.minecraft.bed.not_safe",
            Self::BedObstructed => "block.minecraft.bed.obstructed",
            Self::BedMissing => "block.minecraft.spawn.not_valid",
        }
    }
}

/// Read access to individual cells.
pub trait BlockAccess {
    /// Snapshot of the cell at `pos`; unknown cells read as air.
    fn cell(&self, pos: BlockPos) -> Cell;

    /// Material of the cell at `pos`.
    fn material(&self, pos: BlockPos) -> Material {
        self.cell(pos).material
    }
}

/// Read access to everything block behaviours consult besides cells.
pub trait WorldView: BlockAccess {
    /// Position within the current day, in `0..TICKS_PER_DAY`.
    fn time_of_day(&self) -> u64;

    /// Whether a thunderstorm is active.
    fn is_thundering(&self) -> bool;

    /// Connected players in join order.
    fn players(&self) -> &[PlayerSnapshot];

    /// Snapshot of a connected player.
    fn player(&self, player: PlayerId) -> Option<&PlayerSnapshot> {
        self.players().iter().find(|snapshot| snapshot.id == player)
    }

    /// Live entity collection, scanned in place.
    fn entities(&self) -> &[EntitySnapshot];
}

#[cfg(test)]
mod tests {
    use super::{
        BedData, BlockFace, BlockPos, BlockState, Command, DyeColor, EntityId, EntityKind,
        EntitySnapshot, Facing, ItemStack, Location, Material,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn block_pos_round_trips_through_bincode() {
        assert_round_trip(&BlockPos::new(-12, 64, 300));
    }

    #[test]
    fn coloured_bed_state_round_trips_through_bincode() {
        let state = BlockState::new(Material::Bed, 0b1010).with_color(DyeColor::Cyan);
        assert_round_trip(&state);
    }

    #[test]
    fn drop_command_round_trips_through_bincode() {
        let command = Command::DropItems {
            pos: BlockPos::new(1, 2, 3),
            items: vec![ItemStack::new(Material::Bed, 1, DyeColor::Lime.wool_data())],
        };
        assert_round_trip(&command);
    }

    #[test]
    fn relative_follows_face_steps() {
        let origin = BlockPos::new(0, 10, 0);
        assert_eq!(origin.relative(BlockFace::North), BlockPos::new(0, 10, -1));
        assert_eq!(origin.relative(BlockFace::East), BlockPos::new(1, 10, 0));
        assert_eq!(origin.below(), BlockPos::new(0, 9, 0));
        assert_eq!(origin.above(), BlockPos::new(0, 11, 0));
    }

    #[test]
    fn face_to_detects_adjacent_cells_only() {
        let origin = BlockPos::new(3, 3, 3);
        assert_eq!(
            origin.face_to(BlockPos::new(3, 3, 4)),
            Some(BlockFace::South)
        );
        assert_eq!(origin.face_to(BlockPos::new(4, 3, 4)), None);
        assert_eq!(origin.face_to(origin), None);
    }

    #[test]
    fn facing_bits_round_trip() {
        for bits in 0..4 {
            assert_eq!(Facing::from_data_bits(bits).data_bits(), bits);
        }
    }

    #[test]
    fn yaw_quadrants_map_to_facings() {
        assert_eq!(Facing::from_yaw(0.0), Facing::South);
        assert_eq!(Facing::from_yaw(44.0), Facing::South);
        assert_eq!(Facing::from_yaw(90.0), Facing::West);
        assert_eq!(Facing::from_yaw(180.0), Facing::North);
        assert_eq!(Facing::from_yaw(270.0), Facing::East);
        assert_eq!(Facing::from_yaw(-90.0), Facing::East);
        assert_eq!(Facing::from_yaw(359.0), Facing::South);
    }

    #[test]
    fn bed_data_flags_preserve_other_bits() {
        let data = BedData::from_bits(0).with_facing(Facing::East).with_head(true);
        assert_eq!(data.bits(), 0x3 | BedData::HEAD);

        let occupied = data.with_occupied(true);
        assert!(occupied.is_occupied());
        assert!(occupied.is_head());
        assert_eq!(occupied.facing(), Facing::East);
        assert_eq!(occupied.with_occupied(false), data);
    }

    #[test]
    fn bed_data_requires_bed_material() {
        assert!(BedData::from_state(&BlockState::new(Material::Stone, 0x8)).is_none());
        assert!(BedData::from_state(&BlockState::new(Material::Bed, 0x8)).is_some());
    }

    #[test]
    fn within_bounds_is_inclusive() {
        let pos = BlockPos::new(0, 0, 0);
        assert!(Location::new(3.0, -2.0, -3.0).is_within(pos, 3, 2, 3));
        assert!(!Location::new(3.01, 0.0, 0.0).is_within(pos, 3, 2, 3));
    }

    #[test]
    fn calm_piglin_is_not_a_threat() {
        let mut piglin = EntitySnapshot {
            id: EntityId::new(1),
            kind: EntityKind::ZombifiedPiglin,
            location: Location::new(0.0, 0.0, 0.0),
            angry: false,
        };
        assert!(!piglin.is_threat());
        piglin.angry = true;
        assert!(piglin.is_threat());

        let cow = EntitySnapshot {
            kind: EntityKind::Cow,
            ..piglin
        };
        assert!(!cow.is_threat());
    }
}
