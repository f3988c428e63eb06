#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative voxel world state management for Bedstead.
//!
//! The world owns the cell arena, the biome map, the clock, the weather and
//! the live entity and player collections. It is mutated exclusively through
//! [`apply`], which reports every observable change as an [`Event`].

mod entities;

use std::collections::HashMap;

use bedstead_core::{
    Biome, BlockAccess, BlockPos, BlockState, Cell, Command, EntityKind, EntitySnapshot, Event,
    Location, PlayerSnapshot, WorldView, TICKS_PER_DAY,
};
use serde::Deserialize;

use crate::entities::{EntityRegistry, PlayerRegistry};

/// Start-up configuration for a world.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Absolute tick count the clock starts at.
    pub start_time: u64,
    /// Whether a thunderstorm is active from the start.
    pub thundering: bool,
    /// Biome reported for columns without an explicit assignment.
    pub default_biome: Biome,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            start_time: 0,
            thundering: false,
            default_biome: Biome::Plains,
        }
    }
}

/// Represents the authoritative Bedstead world state.
#[derive(Debug)]
pub struct World {
    time: u64,
    thundering: bool,
    default_biome: Biome,
    cells: HashMap<BlockPos, BlockState>,
    biomes: HashMap<(i32, i32), Biome>,
    entities: EntityRegistry,
    players: PlayerRegistry,
}

impl World {
    /// Creates an empty world using the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&WorldConfig::default())
    }

    /// Creates an empty world using the provided configuration.
    #[must_use]
    pub fn with_config(config: &WorldConfig) -> Self {
        Self {
            time: config.start_time,
            thundering: config.thundering,
            default_biome: config.default_biome,
            cells: HashMap::new(),
            biomes: HashMap::new(),
            entities: EntityRegistry::new(),
            players: PlayerRegistry::new(),
        }
    }

    fn state(&self, pos: BlockPos) -> BlockState {
        self.cells.get(&pos).copied().unwrap_or(BlockState::AIR)
    }

    fn biome(&self, x: i32, z: i32) -> Biome {
        self.biomes
            .get(&(x, z))
            .copied()
            .unwrap_or(self.default_biome)
    }

    fn write(&mut self, pos: BlockPos, new: BlockState, out_events: &mut Vec<Event>) {
        let old = self.state(pos);
        if old == new {
            return;
        }

        if new == BlockState::AIR {
            let _ = self.cells.remove(&pos);
        } else {
            let _ = self.cells.insert(pos, new);
        }
        out_events.push(Event::BlockChanged { pos, old, new });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockAccess for World {
    fn cell(&self, pos: BlockPos) -> Cell {
        Cell::from_state(self.state(pos), self.biome(pos.x(), pos.z()))
    }
}

impl WorldView for World {
    fn time_of_day(&self) -> u64 {
        self.time % TICKS_PER_DAY
    }

    fn is_thundering(&self) -> bool {
        self.thundering
    }

    fn players(&self) -> &[PlayerSnapshot] {
        self.players.as_slice()
    }

    fn entities(&self) -> &[EntitySnapshot] {
        self.entities.as_slice()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Writes that leave a cell unchanged are dropped without an event, which
/// makes repeated destruction requests idempotent.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::SetTime { time } => {
            world.time = time;
            out_events.push(Event::TimeChanged { time });
        }
        Command::Tick { ticks } => {
            world.time = world.time.saturating_add(ticks);
            out_events.push(Event::TimeChanged { time: world.time });
        }
        Command::SetThundering { thundering } => {
            if world.thundering != thundering {
                world.thundering = thundering;
                out_events.push(Event::WeatherChanged { thundering });
            }
        }
        Command::SetBiome { x, z, biome } => {
            let _ = world.biomes.insert((x, z), biome);
        }
        Command::SetBlock { pos, state } => world.write(pos, state, out_events),
        Command::SetBlockData { pos, data } => {
            let state = world.state(pos).with_data(data);
            world.write(pos, state, out_events);
        }
        Command::SpawnEntity {
            kind,
            location,
            angry,
        } => {
            let entity = world.entities.spawn(kind, location, angry);
            out_events.push(Event::EntitySpawned { entity, kind });
        }
        Command::SetEntityAngry { entity, angry } => {
            if let Some(snapshot) = world.entities.get_mut(entity) {
                snapshot.angry = angry;
            }
        }
        Command::RemoveEntity { entity } => {
            if world.entities.remove(entity) {
                out_events.push(Event::EntityRemoved { entity });
            }
        }
        Command::JoinPlayer { location, yaw } => {
            let player = world.players.join(location, yaw);
            out_events.push(Event::PlayerJoined { player });
        }
        Command::MovePlayer {
            player,
            location,
            yaw,
        } => {
            if let Some(snapshot) = world.players.get_mut(player) {
                snapshot.location = location;
                snapshot.yaw = yaw;
            }
        }
        Command::SendNotice { player, notice } => {
            if world.players.get(player).is_some() {
                log::info!("player {} notified: {}", player.get(), notice.key());
                out_events.push(Event::NoticeSent { player, notice });
            }
        }
        Command::Explode {
            center,
            power,
            fire,
        } => {
            log::info!(
                "explosion of power {power} at ({}, {}, {})",
                center.x(),
                center.y(),
                center.z()
            );
            out_events.push(Event::ExplosionTriggered {
                center,
                power,
                fire,
            });
        }
        Command::EnterBed { player, head } => {
            if world.players.enter_bed(player, head) {
                out_events.push(Event::PlayerEnteredBed { player, head });
            }
        }
        Command::LeaveBed { player, exit } => {
            if let Some(location) = world.players.leave_bed(player, exit) {
                out_events.push(Event::PlayerLeftBed { player, location });
            }
        }
        Command::DropItems { pos, items } => {
            let location = Location::standing_in(pos);
            for _ in &items {
                let entity = world.entities.spawn(EntityKind::DroppedItem, location, false);
                out_events.push(Event::EntitySpawned {
                    entity,
                    kind: EntityKind::DroppedItem,
                });
            }
            out_events.push(Event::ItemsDropped { pos, items });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use bedstead_core::{BlockAccess, BlockPos, Cell, EntitySnapshot, PlayerSnapshot};

    use super::World;

    /// Snapshot of the cell at `pos`.
    #[must_use]
    pub fn cell(world: &World, pos: BlockPos) -> Cell {
        world.cell(pos)
    }

    /// Absolute tick count of the world clock.
    #[must_use]
    pub fn time(world: &World) -> u64 {
        world.time
    }

    /// Connected players in join order.
    #[must_use]
    pub fn players(world: &World) -> &[PlayerSnapshot] {
        world.players.as_slice()
    }

    /// Live entities in identifier order.
    #[must_use]
    pub fn entities(world: &World) -> &[EntitySnapshot] {
        world.entities.as_slice()
    }

    /// Number of non-air cells stored in the arena.
    #[must_use]
    pub fn populated_cells(world: &World) -> usize {
        world.cells.len()
    }
}
