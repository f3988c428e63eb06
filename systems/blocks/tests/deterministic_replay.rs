use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use bedstead_core::{
    BlockFace, BlockPos, BlockState, Command, EntityKind, Event, ItemStack, Location, Material,
    Notice, PlayerId,
};
use bedstead_system_blocks::{BlockInput, Blocks};
use bedstead_world::{self as world, query, World};

#[test]
fn deterministic_replay_produces_identical_outcomes() {
    let first = replay(scripted_steps());
    let second = replay(scripted_steps());

    assert_eq!(first, second, "replay diverged between runs");
    assert_eq!(
        first.fingerprint(),
        second.fingerprint(),
        "fingerprint mismatch"
    );

    assert!(
        first.cells.iter().all(|(_, material)| *material != Material::Bed),
        "bed must be gone after its floor was removed"
    );
    assert!(first.events.contains(&EventRecord::Notice {
        player: 0,
        notice: Notice::BedDay,
    }));
    assert!(first.events.contains(&EventRecord::EnteredBed {
        player: 0,
        head: BlockPos::new(2, 1, 1),
    }));
    assert!(first.events.contains(&EventRecord::Notice {
        player: 0,
        notice: Notice::BedMissing,
    }));
}

enum Step {
    Command(Command),
    Input(BlockInput),
}

fn scripted_steps() -> Vec<Step> {
    let player = PlayerId::new(0);
    let mut steps: Vec<Step> = (0..5)
        .flat_map(|x| (0..5).map(move |z| (x, z)))
        .map(|(x, z)| {
            Step::Command(Command::SetBlock {
                pos: BlockPos::new(x, 0, z),
                state: BlockState::new(Material::Cobblestone, 0),
            })
        })
        .collect();

    steps.extend([
        Step::Command(Command::JoinPlayer {
            location: Location::standing_in(BlockPos::new(1, 1, 2)),
            yaw: 270.0,
        }),
        Step::Input(BlockInput::Place {
            player,
            against: BlockPos::new(1, 0, 1),
            face: BlockFace::Up,
            item: ItemStack::new(Material::Bed, 1, 11),
        }),
        Step::Command(Command::SetTime { time: 6_000 }),
        Step::Input(BlockInput::Interact {
            player,
            pos: BlockPos::new(1, 1, 1),
            face: BlockFace::Up,
        }),
        Step::Command(Command::SpawnEntity {
            kind: EntityKind::Pig,
            location: Location::standing_in(BlockPos::new(3, 1, 3)),
            angry: false,
        }),
        Step::Command(Command::Tick { ticks: 8_000 }),
        Step::Input(BlockInput::Interact {
            player,
            pos: BlockPos::new(1, 1, 1),
            face: BlockFace::Up,
        }),
        Step::Command(Command::SetBlock {
            pos: BlockPos::new(2, 0, 1),
            state: BlockState::AIR,
        }),
    ]);
    steps
}

fn replay(steps: Vec<Step>) -> ReplayOutcome {
    let mut world = World::new();
    let blocks = Blocks::default();
    let mut log = Vec::new();

    for step in steps {
        let mut commands = Vec::new();
        match step {
            Step::Command(command) => commands.push(command),
            Step::Input(input) => blocks.handle(&[], &[input], &world, &mut commands),
        }
        settle(&mut world, &blocks, commands, &mut log);
    }

    let mut cells: Vec<_> = (0..5)
        .flat_map(|x| (0..3).flat_map(move |y| (0..5).map(move |z| BlockPos::new(x, y, z))))
        .map(|pos| (pos, query::cell(&world, pos).material))
        .filter(|(_, material)| *material != Material::Air)
        .collect();
    cells.sort();

    ReplayOutcome { cells, events: log }
}

fn settle(
    world: &mut World,
    blocks: &Blocks,
    mut commands: Vec<Command>,
    log: &mut Vec<EventRecord>,
) {
    while !commands.is_empty() {
        let mut events = Vec::new();
        for command in commands.drain(..) {
            world::apply(world, command, &mut events);
        }
        log.extend(events.iter().map(EventRecord::from));
        blocks.handle(&events, &[], &*world, &mut commands);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ReplayOutcome {
    cells: Vec<(BlockPos, Material)>,
    events: Vec<EventRecord>,
}

impl ReplayOutcome {
    fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum EventRecord {
    Time {
        time: u64,
    },
    Weather {
        thundering: bool,
    },
    Block {
        pos: BlockPos,
        old: BlockState,
        new: BlockState,
    },
    EntitySpawned {
        entity: u32,
        kind: EntityKind,
    },
    EntityRemoved {
        entity: u32,
    },
    PlayerJoined {
        player: u32,
    },
    Notice {
        player: u32,
        notice: Notice,
    },
    Explosion {
        center: BlockPos,
        power_bits: u32,
        fire: bool,
    },
    EnteredBed {
        player: u32,
        head: BlockPos,
    },
    LeftBed {
        player: u32,
        cell: BlockPos,
    },
    Dropped {
        pos: BlockPos,
        items: Vec<ItemStack>,
    },
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        match event {
            Event::TimeChanged { time } => Self::Time { time: *time },
            Event::WeatherChanged { thundering } => Self::Weather {
                thundering: *thundering,
            },
            Event::BlockChanged { pos, old, new } => Self::Block {
                pos: *pos,
                old: *old,
                new: *new,
            },
            Event::EntitySpawned { entity, kind } => Self::EntitySpawned {
                entity: entity.get(),
                kind: *kind,
            },
            Event::EntityRemoved { entity } => Self::EntityRemoved {
                entity: entity.get(),
            },
            Event::PlayerJoined { player } => Self::PlayerJoined {
                player: player.get(),
            },
            Event::NoticeSent { player, notice } => Self::Notice {
                player: player.get(),
                notice: *notice,
            },
            Event::ExplosionTriggered {
                center,
                power,
                fire,
            } => Self::Explosion {
                center: *center,
                power_bits: power.to_bits(),
                fire: *fire,
            },
            Event::PlayerEnteredBed { player, head } => Self::EnteredBed {
                player: player.get(),
                head: *head,
            },
            Event::PlayerLeftBed { player, location } => Self::LeftBed {
                player: player.get(),
                cell: location.block(),
            },
            Event::ItemsDropped { pos, items } => Self::Dropped {
                pos: *pos,
                items: items.clone(),
            },
        }
    }
}
