//! Scripted bedside scenario driving the world and block system together.

use anyhow::{Context, Result};
use bedstead_core::{
    BlockFace, BlockPos, BlockState, Command, DyeColor, EntityKind, Event, ItemStack, Location,
    Material, PlayerId, WorldView, TICKS_PER_DAY,
};
use bedstead_protocol::{sound_announcements, Codec, PlaySoundCodec};
use bedstead_system_blocks::{BlockInput, Blocks};
use bedstead_world::{self as world, query, World, WorldConfig};
use bytes::BytesMut;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Half-width of the stone floor laid under the bed.
const FLOOR_RADIUS: i32 = 4;
/// Half-width of the square mobs are scattered over.
const MOB_RADIUS: i32 = 12;
const MOB_KINDS: [EntityKind; 7] = [
    EntityKind::Zombie,
    EntityKind::Skeleton,
    EntityKind::Creeper,
    EntityKind::Spider,
    EntityKind::ZombifiedPiglin,
    EntityKind::Cow,
    EntityKind::Pig,
];

/// Cell the bed's foot is placed in.
pub(crate) const FOOT: BlockPos = BlockPos::new(0, 1, 0);

/// Knobs of a single scenario run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ScenarioOptions {
    /// Yaw of the player placing the bed.
    pub(crate) yaw: f32,
    /// Number of mobs scattered around the bed.
    pub(crate) mobs: u32,
    /// Seed for mob placement.
    pub(crate) seed: u64,
}

/// Everything observed while running the scenario.
#[derive(Debug)]
pub(crate) struct ScenarioReport {
    /// Events in the order the world emitted them.
    pub(crate) events: Vec<Event>,
    /// Encoded sound announcements for those events.
    pub(crate) sound_bytes: BytesMut,
    /// Number of announcements encoded.
    pub(crate) sounds: usize,
}

/// Owns the world and block system for one run.
#[derive(Debug)]
pub(crate) struct Scenario {
    world: World,
    blocks: Blocks,
    events: Vec<Event>,
}

impl Scenario {
    /// Creates a scenario over a fresh world.
    pub(crate) fn new(config: &WorldConfig) -> Self {
        Self {
            world: World::with_config(config),
            blocks: Blocks::default(),
            events: Vec::new(),
        }
    }

    /// Places a bed, tries to sleep in it and gets up again if that worked.
    pub(crate) fn run(mut self, options: ScenarioOptions) -> Result<ScenarioReport> {
        self.lay_floor();
        let player = self.join(options.yaw);
        self.input(BlockInput::Place {
            player,
            against: FOOT.below(),
            face: BlockFace::Up,
            item: ItemStack::new(Material::Bed, 1, DyeColor::Red.wool_data()),
        });
        if query::cell(&self.world, FOOT).material != Material::Bed {
            log::warn!("bed could not be placed at {FOOT:?}");
        }

        self.scatter_mobs(options.mobs, options.seed);
        self.input(BlockInput::Interact {
            player,
            pos: FOOT,
            face: BlockFace::Up,
        });

        let asleep = self
            .world
            .player(player)
            .is_some_and(|snapshot| snapshot.sleeping_in.is_some());
        if asleep {
            let until_morning = TICKS_PER_DAY - self.world.time_of_day();
            self.run_command(Command::Tick {
                ticks: until_morning,
            });
            self.input(BlockInput::LeaveBed { player });
        }

        let announcements = sound_announcements(&self.events);
        let mut sound_bytes = BytesMut::new();
        for message in &announcements {
            PlaySoundCodec
                .encode(&mut sound_bytes, message)
                .with_context(|| format!("failed to encode sound {:?}", message.sound))?;
        }

        Ok(ScenarioReport {
            events: self.events,
            sound_bytes,
            sounds: announcements.len(),
        })
    }

    fn lay_floor(&mut self) {
        for x in -FLOOR_RADIUS..=FLOOR_RADIUS {
            for z in -FLOOR_RADIUS..=FLOOR_RADIUS {
                self.run_command(Command::SetBlock {
                    pos: BlockPos::new(x, 0, z),
                    state: BlockState::new(Material::Stone, 0),
                });
            }
        }
    }

    fn join(&mut self, yaw: f32) -> PlayerId {
        let before = query::players(&self.world).len();
        self.run_command(Command::JoinPlayer {
            location: Location::standing_in(FOOT),
            yaw,
        });
        query::players(&self.world)[before].id
    }

    fn scatter_mobs(&mut self, count: u32, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..count {
            let kind = MOB_KINDS[rng.gen_range(0..MOB_KINDS.len())];
            let x = rng.gen_range(-MOB_RADIUS..=MOB_RADIUS);
            let z = rng.gen_range(-MOB_RADIUS..=MOB_RADIUS);
            self.run_command(Command::SpawnEntity {
                kind,
                location: Location::standing_in(BlockPos::new(x, 1, z)),
                angry: rng.gen_bool(0.5),
            });
        }
    }

    fn input(&mut self, input: BlockInput) {
        let mut commands = Vec::new();
        self.blocks
            .handle(&[], &[input], &self.world, &mut commands);
        self.dispatch(commands);
    }

    fn run_command(&mut self, command: Command) {
        self.dispatch(vec![command]);
    }

    fn dispatch(&mut self, mut commands: Vec<Command>) {
        while !commands.is_empty() {
            let mut events = Vec::new();
            for command in commands.drain(..) {
                world::apply(&mut self.world, command, &mut events);
            }
            self.blocks
                .handle(&events, &[], &self.world, &mut commands);
            self.events.extend(events);
        }
    }
}

#[cfg(test)]
mod tests {
    use bedstead_core::{Biome, Notice};

    use super::*;

    fn options() -> ScenarioOptions {
        ScenarioOptions {
            yaw: 0.0,
            mobs: 0,
            seed: 7,
        }
    }

    fn night() -> WorldConfig {
        WorldConfig {
            start_time: 18_000,
            ..WorldConfig::default()
        }
    }

    fn run(config: &WorldConfig, options: ScenarioOptions) -> ScenarioReport {
        Scenario::new(config).run(options).expect("scenario runs")
    }

    #[test]
    fn night_run_sleeps_and_gets_up() {
        let report = run(&night(), options());

        assert!(report
            .events
            .iter()
            .any(|event| matches!(event, Event::PlayerEnteredBed { .. })));
        assert!(report
            .events
            .iter()
            .any(|event| matches!(event, Event::PlayerLeftBed { .. })));
        assert_eq!(report.sounds, 1, "bed placement is announced once");
    }

    #[test]
    fn daytime_run_reports_the_day_notice() {
        let report = run(&WorldConfig::default(), options());

        assert!(report.events.iter().any(|event| matches!(
            event,
            Event::NoticeSent {
                notice: Notice::BedDay,
                ..
            }
        )));
    }

    #[test]
    fn nether_run_explodes() {
        let config = WorldConfig {
            default_biome: Biome::NetherWastes,
            ..night()
        };
        let report = run(&config, options());

        assert!(report
            .events
            .iter()
            .any(|event| matches!(event, Event::ExplosionTriggered { fire: true, .. })));
        assert_eq!(report.sounds, 2);
    }

    #[test]
    fn seeded_runs_are_repeatable() {
        let crowded = ScenarioOptions {
            mobs: 12,
            ..options()
        };
        let first = run(&night(), crowded);
        let second = run(&night(), crowded);

        assert_eq!(first.events, second.events);
        assert_eq!(first.sound_bytes, second.sound_bytes);
    }
}
