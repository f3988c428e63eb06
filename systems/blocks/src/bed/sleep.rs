//! Gatekeeping for the sleep interaction.

use bedstead_core::{BedData, BlockPos, Command, EntityId, Notice, PlayerSnapshot, WorldView};

use super::pair::{resolve_foot, resolve_head, set_occupied};

/// Power of the explosion triggered by sleeping in a hostile dimension.
pub const EXPLOSION_POWER: f32 = 5.0;

/// First tick of the day during which sleeping is allowed.
pub const NIGHT_START: u64 = 12_541;

/// Last tick of the day during which sleeping is allowed.
pub const NIGHT_END: u64 = 23_458;

/// Per-axis distance a player may be from the head to use the bed.
pub const REACH: (u32, u32, u32) = (3, 2, 3);

/// Per-axis distance, from the cell under the head, within which threats block sleep.
pub const MONSTER_RANGE: (u32, u32, u32) = (8, 5, 8);

/// Result of a single sleep attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SleepOutcome {
    /// The player is already asleep in another bed; nothing happens.
    AlreadySleeping {
        /// Head cell of the bed the player is in.
        current: BlockPos,
    },
    /// The bed lies in a dimension where beds explode.
    Explosion {
        /// Head cell at the centre of the blast.
        head: BlockPos,
    },
    /// It is daytime and the weather is clear.
    TooBright,
    /// Someone already sleeps in the bed.
    Occupied,
    /// The player is too far from the head; rejected without a notice.
    TooFar,
    /// A threatening entity is close to the bed.
    MonstersNearby {
        /// First threat found.
        entity: EntityId,
    },
    /// The player may go to sleep.
    Sleep {
        /// Head cell the player sleeps in.
        head: BlockPos,
        /// Foot cell of the same bed.
        foot: BlockPos,
    },
}

/// Evaluates a sleep attempt by `player` on the bed cell at `pos`.
///
/// A player already asleep in a different bed is turned away before anything
/// else is checked. The remaining checks run in a fixed order and the first
/// failing one decides the outcome: dimension, time of day, occupancy, reach
/// and finally nearby threats.
/// Returns `None` when `pos` does not resolve to a bed.
#[must_use]
pub fn evaluate<W>(world: &W, player: &PlayerSnapshot, pos: BlockPos) -> Option<SleepOutcome>
where
    W: WorldView + ?Sized,
{
    let head = resolve_head(world, pos)?;
    let foot = resolve_foot(world, pos)?;
    let cell = world.cell(head);
    let Some(data) = BedData::from_state(&cell.state()) else {
        log::warn!("bed at {pos:?} resolved to {head:?} which holds {:?}", cell.material);
        return None;
    };

    if let Some(current) = player.sleeping_in.filter(|current| *current != head) {
        return Some(SleepOutcome::AlreadySleeping { current });
    }

    if cell.biome.is_bed_explosive() {
        return Some(SleepOutcome::Explosion { head });
    }

    let time = world.time_of_day();
    if (time < NIGHT_START || time > NIGHT_END) && !world.is_thundering() {
        return Some(SleepOutcome::TooBright);
    }

    if data.is_occupied() {
        return Some(SleepOutcome::Occupied);
    }

    let (dx, dy, dz) = REACH;
    if !player.location.is_within(head, dx, dy, dz) {
        return Some(SleepOutcome::TooFar);
    }

    let (dx, dy, dz) = MONSTER_RANGE;
    let floor = head.below();
    let threat = world
        .entities()
        .iter()
        .find(|entity| entity.is_threat() && entity.location.is_within(floor, dx, dy, dz));
    if let Some(entity) = threat {
        return Some(SleepOutcome::MonstersNearby { entity: entity.id });
    }

    Some(SleepOutcome::Sleep { head, foot })
}

/// Runs a sleep attempt and queues the commands for its outcome.
///
/// Returns `false` only when `pos` is not a bed; every other outcome counts
/// as handled, including the silent rejections of out-of-reach players and
/// players already asleep elsewhere.
pub fn interact<W>(
    world: &W,
    player: &PlayerSnapshot,
    pos: BlockPos,
    out: &mut Vec<Command>,
) -> bool
where
    W: WorldView + ?Sized,
{
    let Some(outcome) = evaluate(world, player, pos) else {
        return false;
    };
    log::debug!("player {:?} used bed at {pos:?}: {outcome:?}", player.id);

    let notice = |notice: Notice| Command::SendNotice {
        player: player.id,
        notice,
    };
    match outcome {
        SleepOutcome::AlreadySleeping { .. } | SleepOutcome::TooFar => {}
        SleepOutcome::Explosion { head } => out.push(Command::Explode {
            center: head,
            power: EXPLOSION_POWER,
            fire: true,
        }),
        SleepOutcome::TooBright => out.push(notice(Notice::BedDay)),
        SleepOutcome::Occupied => out.push(notice(Notice::BedOccupied)),
        SleepOutcome::MonstersNearby { .. } => out.push(notice(Notice::BedMonstersNearby)),
        SleepOutcome::Sleep { head, foot } => {
            set_occupied(world, head, foot, true, out);
            out.push(Command::EnterBed {
                player: player.id,
                head,
            });
        }
    }
    true
}
