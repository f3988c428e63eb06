//! Two-cell bed behaviour.
//!
//! A bed is stored as two independent cells, a foot and a head, linked only
//! by the facing bits they share. Nothing records the link itself: every
//! operation re-derives the pair from the cell it is handed, so a half whose
//! partner vanished simply stops resolving.

mod exit;
mod neighbors;
mod pair;
mod placement;
mod sleep;

pub use exit::{exit_location, is_safe_exit};
pub use neighbors::on_near_block_changed;
pub use pair::{is_occupied, resolve_foot, resolve_head, set_occupied};
pub use placement::{after_place, can_place_at, place_block, placement_direction};
pub use sleep::{
    evaluate, interact, SleepOutcome, EXPLOSION_POWER, MONSTER_RANGE, NIGHT_END, NIGHT_START,
    REACH,
};

use bedstead_core::{
    BlockFace, BlockPos, BlockState, Command, DyeColor, ItemStack, Notice, PlayerId,
    PlayerSnapshot, WorldView,
};

use crate::{BlockBehaviour, NeighborChange};

/// Block behaviour registered for bed-family materials.
#[derive(Clone, Copy, Debug, Default)]
pub struct BedBlock;

impl BlockBehaviour for BedBlock {
    fn can_place_at(
        &self,
        world: &dyn WorldView,
        player: Option<&PlayerSnapshot>,
        target: BlockPos,
        _against: BlockFace,
    ) -> bool {
        can_place_at(world, player, target)
    }

    fn place_block(
        &self,
        player: &PlayerSnapshot,
        state: BlockState,
        _face: BlockFace,
        _item: ItemStack,
    ) -> BlockState {
        place_block(player, state)
    }

    fn after_place(
        &self,
        _player: &PlayerSnapshot,
        pos: BlockPos,
        placed: BlockState,
        item: ItemStack,
        _previous: BlockState,
        out: &mut Vec<Command>,
    ) {
        after_place(pos, placed, item, out);
    }

    fn interact(
        &self,
        world: &dyn WorldView,
        player: &PlayerSnapshot,
        pos: BlockPos,
        _face: BlockFace,
        out: &mut Vec<Command>,
    ) -> bool {
        interact(world, player, pos, out)
    }

    fn on_near_block_changed(
        &self,
        world: &dyn WorldView,
        pos: BlockPos,
        change: &NeighborChange,
        out: &mut Vec<Command>,
    ) {
        on_near_block_changed(world, pos, change, out);
    }

    fn drops(&self, world: &dyn WorldView, pos: BlockPos) -> Vec<ItemStack> {
        let cell = world.cell(pos);
        let color = cell.color.unwrap_or(DyeColor::White);
        vec![ItemStack::new(cell.material, 1, color.wool_data())]
    }
}

/// Gets a sleeping player out of bed.
///
/// Occupancy is cleared on both halves and the player is moved to the first
/// safe cell around the bed. When every candidate is blocked the player stays
/// at the head and is told so; when the bed no longer exists the player is
/// woken in place.
pub fn leave_bed<W>(world: &W, player: PlayerId, out: &mut Vec<Command>)
where
    W: WorldView + ?Sized,
{
    let Some(snapshot) = world.player(player) else {
        return;
    };
    let Some(sleeping_in) = snapshot.sleeping_in else {
        return;
    };

    let pair = resolve_head(world, sleeping_in).zip(resolve_foot(world, sleeping_in));
    let Some((head, foot)) = pair else {
        out.push(Command::LeaveBed { player, exit: None });
        out.push(Command::SendNotice {
            player,
            notice: Notice::BedMissing,
        });
        return;
    };

    set_occupied(world, head, foot, false, out);
    let exit = exit_location(world, head, foot);
    out.push(Command::LeaveBed { player, exit });
    if exit.is_none() {
        out.push(Command::SendNotice {
            player,
            notice: Notice::BedObstructed,
        });
    }
}
