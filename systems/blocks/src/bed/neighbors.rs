//! Reaction of bed cells to changes in adjacent cells.

use bedstead_core::{BlockAccess, BlockPos, BlockState, Command, Material};

use super::pair::{resolve_foot, resolve_head};
use crate::NeighborChange;

/// Destroys the bed cell at `pos` when a neighbour change breaks its pair.
///
/// Two checks run independently: the partner half turning into air, and the
/// floor under either half turning into air. Both resolve the pair afresh, so
/// a cell that no longer belongs to a bed is left alone.
pub fn on_near_block_changed<W>(
    world: &W,
    pos: BlockPos,
    change: &NeighborChange,
    out: &mut Vec<Command>,
) where
    W: BlockAccess + ?Sized,
{
    if change.new.material != Material::Air {
        return;
    }
    let (Some(head), Some(foot)) = (resolve_head(world, pos), resolve_foot(world, pos)) else {
        return;
    };

    let half_removed = change.changed == head || change.changed == foot;
    let floor_removed = change.changed == head.below() || change.changed == foot.below();
    if half_removed || floor_removed {
        log::debug!("bed cell {pos:?} lost its support at {:?}", change.changed);
        out.push(Command::SetBlock {
            pos,
            state: BlockState::AIR,
        });
    }
}
