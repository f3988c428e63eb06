//! Placement validation and two-cell construction.

use bedstead_core::{
    BedData, BlockAccess, BlockPos, BlockState, Command, DyeColor, Facing, ItemStack, Material,
    PlayerSnapshot,
};

/// Direction from the foot toward the head for a bed placed by `player`.
///
/// The head extends away from the player, along their horizontal view.
#[must_use]
pub fn placement_direction(player: &PlayerSnapshot) -> Facing {
    Facing::from_yaw(player.yaw)
}

/// Whether a bed may be placed with its foot at `target`.
///
/// The would-be head cell must be empty and rest on a solid cell.
#[must_use]
pub fn can_place_at<W>(world: &W, player: Option<&PlayerSnapshot>, target: BlockPos) -> bool
where
    W: BlockAccess + ?Sized,
{
    let Some(player) = player else {
        return false;
    };
    let head = target.relative(placement_direction(player).face());
    world.material(head) == Material::Air && world.material(head.below()).is_solid()
}

/// Turns the generically placed state into a foot half facing away from the player.
///
/// A state that is not bed-shaped is logged and returned unchanged.
#[must_use]
pub fn place_block(player: &PlayerSnapshot, state: BlockState) -> BlockState {
    let Some(data) = BedData::from_state(&state) else {
        log::warn!(
            "expected bed data while placing a bed, found {:?}",
            state.material
        );
        return state;
    };

    let data = data
        .with_facing(placement_direction(player))
        .with_head(false);
    state.with_data(data.bits())
}

/// Completes a freshly placed foot by colouring it and writing the head.
///
/// The foot is rewritten first, then the head appears one step along the
/// foot's facing with the same material, facing and colour.
pub fn after_place(foot: BlockPos, placed: BlockState, item: ItemStack, out: &mut Vec<Command>) {
    if !placed.material.is_bed_family() {
        return;
    }
    let Some(foot_data) = BedData::from_state(&placed) else {
        return;
    };

    let color = DyeColor::from_wool_data(item.data);
    out.push(Command::SetBlock {
        pos: foot,
        state: placed.with_color(color),
    });

    let facing = foot_data.facing();
    let head_data = BedData::from_bits(0).with_head(true).with_facing(facing);
    out.push(Command::SetBlock {
        pos: foot.relative(facing.face()),
        state: BlockState::new(placed.material, head_data.bits()).with_color(color),
    });
}
