//! Head/foot resolution and the shared occupancy flag.

use bedstead_core::{BedData, BlockAccess, BlockPos, Command};

/// Head half of the bed that `pos` belongs to.
///
/// Returns `None` when the cell is not a bed.
#[must_use]
pub fn resolve_head<W>(world: &W, pos: BlockPos) -> Option<BlockPos>
where
    W: BlockAccess + ?Sized,
{
    let data = bed_data(world, pos)?;
    if data.is_head() {
        Some(pos)
    } else {
        Some(pos.relative(data.facing().face()))
    }
}

/// Foot half of the bed that `pos` belongs to.
///
/// Returns `None` when the cell is not a bed.
#[must_use]
pub fn resolve_foot<W>(world: &W, pos: BlockPos) -> Option<BlockPos>
where
    W: BlockAccess + ?Sized,
{
    let data = bed_data(world, pos)?;
    if data.is_head() {
        Some(pos.relative(data.facing().opposite().face()))
    } else {
        Some(pos)
    }
}

/// Whether the bed cell at `pos` is marked as occupied.
#[must_use]
pub fn is_occupied<W>(world: &W, pos: BlockPos) -> bool
where
    W: BlockAccess + ?Sized,
{
    bed_data(world, pos).is_some_and(BedData::is_occupied)
}

/// Queues writes setting or clearing the occupancy flag on both halves.
///
/// Only the occupancy bit changes; facing and head bits are carried over.
/// Nothing is written unless both cells are beds.
pub fn set_occupied<W>(
    world: &W,
    head: BlockPos,
    foot: BlockPos,
    occupied: bool,
    out: &mut Vec<Command>,
) where
    W: BlockAccess + ?Sized,
{
    let (Some(head_data), Some(foot_data)) = (bed_data(world, head), bed_data(world, foot)) else {
        return;
    };

    out.push(Command::SetBlockData {
        pos: head,
        data: head_data.with_occupied(occupied).bits(),
    });
    out.push(Command::SetBlockData {
        pos: foot,
        data: foot_data.with_occupied(occupied).bits(),
    });
}

fn bed_data<W>(world: &W, pos: BlockPos) -> Option<BedData>
where
    W: BlockAccess + ?Sized,
{
    BedData::from_state(&world.cell(pos).state())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bedstead_core::{Biome, BlockState, Cell, Facing, Material};

    use super::*;

    #[derive(Default)]
    struct Cells(HashMap<BlockPos, BlockState>);

    impl BlockAccess for Cells {
        fn cell(&self, pos: BlockPos) -> Cell {
            let state = self.0.get(&pos).copied().unwrap_or(BlockState::AIR);
            Cell::from_state(state, Biome::Plains)
        }
    }

    fn bed(facing: Facing, head: bool) -> BlockState {
        let data = BedData::from_bits(0).with_facing(facing).with_head(head);
        BlockState::new(Material::Bed, data.bits())
    }

    #[test]
    fn resolves_both_halves_from_either_cell() {
        let mut cells = Cells::default();
        let foot = BlockPos::new(0, 1, 0);
        let head = BlockPos::new(0, 1, -1);
        let _ = cells.0.insert(foot, bed(Facing::North, false));
        let _ = cells.0.insert(head, bed(Facing::North, true));

        assert_eq!(resolve_head(&cells, foot), Some(head));
        assert_eq!(resolve_head(&cells, head), Some(head));
        assert_eq!(resolve_foot(&cells, head), Some(foot));
        assert_eq!(resolve_foot(&cells, foot), Some(foot));
    }

    #[test]
    fn non_bed_cells_resolve_to_nothing() {
        let cells = Cells::default();
        let pos = BlockPos::new(5, 5, 5);

        assert_eq!(resolve_head(&cells, pos), None);
        assert_eq!(resolve_foot(&cells, pos), None);
        assert!(!is_occupied(&cells, pos));
    }

    #[test]
    fn set_occupied_skips_broken_pairs() {
        let mut cells = Cells::default();
        let head = BlockPos::new(0, 1, 0);
        let _ = cells.0.insert(head, bed(Facing::East, true));

        let mut commands = Vec::new();
        set_occupied(&cells, head, BlockPos::new(-1, 1, 0), true, &mut commands);

        assert!(commands.is_empty());
    }
}
