//! Search for a safe cell to put a player leaving a bed.

use bedstead_core::{BlockAccess, BlockPos};

/// Whether a player can be put down at `pos`.
///
/// The floor must be solid while the cell and the one above it both hold
/// non-obstructing materials.
#[must_use]
pub fn is_safe_exit<W>(world: &W, pos: BlockPos) -> bool
where
    W: BlockAccess + ?Sized,
{
    world.material(pos.below()).is_solid()
        && world.material(pos).is_spawn_safe()
        && world.material(pos.above()).is_spawn_safe()
}

/// First safe cell to put a player leaving the bed, if any.
///
/// The 3x3 ring around the head is scanned first. Failing that, the scan
/// moves to the foot and narrows to the side facing away from the head.
/// Offsets are visited with x outermost so the result is repeatable.
#[must_use]
pub fn exit_location<W>(world: &W, head: BlockPos, foot: BlockPos) -> Option<BlockPos>
where
    W: BlockAccess + ?Sized,
{
    if let Some(found) = scan(world, head, -1..=1, -1..=1) {
        return Some(found);
    }

    let Some(face) = head.face_to(foot) else {
        log::warn!("bed halves {head:?} and {foot:?} are not adjacent");
        return None;
    };
    scan(world, foot, span(face.mod_x()), span(face.mod_z()))
}

fn span(step: i32) -> std::ops::RangeInclusive<i32> {
    if step == 0 {
        -1..=1
    } else {
        step..=step
    }
}

fn scan<W>(
    world: &W,
    origin: BlockPos,
    xs: std::ops::RangeInclusive<i32>,
    zs: std::ops::RangeInclusive<i32>,
) -> Option<BlockPos>
where
    W: BlockAccess + ?Sized,
{
    xs.flat_map(|dx| zs.clone().map(move |dz| origin.offset(dx, 0, dz)))
        .find(|&pos| is_safe_exit(world, pos))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bedstead_core::{Biome, BlockState, Cell, Material};

    use super::*;

    /// Solid ground at y = 0 and air above unless overridden.
    #[derive(Default)]
    struct Ground(HashMap<BlockPos, Material>);

    impl BlockAccess for Ground {
        fn cell(&self, pos: BlockPos) -> Cell {
            let material = self.0.get(&pos).copied().unwrap_or(if pos.y() <= 0 {
                Material::Stone
            } else {
                Material::Air
            });
            Cell::from_state(BlockState::new(material, 0), Biome::Plains)
        }
    }

    impl Ground {
        fn fill(&mut self, pos: BlockPos, material: Material) {
            let _ = self.0.insert(pos, material);
        }

        fn wall_in(&mut self, center: BlockPos) {
            for dx in -1..=1 {
                for dz in -1..=1 {
                    self.fill(center.offset(dx, 0, dz), Material::Cobblestone);
                }
            }
        }
    }

    #[test]
    fn first_candidate_in_scan_order_wins() {
        let world = Ground::default();
        let head = BlockPos::new(0, 1, 0);

        assert_eq!(
            exit_location(&world, head, BlockPos::new(0, 1, 1)),
            Some(BlockPos::new(-1, 1, -1))
        );
    }

    #[test]
    fn single_open_cell_around_head_is_found() {
        let mut world = Ground::default();
        let head = BlockPos::new(0, 1, 0);
        world.wall_in(head);
        world.fill(BlockPos::new(1, 1, 0), Material::TallGrass);

        assert_eq!(
            exit_location(&world, head, BlockPos::new(0, 1, 1)),
            Some(BlockPos::new(1, 1, 0))
        );
    }

    #[test]
    fn foot_side_is_searched_when_head_is_boxed_in() {
        let mut world = Ground::default();
        let head = BlockPos::new(0, 1, 0);
        let foot = BlockPos::new(0, 1, 1);
        world.wall_in(head);
        for dx in -1..=1 {
            world.fill(BlockPos::new(dx, 1, 2), Material::Cobblestone);
        }
        world.fill(BlockPos::new(1, 1, 2), Material::Air);

        assert_eq!(exit_location(&world, head, foot), Some(BlockPos::new(1, 1, 2)));
    }

    #[test]
    fn cells_beside_the_foot_are_outside_the_fallback_scan() {
        let mut world = Ground::default();
        let head = BlockPos::new(0, 1, 0);
        let foot = BlockPos::new(0, 1, 1);
        world.wall_in(head);
        for dx in -1..=1 {
            world.fill(BlockPos::new(dx, 1, 2), Material::Cobblestone);
        }

        assert_eq!(exit_location(&world, head, foot), None);
    }

    #[test]
    fn east_west_bed_scans_the_column_past_the_foot() {
        let mut world = Ground::default();
        let head = BlockPos::new(0, 1, 0);
        let foot = BlockPos::new(1, 1, 0);
        world.wall_in(head);
        world.fill(BlockPos::new(2, 1, -1), Material::Cobblestone);
        world.fill(BlockPos::new(2, 1, 0), Material::Cobblestone);

        let exit = exit_location(&world, head, foot);

        assert_eq!(exit, Some(BlockPos::new(2, 1, 1)));
        assert_ne!(
            exit,
            Some(BlockPos::new(1, 1, 1)),
            "cells beside the foot belong to the head ring only"
        );

        world.fill(BlockPos::new(2, 1, 0), Material::Air);
        assert_eq!(
            exit_location(&world, head, foot),
            Some(BlockPos::new(2, 1, 0)),
            "z is visited in ascending order"
        );
    }

    #[test]
    fn obstruction_above_or_missing_floor_disqualifies() {
        let mut world = Ground::default();
        let pos = BlockPos::new(3, 1, 3);
        assert!(is_safe_exit(&world, pos));

        world.fill(pos.above(), Material::Glass);
        assert!(!is_safe_exit(&world, pos));

        world.fill(pos.above(), Material::Air);
        world.fill(pos.below(), Material::Water);
        assert!(!is_safe_exit(&world, pos));
    }

    #[test]
    fn non_solid_obstacles_outside_allow_list_block_exit() {
        let mut world = Ground::default();
        let pos = BlockPos::new(0, 1, 0);
        world.fill(pos, Material::Water);

        assert!(!is_safe_exit(&world, pos));
    }
}
