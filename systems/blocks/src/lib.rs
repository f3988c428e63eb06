#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure block-behaviour system responsible for placement, interaction,
//! breaking and neighbour-change reactions.
//!
//! Each material may register a [`BlockBehaviour`] in a [`BlockRegistry`]. The
//! [`Blocks`] system consumes world events and adapter-provided
//! [`BlockInput`] values, looks up the behaviour for the material involved and
//! lets it respond with command batches. The system never mutates the world.

pub mod bed;

use std::collections::HashMap;

use bedstead_core::{
    BlockFace, BlockPos, BlockState, Command, Event, ItemStack, Material, PlayerId, PlayerSnapshot,
    WorldView,
};

/// Change observed in a cell adjacent to the one being notified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborChange {
    /// Face of the notified cell that touches the changed cell.
    pub face: BlockFace,
    /// Cell whose state changed.
    pub changed: BlockPos,
    /// State of the changed cell before the mutation.
    pub old: BlockState,
    /// State of the changed cell after the mutation.
    pub new: BlockState,
}

/// Capability interface implemented per material.
///
/// Every hook has a default suited to plain single-cell blocks, so a
/// behaviour only overrides what makes it special.
pub trait BlockBehaviour: std::fmt::Debug {
    /// Decides whether a block of this kind may be placed at `target`.
    fn can_place_at(
        &self,
        _world: &dyn WorldView,
        player: Option<&PlayerSnapshot>,
        _target: BlockPos,
        _against: BlockFace,
    ) -> bool {
        player.is_some()
    }

    /// Adjusts the state produced by generic placement before it is written.
    fn place_block(
        &self,
        _player: &PlayerSnapshot,
        state: BlockState,
        _face: BlockFace,
        _item: ItemStack,
    ) -> BlockState {
        state
    }

    /// Emits follow-up writes once the placed state has been queued.
    fn after_place(
        &self,
        _player: &PlayerSnapshot,
        _pos: BlockPos,
        _placed: BlockState,
        _item: ItemStack,
        _previous: BlockState,
        _out: &mut Vec<Command>,
    ) {
    }

    /// Handles a player using the block; returns whether the use was handled.
    fn interact(
        &self,
        _world: &dyn WorldView,
        _player: &PlayerSnapshot,
        _pos: BlockPos,
        _face: BlockFace,
        _out: &mut Vec<Command>,
    ) -> bool {
        false
    }

    /// Reacts to a mutation of a face-adjacent cell.
    fn on_near_block_changed(
        &self,
        _world: &dyn WorldView,
        _pos: BlockPos,
        _change: &NeighborChange,
        _out: &mut Vec<Command>,
    ) {
    }

    /// Items produced when the block at `pos` is broken.
    fn drops(&self, world: &dyn WorldView, pos: BlockPos) -> Vec<ItemStack> {
        let cell = world.cell(pos);
        vec![ItemStack::new(cell.material, 1, 0)]
    }
}

/// Behaviour used for materials without a dedicated registration.
#[derive(Clone, Copy, Debug, Default)]
struct PlainBlock;

impl BlockBehaviour for PlainBlock {}

/// Registry mapping material tags to their behaviour.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    behaviours: HashMap<Material, Box<dyn BlockBehaviour>>,
    plain: PlainBlock,
}

impl BlockRegistry {
    /// Creates an empty registry where every material behaves as a plain block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing every behaviour shipped with this crate.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Material::Bed, Box::new(bed::BedBlock));
        registry
    }

    /// Registers `behaviour` for `material`, replacing any previous entry.
    pub fn register(&mut self, material: Material, behaviour: Box<dyn BlockBehaviour>) {
        let _ = self.behaviours.insert(material, behaviour);
    }

    /// Behaviour registered for `material`, if any.
    #[must_use]
    pub fn behaviour(&self, material: Material) -> Option<&dyn BlockBehaviour> {
        self.behaviours.get(&material).map(|behaviour| &**behaviour)
    }

    fn behaviour_or_plain(&self, material: Material) -> &dyn BlockBehaviour {
        self.behaviour(material).unwrap_or(&self.plain)
    }
}

/// Player actions distilled from adapter input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockInput {
    /// Player placed the held item against a face of an existing cell.
    Place {
        /// Player performing the placement.
        player: PlayerId,
        /// Cell that was clicked.
        against: BlockPos,
        /// Face of the clicked cell; the new block goes on its far side.
        face: BlockFace,
        /// Item held by the player.
        item: ItemStack,
    },
    /// Player used the block at `pos`.
    Interact {
        /// Player interacting.
        player: PlayerId,
        /// Cell that was used.
        pos: BlockPos,
        /// Face that was clicked.
        face: BlockFace,
    },
    /// Player broke the block at `pos`.
    Break {
        /// Player breaking the block.
        player: PlayerId,
        /// Cell being broken.
        pos: BlockPos,
    },
    /// Player asked to get out of bed.
    LeaveBed {
        /// Sleeping player.
        player: PlayerId,
    },
}

/// Block system that translates events and input into world commands.
#[derive(Debug)]
pub struct Blocks {
    registry: BlockRegistry,
}

impl Default for Blocks {
    fn default() -> Self {
        Self::new(BlockRegistry::with_defaults())
    }
}

impl Blocks {
    /// Creates a new block system backed by the provided registry.
    #[must_use]
    pub fn new(registry: BlockRegistry) -> Self {
        Self { registry }
    }

    /// Consumes world events and adapter input to emit block commands.
    ///
    /// Events are handled before input so neighbour reactions to the previous
    /// batch always precede new player actions.
    pub fn handle<W: WorldView>(
        &self,
        events: &[Event],
        inputs: &[BlockInput],
        world: &W,
        out: &mut Vec<Command>,
    ) {
        for event in events {
            if let Event::BlockChanged { pos, old, new } = event {
                self.notify_neighbors(world, *pos, *old, *new, out);
                if old.material.is_bed_family() && !new.material.is_bed_family() {
                    wake_sleepers(world, *pos, out);
                }
            }
        }

        for input in inputs {
            match *input {
                BlockInput::Place {
                    player,
                    against,
                    face,
                    item,
                } => self.place(world, player, against, face, item, out),
                BlockInput::Interact { player, pos, face } => {
                    self.interact(world, player, pos, face, out)
                }
                BlockInput::Break { player, pos } => self.break_block(world, player, pos, out),
                BlockInput::LeaveBed { player } => bed::leave_bed(world, player, out),
            }
        }
    }

    fn notify_neighbors(
        &self,
        world: &dyn WorldView,
        changed: BlockPos,
        old: BlockState,
        new: BlockState,
        out: &mut Vec<Command>,
    ) {
        for face in BlockFace::ALL {
            let neighbor = changed.relative(face);
            let material = world.material(neighbor);
            let Some(behaviour) = self.registry.behaviour(material) else {
                continue;
            };
            let change = NeighborChange {
                face: face.opposite(),
                changed,
                old,
                new,
            };
            behaviour.on_near_block_changed(world, neighbor, &change, out);
        }
    }

    fn place(
        &self,
        world: &dyn WorldView,
        player: PlayerId,
        against: BlockPos,
        face: BlockFace,
        item: ItemStack,
        out: &mut Vec<Command>,
    ) {
        let target = against.relative(face);
        let previous = world.cell(target).state();
        if previous.material != Material::Air {
            log::debug!("placement rejected: target {target:?} is not empty");
            return;
        }

        let behaviour = self.registry.behaviour_or_plain(item.material);
        let snapshot = world.player(player);
        if !behaviour.can_place_at(world, snapshot, target, face) {
            log::debug!("placement of {:?} rejected at {target:?}", item.material);
            return;
        }
        let Some(snapshot) = snapshot else {
            return;
        };

        let generic = BlockState::new(item.material, 0);
        let placed = behaviour.place_block(snapshot, generic, face, item);
        out.push(Command::SetBlock {
            pos: target,
            state: placed,
        });
        behaviour.after_place(snapshot, target, placed, item, previous, out);
    }

    fn interact(
        &self,
        world: &dyn WorldView,
        player: PlayerId,
        pos: BlockPos,
        face: BlockFace,
        out: &mut Vec<Command>,
    ) {
        let Some(snapshot) = world.player(player) else {
            return;
        };
        let Some(behaviour) = self.registry.behaviour(world.material(pos)) else {
            return;
        };
        if !behaviour.interact(world, snapshot, pos, face, out) {
            log::debug!("interaction at {pos:?} was not handled");
        }
    }

    fn break_block(
        &self,
        world: &dyn WorldView,
        player: PlayerId,
        pos: BlockPos,
        out: &mut Vec<Command>,
    ) {
        if world.player(player).is_none() {
            return;
        }
        let material = world.material(pos);
        if material == Material::Air {
            return;
        }

        let items = self.registry.behaviour_or_plain(material).drops(world, pos);
        if !items.is_empty() {
            out.push(Command::DropItems { pos, items });
        }
        out.push(Command::SetBlock {
            pos,
            state: BlockState::AIR,
        });
    }
}

fn wake_sleepers(world: &dyn WorldView, head: BlockPos, out: &mut Vec<Command>) {
    for player in world.players() {
        if player.sleeping_in == Some(head) {
            bed::leave_bed(world, player.id, out);
        }
    }
}
