//! Authoritative entity and player state management utilities.

use bedstead_core::{
    BlockPos, EntityId, EntityKind, EntitySnapshot, Location, PlayerId, PlayerSnapshot,
};

/// Registry that stores live entities and manages identifier allocation.
///
/// Entities are kept in identifier order so scans are deterministic.
#[derive(Debug)]
pub(crate) struct EntityRegistry {
    entries: Vec<EntitySnapshot>,
    next_entity_id: EntityId,
}

impl EntityRegistry {
    /// Creates an empty registry with a reset identifier counter.
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_entity_id: EntityId::new(0),
        }
    }

    /// Inserts a new entity and returns its identifier.
    pub(crate) fn spawn(&mut self, kind: EntityKind, location: Location, angry: bool) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id = EntityId::new(id.get().saturating_add(1));
        self.entries.push(EntitySnapshot {
            id,
            kind,
            location,
            angry,
        });
        id
    }

    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut EntitySnapshot> {
        self.entries.iter_mut().find(|entity| entity.id == id)
    }

    /// Removes an entity, reporting whether it existed.
    pub(crate) fn remove(&mut self, id: EntityId) -> bool {
        match self.entries.iter().position(|entity| entity.id == id) {
            Some(index) => {
                let _ = self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn as_slice(&self) -> &[EntitySnapshot] {
        &self.entries
    }
}

/// Registry of connected players.
#[derive(Debug)]
pub(crate) struct PlayerRegistry {
    entries: Vec<PlayerSnapshot>,
    next_player_id: PlayerId,
}

impl PlayerRegistry {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_player_id: PlayerId::new(0),
        }
    }

    pub(crate) fn join(&mut self, location: Location, yaw: f32) -> PlayerId {
        let id = self.next_player_id;
        self.next_player_id = PlayerId::new(id.get().saturating_add(1));
        self.entries.push(PlayerSnapshot {
            id,
            location,
            yaw,
            sleeping_in: None,
        });
        id
    }

    pub(crate) fn get(&self, id: PlayerId) -> Option<&PlayerSnapshot> {
        self.entries.iter().find(|player| player.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: PlayerId) -> Option<&mut PlayerSnapshot> {
        self.entries.iter_mut().find(|player| player.id == id)
    }

    pub(crate) fn as_slice(&self) -> &[PlayerSnapshot] {
        &self.entries
    }

    /// Puts a player to sleep at the head of a bed.
    pub(crate) fn enter_bed(&mut self, id: PlayerId, head: BlockPos) -> bool {
        let Some(player) = self.get_mut(id) else {
            return false;
        };
        player.sleeping_in = Some(head);
        player.location = Location::standing_in(head);
        true
    }

    /// Wakes a sleeping player, moving them to `exit` when one is provided.
    ///
    /// Returns the resulting location, or `None` when the player is unknown or
    /// not asleep.
    pub(crate) fn leave_bed(&mut self, id: PlayerId, exit: Option<BlockPos>) -> Option<Location> {
        let player = self.get_mut(id)?;
        let _head = player.sleeping_in.take()?;
        if let Some(exit) = exit {
            player.location = Location::standing_in(exit);
        }
        Some(player.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_registry_allocates_sequential_identifiers() {
        let mut registry = EntityRegistry::new();
        let origin = Location::new(0.0, 0.0, 0.0);
        let first = registry.spawn(EntityKind::Zombie, origin, false);
        let second = registry.spawn(EntityKind::Cow, origin, false);

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert!(registry.remove(first));
        assert!(!registry.remove(first));
        assert_eq!(registry.as_slice().len(), 1);
    }

    #[test]
    fn leaving_requires_sleeping_player() {
        let mut players = PlayerRegistry::new();
        let player = players.join(Location::new(0.5, 1.0, 0.5), 0.0);

        assert_eq!(players.leave_bed(player, None), None);

        assert!(players.enter_bed(player, BlockPos::new(4, 1, 4)));
        let location = players
            .leave_bed(player, Some(BlockPos::new(5, 1, 4)))
            .expect("player was asleep");
        assert_eq!(location, Location::new(5.5, 1.0, 4.5));
        assert_eq!(players.get(player).and_then(|p| p.sleeping_in), None);
    }

    #[test]
    fn leaving_without_exit_keeps_player_at_head() {
        let mut players = PlayerRegistry::new();
        let player = players.join(Location::new(0.5, 1.0, 0.5), 0.0);
        assert!(players.enter_bed(player, BlockPos::new(2, 1, 2)));

        let location = players.leave_bed(player, None).expect("player was asleep");
        assert_eq!(location, Location::standing_in(BlockPos::new(2, 1, 2)));
    }
}
