//! Fixed-capacity slot tables for entities and particles.
//!
//! Both tables pre-allocate their full capacity up front and never grow
//! after construction. Spawns into a full table are refused rather than
//! reallocating. Dead slots are removed only by the periodic compaction
//! pass, which preserves the relative order of survivors.

use carom_core::components::{Entity, Particle};
use carom_core::types::EntityId;

/// Dense entity storage with a hard slot cap.
#[derive(Debug)]
pub struct EntityTable {
    entries: Vec<Entity>,
    capacity: usize,
}

impl EntityTable {
    /// Create an empty table that holds at most `capacity` entities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Insert an entity and return its slot index, or None when the table
    /// is full. A refused spawn leaves the table untouched.
    pub fn push(&mut self, entity: Entity) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.entries.push(entity);
        Some(self.entries.len() - 1)
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entries.get(index)
    }

    /// Linear id lookup. Ids are unique per simulation instance.
    pub fn find(&self, id: EntityId) -> Option<&Entity> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn find_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entries.iter_mut()
    }

    /// Mutable slot access for systems that pair entities via split_at_mut.
    pub fn as_mut_slice(&mut self) -> &mut [Entity] {
        &mut self.entries
    }

    /// Slots whose entity is both active and above zero health.
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_alive()).count()
    }

    /// Drop dead slots in place, keeping survivor order.
    pub fn compact(&mut self) {
        self.entries.retain(|e| e.is_alive());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Dense particle storage with a hard slot cap.
#[derive(Debug)]
pub struct ParticleTable {
    entries: Vec<Particle>,
    capacity: usize,
}

impl ParticleTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Free slots left before the cap, counting dead-but-uncompacted ones
    /// as occupied.
    pub fn remaining(&self) -> usize {
        self.capacity - self.entries.len()
    }

    /// Insert a particle. Returns false when the table is full.
    pub fn push(&mut self, particle: Particle) -> bool {
        if self.entries.len() >= self.capacity {
            return false;
        }
        self.entries.push(particle);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.entries.iter_mut()
    }

    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|p| p.active).count()
    }

    /// Drop expired slots in place, keeping survivor order.
    pub fn compact(&mut self) {
        self.entries.retain(|p| p.active);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carom_core::constants::DEFAULT_HEALTH;
    use carom_core::enums::Role;
    use glam::Vec2;

    fn entity(id: u32) -> Entity {
        Entity {
            id: EntityId(id),
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            rotation: 0.0,
            name: format!("Object_{id}"),
            role: Role::Environment,
            material_id: 1,
            health: DEFAULT_HEALTH,
            max_health: DEFAULT_HEALTH,
            active: true,
        }
    }

    fn particle(life: f32) -> Particle {
        Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life,
            max_life: life.max(1.0),
            size: 4.0,
            color: [1.0, 1.0, 1.0, 1.0],
            active: life > 0.0,
        }
    }

    #[test]
    fn push_refused_when_full() {
        let mut table = EntityTable::with_capacity(2);
        assert_eq!(table.push(entity(0)), Some(0));
        assert_eq!(table.push(entity(1)), Some(1));
        assert_eq!(table.push(entity(2)), None);
        assert_eq!(table.len(), 2, "Refused push must not change the table");
        assert!(table.is_full());
    }

    #[test]
    fn compact_preserves_order() {
        let mut table = EntityTable::with_capacity(5);
        for id in 0..5 {
            table.push(entity(id));
        }
        table.find_mut(EntityId(1)).unwrap().active = false;
        table.find_mut(EntityId(3)).unwrap().health = 0;

        table.compact();

        let ids: Vec<u32> = table.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![0, 2, 4]);
    }

    #[test]
    fn active_count_excludes_dead() {
        let mut table = EntityTable::with_capacity(3);
        for id in 0..3 {
            table.push(entity(id));
        }
        table.find_mut(EntityId(2)).unwrap().health = 0;
        assert_eq!(table.len(), 3);
        assert_eq!(table.active_count(), 2);
    }

    #[test]
    fn compact_frees_capacity_for_spawns() {
        let mut table = EntityTable::with_capacity(2);
        table.push(entity(0));
        table.push(entity(1));
        table.find_mut(EntityId(0)).unwrap().active = false;

        assert_eq!(table.push(entity(2)), None, "Dead slot still occupies space");
        table.compact();
        assert_eq!(table.push(entity(2)), Some(1));
    }

    #[test]
    fn particle_remaining_tracks_len() {
        let mut table = ParticleTable::with_capacity(3);
        assert_eq!(table.remaining(), 3);
        assert!(table.push(particle(1.0)));
        assert!(table.push(particle(2.0)));
        assert_eq!(table.remaining(), 1);
        assert!(table.push(particle(3.0)));
        assert!(!table.push(particle(4.0)));
        assert_eq!(table.remaining(), 0);
    }

    #[test]
    fn particle_compact_drops_expired() {
        let mut table = ParticleTable::with_capacity(4);
        table.push(particle(1.0));
        table.push(particle(0.0));
        table.push(particle(2.0));
        assert_eq!(table.active_count(), 2);

        table.compact();
        assert_eq!(table.len(), 2);
        let lives: Vec<f32> = table.iter().map(|p| p.life).collect();
        assert_eq!(lives, vec![1.0, 2.0]);
    }
}
