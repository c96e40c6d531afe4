//! Pairwise collision detection and response.
//!
//! Two enumeration modes share one response path. Exhaustive checks
//! every distinct pair of slots; Grid buckets entities into fixed cells
//! and only pairs entities sharing a cell, so near-seam contacts across
//! cell borders can be missed for a frame. Resolved contacts are
//! collected into a buffer for the engine to apply scoring and burst
//! effects after the scan.

use glam::Vec2;

use carom_core::components::Entity;
use carom_core::config::SimConfig;
use carom_core::constants::EPSILON;
use carom_core::enums::{CollisionMode, Role};
use carom_core::types::wrap_coord;

use crate::tables::EntityTable;

/// One resolved contact, reported back to the engine.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Midpoint between the two centers at resolution time.
    pub midpoint: Vec2,
    /// Whether the Player was one of the participants.
    pub player_involved: bool,
}

/// Uniform bucket grid over the world, rebuilt on every Grid-mode pass.
///
/// Buckets are flat arrays with a fixed per-cell slot count; entities
/// beyond a cell's capacity are skipped for that pass.
#[derive(Debug)]
pub struct CollisionGrid {
    cols: usize,
    rows: usize,
    cell_capacity: usize,
    counts: Vec<u16>,
    slots: Vec<u32>,
}

impl CollisionGrid {
    pub fn new(world_width: f32, world_height: f32, cell_size: f32, cell_capacity: usize) -> Self {
        let cols = (world_width / cell_size).ceil().max(1.0) as usize;
        let rows = (world_height / cell_size).ceil().max(1.0) as usize;
        Self {
            cols,
            rows,
            cell_capacity,
            counts: vec![0; cols * rows],
            slots: vec![0; cols * rows * cell_capacity],
        }
    }

    fn clear(&mut self) {
        self.counts.fill(0);
    }

    fn cell_index(&self, pos: Vec2, cell_size: f32) -> usize {
        let col = ((pos.x / cell_size) as usize).min(self.cols - 1);
        let row = ((pos.y / cell_size) as usize).min(self.rows - 1);
        row * self.cols + col
    }

    fn insert(&mut self, cell: usize, slot: u32) {
        let count = self.counts[cell] as usize;
        if count < self.cell_capacity {
            self.slots[cell * self.cell_capacity + count] = slot;
            self.counts[cell] += 1;
        }
    }
}

/// Run one collision pass, resolving overlaps and collecting contacts.
pub fn run(
    entities: &mut EntityTable,
    grid: &mut CollisionGrid,
    config: &SimConfig,
    contacts: &mut Vec<Contact>,
) {
    contacts.clear();
    match config.collision_mode {
        CollisionMode::Exhaustive => exhaustive_pass(entities, config, contacts),
        CollisionMode::Grid => grid_pass(entities, grid, config, contacts),
    }
}

fn exhaustive_pass(entities: &mut EntityTable, config: &SimConfig, contacts: &mut Vec<Contact>) {
    let slots = entities.as_mut_slice();
    for i in 0..slots.len() {
        for j in (i + 1)..slots.len() {
            let (left, right) = slots.split_at_mut(j);
            if let Some(contact) = resolve_pair(&mut left[i], &mut right[0], config) {
                contacts.push(contact);
            }
        }
    }
}

fn grid_pass(
    entities: &mut EntityTable,
    grid: &mut CollisionGrid,
    config: &SimConfig,
    contacts: &mut Vec<Contact>,
) {
    grid.clear();
    for (slot, entity) in entities.iter().enumerate() {
        if !entity.active {
            continue;
        }
        let cell = grid.cell_index(entity.pos, config.grid_cell_size);
        grid.insert(cell, slot as u32);
    }

    let slots = entities.as_mut_slice();
    for cell in 0..grid.counts.len() {
        let count = grid.counts[cell] as usize;
        let bucket = &grid.slots[cell * grid.cell_capacity..cell * grid.cell_capacity + count];

        // Slots were inserted in ascending order, so bucket[a] < bucket[b].
        for a in 0..count {
            for b in (a + 1)..count {
                let i = bucket[a] as usize;
                let j = bucket[b] as usize;
                let (left, right) = slots.split_at_mut(j);
                if let Some(contact) = resolve_pair(&mut left[i], &mut right[0], config) {
                    contacts.push(contact);
                }
            }
        }
    }
}

/// Resolve one potential contact between two slots.
///
/// Coincident centers produce no direction: separation and bounce are
/// skipped but the contact still counts.
fn resolve_pair(a: &mut Entity, b: &mut Entity, config: &SimConfig) -> Option<Contact> {
    if !a.active || !b.active {
        return None;
    }

    let delta = a.pos - b.pos;
    let dist = delta.length();
    if dist >= config.collision_radius {
        return None;
    }

    let dir = if dist > EPSILON {
        delta / dist
    } else {
        Vec2::ZERO
    };

    // Symmetric push leaves the midpoint where the contact happened.
    let midpoint = (a.pos + b.pos) * 0.5;
    let push = dir * ((config.collision_radius - dist) * 0.5);
    a.pos += push;
    b.pos -= push;
    a.vel += dir * config.bounce_impulse;
    b.vel -= dir * config.bounce_impulse;

    // Separation may step over the world edge between integration passes.
    for entity in [&mut *a, &mut *b] {
        entity.pos.x = wrap_coord(entity.pos.x, config.world_width);
        entity.pos.y = wrap_coord(entity.pos.y, config.world_height);
    }

    Some(Contact {
        midpoint,
        player_involved: a.role == Role::Player || b.role == Role::Player,
    })
}
