//! Glow Animation
//!
//! Per-item neon glow, keyed by item id so it follows an item when the list
//! is reordered. Purely presentational: nothing here touches the list.

use std::collections::HashMap;
use std::f32::consts::TAU;

use tewduwu_core::{Entity, HierarchicalList, ItemId, Item, Priority};

/// Phase units per second; the phase wraps back to 0 past 1.0
const PHASE_SPEED: f32 = 2.0;
/// Fraction of the remaining distance covered per second
const EASE_RATE: f32 = 5.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlowState {
    pub intensity: f32,
    pub phase: f32,
}

impl GlowState {
    fn advance(&mut self, item: &Item, delta_time: f32) {
        self.phase += delta_time * PHASE_SPEED;
        if self.phase > 1.0 {
            self.phase = 0.0;
        }

        let target = target_glow(item, self.phase);
        self.intensity += (target - self.intensity) * (delta_time * EASE_RATE).min(1.0);
    }
}

/// Glow an item settles towards at a given phase
pub fn target_glow(item: &Item, phase: f32) -> f32 {
    if item.completed {
        return 0.0;
    }
    match item.priority {
        Priority::High => 0.7 + 0.3 * (phase * TAU).sin(),
        Priority::Medium => 0.5,
        Priority::Low => 0.2,
        Priority::None => 0.0,
    }
}

#[derive(Debug, Default)]
pub struct GlowTracker {
    states: HashMap<ItemId, GlowState>,
}

impl GlowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every item's glow and forget items that left the list
    pub fn update(&mut self, list: &HierarchicalList, delta_time: f32) {
        let mut next = HashMap::with_capacity(list.len());
        for item in list {
            let mut state = self.states.get(&item.id()).copied().unwrap_or_default();
            state.advance(item, delta_time);
            next.insert(item.id(), state);
        }
        self.states = next;
    }

    pub fn intensity(&self, id: ItemId) -> f32 {
        self.states.get(&id).map(|s| s.intensity).unwrap_or(0.0)
    }

    #[cfg(test)]
    pub fn state(&self, id: ItemId) -> Option<GlowState> {
        self.states.get(&id).copied()
    }

    #[cfg(test)]
    pub fn tracked(&self) -> usize {
        self.states.len()
    }
}
