// Placement engine.
//
// Turns strategy candidates into placed nodes:
// - Unconditional strategies: the single candidate is accepted as-is
// - Collision-checked strategies: first-fit over at most `max_attempts` draws
// - Exhaustion (or no candidate at all): a random spot on the fallback ring
//
// Every placement, fallback included, is registered in the occupancy index so
// later words avoid it. Fallback placements skip the collision test and may
// overlap; that is the accepted degradation when the canvas is too crowded.

use std::f64::consts::TAU;

use rand::{Rng, RngCore};

use super::occupancy::{Occupancy, OccupiedSpot};
use super::strategies::{Acceptance, PlacementStrategy, Slot};
use super::{CENTER, LayoutConfig, Node, Point, RelatedItem};

pub struct PlacementEngine<'a> {
    cfg: &'a LayoutConfig,
    strategy: &'a dyn PlacementStrategy,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(cfg: &'a LayoutConfig, strategy: &'a dyn PlacementStrategy) -> Self {
        Self { cfg, strategy }
    }

    /// Place one related word and register its footprint.
    pub fn place(
        &self,
        item: &RelatedItem,
        slot: Slot,
        occupancy: &mut dyn Occupancy,
        rng: &mut dyn RngCore,
    ) -> Node {
        let radius = self.cfg.exclusion_radius(item.role);

        let found = match self.strategy.acceptance() {
            Acceptance::Unconditional => self
                .strategy
                .candidate(slot, rng)
                .map(|p| p.clamp_to_canvas(self.cfg.canvas_margin)),
            Acceptance::CollisionChecked { max_attempts } => {
                self.first_fit(slot, radius, max_attempts, occupancy, rng)
            }
        };

        let (position, fallback) = match found {
            Some(p) => (p, false),
            None => {
                log::debug!(
                    "no free spot for '{}' (slot {}/{}) with {}; using fallback ring",
                    item.label,
                    slot.index,
                    slot.total,
                    self.strategy.name()
                );
                (self.fallback_position(rng), true)
            }
        };

        occupancy.register(OccupiedSpot::new(position, radius));
        Node {
            id: slot.index as u32 + 1,
            label: item.label.clone(),
            position,
            role: item.role,
            visual_scale: self.cfg.visual_scale(item.role),
            relation_strength: item.relation_strength,
            example_text: item.example_text.clone(),
            fallback,
        }
    }

    fn first_fit(
        &self,
        slot: Slot,
        radius: f64,
        max_attempts: usize,
        occupancy: &dyn Occupancy,
        rng: &mut dyn RngCore,
    ) -> Option<Point> {
        for _ in 0..max_attempts {
            let candidate = self
                .strategy
                .candidate(slot, rng)?
                .clamp_to_canvas(self.cfg.canvas_margin);
            if !occupancy.collides_with(candidate, radius) {
                return Some(candidate);
            }
        }
        None
    }

    /// Random angle on the outer annulus, clamped to the canvas.
    fn fallback_position(&self, rng: &mut dyn RngCore) -> Point {
        let angle = rng.gen_range(0.0..TAU);
        let radius = rng.gen_range(self.cfg.fallback_ring_min..=self.cfg.fallback_ring_max);
        CENTER
            .offset_polar(angle, radius)
            .clamp_to_canvas(self.cfg.canvas_margin)
    }
}
