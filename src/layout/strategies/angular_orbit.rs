// Angular orbit placement ("zig-zag" rings).
//
// Splits the full circle into `total` equal slots and alternates between an
// inner and an outer ring so neighbouring words get extra room:
//
//   angle  = index * 2π / total
//   radius = inner if index is even, outer if odd
//
// A small jitter is added on top for an organic look. The jitter is bounded by
// config validation so a word can never leave its ring band.
//
// Properties:
// - One candidate per word, never retried
// - Base angle and ring depend only on (index, total)

use std::f64::consts::TAU;

use rand::{Rng, RngCore};

use super::{Acceptance, PlacementStrategy, Slot};
use crate::layout::{CENTER, LayoutConfig, Point};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ring {
    Inner,
    Outer,
}

/// Pre-jitter placement of a slot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitSlot {
    pub angle: f64,
    pub radius: f64,
    pub ring: Ring,
}

#[derive(Debug, Clone)]
pub struct AngularOrbit {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub angle_jitter: f64,
    pub radius_jitter: f64,
}

impl AngularOrbit {
    pub fn from_config(cfg: &LayoutConfig) -> Self {
        Self {
            inner_radius: cfg.inner_orbit,
            outer_radius: cfg.outer_orbit,
            angle_jitter: cfg.angle_jitter,
            radius_jitter: cfg.radius_jitter,
        }
    }

    /// Base angle and ring for `slot`. None when there is nothing to divide the circle by.
    pub fn nominal(&self, slot: Slot) -> Option<OrbitSlot> {
        if slot.total == 0 {
            return None;
        }
        let angle = slot.index as f64 * (TAU / slot.total as f64);
        let (ring, radius) = if slot.index % 2 == 1 {
            (Ring::Outer, self.outer_radius)
        } else {
            (Ring::Inner, self.inner_radius)
        };
        Some(OrbitSlot { angle, radius, ring })
    }
}

impl PlacementStrategy for AngularOrbit {
    fn name(&self) -> &'static str {
        "angular_orbit"
    }

    fn acceptance(&self) -> Acceptance {
        Acceptance::Unconditional
    }

    fn candidate(&self, slot: Slot, rng: &mut dyn RngCore) -> Option<Point> {
        let nominal = self.nominal(slot)?;
        let angle = nominal.angle + rng.gen_range(-self.angle_jitter..=self.angle_jitter);
        let radius = nominal.radius + rng.gen_range(-self.radius_jitter..=self.radius_jitter);
        Some(CENTER.offset_polar(angle, radius))
    }
}
