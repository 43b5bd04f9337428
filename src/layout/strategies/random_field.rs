// Random field placement.
//
// Draws candidates uniformly from the square [low, high]² regardless of the
// word's slot. The placement engine keeps drawing until a candidate clears the
// occupancy index or the attempt bound runs out.

use rand::{Rng, RngCore};

use super::{Acceptance, PlacementStrategy, Slot};
use crate::layout::{LayoutConfig, Point};

#[derive(Debug, Clone)]
pub struct RandomField {
    pub low: f64,
    pub high: f64,
    pub max_attempts: usize,
}

impl RandomField {
    pub fn from_config(cfg: &LayoutConfig) -> Self {
        Self {
            low: cfg.field_low,
            high: cfg.field_high,
            max_attempts: cfg.max_attempts,
        }
    }
}

impl PlacementStrategy for RandomField {
    fn name(&self) -> &'static str {
        "random_field"
    }

    fn acceptance(&self) -> Acceptance {
        Acceptance::CollisionChecked {
            max_attempts: self.max_attempts,
        }
    }

    fn candidate(&self, _slot: Slot, rng: &mut dyn RngCore) -> Option<Point> {
        let x = rng.gen_range(self.low..=self.high);
        let y = rng.gen_range(self.low..=self.high);
        Some(Point::new(x, y))
    }
}
