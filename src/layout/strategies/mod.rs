//! Candidate generators for galaxy layouts.
//!
//! This module contains all available placement strategies:
//! - `angular_orbit`: one computed candidate per word on alternating inner/outer rings
//! - `random_field`: uniform random candidates, retried until one fits

mod angular_orbit;
mod random_field;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{LayoutConfig, Point};

pub use angular_orbit::{AngularOrbit, OrbitSlot, Ring};
pub use random_field::RandomField;

/// Position of one related word in the ordered input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub total: usize,
}

/// How the placement engine treats a strategy's candidates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Acceptance {
    /// Take the single candidate as-is, overlapping or not.
    Unconditional,
    /// Test each candidate against the occupancy index, up to `max_attempts` draws.
    CollisionChecked { max_attempts: usize },
}

pub trait PlacementStrategy {
    fn name(&self) -> &'static str;

    fn acceptance(&self) -> Acceptance;

    /// Produce one candidate for `slot`, or None if the slot cannot be computed.
    fn candidate(&self, slot: Slot, rng: &mut dyn RngCore) -> Option<Point>;
}

/// Strategy selector as it appears in configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    AngularOrbit,
    RandomField,
}

impl StrategyKind {
    pub fn build(&self, cfg: &LayoutConfig) -> Box<dyn PlacementStrategy> {
        match self {
            StrategyKind::AngularOrbit => Box::new(AngularOrbit::from_config(cfg)),
            StrategyKind::RandomField => Box::new(RandomField::from_config(cfg)),
        }
    }
}
