// Galaxy layouter.
//
// Places related words around a fixed center word on a percent canvas.
//
// Goals:
// - Center first: the searched word sits at (50,50) and is registered before anything else
// - Input order is significant: item i always gets slot i and id i + 1
// - No overlap for collision-checked placements
// - Bounded work: every item takes at most `max_attempts` candidates, then the fallback ring
// - Reproducible: all randomness comes from the injected generator
//
// Submodules:
// - occupancy: placed footprints and collision queries
// - strategies: candidate generators (angular orbit, random field)
// - placement: retry loop + fallback ring
//
// Output:
// - Layout with the center node first, then one node per related item.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::GalaxyError;

mod occupancy;
mod placement;
pub mod strategies;

pub use occupancy::{Occupancy, OccupancyIndex, OccupiedSpot};
pub use placement::PlacementEngine;
pub use strategies::{Acceptance, AngularOrbit, PlacementStrategy, RandomField, Slot, StrategyKind};

/// Canvas is a unit square measured in percent; only the center is fixed.
pub const CANVAS_SIZE: f64 = 100.0;
pub const CENTER: Point = Point { x: 50.0, y: 50.0 };
pub const CENTER_ID: u32 = 0;

/// Upper bound on angle jitter, radians.
pub const MAX_ANGLE_JITTER: f64 = 0.05;
/// Upper bound on collision-checked attempts per word.
pub const MAX_ATTEMPTS_LIMIT: usize = 10_000;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle` (radians, 0 = +x, y grows downward).
    pub fn offset_polar(&self, angle: f64, radius: f64) -> Point {
        Point {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamp both axes into `[margin, CANVAS_SIZE - margin]`.
    pub fn clamp_to_canvas(&self, margin: f64) -> Point {
        let hi = CANVAS_SIZE - margin;
        Point {
            x: self.x.clamp(margin, hi),
            y: self.y.clamp(margin, hi),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Center,
    Synonym,
    Antonym,
    Related,
}

/// A word to be placed around the center, as handed over by the lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedItem {
    pub label: String,
    pub role: Role,
    #[serde(default)]
    pub relation_strength: Option<f64>,
    #[serde(default)]
    pub example_text: Option<String>,
}

impl RelatedItem {
    pub fn new(label: impl Into<String>, role: Role) -> Self {
        Self {
            label: label.into(),
            role,
            relation_strength: None,
            example_text: None,
        }
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.relation_strength = Some(strength);
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example_text = Some(example.into());
        self
    }
}

/// A placed word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: u32,
    pub label: String,
    pub position: Point,
    pub role: Role,
    pub visual_scale: f64,
    pub relation_strength: Option<f64>,
    pub example_text: Option<String>,
    /// Placed on the fallback ring; may overlap its neighbours.
    ///
    /// Only collision-checked strategies clear placements against the index.
    /// Angular orbit nodes are always `false` here but carry no clearance
    /// guarantee: with the default radii the inner ring sits inside the
    /// center's exclusion zone.
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance kept between any node and the canvas edge.
    pub canvas_margin: f64,
    /// Exclusion radius of the center word (renders larger).
    pub center_exclusion_radius: f64,
    /// Exclusion radius of every other word.
    pub node_exclusion_radius: f64,
    pub center_scale: f64,
    pub node_scale: f64,
    /// Candidate generator used for related words.
    pub strategy: StrategyKind,
    /// Angular orbit: even slots.
    pub inner_orbit: f64,
    /// Angular orbit: odd slots.
    pub outer_orbit: f64,
    /// Angular orbit: max angle jitter, radians.
    pub angle_jitter: f64,
    /// Angular orbit: max orbit radius jitter.
    pub radius_jitter: f64,
    /// Random field: lower bound on both axes.
    pub field_low: f64,
    /// Random field: upper bound on both axes.
    pub field_high: f64,
    /// Random field: candidates tried per word before falling back.
    pub max_attempts: usize,
    pub fallback_ring_min: f64,
    pub fallback_ring_max: f64,
    /// Fixed seed for reproducible layouts. None draws from entropy.
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_margin: 5.0,
            center_exclusion_radius: 14.0,
            node_exclusion_radius: 7.0,
            center_scale: 1.5,
            node_scale: 1.0,
            strategy: StrategyKind::RandomField,
            inner_orbit: 18.0,
            outer_orbit: 32.0,
            angle_jitter: 0.05,
            radius_jitter: 1.0,
            field_low: 10.0,
            field_high: 90.0,
            max_attempts: 100,
            fallback_ring_min: 35.0,
            fallback_ring_max: 45.0,
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Reject geometry that would break the layout invariants.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        let lengths = [
            ("canvas_margin", self.canvas_margin),
            ("center_exclusion_radius", self.center_exclusion_radius),
            ("node_exclusion_radius", self.node_exclusion_radius),
            ("center_scale", self.center_scale),
            ("node_scale", self.node_scale),
            ("inner_orbit", self.inner_orbit),
            ("outer_orbit", self.outer_orbit),
            ("angle_jitter", self.angle_jitter),
            ("radius_jitter", self.radius_jitter),
            ("field_low", self.field_low),
            ("field_high", self.field_high),
            ("fallback_ring_min", self.fallback_ring_min),
            ("fallback_ring_max", self.fallback_ring_max),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value.abs() > CANVAS_SIZE {
                return Err(GalaxyError::config(field, format!("must be finite and within ±{CANVAS_SIZE}")));
            }
        }
        let half = CANVAS_SIZE / 2.0;
        if !(0.0..half).contains(&self.canvas_margin) {
            return Err(GalaxyError::config("canvas_margin", format!("must be in [0, {half})")));
        }
        if self.center_exclusion_radius <= 0.0 || self.node_exclusion_radius <= 0.0 {
            return Err(GalaxyError::config("exclusion_radius", "must be positive"));
        }
        if self.center_scale <= 0.0 || self.node_scale <= 0.0 {
            return Err(GalaxyError::config("scale", "must be positive"));
        }
        if self.angle_jitter < 0.0 || self.radius_jitter < 0.0 {
            return Err(GalaxyError::config("jitter", "must not be negative"));
        }
        if self.angle_jitter > MAX_ANGLE_JITTER {
            return Err(GalaxyError::config(
                "angle_jitter",
                format!("must not exceed {MAX_ANGLE_JITTER} rad"),
            ));
        }
        if self.inner_orbit - self.radius_jitter <= 0.0 {
            return Err(GalaxyError::config("inner_orbit", "must exceed radius_jitter"));
        }
        // Jittered ring bands must stay disjoint.
        if self.inner_orbit + self.radius_jitter >= self.outer_orbit - self.radius_jitter {
            return Err(GalaxyError::config(
                "outer_orbit",
                format!(
                    "band {}±{} overlaps inner band {}±{}",
                    self.outer_orbit, self.radius_jitter, self.inner_orbit, self.radius_jitter
                ),
            ));
        }
        if self.field_low >= self.field_high {
            return Err(GalaxyError::config("field_low", "must be below field_high"));
        }
        if self.field_low < self.canvas_margin || self.field_high > CANVAS_SIZE - self.canvas_margin {
            return Err(GalaxyError::config("field", "must lie inside the canvas margins"));
        }
        if !(1..=MAX_ATTEMPTS_LIMIT).contains(&self.max_attempts) {
            return Err(GalaxyError::config(
                "max_attempts",
                format!("must be in [1, {MAX_ATTEMPTS_LIMIT}]"),
            ));
        }
        if self.fallback_ring_min < 0.0 || self.fallback_ring_min > self.fallback_ring_max {
            return Err(GalaxyError::config("fallback_ring", "needs 0 <= min <= max"));
        }
        Ok(())
    }

    pub fn exclusion_radius(&self, role: Role) -> f64 {
        match role {
            Role::Center => self.center_exclusion_radius,
            _ => self.node_exclusion_radius,
        }
    }

    pub fn visual_scale(&self, role: Role) -> f64 {
        match role {
            Role::Center => self.center_scale,
            _ => self.node_scale,
        }
    }
}

/// A finished layout. `nodes[0]` is always the center.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub strategy: StrategyKind,
    pub nodes: Vec<Node>,
}

impl Layout {
    pub fn center(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn related(&self) -> &[Node] {
        self.nodes.get(1..).unwrap_or_default()
    }

    pub fn fallback_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.fallback).count()
    }
}

/// Lay out `items` around `center_label` using the configured strategy.
///
/// Items are placed strictly in input order. With the angular strategy the
/// order decides which slot (and therefore which angle) each word gets, so
/// re-ordering the input changes the picture.
///
/// An invalid `cfg` is replaced by the default geometry, keeping its strategy
/// and seed.
pub fn compute_layout(
    center_label: &str,
    items: &[RelatedItem],
    cfg: &LayoutConfig,
    rng: &mut dyn RngCore,
) -> Layout {
    let repaired;
    let cfg = match cfg.validate() {
        Ok(()) => cfg,
        Err(err) => {
            log::warn!("invalid layout config ({err}); using default geometry");
            repaired = LayoutConfig {
                strategy: cfg.strategy,
                seed: cfg.seed,
                ..LayoutConfig::default()
            };
            &repaired
        }
    };
    let strategy = cfg.strategy.build(cfg);
    let engine = PlacementEngine::new(cfg, strategy.as_ref());
    let mut occupancy = OccupancyIndex::with_capacity(items.len() + 1);

    let mut nodes = Vec::with_capacity(items.len() + 1);
    occupancy.register(OccupiedSpot::new(CENTER, cfg.center_exclusion_radius));
    nodes.push(Node {
        id: CENTER_ID,
        label: center_label.to_string(),
        position: CENTER,
        role: Role::Center,
        visual_scale: cfg.center_scale,
        relation_strength: None,
        example_text: None,
        fallback: false,
    });

    let total = items.len();
    for (index, item) in items.iter().enumerate() {
        let item = sanitize_item(item);
        let slot = Slot { index, total };
        let node = engine.place(&item, slot, &mut occupancy, rng);
        nodes.push(node);
    }

    let layout = Layout { strategy: cfg.strategy, nodes };
    log::debug!(
        "laid out '{}' with {}: {} related, {} on fallback ring",
        center_label,
        strategy.name(),
        total,
        layout.fallback_count()
    );
    layout
}

/// Same as [`compute_layout`], with a call-scoped generator built from `cfg.seed`.
pub fn compute_layout_seeded(center_label: &str, items: &[RelatedItem], cfg: &LayoutConfig) -> Layout {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    compute_layout(center_label, items, cfg, &mut rng)
}

fn sanitize_item(item: &RelatedItem) -> RelatedItem {
    let mut item = item.clone();
    if item.role == Role::Center {
        log::warn!("related word '{}' claims the center role; treating it as related", item.label);
        item.role = Role::Related;
    }
    item.relation_strength = item
        .relation_strength
        .filter(|s| !s.is_nan())
        .map(|s| s.clamp(0.0, 1.0));
    item
}
