// Occupancy index for circle overlap detection.
//
// Galaxies hold a handful of words (bounded by the synonym/antonym limits), so a
// linear scan over the placed footprints is all the structure we need.

use super::Point;

/// Footprint of an already-placed node.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OccupiedSpot {
    pub position: Point,
    pub exclusion_radius: f64,
}

impl OccupiedSpot {
    pub fn new(position: Point, exclusion_radius: f64) -> Self {
        Self { position, exclusion_radius }
    }
}

/// Collision queries used by the placement engine.
pub trait Occupancy {
    /// Record a placed footprint. Spots live until the layout run ends.
    fn register(&mut self, spot: OccupiedSpot);

    /// True iff a circle of `radius` at `position` would come closer to any
    /// registered spot than the sum of both radii.
    fn collides_with(&self, position: Point, radius: f64) -> bool;
}

/// Append-only list of placed footprints, in placement order.
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    spots: Vec<OccupiedSpot>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            spots: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    pub fn spots(&self) -> &[OccupiedSpot] {
        &self.spots
    }
}

impl Occupancy for OccupancyIndex {
    fn register(&mut self, spot: OccupiedSpot) {
        self.spots.push(spot);
    }

    fn collides_with(&self, position: Point, radius: f64) -> bool {
        self.spots
            .iter()
            .any(|spot| position.distance(&spot.position) < spot.exclusion_radius + radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_keeps_order() {
        let mut index = OccupancyIndex::new();
        assert!(index.is_empty());
        index.register(OccupiedSpot::new(Point::new(50.0, 50.0), 14.0));
        index.register(OccupiedSpot::new(Point::new(20.0, 20.0), 7.0));

        assert_eq!(index.len(), 2);
        assert_eq!(index.spots()[0].exclusion_radius, 14.0);
        assert_eq!(index.spots()[1].position, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_collides_with() {
        let mut index = OccupancyIndex::new();
        index.register(OccupiedSpot::new(Point::new(50.0, 50.0), 14.0));

        // 14 + 7 = 21 is the minimum clearance from the center.
        assert!(index.collides_with(Point::new(70.0, 50.0), 7.0));
        assert!(!index.collides_with(Point::new(72.0, 50.0), 7.0));
        assert!(!index.collides_with(Point::new(10.0, 10.0), 7.0));
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        let mut index = OccupancyIndex::new();
        index.register(OccupiedSpot::new(Point::new(30.0, 30.0), 7.0));
        assert!(!index.collides_with(Point::new(44.0, 30.0), 7.0));
        assert!(index.collides_with(Point::new(43.999, 30.0), 7.0));
    }

    #[test]
    fn test_empty_index_never_collides() {
        let index = OccupancyIndex::new();
        assert!(!index.collides_with(Point::new(50.0, 50.0), 100.0));
    }
}
