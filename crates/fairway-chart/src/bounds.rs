//! Axis-aligned rectangles in degree space.

use fairway_types::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in degree space, closed on all edges.
///
/// Every region in the chart tables is one of these: land masses, shipping
/// channels, coastal buffers, narrow passages, safe zones, traffic lanes,
/// and the operating envelope itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    /// Southern edge, degrees latitude.
    pub south: f64,
    /// Northern edge, degrees latitude.
    pub north: f64,
    /// Western edge, degrees longitude.
    pub west: f64,
    /// Eastern edge, degrees longitude.
    pub east: f64,
}

impl RegionBounds {
    /// Create a rectangle from its four edges.
    pub const fn new(south: f64, north: f64, west: f64, east: f64) -> Self {
        Self {
            south,
            north,
            west,
            east,
        }
    }

    /// True when south < north and west < east. Comparisons against NaN are
    /// false, so a rectangle with any non-finite edge is never ordered.
    pub const fn is_ordered(&self) -> bool {
        self.south < self.north && self.west < self.east
    }

    /// Whether the position lies inside the rectangle (edges inclusive).
    pub const fn contains(&self, position: Position) -> bool {
        position.lat >= self.south
            && position.lat <= self.north
            && position.lon >= self.west
            && position.lon <= self.east
    }

    /// Minimum distance from the position to any of the four edges, in
    /// degrees. Only meaningful for positions inside the rectangle.
    pub const fn edge_distance(&self, position: Position) -> f64 {
        let to_south = position.lat - self.south;
        let to_north = self.north - position.lat;
        let to_west = position.lon - self.west;
        let to_east = self.east - position.lon;
        to_south.min(to_north).min(to_west).min(to_east)
    }

    /// Geometric center of the rectangle.
    pub const fn center(&self) -> Position {
        Position::new(
            (self.west + self.east) / 2.0,
            (self.south + self.north) / 2.0,
        )
    }

    /// Draw a uniform position inside the rectangle.
    pub fn sample(&self, rng: &mut impl Rng) -> Position {
        Position::new(
            rng.random_range(self.west..self.east),
            rng.random_range(self.south..self.north),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn contains_is_edge_inclusive() {
        let rect = RegionBounds::new(55.0, 56.0, 18.0, 19.0);
        assert!(rect.contains(Position::new(18.0, 55.0)));
        assert!(rect.contains(Position::new(19.0, 56.0)));
        assert!(rect.contains(Position::new(18.5, 55.5)));
        assert!(!rect.contains(Position::new(17.99, 55.5)));
        assert!(!rect.contains(Position::new(18.5, 56.01)));
    }

    #[test]
    fn contains_rejects_nan() {
        let rect = RegionBounds::new(55.0, 56.0, 18.0, 19.0);
        assert!(!rect.contains(Position::new(f64::NAN, 55.5)));
        assert!(!rect.contains(Position::new(18.5, f64::NAN)));
    }

    #[test]
    fn edge_distance_picks_nearest_edge() {
        let rect = RegionBounds::new(55.0, 56.0, 18.0, 19.0);
        let near_west = Position::new(18.02, 55.5);
        assert!((rect.edge_distance(near_west) - 0.02).abs() < 1e-12);
        let center = rect.center();
        assert!((rect.edge_distance(center) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn inverted_rectangles_are_not_ordered() {
        assert!(RegionBounds::new(55.0, 56.0, 18.0, 19.0).is_ordered());
        assert!(!RegionBounds::new(56.0, 55.0, 18.0, 19.0).is_ordered());
        assert!(!RegionBounds::new(55.0, 56.0, 19.0, 18.0).is_ordered());
        assert!(!RegionBounds::new(f64::NAN, 56.0, 18.0, 19.0).is_ordered());
    }

    #[test]
    fn sampled_points_fall_inside() {
        let rect = RegionBounds::new(55.0, 56.0, 18.0, 19.0);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(rect.contains(rect.sample(&mut rng)));
        }
    }
}
