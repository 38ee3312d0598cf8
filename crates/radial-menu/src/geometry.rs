use serde::{Deserialize, Serialize};

pub const FULL_CIRCLE: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of one slice in the ring. Angles are in degrees, measured
/// clockwise from the positive x axis; radii are in the same units as the
/// ring diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceGeometry {
    pub index: usize,
    pub start_angle: f64,
    pub sweep: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Mid-angle, mid-radius point where a label or icon is centred.
    pub anchor: Point,
}

impl SliceGeometry {
    /// Uniform share of the circle for `count` slices.
    pub fn sweep_for(count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            FULL_CIRCLE / count as f64
        }
    }

    /// The rotation offset turns the whole ring; it never alters the share.
    pub fn calculate(index: usize, count: usize, diameter: f64, hole: f64, offset: f64) -> Self {
        let sweep = Self::sweep_for(count);
        let start_angle = offset + index as f64 * sweep;
        let outer_radius = diameter / 2.0;
        let inner_radius = (hole / 2.0).min(outer_radius);

        let mid = (start_angle + sweep / 2.0).to_radians();
        let reach = (outer_radius + inner_radius) / 2.0;
        let anchor = Point::new(
            outer_radius + reach * mid.cos(),
            outer_radius + reach * mid.sin(),
        );

        Self {
            index,
            start_angle,
            sweep,
            outer_radius,
            inner_radius,
            anchor,
        }
    }

    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    /// Lays out `count` slices in order.
    pub fn ring(count: usize, diameter: f64, hole: f64, offset: f64) -> Vec<Self> {
        (0..count)
            .map(|i| Self::calculate(i, count, diameter, hole, offset))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_shares_sum_to_full_circle() {
        for count in 1..=12 {
            let total: f64 = SliceGeometry::ring(count, 200.0, 60.0, 22.5)
                .iter()
                .map(|g| g.sweep)
                .sum();
            assert!((total - FULL_CIRCLE).abs() < 1e-9, "count {count}: {total}");
        }
    }

    #[test]
    fn test_offset_rotates_without_changing_share() {
        let plain = SliceGeometry::ring(4, 200.0, 60.0, 0.0);
        let turned = SliceGeometry::ring(4, 200.0, 60.0, 22.5);

        for (a, b) in plain.iter().zip(&turned) {
            assert_eq!(a.sweep, 90.0);
            assert_eq!(a.sweep, b.sweep);
            assert_eq!(b.start_angle - a.start_angle, 22.5);
        }
        assert_eq!(turned[3].end_angle(), 382.5);
    }

    #[test]
    fn test_radii_follow_diameter_and_hole() {
        let g = SliceGeometry::calculate(0, 2, 200.0, 60.0, 0.0);
        assert_eq!(g.outer_radius, 100.0);
        assert_eq!(g.inner_radius, 30.0);

        // first half points straight down from the centre at 90 degrees
        assert!((g.anchor.x - 100.0).abs() < 1e-9);
        assert!((g.anchor.y - 165.0).abs() < 1e-9);
    }

    #[test]
    fn test_hole_never_exceeds_ring() {
        let g = SliceGeometry::calculate(0, 1, 40.0, 60.0, 0.0);
        assert_eq!(g.inner_radius, 20.0);
    }

    #[test]
    fn test_empty_ring_has_no_geometry() {
        assert!(SliceGeometry::ring(0, 200.0, 60.0, 0.0).is_empty());
        assert_eq!(SliceGeometry::sweep_for(0), 0.0);
    }
}
