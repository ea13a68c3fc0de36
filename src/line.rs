use serde::{Deserialize, Serialize};

/// A detected straight edge, stored as two endpoints in image pixel space.
///
/// Pixel `(i, j)` covers `[i, i + 1) x [j, j + 1)`, so its center sits at
/// `(i + 0.5, j + 0.5)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_points(p0: [f32; 2], p1: [f32; 2]) -> Self {
        Self::new(p0[0], p0[1], p1[0], p1[1])
    }

    pub fn start(&self) -> [f32; 2] {
        [self.x1, self.y1]
    }

    pub fn end(&self) -> [f32; 2] {
        [self.x2, self.y2]
    }

    pub fn length(&self) -> f32 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    pub fn midpoint(&self) -> [f32; 2] {
        [(self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5]
    }

    /// Orientation in degrees, folded to `[0, 180)`.
    pub fn angle_deg(&self) -> f32 {
        let theta = (self.y2 - self.y1).atan2(self.x2 - self.x1);
        crate::angle::fold_half_turn(theta).to_degrees()
    }

    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }

    /// Scale both endpoints independently along x and y.
    pub fn scaled(&self, sx: f32, sy: f32) -> Self {
        Self::new(self.x1 * sx, self.y1 * sy, self.x2 * sx, self.y2 * sy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn geometry_helpers() {
        let seg = LineSegment::new(1.0, 1.0, 4.0, 5.0);
        assert_abs_diff_eq!(seg.length(), 5.0, epsilon = 1e-6);
        assert_eq!(seg.midpoint(), [2.5, 3.0]);
        assert_eq!(seg.scaled(2.0, 0.5), LineSegment::new(2.0, 0.5, 8.0, 2.5));
    }

    #[test]
    fn angle_ignores_endpoint_order() {
        let a = LineSegment::new(0.0, 0.0, 10.0, 10.0);
        let b = LineSegment::new(10.0, 10.0, 0.0, 0.0);
        assert_abs_diff_eq!(a.angle_deg(), 45.0, epsilon = 1e-3);
        assert_abs_diff_eq!(b.angle_deg(), 45.0, epsilon = 1e-3);
        let vertical = LineSegment::new(3.0, 9.0, 3.0, 1.0);
        assert_abs_diff_eq!(vertical.angle_deg(), 90.0, epsilon = 1e-3);
    }

    #[test]
    fn non_finite_is_detected() {
        assert!(LineSegment::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!LineSegment::new(f32::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!LineSegment::new(0.0, 0.0, f32::INFINITY, 1.0).is_finite());
    }

    #[test]
    fn serializes_as_flat_coordinates() {
        let seg = LineSegment::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_value(seg).unwrap();
        assert_eq!(json["x1"], 1.0);
        assert_eq!(json["y2"], 4.0);
    }
}
