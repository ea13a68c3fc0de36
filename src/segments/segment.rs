use crate::line::LineSegment;

/// Raw segment produced by the extractor at the working level.
///
/// Carries the fit attributes the public [`LineSegment`] drops.
#[derive(Clone, Debug)]
pub struct Segment {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    /// Unit tangent from `p0` to `p1`.
    pub dir: [f32; 2],
    pub len: f32,
    /// Mean gradient magnitude over the region.
    pub avg_mag: f32,
    /// Number of pixels in the supporting region.
    pub support: usize,
}

impl Segment {
    /// Map pixel-center coordinates at a level scaled by `scale` to full
    /// resolution image coordinates.
    pub fn to_line_segment(&self, scale: f32) -> LineSegment {
        let lift = |v: f32| (v + 0.5) / scale;
        LineSegment::from_points(self.p0.map(lift), self.p1.map(lift))
    }
}
