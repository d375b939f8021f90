//! Geometry helpers: edge distance and screen/model transforms

use glam::DVec2;

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// The line is not clamped to the segment, so a point far beyond either end
/// can still be "close" to an edge. Returns 0 when `a == b`.
pub fn point_to_segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let d = b - a;
    let denominator = d.x.hypot(d.y);
    if denominator == 0.0 {
        return 0.0;
    }
    let numerator = (d.y * p.x - d.x * p.y + b.x * a.y - b.y * a.x).abs();
    numerator / denominator
}

/// Fixed additive translation between model space and screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    pub offset: DVec2,
}

impl ScreenTransform {
    pub const fn new(offset: DVec2) -> Self {
        Self { offset }
    }

    #[inline]
    pub fn to_screen(self, model: DVec2) -> DVec2 {
        model + self.offset
    }

    #[inline]
    pub fn to_model(self, screen: DVec2) -> DVec2 {
        screen - self.offset
    }
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::new(crate::defaults::CANVAS_OFFSET)
    }
}

/// Inclusive square hit test: `|dx| <= half && |dy| <= half`.
#[inline]
pub fn within_square(center: DVec2, probe: DVec2, half: f64) -> bool {
    let d = (probe - center).abs();
    d.x <= half && d.y <= half
}
