//! Polygon model: an ordered, implicitly closed vertex sequence plus the
//! style attributes that are persisted with it.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use thiserror::Error;

use crate::defaults;
use crate::errors::FormatError;
use crate::geometry::point_to_segment_distance;

/// Error type for invalid numeric values
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    #[error("value is NaN")]
    NaN,
    #[error("value is infinite")]
    Infinite,
    #[error("value is negative")]
    Negative,
}

/// Outline width, persisted to file only.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct StrokeWidth(f64);

impl StrokeWidth {
    /// Create a stroke width with validation (finite, non-negative)
    pub fn try_new(val: f64) -> Result<Self, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Self(val))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        Self(defaults::STROKE_WIDTH)
    }
}

impl FromStr for StrokeWidth {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| FormatError::InvalidStrokeWidth {
            value: s.to_string(),
            reason,
        };
        let val: f64 = s.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        Self::try_new(val).map_err(|e| invalid(e.to_string()))
    }
}

impl fmt::Display for StrokeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SVG `viewBox`: the user-space window mapped onto the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        let [min_x, min_y, width, height] = defaults::VIEW_BOX;
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

impl FromStr for ViewBox {
    type Err = FormatError;

    /// Four numbers separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidViewBox {
            value: s.to_string(),
        };
        let mut nums = [0.0; 4];
        let mut fields = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty());
        for slot in nums.iter_mut() {
            let field = fields.next().ok_or_else(invalid)?;
            let val: f64 = field.parse().map_err(|_| invalid())?;
            if !val.is_finite() {
                return Err(invalid());
            }
            *slot = val;
        }
        if fields.next().is_some() {
            return Err(invalid());
        }
        let [min_x, min_y, width, height] = nums;
        Ok(Self {
            min_x,
            min_y,
            width,
            height,
        })
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// The edited shape. Edge `i` joins vertex `i` to vertex `(i + 1) % len`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<DVec2>,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: StrokeWidth,
    pub view_box: ViewBox,
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            fill: defaults::FILL.to_string(),
            stroke: defaults::STROKE.to_string(),
            stroke_width: StrokeWidth::default(),
            view_box: ViewBox::default(),
        }
    }
}

impl Polygon {
    /// Empty polygon with default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the vertex sequence, keeping the style
    pub fn with_points(mut self, points: impl IntoIterator<Item = DVec2>) -> Self {
        self.points = points.into_iter().collect();
        self
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<DVec2> {
        self.points.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate the closed edge list, including last -> first.
    pub fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Splice `point` in after the nearest edge and return its new index.
    ///
    /// With fewer than two vertices there are no edges yet, so the point is
    /// appended. Ties go to the lowest edge index.
    pub fn insert_point(&mut self, point: DVec2) -> usize {
        if self.points.len() < 2 {
            self.points.push(point);
            return self.points.len() - 1;
        }

        // Appends unless some edge is strictly nearer; NaN distances never win
        let mut index = self.points.len();
        let mut best = f64::INFINITY;
        for (i, (a, b)) in self.edges().enumerate() {
            let dist = point_to_segment_distance(point, a, b);
            if dist < best {
                best = dist;
                index = i + 1;
            }
        }

        crate::log::debug!(index, x = point.x, y = point.y, "insert point");
        self.points.insert(index, point);
        index
    }

    /// Replace vertex `index`. Out-of-range indices are ignored.
    pub fn move_point(&mut self, index: usize, position: DVec2) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p = position;
                true
            }
            None => false,
        }
    }

    /// Shift vertex `index` by `delta`. Out-of-range indices are ignored.
    pub fn translate_point(&mut self, index: usize, delta: DVec2) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p += delta;
                true
            }
            None => false,
        }
    }

    /// Drop every vertex; style is untouched.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn square() -> Polygon {
        Polygon::new().with_points([
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(10.0, 10.0),
            dvec2(0.0, 10.0),
        ])
    }

    #[test]
    fn defaults_match_editor_style() {
        let p = Polygon::new();
        assert!(p.is_empty());
        assert_eq!(p.fill, "#185452");
        assert_eq!(p.stroke, "black");
        assert_eq!(p.stroke_width.get(), 1.0);
        assert_eq!(p.view_box.to_string(), "-60 -50 120 120");
    }

    #[test]
    fn first_two_points_append() {
        let mut p = Polygon::new();
        assert_eq!(p.insert_point(dvec2(50.0, 50.0)), 0);
        // Would be "closer" to nothing: no edges exist yet
        assert_eq!(p.insert_point(dvec2(-3.0, 4.0)), 1);
        assert_eq!(p.points(), &[dvec2(50.0, 50.0), dvec2(-3.0, 4.0)]);
    }

    #[test]
    fn insert_next_to_nearest_edge() {
        let mut p = square();
        let index = p.insert_point(dvec2(5.0, -1.0));
        assert_eq!(index, 1);
        assert_eq!(p.point(1), Some(dvec2(5.0, -1.0)));
        assert_eq!(p.point(0), Some(dvec2(0.0, 0.0)));
        assert_eq!(p.point(2), Some(dvec2(10.0, 0.0)));
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn closing_edge_inserts_at_end() {
        let mut p = square();
        let index = p.insert_point(dvec2(-1.0, 5.0));
        assert_eq!(index, 4);
        assert_eq!(p.points().last(), Some(&dvec2(-1.0, 5.0)));
    }

    #[test]
    fn ties_go_to_lowest_edge() {
        let mut p = square();
        assert_eq!(p.insert_point(dvec2(5.0, 5.0)), 1);
    }

    #[test]
    fn overflowing_distances_append() {
        // Every edge distance is NaN or infinite at this scale
        let mut p = Polygon::new().with_points([
            dvec2(1e300, 1e300),
            dvec2(-1e300, -1e300),
            dvec2(1e300, -1e300),
        ]);
        assert_eq!(p.insert_point(dvec2(1e10, 1e10)), 3);
        assert_eq!(p.points().last(), Some(&dvec2(1e10, 1e10)));
    }

    #[test]
    fn two_point_polygon_has_two_edges() {
        let mut p = Polygon::new().with_points([dvec2(0.0, 0.0), dvec2(10.0, 0.0)]);
        assert_eq!(p.edges().count(), 2);
        // Both edges lie on the same line; the first one wins
        assert_eq!(p.insert_point(dvec2(5.0, 3.0)), 1);
    }

    #[test]
    fn move_out_of_range_is_noop() {
        let mut p = square();
        let before = p.clone();
        assert!(!p.move_point(4, dvec2(1.0, 1.0)));
        assert!(!p.translate_point(99, dvec2(1.0, 1.0)));
        assert_eq!(p, before);

        assert!(p.move_point(2, dvec2(12.0, 12.0)));
        assert_eq!(p.point(2), Some(dvec2(12.0, 12.0)));
        assert!(p.translate_point(2, dvec2(-2.0, 1.0)));
        assert_eq!(p.point(2), Some(dvec2(10.0, 13.0)));
    }

    #[test]
    fn clear_keeps_style() {
        let mut p = square();
        p.fill = "orange".into();
        p.stroke = "navy".into();
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.fill, "orange");
        assert_eq!(p.stroke, "navy");
    }

    #[test]
    fn view_box_parsing() {
        let vb: ViewBox = "0, 0 ,100\t50".parse().unwrap();
        assert_eq!(vb.to_string(), "0 0 100 50");
        assert!("0 0 100".parse::<ViewBox>().is_err());
        assert!("0 0 100 50 7".parse::<ViewBox>().is_err());
        assert!("0 0 wide 50".parse::<ViewBox>().is_err());
        assert!("0 0 inf 50".parse::<ViewBox>().is_err());
    }

    #[test]
    fn stroke_width_parsing() {
        assert_eq!("2.5".parse::<StrokeWidth>().unwrap().get(), 2.5);
        assert_eq!(" 0 ".parse::<StrokeWidth>().unwrap().get(), 0.0);
        assert!(matches!(
            "thick".parse::<StrokeWidth>(),
            Err(FormatError::InvalidStrokeWidth { .. })
        ));
        assert!("-1".parse::<StrokeWidth>().is_err());
        assert!("NaN".parse::<StrokeWidth>().is_err());
        assert_eq!(StrokeWidth::try_new(f64::INFINITY), Err(NumericError::Infinite));
    }
}
