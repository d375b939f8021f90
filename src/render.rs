//! Canvas rendering: maps the model to screen-space drawing primitives.
//!
//! The whole list is rebuilt on every call; there is no incremental diffing.

use std::fmt;

use glam::DVec2;

use crate::defaults;
use crate::geometry::ScreenTransform;
use crate::model::Polygon;
use crate::points::format_points;

/// Appearance of the per-vertex drag handles
#[derive(Debug, Clone, PartialEq)]
pub struct HandleStyle {
    /// Visual radius, also the half-size of the hit square
    pub radius: f64,
    pub fill: String,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            radius: defaults::HANDLE_RADIUS,
            fill: defaults::HANDLE_FILL.to_string(),
        }
    }
}

/// One canvas drawing instruction, in screen space
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled, outlined closed polygon. The outline is drawn at the canvas
    /// default width; the model's stroke width only goes to the file.
    Polygon {
        points: Vec<DVec2>,
        fill: String,
        outline: String,
    },
    /// Circular vertex handle, tagged with its vertex index
    Handle {
        index: usize,
        center: DVec2,
        radius: f64,
        fill: String,
    },
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Polygon {
                points,
                fill,
                outline,
            } => write!(
                f,
                "polygon fill={fill} outline={outline} points=[{}]",
                format_points(points)
            ),
            Primitive::Handle {
                index,
                center,
                radius,
                fill,
            } => write!(
                f,
                "handle #{index} at {},{} r={radius} fill={fill}",
                center.x, center.y
            ),
        }
    }
}

/// Render the polygon followed by one handle per vertex.
///
/// Returns an empty list when the polygon has no vertices.
pub fn render(polygon: &Polygon, transform: ScreenTransform, handles: &HandleStyle) -> Vec<Primitive> {
    if polygon.is_empty() {
        return Vec::new();
    }

    let screen: Vec<DVec2> = polygon
        .points()
        .iter()
        .map(|&p| transform.to_screen(p))
        .collect();

    let mut primitives = Vec::with_capacity(screen.len() + 1);
    primitives.push(Primitive::Polygon {
        points: screen.clone(),
        fill: polygon.fill.clone(),
        outline: polygon.stroke.clone(),
    });
    primitives.extend(screen.into_iter().enumerate().map(|(index, center)| {
        Primitive::Handle {
            index,
            center,
            radius: handles.radius,
            fill: handles.fill.clone(),
        }
    }));
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StrokeWidth;
    use glam::dvec2;

    fn listing(primitives: &[Primitive]) -> String {
        primitives
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_polygon_draws_nothing() {
        let prims = render(&Polygon::new(), ScreenTransform::default(), &HandleStyle::default());
        assert!(prims.is_empty());
    }

    #[test]
    fn triangle_with_handles() {
        let polygon = Polygon::new().with_points([
            dvec2(0.0, 0.0),
            dvec2(-20.0, 35.5),
            dvec2(40.0, -10.0),
        ]);
        let prims = render(&polygon, ScreenTransform::default(), &HandleStyle::default());
        insta::assert_snapshot!(listing(&prims), @r"
        polygon fill=#185452 outline=black points=[200,200 180,235.5 240,190]
        handle #0 at 200,200 r=5 fill=red
        handle #1 at 180,235.5 r=5 fill=red
        handle #2 at 240,190 r=5 fill=red
        ");
    }

    #[test]
    fn single_vertex_still_draws_polygon_and_handle() {
        let polygon = Polygon::new().with_points([dvec2(1.0, 2.0)]);
        let prims = render(&polygon, ScreenTransform::new(dvec2(10.0, 10.0)), &HandleStyle::default());
        assert_eq!(prims.len(), 2);
        assert!(matches!(&prims[1], Primitive::Handle { index: 0, center, .. } if *center == dvec2(11.0, 12.0)));
    }

    #[test]
    fn stroke_width_is_not_drawn() {
        let mut thin = Polygon::new().with_points([dvec2(0.0, 0.0), dvec2(5.0, 0.0), dvec2(0.0, 5.0)]);
        let mut thick = thin.clone();
        thin.stroke_width = StrokeWidth::try_new(0.5).unwrap();
        thick.stroke_width = StrokeWidth::try_new(12.0).unwrap();
        let t = ScreenTransform::default();
        let style = HandleStyle::default();
        assert_eq!(render(&thin, t, &style), render(&thick, t, &style));
    }
}
