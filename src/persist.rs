//! Load/save of the polygon as a single-`<polygon>` SVG document.
//!
//! Decoding never touches the caller's model: it builds a complete new
//! `Polygon` or fails, so a failed load leaves the session as it was.

use std::path::Path;

use crate::errors::{ParseError, PersistError};
use crate::model::{Polygon, StrokeWidth, ViewBox};
use crate::points::{format_points, parse_points};
use crate::svg::{self, Svg, SvgNode};

/// Serialize the polygon as a minimal SVG document.
pub fn to_svg(polygon: &Polygon) -> Result<String, PersistError> {
    let element = svg::Polygon {
        points: Some(format_points(polygon.points())),
        fill: Some(polygon.fill.clone()),
        stroke: Some(polygon.stroke.clone()),
        stroke_width: Some(polygon.stroke_width.to_string()),
    };
    let doc = Svg {
        version: Some("1.1".to_string()),
        width: Some("100%".to_string()),
        height: Some("100%".to_string()),
        view_box: Some(polygon.view_box.to_string()),
        children: vec![SvgNode::Polygon(element)],
    };
    svg::to_string(&doc).map_err(|message| PersistError::Serialize { message })
}

/// Decode an SVG document into a new polygon.
///
/// Attributes missing from the document fall back to `current`:
///
/// | source                      | when absent             |
/// |-----------------------------|-------------------------|
/// | `polygon@points`            | no vertices             |
/// | `polygon@fill`              | `current.fill`          |
/// | `polygon@stroke`            | `current.stroke`        |
/// | `polygon@stroke-width`      | `current.stroke_width`  |
/// | `svg@viewBox`               | `current.view_box`      |
pub fn from_svg(src: &str, current: &Polygon) -> Result<Polygon, PersistError> {
    let doc = svg::from_str(src).map_err(|message| ParseError::MalformedXml { message })?;
    let element = doc.first_polygon().ok_or(ParseError::MissingPolygon)?;

    let points = parse_points(element.points.as_deref().unwrap_or_default())?;
    let stroke_width = match element.stroke_width.as_deref() {
        Some(value) => value.parse::<StrokeWidth>()?,
        None => current.stroke_width,
    };
    let view_box = match doc.view_box.as_deref() {
        Some(value) => value.parse::<ViewBox>()?,
        None => current.view_box,
    };

    let mut polygon = Polygon::new().with_points(points);
    polygon.fill = element.fill.clone().unwrap_or_else(|| current.fill.clone());
    polygon.stroke = element
        .stroke
        .clone()
        .unwrap_or_else(|| current.stroke.clone());
    polygon.stroke_width = stroke_width;
    polygon.view_box = view_box;
    Ok(polygon)
}

/// Write the polygon to `path`.
pub fn save(polygon: &Polygon, path: &Path) -> Result<(), PersistError> {
    let document = to_svg(polygon)?;
    std::fs::write(path, document).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    crate::log::info!(path = %path.display(), points = polygon.len(), "saved polygon");
    Ok(())
}

/// Read a polygon from `path`, defaulting missing attributes to `current`.
pub fn load(path: &Path, current: &Polygon) -> Result<Polygon, PersistError> {
    let src = std::fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let polygon = from_svg(&src, current)?;
    crate::log::info!(path = %path.display(), points = polygon.len(), "loaded polygon");
    Ok(polygon)
}
