//! Facet-derived SVG document types.
//!
//! Only the structure the editor needs is modelled: the root `viewBox` and
//! the polygon itself. Every other element lands in [`Element`], which keeps
//! its children so a polygon nested under any container is still reachable.

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg", rename = "svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub version: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(default)]
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any child node of the document
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "polygon")]
    Polygon(Polygon),
    /// `<g>`, `<defs>`, `<title>`, `<metadata>`, foreign elements...
    #[facet(other)]
    Other(Element),
}

/// An element the editor does not interpret
#[derive(Facet, Debug, Clone, Default)]
pub struct Element {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(default)]
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
    #[facet(default)]
    #[facet(xml::text)]
    pub text: String,
}

/// SVG polygon element (`<polygon>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Polygon {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

impl Svg {
    /// First `<polygon>` in document order, searching every nested element.
    pub fn first_polygon(&self) -> Option<&Polygon> {
        first_polygon_in(&self.children)
    }
}

fn first_polygon_in(nodes: &[SvgNode]) -> Option<&Polygon> {
    nodes.iter().find_map(|node| match node {
        SvgNode::Polygon(p) => Some(p),
        SvgNode::Other(e) => first_polygon_in(&e.children),
    })
}

/// Parse an SVG document
pub fn from_str(src: &str) -> Result<Svg, String> {
    xml::from_str(src).map_err(|e| e.to_string())
}

/// Serialize an SVG document
pub fn to_string(svg: &Svg) -> Result<String, String> {
    xml::to_string(svg).map_err(|e| e.to_string())
}
