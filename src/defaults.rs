//! Default sizes, styles and shell texts

use glam::{DVec2, dvec2};

/// Canvas width in screen units
pub const CANVAS_WIDTH: f64 = 400.0;
/// Canvas height in screen units
pub const CANVAS_HEIGHT: f64 = 400.0;
/// Additive translation from model space to screen space (canvas centre)
pub const CANVAS_OFFSET: DVec2 = dvec2(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);

/// Visual radius of a vertex handle, also the half-size of its hit square
pub const HANDLE_RADIUS: f64 = 5.0;
/// Fill colour of vertex handles
pub const HANDLE_FILL: &str = "red";

pub const FILL: &str = "#185452";
pub const STROKE: &str = "black";
pub const STROKE_WIDTH: f64 = 1.0;
pub const VIEW_BOX: [f64; 4] = [-60.0, -50.0, 120.0, 120.0];

pub const WINDOW_TITLE: &str = "SVG Polygon Editor";
pub const HELP_TEXT: &str = "Double-click to add points \u{2022} Click and drag to move points";
pub const READY_STATUS: &str = "Ready - Double-click to add points";
