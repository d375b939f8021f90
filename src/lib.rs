//! Core of a single-polygon SVG editor.
//!
//! The crate holds everything except the window: the polygon model and its
//! nearest-edge insertion rule, the pointer state machine, canvas primitive
//! generation, and load/save of `<polygon>` SVG documents. A GUI shell owns an
//! [`Editor`], forwards pointer events and button actions to it, and draws
//! whatever [`Editor::render`] returns.
//!
//! ```no_run
//! use glam::dvec2;
//! use polyedit::Editor;
//!
//! let mut editor = Editor::new();
//! editor.handle_double_click(dvec2(180.0, 180.0));
//! editor.handle_double_click(dvec2(240.0, 180.0));
//! editor.handle_double_click(dvec2(210.0, 240.0));
//! editor.save_to(Some("triangle.svg".as_ref()))?;
//! # Ok::<(), polyedit::PersistError>(())
//! ```

pub mod controller;
pub mod defaults;
pub mod editor;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod model;
pub mod persist;
pub mod points;
pub mod render;
pub mod svg;

pub use controller::{Controller, DragState, PointerEvent};
pub use editor::{Editor, EditorConfig, Outcome};
pub use errors::{FormatError, ParseError, PersistError};
pub use geometry::{ScreenTransform, point_to_segment_distance};
pub use model::{Polygon, StrokeWidth, ViewBox};
pub use render::{HandleStyle, Primitive};
