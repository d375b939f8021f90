//! The editing session the shell talks to.
//!
//! `Editor` owns the polygon and the pointer controller, and keeps the
//! human-readable status line. Every shell action goes through one of its
//! methods; rendering is a query over the current state.

use std::path::Path;

use glam::DVec2;

use crate::controller::{Controller, DragState, PointerEvent};
use crate::defaults;
use crate::errors::PersistError;
use crate::geometry::ScreenTransform;
use crate::model::Polygon;
use crate::persist;
use crate::render::{HandleStyle, Primitive, render};

/// Canvas settings for a session
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Added to model coordinates to get screen coordinates
    pub canvas_offset: DVec2,
    pub handles: HandleStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_offset: defaults::CANVAS_OFFSET,
            handles: HandleStyle::default(),
        }
    }
}

/// Result of a file action that may have been cancelled in its dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Editor {
    polygon: Polygon,
    controller: Controller,
    handles: HandleStyle,
    status: String,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let transform = ScreenTransform::new(config.canvas_offset);
        Self {
            polygon: Polygon::new(),
            controller: Controller::new(transform, config.handles.radius),
            handles: config.handles,
            status: defaults::READY_STATUS.to_string(),
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Status line text describing the last operation
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Current `(fill, stroke)`, for refreshing the shell's colour entries
    pub fn colors(&self) -> (&str, &str) {
        (&self.polygon.fill, &self.polygon.stroke)
    }

    pub fn drag_state(&self) -> DragState {
        self.controller.state()
    }

    /// Replace the polygon with the one stored at `path`.
    ///
    /// `None` means the file dialog was dismissed: nothing changes. On error
    /// the current polygon is kept and the status line reports the failure.
    pub fn load_from(&mut self, path: Option<&Path>) -> Result<Outcome, PersistError> {
        let Some(path) = path else {
            return Ok(Outcome::Cancelled);
        };
        match persist::load(path, &self.polygon) {
            Ok(polygon) => {
                self.polygon = polygon;
                self.controller.reset();
                self.status = format!("Loaded SVG from {}", path.display());
                Ok(Outcome::Done)
            }
            Err(err) => {
                crate::log::warn!(path = %path.display(), error = %err, "load rejected");
                self.status = format!("Failed to load {}: {err}", path.display());
                Err(err)
            }
        }
    }

    /// Write the polygon to `path`; `None` means the dialog was dismissed.
    pub fn save_to(&mut self, path: Option<&Path>) -> Result<Outcome, PersistError> {
        let Some(path) = path else {
            return Ok(Outcome::Cancelled);
        };
        match persist::save(&self.polygon, path) {
            Ok(()) => {
                self.status = format!("Saved SVG to {}", path.display());
                Ok(Outcome::Done)
            }
            Err(err) => {
                crate::log::warn!(path = %path.display(), error = %err, "save failed");
                self.status = format!("Failed to save {}: {err}", path.display());
                Err(err)
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.polygon.clear();
        self.controller.reset();
        self.status = "All points cleared".to_string();
    }

    pub fn set_colors(&mut self, fill: impl Into<String>, stroke: impl Into<String>) {
        self.polygon.fill = fill.into();
        self.polygon.stroke = stroke.into();
        self.status = "Colors updated".to_string();
    }

    /// Pointer pressed at a screen position; returns the grabbed vertex.
    pub fn handle_press(&mut self, screen: DVec2) -> Option<usize> {
        let hit = self.controller.press(&self.polygon, screen);
        if let Some(index) = hit {
            self.status = format!("Dragging point {index}");
        }
        hit
    }

    /// Pointer moved with the button held; returns whether a vertex moved.
    pub fn handle_drag(&mut self, screen: DVec2) -> bool {
        self.controller.drag(&mut self.polygon, screen)
    }

    pub fn handle_release(&mut self) {
        self.controller.release();
    }

    /// Add a vertex at a screen position; returns its index.
    pub fn handle_double_click(&mut self, screen: DVec2) -> usize {
        let (index, model) = self.controller.double_click(&mut self.polygon, screen);
        self.status = format!("Added new point at ({}, {})", model.x, model.y);
        index
    }

    /// Dispatch a pointer event to the matching `handle_*` method.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(p) => {
                self.handle_press(p);
            }
            PointerEvent::Drag(p) => {
                self.handle_drag(p);
            }
            PointerEvent::Release => self.handle_release(),
            PointerEvent::DoubleClick(p) => {
                self.handle_double_click(p);
            }
        }
    }

    /// Drawing primitives for the current state, in screen space.
    pub fn render(&self) -> Vec<Primitive> {
        render(&self.polygon, self.controller.transform(), &self.handles)
    }
}
