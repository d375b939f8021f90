//! Pointer interaction: an explicit Idle/Dragging state machine that turns
//! screen-space pointer events into model mutations.

use glam::DVec2;

use crate::geometry::{ScreenTransform, within_square};
use crate::model::Polygon;

/// Raw pointer input forwarded by the shell, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(DVec2),
    Drag(DVec2),
    Release,
    DoubleClick(DVec2),
}

/// Where the controller is in a drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `last` is the most recent pointer position, in screen space
    Dragging { index: usize, last: DVec2 },
}

#[derive(Debug, Clone)]
pub struct Controller {
    transform: ScreenTransform,
    /// Half-size of the square hit area around each vertex
    hit_radius: f64,
    state: DragState,
}

impl Controller {
    pub fn new(transform: ScreenTransform, hit_radius: f64) -> Self {
        Self {
            transform,
            hit_radius,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn transform(&self) -> ScreenTransform {
        self.transform
    }

    /// Back to `Idle`, e.g. after the polygon was replaced or cleared
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// First vertex (lowest index) whose hit square contains `screen`.
    pub fn hit_test(&self, polygon: &Polygon, screen: DVec2) -> Option<usize> {
        polygon
            .points()
            .iter()
            .position(|&p| within_square(self.transform.to_screen(p), screen, self.hit_radius))
    }

    /// Start dragging the vertex under the pointer, if any.
    pub fn press(&mut self, polygon: &Polygon, screen: DVec2) -> Option<usize> {
        let hit = self.hit_test(polygon, screen);
        crate::log::debug!(?hit, x = screen.x, y = screen.y, "press");
        self.state = match hit {
            Some(index) => DragState::Dragging {
                index,
                last: screen,
            },
            None => DragState::Idle,
        };
        hit
    }

    /// Move the dragged vertex by the pointer delta since the last event.
    ///
    /// Returns whether the model changed. A drag whose vertex no longer
    /// exists ends the gesture instead of touching the model.
    pub fn drag(&mut self, polygon: &mut Polygon, screen: DVec2) -> bool {
        let DragState::Dragging { index, last } = self.state else {
            return false;
        };
        let delta = self.transform.to_model(screen) - self.transform.to_model(last);
        if !polygon.translate_point(index, delta) {
            crate::log::warn!(index, "dragged vertex no longer exists");
            self.state = DragState::Idle;
            return false;
        }
        crate::log::debug!(index, dx = delta.x, dy = delta.y, "drag");
        self.state = DragState::Dragging {
            index,
            last: screen,
        };
        true
    }

    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }

    /// Insert a vertex at the pointer, next to its nearest edge.
    ///
    /// Returns the new vertex index and its model-space position. The drag
    /// state is left as it was.
    pub fn double_click(&self, polygon: &mut Polygon, screen: DVec2) -> (usize, DVec2) {
        let model = self.transform.to_model(screen);
        (polygon.insert_point(model), model)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ScreenTransform::default(), crate::defaults::HANDLE_RADIUS)
    }
}
