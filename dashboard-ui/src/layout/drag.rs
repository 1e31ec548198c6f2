//! Move gesture: live preview while dragging, click-or-drop decision on release.

use shared_types::{Position, Size};

use super::geometry::{distance, pointer_to_local, settle_position, ContainerMetrics};

/// Pointer travel at or below this many pixels is a click, not a drag.
pub const CLICK_EPSILON_PX: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_id: i32,
    start_pointer: Position,
    /// Pointer minus widget origin, in canvas-local space, captured on press.
    grab_offset: Position,
    /// Last committed position; a click reverts here.
    origin: Position,
    size: Size,
    last_metrics: ContainerMetrics,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// Pointer barely moved: nothing to commit.
    Click { revert_to: Position },
    Drop { position: Position },
}

impl DragSession {
    pub fn begin(
        pointer_id: i32,
        pointer: Position,
        origin: Position,
        size: Size,
        metrics: &ContainerMetrics,
    ) -> Self {
        let local = pointer_to_local(pointer, metrics);
        Self {
            pointer_id,
            start_pointer: pointer,
            grab_offset: Position {
                x: local.x - origin.x,
                y: local.y - origin.y,
            },
            origin,
            size,
            last_metrics: *metrics,
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Position for the live preview. `metrics` should be read fresh on every
    /// move; the canvas may have scrolled or resized since the press.
    pub fn track(
        &mut self,
        pointer: Position,
        metrics: Option<&ContainerMetrics>,
        grid_size: f64,
    ) -> Position {
        if let Some(metrics) = metrics {
            self.last_metrics = *metrics;
        }
        self.candidate(pointer, grid_size)
    }

    /// Decide between click and drop. The dropped position is recomputed from
    /// the release point rather than accumulated deltas.
    pub fn finish(
        mut self,
        pointer: Position,
        metrics: Option<&ContainerMetrics>,
        grid_size: f64,
        click_epsilon: f64,
    ) -> DragOutcome {
        if let Some(metrics) = metrics {
            self.last_metrics = *metrics;
        }
        if distance(self.start_pointer, pointer) <= click_epsilon {
            return DragOutcome::Click {
                revert_to: self.origin,
            };
        }
        DragOutcome::Drop {
            position: self.candidate(pointer, grid_size),
        }
    }

    fn candidate(&self, pointer: Position, grid_size: f64) -> Position {
        let local = pointer_to_local(pointer, &self.last_metrics);
        let raw = Position {
            x: local.x - self.grab_offset.x,
            y: local.y - self.grab_offset.y,
        };
        settle_position(raw, self.size, &self.last_metrics, grid_size)
    }
}
