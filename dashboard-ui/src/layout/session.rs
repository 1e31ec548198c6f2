//! Per-widget gesture slot: at most one drag or resize at a time.

use shared_types::{Position, Size, Widget};

use super::drag::{DragOutcome, DragSession};
use super::geometry::{ContainerMetrics, WidgetBounds};
use super::resize::ResizeSession;
use crate::config::LayoutConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSession {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl GestureSession {
    pub fn pointer_id(&self) -> i32 {
        match self {
            GestureSession::Drag(session) => session.pointer_id,
            GestureSession::Resize(session) => session.pointer_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GestureRefused {
    #[error("widget is fullscreen")]
    Fullscreen,
    #[error("another gesture is already in progress")]
    SessionActive,
    #[error("widget type is not resizable")]
    NotResizable,
}

/// What a finished gesture asks the owner to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureCommit {
    Moved(Position),
    Resized(Size),
    /// Press and release without real travel or size change; nothing is
    /// committed.
    Clicked,
}

/// Size limits and capability for starting a resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeLimits {
    pub resizable: bool,
    pub min_size: Size,
    pub max_size: Size,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureTracker {
    session: Option<GestureSession>,
}

impl GestureTracker {
    pub fn active(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn begin_drag(
        &mut self,
        pointer_id: i32,
        pointer: Position,
        widget: &Widget,
        metrics: &ContainerMetrics,
    ) -> Result<WidgetBounds, GestureRefused> {
        self.check_can_start(widget)?;
        let session = DragSession::begin(
            pointer_id,
            pointer,
            widget.position(),
            widget.size(),
            metrics,
        );
        self.session = Some(GestureSession::Drag(session));
        Ok(committed_bounds(widget))
    }

    pub fn begin_resize(
        &mut self,
        pointer_id: i32,
        pointer: Position,
        widget: &Widget,
        limits: ResizeLimits,
        metrics: &ContainerMetrics,
    ) -> Result<WidgetBounds, GestureRefused> {
        self.check_can_start(widget)?;
        if !limits.resizable {
            return Err(GestureRefused::NotResizable);
        }
        let session = ResizeSession::begin(
            pointer_id,
            pointer,
            widget.position(),
            widget.size(),
            limits.min_size,
            limits.max_size,
            metrics,
        );
        self.session = Some(GestureSession::Resize(session));
        Ok(committed_bounds(widget))
    }

    /// Live preview for a move of the session's own pointer; `None` otherwise.
    pub fn pointer_move(
        &mut self,
        pointer_id: i32,
        pointer: Position,
        metrics: Option<&ContainerMetrics>,
        config: &LayoutConfig,
    ) -> Option<WidgetBounds> {
        let session = self.session.as_mut()?;
        if session.pointer_id() != pointer_id {
            return None;
        }
        let bounds = match session {
            GestureSession::Drag(drag) => WidgetBounds {
                position: drag.track(pointer, metrics, config.grid_size),
                size: drag.size(),
            },
            GestureSession::Resize(resize) => WidgetBounds {
                position: resize.position(),
                size: resize.track(pointer, metrics, config.grid_size),
            },
        };
        Some(bounds)
    }

    /// End the session on release of its own pointer.
    pub fn pointer_up(
        &mut self,
        pointer_id: i32,
        pointer: Position,
        metrics: Option<&ContainerMetrics>,
        config: &LayoutConfig,
    ) -> Option<GestureCommit> {
        if self.session.as_ref()?.pointer_id() != pointer_id {
            return None;
        }
        let commit = match self.session.take()? {
            GestureSession::Drag(drag) => {
                match drag.finish(pointer, metrics, config.grid_size, config.click_epsilon_px) {
                    DragOutcome::Click { .. } => GestureCommit::Clicked,
                    DragOutcome::Drop { position } => GestureCommit::Moved(position),
                }
            }
            GestureSession::Resize(resize) => match resize.finish() {
                Some(size) => GestureCommit::Resized(size),
                None => GestureCommit::Clicked,
            },
        };
        Some(commit)
    }

    /// Drop the session without committing. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Fullscreen may only flip while no gesture is open.
    pub fn check_fullscreen_toggle(&self) -> Result<(), GestureRefused> {
        if self.session.is_some() {
            return Err(GestureRefused::SessionActive);
        }
        Ok(())
    }

    fn check_can_start(&self, widget: &Widget) -> Result<(), GestureRefused> {
        if widget.is_fullscreen() {
            return Err(GestureRefused::Fullscreen);
        }
        if self.session.is_some() {
            return Err(GestureRefused::SessionActive);
        }
        Ok(())
    }
}

fn committed_bounds(widget: &Widget) -> WidgetBounds {
    WidgetBounds {
        position: widget.position(),
        size: widget.size(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> ContainerMetrics {
        ContainerMetrics {
            content_width: 800.0,
            content_height: 600.0,
            ..ContainerMetrics::default()
        }
    }

    fn widget() -> Widget {
        Widget::new("notes", Position::new(100.0, 100.0), Size::new(280.0, 160.0))
    }

    fn limits() -> ResizeLimits {
        ResizeLimits {
            resizable: true,
            min_size: Size::new(200.0, 120.0),
            max_size: Size::new(400.0, 200.0),
        }
    }

    /// Press, move, release; collects every commit the owner would receive.
    fn drag_sequence(travel: f64) -> Vec<GestureCommit> {
        let config = LayoutConfig::default();
        let widget = widget();
        let mut tracker = GestureTracker::default();
        let start = Position::new(110.0, 110.0);
        let end = Position::new(110.0 + travel, 110.0);

        tracker.begin_drag(1, start, &widget, &canvas()).unwrap();
        assert!(tracker.pointer_move(1, end, Some(&canvas()), &config).is_some());
        let commit = tracker.pointer_up(1, end, Some(&canvas()), &config).unwrap();
        assert!(!tracker.is_active());

        match commit {
            GestureCommit::Moved(_) => vec![commit],
            _ => Vec::new(),
        }
    }

    #[test]
    fn one_pixel_drag_does_not_commit() {
        assert!(drag_sequence(1.0).is_empty());
    }

    #[test]
    fn ten_pixel_drag_commits_once() {
        let commits = drag_sequence(10.0);
        assert_eq!(commits, vec![GestureCommit::Moved(Position::new(120.0, 100.0))]);
    }

    #[test]
    fn resize_refused_while_dragging() {
        let widget = widget();
        let mut tracker = GestureTracker::default();
        tracker
            .begin_drag(1, Position::new(110.0, 110.0), &widget, &canvas())
            .unwrap();

        let refused =
            tracker.begin_resize(1, Position::new(380.0, 260.0), &widget, limits(), &canvas());
        assert_eq!(refused, Err(GestureRefused::SessionActive));
        assert!(matches!(tracker.active(), Some(GestureSession::Drag(_))));
    }

    #[test]
    fn fullscreen_widget_refuses_both_gestures() {
        let mut widget = widget();
        widget.toggle_fullscreen();
        let mut tracker = GestureTracker::default();

        assert_eq!(
            tracker.begin_drag(1, Position::new(0.0, 0.0), &widget, &canvas()),
            Err(GestureRefused::Fullscreen)
        );
        assert_eq!(
            tracker.begin_resize(1, Position::new(0.0, 0.0), &widget, limits(), &canvas()),
            Err(GestureRefused::Fullscreen)
        );
        assert!(!tracker.is_active());
    }

    #[test]
    fn non_resizable_type_refuses_resize() {
        let mut tracker = GestureTracker::default();
        let limits = ResizeLimits {
            resizable: false,
            ..limits()
        };
        assert_eq!(
            tracker.begin_resize(1, Position::new(0.0, 0.0), &widget(), limits, &canvas()),
            Err(GestureRefused::NotResizable)
        );
    }

    #[test]
    fn foreign_pointer_is_ignored() {
        let config = LayoutConfig::default();
        let mut tracker = GestureTracker::default();
        tracker
            .begin_drag(1, Position::new(110.0, 110.0), &widget(), &canvas())
            .unwrap();

        let far = Position::new(500.0, 500.0);
        assert!(tracker.pointer_move(2, far, Some(&canvas()), &config).is_none());
        assert!(tracker.pointer_up(2, far, Some(&canvas()), &config).is_none());
        assert!(tracker.is_active());
    }

    #[test]
    fn resize_commits_clamped_size_in_scenario() {
        let config = LayoutConfig::default();
        let mut tracker = GestureTracker::default();
        let start = Position::new(380.0, 260.0);
        let end = Position::new(1380.0, 1260.0);
        tracker
            .begin_resize(3, start, &widget(), limits(), &canvas())
            .unwrap();

        let live = tracker.pointer_move(3, end, Some(&canvas()), &config).unwrap();
        assert_eq!(live.position, Position::new(100.0, 100.0));
        assert_eq!(
            tracker.pointer_up(3, end, Some(&canvas()), &config),
            Some(GestureCommit::Resized(Size::new(400.0, 200.0)))
        );
    }

    #[test]
    fn cancel_discards_without_commit() {
        let mut tracker = GestureTracker::default();
        tracker
            .begin_drag(1, Position::new(110.0, 110.0), &widget(), &canvas())
            .unwrap();
        assert!(tracker.cancel());
        assert!(!tracker.cancel());

        let config = LayoutConfig::default();
        let up = Position::new(600.0, 600.0);
        assert!(tracker.pointer_up(1, up, Some(&canvas()), &config).is_none());
    }

    #[test]
    fn new_session_allowed_after_previous_ends() {
        let config = LayoutConfig::default();
        let widget = widget();
        let mut tracker = GestureTracker::default();
        let p = Position::new(110.0, 110.0);
        tracker.begin_drag(1, p, &widget, &canvas()).unwrap();
        tracker.pointer_up(1, p, Some(&canvas()), &config);

        assert!(tracker
            .begin_resize(1, Position::new(380.0, 260.0), &widget, limits(), &canvas())
            .is_ok());
    }

    #[test]
    fn fullscreen_toggle_refused_during_drag_and_resize() {
        let widget = widget();
        let mut tracker = GestureTracker::default();
        assert_eq!(tracker.check_fullscreen_toggle(), Ok(()));

        tracker
            .begin_drag(1, Position::new(110.0, 110.0), &widget, &canvas())
            .unwrap();
        assert_eq!(
            tracker.check_fullscreen_toggle(),
            Err(GestureRefused::SessionActive)
        );
        tracker.cancel();

        tracker
            .begin_resize(1, Position::new(380.0, 260.0), &widget, limits(), &canvas())
            .unwrap();
        assert_eq!(
            tracker.check_fullscreen_toggle(),
            Err(GestureRefused::SessionActive)
        );
        tracker.cancel();
        assert_eq!(tracker.check_fullscreen_toggle(), Ok(()));
    }

    #[test]
    fn resize_release_without_motion_is_a_click() {
        let config = LayoutConfig::default();
        let widget = Widget::new("notes", Position::new(100.0, 100.0), Size::new(283.0, 157.0));
        let mut tracker = GestureTracker::default();
        let p = Position::new(383.0, 257.0);
        tracker.begin_resize(4, p, &widget, limits(), &canvas()).unwrap();

        assert_eq!(
            tracker.pointer_up(4, p, Some(&canvas()), &config),
            Some(GestureCommit::Clicked)
        );
    }
}
