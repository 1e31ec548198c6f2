//! Resize gesture anchored at the widget's top-left corner.

use shared_types::{Position, Size};

use super::geometry::{settle_size, ContainerMetrics};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSession {
    pub pointer_id: i32,
    start_pointer: Position,
    initial_size: Size,
    /// Anchor; never moves during a resize.
    position: Position,
    min_size: Size,
    max_size: Size,
    /// What the user currently sees. Committed verbatim on release.
    displayed: Size,
    last_metrics: ContainerMetrics,
}

impl ResizeSession {
    pub fn begin(
        pointer_id: i32,
        pointer: Position,
        position: Position,
        size: Size,
        min_size: Size,
        max_size: Size,
        metrics: &ContainerMetrics,
    ) -> Self {
        Self {
            pointer_id,
            start_pointer: pointer,
            initial_size: size,
            position,
            min_size,
            max_size,
            displayed: size,
            last_metrics: *metrics,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn displayed(&self) -> Size {
        self.displayed
    }

    pub fn initial_size(&self) -> Size {
        self.initial_size
    }

    pub fn track(
        &mut self,
        pointer: Position,
        metrics: Option<&ContainerMetrics>,
        grid_size: f64,
    ) -> Size {
        if let Some(metrics) = metrics {
            self.last_metrics = *metrics;
        }
        let candidate = Size {
            width: self.initial_size.width + (pointer.x - self.start_pointer.x),
            height: self.initial_size.height + (pointer.y - self.start_pointer.y),
        };
        self.displayed = settle_size(
            candidate,
            self.position,
            self.min_size,
            self.max_size,
            &self.last_metrics,
            grid_size,
        );
        self.displayed
    }

    /// The size to commit: exactly what was last displayed. `None` when the
    /// displayed size never left the starting size, so a press and release on
    /// the handle leaves the stored size untouched even if it is off-grid.
    pub fn finish(self) -> Option<Size> {
        (self.displayed != self.initial_size).then_some(self.displayed)
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

    fn session() -> ResizeSession {
        ResizeSession::begin(
            7,
            Position::new(380.0, 260.0),
            Position::new(100.0, 100.0),
            Size::new(280.0, 160.0),
            Size::new(200.0, 120.0),
            Size::new(400.0, 200.0),
            &canvas(),
        )
    }

    #[test]
    fn huge_drag_commits_max_size() {
        let mut session = session();
        session.track(Position::new(1380.0, 1260.0), Some(&canvas()), 20.0);
        assert_eq!(session.finish(), Some(Size::new(400.0, 200.0)));
    }

    #[test]
    fn huge_shrink_commits_min_size() {
        let mut session = session();
        session.track(Position::new(-5000.0, -5000.0), Some(&canvas()), 20.0);
        assert_eq!(session.finish(), Some(Size::new(200.0, 120.0)));
    }

    #[test]
    fn committed_size_never_leaves_bounds() {
        let mut session = session();
        for (dx, dy) in [(-900.0, 40.0), (37.0, -3.0), (123.0, 77.0), (9000.0, -9000.0)] {
            let shown = session.track(
                Position::new(380.0 + dx, 260.0 + dy),
                Some(&canvas()),
                20.0,
            );
            assert!((200.0..=400.0).contains(&shown.width));
            assert!((120.0..=200.0).contains(&shown.height));
        }
    }

    #[test]
    fn live_size_snaps_to_grid() {
        let mut session = session();
        let shown = session.track(Position::new(413.0, 271.0), Some(&canvas()), 20.0);
        assert_eq!(shown, Size::new(320.0, 180.0));
    }

    #[test]
    fn release_without_motion_commits_nothing() {
        let session = session();
        assert_eq!(session.displayed(), session.initial_size());
        assert_eq!(session.finish(), None);
    }

    #[test]
    fn off_grid_size_is_not_snapped_by_a_bare_press() {
        let session = ResizeSession::begin(
            7,
            Position::new(383.0, 257.0),
            Position::new(100.0, 100.0),
            Size::new(283.0, 157.0),
            Size::new(200.0, 120.0),
            Size::new(400.0, 200.0),
            &canvas(),
        );
        assert_eq!(session.finish(), None);
    }

    #[test]
    fn off_grid_size_snaps_once_the_handle_moves() {
        let mut session = ResizeSession::begin(
            7,
            Position::new(383.0, 257.0),
            Position::new(100.0, 100.0),
            Size::new(283.0, 157.0),
            Size::new(200.0, 120.0),
            Size::new(400.0, 200.0),
            &canvas(),
        );
        session.track(Position::new(386.0, 258.0), Some(&canvas()), 20.0);
        assert_eq!(session.finish(), Some(Size::new(280.0, 160.0)));
    }

    #[test]
    fn commit_is_what_was_displayed() {
        let mut session = session();
        let shown = session.track(Position::new(421.0, 262.0), Some(&canvas()), 20.0);
        assert_eq!(session.displayed(), shown);
        assert_eq!(session.finish(), Some(shown));
    }
}
