//! One-grid-step keyboard moves and resizes for a focused widget.

use shared_types::{Position, Size};

use super::geometry::{settle_position, settle_size, ContainerMetrics};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
    Up,
    Down,
}

fn step(grid_size: f64) -> f64 {
    if grid_size > 0.0 {
        grid_size
    } else {
        1.0
    }
}

pub fn nudge_position(
    position: Position,
    size: Size,
    direction: NudgeDirection,
    metrics: &ContainerMetrics,
    grid_size: f64,
) -> Position {
    let step = step(grid_size);
    let mut next = position;
    match direction {
        NudgeDirection::Left => next.x -= step,
        NudgeDirection::Right => next.x += step,
        NudgeDirection::Up => next.y -= step,
        NudgeDirection::Down => next.y += step,
    }
    settle_position(next, size, metrics, grid_size)
}

/// Left/Up shrink, Right/Down grow; the top-left corner stays put.
pub fn nudge_size(
    position: Position,
    size: Size,
    direction: NudgeDirection,
    min_size: Size,
    max_size: Size,
    metrics: &ContainerMetrics,
    grid_size: f64,
) -> Size {
    let step = step(grid_size);
    let mut next = size;
    match direction {
        NudgeDirection::Left => next.width -= step,
        NudgeDirection::Right => next.width += step,
        NudgeDirection::Up => next.height -= step,
        NudgeDirection::Down => next.height += step,
    }
    settle_size(next, position, min_size, max_size, metrics, grid_size)
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

    #[test]
    fn nudge_moves_one_grid_step() {
        let next = nudge_position(
            Position::new(100.0, 100.0),
            Size::new(280.0, 160.0),
            NudgeDirection::Right,
            &canvas(),
            20.0,
        );
        assert_eq!(next, Position::new(120.0, 100.0));
    }

    #[test]
    fn nudge_stops_at_canvas_edge() {
        let next = nudge_position(
            Position::new(0.0, 440.0),
            Size::new(280.0, 160.0),
            NudgeDirection::Down,
            &canvas(),
            20.0,
        );
        assert_eq!(next, Position::new(0.0, 440.0));

        let next = nudge_position(
            next,
            Size::new(280.0, 160.0),
            NudgeDirection::Left,
            &canvas(),
            20.0,
        );
        assert_eq!(next.x, 0.0);
    }

    #[test]
    fn nudge_size_respects_bounds() {
        let min = Size::new(200.0, 120.0);
        let max = Size::new(400.0, 200.0);
        let grown = nudge_size(
            Position::new(100.0, 100.0),
            Size::new(400.0, 200.0),
            NudgeDirection::Right,
            min,
            max,
            &canvas(),
            20.0,
        );
        assert_eq!(grown, max);

        let shrunk = nudge_size(
            Position::new(100.0, 100.0),
            Size::new(220.0, 120.0),
            NudgeDirection::Up,
            min,
            max,
            &canvas(),
            20.0,
        );
        assert_eq!(shrunk, Size::new(220.0, 120.0));
    }
}
