//! Pure geometry helpers: snapping, clamping, and pointer-to-canvas conversion.

use shared_types::{Position, Size};

pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Layout of the dashboard canvas at one instant, read from the DOM by
/// `interop::resolve_container_metrics`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerMetrics {
    /// Client-space x of the canvas padding edge (bounding rect + border).
    pub left: f64,
    /// Client-space y of the canvas padding edge (bounding rect + border).
    pub top: f64,
    pub padding_left: f64,
    pub padding_top: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub content_width: f64,
    pub content_height: f64,
}

/// Live or committed rectangle of one widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetBounds {
    pub position: Position,
    pub size: Size,
}

/// Round `value` to the nearest multiple of `grid_size`. A non-positive grid
/// disables snapping.
pub fn snap(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Keep `[value, value + size]` inside `[0, container_size]`. Degenerates to 0
/// when the widget is larger than the container.
pub fn clamp_axis(value: f64, size: f64, container_size: f64) -> f64 {
    let far = (container_size - size).max(0.0);
    value.min(far).max(0.0)
}

/// Snap `value` and keep the result inside `[lo, hi]`.
///
/// If the nearest multiple falls outside the range, the nearest in-range
/// multiple is used instead; if the range holds no multiple at all, the plain
/// clamped value is returned.
pub fn snap_within(value: f64, grid_size: f64, lo: f64, hi: f64) -> f64 {
    let hi = hi.max(lo);
    let clamped = value.max(lo).min(hi);
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return clamped;
    }

    let snapped = snap(clamped, grid_size);
    if snapped > hi {
        let down = (hi / grid_size).floor() * grid_size;
        return if down >= lo { down } else { clamped };
    }
    if snapped < lo {
        let up = (lo / grid_size).ceil() * grid_size;
        return if up <= hi { up } else { clamped };
    }
    snapped
}

/// Convert client pointer coordinates into canvas content-box coordinates.
pub fn pointer_to_local(pointer: Position, metrics: &ContainerMetrics) -> Position {
    Position {
        x: pointer.x - metrics.left - metrics.padding_left + metrics.scroll_left,
        y: pointer.y - metrics.top - metrics.padding_top + metrics.scroll_top,
    }
}

/// Clamp a candidate position so the widget stays inside the content box.
pub fn clamp_position(candidate: Position, size: Size, metrics: &ContainerMetrics) -> Position {
    Position {
        x: clamp_axis(candidate.x, size.width, metrics.content_width),
        y: clamp_axis(candidate.y, size.height, metrics.content_height),
    }
}

/// Clamp, then snap, without letting the snap push the widget back out.
pub fn settle_position(
    candidate: Position,
    size: Size,
    metrics: &ContainerMetrics,
    grid_size: f64,
) -> Position {
    let clamped = clamp_position(candidate, size, metrics);
    let max_x = (metrics.content_width - size.width).max(0.0);
    let max_y = (metrics.content_height - size.height).max(0.0);
    Position {
        x: snap_within(clamped.x, grid_size, 0.0, max_x),
        y: snap_within(clamped.y, grid_size, 0.0, max_y),
    }
}

/// Clamp a candidate size into `[min, max]` per axis, further capped so the far
/// edge stays inside the content box (never below `min`), then snap.
pub fn settle_size(
    candidate: Size,
    position: Position,
    min: Size,
    max: Size,
    metrics: &ContainerMetrics,
    grid_size: f64,
) -> Size {
    let room_x = metrics.content_width - position.x;
    let room_y = metrics.content_height - position.y;
    let hi_w = max.width.min(room_x).max(min.width);
    let hi_h = max.height.min(room_y).max(min.height);
    Size {
        width: snap_within(candidate.width, grid_size, min.width, hi_w),
        height: snap_within(candidate.height, grid_size, min.height, hi_h),
    }
}

pub fn distance(a: Position, b: Position) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Parse a computed CSS length such as `"24px"`; anything unparsable reads as 0.
pub fn parse_css_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
