//! Interactive layout engine
//!
//! Pure gesture math and state; the only DOM-touching pieces live in
//! `crate::interop` and `crate::widget_container`.

pub mod drag;
pub mod geometry;
pub mod keyboard;
pub mod resize;
pub mod session;

pub use drag::{DragOutcome, DragSession, CLICK_EPSILON_PX};
pub use geometry::{
    clamp_axis, pointer_to_local, settle_position, settle_size, snap, ContainerMetrics,
    WidgetBounds, DEFAULT_GRID_SIZE,
};
pub use keyboard::{nudge_position, nudge_size, NudgeDirection};
pub use resize::ResizeSession;
pub use session::{GestureCommit, GestureRefused, GestureSession, GestureTracker, ResizeLimits};
