//! Fault boundary for widget content renderers.
//!
//! A renderer failure is turned into `RenderResult::Failed` so the container
//! can show a fallback panel; sibling widgets keep rendering.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use dioxus_logger::tracing;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WidgetFault {
    #[error("no renderer for widget type `{0}`")]
    UnknownType(String),
    #[error("widget content failed: {0}")]
    Content(String),
    #[error("widget renderer panicked: {0}")]
    Panicked(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderResult<T> {
    Ok(T),
    Failed(WidgetFault),
}

/// Run `render`, containing both returned errors and unwinding panics.
///
/// On targets without unwinding (wasm32) a panic still aborts; renderers are
/// expected to report failure through `Err`.
pub fn render_guarded<T>(
    widget_id: &str,
    render: impl FnOnce() -> Result<T, WidgetFault>,
) -> RenderResult<T> {
    let fault = match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(Ok(node)) => return RenderResult::Ok(node),
        Ok(Err(fault)) => fault,
        Err(payload) => WidgetFault::Panicked(panic_message(payload.as_ref())),
    };
    tracing::error!(widget_id, "Widget render failed: {}", fault);
    RenderResult::Failed(fault)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "unknown panic".to_string()
}
