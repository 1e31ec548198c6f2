use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use shared_types::Position;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::layout::geometry::{parse_css_px, ContainerMetrics};

/// CSS class of the scrollable, padded canvas that hosts widgets.
pub const CANVAS_CLASS: &str = "dashboard-canvas";

/// Read the canvas layout right now. Side-effect free, but never cached: the
/// canvas may scroll or resize at any time.
pub fn resolve_container_metrics(element: &web_sys::Element) -> Option<ContainerMetrics> {
    let style = window()?.get_computed_style(element).ok()??;
    let px = |name: &str| parse_css_px(&style.get_property_value(name).unwrap_or_default());

    let padding_left = px("padding-left");
    let padding_top = px("padding-top");
    let padding_right = px("padding-right");
    let padding_bottom = px("padding-bottom");
    let rect = element.get_bounding_client_rect();

    Some(ContainerMetrics {
        left: rect.left() + f64::from(element.client_left()),
        top: rect.top() + f64::from(element.client_top()),
        padding_left,
        padding_top,
        scroll_left: f64::from(element.scroll_left()),
        scroll_top: f64::from(element.scroll_top()),
        content_width: (f64::from(element.client_width()) - padding_left - padding_right).max(0.0),
        content_height: (f64::from(element.client_height()) - padding_top - padding_bottom)
            .max(0.0),
    })
}

/// Metrics of the dashboard canvas currently in the document.
pub fn resolve_canvas_metrics() -> Option<ContainerMetrics> {
    let document = window()?.document()?;
    let canvas = document
        .query_selector(&format!(".{CANVAS_CLASS}"))
        .ok()??;
    resolve_container_metrics(&canvas)
}

pub fn pointer_point(e: &PointerEvent) -> Position {
    let point = e.data().client_coordinates();
    Position::new(point.x, point.y)
}

pub fn pointer_buttons(e: &PointerEvent) -> u16 {
    e.data()
        .try_as_web_event()
        .and_then(|event| {
            event
                .dyn_ref::<web_sys::PointerEvent>()
                .map(|pointer| pointer.buttons())
        })
        .unwrap_or(1)
}

pub fn pointer_target_is_widget_control(e: &PointerEvent) -> bool {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            element.closest("button").ok().flatten().is_some()
                || element.closest(".widget-controls").ok().flatten().is_some()
        })
        .unwrap_or(false)
}

fn widget_element(e: &PointerEvent) -> Option<web_sys::Element> {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".widget-container").ok().flatten())
}

/// Route all events of `pointer_id` to the widget element until released, so
/// no document-level listeners are needed for the gesture.
pub fn capture_widget_pointer(e: &PointerEvent, pointer_id: i32) {
    if let Some(element) = widget_element(e) {
        let _ = element.set_pointer_capture(pointer_id);
    }
}

pub fn release_widget_pointer(e: &PointerEvent, pointer_id: i32) {
    if let Some(element) = widget_element(e) {
        let _ = element.release_pointer_capture(pointer_id);
    }
}
