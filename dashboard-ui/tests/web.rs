#![cfg(target_arch = "wasm32")]

use dashboard_ui::interop::{resolve_canvas_metrics, resolve_container_metrics, CANVAS_CLASS};
use wasm_bindgen_test::*;
use web_sys::{window, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(style: &str) -> Element {
    let document = window().unwrap().document().unwrap();
    let canvas = document.create_element("div").unwrap();
    canvas.set_class_name(CANVAS_CLASS);
    canvas.set_attribute("style", style).unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn metrics_exclude_padding_from_content_box() {
    let canvas = mount_canvas(
        "position: absolute; left: 0; top: 0; width: 400px; height: 300px; \
         padding: 16px 10px; border: 0; box-sizing: border-box; overflow: auto;",
    );

    let metrics = resolve_container_metrics(&canvas).unwrap();
    let rect = canvas.get_bounding_client_rect();
    canvas.remove();

    assert_eq!(metrics.padding_left, 10.0);
    assert_eq!(metrics.padding_top, 16.0);
    assert_eq!(metrics.content_width, 380.0);
    assert_eq!(metrics.content_height, 268.0);
    assert_eq!(metrics.left, rect.left());
    assert_eq!(metrics.top, rect.top());
    assert_eq!(metrics.scroll_left, 0.0);
}

#[wasm_bindgen_test]
fn metrics_are_read_fresh_after_scrolling() {
    let canvas = mount_canvas(
        "position: absolute; left: 0; top: 0; width: 200px; height: 200px; \
         padding: 0; border: 0; overflow: scroll;",
    );
    let document = window().unwrap().document().unwrap();
    let filler = document.create_element("div").unwrap();
    filler
        .set_attribute("style", "width: 2000px; height: 2000px;")
        .unwrap();
    canvas.append_child(&filler).unwrap();

    let before = resolve_container_metrics(&canvas).unwrap();
    canvas.set_scroll_top(120);
    let after = resolve_container_metrics(&canvas).unwrap();
    canvas.remove();

    assert_eq!(before.scroll_top, 0.0);
    assert_eq!(after.scroll_top, 120.0);
}

#[wasm_bindgen_test]
fn canvas_lookup_finds_mounted_canvas_only() {
    assert!(resolve_canvas_metrics().is_none());

    let canvas = mount_canvas("width: 100px; height: 100px;");
    let found = resolve_canvas_metrics();
    canvas.remove();

    assert!(found.is_some());
}
