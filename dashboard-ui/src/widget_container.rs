use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use shared_types::{Position, Size, Widget, WidgetDefinition, WidgetFeatures};

use crate::config::LayoutConfig;
use crate::fault::{render_guarded, RenderResult, WidgetFault};
use crate::interop::{
    capture_widget_pointer, pointer_buttons, pointer_point, pointer_target_is_widget_control,
    release_widget_pointer, resolve_canvas_metrics,
};
use crate::layout::{
    nudge_position, nudge_size, GestureCommit, GestureTracker, NudgeDirection, ResizeLimits,
    WidgetBounds,
};
use crate::widgets::ContentRenderer;

const DRAGGING_Z_INDEX: u32 = 1000;
const RESTING_Z_INDEX: u32 = 1;
const FULLSCREEN_Z_INDEX: u32 = 2000;

/// Release the session owned by the event's pointer, if any.
fn end_gesture(
    e: &PointerEvent,
    mut tracker: Signal<GestureTracker>,
    config: &LayoutConfig,
) -> Option<GestureCommit> {
    let pointer_id = e.data().pointer_id();
    let metrics = resolve_canvas_metrics();
    let commit =
        tracker
            .write()
            .pointer_up(pointer_id, pointer_point(e), metrics.as_ref(), config)?;
    release_widget_pointer(e, pointer_id);
    Some(commit)
}

fn dispatch_commit(
    widget_id: &str,
    commit: GestureCommit,
    on_position_change: Callback<(String, Position)>,
    on_size_change: Callback<(String, Size)>,
) {
    match commit {
        GestureCommit::Moved(position) => {
            on_position_change.call((widget_id.to_string(), position));
        }
        GestureCommit::Resized(size) => {
            on_size_change.call((widget_id.to_string(), size));
        }
        GestureCommit::Clicked => {
            tracing::debug!(widget_id, "Gesture released without change; nothing committed");
        }
    }
}

fn nudge_direction(key: &Key) -> Option<NudgeDirection> {
    match key {
        Key::ArrowLeft => Some(NudgeDirection::Left),
        Key::ArrowRight => Some(NudgeDirection::Right),
        Key::ArrowUp => Some(NudgeDirection::Up),
        Key::ArrowDown => Some(NudgeDirection::Down),
        _ => None,
    }
}

#[component]
pub fn WidgetContainer(
    widget: Widget,
    definition: WidgetDefinition,
    config: LayoutConfig,
    renderer: ContentRenderer,
    on_position_change: Callback<(String, Position)>,
    on_size_change: Callback<(String, Size)>,
    on_toggle_fullscreen: Callback<String>,
    on_remove: Callback<String>,
    on_configure_widget: Callback<String>,
) -> Element {
    let widget_id = widget.id.clone();
    let features = definition.features;
    let is_fullscreen = widget.is_fullscreen();
    let committed = WidgetBounds {
        position: widget.position(),
        size: widget.size(),
    };
    let limits = ResizeLimits {
        resizable: features.resizable,
        min_size: definition.min_size,
        max_size: definition.max_size,
    };

    let mut tracker = use_signal(GestureTracker::default);
    let mut preview = use_signal(|| None::<WidgetBounds>);
    let session_open = use_hook(|| Rc::new(Cell::new(false)));

    let toggle_fullscreen = use_callback(move |widget_id: String| {
        if let Err(refused) = tracker.read().check_fullscreen_toggle() {
            tracing::debug!(widget_id = %widget_id, "Fullscreen toggle ignored: {}", refused);
            return;
        }
        on_toggle_fullscreen.call(widget_id);
    });

    {
        let session_open = session_open.clone();
        let widget_id = widget_id.clone();
        use_drop(move || {
            // Handlers die with the component, so the session goes with them.
            if session_open.get() {
                tracing::debug!(
                    widget_id = %widget_id,
                    "Widget unmounted mid-gesture; discarded without commit"
                );
            }
        });
    }

    let bounds = preview().unwrap_or(committed);
    let z_index = if tracker.read().is_active() {
        DRAGGING_Z_INDEX
    } else {
        RESTING_Z_INDEX
    };
    let widget_style = if is_fullscreen {
        format!(
            "position: fixed; inset: 0; z-index: {FULLSCREEN_Z_INDEX}; display: flex; \
             flex-direction: column; background: var(--widget-bg, #1f2937); border: none; \
             border-radius: 0; overflow: hidden;"
        )
    } else {
        format!(
            "position: absolute; left: 0; top: 0; transform: translate({}px, {}px); width: \
             {}px; height: {}px; z-index: {z_index}; display: flex; flex-direction: column; \
             background: var(--widget-bg, #1f2937); border: 1px solid var(--border-color, \
             #374151); border-radius: var(--radius-lg, 12px); overflow: hidden; box-shadow: \
             var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5));",
            bounds.position.x, bounds.position.y, bounds.size.width, bounds.size.height
        )
    };

    let widget_for_drag = widget.clone();
    let widget_for_resize = widget.clone();
    let widget_for_keyboard = widget.clone();
    let widget_id_for_keyboard = widget_id.clone();
    let widget_id_for_pointer_move = widget_id.clone();
    let widget_id_for_pointer_up = widget_id.clone();
    let session_open_for_drag = session_open.clone();
    let session_open_for_resize = session_open.clone();
    let session_open_for_move = session_open.clone();
    let session_open_for_up = session_open.clone();
    let session_open_for_cancel = session_open.clone();
    let session_open_for_keyboard = session_open;

    let on_widget_keydown = move |e: KeyboardEvent| {
        let key = e.key();
        let modifiers = e.modifiers();

        if key == Key::Escape {
            if tracker.write().cancel() {
                e.prevent_default();
                session_open_for_keyboard.set(false);
                preview.set(None);
            }
            return;
        }

        let is_f = matches!(&key, Key::Character(c) if c.eq_ignore_ascii_case("f"));
        if is_f && modifiers.ctrl() && modifiers.shift() {
            if features.fullscreenable {
                e.prevent_default();
                toggle_fullscreen.call(widget_id_for_keyboard.clone());
            }
            return;
        }

        if !modifiers.alt() || widget_for_keyboard.is_fullscreen() || tracker.read().is_active() {
            return;
        }
        let Some(direction) = nudge_direction(&key) else {
            return;
        };
        let Some(metrics) = resolve_canvas_metrics() else {
            tracing::warn!("Dashboard canvas not found; ignoring keyboard nudge");
            return;
        };
        e.prevent_default();

        if modifiers.shift() {
            if !features.resizable {
                return;
            }
            let next = nudge_size(
                committed.position,
                committed.size,
                direction,
                limits.min_size,
                limits.max_size,
                &metrics,
                config.grid_size,
            );
            on_size_change.call((widget_id_for_keyboard.clone(), next));
            return;
        }

        let next = nudge_position(
            committed.position,
            committed.size,
            direction,
            &metrics,
            config.grid_size,
        );
        on_position_change.call((widget_id_for_keyboard.clone(), next));
    };

    rsx! {
        div {
            class: if is_fullscreen { "widget-container fullscreen" } else { "widget-container" },
            role: "group",
            "aria-label": definition.name.clone(),
            tabindex: "0",
            style: "{widget_style}",
            onkeydown: on_widget_keydown,
            onpointermove: move |e| {
                if !tracker.read().is_active() {
                    return;
                }

                // Pointer capture can be lost across focus changes. With no
                // buttons held, finish the gesture instead of leaving it stuck.
                if pointer_buttons(&e) == 0 {
                    if let Some(commit) = end_gesture(&e, tracker, &config) {
                        session_open_for_move.set(false);
                        preview.set(None);
                        dispatch_commit(
                            &widget_id_for_pointer_move,
                            commit,
                            on_position_change,
                            on_size_change,
                        );
                    }
                    return;
                }

                let metrics = resolve_canvas_metrics();
                let live = tracker.write().pointer_move(
                    e.data().pointer_id(),
                    pointer_point(&e),
                    metrics.as_ref(),
                    &config,
                );
                if let Some(live) = live {
                    preview.set(Some(live));
                }
            },
            onpointerup: move |e| {
                let Some(commit) = end_gesture(&e, tracker, &config) else {
                    return;
                };
                session_open_for_up.set(false);
                preview.set(None);
                dispatch_commit(
                    &widget_id_for_pointer_up,
                    commit,
                    on_position_change,
                    on_size_change,
                );
            },
            onpointercancel: move |e| {
                let pointer_id = e.data().pointer_id();
                let owns_pointer = tracker
                    .read()
                    .active()
                    .is_some_and(|session| session.pointer_id() == pointer_id);
                if !owns_pointer {
                    return;
                }
                release_widget_pointer(&e, pointer_id);
                tracker.write().cancel();
                session_open_for_cancel.set(false);
                preview.set(None);
            },

            div {
                class: "widget-header",
                style: "display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0.75rem; background: var(--header-bg, #111827); border-bottom: 1px solid var(--border-color, #374151); cursor: grab; user-select: none; touch-action: none;",
                onpointerdown: move |e| {
                    if pointer_target_is_widget_control(&e) {
                        return;
                    }
                    let Some(metrics) = resolve_canvas_metrics() else {
                        tracing::warn!("Dashboard canvas not found; ignoring drag");
                        return;
                    };
                    let pointer_id = e.data().pointer_id();
                    let started = tracker.write().begin_drag(
                        pointer_id,
                        pointer_point(&e),
                        &widget_for_drag,
                        &metrics,
                    );
                    match started {
                        Ok(start) => {
                            e.prevent_default();
                            capture_widget_pointer(&e, pointer_id);
                            session_open_for_drag.set(true);
                            preview.set(Some(start));
                        }
                        Err(refused) => {
                            tracing::debug!(widget_id = %widget_for_drag.id, "Drag not started: {}", refused);
                        }
                    }
                },

                div {
                    style: "display: flex; align-items: center; gap: 0.5rem;",
                    span { style: "font-size: 1rem;", "{definition.icon}" }
                    span { style: "font-weight: 500; color: var(--text-primary, white);", "{definition.name}" }
                }

                WidgetControls {
                    widget_id: widget_id.clone(),
                    features,
                    fullscreen: is_fullscreen,
                    on_toggle_fullscreen: toggle_fullscreen,
                    on_remove,
                    on_configure_widget,
                }
            }

            div {
                class: "widget-content",
                style: "flex: 1; overflow: hidden;",

                WidgetContent {
                    widget: widget.clone(),
                    renderer,
                    on_remove,
                }
            }

            if features.resizable && !is_fullscreen {
                div {
                    class: "resize-handle",
                    style: "position: absolute; right: 0; bottom: 0; width: 16px; height: 16px; cursor: se-resize; touch-action: none;",
                    onpointerdown: move |e| {
                        let Some(metrics) = resolve_canvas_metrics() else {
                            tracing::warn!("Dashboard canvas not found; ignoring resize");
                            return;
                        };
                        let pointer_id = e.data().pointer_id();
                        let started = tracker.write().begin_resize(
                            pointer_id,
                            pointer_point(&e),
                            &widget_for_resize,
                            limits,
                            &metrics,
                        );
                        match started {
                            Ok(start) => {
                                e.prevent_default();
                                e.stop_propagation();
                                capture_widget_pointer(&e, pointer_id);
                                session_open_for_resize.set(true);
                                preview.set(Some(start));
                            }
                            Err(refused) => {
                                tracing::debug!(widget_id = %widget_for_resize.id, "Resize not started: {}", refused);
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn WidgetControls(
    widget_id: String,
    features: WidgetFeatures,
    fullscreen: bool,
    on_toggle_fullscreen: Callback<String>,
    on_remove: Callback<String>,
    on_configure_widget: Callback<String>,
) -> Element {
    let widget_id_for_configure = widget_id.clone();
    let widget_id_for_fullscreen = widget_id.clone();
    let widget_id_for_remove = widget_id;

    rsx! {
        div {
            class: "widget-controls",
            style: "display: flex; align-items: center; gap: 0.25rem;",

            if features.configurable {
                button {
                    style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: var(--text-secondary, #9ca3af); border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                    onpointerdown: move |e| e.stop_propagation(),
                    "aria-label": "Configure",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_configure_widget.call(widget_id_for_configure.clone());
                    },
                    "⚙"
                }
            }
            if features.fullscreenable {
                button {
                    style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: #22c55e; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                    onpointerdown: move |e| e.stop_propagation(),
                    "aria-label": if fullscreen { "Exit fullscreen" } else { "Fullscreen" },
                    onclick: move |e| {
                        e.stop_propagation();
                        on_toggle_fullscreen.call(widget_id_for_fullscreen.clone());
                    },
                    if fullscreen { "❐" } else { "□" }
                }
            }
            button {
                class: "widget-remove",
                style: "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; color: #ef4444; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 1.25rem; line-height: 1;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Remove",
                onclick: move |e| {
                    e.stop_propagation();
                    on_remove.call(widget_id_for_remove.clone());
                },
                "×"
            }
        }
    }
}

/// Widget body behind both fault paths: a renderer that refuses the widget
/// up front, and a content component that fails while Dioxus renders it.
#[component]
fn WidgetContent(widget: Widget, renderer: ContentRenderer, on_remove: Callback<String>) -> Element {
    let widget_id = widget.id.clone();

    match render_guarded(&widget.id, || renderer.render(&widget)) {
        RenderResult::Ok(node) => rsx! {
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| {
                    let detail = errors
                        .error()
                        .map(|error| error.to_string())
                        .unwrap_or_else(|| "unknown error".to_string());
                    let message = WidgetFault::Content(detail).to_string();
                    tracing::error!(widget_id = %widget_id, "Widget render failed: {}", message);
                    rsx! {
                        WidgetCrashed {
                            widget_id: widget_id.clone(),
                            message,
                            on_remove,
                        }
                    }
                },
                {node}
            }
        },
        RenderResult::Failed(fault) => rsx! {
            WidgetCrashed {
                widget_id,
                message: fault.to_string(),
                on_remove,
            }
        },
    }
}

#[component]
fn WidgetCrashed(widget_id: String, message: String, on_remove: Callback<String>) -> Element {
    rsx! {
        div {
            class: "widget-crashed",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; gap: 0.5rem; padding: 1rem; text-align: center; color: var(--danger-text, #ef4444);",
            p { style: "font-weight: 500; margin: 0;", "This widget crashed" }
            p { style: "font-size: 0.8rem; margin: 0; color: var(--text-secondary, #9ca3af);", "{message}" }
            button {
                style: "padding: 0.35rem 0.9rem; background: var(--danger-bg, #ef4444); color: white; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;",
                onclick: move |_| on_remove.call(widget_id.clone()),
                "Remove widget"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        // Errors caught during the first pass re-render the boundary.
        dom.render_immediate(&mut NoOpMutations);
        dioxus_ssr::render(&dom)
    }

    fn sample(widget_type: &str) -> Widget {
        Widget::new(widget_type, Position::new(0.0, 0.0), Size::new(200.0, 120.0))
    }

    #[component]
    fn FailingContent() -> Element {
        let value: u32 = "not a number".parse()?;
        rsx! { span { "{value}" } }
    }

    fn failing_renderer(_widget: &Widget) -> Result<Element, WidgetFault> {
        Ok(rsx! { FailingContent {} })
    }

    fn healthy_renderer(_widget: &Widget) -> Result<Element, WidgetFault> {
        Ok(rsx! { span { "content-ok" } })
    }

    #[component]
    fn FailingHost() -> Element {
        let widget = use_hook(|| sample("broken"));
        rsx! {
            div {
                WidgetContent {
                    widget,
                    renderer: ContentRenderer(failing_renderer),
                    on_remove: move |_| {},
                }
            }
            span { "sibling-ok" }
        }
    }

    #[component]
    fn UnknownTypeHost() -> Element {
        let widget = use_hook(|| sample("stocks"));
        rsx! {
            WidgetContent {
                widget,
                renderer: ContentRenderer(crate::widgets::render_widget_content),
                on_remove: move |_| {},
            }
            span { "sibling-ok" }
        }
    }

    #[component]
    fn HealthyHost() -> Element {
        let widget = use_hook(|| sample("clock"));
        rsx! {
            WidgetContent {
                widget,
                renderer: ContentRenderer(healthy_renderer),
                on_remove: move |_| {},
            }
        }
    }

    #[test]
    fn failing_content_component_shows_crashed_panel() {
        let html = render(FailingHost);
        assert!(html.contains("This widget crashed"), "{html}");
        assert!(html.contains("Remove widget"), "{html}");
        assert!(html.contains("sibling-ok"), "{html}");
    }

    #[test]
    fn unknown_type_shows_crashed_panel() {
        let html = render(UnknownTypeHost);
        assert!(html.contains("This widget crashed"), "{html}");
        assert!(html.contains("stocks"), "{html}");
        assert!(html.contains("sibling-ok"), "{html}");
    }

    #[test]
    fn healthy_content_renders_without_fallback() {
        let html = render(HealthyHost);
        assert!(html.contains("content-ok"), "{html}");
        assert!(!html.contains("This widget crashed"), "{html}");
    }
}
