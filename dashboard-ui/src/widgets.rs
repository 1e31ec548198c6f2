//! Content renderers for the built-in widget types.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::Widget;

use crate::fault::WidgetFault;

/// Content renderer handed to `WidgetContainer`. Compared by address so it can
/// sit in component props.
#[derive(Clone, Copy)]
pub struct ContentRenderer(pub fn(&Widget) -> Result<Element, WidgetFault>);

impl ContentRenderer {
    pub fn render(&self, widget: &Widget) -> Result<Element, WidgetFault> {
        (self.0)(widget)
    }
}

impl PartialEq for ContentRenderer {
    fn eq(&self, other: &Self) -> bool {
        self.0 as usize == other.0 as usize
    }
}

pub fn render_widget_content(widget: &Widget) -> Result<Element, WidgetFault> {
    let key = widget.id.clone();
    match widget.widget_type.as_str() {
        "clock" => Ok(rsx! { ClockWidget { key: "{key}" } }),
        "notes" => Ok(rsx! { NotesWidget { key: "{key}" } }),
        "weather" => Ok(rsx! { WeatherWidget { key: "{key}" } }),
        other => Err(WidgetFault::UnknownType(other.to_string())),
    }
}

#[component]
fn ClockWidget() -> Element {
    let mut now = use_signal(chrono::Local::now);

    use_future(move || async move {
        loop {
            TimeoutFuture::new(1_000).await;
            now.set(chrono::Local::now());
        }
    });

    let time = now().format("%H:%M:%S").to_string();
    let date = now().format("%A, %B %-d").to_string();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; gap: 0.25rem;",
            span { style: "font-size: 2.25rem; font-variant-numeric: tabular-nums;", "{time}" }
            span { style: "font-size: 0.85rem; color: var(--text-secondary, #94a3b8);", "{date}" }
        }
    }
}

#[component]
fn NotesWidget() -> Element {
    let mut text = use_signal(String::new);

    rsx! {
        textarea {
            style: "width: 100%; height: 100%; resize: none; border: none; outline: none; padding: 0.75rem; background: transparent; color: var(--text-primary, white); font: inherit;",
            placeholder: "Write something...",
            value: "{text}",
            oninput: move |e| text.set(e.value()),
        }
    }
}

#[component]
fn WeatherWidget() -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; height: 100%; gap: 0.75rem; color: var(--text-secondary, #94a3b8);",
            span { style: "font-size: 2rem;", "⛅" }
            span { "No location configured" }
        }
    }
}
