use dioxus::prelude::*;
use shared_types::WidgetDefinition;

#[component]
pub fn WidgetPalette(catalog: Vec<WidgetDefinition>, on_add_widget: Callback<String>) -> Element {
    rsx! {
        div {
            class: "widget-palette",
            style: "display: flex; align-items: center; gap: 0.5rem;",

            for definition in catalog {
                PaletteEntry {
                    key: "{definition.widget_type}",
                    definition: definition.clone(),
                    on_add_widget,
                }
            }
        }
    }
}

#[component]
fn PaletteEntry(definition: WidgetDefinition, on_add_widget: Callback<String>) -> Element {
    let mut is_pressed = use_signal(|| false);
    let widget_type = definition.widget_type.clone();
    let scale = if is_pressed() { "0.95" } else { "1.0" };

    rsx! {
        button {
            class: "palette-entry",
            title: "Add {definition.name}",
            style: "display: flex; align-items: center; gap: 0.4rem; padding: 0.35rem 0.75rem; background: var(--dock-bg, rgba(30, 41, 59, 0.8)); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); cursor: pointer; transition: transform 0.15s ease-out; transform: scale({scale});",
            onpointerdown: move |_| is_pressed.set(true),
            onpointerup: move |_| is_pressed.set(false),
            onpointerleave: move |_| is_pressed.set(false),
            onclick: move |_| on_add_widget.call(widget_type.clone()),

            span { style: "font-size: 1.1rem; pointer-events: none;", "{definition.icon}" }
            span { style: "font-size: 0.8rem; pointer-events: none; user-select: none;", "{definition.name}" }
        }
    }
}
