use dioxus::prelude::*;
use shared_types::{Widget, WidgetDefinition};

/// Side panel naming the widget being configured. Settings themselves belong
/// to each widget type and are not rendered here.
#[component]
pub fn ConfigurePanel(widget: Widget, definition: WidgetDefinition, on_close: Callback<()>) -> Element {
    let position = widget.position();
    let size = widget.size();

    rsx! {
        aside {
            class: "configure-panel",
            "aria-label": "Configure {definition.name}",
            style: "position: fixed; top: 0; right: 0; bottom: 0; width: 280px; z-index: 3000; display: flex; flex-direction: column; gap: 0.75rem; padding: 1rem; background: var(--bg-secondary, #1e293b); border-left: 1px solid var(--border-color, #334155); box-shadow: var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5));",

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                span { style: "font-weight: 500;", "{definition.icon} {definition.name}" }
                button {
                    "aria-label": "Close",
                    style: "background: transparent; color: var(--text-secondary, #94a3b8); border: none; cursor: pointer; font-size: 1.25rem;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }

            dl {
                style: "display: grid; grid-template-columns: auto 1fr; gap: 0.25rem 0.75rem; margin: 0; font-size: 0.8rem; color: var(--text-secondary, #94a3b8);",
                dt { "Widget" }
                dd { style: "margin: 0; font-family: monospace;", "{widget.id}" }
                dt { "Position" }
                dd { style: "margin: 0;", "{position.x}, {position.y}" }
                dt { "Size" }
                dd { style: "margin: 0;", "{size.width} × {size.height}" }
            }
        }
    }
}
