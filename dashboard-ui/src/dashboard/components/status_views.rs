use dioxus::prelude::*;

#[component]
pub fn EmptyDashboard(name: String) -> Element {
    rsx! {
        div {
            style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 0.5rem; color: var(--text-muted, #6b7280); pointer-events: none;",
            p { style: "font-weight: 500; margin: 0;", "{name} is empty" }
            p { style: "font-size: 0.875rem; margin: 0;", "Add a widget from the palette above." }
        }
    }
}

#[component]
pub fn MissingDashboard() -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; height: 100%; color: var(--danger-text, #ef4444);",
            "No active dashboard"
        }
    }
}
