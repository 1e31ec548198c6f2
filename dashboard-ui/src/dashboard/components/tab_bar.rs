use dioxus::prelude::*;
use shared_types::Dashboard;

#[component]
pub fn TabBar(
    dashboards: Vec<Dashboard>,
    active_dashboard: Option<String>,
    on_switch: Callback<String>,
    on_add: Callback<()>,
    on_rename: Callback<(String, String)>,
    on_remove: Callback<String>,
) -> Element {
    let can_remove = dashboards.len() > 1;

    rsx! {
        div {
            class: "dashboard-tabs",
            role: "tablist",
            style: "display: flex; align-items: center; gap: 0.25rem; overflow-x: auto;",

            for dashboard in dashboards {
                Tab {
                    key: "{dashboard.id}",
                    is_active: active_dashboard.as_deref() == Some(dashboard.id.as_str()),
                    dashboard_id: dashboard.id.clone(),
                    name: dashboard.name.clone(),
                    can_remove,
                    on_switch,
                    on_rename,
                    on_remove,
                }
            }

            button {
                class: "dashboard-tab-add",
                "aria-label": "New dashboard",
                style: "width: 28px; height: 28px; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px dashed var(--border-color, #334155); border-radius: var(--radius-sm, 4px); cursor: pointer;",
                onclick: move |_| on_add.call(()),
                "+"
            }
        }
    }
}

#[component]
fn Tab(
    dashboard_id: String,
    name: String,
    is_active: bool,
    can_remove: bool,
    on_switch: Callback<String>,
    on_rename: Callback<(String, String)>,
    on_remove: Callback<String>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(String::new);

    let background = if is_active {
        "var(--accent-bg, #3b82f6)"
    } else {
        "transparent"
    };
    let color = if is_active {
        "var(--accent-text, white)"
    } else {
        "var(--text-secondary, #94a3b8)"
    };

    let id_for_switch = dashboard_id.clone();
    let id_for_remove = dashboard_id.clone();
    let id_for_keydown = dashboard_id.clone();
    let id_for_blur = dashboard_id;
    let name_for_edit = name.clone();

    rsx! {
        div {
            class: "dashboard-tab",
            role: "tab",
            "aria-selected": "{is_active}",
            style: "display: flex; align-items: center; gap: 0.35rem; padding: 0.3rem 0.6rem; background: {background}; color: {color}; border-radius: var(--radius-sm, 4px); cursor: pointer; user-select: none;",
            onclick: move |_| {
                if !is_active {
                    on_switch.call(id_for_switch.clone());
                }
            },
            ondoubleclick: move |_| {
                draft.set(name_for_edit.clone());
                editing.set(true);
            },

            if editing() {
                input {
                    r#type: "text",
                    value: "{draft}",
                    autofocus: true,
                    style: "width: 8rem; padding: 0.1rem 0.3rem; background: var(--input-bg, #1e293b); color: var(--text-primary, white); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); font: inherit;",
                    onclick: move |e| e.stop_propagation(),
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e| match e.key() {
                        Key::Enter => {
                            on_rename.call((id_for_keydown.clone(), draft()));
                            editing.set(false);
                        }
                        Key::Escape => editing.set(false),
                        _ => {}
                    },
                    onblur: move |_| {
                        if editing() {
                            on_rename.call((id_for_blur.clone(), draft()));
                            editing.set(false);
                        }
                    },
                }
            } else {
                span { style: "font-size: 0.85rem; white-space: nowrap;", "{name}" }
            }

            if can_remove {
                button {
                    "aria-label": "Remove dashboard",
                    style: "background: transparent; color: inherit; border: none; cursor: pointer; padding: 0; font-size: 1rem; line-height: 1; opacity: 0.7;",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_remove.call(id_for_remove.clone());
                    },
                    "×"
                }
            }
        }
    }
}
