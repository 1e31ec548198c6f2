use dioxus::prelude::*;
use dioxus_logger::tracing;
use shared_types::{Position, Size};

use crate::config::LayoutConfig;
use crate::dashboard::catalog::{core_widgets, fallback_definition, find_definition};
use crate::dashboard::components::configure_panel::ConfigurePanel;
use crate::dashboard::components::dashboard_canvas::DashboardCanvas;
use crate::dashboard::components::status_views::MissingDashboard;
use crate::dashboard::components::tab_bar::TabBar;
use crate::dashboard::components::widget_palette::WidgetPalette;
use crate::dashboard::state::{
    add_dashboard, add_widget, initial_state, move_widget, remove_dashboard, remove_widget,
    rename_dashboard, resize_widget, switch_dashboard, toggle_widget_fullscreen, DashboardError,
};
use crate::interop::resolve_canvas_metrics;

/// Log a rejected owner command. Stale ids are expected after removals, so
/// this never surfaces to the user.
fn warn_rejected(command: &str, result: Result<(), DashboardError>) {
    if let Err(e) = result {
        tracing::warn!(command, "Dashboard command rejected: {}", e);
    }
}

#[component]
pub fn DashboardShell() -> Element {
    let catalog = use_hook(core_widgets);
    let config = use_hook(LayoutConfig::from_location);
    let mut dashboards = use_signal(|| initial_state(&core_widgets()));
    let mut configuring = use_signal(|| None::<String>);

    use_hook(|| {
        tracing::info!(
            grid_size = config.grid_size,
            click_epsilon_px = config.click_epsilon_px,
            "Dashboard started"
        );
    });

    let on_position_change = use_callback(move |(widget_id, position): (String, Position)| {
        warn_rejected(
            "move_widget",
            move_widget(&mut dashboards.write(), &widget_id, position),
        );
    });

    let on_size_change = use_callback(move |(widget_id, size): (String, Size)| {
        warn_rejected(
            "resize_widget",
            resize_widget(&mut dashboards.write(), &widget_id, size),
        );
    });

    let on_toggle_fullscreen = use_callback(move |widget_id: String| {
        warn_rejected(
            "toggle_widget_fullscreen",
            toggle_widget_fullscreen(&mut dashboards.write(), &widget_id),
        );
    });

    let on_remove = use_callback(move |widget_id: String| {
        let result = remove_widget(&mut dashboards.write(), &widget_id);
        if result.is_ok() {
            tracing::info!(widget_id = %widget_id, "Widget removed");
            if configuring.read().as_deref() == Some(widget_id.as_str()) {
                configuring.set(None);
            }
        }
        warn_rejected("remove_widget", result);
    });

    let on_configure_widget = use_callback(move |widget_id: String| {
        configuring.set(Some(widget_id));
    });

    let on_add_widget = {
        let catalog = catalog.clone();
        use_callback(move |widget_type: String| {
            let metrics = resolve_canvas_metrics();
            if metrics.is_none() {
                tracing::warn!("Dashboard canvas not found; placing widget without containment");
            }
            match add_widget(
                &mut dashboards.write(),
                &catalog,
                &widget_type,
                metrics.as_ref(),
                config.grid_size,
            ) {
                Ok(widget_id) => {
                    tracing::info!(widget_id = %widget_id, widget_type = %widget_type, "Widget added");
                }
                Err(e) => tracing::warn!("Dashboard command rejected: {}", e),
            }
        })
    };

    let on_add_dashboard = use_callback(move |_: ()| {
        let dashboard_id = add_dashboard(&mut dashboards.write(), "");
        configuring.set(None);
        tracing::info!(dashboard_id = %dashboard_id, "Dashboard added");
    });

    let on_switch_dashboard = use_callback(move |dashboard_id: String| {
        let result = switch_dashboard(&mut dashboards.write(), &dashboard_id);
        if result.is_ok() {
            configuring.set(None);
            tracing::info!(dashboard_id = %dashboard_id, "Dashboard switched");
        }
        warn_rejected("switch_dashboard", result);
    });

    let on_rename_dashboard = use_callback(move |(dashboard_id, name): (String, String)| {
        warn_rejected(
            "rename_dashboard",
            rename_dashboard(&mut dashboards.write(), &dashboard_id, &name),
        );
    });

    let on_remove_dashboard = use_callback(move |dashboard_id: String| {
        let result = remove_dashboard(&mut dashboards.write(), &dashboard_id);
        if result.is_ok() {
            configuring.set(None);
            tracing::info!(dashboard_id = %dashboard_id, "Dashboard removed");
        }
        warn_rejected("remove_dashboard", result);
    });

    let snapshot = dashboards.read().clone();
    let active = snapshot.active().cloned();
    let active_id = snapshot.active_dashboard.clone().unwrap_or_default();
    let configured = configuring.read().clone().and_then(|widget_id| {
        let widget = active
            .as_ref()?
            .widgets
            .iter()
            .find(|w| w.id == widget_id)?
            .clone();
        let definition = find_definition(&catalog, &widget.widget_type)
            .cloned()
            .unwrap_or_else(|| fallback_definition(&widget.widget_type));
        Some((widget, definition))
    });

    rsx! {
        style { {DEFAULT_TOKENS} }

        div {
            class: "dashboard-shell",
            style: "width: 100vw; height: 100dvh; display: flex; flex-direction: column; overflow: hidden;",

            header {
                class: "dashboard-toolbar",
                style: "display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding: 0.5rem 1rem; background: var(--toolbar-bg, #0f172a); border-bottom: 1px solid var(--border-color, #334155);",

                TabBar {
                    dashboards: snapshot.dashboards.clone(),
                    active_dashboard: snapshot.active_dashboard.clone(),
                    on_switch: on_switch_dashboard,
                    on_add: on_add_dashboard,
                    on_rename: on_rename_dashboard,
                    on_remove: on_remove_dashboard,
                }

                WidgetPalette {
                    catalog: catalog.clone(),
                    on_add_widget,
                }
            }

            if let Some(dashboard) = active {
                DashboardCanvas {
                    key: "{active_id}",
                    dashboard,
                    catalog: catalog.clone(),
                    config,
                    on_position_change,
                    on_size_change,
                    on_toggle_fullscreen,
                    on_remove,
                    on_configure_widget,
                }
            } else {
                MissingDashboard {}
            }
        }

        if let Some((widget, definition)) = configured {
            ConfigurePanel {
                widget,
                definition,
                on_close: move |_| configuring.set(None),
            }
        }
    }
}

const DEFAULT_TOKENS: &str = r#"
:root {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-text: #ffffff;
    --border-color: #334155;

    --toolbar-bg: var(--bg-primary);
    --widget-bg: var(--bg-secondary);
    --header-bg: var(--bg-primary);
    --dock-bg: rgba(30, 41, 59, 0.8);
    --input-bg: var(--bg-secondary);
    --hover-bg: rgba(255, 255, 255, 0.1);
    --danger-bg: #ef4444;
    --danger-text: #ef4444;

    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    margin: 0;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.widget-container:focus-visible {
    outline: 2px solid var(--accent-bg);
    outline-offset: 2px;
}

.widget-controls button:hover,
.palette-entry:hover,
.dashboard-tab:hover {
    background: var(--hover-bg);
}
"#;
