use dioxus::prelude::*;
use shared_types::{Dashboard, Position, Size, WidgetDefinition};

use crate::config::LayoutConfig;
use crate::dashboard::catalog::{fallback_definition, find_definition};
use crate::dashboard::components::status_views::EmptyDashboard;
use crate::interop::CANVAS_CLASS;
use crate::widget_container::WidgetContainer;
use crate::widgets::{render_widget_content, ContentRenderer};

/// Scrollable, padded container the widgets are positioned in. Widget
/// coordinates are relative to its content box.
#[component]
pub fn DashboardCanvas(
    dashboard: Dashboard,
    catalog: Vec<WidgetDefinition>,
    config: LayoutConfig,
    on_position_change: Callback<(String, Position)>,
    on_size_change: Callback<(String, Size)>,
    on_toggle_fullscreen: Callback<String>,
    on_remove: Callback<String>,
    on_configure_widget: Callback<String>,
) -> Element {
    let renderer = ContentRenderer(render_widget_content);
    let is_empty = dashboard.widgets.is_empty();

    rsx! {
        div {
            class: CANVAS_CLASS,
            style: "flex: 1; position: relative; overflow: auto; padding: 16px;",

            div {
                class: "dashboard-content",
                style: "position: relative; width: 100%; height: 100%;",

                if is_empty {
                    EmptyDashboard { name: dashboard.name.clone() }
                }

                for widget in dashboard.widgets.iter() {
                    WidgetContainer {
                        key: "{widget.id}",
                        widget: widget.clone(),
                        definition: find_definition(&catalog, &widget.widget_type)
                            .cloned()
                            .unwrap_or_else(|| fallback_definition(&widget.widget_type)),
                        config,
                        renderer,
                        on_position_change,
                        on_size_change,
                        on_toggle_fullscreen,
                        on_remove,
                        on_configure_widget,
                    }
                }
            }
        }
    }
}
