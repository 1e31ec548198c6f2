use shared_types::{
    new_widget_id, Dashboard, DashboardState, Position, Size, Widget, WidgetDefinition,
};

use crate::layout::geometry::{settle_position, snap, ContainerMetrics};

/// Cascade depth before new widgets wrap back to the top-left corner.
const CASCADE_SLOTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("dashboard not found: {0}")]
    UnknownDashboard(String),
    #[error("widget not found: {0}")]
    UnknownWidget(String),
    #[error("unknown widget type: {0}")]
    UnknownWidgetType(String),
    #[error("cannot remove the last dashboard")]
    LastDashboard,
}

pub fn initial_state(catalog: &[WidgetDefinition]) -> DashboardState {
    let mut state = DashboardState::default();
    let home = add_dashboard(&mut state, "Home");

    for (slot, widget_type) in ["clock", "notes"].into_iter().enumerate() {
        if let Some(definition) = catalog.iter().find(|d| d.widget_type == widget_type) {
            let offset = 40.0 + slot as f64 * 320.0;
            let widget = Widget::new(
                widget_type,
                Position::new(offset, 40.0),
                definition.default_size,
            );
            if let Some(dashboard) = state.dashboards.iter_mut().find(|d| d.id == home) {
                dashboard.widgets.push(widget);
            }
        }
    }

    state
}

fn active_dashboard_mut(state: &mut DashboardState) -> Result<&mut Dashboard, DashboardError> {
    let active_id = state.active_dashboard.clone().unwrap_or_default();
    state
        .dashboards
        .iter_mut()
        .find(|d| d.id == active_id)
        .ok_or(DashboardError::UnknownDashboard(active_id))
}

fn widget_mut<'a>(
    state: &'a mut DashboardState,
    widget_id: &str,
) -> Result<&'a mut Widget, DashboardError> {
    state
        .dashboards
        .iter_mut()
        .flat_map(|d| d.widgets.iter_mut())
        .find(|w| w.id == widget_id)
        .ok_or_else(|| DashboardError::UnknownWidget(widget_id.to_string()))
}

pub fn move_widget(
    state: &mut DashboardState,
    widget_id: &str,
    position: Position,
) -> Result<(), DashboardError> {
    let widget = widget_mut(state, widget_id)?;
    widget.placement = widget.placement.with_position(position);
    Ok(())
}

pub fn resize_widget(
    state: &mut DashboardState,
    widget_id: &str,
    size: Size,
) -> Result<(), DashboardError> {
    let widget = widget_mut(state, widget_id)?;
    widget.placement = widget.placement.with_size(size);
    Ok(())
}

pub fn toggle_widget_fullscreen(
    state: &mut DashboardState,
    widget_id: &str,
) -> Result<(), DashboardError> {
    widget_mut(state, widget_id)?.toggle_fullscreen();
    Ok(())
}

pub fn remove_widget(state: &mut DashboardState, widget_id: &str) -> Result<(), DashboardError> {
    for dashboard in &mut state.dashboards {
        let before = dashboard.widgets.len();
        dashboard.widgets.retain(|w| w.id != widget_id);
        if dashboard.widgets.len() != before {
            return Ok(());
        }
    }
    Err(DashboardError::UnknownWidget(widget_id.to_string()))
}

/// Place a new widget of `widget_type` on the active dashboard at the next
/// cascade slot. Returns the new widget's id.
pub fn add_widget(
    state: &mut DashboardState,
    catalog: &[WidgetDefinition],
    widget_type: &str,
    metrics: Option<&ContainerMetrics>,
    grid_size: f64,
) -> Result<String, DashboardError> {
    let definition = catalog
        .iter()
        .find(|d| d.widget_type == widget_type)
        .ok_or_else(|| DashboardError::UnknownWidgetType(widget_type.to_string()))?;
    let dashboard = active_dashboard_mut(state)?;

    let step = if grid_size > 0.0 { grid_size } else { 20.0 };
    let offset = (dashboard.widgets.len() % CASCADE_SLOTS) as f64 * step * 2.0;
    let candidate = Position::new(offset, offset);
    let size = definition.default_size;
    let position = match metrics {
        Some(metrics) => settle_position(candidate, size, metrics, grid_size),
        None => Position::new(snap(candidate.x, grid_size), snap(candidate.y, grid_size)),
    };

    let widget = Widget::new(definition.widget_type.clone(), position, size);
    let widget_id = widget.id.clone();
    dashboard.widgets.push(widget);
    Ok(widget_id)
}

/// Create a dashboard and make it active. Returns its id.
pub fn add_dashboard(state: &mut DashboardState, name: &str) -> String {
    let name = match name.trim() {
        "" => format!("Dashboard {}", state.dashboards.len() + 1),
        trimmed => trimmed.to_string(),
    };
    let id = new_widget_id();
    state.dashboards.push(Dashboard {
        id: id.clone(),
        name,
        widgets: Vec::new(),
    });
    state.active_dashboard = Some(id.clone());
    id
}

pub fn switch_dashboard(state: &mut DashboardState, dashboard_id: &str) -> Result<(), DashboardError> {
    if !state.dashboards.iter().any(|d| d.id == dashboard_id) {
        return Err(DashboardError::UnknownDashboard(dashboard_id.to_string()));
    }
    state.active_dashboard = Some(dashboard_id.to_string());
    Ok(())
}

pub fn rename_dashboard(
    state: &mut DashboardState,
    dashboard_id: &str,
    name: &str,
) -> Result<(), DashboardError> {
    let dashboard = state
        .dashboards
        .iter_mut()
        .find(|d| d.id == dashboard_id)
        .ok_or_else(|| DashboardError::UnknownDashboard(dashboard_id.to_string()))?;
    let trimmed = name.trim();
    if !trimmed.is_empty() {
        dashboard.name = trimmed.to_string();
    }
    Ok(())
}

pub fn remove_dashboard(state: &mut DashboardState, dashboard_id: &str) -> Result<(), DashboardError> {
    if !state.dashboards.iter().any(|d| d.id == dashboard_id) {
        return Err(DashboardError::UnknownDashboard(dashboard_id.to_string()));
    }
    if state.dashboards.len() == 1 {
        return Err(DashboardError::LastDashboard);
    }

    let index = state
        .dashboards
        .iter()
        .position(|d| d.id == dashboard_id)
        .unwrap_or_default();
    state.dashboards.remove(index);

    if state.active_dashboard.as_deref() == Some(dashboard_id) {
        let next = index.min(state.dashboards.len() - 1);
        state.active_dashboard = state.dashboards.get(next).map(|d| d.id.clone());
    }
    Ok(())
}
