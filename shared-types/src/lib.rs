//! Shared types between the layout engine and the dashboard owner
//!
//! These types are used by both:
//! - the interactive layout engine (drag, resize, fullscreen)
//! - the dashboard state holder that persists committed geometry
//!
//! Serializable with serde; TypeScript bindings are exported with ts-rs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Geometry
// ============================================================================

/// Top-left offset in dashboard-local pixels (origin = canvas content box)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../dashboard-ui/src/types/generated.ts")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered widget size in pixels
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../dashboard-ui/src/types/generated.ts")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// Placement (fullscreen state machine)
// ============================================================================

/// Where a widget currently lives.
///
/// `Fullscreen` always carries the geometry captured on entry, so a fullscreen
/// widget without something to restore cannot be constructed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "mode", rename_all = "snake_case")]
#[ts(export, export_to = "../../dashboard-ui/src/types/generated.ts")]
pub enum Placement {
    Normal {
        position: Position,
        size: Size,
    },
    Fullscreen {
        position: Position,
        size: Size,
        saved_position: Position,
        saved_size: Size,
    },
}

impl Placement {
    pub fn normal(position: Position, size: Size) -> Self {
        Placement::Normal { position, size }
    }

    pub fn position(&self) -> Position {
        match *self {
            Placement::Normal { position, .. } | Placement::Fullscreen { position, .. } => position,
        }
    }

    pub fn size(&self) -> Size {
        match *self {
            Placement::Normal { size, .. } | Placement::Fullscreen { size, .. } => size,
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        matches!(self, Placement::Fullscreen { .. })
    }

    /// Geometry to restore on fullscreen exit, if fullscreen.
    pub fn saved_geometry(&self) -> Option<(Position, Size)> {
        match *self {
            Placement::Normal { .. } => None,
            Placement::Fullscreen {
                saved_position,
                saved_size,
                ..
            } => Some((saved_position, saved_size)),
        }
    }

    /// Flip between `Normal` and `Fullscreen` in one step.
    ///
    /// Entering snapshots the current geometry; leaving restores the snapshot
    /// and drops it.
    pub fn toggle_fullscreen(self) -> Self {
        match self {
            Placement::Normal { position, size } => Placement::Fullscreen {
                position,
                size,
                saved_position: position,
                saved_size: size,
            },
            Placement::Fullscreen {
                saved_position,
                saved_size,
                ..
            } => Placement::Normal {
                position: saved_position,
                size: saved_size,
            },
        }
    }

    pub fn with_position(self, next: Position) -> Self {
        match self {
            Placement::Normal { size, .. } => Placement::Normal {
                position: next,
                size,
            },
            Placement::Fullscreen {
                size,
                saved_position,
                saved_size,
                ..
            } => Placement::Fullscreen {
                position: next,
                size,
                saved_position,
                saved_size,
            },
        }
    }

    pub fn with_size(self, next: Size) -> Self {
        match self {
            Placement::Normal { position, .. } => Placement::Normal {
                position,
                size: next,
            },
            Placement::Fullscreen {
                position,
                saved_position,
                saved_size,
                ..
            } => Placement::Fullscreen {
                position,
                size: next,
                saved_position,
                saved_size,
            },
        }
    }
}

// ============================================================================
// Widgets
// ============================================================================

/// One placed panel instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../dashboard-ui/src/types/generated.ts")]
pub struct Widget {
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: String, // "clock", "notes", "weather", etc.
    pub placement: Placement,
}

impl Widget {
    pub fn new(widget_type: impl Into<String>, position: Position, size: Size) -> Self {
        Self {
            id: new_widget_id(),
            widget_type: widget_type.into(),
            placement: Placement::normal(position, size),
        }
    }

    pub fn position(&self) -> Position {
        self.placement.position()
    }

    pub fn size(&self) -> Size {
        self.placement.size()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.placement.is_fullscreen()
    }

    pub fn toggle_fullscreen(&mut self) {
        self.placement = self.placement.toggle_fullscreen();
    }
}

pub fn new_widget_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Capability flags gating which hot-zones and controls a widget renders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../dashboard-ui/src/types/generated.ts")]
pub struct WidgetFeatures {
    pub resizable: bool,
    pub fullscreenable: bool,
    pub configurable: bool,
}

impl Default for WidgetFeatures {
    fn default() -> Self {
        Self {
            resizable: true,
            fullscreenable: false,
            configurable: false,
        }
    }
}

/// Per-type widget definition for the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../dashboard-ui/src/types/generated.ts")]
pub struct WidgetDefinition {
    pub widget_type: String,
    pub name: String,
    pub icon: String, // emoji
    pub default_size: Size,
    /// Inclusive lower bound, per axis
    pub min_size: Size,
    /// Inclusive upper bound, per axis
    pub max_size: Size,
    pub features: WidgetFeatures,
}

// ============================================================================
// Dashboards
// ============================================================================

/// A named, switchable canvas of widgets ("tab")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../dashboard-ui/src/types/generated.ts")]
pub struct Dashboard {
    pub id: String,
    pub name: String,
    pub widgets: Vec<Widget>,
}

/// All dashboards and which one is showing
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, TS)]
#[ts(export, export_to = "../../dashboard-ui/src/types/generated.ts")]
pub struct DashboardState {
    pub dashboards: Vec<Dashboard>,
    pub active_dashboard: Option<String>,
}

impl DashboardState {
    pub fn active(&self) -> Option<&Dashboard> {
        let active_id = self.active_dashboard.as_deref()?;
        self.dashboards.iter().find(|d| d.id == active_id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    fn sample_widget() -> Widget {
        Widget::new("clock", Position::new(100.0, 100.0), Size::new(280.0, 160.0))
    }

    #[test]
    fn test_widget_id_generation() {
        let a = sample_widget();
        let b = sample_widget();
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 36); // UUID length
    }

    #[test]
    fn test_fullscreen_round_trip_restores_geometry() {
        let mut widget = sample_widget();
        let before = (widget.position(), widget.size());

        widget.toggle_fullscreen();
        assert!(widget.is_fullscreen());
        assert_eq!(widget.placement.saved_geometry(), Some(before));

        widget.toggle_fullscreen();
        assert!(!widget.is_fullscreen());
        assert_eq!((widget.position(), widget.size()), before);
        assert_eq!(widget.placement.saved_geometry(), None);
    }

    #[test]
    fn test_fullscreen_exit_ignores_changes_made_while_fullscreen() {
        let mut widget = sample_widget();
        widget.toggle_fullscreen();
        widget.placement = widget
            .placement
            .with_position(Position::new(0.0, 0.0))
            .with_size(Size::new(1920.0, 1080.0));

        widget.toggle_fullscreen();
        assert_eq!(widget.position(), Position::new(100.0, 100.0));
        assert_eq!(widget.size(), Size::new(280.0, 160.0));
    }

    #[test]
    fn test_placement_serialization() {
        let widget = sample_widget();
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["type"], "clock");
        assert_eq!(json["placement"]["mode"], "normal");

        let mut fullscreen = widget.clone();
        fullscreen.toggle_fullscreen();
        let json = serde_json::to_string(&fullscreen).unwrap();
        let back: Widget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fullscreen);
    }

    #[test]
    fn test_fullscreen_without_saved_geometry_is_rejected() {
        let json = r#"{
            "id": "w1",
            "type": "notes",
            "placement": {
                "mode": "fullscreen",
                "position": { "x": 0.0, "y": 0.0 },
                "size": { "width": 200.0, "height": 120.0 }
            }
        }"#;
        assert!(serde_json::from_str::<Widget>(json).is_err());
    }

    #[test]
    fn test_active_dashboard_lookup() {
        let state = DashboardState {
            dashboards: vec![Dashboard {
                id: "home".to_string(),
                name: "Home".to_string(),
                widgets: vec![sample_widget()],
            }],
            active_dashboard: Some("home".to_string()),
        };
        assert_eq!(state.active().map(|d| d.name.as_str()), Some("Home"));
        assert!(DashboardState::default().active().is_none());
    }

    #[test]
    fn export_types() {
        // The export_to attribute in each type's #[ts] macro specifies the output file
        let config = Config::default();
        Position::export(&config).unwrap();
        Size::export(&config).unwrap();
        Placement::export(&config).unwrap();
        Widget::export(&config).unwrap();
        WidgetFeatures::export(&config).unwrap();
        WidgetDefinition::export(&config).unwrap();
        Dashboard::export(&config).unwrap();
        DashboardState::export(&config).unwrap();
    }
}
