use shared_types::{Size, WidgetDefinition, WidgetFeatures};

pub fn core_widgets() -> Vec<WidgetDefinition> {
    vec![
        WidgetDefinition {
            widget_type: "clock".to_string(),
            name: "Clock".to_string(),
            icon: "🕒".to_string(),
            default_size: Size::new(280.0, 160.0),
            min_size: Size::new(200.0, 120.0),
            max_size: Size::new(400.0, 200.0),
            features: WidgetFeatures {
                resizable: true,
                fullscreenable: true,
                configurable: false,
            },
        },
        WidgetDefinition {
            widget_type: "notes".to_string(),
            name: "Notes".to_string(),
            icon: "📝".to_string(),
            default_size: Size::new(320.0, 240.0),
            min_size: Size::new(200.0, 140.0),
            max_size: Size::new(800.0, 600.0),
            features: WidgetFeatures {
                resizable: true,
                fullscreenable: true,
                configurable: true,
            },
        },
        WidgetDefinition {
            widget_type: "weather".to_string(),
            name: "Weather".to_string(),
            icon: "⛅".to_string(),
            default_size: Size::new(300.0, 180.0),
            min_size: Size::new(300.0, 180.0),
            max_size: Size::new(300.0, 180.0),
            features: WidgetFeatures {
                resizable: false,
                fullscreenable: false,
                configurable: true,
            },
        },
    ]
}

pub fn find_definition<'a>(
    catalog: &'a [WidgetDefinition],
    widget_type: &str,
) -> Option<&'a WidgetDefinition> {
    catalog.iter().find(|d| d.widget_type == widget_type)
}

/// Definition used for widgets whose type is missing from the catalog; the
/// container still renders its chrome so the widget can be removed.
pub fn fallback_definition(widget_type: &str) -> WidgetDefinition {
    WidgetDefinition {
        widget_type: widget_type.to_string(),
        name: widget_type.to_string(),
        icon: "📦".to_string(),
        default_size: Size::new(240.0, 160.0),
        min_size: Size::new(120.0, 80.0),
        max_size: Size::new(1600.0, 1200.0),
        features: WidgetFeatures::default(),
    }
}
