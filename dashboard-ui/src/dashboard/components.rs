pub mod configure_panel;
pub mod dashboard_canvas;
pub mod status_views;
pub mod tab_bar;
pub mod widget_palette;
