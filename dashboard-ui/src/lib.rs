pub mod config;
pub mod dashboard;
pub mod fault;
pub mod interop;
pub mod layout;
pub mod widget_container;
pub mod widgets;

pub use config::{ConfigError, LayoutConfig};
pub use dashboard::*;
pub use fault::{render_guarded, RenderResult, WidgetFault};
pub use interop::*;
pub use widget_container::*;
pub use widgets::*;
