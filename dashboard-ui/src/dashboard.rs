//! Dashboard surface: owner state, widget catalog and the shell around the canvas.

use dioxus::prelude::*;

pub mod catalog;
mod components;
mod shell;
pub mod state;

pub use shell::DashboardShell;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        DashboardShell {}
    }
}
