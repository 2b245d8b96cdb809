//! GUI module - User interface components

mod app;
mod chart_tabs;
mod filter_panel;

pub use app::FareViewApp;
pub use chart_tabs::ChartTabs;
pub use filter_panel::{FilterPanel, FilterPanelAction};
