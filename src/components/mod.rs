//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod theme_toggle;
mod toast_host;
mod field_inputs;
mod data_table;
mod row_editor;
mod resource_panel;
mod bar_chart;
mod dashboard_panel;

pub use nav_bar::NavBar;
pub use theme_toggle::ThemeToggle;
pub use toast_host::ToastHost;
pub use field_inputs::FieldInputs;
pub use data_table::DataTable;
pub use row_editor::RowEditor;
pub use resource_panel::ResourcePanel;
pub use bar_chart::BarChart;
pub use dashboard_panel::DashboardPanel;
