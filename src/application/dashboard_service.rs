// Dashboard service - Use case for assembling the dashboard document
use crate::application::panel_builder::build_panel;
use crate::domain::dashboard::{DashboardDocument, TimeRange};
use crate::domain::panel::PanelSpec;

pub const DASHBOARD_TITLE: &str = "CPU Usage Dashboard";
pub const DASHBOARD_UID: &str = "custom-dashboard";
const REFRESH_INTERVAL: &str = "10s";
const TAGS: [&str; 2] = ["cpu_usage", "custom"];

/// Builds one panel per spec, keeping the input order.
pub fn assemble_dashboard(specs: &[PanelSpec]) -> DashboardDocument {
    let panels = specs.iter().map(build_panel).collect();

    DashboardDocument::new(
        panels,
        REFRESH_INTERVAL,
        TAGS.to_vec(),
        TimeRange {
            from: "now-5m",
            to: "now",
        },
        DASHBOARD_TITLE,
        DASHBOARD_UID,
    )
}

/// Pretty-printed JSON. Keys appear in declaration order, so equal input gives equal bytes.
pub fn render_dashboard(dashboard: &DashboardDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(dashboard)
}
