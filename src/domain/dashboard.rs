// Dashboard domain model
use super::panel::PanelDocument;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub from: &'static str,
    pub to: &'static str,
}

/// Root of the Grafana dashboard JSON model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardDocument {
    pub editable: bool,
    pub panels: Vec<PanelDocument>,
    pub refresh: &'static str,
    pub tags: Vec<&'static str>,
    pub time: TimeRange,
    pub title: &'static str,
    pub uid: &'static str,
}

impl DashboardDocument {
    pub fn new(
        panels: Vec<PanelDocument>,
        refresh: &'static str,
        tags: Vec<&'static str>,
        time: TimeRange,
        title: &'static str,
        uid: &'static str,
    ) -> Self {
        Self {
            editable: true,
            panels,
            refresh,
            tags,
            time,
            title,
            uid,
        }
    }
}
