// Domain layer - Grafana document models
pub mod dashboard;
pub mod panel;
