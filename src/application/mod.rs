// Application layer - Dashboard use cases
pub mod dashboard_publisher;
pub mod dashboard_service;
pub mod layout;
pub mod panel_builder;
