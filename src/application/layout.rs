// Panel layout of the CPU usage dashboard
use crate::domain::panel::{PanelKind, PanelSpec};

/// Gauge and bar chart side by side on the first row, full width trend below.
pub fn cpu_usage_layout() -> Vec<PanelSpec> {
    vec![
        PanelSpec::new(PanelKind::Gauge, 1, "Average Cluster CPU", 0, 0, 8, 8),
        PanelSpec::new(PanelKind::BarChart, 2, "CPU per Server", 8, 0, 16, 8),
        PanelSpec::new(PanelKind::TimeSeries, 3, "CPU Trends", 0, 8, 24, 10),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID_COLUMNS: u32 = 24;

    #[test]
    fn test_layout_fits_grid() {
        for spec in cpu_usage_layout() {
            assert!(spec.x + spec.w <= GRID_COLUMNS, "panel {} overflows the grid", spec.id);
        }
    }

    #[test]
    fn test_layout_ids_are_unique() {
        let mut ids: Vec<_> = cpu_usage_layout().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
