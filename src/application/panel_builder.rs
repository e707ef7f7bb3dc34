// Panel builder - Turns a panel spec into a complete Grafana panel
use crate::domain::panel::{
    BarChartDisplay, ColorConfig, DatasourceRef, FieldConfig, FieldDefaults, GaugeDisplay,
    LegendOptions, PanelDocument, PanelKind, PanelOptions, PanelSpec, Query, ReduceOptions,
    SingleValueOptions, ThresholdStep, Thresholds, TimeSeriesCustom, TimeSeriesOptions,
};

pub const PROMETHEUS_DATASOURCE: DatasourceRef = DatasourceRef {
    kind: "prometheus",
    uid: "DS_PROMETHEUS_UID",
};

/// Per-instance CPU usage, dropping series that have not reported in the last 60 seconds.
pub const CPU_USAGE_EXPR: &str = "cpu_usage AND (time() - timestamp(cpu_usage) < 60)";
/// Cluster-wide average of [`CPU_USAGE_EXPR`].
pub const CLUSTER_AVERAGE_EXPR: &str = "avg(cpu_usage AND (time() - timestamp(cpu_usage) < 60))";

const INSTANCE_LEGEND: &str = "{{instance}}";
const AVERAGE_LEGEND: &str = "Average";
const PERCENT_UNIT: &str = "percent";
const GAUGE_WARNING_LEVEL: u32 = 80;

/// Everything that differs between panel kinds. Each kind builds a complete set
/// from the default query instead of patching a half-built panel.
struct KindSetup {
    targets: Vec<Query>,
    field_config: FieldConfig,
    options: PanelOptions,
}

pub fn build_panel(spec: &PanelSpec) -> PanelDocument {
    let default_query = default_query();
    let setup = match spec.kind {
        PanelKind::TimeSeries => time_series_setup(default_query),
        PanelKind::Gauge => gauge_setup(default_query),
        PanelKind::BarChart => bar_chart_setup(default_query),
    };

    tracing::debug!(id = spec.id, kind = %spec.kind, targets = setup.targets.len(), "Built panel");

    PanelDocument {
        datasource: PROMETHEUS_DATASOURCE,
        grid_pos: spec.grid_pos(),
        targets: setup.targets,
        id: spec.id,
        title: spec.title.clone(),
        kind: spec.kind,
        field_config: setup.field_config,
        options: setup.options,
    }
}

fn default_query() -> Query {
    Query {
        datasource: PROMETHEUS_DATASOURCE,
        expr: CPU_USAGE_EXPR,
        legend_format: INSTANCE_LEGEND,
        ref_id: "A",
        instant: None,
    }
}

fn field_config(color_mode: &'static str) -> FieldDefaults {
    FieldDefaults {
        unit: PERCENT_UNIT,
        no_value: 0,
        min: None,
        max: None,
        color: ColorConfig { mode: color_mode },
        thresholds: None,
        custom: None,
    }
}

fn single_value<T>(display: T) -> SingleValueOptions<T> {
    SingleValueOptions {
        display,
        reduce_options: ReduceOptions {
            values: false,
            calcs: vec!["last"],
            fields: "",
        },
    }
}

/// Per-instance lines (A) plus the cluster average (B).
fn time_series_setup(default_query: Query) -> KindSetup {
    let average = Query {
        expr: CLUSTER_AVERAGE_EXPR,
        legend_format: AVERAGE_LEGEND,
        ref_id: "B",
        ..default_query
    };

    KindSetup {
        targets: vec![default_query, average],
        field_config: FieldConfig {
            defaults: FieldDefaults {
                custom: Some(TimeSeriesCustom {
                    axis_label: "CPU Usage (%)",
                    fill_opacity: 10,
                    line_width: 2,
                }),
                ..field_config("palette-classic")
            },
        },
        options: PanelOptions::TimeSeries(TimeSeriesOptions {
            legend: LegendOptions {
                calcs: vec!["mean", "last", "max"],
                display_mode: "table",
                placement: "bottom",
                show_legend: true,
            },
        }),
    }
}

/// A single cluster-wide value, green until it crosses the warning level.
fn gauge_setup(default_query: Query) -> KindSetup {
    let average = Query {
        expr: CLUSTER_AVERAGE_EXPR,
        legend_format: AVERAGE_LEGEND,
        instant: Some(true),
        ..default_query
    };

    KindSetup {
        targets: vec![average],
        field_config: FieldConfig {
            defaults: FieldDefaults {
                min: Some(0),
                max: Some(100),
                thresholds: Some(Thresholds {
                    steps: vec![
                        ThresholdStep {
                            color: "green",
                            value: None,
                        },
                        ThresholdStep {
                            color: "red",
                            value: Some(GAUGE_WARNING_LEVEL),
                        },
                    ],
                }),
                ..field_config("thresholds")
            },
        },
        options: PanelOptions::Gauge(single_value(GaugeDisplay {
            orientation: "auto",
            show_threshold_labels: false,
            show_threshold_markers: true,
        })),
    }
}

/// One bar per instance, from the latest sample of the default query.
fn bar_chart_setup(default_query: Query) -> KindSetup {
    KindSetup {
        targets: vec![Query {
            instant: Some(true),
            ..default_query
        }],
        field_config: FieldConfig {
            defaults: field_config("palette-classic"),
        },
        options: PanelOptions::BarChart(single_value(BarChartDisplay {
            orientation: "auto",
            x_tick_label_rotation: 0,
            x_tick_label_spacing: 0,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn spec(kind: PanelKind) -> PanelSpec {
        PanelSpec::new(kind, 7, "Panel", 1, 2, 3, 4)
    }

    #[test]
    fn test_cluster_average_wraps_usage_expr() {
        assert_eq!(CLUSTER_AVERAGE_EXPR, format!("avg({})", CPU_USAGE_EXPR));
    }

    #[test]
    fn test_common_fields() {
        for kind in [PanelKind::TimeSeries, PanelKind::Gauge, PanelKind::BarChart] {
            let panel = build_panel(&spec(kind));
            assert_eq!(panel.id, 7);
            assert_eq!(panel.title, "Panel");
            assert_eq!(panel.kind, kind);
            assert_eq!(panel.grid_pos.x, 1);
            assert_eq!(panel.grid_pos.h, 4);
            assert_eq!(panel.field_config.defaults.unit, "percent");
            assert_eq!(panel.field_config.defaults.no_value, 0);
            assert!(panel.targets.iter().all(|q| q.datasource == panel.datasource));
        }
    }

    #[test]
    fn test_time_series_has_raw_and_average_queries() {
        let panel = build_panel(&spec(PanelKind::TimeSeries));
        let ref_ids: Vec<_> = panel.targets.iter().map(|q| q.ref_id).collect();
        assert_eq!(ref_ids, vec!["A", "B"]);
        assert_eq!(panel.targets[0].expr, CPU_USAGE_EXPR);
        assert_eq!(panel.targets[0].legend_format, "{{instance}}");
        assert_eq!(panel.targets[1].expr, CLUSTER_AVERAGE_EXPR);
        assert_eq!(panel.targets[1].legend_format, "Average");
        assert!(panel.targets.iter().all(|q| q.instant.is_none()));
        assert_eq!(panel.field_config.defaults.color.mode, "palette-classic");
        assert!(matches!(panel.options, PanelOptions::TimeSeries(_)));
    }

    #[test]
    fn test_gauge_is_bounded_with_thresholds() {
        let panel = build_panel(&spec(PanelKind::Gauge));
        let defaults = &panel.field_config.defaults;
        assert_eq!(defaults.min, Some(0));
        assert_eq!(defaults.max, Some(100));
        assert_eq!(defaults.color.mode, "thresholds");

        let steps = &defaults.thresholds.as_ref().unwrap().steps;
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].value, None);
        assert_eq!(steps[1].value, Some(80));

        assert_eq!(panel.targets.len(), 1);
        assert_eq!(panel.targets[0].ref_id, "A");
        assert_eq!(panel.targets[0].expr, CLUSTER_AVERAGE_EXPR);
        assert_eq!(panel.targets[0].instant, Some(true));
        assert!(matches!(panel.options, PanelOptions::Gauge(_)));
    }

    #[test]
    fn test_bar_chart_keeps_per_instance_query() {
        let panel = build_panel(&spec(PanelKind::BarChart));
        assert_eq!(panel.targets.len(), 1);
        assert_eq!(panel.targets[0].expr, CPU_USAGE_EXPR);
        assert_eq!(panel.targets[0].legend_format, "{{instance}}");
        assert_eq!(panel.targets[0].instant, Some(true));
        assert_eq!(panel.field_config.defaults.thresholds, None);
        assert!(matches!(panel.options, PanelOptions::BarChart(_)));
    }

    #[test]
    fn test_gauge_panel_json() {
        let panel = build_panel(&PanelSpec::new(PanelKind::Gauge, 1, "Average Cluster CPU", 0, 0, 8, 8));
        let expected = json!({
            "datasource": {"type": "prometheus", "uid": "DS_PROMETHEUS_UID"},
            "gridPos": {"h": 8, "w": 8, "x": 0, "y": 0},
            "targets": [{
                "datasource": {"type": "prometheus", "uid": "DS_PROMETHEUS_UID"},
                "expr": "avg(cpu_usage AND (time() - timestamp(cpu_usage) < 60))",
                "legendFormat": "Average",
                "refId": "A",
                "instant": true
            }],
            "id": 1,
            "title": "Average Cluster CPU",
            "type": "gauge",
            "fieldConfig": {
                "defaults": {
                    "unit": "percent",
                    "noValue": 0,
                    "min": 0,
                    "max": 100,
                    "color": {"mode": "thresholds"},
                    "thresholds": {
                        "steps": [
                            {"color": "green", "value": null},
                            {"color": "red", "value": 80}
                        ]
                    }
                }
            },
            "options": {
                "orientation": "auto",
                "showThresholdLabels": false,
                "showThresholdMarkers": true,
                "reduceOptions": {"values": false, "calcs": ["last"], "fields": ""}
            }
        });
        assert_eq!(serde_json::to_value(&panel).unwrap(), expected);
    }

    #[test]
    fn test_time_series_panel_json() {
        let panel = build_panel(&PanelSpec::new(PanelKind::TimeSeries, 3, "CPU Trends", 0, 8, 24, 10));
        let value = serde_json::to_value(&panel).unwrap();
        assert_eq!(
            value["fieldConfig"]["defaults"]["custom"],
            json!({"axisLabel": "CPU Usage (%)", "fillOpacity": 10, "lineWidth": 2})
        );
        assert_eq!(
            value["options"],
            json!({
                "legend": {
                    "calcs": ["mean", "last", "max"],
                    "displayMode": "table",
                    "placement": "bottom",
                    "showLegend": true
                }
            })
        );
        assert!(value["targets"][1].get("instant").is_none());
    }
}
