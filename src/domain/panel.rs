// Panel domain models
use serde::Serialize;
use std::fmt;

/// Grafana visualization types this generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    TimeSeries,
    Gauge,
    BarChart,
}

impl PanelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PanelKind::TimeSeries => "timeseries",
            PanelKind::Gauge => "gauge",
            PanelKind::BarChart => "barchart",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement and type of one panel. Coordinates are on Grafana's 24 column grid
/// and are not checked for overlap or bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSpec {
    pub kind: PanelKind,
    pub id: u32,
    pub title: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PanelSpec {
    pub fn new(kind: PanelKind, id: u32, title: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            kind,
            id,
            title: title.into(),
            x,
            y,
            w,
            h,
        }
    }

    pub fn grid_pos(&self) -> GridPos {
        GridPos {
            h: self.h,
            w: self.w,
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasourceRef {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub uid: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridPos {
    pub h: u32,
    pub w: u32,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub datasource: DatasourceRef,
    pub expr: &'static str,
    pub legend_format: &'static str,
    pub ref_id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instant: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldConfig {
    pub defaults: FieldDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefaults {
    pub unit: &'static str,
    pub no_value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    pub color: ColorConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<TimeSeriesCustom>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorConfig {
    pub mode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub steps: Vec<ThresholdStep>,
}

/// One coloring rule. The baseline step has no trigger value and serializes it as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThresholdStep {
    pub color: &'static str,
    pub value: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesCustom {
    pub axis_label: &'static str,
    pub fill_opacity: u32,
    pub line_width: u32,
}

/// Kind specific `options` block of a panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PanelOptions {
    TimeSeries(TimeSeriesOptions),
    Gauge(SingleValueOptions<GaugeDisplay>),
    BarChart(SingleValueOptions<BarChartDisplay>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesOptions {
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    pub calcs: Vec<&'static str>,
    pub display_mode: &'static str,
    pub placement: &'static str,
    pub show_legend: bool,
}

/// Options for panels that collapse each series into one value. The display
/// fields of the caller come first, followed by `reduceOptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleValueOptions<T> {
    #[serde(flatten)]
    pub display: T,
    pub reduce_options: ReduceOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReduceOptions {
    pub values: bool,
    pub calcs: Vec<&'static str>,
    pub fields: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeDisplay {
    pub orientation: &'static str,
    pub show_threshold_labels: bool,
    pub show_threshold_markers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartDisplay {
    pub orientation: &'static str,
    pub x_tick_label_rotation: i32,
    pub x_tick_label_spacing: i32,
}

/// A fully assembled Grafana panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelDocument {
    pub datasource: DatasourceRef,
    pub grid_pos: GridPos,
    pub targets: Vec<Query>,
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PanelKind,
    pub field_config: FieldConfig,
    pub options: PanelOptions,
}
