//! Chart Dispatch
//!
//! Turns the opaque `charts` sub-object of a response into plot calls on the
//! charting collaborator, and draws the two placeholder charts shown before
//! the first response arrives.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Target region of the case status pie
pub const STATUS_CHART: &str = "statusChart";

/// Target region of the case timeline
pub const TIMELINE_CHART: &str = "timelineChart";

/// The charting collaborator
pub trait ChartRenderer: Send + Sync {
    /// Draw `data` into the named target region, replacing what was there
    fn new_plot(&self, target: &str, data: &[Series], layout: &Layout);
}

/// Plot type of a series
///
/// Types this crate draws itself are named; any other type string is kept
/// as-is and handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    #[default]
    Scatter,
    Bar,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Pie => f.write_str("pie"),
            ChartKind::Scatter => f.write_str("scatter"),
            ChartKind::Bar => f.write_str("bar"),
            ChartKind::Other(kind) => f.write_str(kind),
        }
    }
}

/// One plotted dataset
///
/// Point arrays are kept as raw JSON so `null` gaps survive, and keys this
/// crate doesn't read (`mode`, `name`, `marker`, ...) ride along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(rename = "type", default)]
    pub kind: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Series {
    pub fn pie<V, L>(values: impl IntoIterator<Item = V>, labels: impl IntoIterator<Item = L>) -> Self
    where
        V: Into<Value>,
        L: Into<Value>,
    {
        Self {
            kind: ChartKind::Pie,
            values: Some(values.into_iter().map(Into::into).collect()),
            labels: Some(labels.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn scatter<X, Y>(x: impl IntoIterator<Item = X>, y: impl IntoIterator<Item = Y>) -> Self
    where
        X: Into<Value>,
        Y: Into<Value>,
    {
        Self {
            kind: ChartKind::Scatter,
            x: Some(x.into_iter().map(Into::into).collect()),
            y: Some(y.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// True when the series carries at least one point array
    pub fn has_points(&self) -> bool {
        self.values.is_some() || self.x.is_some() || self.y.is_some()
    }

    /// Length of the longest point array
    pub fn point_count(&self) -> usize {
        [self.values.as_ref(), self.x.as_ref(), self.y.as_ref()]
            .into_iter()
            .flatten()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }
}

/// Plot margins in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    #[serde(default)]
    pub t: u32,
    #[serde(default)]
    pub b: u32,
    #[serde(default)]
    pub l: u32,
    #[serde(default)]
    pub r: u32,
}

/// Layout descriptor passed with every plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub margin: Margin,
}

fn default_height() -> u32 {
    300
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            height: default_height(),
            margin: Margin::default(),
        }
    }
}

impl Layout {
    /// Built-in layout for a target region
    pub fn for_target(target: &str) -> Self {
        match target {
            TIMELINE_CHART => Layout {
                height: 300,
                margin: Margin {
                    t: 20,
                    b: 40,
                    l: 40,
                    r: 20,
                },
            },
            _ => Layout::default(),
        }
    }
}

/// Accepted shapes for one entry of the `charts` object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlotPayload {
    Spec {
        data: Vec<Series>,
        #[serde(default)]
        layout: Option<Layout>,
    },
    List(Vec<Series>),
    Single(Series),
}

impl PlotPayload {
    fn into_parts(self) -> (Vec<Series>, Option<Layout>) {
        match self {
            PlotPayload::Spec { data, layout } => (data, layout),
            PlotPayload::List(data) => (data, None),
            PlotPayload::Single(series) => (vec![series], None),
        }
    }
}

/// Draw the placeholder status and timeline charts
pub fn init_charts(renderer: &dyn ChartRenderer) {
    let status = Series::pie(
        [30, 20, 15, 35],
        ["PENDENTE", "VERIFICADO", "ANÁLISE", "PRIORIDADE"],
    );
    renderer.new_plot(STATUS_CHART, &[status], &Layout::for_target(STATUS_CHART));

    let timeline = Series::scatter(["Jan", "Fev", "Mar", "Abr", "Mai"], [20, 35, 45, 30, 50]);
    renderer.new_plot(
        TIMELINE_CHART,
        &[timeline],
        &Layout::for_target(TIMELINE_CHART),
    );
}

/// Hand the response's chart data to the renderer
///
/// Each key of a `charts` object names a target region. Returns the number
/// of plots drawn. Entries that do not describe series, or hold a series
/// without any point array, are skipped.
pub fn render_charts(renderer: &dyn ChartRenderer, charts: &Value) -> usize {
    let entries = match charts {
        Value::Object(entries) => entries,
        Value::Null => return 0,
        other => {
            tracing::warn!(kind = json_kind(other), "Ignoring non-object chart payload");
            return 0;
        }
    };

    let mut drawn = 0;
    for (target, payload) in entries {
        match PlotPayload::deserialize(payload) {
            Ok(plot) => {
                let (data, layout) = plot.into_parts();
                if let Some(bare) = data.iter().position(|s| !s.has_points()) {
                    tracing::warn!(%target, series = bare, "Skipping chart entry without points");
                    continue;
                }
                tracing::debug!(
                    %target,
                    series = data.len(),
                    points = data.iter().map(Series::point_count).sum::<usize>(),
                    "Drawing chart"
                );
                let layout = layout.unwrap_or_else(|| Layout::for_target(target));
                renderer.new_plot(target, &data, &layout);
                drawn += 1;
            }
            Err(e) => {
                tracing::warn!(%target, error = %e, "Skipping unreadable chart entry");
            }
        }
    }

    drawn
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
