//! Dashboard payload returned by `POST /api/data`
//!
//! Every field is optional on the wire. A missing sub-object renders as its
//! empty value rather than failing the whole cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Full response body from the analytics backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub kpis: Kpis,

    /// Case rows in display order
    #[serde(default)]
    pub table: Vec<RowRecord>,

    /// Chart series, opaque to everything but the chart renderer
    #[serde(default)]
    pub charts: serde_json::Value,
}

/// The four summary scalars at the top of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub pending: Option<f64>,
    #[serde(default)]
    pub resolved: Option<f64>,
    /// Resolution rate in percent
    #[serde(default)]
    pub rate: Option<f64>,
}

impl Kpis {
    pub fn new(total: f64, pending: f64, resolved: f64, rate: f64) -> Self {
        Self {
            total: Some(total),
            pending: Some(pending),
            resolved: Some(resolved),
            rate: Some(rate),
        }
    }
}

/// One case row of the data table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    #[serde(default)]
    pub id: CellValue,
    #[serde(default)]
    pub date: CellValue,
    /// Case status such as `PENDENTE` or `VERIFICADO`
    #[serde(default)]
    pub status: CellValue,
    #[serde(default)]
    pub group: CellValue,
    /// Null for unassigned cases
    #[serde(default)]
    pub responsible: CellValue,
    #[serde(default)]
    pub resolution_time: CellValue,
}

impl RowRecord {
    /// CSS class for the status badge: `status-` plus the lowercased status
    pub fn status_class(&self) -> String {
        format!("status-{}", self.status.to_string().to_lowercase())
    }
}

/// A table cell that may arrive as a string or a number
///
/// Strings display verbatim, numbers in their JSON form, null as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellValue(pub serde_json::Value);

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue(serde_json::Value::String(s.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue(serde_json::Value::String(s))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue(serde_json::Value::from(n))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::Null => Ok(()),
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}
