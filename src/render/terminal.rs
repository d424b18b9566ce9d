//! Terminal Surfaces
//!
//! Plain-text `Page` and `ChartRenderer` used by the command-line client.
//! Both keep the last rendered state and print it on demand as a snapshot.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Mutex;

use super::table::COLUMNS;
use super::{ChartRenderer, KpiSlot, Layout, Page, Series, TableRow};
use crate::model::{CellValue, DEFAULT_TITLE};

/// Page surface that renders to text
pub struct TerminalPage {
    slots: Mutex<BTreeMap<&'static str, String>>,
    rows: Mutex<Vec<TableRow>>,
    title: Mutex<String>,
}

impl Default for TerminalPage {
    fn default() -> Self {
        Self {
            slots: Mutex::new(BTreeMap::new()),
            rows: Mutex::new(Vec::new()),
            title: Mutex::new(DEFAULT_TITLE.to_string()),
        }
    }
}

impl TerminalPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current document title
    pub fn title(&self) -> String {
        lock(&self.title).clone()
    }

    /// Text snapshot of the title, KPI slots and case table
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        let title = self.title();
        let _ = writeln!(out, "{}", title);
        let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

        let slots = lock(&self.slots);
        for slot in KpiSlot::ALL {
            let value = slots.get(slot.label()).map(String::as_str).unwrap_or("-");
            let _ = writeln!(out, "{:<16} {}", slot.label(), value);
        }
        drop(slots);

        let rows = lock(&self.rows);
        let _ = writeln!(out);
        out.push_str(&format_table(&rows));
        out
    }
}

impl Page for TerminalPage {
    fn set_text(&self, slot: KpiSlot, text: &str) {
        lock(&self.slots).insert(slot.label(), text.to_string());
    }

    fn replace_table_body(&self, rows: Vec<TableRow>) {
        *lock(&self.rows) = rows;
    }

    fn set_title(&self, title: &str) {
        *lock(&self.title) = title.to_string();
    }

    fn notify(&self, message: &str) {
        eprintln!("\n  !! {}\n", message);
    }
}

/// Chart surface that keeps a one-line summary per target
#[derive(Default)]
pub struct TerminalCharts {
    plots: Mutex<BTreeMap<String, String>>,
}

impl TerminalCharts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary lines, one per target region
    pub fn snapshot(&self) -> String {
        let plots = lock(&self.plots);
        let mut out = String::new();
        for (target, summary) in plots.iter() {
            let _ = writeln!(out, "[{}] {}", target, summary);
        }
        out
    }
}

impl ChartRenderer for TerminalCharts {
    fn new_plot(&self, target: &str, data: &[Series], layout: &Layout) {
        let series: Vec<String> = data.iter().map(summarize_series).collect();
        let summary = format!("h={} {}", layout.height, series.join(" | "));
        lock(&self.plots).insert(target.to_string(), summary);
    }
}

fn summarize_series(series: &Series) -> String {
    let keys = series.labels.as_ref().or(series.x.as_ref());
    let values = series.values.as_ref().or(series.y.as_ref());

    let pairs: Vec<String> = match (keys, values) {
        (Some(keys), Some(values)) => keys
            .iter()
            .zip(values)
            .map(|(k, v)| format!("{}={}", cell_text(k), cell_text(v)))
            .collect(),
        (Some(only), None) | (None, Some(only)) => only.iter().map(cell_text).collect(),
        (None, None) => Vec::new(),
    };
    format!("{}: {}", series.kind, pairs.join(", "))
}

fn cell_text(value: &serde_json::Value) -> String {
    CellValue(value.clone()).to_string()
}

fn format_table(rows: &[TableRow]) -> String {
    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.cells.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.text.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header: Vec<String> = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad(c, *w))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());

    if rows.is_empty() {
        let _ = writeln!(out, "(no cases)");
        return out;
    }

    for row in rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(&cell.text, *w))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

// Every write replaces a whole region, so a poisoned lock still holds usable state.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Kpis, RowRecord};
    use crate::render::{init_charts, render_kpis, render_table};

    #[test]
    fn test_snapshot_contains_kpis_and_rows() {
        let page = TerminalPage::new();
        render_kpis(&page, &Kpis::new(42.0, 5.0, 37.0, 88.0));
        render_table(
            &page,
            &[RowRecord {
                id: 17_i64.into(),
                date: "2024-03-01".into(),
                status: "PENDENTE".into(),
                group: "Cobrança".into(),
                responsible: "Bruno".into(),
                resolution_time: "4h".into(),
            }],
        );

        let text = page.snapshot();
        assert!(text.starts_with(DEFAULT_TITLE));
        assert!(text.contains("Total            42"));
        assert!(text.contains("Resolution rate  88%"));
        assert!(text.contains("PENDENTE"));
        assert!(text.contains("Cobrança"));
    }

    #[test]
    fn test_empty_snapshot() {
        let page = TerminalPage::new();
        let text = page.snapshot();
        assert!(text.contains("(no cases)"));
        assert!(text.contains("Pending          -"));
    }

    #[test]
    fn test_chart_summaries() {
        let charts = TerminalCharts::new();
        init_charts(&charts);

        let text = charts.snapshot();
        assert!(text.contains("[statusChart] h=300 pie: PENDENTE=30"));
        assert!(text.contains("[timelineChart] h=300 scatter: Jan=20, Fev=35"));
    }

    #[test]
    fn test_chart_summary_keeps_gaps_and_unknown_types() {
        let charts = TerminalCharts::new();
        let payload = serde_json::json!({
            "histChart": {"type": "histogram", "x": [1, 2]},
            "gapChart": {"x": ["Jan", "Fev"], "y": [null, 6]}
        });
        crate::render::render_charts(&charts, &payload);

        let text = charts.snapshot();
        assert!(text.contains("[histChart] h=300 histogram: 1, 2"));
        assert!(text.contains("[gapChart] h=300 scatter: Jan=, Fev=6"));
    }
}
