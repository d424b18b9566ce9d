//! Rendering
//!
//! The controller never touches a concrete page. It writes through two
//! injected surfaces:
//!
//! - [`Page`]: text slots, the case table body, the document title and a
//!   blocking notice
//! - [`ChartRenderer`]: draws a list of series into a named target region
//!
//! Each render function overwrites its whole region, so a surface only needs
//! per-region interior mutability.
//!
//! ```text
//! DashboardResponse
//!   ├── kpis   → render_kpis   → Page::set_text (4 slots)
//!   ├── table  → render_table  → Page::replace_table_body
//!   └── charts → render_charts → ChartRenderer::new_plot (per target)
//! ```

pub mod charts;
pub mod kpis;
pub mod table;
pub mod terminal;

#[cfg(test)]
pub(crate) mod testing;

pub use charts::{
    init_charts, render_charts, ChartKind, ChartRenderer, Layout, Margin, Series,
    STATUS_CHART, TIMELINE_CHART,
};
pub use kpis::{format_kpi, format_rate, render_kpis, KpiSlot};
pub use table::{render_table, TableCell, TableRow, TABLE_BODY};
pub use terminal::{TerminalCharts, TerminalPage};

/// The page surface the dashboard renders into
pub trait Page: Send + Sync {
    /// Replace the text content of a fixed slot
    fn set_text(&self, slot: KpiSlot, text: &str);

    /// Replace the whole body of the case table
    fn replace_table_body(&self, rows: Vec<TableRow>);

    /// Set the document title
    fn set_title(&self, title: &str);

    /// Show a blocking notice to the user
    fn notify(&self, message: &str);
}
