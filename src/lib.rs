//! # Case Dashboard
//!
//! Client side of the case analytics dashboard: collects filters, fetches
//! KPIs, case rows and chart series from the analytics backend, and renders
//! them onto injected page and chart surfaces.
//!
//! ## Modules
//!
//! - [`model`]: Filter state, response payload and navigation sections
//! - [`client`]: HTTP client for `POST /api/data`
//! - [`render`]: KPI, table and chart renderers plus the surface traits
//! - [`controller`]: The filter → fetch → render cycle
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use case_dashboard::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DataClient::new(ClientConfig::default())?;
//!     let page = Arc::new(TerminalPage::new());
//!     let charts = Arc::new(TerminalCharts::new());
//!
//!     let controller = DashboardController::new(Arc::new(client), page.clone(), charts);
//!
//!     // Initial load, then a filtered reload
//!     controller.on_page_load().await;
//!     let form = FormValues {
//!         group: "Cobrança".to_string(),
//!         statuses: vec!["PENDENTE".to_string()],
//!         ..FormValues::default()
//!     };
//!     controller.on_filter_submit(&mut UiEvent::new(), &form).await;
//!
//!     println!("{}", page.snapshot());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;

pub use client::{ClientConfig, DataClient, DataSource};
pub use config::{Config, ConfigError, LoggingConfig};
pub use controller::{CycleOutcome, DashboardController, RequestTokens, UiEvent};
pub use error::{DashboardError, DashboardResult, LOAD_FAILED_NOTICE};
pub use model::{
    CellValue, DashboardResponse, FilterForm, FilterRequest, FilterState, FormValues, Kpis,
    RowRecord, Section,
};
pub use render::{
    init_charts, render_charts, render_kpis, render_table, ChartRenderer, KpiSlot, Layout, Page,
    Series, TableRow, TerminalCharts, TerminalPage,
};
