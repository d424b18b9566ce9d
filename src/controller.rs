//! Dashboard Controller
//!
//! Mediates between user input and the two external collaborators: the
//! analytics backend and the page/chart surfaces.
//!
//! ## Data Flow
//!
//! 1. Page load or filter submit produces a `FilterRequest`
//! 2. `fetch_and_render` issues a request token and posts the request body
//! 3. On success, if the token is still the latest issued, the response is
//!    fanned out to the KPI, table and chart renderers
//! 4. On failure, the error is logged and a blocking notice is shown
//!
//! Overlapping cycles are allowed. Only the most recently issued one may
//! render, so the screen always reflects the last filter the user asked for.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::client::DataSource;
use crate::error::{DashboardError, LOAD_FAILED_NOTICE};
use crate::model::{DashboardResponse, FilterForm, FilterRequest, FilterState, Section};
use crate::render::{init_charts, render_charts, render_kpis, render_table, ChartRenderer, Page};

/// A user interaction whose default browser action can be suppressed
#[derive(Debug, Default)]
pub struct UiEvent {
    default_prevented: bool,
}

impl UiEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Monotonic sequence of request tokens
#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: AtomicU64,
}

impl RequestTokens {
    /// Issue the next token; it becomes the latest
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True if no token was issued after this one
    pub fn is_latest(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }

    /// Most recently issued token (0 before the first request)
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

/// How a fetch cycle ended
#[derive(Debug)]
pub enum CycleOutcome {
    /// Response rendered
    Rendered { rows: usize, charts: usize },
    /// A newer request was issued before this one resolved
    Superseded,
    /// Request or parse failure; the notice was shown
    Failed(DashboardError),
}

impl CycleOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, CycleOutcome::Rendered { .. })
    }
}

/// Drives the filter → fetch → render cycle
#[derive(Clone)]
pub struct DashboardController {
    source: Arc<dyn DataSource>,
    page: Arc<dyn Page>,
    charts: Arc<dyn ChartRenderer>,
    tokens: Arc<RequestTokens>,
}

impl DashboardController {
    pub fn new(
        source: Arc<dyn DataSource>,
        page: Arc<dyn Page>,
        charts: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            source,
            page,
            charts,
            tokens: Arc::new(RequestTokens::default()),
        }
    }

    /// Request tokens issued so far
    pub fn tokens(&self) -> &RequestTokens {
        &self.tokens
    }

    /// Draw the placeholder charts, then load with no filters
    pub fn on_page_load(&self) -> impl Future<Output = CycleOutcome> + Send + 'static {
        tracing::info!("Dashboard loaded");
        init_charts(self.charts.as_ref());
        self.fetch_and_render(FilterRequest::Unfiltered)
    }

    /// Handle a submit of the filter form
    pub fn on_filter_submit(
        &self,
        event: &mut UiEvent,
        form: &dyn FilterForm,
    ) -> impl Future<Output = CycleOutcome> + Send + 'static {
        event.prevent_default();
        let filters = FilterState::from_form(form);
        tracing::info!(?filters, "Filter submitted");
        self.fetch_and_render(filters.into())
    }

    /// Handle a click on a navigation link carrying `data-section`
    pub fn on_nav_click(&self, event: &mut UiEvent, section_key: &str) -> Section {
        event.prevent_default();
        let section = Section::from_key(section_key);
        self.update_page_title(section);
        section
    }

    /// Set the document title for a section
    pub fn update_page_title(&self, section: Section) {
        self.page.set_title(section.title());
    }

    /// Fetch data for `request` and render it
    ///
    /// The request token is issued here, at call time, so issue order is
    /// call order even if the returned futures are polled out of order.
    pub fn fetch_and_render(
        &self,
        request: FilterRequest,
    ) -> impl Future<Output = CycleOutcome> + Send + 'static {
        let token = self.tokens.issue();
        let span = tracing::info_span!("fetch_cycle", request_id = %Uuid::new_v4(), token);
        let this = self.clone();

        async move { this.run_cycle(token, request).await }.instrument(span)
    }

    async fn run_cycle(self, token: u64, request: FilterRequest) -> CycleOutcome {
        let result = self.source.fetch(&request).await;

        if !self.tokens.is_latest(token) {
            tracing::debug!(
                latest = self.tokens.latest(),
                failed = result.is_err(),
                "Discarding superseded response"
            );
            return CycleOutcome::Superseded;
        }

        match result {
            Ok(data) => self.render(&data),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load dashboard data");
                self.page.notify(LOAD_FAILED_NOTICE);
                CycleOutcome::Failed(e)
            }
        }
    }

    /// Fan a response out to the KPI, table and chart renderers
    pub fn render(&self, data: &DashboardResponse) -> CycleOutcome {
        render_kpis(self.page.as_ref(), &data.kpis);
        render_table(self.page.as_ref(), &data.table);
        let charts = render_charts(self.charts.as_ref(), &data.charts);

        tracing::info!(rows = data.table.len(), charts, "Dashboard rendered");
        CycleOutcome::Rendered {
            rows: data.table.len(),
            charts,
        }
    }
}
