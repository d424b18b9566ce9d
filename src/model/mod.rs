//! Dashboard data model
//!
//! - **filters**: `FilterState` built from the filter form, wrapped in a `FilterRequest`
//! - **response**: `DashboardResponse` received from the backend
//! - **section**: navigation sections and their titles

pub mod filters;
pub mod response;
pub mod section;

pub use filters::{FilterForm, FilterRequest, FilterState, FormValues, FORM_DATE_FORMAT};
pub use response::{CellValue, DashboardResponse, Kpis, RowRecord};
pub use section::{Section, DEFAULT_TITLE};
