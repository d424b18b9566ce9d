//! Filter state sent to the analytics backend
//!
//! A `FilterState` is rebuilt from the form controls on every submit and
//! serialized as the JSON body of `POST /api/data`.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Date format used by the form's date inputs and on the wire
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Read access to the filter form controls
///
/// Mirrors the page's `groupSelect`, `statusSelect`, `startDate` and
/// `endDate` controls. Values are raw strings exactly as the controls hold
/// them; blank means "not set".
pub trait FilterForm {
    /// Current value of the group selector
    fn group(&self) -> String;

    /// Values of the selected status options, in option order
    fn selected_statuses(&self) -> Vec<String>;

    /// Raw value of the start date input
    fn start_date(&self) -> String;

    /// Raw value of the end date input
    fn end_date(&self) -> String;
}

/// Plain snapshot of the form controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub group: String,
    pub statuses: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

impl FilterForm for FormValues {
    fn group(&self) -> String {
        self.group.clone()
    }

    fn selected_statuses(&self) -> Vec<String> {
        self.statuses.clone()
    }

    fn start_date(&self) -> String {
        self.start_date.clone()
    }

    fn end_date(&self) -> String {
        self.end_date.clone()
    }
}

/// Constraint set narrowing which records the backend returns
///
/// Always serializes all four keys. Blank controls go out as `""` and date
/// strings are passed through exactly as the form holds them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub group: String,

    /// Selected statuses; may be empty
    #[serde(rename = "status")]
    pub statuses: Vec<String>,

    #[serde(rename = "startDate")]
    pub start_date: String,

    #[serde(rename = "endDate")]
    pub end_date: String,
}

impl FilterState {
    /// Build a filter set from the current form controls
    ///
    /// Nothing is enforced. A date that doesn't read as `YYYY-MM-DD` is
    /// logged and still sent unchanged.
    pub fn from_form(form: &dyn FilterForm) -> Self {
        let filters = Self {
            group: form.group(),
            statuses: form.selected_statuses(),
            start_date: form.start_date(),
            end_date: form.end_date(),
        };
        check_form_date("startDate", &filters.start_date);
        check_form_date("endDate", &filters.end_date);
        filters
    }

    /// True when no field constrains the query
    pub fn is_unconstrained(&self) -> bool {
        self.group.trim().is_empty()
            && self.statuses.is_empty()
            && self.start_date.trim().is_empty()
            && self.end_date.trim().is_empty()
    }

    /// Builder method: set the group
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Builder method: add a status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.statuses.push(status.into());
        self
    }

    /// Builder method: set the date range
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start.format(FORM_DATE_FORMAT).to_string();
        self.end_date = end.format(FORM_DATE_FORMAT).to_string();
        self
    }
}

/// Body of one `POST /api/data` call
///
/// The page-load fetch sends `{}`; a form submit sends the full filter set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterRequest {
    #[default]
    Unfiltered,
    Submitted(FilterState),
}

impl FilterRequest {
    /// Submitted filter set, if any
    pub fn filters(&self) -> Option<&FilterState> {
        match self {
            FilterRequest::Unfiltered => None,
            FilterRequest::Submitted(filters) => Some(filters),
        }
    }

    pub fn group(&self) -> Option<&str> {
        self.filters().map(|f| f.group.as_str())
    }
}

impl From<FilterState> for FilterRequest {
    fn from(filters: FilterState) -> Self {
        FilterRequest::Submitted(filters)
    }
}

impl Serialize for FilterRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterRequest::Unfiltered => serializer.serialize_map(Some(0))?.end(),
            FilterRequest::Submitted(filters) => filters.serialize(serializer),
        }
    }
}

fn check_form_date(field: &str, raw: &str) {
    let raw = raw.trim();
    if raw.is_empty() {
        return;
    }

    if let Err(e) = NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT) {
        tracing::warn!(field, value = raw, error = %e, "Sending unreadable filter date as typed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(group: &str, statuses: &[&str], start: &str, end: &str) -> FormValues {
        FormValues {
            group: group.to_string(),
            statuses: statuses.iter().map(|s| s.to_string()).collect(),
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn test_submitted_filter_body() {
        let filters = FilterState::from_form(&form("X", &["A", "B"], "2024-01-01", "2024-01-31"));

        let body = serde_json::to_value(FilterRequest::from(filters)).unwrap();
        assert_eq!(
            body,
            json!({
                "group": "X",
                "status": ["A", "B"],
                "startDate": "2024-01-01",
                "endDate": "2024-01-31"
            })
        );
    }

    #[test]
    fn test_page_load_filter_is_empty_object() {
        let body = serde_json::to_string(&FilterRequest::Unfiltered).unwrap();
        assert_eq!(body, "{}");
        assert_eq!(FilterRequest::default().group(), None);
        assert!(FilterState::default().is_unconstrained());
    }

    #[test]
    fn test_blank_form_keeps_status_array() {
        let filters = FilterState::from_form(&form("", &[], "", ""));

        assert!(filters.is_unconstrained());
        assert_eq!(
            serde_json::to_value(FilterRequest::from(filters)).unwrap(),
            json!({ "group": "", "status": [], "startDate": "", "endDate": "" })
        );
    }

    #[test]
    fn test_unreadable_date_is_passed_through() {
        let filters = FilterState::from_form(&form("G1", &["PENDENTE"], "31/01/2024", "2024-02-29"));

        assert_eq!(filters.start_date, "31/01/2024");
        assert_eq!(filters.end_date, "2024-02-29");
        assert_eq!(
            serde_json::to_value(&filters).unwrap()["startDate"],
            json!("31/01/2024")
        );
    }

    #[test]
    fn test_between_formats_dates() {
        let filters = FilterState::default().between(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        );
        assert_eq!(filters.start_date, "2024-03-01");
        assert_eq!(filters.end_date, "2024-03-09");
    }

    #[test]
    fn test_status_order_preserved() {
        let filters = FilterState::default().status("VERIFICADO").status("ANÁLISE").status("PENDENTE");
        assert_eq!(filters.statuses, vec!["VERIFICADO", "ANÁLISE", "PENDENTE"]);
    }
}
