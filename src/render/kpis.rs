//! KPI widgets

use super::Page;
use crate::model::Kpis;

/// One of the four fixed KPI display slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KpiSlot {
    Total,
    Pending,
    Resolved,
    Rate,
}

impl KpiSlot {
    pub const ALL: [KpiSlot; 4] = [
        KpiSlot::Total,
        KpiSlot::Pending,
        KpiSlot::Resolved,
        KpiSlot::Rate,
    ];

    /// Element id of the slot in the page markup
    pub fn element_id(&self) -> &'static str {
        match self {
            KpiSlot::Total => "totalCases",
            KpiSlot::Pending => "pendingCases",
            KpiSlot::Resolved => "resolvedCases",
            KpiSlot::Rate => "resolutionRate",
        }
    }

    /// Short label used by text surfaces
    pub fn label(&self) -> &'static str {
        match self {
            KpiSlot::Total => "Total",
            KpiSlot::Pending => "Pending",
            KpiSlot::Resolved => "Resolved",
            KpiSlot::Rate => "Resolution rate",
        }
    }
}

/// Display text for a count; unset and zero both show `0`
pub fn format_kpi(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v.to_string(),
        _ => "0".to_string(),
    }
}

/// Display text for the resolution rate, e.g. `88%`
pub fn format_rate(value: Option<f64>) -> String {
    format!("{}%", format_kpi(value))
}

/// Write the four KPI values into their slots
pub fn render_kpis(page: &dyn Page, kpis: &Kpis) {
    page.set_text(KpiSlot::Total, &format_kpi(kpis.total));
    page.set_text(KpiSlot::Pending, &format_kpi(kpis.pending));
    page.set_text(KpiSlot::Resolved, &format_kpi(kpis.resolved));
    page.set_text(KpiSlot::Rate, &format_rate(kpis.rate));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingPage;

    #[test]
    fn test_empty_kpis_show_zero() {
        let page = RecordingPage::default();
        render_kpis(&page, &Kpis::default());

        assert_eq!(page.slot(KpiSlot::Total).as_deref(), Some("0"));
        assert_eq!(page.slot(KpiSlot::Pending).as_deref(), Some("0"));
        assert_eq!(page.slot(KpiSlot::Resolved).as_deref(), Some("0"));
        assert_eq!(page.slot(KpiSlot::Rate).as_deref(), Some("0%"));
    }

    #[test]
    fn test_kpis_from_payload() {
        let kpis: Kpis =
            serde_json::from_str(r#"{"total": 42, "pending": 5, "resolved": 37, "rate": 88}"#)
                .unwrap();

        let page = RecordingPage::default();
        render_kpis(&page, &kpis);

        assert_eq!(page.slot(KpiSlot::Total).as_deref(), Some("42"));
        assert_eq!(page.slot(KpiSlot::Pending).as_deref(), Some("5"));
        assert_eq!(page.slot(KpiSlot::Resolved).as_deref(), Some("37"));
        assert_eq!(page.slot(KpiSlot::Rate).as_deref(), Some("88%"));
    }

    #[test]
    fn test_fractional_rate() {
        assert_eq!(format_rate(Some(87.5)), "87.5%");
        assert_eq!(format_rate(Some(0.0)), "0%");
    }

    #[test]
    fn test_element_ids() {
        let ids: Vec<_> = KpiSlot::ALL.iter().map(|s| s.element_id()).collect();
        assert_eq!(
            ids,
            vec!["totalCases", "pendingCases", "resolvedCases", "resolutionRate"]
        );
    }
}
