//! Case table

use super::Page;
use crate::model::RowRecord;

/// Selector of the table body in the page markup
pub const TABLE_BODY: &str = "#dataTable tbody";

/// Column headers, in cell order
pub const COLUMNS: [&str; 6] = ["ID", "Date", "Status", "Group", "Responsible", "Resolution time"];

/// One rendered cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub text: String,
    /// CSS class of the cell's badge, if any
    pub class: Option<String>,
}

impl TableCell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Build the display row for a case record
    pub fn from_record(record: &RowRecord) -> Self {
        Self {
            cells: vec![
                TableCell::plain(record.id.to_string()),
                TableCell::plain(record.date.to_string()),
                TableCell {
                    text: record.status.to_string(),
                    class: Some(record.status_class()),
                },
                TableCell::plain(record.group.to_string()),
                TableCell::plain(record.responsible.to_string()),
                TableCell::plain(record.resolution_time.to_string()),
            ],
        }
    }

    /// CSS class of the status badge
    pub fn status_class(&self) -> Option<&str> {
        self.cells.get(2).and_then(|c| c.class.as_deref())
    }
}

/// Replace the table body with one row per record, in received order
pub fn render_table(page: &dyn Page, records: &[RowRecord]) {
    let rows = records.iter().map(TableRow::from_record).collect();
    page.replace_table_body(rows);
}
