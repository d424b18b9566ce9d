//! In-memory surfaces for tests

use std::collections::HashMap;
use std::sync::Mutex;

use super::{ChartRenderer, KpiSlot, Layout, Page, Series, TableRow};

/// A recorded `new_plot` call
pub type Plot = (String, Vec<Series>, Layout);

#[derive(Default)]
pub struct RecordingPage {
    slots: Mutex<HashMap<KpiSlot, String>>,
    table: Mutex<Vec<TableRow>>,
    title: Mutex<Option<String>>,
    notices: Mutex<Vec<String>>,
}

impl RecordingPage {
    pub fn slot(&self, slot: KpiSlot) -> Option<String> {
        self.slots.lock().unwrap().get(&slot).cloned()
    }

    pub fn table(&self) -> Vec<TableRow> {
        self.table.lock().unwrap().clone()
    }

    pub fn title(&self) -> Option<String> {
        self.title.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Page for RecordingPage {
    fn set_text(&self, slot: KpiSlot, text: &str) {
        self.slots.lock().unwrap().insert(slot, text.to_string());
    }

    fn replace_table_body(&self, rows: Vec<TableRow>) {
        *self.table.lock().unwrap() = rows;
    }

    fn set_title(&self, title: &str) {
        *self.title.lock().unwrap() = Some(title.to_string());
    }

    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingCharts {
    plots: Mutex<Vec<Plot>>,
}

impl RecordingCharts {
    pub fn plots(&self) -> Vec<Plot> {
        self.plots.lock().unwrap().clone()
    }
}

impl ChartRenderer for RecordingCharts {
    fn new_plot(&self, target: &str, data: &[Series], layout: &Layout) {
        self.plots
            .lock()
            .unwrap()
            .push((target.to_string(), data.to_vec(), *layout));
    }
}
