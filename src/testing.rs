//! Testing utilities for qbuilder
//!
//! Shared fixtures for unit tests: a small catalog and a render sink that
//! records every frame it receives.
//!
//! Only available when compiled with `cfg(test)`.

use crate::builder::{BrowserFrame, RenderSink, SummaryFrame};
use crate::catalog::Catalog;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Catalog used across unit tests
///
/// ```text
/// Sector      = Tech, Finance, Healthcare
/// Region      = US, EU
/// Asset Class = Equity, Credit
/// ```
///
/// # Panics
/// Never; the fixture is valid.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let mut map = IndexMap::new();
    map.insert(
        "Sector".to_string(),
        vec!["Tech".into(), "Finance".into(), "Healthcare".into()],
    );
    map.insert("Region".to_string(), vec!["US".into(), "EU".into()]);
    map.insert(
        "Asset Class".to_string(),
        vec!["Equity".into(), "Credit".into()],
    );
    Catalog::new(map).expect("sample catalog is valid")
}

/// A frame received by `RecordingSink`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Attributes(BrowserFrame),
    Summary(SummaryFrame),
}

/// Render sink that appends every frame to a shared log
#[derive(Debug, Default)]
pub struct RecordingSink {
    log: Rc<RefCell<Vec<Rendered>>>,
}

impl RecordingSink {
    /// Handle to the log, usable after the sink is moved into a builder
    #[must_use]
    pub fn log(&self) -> Rc<RefCell<Vec<Rendered>>> {
        Rc::clone(&self.log)
    }
}

impl RenderSink for RecordingSink {
    fn render_attributes(&mut self, frame: &BrowserFrame) {
        self.log.borrow_mut().push(Rendered::Attributes(frame.clone()));
    }

    fn render_summary(&mut self, frame: &SummaryFrame) {
        self.log.borrow_mut().push(Rendered::Summary(frame.clone()));
    }
}
