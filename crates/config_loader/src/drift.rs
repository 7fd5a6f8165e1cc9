//! Drift between a checked-in pipeline and its canonical preset.

use contracts::PipelineDescriptor;
use serde::Serialize;

/// Differences found by [`compare`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    /// In expected, absent from actual (expected order)
    pub missing: Vec<String>,
    /// In actual, absent from expected (actual order)
    pub unexpected: Vec<String>,
    /// Present in both with different options (expected order)
    pub options_changed: Vec<String>,
    /// Shared plugins run in a different relative order
    pub order_changed: bool,
}

impl DriftReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
            && self.unexpected.is_empty()
            && self.options_changed.is_empty()
            && !self.order_changed
    }
}

/// Compare `actual` against `expected`
pub fn compare(expected: &PipelineDescriptor, actual: &PipelineDescriptor) -> DriftReport {
    let mut report = DriftReport::default();

    for plugin in expected {
        match actual.get(&plugin.id) {
            None => report.missing.push(plugin.id.clone()),
            Some(other) if other.options != plugin.options => {
                report.options_changed.push(plugin.id.clone())
            }
            Some(_) => {}
        }
    }

    report.unexpected = actual
        .identifiers()
        .filter(|id| !expected.contains(id))
        .map(str::to_string)
        .collect();

    let shared_expected = expected.identifiers().filter(|id| actual.contains(id));
    let shared_actual = actual.identifiers().filter(|id| expected.contains(id));
    report.order_changed = !shared_expected.eq(shared_actual);

    report
}
