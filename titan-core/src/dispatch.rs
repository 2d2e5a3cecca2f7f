//! Report dispatcher: suppresses redundant report submission.

use crate::output::HidTransport;
use crate::report::GamepadReport;

/// Owns the last-submitted report and forwards new ones only on change.
///
/// Comparison is byte-exact rather than field-by-field; the report layout
/// guarantees there are no padding bytes that could differ between equal
/// logical values.
pub struct ReportDispatcher {
    last: GamepadReport,
}

impl ReportDispatcher {
    /// Start from the all-zero report, matching the host's initial view of
    /// a freshly enumerated device.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: GamepadReport::neutral(),
        }
    }

    /// Submit `report` through `transport` if it differs from the last
    /// accepted one. Returns whether the transport accepted a submission.
    ///
    /// `last` is overwritten only when the transport actually takes the
    /// report. A refused submission leaves the change pending, so the next
    /// unchanged sample still differs from `last` and gets retried.
    pub fn submit_if_changed<T: HidTransport>(
        &mut self,
        report: &GamepadReport,
        transport: &mut T,
    ) -> bool {
        if report.as_bytes() == self.last.as_bytes() {
            return false;
        }
        if !transport.submit(report) {
            return false;
        }
        self.last = *report;
        true
    }

    /// The most recently submitted report.
    #[must_use]
    pub const fn last(&self) -> &GamepadReport {
        &self.last
    }
}

impl Default for ReportDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
