//! Cooperative polling loop: ties sampler, dispatcher and transport together.

use crate::dispatch::ReportDispatcher;
use crate::input::{InputError, ReportSource};
use crate::output::HidTransport;

/// Drives the input pipeline against a HID transport, one iteration at a
/// time.
///
/// Each iteration services the device stack unconditionally, then gates
/// sampling on the transport's readiness. This is the sole form of
/// backpressure: a host that is not accepting reports simply pauses
/// sampling until it is.
pub struct Scheduler<I, T> {
    source: I,
    transport: T,
    dispatcher: ReportDispatcher,
}

impl<I: ReportSource, T: HidTransport> Scheduler<I, T> {
    /// Create a scheduler from a report source and a HID transport.
    pub fn new(source: I, transport: T) -> Self {
        Self {
            source,
            transport,
            dispatcher: ReportDispatcher::new(),
        }
    }

    /// Borrow the underlying transport, for querying device state.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one iteration of the polling loop.
    ///
    /// Returns whether the transport accepted a report this iteration.
    /// Sampling errors are propagated; the previously submitted report then
    /// stays in effect until a later cycle succeeds.
    pub fn poll_once(&mut self) -> Result<bool, InputError> {
        self.transport.service();
        if !self.transport.is_ready() {
            return Ok(false);
        }

        let report = self.source.sample()?;
        Ok(self
            .dispatcher
            .submit_if_changed(&report, &mut self.transport))
    }
}
