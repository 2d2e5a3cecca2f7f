//! HID transport trait.

use crate::report::GamepadReport;

/// Interface to the USB HID device stack.
///
/// This trait abstracts the destination for gamepad reports, enabling
/// different transports (USB HID, a test double, a debug sink) to be used
/// interchangeably by the polling loop.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap
/// allocation.
pub trait HidTransport {
    /// Run one non-blocking step of the device stack.
    ///
    /// Must be called on every iteration of the polling loop, whether or
    /// not a report is sent.
    fn service(&mut self);

    /// True when the device is configured and can accept a new report.
    ///
    /// Evaluated fresh each iteration; a detached host keeps this false and
    /// thereby pauses sampling.
    fn is_ready(&self) -> bool;

    /// Queue a report for transmission.
    ///
    /// Returns whether the stack accepted the report. A busy endpoint
    /// refuses it; the caller must keep the report pending so a later poll
    /// cycle retransmits the state.
    fn submit(&mut self, report: &GamepadReport) -> bool;
}
