//! Report source trait and error types.

use crate::report::GamepadReport;

/// Error type for sampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Digital pin read failed.
    Pin,
    /// SPI exchange with the ADC failed.
    Bus,
}

/// Trait for anything that can produce a complete gamepad report.
///
/// Implementations poll all of their inputs synchronously and return a full
/// snapshot; partial reports are never exposed.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap
/// allocation.
pub trait ReportSource {
    /// Build one report from the current input state.
    fn sample(&mut self) -> Result<GamepadReport, InputError>;
}
