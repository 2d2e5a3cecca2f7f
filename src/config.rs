//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters and USB identity live
//! here so they can be reviewed and tuned in one place.

use titan_core::{Axis, Buttons, Channel};

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "Titan";
pub const USB_PRODUCT: &str = "Titan Gamepad";
pub const USB_SERIAL_NUMBER: &str = "001";

/// USB HID polling interval (ms). 1 ms = 1000 Hz for lowest latency.
pub const USB_HID_POLL_MS: u8 = 1;

/// Report ID of the gamepad report, matching the report descriptor.
pub const REPORT_ID: u8 = 1;

// Timing

/// SPI clock for the MCP3008 (Hz). The converter is specified to 1.35 MHz
/// at 2.7 V; 1 MHz leaves margin.
pub const SPI_FREQ_HZ: u32 = 1_000_000;

/// Heartbeat LED half-period (us).
pub const HEARTBEAT_PERIOD_US: u64 = 500_000;

// Input mappings

/// GPIO number to HID button bit, one entry per switch.
///
/// Ideally these map 1:1 in their IDs but if a hotfix needs to be applied,
/// it can be changed. For a layout of all pins, go to
/// <https://pico.pinout.xyz/>
pub const DIGITAL_MAPPINGS: [(u8, Buttons); 16] = [
    (0, Buttons::B0),
    (1, Buttons::B1),
    (2, Buttons::B2),
    (3, Buttons::B3),
    (4, Buttons::B4),
    (5, Buttons::B5),
    (6, Buttons::B6),
    (7, Buttons::B7),
    //
    (10, Buttons::B9),
    (11, Buttons::B10),
    (12, Buttons::B11),
    //
    (13, Buttons::B13),
    (14, Buttons::B14),
    (15, Buttons::B15),
    // Out of order buttons
    (16, Buttons::B12),
    (17, Buttons::B8),
];

/// ADC channel to joystick axis.
pub const ANALOG_MAPPINGS: [(Channel, Axis); 6] = [
    (Channel::Ch0, Axis::LeftX),
    (Channel::Ch1, Axis::LeftY),
    (Channel::Ch2, Axis::LeftZ),
    (Channel::Ch3, Axis::RightX),
    (Channel::Ch4, Axis::RightY),
    (Channel::Ch5, Axis::RightZ),
];
