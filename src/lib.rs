//! Titan gamepad: polled GPIO switches and MCP3008 joystick axes exposed as
//! a USB HID gamepad on the RP2040.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico and, in a single cooperative
//! loop with no executor and no interrupts on the polling path:
//!
//! 1. Services the USB device stack (one non-blocking step per iteration)
//! 2. Reads 16 active-low switches on GPIO and six joystick axes from an
//!    MCP3008 ADC on SPI0
//! 3. Submits an 8-byte HID report, but only when it differs from the last
//!    one sent
//!
//! # Hardware Configuration
//!
//! | Function  | GPIO      | Description                    |
//! |-----------|-----------|--------------------------------|
//! | Buttons   | 0-7,10-17 | Active-low switches, pull-ups  |
//! | SPI0 SCK  | 18        | MCP3008 clock                  |
//! | SPI0 TX   | 19        | MCP3008 DIN                    |
//! | SPI0 RX   | 20        | MCP3008 DOUT                   |
//! | SPI0 CSn  | 21        | MCP3008 chip select (hardware) |
//! | LED       | 25        | On-board heartbeat LED         |
//!
//! # Modules
//!
//! - [`config`]: Pin mappings, bus speeds and USB identity
//! - [`usb`]: HID report descriptor and the polled USB transport
//!   ([`UsbHidSink`])
//!
//! The pipeline itself (sampler, dispatcher, scheduler, ADC codec) lives in
//! [`titan_core`] and is re-exported here, so consumers only need to depend
//! on this crate.
//!
//! # Features
//!
//! - **`embedded`**: Full firmware build (rp2040-hal, cortex-m runtime,
//!   defmt over RTT). Without it the crate builds on the host for testing.
//! - **`dev-panic`** (default): `panic-probe` for development
//! - **`prod-panic`**: `panic-reset` for production

#![cfg_attr(not(test), no_std)]

// Re-export core types for convenience
pub use titan_core::{
    Axis, Buttons, Channel, GamepadReport, Heartbeat, HidTransport, InputError, InputSampler,
    ReportDispatcher, ReportSource, Scheduler,
};

pub mod config;
pub mod usb;

pub use usb::{UsbHidSink, REPORT_DESCRIPTOR};
