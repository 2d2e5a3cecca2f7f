//! Platform-agnostic input pipeline for a polled USB HID gamepad.
//!
//! This crate provides the core logic for reading a fixed set of switches
//! and joystick axes and turning them into HID gamepad reports, without any
//! platform-specific dependencies. It can be used both in embedded `no_std`
//! environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`report`]: Report layout and button/axis types ([`GamepadReport`],
//!   [`Buttons`], [`Axis`])
//! - [`mcp3008`]: MCP3008 ADC wire protocol ([`mcp3008::encode`],
//!   [`mcp3008::decode`])
//! - [`sampler`]: Builds one report per poll cycle ([`InputSampler`])
//! - [`dispatch`]: Change detection before submission ([`ReportDispatcher`])
//! - [`scheduler`]: Cooperative polling loop ([`Scheduler`])
//! - [`input`] / [`output`]: Trait seams ([`ReportSource`], [`HidTransport`])
//! - [`heartbeat`]: Non-blocking status LED timer ([`Heartbeat`])
//!
//! # Pipeline
//!
//! Each iteration of the polling loop services the USB stack, then, if the
//! device can accept a report, samples all inputs and submits the result
//! only when it differs from the previously submitted report:
//!
//! ```text
//! service USB -> is_ready? -> sample pins -> sample ADC -> submit if changed
//! ```
//!
//! # Example
//!
//! ```rust
//! use titan_core::mcp3008::{decode, encode, Channel};
//!
//! // Command frame for channel 3, single-ended
//! let command = encode(Channel::Ch3);
//! assert_eq!(command, [0x01, 0xB0, 0x00]);
//!
//! // A mid-scale response decodes to 512
//! let sample = decode([0x00, 0x02, 0x00]);
//! assert_eq!(sample, 512);
//! ```
//!
//! # Features
//!
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` outside its own tests and uses no heap
//! allocations, making it suitable for embedded systems with limited
//! resources.

#![cfg_attr(not(test), no_std)]

pub mod dispatch;
pub mod heartbeat;
pub mod input;
pub mod mcp3008;
pub mod output;
pub mod report;
pub mod sampler;
pub mod scheduler;

// Re-export main types at crate root
pub use dispatch::ReportDispatcher;
pub use heartbeat::Heartbeat;
pub use input::{InputError, ReportSource};
pub use mcp3008::Channel;
pub use output::HidTransport;
pub use report::{Axis, Buttons, GamepadReport};
pub use sampler::InputSampler;
pub use scheduler::Scheduler;
