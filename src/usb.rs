//! USB HID gamepad transport, driven by polling.

use titan_core::{GamepadReport, HidTransport};
use usb_device::bus::UsbBus;
use usb_device::device::{UsbDevice, UsbDeviceState};
use usbd_hid::hid_class::HIDClass;

use crate::config;

/// HID Gamepad Report Descriptor.
///
/// This descriptor defines a gamepad with:
/// - 16 buttons
/// - 6 axes (X/Y/Z and Rx/Ry/Rz, signed 8-bit)
///
/// The report layout must stay in sync with [`GamepadReport`].
#[rustfmt::skip]
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Gamepad)
    0xA1, 0x01, // Collection (Application)
    0x85, config::REPORT_ID, //   Report ID
    //
    // --- Buttons (16 buttons) ---
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x10, //   Usage Maximum (Button 16)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x95, 0x10, //   Report Count (16)
    0x75, 0x01, //   Report Size (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Left Stick ---
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x09, 0x30, //   Usage (X)
    0x09, 0x31, //   Usage (Y)
    0x09, 0x32, //   Usage (Z)
    0x15, 0x81, //   Logical Minimum (-127)
    0x25, 0x7F, //   Logical Maximum (127)
    0x95, 0x03, //   Report Count (3)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Right Stick ---
    0x09, 0x33, //   Usage (Rx)
    0x09, 0x34, //   Usage (Ry)
    0x09, 0x35, //   Usage (Rz)
    0x95, 0x03, //   Report Count (3)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    0xC0, // End Collection
];

/// Polled USB HID gamepad transport.
///
/// Wraps the device and its HID class; one [`service`](HidTransport::service)
/// call runs one step of the stack, exactly as the polling loop expects.
pub struct UsbHidSink<'d, B: UsbBus> {
    device: UsbDevice<'d, B>,
    hid: HIDClass<'d, B>,
}

impl<'d, B: UsbBus> UsbHidSink<'d, B> {
    /// Wrap an already-built device and HID class.
    pub fn new(device: UsbDevice<'d, B>, hid: HIDClass<'d, B>) -> Self {
        Self { device, hid }
    }
}

impl<'d, B: UsbBus> HidTransport for UsbHidSink<'d, B> {
    fn service(&mut self) {
        self.device.poll(&mut [&mut self.hid]);
    }

    fn is_ready(&self) -> bool {
        self.device.state() == UsbDeviceState::Configured
    }

    fn submit(&mut self, report: &GamepadReport) -> bool {
        let mut frame = [0u8; GamepadReport::SIZE + 1];
        frame[0] = config::REPORT_ID;
        frame[1..].copy_from_slice(&report.as_bytes());
        // WouldBlock means the endpoint still holds the previous report;
        // the dispatcher keeps the change pending and retries next cycle.
        self.hid.push_raw_input(&frame).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_declares_a_gamepad() {
        // Usage Page (Generic Desktop), Usage (Gamepad)
        assert_eq!(&REPORT_DESCRIPTOR[..4], &[0x05, 0x01, 0x09, 0x05]);
        // Balanced collection
        assert_eq!(*REPORT_DESCRIPTOR.last().unwrap(), 0xC0);
    }

    #[test]
    fn test_descriptor_report_id_matches_config() {
        let position = REPORT_DESCRIPTOR
            .windows(2)
            .position(|w| w == [0x85, config::REPORT_ID]);
        assert!(position.is_some(), "report ID item missing");
    }

    #[test]
    fn test_descriptor_field_widths_cover_the_report() {
        // 16 one-bit buttons + 6 eight-bit axes = 8 bytes, the report size.
        assert_eq!((16 * 1 + 6 * 8) / 8, GamepadReport::SIZE);
    }
}
