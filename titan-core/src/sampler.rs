//! Input sampler: builds one complete gamepad report per invocation.

use embedded_hal::digital::InputPin;
use embedded_hal::spi::SpiBus;

use crate::input::{InputError, ReportSource};
use crate::mcp3008::{self, Channel};
use crate::report::{Axis, Buttons, GamepadReport};

/// Convert a raw 10-bit ADC sample to a signed 8-bit axis value.
///
/// Drops the two low bits and recenters on the converter's mid-scale
/// reading: 0 maps to -128, 512 to 0, 1023 to 127. Bits above the
/// converter's 10-bit range are ignored.
#[inline]
#[must_use]
pub const fn axis_value(sample: u16) -> i8 {
    (((sample & mcp3008::FULL_SCALE) >> 2) as i16 - 128) as i8
}

/// Polls digital button pins and the MCP3008 to produce gamepad reports.
///
/// `pins[i]` carries the button bit `buttons[i]`; both arrays are fixed at
/// construction. Analog channels are converted in mapping order, one 3-byte
/// blocking SPI exchange each.
pub struct InputSampler<SPI, P, const N: usize> {
    spi: SPI,
    pins: [P; N],
    buttons: [Buttons; N],
    axes: &'static [(Channel, Axis)],
}

impl<SPI, P, const N: usize> InputSampler<SPI, P, N>
where
    SPI: SpiBus,
    P: InputPin,
{
    /// Create a sampler from the SPI bus to the ADC, the button pins and
    /// their bit mapping, and the channel-to-axis mapping.
    pub fn new(
        spi: SPI,
        pins: [P; N],
        buttons: [Buttons; N],
        axes: &'static [(Channel, Axis)],
    ) -> Self {
        Self {
            spi,
            pins,
            buttons,
            axes,
        }
    }

    /// Read every button pin and fold the levels into a bitfield with
    /// "bit set = pressed" semantics.
    fn sample_buttons(&mut self) -> Result<u16, InputError> {
        let mut released = Buttons::NONE;
        for (pin, &button) in self.pins.iter_mut().zip(&self.buttons) {
            // The switches are wired active-low with pull-ups, so a
            // released switch reads high.
            if pin.is_high().map_err(|_| InputError::Pin)? {
                released |= button;
            }
        }
        // A single inversion at the end flips the electrical convention.
        // Bits without a mapped pin invert too; the host ignores them.
        Ok((!released).raw())
    }

    /// Convert every mapped analog channel and store the scaled values in
    /// the report.
    fn sample_axes(&mut self, report: &mut GamepadReport) -> Result<(), InputError> {
        let mut response = [0u8; 3];
        for &(channel, axis) in self.axes {
            let command = mcp3008::encode(channel);
            self.spi
                .transfer(&mut response, &command)
                .map_err(|_| InputError::Bus)?;
            report.set_axis(axis, axis_value(mcp3008::decode(response)));
        }
        Ok(())
    }
}

impl<SPI, P, const N: usize> ReportSource for InputSampler<SPI, P, N>
where
    SPI: SpiBus,
    P: InputPin,
{
    fn sample(&mut self) -> Result<GamepadReport, InputError> {
        let mut report = GamepadReport::neutral();
        report.buttons = self.sample_buttons()?;
        self.sample_axes(&mut report)?;
        Ok(report)
    }
}
