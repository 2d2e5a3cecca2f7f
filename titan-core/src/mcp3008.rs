//! MCP3008 wire protocol: command encoding and response decoding.
//!
//! The MCP3008 is an 8-channel, 10-bit successive-approximation ADC driven
//! over SPI. One conversion is a single 3-byte full-duplex exchange:
//!
//! ```text
//! out: | 0x01 | SGL/channel << 4 | 0x00 |
//! in:  | null | ......xx | xxxxxxxx |       10-bit result, MSB first
//! ```
//!
//! Encoding and decoding are kept separate from the bus exchange so they can
//! be tested without hardware.

/// ADC input channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    Ch0 = 0,
    Ch1 = 1,
    Ch2 = 2,
    Ch3 = 3,
    Ch4 = 4,
    Ch5 = 5,
    Ch6 = 6,
    Ch7 = 7,
}

impl Channel {
    /// All channels, in numeric order.
    pub const ALL: [Channel; 8] = [
        Channel::Ch0,
        Channel::Ch1,
        Channel::Ch2,
        Channel::Ch3,
        Channel::Ch4,
        Channel::Ch5,
        Channel::Ch6,
        Channel::Ch7,
    ];
}

/// Start-bit marker, first byte of every command frame.
const START: u8 = 0x01;

/// Single-ended conversion flag, OR-ed with the channel number.
const SINGLE_ENDED: u8 = 0b1000;

/// Full-scale reading at the converter's 10-bit resolution.
pub const FULL_SCALE: u16 = 0x3FF;

/// Build the 3-byte command frame selecting `channel` for a single-ended
/// conversion. The third byte is a don't-care that clocks out the low bits
/// of the result.
#[must_use]
pub const fn encode(channel: Channel) -> [u8; 3] {
    let select = (channel as u8 | SINGLE_ENDED) << 4;
    [START, select, 0x00]
}

/// Decode the 3-byte response captured while the command frame was shifted
/// out. Byte 0 is the converter's null byte and is discarded; the 10-bit
/// result straddles bytes 1 and 2, most significant bit first.
#[must_use]
pub const fn decode(frame: [u8; 3]) -> u16 {
    (((frame[1] as u16) << 8) | frame[2] as u16) & FULL_SCALE
}
