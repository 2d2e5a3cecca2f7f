//! Gamepad report layout and button/axis types.

use core::ops::{BitOr, BitOrAssign, Not};

/// Button state represented as a bitfield for efficiency.
///
/// Supports up to 16 numbered buttons. Implements bitwise operators for
/// ergonomic button manipulation.
///
/// # Example
///
/// ```
/// use titan_core::Buttons;
///
/// let buttons = Buttons::B0 | Buttons::B8;
/// assert!(buttons.contains(Buttons::B0));
/// assert!(!buttons.contains(Buttons::B1));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u16);

impl Buttons {
    pub const B0: Self = Self(1 << 0);
    pub const B1: Self = Self(1 << 1);
    pub const B2: Self = Self(1 << 2);
    pub const B3: Self = Self(1 << 3);
    pub const B4: Self = Self(1 << 4);
    pub const B5: Self = Self(1 << 5);
    pub const B6: Self = Self(1 << 6);
    pub const B7: Self = Self(1 << 7);
    pub const B8: Self = Self(1 << 8);
    pub const B9: Self = Self(1 << 9);
    pub const B10: Self = Self(1 << 10);
    pub const B11: Self = Self(1 << 11);
    pub const B12: Self = Self(1 << 12);
    pub const B13: Self = Self(1 << 13);
    pub const B14: Self = Self(1 << 14);
    pub const B15: Self = Self(1 << 15);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Check if the given button(s) are set.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for Buttons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// Logical joystick axes of the gamepad.
///
/// A closed set: every axis an analog channel can map to has a report field,
/// so the sampler's dispatch over this enum is exhaustive by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    LeftX,
    LeftY,
    LeftZ,
    RightX,
    RightY,
    RightZ,
}

/// USB HID gamepad report.
///
/// Total size: 8 bytes (buttons: 2, axes: 6x1). The layout matches the HID
/// report descriptor and contains no padding, so the report can be compared
/// and transmitted as raw bytes.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(C)]
pub struct GamepadReport {
    /// Button bitfield (16 buttons, bit set = pressed)
    pub buttons: u16,
    /// Left stick X (-128 to 127)
    pub x: i8,
    /// Left stick Y (-128 to 127)
    pub y: i8,
    /// Left stick Z (-128 to 127)
    pub z: i8,
    /// Right stick X (-128 to 127)
    pub rx: i8,
    /// Right stick Y (-128 to 127)
    pub ry: i8,
    /// Right stick Z (-128 to 127)
    pub rz: i8,
}

// The dispatcher compares reports byte-for-byte; a padded layout would make
// that comparison fire on identical logical values.
const _: () = assert!(core::mem::size_of::<GamepadReport>() == GamepadReport::SIZE);

impl GamepadReport {
    /// Size of the report in bytes.
    pub const SIZE: usize = 8;

    /// Neutral/zero report: no buttons pressed, all axes centered.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: 0,
            x: 0,
            y: 0,
            z: 0,
            rx: 0,
            ry: 0,
            rz: 0,
        }
    }

    /// Convert the report to bytes.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; Self::SIZE] {
        let buttons_bytes = self.buttons.to_le_bytes();
        [
            buttons_bytes[0],
            buttons_bytes[1],
            self.x as u8,
            self.y as u8,
            self.z as u8,
            self.rx as u8,
            self.ry as u8,
            self.rz as u8,
        ]
    }

    /// Store an axis value in the field it maps to.
    #[inline]
    pub fn set_axis(&mut self, axis: Axis, value: i8) {
        match axis {
            Axis::LeftX => self.x = value,
            Axis::LeftY => self.y = value,
            Axis::LeftZ => self.z = value,
            Axis::RightX => self.rx = value,
            Axis::RightY => self.ry = value,
            Axis::RightZ => self.rz = value,
        }
    }
}
