//! display mode switching.

use core::fmt;

use crate::consts::{GRAPHICS_MODE, SET_MODE, TEXT_MODE, VIDEO_INT};
use crate::device::{DeviceAccess, Registers};

/// a mode number as the adapter's firmware knows it.
///
/// any byte is accepted. whether the adapter understands it is between the caller and the
/// card, an unknown code gets whatever the card does with it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ModeCode(pub u8);

impl ModeCode {
    /// mode 13h, 320x200 with a 256 entry palette.
    pub const GRAPHICS_320X200X256: ModeCode = ModeCode(GRAPHICS_MODE);
    /// mode 3, 80x25 colour text.
    pub const TEXT_80X25: ModeCode = ModeCode(TEXT_MODE);

    pub const fn code(self) -> u8 {
        self.0
    }
}

impl From<u8> for ModeCode {
    fn from(code: u8) -> ModeCode {
        ModeCode(code)
    }
}

impl fmt::Debug for ModeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModeCode({:#04x})", self.0)
    }
}

/// ask the adapter to switch to `mode`.
///
/// fire and forget: one call to the video service, nothing comes back and nothing is
/// checked afterwards. repeated calls with the same mode are all forwarded.
pub fn set_display_mode<D: DeviceAccess>(dev: &mut D, mode: ModeCode) {
    log::trace!("set mode {:?}", mode);
    dev.service_call(VIDEO_INT, Registers::function(SET_MODE, mode.code()));
}
