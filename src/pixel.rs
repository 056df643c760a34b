use crate::consts::{VIDEO_INT, WRITE_PIXEL};
use crate::device::{DeviceAccess, Registers};

/// column or row. mode 13h uses 0..=319 across and 0..=199 down, nothing here enforces it.
pub type Coordinate = u16;
/// palette index, 0..=255 in mode 13h.
pub type ColorIndex = u8;

/// set the pixel at (`x`, `y`) to `color` through the video service.
///
/// the adapter has to already be in a graphics mode, calling this in text mode is up to the
/// card to make sense of. values go out exactly as given, no clamping.
pub fn plot_pixel<D: DeviceAccess>(dev: &mut D, x: Coordinate, y: Coordinate, color: ColorIndex) {
    log::trace!("plot ({}, {}) = {}", x, y, color);
    dev.service_call(
        VIDEO_INT,
        Registers {
            ah: WRITE_PIXEL,
            al: color,
            cx: x,
            dx: y,
        },
    );
}
