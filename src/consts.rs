//! numbers the adapter and its firmware agree on. these have to match the hardware bit for bit.

/// the bios video services live behind interrupt 0x10.
pub const VIDEO_INT: u8 = 0x10;

/// AH value for "set video mode", AL holds the mode.
pub const SET_MODE: u8 = 0x00;
/// AH value for "write graphics pixel". AL is the colour, CX the column and DX the row.
pub const WRITE_PIXEL: u8 = 0x0C;

/// 320x200, 256 colours, linear frame buffer at 0xA0000.
pub const GRAPHICS_MODE: u8 = 0x13;
/// 80x25 colour text.
pub const TEXT_MODE: u8 = 3;
/// or'd into a mode code, the firmware skips clearing video memory on the switch.
pub const NO_CLEAR: u8 = 0x80;

/// input status register 1 on a colour adapter.
pub const INPUT_STATUS_1: u16 = 0x3DA;
/// bit 3 of input status 1 is set while the beam is in vertical retrace.
pub const VBLANK_MASK: u8 = 0x08;

pub const MODE13H_WIDTH: u16 = 320;
pub const MODE13H_HEIGHT: u16 = 200;
/// physical address of the mode 13h window.
pub const MODE13H_FRAME_BUFFER: u64 = 0xA0000;
