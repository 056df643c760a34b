use crate::device::DeviceAccess;
use crate::mode::{self, ModeCode};
use crate::pixel::{self, ColorIndex, Coordinate};
use crate::vblank::{self, VblankTimeout};

/// handle to the display adapter.
///
/// build one at startup around the host's device and pass it by reference to whoever draws.
/// there's no locking in here, if more than one context needs the card, wrap the whole
/// adapter in your own mutex.
pub struct VideoAdapter<D> {
    device: D,
}

impl<D: DeviceAccess> VideoAdapter<D> {
    pub fn new(device: D) -> VideoAdapter<D> {
        VideoAdapter { device }
    }

    pub fn set_display_mode(&mut self, mode: ModeCode) {
        mode::set_display_mode(&mut self.device, mode);
    }

    /// mode 13h.
    pub fn enter_graphics_mode(&mut self) {
        self.set_display_mode(ModeCode::GRAPHICS_320X200X256);
    }

    /// back to 80x25 text.
    pub fn enter_text_mode(&mut self) {
        self.set_display_mode(ModeCode::TEXT_80X25);
    }

    /// needs a graphics mode to be active, see [`pixel::plot_pixel`].
    pub fn plot_pixel(&mut self, x: Coordinate, y: Coordinate, color: ColorIndex) {
        pixel::plot_pixel(&mut self.device, x, y, color);
    }

    pub fn in_vblank(&mut self) -> bool {
        vblank::in_vblank(&mut self.device)
    }

    pub fn wait_for_vblank_start(&mut self) {
        vblank::wait_for_vblank_start(&mut self.device);
    }

    pub fn wait_for_vblank_end(&mut self) {
        vblank::wait_for_vblank_end(&mut self.device);
    }

    pub fn wait_for_vblank_start_within(&mut self, max_polls: u32) -> Result<(), VblankTimeout> {
        vblank::wait_for_vblank_start_within(&mut self.device, max_polls)
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }
}
