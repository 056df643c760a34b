//! bounds checked drawing for mode 13h.
//!
//! the plain pixel call hands any coordinate straight to the card. this sits one layer up for
//! callers that would rather hear about a bad coordinate than find out what the card does with it.

use thiserror::Error;

use crate::adapter::VideoAdapter;
use crate::consts::{MODE13H_HEIGHT, MODE13H_WIDTH};
use crate::device::DeviceAccess;
use crate::pixel::{ColorIndex, Coordinate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("({x}, {y}) is outside the {width}x{height} screen")]
    OutOfBounds { x: Coordinate, y: Coordinate, width: u16, height: u16 },
}

pub struct Mode13h<D> {
    adapter: VideoAdapter<D>,
}

impl<D: DeviceAccess> Mode13h<D> {
    pub const WIDTH: u16 = MODE13H_WIDTH;
    pub const HEIGHT: u16 = MODE13H_HEIGHT;

    /// switches the adapter into mode 13h first, so the pixel precondition holds.
    pub fn enter(mut adapter: VideoAdapter<D>) -> Mode13h<D> {
        adapter.enter_graphics_mode();
        Mode13h { adapter }
    }

    /// plot a pixel, refusing anything off screen. a refused pixel never reaches the device.
    pub fn plot(&mut self, x: Coordinate, y: Coordinate, color: ColorIndex) -> Result<(), CanvasError> {
        if x >= Self::WIDTH || y >= Self::HEIGHT {
            return Err(CanvasError::OutOfBounds { x, y, width: Self::WIDTH, height: Self::HEIGHT });
        }
        self.adapter.plot_pixel(x, y, color);
        Ok(())
    }

    pub fn adapter(&mut self) -> &mut VideoAdapter<D> {
        &mut self.adapter
    }

    /// back to text mode.
    pub fn leave(mut self) -> VideoAdapter<D> {
        self.adapter.enter_text_mode();
        self.adapter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::fake::FakeDevice;
    use crate::device::Registers;

    #[test]
    fn enter_sets_mode_13h() {
        let mut canvas = Mode13h::enter(VideoAdapter::new(FakeDevice::default()));
        assert_eq!(canvas.adapter().device().calls, vec![(0x10, Registers::function(0, 0x13))]);
    }

    #[test]
    fn corners_are_drawn() {
        let mut canvas = Mode13h::enter(VideoAdapter::new(FakeDevice::default()));
        assert_eq!(canvas.plot(0, 0, 0), Ok(()));
        assert_eq!(canvas.plot(319, 199, 255), Ok(()));
        assert_eq!(canvas.adapter().device().calls.len(), 3);
    }

    #[test]
    fn off_screen_is_refused_and_not_forwarded() {
        let mut canvas = Mode13h::enter(VideoAdapter::new(FakeDevice::default()));
        assert_eq!(
            canvas.plot(320, 0, 1),
            Err(CanvasError::OutOfBounds { x: 320, y: 0, width: 320, height: 200 })
        );
        assert!(canvas.plot(0, 200, 1).is_err());
        assert_eq!(canvas.adapter().device().calls.len(), 1);
    }

    #[test]
    fn leave_restores_text_mode() {
        let canvas = Mode13h::enter(VideoAdapter::new(FakeDevice::default()));
        let adapter = canvas.leave();
        let modes: Vec<u8> = adapter.device().calls.iter().map(|(_, regs)| regs.al).collect();
        assert_eq!(modes, vec![0x13, 0x03]);
    }
}
