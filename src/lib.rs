// mode switching, single pixel plotting and vblank syncing for a vga compatible adapter,
// with no os driver in between. everything goes through a `DeviceAccess` handle so the
// same code drives the real card from a kernel or a scripted fake in the tests.

#![cfg_attr(not(test), no_std)]

pub mod adapter;
pub mod canvas;
pub mod consts;
pub mod device;
#[cfg(target_arch = "x86_64")]
pub mod hardware;
pub mod mode;
pub mod pixel;
#[cfg(target_arch = "x86_64")]
pub mod serial;
pub mod vblank;

pub use adapter::VideoAdapter;
pub use device::{DeviceAccess, DeviceError, Registers};
pub use mode::{set_display_mode, ModeCode};
pub use pixel::{plot_pixel, ColorIndex, Coordinate};
pub use vblank::{in_vblank, wait_for_vblank_start, VblankTimeout};
