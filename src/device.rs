// the only thing the rest of the crate knows about the machine.
// a host hands us something that can make a firmware style register call and read a port,
// how it does either one is its own business.

use thiserror::Error;

/// the register file a video service call sees on entry.
/// mirrors what you'd load before an `int 0x10`, only the registers the video services read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// function selector.
    pub ah: u8,
    /// mode code for set-mode, colour for write-pixel.
    pub al: u8,
    /// column for write-pixel.
    pub cx: u16,
    /// row for write-pixel.
    pub dx: u16,
}

impl Registers {
    pub fn function(ah: u8, al: u8) -> Registers {
        Registers { ah, al, ..Registers::default() }
    }
}

/// capability to talk to the display adapter.
///
/// both calls are synchronous. `service_call` has no return value on purpose: the firmware
/// hands nothing back that the video routines here would look at.
pub trait DeviceAccess {
    /// invoke the firmware service behind `vector` with `regs` loaded, discard whatever comes back.
    fn service_call(&mut self, vector: u8, regs: Registers);

    /// one instantaneous read of an i/o port. never blocks.
    fn read_status(&mut self, port: u16) -> u8;
}

impl<T: DeviceAccess + ?Sized> DeviceAccess for &mut T {
    fn service_call(&mut self, vector: u8, regs: Registers) {
        (**self).service_call(vector, regs)
    }

    fn read_status(&mut self, port: u16) -> u8 {
        (**self).read_status(port)
    }
}

/// the host can't give us the device at all. nothing timing or mode related ends up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("port i/o not permitted: running at ring {cpl} with iopl {iopl}")]
    NotPrivileged { cpl: u8, iopl: u8 },
}
