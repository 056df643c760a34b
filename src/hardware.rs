// the real card, for a kernel running in protected or long mode.
//
// from there the bios `int 0x10` handlers are out of reach (real mode code, the ivt is long gone),
// so video service calls are carried out here by hand. mode changes program the adapter through
// the vga crate's register tables and pixel writes poke the mode 13h window directly.
// status reads are a plain `in al, dx`.
//
// like the bios, a mode set wipes video memory (black pixels in 13h, blank cells in text)
// unless bit 7 of AL is set, so 0x93 and 0x83 switch mode and keep what's there.

use vga::writers::{Graphics320x200x256, GraphicsWriter, Text80x25, TextWriter};
use x86_64::instructions::port::PortReadOnly;
use x86_64::instructions::segmentation::{Segment, CS};
use x86_64::registers::rflags;

use crate::consts::{
    GRAPHICS_MODE, MODE13H_FRAME_BUFFER, MODE13H_WIDTH, NO_CLEAR, SET_MODE, TEXT_MODE, VIDEO_INT,
    WRITE_PIXEL,
};
use crate::device::{DeviceAccess, DeviceError, Registers};
use crate::mode::ModeCode;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VgaBiosConfig {
    /// where the bootloader mapped physical memory. 0 if the low megabyte is identity mapped.
    pub physical_memory_offset: u64,
    /// mode to switch to as soon as the device is up.
    pub initial_mode: Option<ModeCode>,
}

pub struct VgaBios {
    graphics: Graphics320x200x256,
    text: Text80x25,
    frame_buffer: *mut u8,
}

impl VgaBios {
    /// take hold of the adapter.
    ///
    /// fails if the cpu won't let us touch i/o ports from here (cpl above iopl), that would
    /// otherwise be a general protection fault on the first status read.
    ///
    /// the vga crate keeps its own global idea of where video memory starts (it writes font
    /// planes and clears screens through it), that global is pointed at the same mapping here.
    /// anything else using the vga crate sees the change.
    ///
    /// # Safety
    /// the mode 13h window at 0xA0000 must be mapped at `physical_memory_offset`, and nothing
    /// else may be programming the adapter while this value is alive.
    pub unsafe fn new(config: VgaBiosConfig) -> Result<VgaBios, DeviceError> {
        let (cpl, iopl) = privilege();
        if cpl > iopl {
            return Err(DeviceError::NotPrivileged { cpl, iopl });
        }

        let video_memory = video_memory_start(config.physical_memory_offset);
        vga::vga::VGA.lock().set_memory_start(video_memory as usize);

        let mut bios = VgaBios {
            graphics: Graphics320x200x256::new(),
            text: Text80x25::new(),
            frame_buffer: video_memory as *mut u8,
        };
        log::info!("vga at {:p}, ring {}", bios.frame_buffer, cpl);

        if let Some(mode) = config.initial_mode {
            crate::mode::set_display_mode(&mut bios, mode);
        }
        Ok(bios)
    }

    fn set_mode(&mut self, al: u8) {
        let (code, clear) = decode_mode(al);
        match code {
            GRAPHICS_MODE => {
                self.graphics.set_mode();
                if clear {
                    self.graphics.clear_screen(0);
                }
            }
            TEXT_MODE => {
                self.text.set_mode();
                if clear {
                    self.text.clear_screen();
                }
            }
            other => log::warn!("mode {:#04x} not supported, ignored", other),
        }
    }

    fn write_pixel(&mut self, x: u16, y: u16, color: u8) {
        // the bios does the multiply in 16 bits against segment A000, so anything past the end
        // of the screen wraps around inside the 64k window instead of leaving it.
        let offset = (u32::from(y) * u32::from(MODE13H_WIDTH) + u32::from(x)) & 0xFFFF;
        unsafe {
            core::ptr::write_volatile(self.frame_buffer.add(offset as usize), color);
        }
    }
}

impl DeviceAccess for VgaBios {
    fn service_call(&mut self, vector: u8, regs: Registers) {
        if vector != VIDEO_INT {
            log::warn!("int {:#04x} has no handler here, ignored", vector);
            return;
        }

        match regs.ah {
            SET_MODE => self.set_mode(regs.al),
            WRITE_PIXEL => self.write_pixel(regs.cx, regs.dx, regs.al),
            other => log::warn!("video function {:#04x} not supported, ignored", other),
        }
    }

    fn read_status(&mut self, port: u16) -> u8 {
        let mut port = PortReadOnly::<u8>::new(port);
        unsafe { port.read() }
    }
}

/// where the A000 window shows up in our address space.
fn video_memory_start(physical_memory_offset: u64) -> u64 {
    MODE13H_FRAME_BUFFER + physical_memory_offset
}

// AL for set-mode: low 7 bits pick the mode, bit 7 set means leave video memory alone.
// returns (mode, clear).
fn decode_mode(al: u8) -> (u8, bool) {
    (al & !NO_CLEAR, al & NO_CLEAR == 0)
}

// (current privilege level, i/o privilege level)
fn privilege() -> (u8, u8) {
    let cpl = CS::get_reg().rpl() as u8;
    let iopl = ((rflags::read_raw() >> 12) & 0b11) as u8;
    (cpl, iopl)
}
