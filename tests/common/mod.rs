// a stand-in for the adapter. every service call is recorded and status reads come off a script.
#![allow(dead_code)]

use std::collections::VecDeque;

use vgabios::{DeviceAccess, Registers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub vector: u8,
    pub regs: Registers,
}

#[derive(Default)]
pub struct ScriptedDevice {
    pub calls: Vec<Call>,
    script: VecDeque<u8>,
    pub reads: usize,
}

impl ScriptedDevice {
    /// vblank levels, turned into raw status bytes with some noise in the other bits.
    pub fn vblank_levels(levels: &[bool]) -> ScriptedDevice {
        let script = levels.iter().map(|&on| if on { 0x09 } else { 0xF1 }).collect();
        ScriptedDevice { script, ..ScriptedDevice::default() }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DeviceAccess for ScriptedDevice {
    fn service_call(&mut self, vector: u8, regs: Registers) {
        self.calls.push(Call { vector, regs });
    }

    fn read_status(&mut self, port: u16) -> u8 {
        assert_eq!(port, 0x3DA, "status read from the wrong port");
        self.reads += 1;
        match self.script.pop_front() {
            Some(byte) => byte,
            None => panic!("read status past the end of the script ({} reads)", self.reads),
        }
    }
}
