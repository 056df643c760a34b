//! syncing to the start of vertical blanking.
//!
//! everything here samples bit 3 of input status 1 and never writes anything. the waits are
//! plain spins: no yield, no timeout. they only come back because the card keeps toggling
//! the bit once a frame, if it stops the wait never ends.

use core::hint::spin_loop;

use thiserror::Error;

use crate::consts::{INPUT_STATUS_1, VBLANK_MASK};
use crate::device::DeviceAccess;

/// one sample of the retrace bit. true while the beam is in vertical blanking.
pub fn in_vblank<D: DeviceAccess>(dev: &mut D) -> bool {
    dev.read_status(INPUT_STATUS_1) & VBLANK_MASK != 0
}

/// spin until the adapter is not in a blanking interval. returns after one read if it isn't in one.
pub fn wait_for_vblank_end<D: DeviceAccess>(dev: &mut D) {
    while in_vblank(dev) {
        spin_loop();
    }
}

/// block until the next blanking interval begins.
///
/// waits for the edge, not the level. if we're called halfway through a blanking interval we
/// first let that one finish, then wait for the bit to come back on. returning on the
/// interval already in progress would leave the caller less than a full blank to draw in.
pub fn wait_for_vblank_start<D: DeviceAccess>(dev: &mut D) {
    // drain
    wait_for_vblank_end(dev);
    // arm
    while !in_vblank(dev) {
        spin_loop();
    }
    log::trace!("vblank start");
}

/// ran out of polls before the blanking interval started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no vblank start seen in {polls} status reads")]
pub struct VblankTimeout {
    pub polls: u32,
}

/// [`wait_for_vblank_start`] with a ceiling on how many times the status port is read.
///
/// this is an addition on top of the hardware behaviour: the bare wait has no way to give up.
/// both phases count against the same `max_polls` budget.
pub fn wait_for_vblank_start_within<D: DeviceAccess>(dev: &mut D, max_polls: u32) -> Result<(), VblankTimeout> {
    let mut polls = 0;
    let mut sample = |dev: &mut D| -> Result<bool, VblankTimeout> {
        if polls == max_polls {
            return Err(VblankTimeout { polls });
        }
        polls += 1;
        Ok(in_vblank(dev))
    };

    while sample(&mut *dev)? {
        spin_loop();
    }
    while !sample(&mut *dev)? {
        spin_loop();
    }
    log::trace!("vblank start");
    Ok(())
}
