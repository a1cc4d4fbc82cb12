//! Status registers read from the TPL0102.

use bit_field::BitField;

use crate::registers::{SHUTDOWN_BIT, TAP_MAX};

/// Snapshot of the three status registers.
///
/// Returned by [`Tpl0102::read_status_registers`]; a plain diagnostic view of
/// the device, with no effect on driver state.
///
/// [`Tpl0102::read_status_registers`]: crate::Tpl0102::read_status_registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRegisters {
    /// Raw wiper register value for channel A.
    pub wiper_a: u8,
    /// Raw wiper register value for channel B.
    pub wiper_b: u8,
    /// Raw access control register byte.
    pub acr: u8,
}

impl StatusRegisters {
    /// Whether the shutdown bit in the ACR marks the device as active.
    pub fn enabled(&self) -> bool {
        self.acr.get_bit(SHUTDOWN_BIT)
    }

    /// The wiper values clamped to the tap range, A first.
    ///
    /// The wiper registers are full bytes but the tap model runs 0 to
    /// [`TAP_MAX`]; out-of-range values read from a device left in an odd
    /// state are clamped here.
    pub(crate) fn seed_taps(&self) -> [u8; 2] {
        [self.wiper_a.min(TAP_MAX), self.wiper_b.min(TAP_MAX)]
    }
}
