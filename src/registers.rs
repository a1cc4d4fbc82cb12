//! Register map of the TPL0102.
//!
//! Addresses and bit positions are taken from the register map in section 7.6
//! of the TPL0102 datasheet. The map is fixed for the device family; this is
//! not a general register-access layer.

/// Wiper register for channel A.
pub const WIPER_A: u8 = 0x00;

/// Wiper register for channel B.
pub const WIPER_B: u8 = 0x01;

/// Access control register, holding the shutdown bit among other flags.
pub const ACR: u8 = 0x10;

/// First general-purpose register.
///
/// The general-purpose registers have no control function and are only read
/// for diagnostics.
pub const GENERAL_PURPOSE_START: u8 = 0x02;

/// Last general-purpose register (inclusive).
pub const GENERAL_PURPOSE_END: u8 = 0x0F;

/// Number of general-purpose registers.
pub const GENERAL_PURPOSE_COUNT: usize =
    (GENERAL_PURPOSE_END - GENERAL_PURPOSE_START) as usize + 1;

/// Mask for the shutdown bit in the ACR byte.
///
/// The bit is set when the device is active. It gates both channels.
pub const SHUTDOWN_MASK: u8 = 0x40;

/// Bit index of the shutdown bit within the ACR byte.
pub const SHUTDOWN_BIT: usize = 6;

/// Highest tap position of the 64-tap ladder.
///
/// Tap positions run from 0 (minimum resistance) to this value (maximum).
pub const TAP_MAX: u8 = 63;

/// Default 7-bit I2C address of the TPL0102 with all address pins low.
pub const DEFAULT_ADDRESS: u8 = 0x50;
