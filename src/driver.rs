use embedded_hal::i2c::I2c;
use log::{debug, trace};

use crate::channel::Channel;
use crate::config::Config;
use crate::error::Error;
use crate::indicator::{Indicator, NoIndicator};
use crate::registers::{self, TAP_MAX};
use crate::status::StatusRegisters;
use crate::timing::{Clock, SystemClock, Timings};

/// Driver for the TPL0102 dual-channel digital potentiometer.
///
/// # Quick start
///
/// Create the driver with [`Tpl0102::new`], passing an I2C bus object and a
/// [`Config`]. The constructor reads the device's wiper registers and seeds
/// the in-memory tap positions from them, so a part that was left at some
/// position by an earlier run (or by power-retention circuitry) is picked up
/// correctly rather than assumed to be at zero.
///
/// Use [`Tpl0102::with_indicator`] if the board has channel-selection LEDs.
///
/// # State synchronisation
///
/// Every mutation writes the device's wiper register first and updates the
/// in-memory tap only once the transaction has succeeded, so a failed write
/// is never reflected as success in memory. Tap positions are always within
/// `0..=`[`TAP_MAX`].
///
/// # Exclusive access
///
/// The driver is synchronous and blocking and assumes exclusive,
/// non-reentrant access to the device's address. Callers using it from more
/// than one execution context must serialise access externally, for example
/// with a mutex around the driver.
#[derive(Debug)]
pub struct Tpl0102<I2C, IND = NoIndicator, CLK = SystemClock> {
    i2c: I2C,
    config: Config,
    indicator: IND,
    clock: CLK,
    /// Tap position per channel, A first. Invariant: each in `0..=TAP_MAX`.
    taps: [u8; 2],
    selected: Channel,
    timings: Timings,
}

impl<I2C: I2c> Tpl0102<I2C> {
    /// Set up the driver on the given bus, with no indicator LEDs.
    ///
    /// Reads the three status registers and seeds the in-memory tap positions
    /// from the live wiper values.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the device does not acknowledge the status reads.
    pub fn new(i2c: I2C, config: Config) -> Result<Self, Error<I2C::Error>> {
        Self::with_parts(i2c, config, NoIndicator, SystemClock::default())
    }
}

impl<I2C: I2c, IND: Indicator> Tpl0102<I2C, IND> {
    /// Set up the driver with channel-selection indicator LEDs.
    ///
    /// As [`Tpl0102::new`], and additionally drives the indicator to show
    /// channel A, the initial selection.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the device does not acknowledge the status reads,
    /// [`Error::Indicator`] if the initial selection cannot be shown.
    pub fn with_indicator(
        i2c: I2C,
        config: Config,
        indicator: IND,
    ) -> Result<Self, Error<I2C::Error, IND::Error>> {
        Self::with_parts(i2c, config, indicator, SystemClock::default())
    }
}

impl<I2C, IND, CLK> Tpl0102<I2C, IND, CLK>
where
    I2C: I2c,
    IND: Indicator,
    CLK: Clock,
{
    ////////////////////////////////////////////////////////////////////////////////
    // Construction
    ////////////////////////////////////////////////////////////////////////////////

    /// Set up the driver from its individual parts.
    ///
    /// This is the full constructor behind [`Tpl0102::new`] and
    /// [`Tpl0102::with_indicator`]. It is chiefly useful for supplying a
    /// custom [`Clock`], so transfer timings can be asserted on
    /// deterministically in tests.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the device does not acknowledge the status reads,
    /// [`Error::Indicator`] if the initial selection cannot be shown.
    pub fn with_parts(
        i2c: I2C,
        config: Config,
        indicator: IND,
        clock: CLK,
    ) -> Result<Self, Error<I2C::Error, IND::Error>> {
        let mut driver = Self {
            i2c,
            config,
            indicator,
            clock,
            taps: [0; 2],
            selected: Channel::A,
            timings: Timings::default(),
        };
        let status = driver.read_status_registers()?;
        driver.taps = status.seed_taps();
        debug!(
            "initialised TPL0102 at 0x{:02X} ({} Hz bus): taps A={} B={}, ACR 0x{:02X}",
            driver.config.address(),
            driver.config.bus_speed().to_hertz(),
            driver.taps[0],
            driver.taps[1],
            status.acr,
        );
        driver.indicator.select(Channel::A).map_err(Error::Indicator)?;
        Ok(driver)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Wiper movement
    ////////////////////////////////////////////////////////////////////////////////

    /// Step the channel's wiper up one tap.
    ///
    /// Saturates at [`TAP_MAX`]: at the top of the ladder this is a no-op and
    /// no bus write is issued. Returns the tap position after the call.
    ///
    /// The wall-clock duration of the wiper write is recorded in
    /// [`Tpl0102::timings`].
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the wiper write is not acknowledged; the in-memory
    /// tap is left unchanged.
    pub fn increment(&mut self, channel: Channel) -> Result<u8, Error<I2C::Error, IND::Error>> {
        let current = self.taps[channel.index()];
        if current >= TAP_MAX {
            trace!("channel {channel} already at tap {TAP_MAX}, not stepping");
            return Ok(current);
        }
        let next = current + 1;
        let started = self.clock.now();
        self.write_wiper(channel, next)?;
        self.timings.increment = Some(self.clock.now() - started);
        self.taps[channel.index()] = next;
        trace!("channel {channel} stepped up to tap {next}");
        Ok(next)
    }

    /// Step the channel's wiper down one tap.
    ///
    /// Saturates at 0: at the bottom of the ladder this is a no-op and no bus
    /// write is issued. Returns the tap position after the call.
    ///
    /// The wall-clock duration of the wiper write is recorded in
    /// [`Tpl0102::timings`].
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the wiper write is not acknowledged; the in-memory
    /// tap is left unchanged.
    pub fn decrement(&mut self, channel: Channel) -> Result<u8, Error<I2C::Error, IND::Error>> {
        let current = self.taps[channel.index()];
        if current == 0 {
            trace!("channel {channel} already at tap 0, not stepping");
            return Ok(current);
        }
        let next = current - 1;
        let started = self.clock.now();
        self.write_wiper(channel, next)?;
        self.timings.decrement = Some(self.clock.now() - started);
        self.taps[channel.index()] = next;
        trace!("channel {channel} stepped down to tap {next}");
        Ok(next)
    }

    /// Set the channel's wiper to an absolute tap position.
    ///
    /// `desired` is clamped to `0..=`[`TAP_MAX`] here rather than being
    /// range-checked by the caller; out-of-range values (including negative
    /// ones) land on the nearest end of the ladder. If the clamped target
    /// equals the current tap, no bus transaction is issued.
    ///
    /// Returns the tap value actually applied.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the wiper write is not acknowledged; the in-memory
    /// tap is left unchanged.
    pub fn set_tap(
        &mut self,
        channel: Channel,
        desired: i16,
    ) -> Result<u8, Error<I2C::Error, IND::Error>> {
        let target = desired.clamp(0, i16::from(TAP_MAX)) as u8;
        self.apply_tap(channel, target)
    }

    /// Set the channel to approximately the desired resistance, in ohms.
    ///
    /// The target tap is `round(ohms * TAP_MAX / nominal)`, rounding halves
    /// away from zero, then clamped to the ladder. The mapping assumes a
    /// linear, noiseless wiper-to-resistance relationship and ignores wiper
    /// resistance and tolerance, so treat the result as approximate. Returns
    /// the tap value actually applied; [`Tpl0102::resistance_estimate`] gives
    /// the corresponding resistance.
    ///
    /// As with [`Tpl0102::set_tap`], no bus transaction is issued when the
    /// target equals the current tap.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the wiper write is not acknowledged; the in-memory
    /// tap is left unchanged.
    pub fn set_resistance(
        &mut self,
        channel: Channel,
        ohms: f32,
    ) -> Result<u8, Error<I2C::Error, IND::Error>> {
        let target = ((ohms * f32::from(TAP_MAX)) / self.config.nominal_resistance()).round();
        let target = (target as i32).clamp(0, i32::from(TAP_MAX)) as u8;
        debug!("channel {channel} target tap {target} for {ohms} ohms");
        self.apply_tap(channel, target)
    }

    /// Turn the channel all the way down (tap 0).
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the wiper write is not acknowledged.
    pub fn zero_wiper(&mut self, channel: Channel) -> Result<u8, Error<I2C::Error, IND::Error>> {
        self.apply_tap(channel, 0)
    }

    /// Turn the channel all the way up (tap [`TAP_MAX`]).
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the wiper write is not acknowledged.
    pub fn max_wiper(&mut self, channel: Channel) -> Result<u8, Error<I2C::Error, IND::Error>> {
        self.apply_tap(channel, TAP_MAX)
    }

    /// Write `target` to the channel's wiper register unless it is already
    /// the current tap, and record the transfer duration.
    ///
    /// Callers must pass a target within `0..=TAP_MAX`.
    fn apply_tap(
        &mut self,
        channel: Channel,
        target: u8,
    ) -> Result<u8, Error<I2C::Error, IND::Error>> {
        let current = self.taps[channel.index()];
        if target == current {
            trace!("channel {channel} already at tap {target}, no write issued");
            return Ok(current);
        }
        let started = self.clock.now();
        self.write_wiper(channel, target)?;
        self.timings.set = Some(self.clock.now() - started);
        self.taps[channel.index()] = target;
        trace!("channel {channel} set to tap {target}");
        Ok(target)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Channel selection and shutdown
    ////////////////////////////////////////////////////////////////////////////////

    /// Record `channel` as the active channel and show it on the indicator.
    ///
    /// Selection is pure driver state; it does not touch the bus. With an
    /// indicator configured, exactly one of the two lines is high after this
    /// call: the line for `channel`.
    ///
    /// # Errors
    ///
    /// [`Error::Indicator`] if the indicator pins cannot be driven.
    pub fn select_channel(&mut self, channel: Channel) -> Result<(), Error<I2C::Error, IND::Error>> {
        self.indicator.select(channel).map_err(Error::Indicator)?;
        self.selected = channel;
        Ok(())
    }

    /// Set the shutdown bit in the ACR to activate or shut down the device.
    ///
    /// Reads the current ACR byte, ORs in [`SHUTDOWN_MASK`] to enable or XORs
    /// it to disable, and writes the result back. On this part the shutdown
    /// bit gates both channels; `channel` records which pot the caller was
    /// working with.
    ///
    /// [`SHUTDOWN_MASK`]: crate::registers::SHUTDOWN_MASK
    ///
    /// <div class="warning">
    ///
    /// Disabling toggles the shutdown bit with XOR, which is only correct
    /// when the bit is currently set. Calling disable twice in a row without
    /// an intervening enable puts the bit back to its active state. This
    /// matches the device family's established toggle behaviour; do not rely
    /// on repeated disables.
    ///
    /// </div>
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the ACR read or write is not acknowledged.
    pub fn set_enabled(
        &mut self,
        channel: Channel,
        enabled: bool,
    ) -> Result<(), Error<I2C::Error, IND::Error>> {
        let acr = self.read_register(registers::ACR)?;
        let value = if enabled {
            acr | registers::SHUTDOWN_MASK
        } else {
            acr ^ registers::SHUTDOWN_MASK
        };
        self.i2c
            .write(self.config.address(), &[registers::ACR, value])
            .map_err(Error::Bus)?;
        debug!(
            "channel {channel} {}: ACR 0x{acr:02X} -> 0x{value:02X}",
            if enabled { "enabled" } else { "disabled" },
        );
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Diagnostic reads
    ////////////////////////////////////////////////////////////////////////////////

    /// Read the three status registers (wiper A, wiper B, ACR).
    ///
    /// A diagnostic read: driver state is not changed, whatever the device
    /// reports.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the device does not acknowledge a read.
    pub fn read_status_registers(
        &mut self,
    ) -> Result<StatusRegisters, Error<I2C::Error, IND::Error>> {
        let status = StatusRegisters {
            wiper_a: self.read_register(registers::WIPER_A)?,
            wiper_b: self.read_register(registers::WIPER_B)?,
            acr: self.read_register(registers::ACR)?,
        };
        trace!(
            "status registers: WRA 0x{:02X}, WRB 0x{:02X}, ACR 0x{:02X}",
            status.wiper_a, status.wiper_b, status.acr,
        );
        Ok(status)
    }

    /// Read the general-purpose register range.
    ///
    /// These registers have no control function; the sweep exists for
    /// inspection and logging only.
    ///
    /// # Errors
    ///
    /// [`Error::Bus`] if the device does not acknowledge a read.
    pub fn read_general_purpose_registers(
        &mut self,
    ) -> Result<[u8; registers::GENERAL_PURPOSE_COUNT], Error<I2C::Error, IND::Error>> {
        let mut values = [0u8; registers::GENERAL_PURPOSE_COUNT];
        for (offset, value) in values.iter_mut().enumerate() {
            let register = registers::GENERAL_PURPOSE_START + offset as u8;
            *value = self.read_register(register)?;
            trace!("general-purpose register 0x{register:02X}: 0x{value:02X}");
        }
        Ok(values)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Register access
    ////////////////////////////////////////////////////////////////////////////////

    /// Read one register: pointer write without STOP, repeated-START read of
    /// a single byte.
    fn read_register(&mut self, register: u8) -> Result<u8, Error<I2C::Error, IND::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.config.address(), &[register], &mut buf)
            .map_err(Error::Bus)?;
        Ok(buf[0])
    }

    /// Write `value` to the channel's wiper register.
    fn write_wiper(&mut self, channel: Channel, value: u8) -> Result<(), Error<I2C::Error, IND::Error>> {
        self.i2c
            .write(self.config.address(), &[channel.wiper_register(), value])
            .map_err(Error::Bus)
    }
}

impl<I2C, IND, CLK> Tpl0102<I2C, IND, CLK> {
    ////////////////////////////////////////////////////////////////////////////////
    // Accessors (no bus access)
    ////////////////////////////////////////////////////////////////////////////////

    /// The channel's current in-memory tap position.
    pub fn tap(&self, channel: Channel) -> u8 {
        self.taps[channel.index()]
    }

    /// The channel's tap position as a fraction of [`TAP_MAX`], 0.0 to 1.0.
    pub fn wiper_fraction(&self, channel: Channel) -> f32 {
        f32::from(self.taps[channel.index()]) / f32::from(TAP_MAX)
    }

    /// Estimated resistance of the channel, in ohms.
    ///
    /// `(tap / TAP_MAX) * nominal` — an estimate from the linear tap model,
    /// not a measurement.
    pub fn resistance_estimate(&self, channel: Channel) -> f32 {
        self.wiper_fraction(channel) * self.config.nominal_resistance()
    }

    /// The currently selected channel.
    pub fn selected_channel(&self) -> Channel {
        self.selected
    }

    /// Durations of the most recent wiper-write transfers.
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// The driver's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tear down the driver, handing back the bus and the indicator.
    pub fn release(self) -> (I2C, IND) {
        (self.i2c, self.indicator)
    }
}
