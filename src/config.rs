//! Driver configuration.

use crate::registers::DEFAULT_ADDRESS;

/// Nominal end-to-end resistance of the most common TPL0102 variant, in ohms.
pub(crate) const DEFAULT_NOMINAL_RESISTANCE: f32 = 100_000.0;

/// Configuration for a [`Tpl0102`] driver.
///
/// The default configuration matches a TPL0102-100 with all address pins tied
/// low on a standard-mode bus: address 0x50, 100 kΩ nominal resistance,
/// 100 kbit/s.
///
/// [`Tpl0102`]: crate::Tpl0102
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    address: u8,
    nominal_resistance: f32,
    bus_speed: BusSpeed,
}

impl Config {
    /// Configuration for a device at the given 7-bit address.
    pub fn new(address: u8) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    /// Override the nominal end-to-end resistance, in ohms.
    ///
    /// Used only for the approximate resistance-to-tap conversion. Use this
    /// for the 10 kΩ and 50 kΩ variants of the part, or to fold in a measured
    /// end-to-end value.
    pub fn with_nominal_resistance(mut self, ohms: f32) -> Self {
        self.nominal_resistance = ohms;
        self
    }

    /// Select the bus speed the device will be driven at.
    ///
    /// The driver does not configure the bus itself; the HAL that constructed
    /// the I2C peripheral owns the clock. Recording the speed here lets
    /// integration code pick it up from one place and makes it available for
    /// transfer-timing diagnostics.
    pub fn with_bus_speed(mut self, speed: BusSpeed) -> Self {
        self.bus_speed = speed;
        self
    }

    /// The device's 7-bit I2C address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// The nominal end-to-end resistance, in ohms.
    pub fn nominal_resistance(&self) -> f32 {
        self.nominal_resistance
    }

    /// The configured bus speed.
    pub fn bus_speed(&self) -> BusSpeed {
        self.bus_speed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            nominal_resistance: DEFAULT_NOMINAL_RESISTANCE,
            bus_speed: BusSpeed::default(),
        }
    }
}

/// I2C bus speed the device is driven at.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusSpeed {
    /// Bus speed of 100 kbit/s ("Standard-mode").
    #[default]
    Standard_100kbps,
    /// Bus speed of 400 kbit/s ("Fast-mode").
    ///
    /// At this speed a single wiper write completes in under 100 µs; see
    /// [`Tpl0102::timings`] for checking that budget.
    ///
    /// [`Tpl0102::timings`]: crate::Tpl0102::timings
    Fast_400kbps,
}

impl BusSpeed {
    /// The bus clock rate in hertz.
    pub fn to_hertz(self) -> u32 {
        match self {
            BusSpeed::Standard_100kbps => 100_000,
            BusSpeed::Fast_400kbps => 400_000,
        }
    }
}
