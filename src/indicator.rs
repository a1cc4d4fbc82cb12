//! Channel-selection indicator outputs.
//!
//! The TPL0102 breakout boards this driver grew up with carry a pair of LEDs
//! showing which channel is being driven. The [`Indicator`] trait is the seam
//! for that: [`LedPair`] drives two [`OutputPin`]s mutually exclusively, and
//! [`NoIndicator`] is the do-nothing default for boards without LEDs.

use std::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::Channel;

/// Something that can display the active channel.
pub trait Indicator {
    /// Error produced when the indicator cannot be driven.
    type Error;

    /// Show `channel` as the active channel.
    fn select(&mut self, channel: Channel) -> Result<(), Self::Error>;
}

/// Indicator for boards without channel LEDs. Does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIndicator;

impl Indicator for NoIndicator {
    type Error = Infallible;

    fn select(&mut self, _channel: Channel) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A pair of channel LEDs, one per channel.
///
/// Exactly one of the two lines is high after every selection: the line for
/// the selected channel. The inactive line is driven low before the active
/// one is driven high, so both lines are never high together.
#[derive(Debug)]
pub struct LedPair<A, B> {
    led_a: A,
    led_b: B,
}

impl<A, B> LedPair<A, B>
where
    A: OutputPin,
    B: OutputPin<Error = A::Error>,
{
    /// Pair up the channel A and channel B LED pins.
    ///
    /// The pins are not driven here; the driver constructor performs the
    /// initial selection.
    pub fn new(led_a: A, led_b: B) -> Self {
        Self { led_a, led_b }
    }

    /// Hand back the two pins.
    pub fn release(self) -> (A, B) {
        (self.led_a, self.led_b)
    }
}

impl<A, B> Indicator for LedPair<A, B>
where
    A: OutputPin,
    B: OutputPin<Error = A::Error>,
{
    type Error = A::Error;

    fn select(&mut self, channel: Channel) -> Result<(), Self::Error> {
        match channel {
            Channel::A => {
                self.led_b.set_low()?;
                self.led_a.set_high()
            }
            Channel::B => {
                self.led_a.set_low()?;
                self.led_b.set_high()
            }
        }
    }
}
