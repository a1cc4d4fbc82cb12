/// One of the two potentiometer elements inside the TPL0102.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Channel A (wiper register 0x00).
    A,
    /// Channel B (wiper register 0x01).
    B,
}

impl Channel {
    /// Wiper register address for this channel.
    pub(crate) fn wiper_register(self) -> u8 {
        match self {
            Channel::A => crate::registers::WIPER_A,
            Channel::B => crate::registers::WIPER_B,
        }
    }

    /// Index into per-channel state arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Channel::A => 0,
            Channel::B => 1,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = InvalidChannel;

    /// Convert a raw channel index (0 or 1) into a [`Channel`].
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Channel::A),
            1 => Ok(Channel::B),
            other => Err(InvalidChannel(other)),
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::A => write!(f, "A"),
            Channel::B => write!(f, "B"),
        }
    }
}

/// A raw channel index that was neither 0 nor 1.
///
/// The enclosed `u8` is the index that was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChannel(pub u8);

impl std::fmt::Display for InvalidChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid channel index {} (expected 0 or 1)", self.0)
    }
}

impl std::error::Error for InvalidChannel {}
