use std::convert::Infallible;

/// Wrapper for problems when communicating with the TPL0102.
///
/// `E` is the error type of the underlying I2C bus; `IE` is the error type of
/// the indicator pins, and defaults to [`Infallible`] for drivers constructed
/// without an indicator.
#[derive(Debug)]
pub enum Error<E, IE = Infallible> {
    /// A bus transaction was not completed by the device.
    ///
    /// The enclosed error is the transport's own report, typically an address
    /// NACK (device missing or unresponsive) or a timeout. In-memory tap
    /// state is left unchanged when a write fails with this error.
    Bus(E),
    /// An indicator LED pin could not be driven.
    Indicator(IE),
}
