#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod channel;
mod config;
mod driver;
mod error;
mod indicator;
pub mod registers;
mod status;
mod timing;

pub use channel::{Channel, InvalidChannel};
pub use config::{BusSpeed, Config};
pub use driver::Tpl0102;
pub use error::Error;
pub use indicator::{Indicator, LedPair, NoIndicator};
pub use status::StatusRegisters;
pub use timing::{Clock, SystemClock, Timings};
