//! Bus-transfer timing diagnostics.
//!
//! Wiper writes are timed so integrators can confirm that fast-mode
//! transactions complete within their budget (a single wiper write should
//! take well under 100 µs at 400 kbit/s). The clock is a capability so tests
//! can substitute a deterministic one.

use std::time::{Duration, Instant};

/// A monotonic clock the driver reads around bus transactions.
pub trait Clock {
    /// The current monotonic timestamp.
    ///
    /// Only differences between consecutive values are ever used.
    fn now(&mut self) -> Duration;
}

/// The default [`Clock`], backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// Wall-clock durations of the most recent wiper-write transfers.
///
/// Each field is `None` until the corresponding operation has performed a
/// successful bus write. Operations that skip the bus (saturating
/// increment/decrement, `set_tap` to the current value) leave these
/// untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Duration of the last increment's wiper write.
    pub increment: Option<Duration>,
    /// Duration of the last decrement's wiper write.
    pub decrement: Option<Duration>,
    /// Duration of the last absolute set's wiper write (tap or resistance).
    pub set: Option<Duration>,
}
