//! Connectivity health signalled through a blinking LED.

use core::time::Duration;

/// Blink cadence requested from the external blink driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkInterval {
    /// Joined, or idle.
    Normal,
    /// Join handshake in progress.
    Joining,
    /// Not joined after retrying, or a join was rejected.
    Degraded,
}

impl BlinkInterval {
    /// Time between LED toggles.
    pub fn period(&self) -> Duration {
        match self {
            BlinkInterval::Normal => Duration::from_secs(1),
            BlinkInterval::Joining => Duration::from_millis(500),
            BlinkInterval::Degraded => Duration::from_millis(100),
        }
    }
}

/// Write-only sink for the blink cadence. The implementation owns the pin.
pub trait StatusIndicator {
    /// Request a new cadence.
    fn set_interval(&mut self, interval: BlinkInterval);
    /// Stop blinking and leave the indicator dark.
    fn off(&mut self);
}
