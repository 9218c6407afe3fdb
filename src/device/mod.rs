//! Capabilities implemented by calling code: the radio session, a delay timer and the status indicator.

pub mod indicator;
pub mod radio;
pub mod timer;

#[cfg(test)]
pub(crate) mod mock;

use indicator::StatusIndicator;
use radio::RadioSession;
use timer::Timer;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Error<D>
where
    D: Device,
{
    Radio(<<D as Device>::Session as RadioSession>::Error),
    Timer(<<D as Device>::Timer as Timer>::Error),
}
impl<D> From<Error<D>> for super::Error<D>
where
    D: Device,
{
    fn from(value: Error<D>) -> Self {
        Self::Device(value)
    }
}

/// Specification of end device-specific functionality provided by the caller.
pub trait Device {
    /// Radio session (MAC and PHY) provided by the calling code.
    type Session: RadioSession;
    /// Timer provided by the calling code.
    type Timer: Timer;
    /// Blink driver provided by the calling code.
    type Indicator: StatusIndicator;

    /// Get the caller-supplied radio session.
    fn session(&mut self) -> &mut Self::Session;
    /// Get the caller-supplied timer implementation.
    fn timer(&mut self) -> &mut Self::Timer;
    /// Get the caller-supplied status indicator.
    fn indicator(&mut self) -> &mut Self::Indicator;
}
