pub mod types;
use core::fmt::Debug;
use core::time::Duration;
use types::*;

use crate::comm::types::LinkSettings;

/// A LoRaWAN MAC session driven by cooperative polling.
///
/// Events are only ever produced by [`RadioSession::run_event_loop_once`], never from interrupt
/// context, so the controller observes them in program order without locking.
pub trait RadioSession {
    #[cfg(feature = "defmt")]
    type Error: Debug + defmt::Format;

    #[cfg(not(feature = "defmt"))]
    type Error: Debug;

    /// Reset the MAC state. Session and pending data transfers are discarded.
    fn reset(&mut self);

    /// Load clock error, ADR mode, data rate, transmit power and channels ahead of a join.
    fn configure(&mut self, settings: &LinkSettings) -> Result<(), Self::Error>;

    /// Reapply ADR mode, data rate and transmit power, which a join accept may have overridden.
    fn apply_link(&mut self, settings: &LinkSettings) -> Result<(), Self::Error>;

    /// Start the over-the-air join procedure.
    fn start_join(&mut self) -> Result<(), Self::Error>;

    /// Stop all MAC activity.
    fn shutdown(&mut self);

    /// Queue an uplink for the next possible time slot.
    fn submit_send(&mut self, port: u8, data: &[u8], confirmed: bool) -> Result<(), Self::Error>;

    /// Run pending MAC jobs once and report at most one event raised by them.
    fn run_event_loop_once(&mut self) -> Option<Event>;

    /// Monotonic session time.
    fn now(&self) -> Duration;

    /// Is a TX or RX job in flight?
    fn is_transfer_pending(&self) -> bool;

    /// The last received frame. Downlink payloads are located through [`TxStatus`].
    fn rx_frame(&self) -> &[u8];

    /// Put the transceiver to sleep through a hard radio reset.
    fn radio_reset(&mut self);
}
