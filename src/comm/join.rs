use super::types::JoinState;
use super::{Comm, Error};
use crate::device::indicator::{BlinkInterval, StatusIndicator};
use crate::device::radio::RadioSession;
use crate::device::Device;

impl Comm {
    /// Reset the session and join the network, polling for at most the configured join timeout.
    ///
    /// On timeout the session is shut down, the indicator switches to the degraded cadence
    /// and the call fails with [`Error::RetryLater`]. Join state and the normal cadence are
    /// set by the session's events, not by this function.
    ///
    /// Link settings are re-applied after the wait. A failure there is logged and does not
    /// change the outcome; the session keeps the settings passed to `configure`.
    pub fn connect<D: Device>(&mut self, device: &mut D) -> Result<(), crate::Error<D>> {
        self.configuration.link.validate()?;
        debug!("comm setup");
        self.state.join_state = JoinState::NotJoined;
        self.state.tx_complete = false;
        self.state.last_tx = None;

        let session = device.session();
        session.reset();
        session.configure(&self.configuration.link).map_err(crate::device::Error::Radio)?;
        session.start_join().map_err(crate::device::Error::Radio)?;

        let joined = self.state.poll_until(device, self.configuration.join_timeout, |state| {
            state.join_state == JoinState::Joined
        });

        if let Err(e) = device.session().apply_link(&self.configuration.link) {
            warn!("applying link settings failed with error {:?}", e);
        }

        if joined {
            info!("joined");
            Ok(())
        } else {
            warn!("connection timeout");
            device.indicator().set_interval(BlinkInterval::Degraded);
            device.session().shutdown();
            Err(Error::RetryLater.into())
        }
    }
}
