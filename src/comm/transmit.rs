use core::time::Duration;

use super::session::SessionState;
use super::types::SendOutcome;
use super::{Downlink, Error};
use crate::device::radio::RadioSession;
use crate::device::Device;

impl SessionState {
    /// Submit one uplink and wait for the session to complete it.
    ///
    /// MAC-level retransmission and duty-cycle pacing stay inside the session; this only
    /// bounds the wait. On completion, a downlink reported by the session is appended to
    /// `downlink`.
    pub(crate) fn transmit<D: Device>(
        &mut self,
        device: &mut D,
        payload: &[u8],
        port: u8,
        confirmed: bool,
        timeout: Duration,
        downlink: &mut Downlink,
    ) -> Result<SendOutcome, crate::Error<D>> {
        self.tx_complete = false;
        self.last_tx = None;
        device
            .session()
            .submit_send(port, payload, confirmed)
            .map_err(crate::device::Error::Radio)?;
        trace!("TX: {=[u8]:#02X}", payload);
        debug!("packet queued");

        if !self.poll_until(device, timeout, |state| state.tx_complete) {
            warn!("TX timeout");
            return Ok(SendOutcome::TxTimeout);
        }

        if let Some(status) = self.last_tx.filter(|status| status.has_downlink()) {
            let end = status.data_beg.checked_add(status.data_len).ok_or(Error::InvalidDownlink)?;
            let bytes = device.session().rx_frame().get(status.data_beg..end).ok_or(Error::InvalidDownlink)?;
            trace!("RX: {=[u8]:#02X}", bytes);
            downlink.extend_from_slice(bytes).map_err(|_| Error::DownlinkOverflow)?;
        }
        Ok(SendOutcome::Sent)
    }
}
