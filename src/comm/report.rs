use super::types::{JoinState, SendOutcome};
use super::{Comm, Downlink, Error};
use crate::device::indicator::StatusIndicator;
use crate::device::radio::RadioSession;
use crate::device::timer::Timer;
use crate::device::Device;
use crate::report::{self, ReportKind};

/// Filler written to the caller's response buffer before a send.
const RESPONSE_FILL: u8 = b'0';

impl Comm {
    /// Select the segments of the next report. Nothing is transmitted.
    ///
    /// `total_len` is the length the caller intends to fill with and is only logged; the
    /// layout is determined by `kind`.
    pub fn begin_report(&mut self, kind: ReportKind, total_len: u16) -> Result<(), Error> {
        if self.state.join_state != JoinState::Joined {
            warn!("start report not joined");
            return Err(Error::NotJoined);
        }
        debug!("start report {} ({} bytes)", kind, total_len);
        self.kind = kind;
        self.reports.select(kind);
        Ok(())
    }

    /// Copy the pending segments out of `source`. See [`crate::report`] for the layout.
    pub fn fill_report(&mut self, source: &[u8]) -> Result<usize, report::Error> {
        self.reports.fill(source)
    }

    /// Send every pending segment in order sample, test, PAYG and collect their downlinks.
    ///
    /// The first segment that is not sent aborts the cycle with [`Error::RetryLater`]. Segments
    /// already delivered are not rolled back and the downlinks gathered so far are dropped;
    /// the whole cycle has to be driven again. A session or downlink error leaves no
    /// [`Comm::last_outcome`].
    pub fn send_report<D: Device>(&mut self, device: &mut D) -> Result<Downlink, crate::Error<D>> {
        if device.session().is_transfer_pending() {
            warn!("OP_TXRXPEND, not sending");
            self.last_outcome = Some(SendOutcome::RxPending);
            return Err(Error::RetryLater.into());
        }
        if self.state.join_state != JoinState::Joined {
            return Err(Error::NotJoined.into());
        }

        let mut downlink = Downlink::new();
        for segment in report::Segment::ORDER {
            if !self.reports.is_pending(segment) {
                continue;
            }
            debug!("sending {}", segment);
            let result = self.state.transmit(
                device,
                self.reports.payload(segment),
                self.configuration.port,
                self.configuration.confirmed,
                self.configuration.send_timeout,
                &mut downlink,
            );
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.last_outcome = None;
                    return Err(e);
                }
            };
            self.last_outcome = Some(outcome);
            if outcome != SendOutcome::Sent {
                return Err(Error::RetryLater.into());
            }
            self.reports.set_pending(segment, false);
        }
        Ok(downlink)
    }

    /// [`Comm::send_report`] into a caller buffer.
    ///
    /// `out` is padded with ASCII `'0'` first; on success the downlink bytes are copied to its
    /// head and their count returned.
    pub fn send_report_into<D: Device>(
        &mut self,
        device: &mut D,
        out: &mut [u8],
    ) -> Result<usize, crate::Error<D>> {
        out.fill(RESPONSE_FILL);
        let downlink = self.send_report(device)?;
        let head = out.get_mut(..downlink.len()).ok_or(Error::DownlinkOverflow)?;
        head.copy_from_slice(&downlink);
        Ok(downlink.len())
    }

    /// Force the radio to sleep, wait for it to settle and turn the indicator off.
    pub fn abort<D: Device>(&mut self, device: &mut D) {
        info!("abort");
        device.session().radio_reset();
        if let Err(e) = device.timer().delay(self.configuration.abort_settle) {
            error!("settle delay failed with error {:?}", e);
        }
        device.indicator().off();
        self.state.tx_complete = false;
    }
}
