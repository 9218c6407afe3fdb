use core::time::Duration;

use super::types::JoinState;
use crate::device::indicator::{BlinkInterval, StatusIndicator};
use crate::device::radio::types::{Event, TxStatus};
use crate::device::radio::RadioSession;
use crate::device::Device;

/// Flags written by the event handler and read by the polling loops.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) join_state: JoinState,
    pub(crate) tx_complete: bool,
    pub(crate) last_tx: Option<TxStatus>,
}

impl SessionState {
    pub(crate) fn handle_event<D: Device>(&mut self, device: &mut D, event: Event) {
        let now = device.session().now().as_millis() as u64;
        match event {
            Event::Joining => {
                debug!("{}: EV_JOINING", now);
                self.join_state = JoinState::Joining;
                device.indicator().set_interval(BlinkInterval::Joining);
            }
            Event::Joined => {
                info!("{}: EV_JOINED", now);
                self.join_state = JoinState::Joined;
                device.indicator().set_interval(BlinkInterval::Normal);
            }
            Event::JoinFailed => {
                warn!("{}: EV_JOIN_FAILED", now);
                self.join_state = JoinState::JoinFailed;
                device.indicator().set_interval(BlinkInterval::Degraded);
            }
            Event::TxComplete(status) => {
                debug!("{}: EV_TXCOMPLETE (includes waiting for RX windows)", now);
                if status.ack {
                    debug!("received ack");
                }
                if status.has_downlink() {
                    debug!("received {} bytes of payload, data_beg {}", status.data_len, status.data_beg);
                }
                self.last_tx = Some(status);
                self.tx_complete = true;
            }
            Event::Unhandled(code) => {
                trace!("{}: unhandled event {}", now, code);
            }
        }
    }

    /// Run the session's event loop until `done` holds or `timeout` elapses on the session clock.
    /// Returns the final value of `done`.
    pub(crate) fn poll_until<D, F>(&mut self, device: &mut D, timeout: Duration, done: F) -> bool
    where
        D: Device,
        F: Fn(&Self) -> bool,
    {
        let start = device.session().now();
        while !done(self) && device.session().now().saturating_sub(start) < timeout {
            if let Some(event) = device.session().run_event_loop_once() {
                self.handle_event(device, event);
            }
        }
        done(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::mock::MockDevice;

    #[test]
    fn join_events_drive_state_and_indicator() {
        let mut device = MockDevice::new();
        let mut state = SessionState::default();
        state.handle_event(&mut device, Event::Joining);
        assert_eq!(state.join_state, JoinState::Joining);
        state.handle_event(&mut device, Event::JoinFailed);
        assert_eq!(state.join_state, JoinState::JoinFailed);
        state.handle_event(&mut device, Event::Joined);
        assert_eq!(state.join_state, JoinState::Joined);
        assert_eq!(
            device.indicator.history,
            [BlinkInterval::Joining, BlinkInterval::Degraded, BlinkInterval::Normal]
        );
    }

    #[test]
    fn tx_complete_records_status() {
        let mut device = MockDevice::new();
        let mut state = SessionState::default();
        let status = TxStatus { ack: false, data_beg: 9, data_len: 4 };
        state.handle_event(&mut device, Event::TxComplete(status));
        assert!(state.tx_complete);
        assert_eq!(state.last_tx, Some(status));
        assert_eq!(state.join_state, JoinState::NotJoined);
        assert!(device.indicator.history.is_empty());
    }

    #[test]
    fn unhandled_events_change_nothing() {
        let mut device = MockDevice::new();
        let mut state = SessionState::default();
        state.handle_event(&mut device, Event::Unhandled(12));
        assert_eq!(state.join_state, JoinState::NotJoined);
        assert!(!state.tx_complete);
    }

    #[test]
    fn poll_times_out_on_session_clock() {
        let mut device = MockDevice::new();
        let mut state = SessionState::default();
        let done = state.poll_until(&mut device, Duration::from_secs(10), |s| s.tx_complete);
        assert!(!done);
        assert_eq!(device.session.now(), Duration::from_secs(10));
        assert_eq!(device.session.polls, 10);
    }

    #[test]
    fn poll_returns_as_soon_as_condition_holds() {
        let mut device = MockDevice::new();
        device.session.schedule(Duration::from_secs(3), Event::TxComplete(TxStatus::default()));
        let mut state = SessionState::default();
        assert!(state.poll_until(&mut device, Duration::from_secs(10), |s| s.tx_complete));
        assert_eq!(device.session.polls, 3);
    }

    #[test]
    fn poll_skips_loop_when_already_done() {
        let mut device = MockDevice::new();
        let mut state = SessionState { join_state: JoinState::Joined, ..Default::default() };
        assert!(state.poll_until(&mut device, Duration::from_secs(10), |s| s.join_state == JoinState::Joined));
        assert_eq!(device.session.polls, 0);
    }
}
