//! Scripted device used by the unit tests. The session clock advances one step per poll.

use std::collections::VecDeque;
use std::vec::Vec;

use core::time::Duration;

use super::indicator::{BlinkInterval, StatusIndicator};
use super::radio::types::{Event, TxStatus};
use super::radio::RadioSession;
use super::timer::Timer;
use super::Device;
use crate::comm::types::LinkSettings;

/// Where the mock places downlink payloads inside its receive frame.
pub(crate) const DATA_BEG: usize = 9;
const STEP: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError;

/// Scripted reaction to the next submitted uplink.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Silent,
    Ack { after: Duration, downlink: Vec<u8> },
    Raw { after: Duration, status: TxStatus },
}

impl Reply {
    pub(crate) fn ack_after(after: Duration) -> Self {
        Reply::Ack { after, downlink: Vec::new() }
    }

    pub(crate) fn downlink_after(after: Duration, payload: &[u8]) -> Self {
        Reply::Ack { after, downlink: payload.to_vec() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Sent {
    pub(crate) port: u8,
    pub(crate) data: Vec<u8>,
    pub(crate) confirmed: bool,
}

#[derive(Debug, Default)]
pub(crate) struct MockSession {
    now: Duration,
    scheduled: Vec<(Duration, Event)>,
    frame: Vec<u8>,
    /// Delay from `start_join` to `Joined`; never joins when `None`.
    pub(crate) join_after: Option<Duration>,
    /// Delay from `start_join` to a `JoinFailed` notification.
    pub(crate) fail_join_after: Option<Duration>,
    pub(crate) replies: VecDeque<Reply>,
    pub(crate) sent: Vec<Sent>,
    pub(crate) transfer_pending: bool,
    pub(crate) fail_submit: bool,
    /// Makes `apply_link` fail after recording the settings.
    pub(crate) fail_apply: bool,
    pub(crate) polls: usize,
    pub(crate) resets: usize,
    pub(crate) joins: usize,
    pub(crate) shutdowns: usize,
    pub(crate) radio_resets: usize,
    pub(crate) configured: Vec<LinkSettings>,
    pub(crate) applied: Vec<LinkSettings>,
}

impl MockSession {
    pub(crate) fn schedule(&mut self, after: Duration, event: Event) {
        self.scheduled.push((self.now + after, event));
    }

    fn next_due(&mut self) -> Option<Event> {
        let (index, _) = self
            .scheduled
            .iter()
            .enumerate()
            .filter(|(_, (at, _))| *at <= self.now)
            .min_by_key(|(_, (at, _))| *at)?;
        Some(self.scheduled.remove(index).1)
    }
}

impl RadioSession for MockSession {
    type Error = MockError;

    fn reset(&mut self) {
        self.resets += 1;
        self.scheduled.clear();
    }

    fn configure(&mut self, settings: &LinkSettings) -> Result<(), Self::Error> {
        self.configured.push(settings.clone());
        Ok(())
    }

    fn apply_link(&mut self, settings: &LinkSettings) -> Result<(), Self::Error> {
        self.applied.push(settings.clone());
        if self.fail_apply {
            return Err(MockError);
        }
        Ok(())
    }

    fn start_join(&mut self) -> Result<(), Self::Error> {
        self.joins += 1;
        self.schedule(Duration::ZERO, Event::Joining);
        if let Some(after) = self.fail_join_after {
            self.schedule(after, Event::JoinFailed);
        }
        if let Some(after) = self.join_after {
            self.schedule(after, Event::Joined);
        }
        Ok(())
    }

    fn shutdown(&mut self) {
        self.shutdowns += 1;
        self.scheduled.clear();
    }

    fn submit_send(&mut self, port: u8, data: &[u8], confirmed: bool) -> Result<(), Self::Error> {
        if self.fail_submit {
            return Err(MockError);
        }
        self.sent.push(Sent { port, data: data.to_vec(), confirmed });
        match self.replies.pop_front().unwrap_or(Reply::Silent) {
            Reply::Silent => {}
            Reply::Ack { after, downlink } => {
                self.frame = std::vec![0x60; DATA_BEG];
                self.frame.extend_from_slice(&downlink);
                let status = TxStatus { ack: confirmed, data_beg: DATA_BEG, data_len: downlink.len() };
                self.schedule(after, Event::TxComplete(status));
            }
            Reply::Raw { after, status } => self.schedule(after, Event::TxComplete(status)),
        }
        Ok(())
    }

    fn run_event_loop_once(&mut self) -> Option<Event> {
        self.polls += 1;
        self.now += STEP;
        self.next_due()
    }

    fn now(&self) -> Duration {
        self.now
    }

    fn is_transfer_pending(&self) -> bool {
        self.transfer_pending
    }

    fn rx_frame(&self) -> &[u8] {
        &self.frame
    }

    fn radio_reset(&mut self) {
        self.radio_resets += 1;
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockTimer {
    pub(crate) delays: Vec<Duration>,
    pub(crate) fail: bool,
}

impl Timer for MockTimer {
    type Error = MockError;

    fn delay(&mut self, duration: Duration) -> Result<(), Self::Error> {
        self.delays.push(duration);
        if self.fail {
            Err(MockError)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockIndicator {
    pub(crate) history: Vec<BlinkInterval>,
    pub(crate) offs: usize,
}

impl StatusIndicator for MockIndicator {
    fn set_interval(&mut self, interval: BlinkInterval) {
        self.history.push(interval);
    }

    fn off(&mut self) {
        self.offs += 1;
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockDevice {
    pub(crate) session: MockSession,
    pub(crate) timer: MockTimer,
    pub(crate) indicator: MockIndicator,
}

impl MockDevice {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A device whose session joins after `after`.
    pub(crate) fn joining_after(after: Duration) -> Self {
        let mut device = Self::new();
        device.session.join_after = Some(after);
        device
    }
}

impl Device for MockDevice {
    type Session = MockSession;
    type Timer = MockTimer;
    type Indicator = MockIndicator;

    fn session(&mut self) -> &mut Self::Session {
        &mut self.session
    }

    fn timer(&mut self) -> &mut Self::Timer {
        &mut self.timer
    }

    fn indicator(&mut self) -> &mut Self::Indicator {
        &mut self.indicator
    }
}
