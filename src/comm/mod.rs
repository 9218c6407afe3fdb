//! Join, report assembly and uplink control over a cooperatively polled radio session.

pub mod types;

mod join;
mod report;
mod session;
mod transmit;

use heapless::Vec;

use crate::device::Device;
use crate::region::eu868::MAX_DOWNLINK_PAYLOAD;
use crate::report::{ReportBufferSet, ReportKind, Segment};
use session::SessionState;
use types::{Configuration, JoinState, SendOutcome};

/// Bytes the accumulator can hold, one full downlink per segment.
pub const DOWNLINK_CAPACITY: usize = MAX_DOWNLINK_PAYLOAD * Segment::ORDER.len();

/// Downlink payloads collected over one report cycle, in send order.
pub type Downlink = Vec<u8, DOWNLINK_CAPACITY>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Error {
    NotJoined,
    RetryLater,
    DownlinkOverflow,
    InvalidDownlink,
}
impl<D> From<Error> for crate::Error<D>
where
    D: Device,
{
    fn from(value: Error) -> Self {
        Self::Comm(value)
    }
}

/// Controller owning the session state and the report buffers.
///
/// Every operation takes the [`Device`] by exclusive reference; session events are handled
/// synchronously right after the poll call that produced them.
pub struct Comm {
    pub(crate) configuration: Configuration,
    pub(crate) state: SessionState,
    pub(crate) reports: ReportBufferSet,
    pub(crate) kind: ReportKind,
    pub(crate) last_outcome: Option<SendOutcome>,
}

impl Comm {
    /// Creation, not joined and nothing pending.
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            state: SessionState::default(),
            reports: ReportBufferSet::new(),
            kind: ReportKind::None,
            last_outcome: None,
        }
    }

    /// Current join state.
    pub fn join_state(&self) -> JoinState {
        self.state.join_state
    }

    /// Is the device joined to the network?
    pub fn is_joined(&self) -> bool {
        self.state.join_state == JoinState::Joined
    }

    /// Kind selected by the last successful `begin_report`.
    pub fn report_kind(&self) -> ReportKind {
        self.kind
    }

    /// Report buffers and their pending flags.
    pub fn reports(&self) -> &ReportBufferSet {
        &self.reports
    }

    /// Outcome of the most recent transmission attempt.
    pub fn last_outcome(&self) -> Option<SendOutcome> {
        self.last_outcome
    }

    /// Active configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}
