/// Outcome of a completed uplink, including any piggybacked downlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxStatus {
    /// The network acknowledged a confirmed uplink.
    pub ack: bool,
    /// Offset of the downlink payload inside the receive frame.
    pub data_beg: usize,
    /// Length of the downlink payload, 0 when nothing was received.
    pub data_len: usize,
}

impl TxStatus {
    /// Did the uplink carry a downlink back?
    pub fn has_downlink(&self) -> bool {
        self.data_len > 0
    }
}

/// Notifications raised by the session while its event loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Join request sent, waiting for an accept.
    Joining,
    /// Join accept received, session keys derived.
    Joined,
    /// Join attempt rejected or unanswered.
    JoinFailed,
    /// Uplink done, both receive windows closed.
    TxComplete(TxStatus),
    /// Any event the controller does not act on, carrying the session's raw code.
    Unhandled(u8),
}
