//! Properties used by the join and uplink controllers.

use core::time::Duration;

use crate::region::{self, eu868, ChannelPlan, Modulation, DR};

/// Progress of the join handshake, as reported by session events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum JoinState {
    #[default]
    NotJoined,
    Joining,
    Joined,
    JoinFailed,
}

/// Result of one transmission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendOutcome {
    /// The session reported the uplink complete within the send timeout.
    Sent,
    /// No completion before the send timeout.
    TxTimeout,
    /// Another transfer was still in flight, nothing was submitted.
    RxPending,
}

/// Radio parameters pushed into the session before joining.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkSettings {
    /// Tolerated clock error in percent, widening the receive windows.
    pub clock_error_percent: u8,
    /// Let the network tune data rate and power.
    pub adaptive_data_rate: bool,
    /// Uplink data rate.
    pub data_rate: DR,
    /// Transmit power in dBm.
    pub tx_power_dbm: u8,
    /// Channels to configure, in index order.
    pub channels: ChannelPlan,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            clock_error_percent: 1,
            adaptive_data_rate: false,
            data_rate: DR::_0,
            tx_power_dbm: 23,
            channels: eu868::default_channel_plan(),
        }
    }
}

impl LinkSettings {
    /// Check that the uplink data rate is a LoRa rate carried by at least one channel.
    pub fn validate(&self) -> Result<(), region::Error> {
        if self.channels.is_empty() {
            return Err(region::Error::NoChannels);
        }
        match eu868::convert_data_rate(self.data_rate) {
            Modulation::Lora(_) if self.channels.usable(self.data_rate).next().is_some() => Ok(()),
            _ => Err(region::Error::DataRateNotSupported(self.data_rate)),
        }
    }
}

/// Timeouts and uplink parameters of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    /// How long `connect` polls for a join accept.
    pub join_timeout: Duration,
    /// How long each uplink may take to complete.
    pub send_timeout: Duration,
    /// Pause after a radio reset in `abort`.
    pub abort_settle: Duration,
    /// Application port of report uplinks.
    pub port: u8,
    /// Request network confirmation of report uplinks.
    pub confirmed: bool,
    /// Radio parameters.
    pub link: LinkSettings,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            join_timeout: Duration::from_secs(500),
            send_timeout: Duration::from_secs(120),
            abort_settle: Duration::from_secs(2),
            port: 1,
            confirmed: false,
            link: LinkSettings::default(),
        }
    }
}
