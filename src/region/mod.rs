//! Data rate, band and channel plan tables handed to the radio session during setup.

use heapless::Vec;
use lora_modulation::{Bandwidth, SpreadingFactor};

use crate::device::Device;

pub mod eu868;

/// Maximum number of channels a plan can carry.
pub const MAX_CHANNELS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Error {
    DataRateNotSupported(DR),
    InvalidFrequency(u32),
    TooManyChannels,
    NoChannels,
}
impl<D> From<Error> for crate::Error<D>
where
    D: Device,
{
    fn from(value: Error) -> Self {
        Self::Region(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
#[repr(u8)]
pub enum DR {
    _0 = 0,
    _1 = 1,
    _2 = 2,
    _3 = 3,
    _4 = 4,
    _5 = 5,
    _6 = 6,
    _7 = 7,
}

impl DR {
    /// Is this DR within range?
    pub fn in_range(&self, range: (DR, DR)) -> bool {
        (range.0 as u8 <= *self as u8) && (*self as u8 <= range.1 as u8)
    }
}

impl TryFrom<u8> for DR {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DR::_0),
            1 => Ok(DR::_1),
            2 => Ok(DR::_2),
            3 => Ok(DR::_3),
            4 => Ok(DR::_4),
            5 => Ok(DR::_5),
            6 => Ok(DR::_6),
            7 => Ok(DR::_7),
            _ => Err(()),
        }
    }
}

/// Spreading factor and bandwidth pair of a LoRa data rate.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub struct Datarate {
    pub spreading_factor: SpreadingFactor,
    pub bandwidth: Bandwidth,
}

/// Physical modulation behind a data rate.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Modulation {
    Lora(Datarate),
    Fsk,
}

/// Duty-cycle sub-band a channel is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Band {
    /// 1% duty cycle.
    Centi,
    /// 0.1% duty cycle.
    Milli,
    /// 10% duty cycle.
    Deci,
}

/// An uplink channel with its allowed data rate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    /// Centre frequency in Hz.
    pub frequency: u32,
    /// Lowest allowed data rate.
    pub min_dr: DR,
    /// Highest allowed data rate.
    pub max_dr: DR,
    /// Duty-cycle band.
    pub band: Band,
}

impl Channel {
    /// A channel restricted to a single data rate.
    pub const fn fixed(frequency: u32, dr: DR, band: Band) -> Self {
        Self { frequency, min_dr: dr, max_dr: dr, band }
    }

    /// Can this channel carry an uplink at `dr`?
    pub fn supports(&self, dr: DR) -> bool {
        dr.in_range((self.min_dr, self.max_dr))
    }
}

/// Ordered list of channels configured into the session, index = channel number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelPlan {
    channels: Vec<Channel, MAX_CHANNELS>,
}

impl ChannelPlan {
    /// An empty plan.
    pub fn new() -> Self {
        Self { channels: Vec::new() }
    }

    /// Append a channel, checking it lies inside the regional band.
    pub fn push(&mut self, channel: Channel) -> Result<(), Error> {
        eu868::validate_frequency(channel.frequency)?;
        self.channels.push(channel).map_err(|_| Error::TooManyChannels)
    }

    /// Configured channels in index order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Number of configured channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Is the plan empty?
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channels able to carry an uplink at `dr`.
    pub fn usable(&self, dr: DR) -> impl Iterator<Item = (usize, &Channel)> {
        self.channels.iter().enumerate().filter(move |(_, c)| c.supports(dr))
    }
}
