//! EU868 data rates and the factory channel plan of the metering unit.

use heapless::Vec;
use lora_modulation::{Bandwidth, SpreadingFactor};

use super::{Band, Channel, ChannelPlan, Datarate, Error, Modulation, DR};

const MIN_FREQUENCY: u32 = 863_000_000;
const MAX_FREQUENCY: u32 = 870_000_000;

/// Largest application payload a downlink can carry at any data rate (DR4 and above).
pub const MAX_DOWNLINK_PAYLOAD: usize = 222;

// Every LoRa channel is pinned to SF12 so that links work at the edge of coverage.
const DEFAULT_CHANNELS: [Channel; 9] = [
    Channel::fixed(868_100_000, DR::_0, Band::Centi),
    Channel::fixed(868_300_000, DR::_0, Band::Centi),
    Channel::fixed(868_500_000, DR::_0, Band::Centi),
    Channel::fixed(867_100_000, DR::_0, Band::Centi),
    Channel::fixed(867_300_000, DR::_0, Band::Centi),
    Channel::fixed(867_500_000, DR::_0, Band::Centi),
    Channel::fixed(867_700_000, DR::_0, Band::Centi),
    Channel::fixed(867_900_000, DR::_0, Band::Centi),
    Channel::fixed(868_800_000, DR::_7, Band::Milli),
];

/// The channel plan the device is provisioned with.
pub fn default_channel_plan() -> ChannelPlan {
    let mut channels = Vec::new();
    for channel in DEFAULT_CHANNELS {
        // DEFAULT_CHANNELS is shorter than MAX_CHANNELS
        let _ = channels.push(channel);
    }
    ChannelPlan { channels }
}

/// Reject frequencies outside the 863-870 MHz band.
pub fn validate_frequency(frequency: u32) -> Result<(), Error> {
    if (MIN_FREQUENCY..=MAX_FREQUENCY).contains(&frequency) {
        Ok(())
    } else {
        Err(Error::InvalidFrequency(frequency))
    }
}

/// Convert the data rate to spreading factor and bandwidth.
pub fn convert_data_rate(dr: DR) -> Modulation {
    let lora = |spreading_factor, bandwidth| Modulation::Lora(Datarate { spreading_factor, bandwidth });
    match dr {
        DR::_0 => lora(SpreadingFactor::_12, Bandwidth::_125KHz),
        DR::_1 => lora(SpreadingFactor::_11, Bandwidth::_125KHz),
        DR::_2 => lora(SpreadingFactor::_10, Bandwidth::_125KHz),
        DR::_3 => lora(SpreadingFactor::_9, Bandwidth::_125KHz),
        DR::_4 => lora(SpreadingFactor::_8, Bandwidth::_125KHz),
        DR::_5 => lora(SpreadingFactor::_7, Bandwidth::_125KHz),
        DR::_6 => lora(SpreadingFactor::_7, Bandwidth::_250KHz),
        DR::_7 => Modulation::Fsk,
    }
}
