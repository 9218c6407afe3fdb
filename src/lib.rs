#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

use device::Device;

pub mod comm;
pub mod device;
pub mod region;
pub mod report;

pub use comm::types::{Configuration, JoinState, LinkSettings, SendOutcome};
pub use comm::{Comm, Downlink};
pub use report::ReportKind;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Error<D>
where
    D: Device,
{
    Device(device::Error<D>),
    Comm(comm::Error),
    Report(report::Error),
    Region(region::Error),
}

impl<D> Error<D>
where
    D: Device,
{
    /// Should the caller back off and drive the whole cycle again later?
    pub fn is_retry_later(&self) -> bool {
        matches!(self, Error::Comm(comm::Error::RetryLater))
    }
}
