//! The three report segments and the layout they are filled from.
//!
//! A report source is a flat byte buffer holding the selected segments back to back in the
//! order sample, test, PAYG. Each selected segment occupies a [`SEGMENT_STRIDE`]-byte slot
//! regardless of its own size; the paired decoder expects that layout.

pub mod buffer;

use buffer::ReportBuffer;

use crate::device::Device;

/// Size of a sample report.
pub const SAMPLE_SIZE: usize = 19;
/// Size of a test report.
pub const TEST_SIZE: usize = 15;
/// Size of a PAYG state report.
pub const PAYG_SIZE: usize = 13;
/// Distance between consecutive segments in a report source.
pub const SEGMENT_STRIDE: usize = SAMPLE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Error {
    SourceTooShort { required: usize, actual: usize },
}
impl<D> From<Error> for crate::Error<D>
where
    D: Device,
{
    fn from(value: Error) -> Self {
        Self::Report(value)
    }
}

/// Which segments a reporting cycle carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportKind {
    /// Nothing to send.
    #[default]
    None,
    /// Self-test result, sent together with a fresh sample.
    Test,
    /// Periodic sample.
    Sample,
    /// Pay-as-you-go state.
    Payg,
}

impl ReportKind {
    /// Does this kind carry `segment`?
    pub fn selects(&self, segment: Segment) -> bool {
        matches!(
            (self, segment),
            (ReportKind::Test, Segment::Sample | Segment::Test)
                | (ReportKind::Sample, Segment::Sample)
                | (ReportKind::Payg, Segment::Payg)
        )
    }
}

/// Numeric type codes used by the sampling task.
impl From<u8> for ReportKind {
    fn from(code: u8) -> Self {
        match code {
            1 => ReportKind::Test,
            2 => ReportKind::Sample,
            3 => ReportKind::Payg,
            _ => ReportKind::None,
        }
    }
}

/// A report category with its own fixed-size buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Segment {
    Sample,
    Test,
    Payg,
}

impl Segment {
    /// Fill and transmission order.
    pub const ORDER: [Segment; 3] = [Segment::Sample, Segment::Test, Segment::Payg];

    /// Payload size of the segment.
    pub const fn capacity(&self) -> usize {
        match self {
            Segment::Sample => SAMPLE_SIZE,
            Segment::Test => TEST_SIZE,
            Segment::Payg => PAYG_SIZE,
        }
    }
}

/// Buffers for every segment plus their pending flags.
#[derive(Clone, Debug, Default)]
pub struct ReportBufferSet {
    sample: ReportBuffer<SAMPLE_SIZE>,
    test: ReportBuffer<TEST_SIZE>,
    payg: ReportBuffer<PAYG_SIZE>,
}

impl ReportBufferSet {
    /// Creation, nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pending flags to exactly the segments `kind` carries.
    pub fn select(&mut self, kind: ReportKind) {
        for segment in Segment::ORDER {
            self.set_pending(segment, kind.selects(segment));
        }
    }

    /// Is `segment` waiting to be sent?
    pub fn is_pending(&self, segment: Segment) -> bool {
        match segment {
            Segment::Sample => self.sample.is_pending(),
            Segment::Test => self.test.is_pending(),
            Segment::Payg => self.payg.is_pending(),
        }
    }

    /// Mark or unmark `segment` for sending.
    pub fn set_pending(&mut self, segment: Segment, pending: bool) {
        match segment {
            Segment::Sample => self.sample.set_pending(pending),
            Segment::Test => self.test.set_pending(pending),
            Segment::Payg => self.payg.set_pending(pending),
        }
    }

    /// Pending segments in transmission order.
    pub fn pending(&self) -> impl Iterator<Item = Segment> + '_ {
        Segment::ORDER.into_iter().filter(|segment| self.is_pending(*segment))
    }

    /// Current payload of `segment`.
    pub fn payload(&self, segment: Segment) -> &[u8] {
        match segment {
            Segment::Sample => self.sample.as_ref(),
            Segment::Test => self.test.as_ref(),
            Segment::Payg => self.payg.as_ref(),
        }
    }

    /// Minimum source length able to fill every pending segment.
    pub fn required_len(&self) -> usize {
        let mut offset = 0;
        let mut end = 0;
        for segment in self.pending() {
            end = offset + segment.capacity();
            offset += SEGMENT_STRIDE;
        }
        end
    }

    /// Copy pending segments out of `source`, returning the offset past the last slot used.
    ///
    /// The length is checked up front so a short source never leaves a partially filled set.
    pub fn fill(&mut self, source: &[u8]) -> Result<usize, Error> {
        let required = self.required_len();
        if source.len() < required {
            return Err(Error::SourceTooShort { required, actual: source.len() });
        }
        let mut offset = 0;
        for segment in Segment::ORDER {
            if !self.is_pending(segment) {
                continue;
            }
            let slot = &source[offset..];
            match segment {
                Segment::Sample => self.sample.load(slot)?,
                Segment::Test => self.test.load(slot)?,
                Segment::Payg => self.payg.load(slot)?,
            }
            offset += SEGMENT_STRIDE;
        }
        Ok(offset)
    }
}
