//! Fixed-capacity storage for one report segment.

use super::Error;

/// One segment's payload and its pending flag.
#[derive(Clone, Debug)]
pub struct ReportBuffer<const N: usize> {
    payload: [u8; N],
    pending: bool,
}
impl<const N: usize> Default for ReportBuffer<N> {
    fn default() -> Self {
        Self { payload: [0; N], pending: false }
    }
}

impl<const N: usize> ReportBuffer<N> {
    /// Creation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload size in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Should this segment go out in the current cycle?
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Mark or unmark for sending.
    pub fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    /// Overwrite the payload with the first `N` bytes of `source`.
    pub fn load(&mut self, source: &[u8]) -> Result<(), Error> {
        let required = self.capacity();
        let chunk = source
            .get(..required)
            .ok_or(Error::SourceTooShort { required, actual: source.len() })?;
        self.payload.copy_from_slice(chunk);
        Ok(())
    }
}

impl<const N: usize> AsRef<[u8]> for ReportBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.payload
    }
}
