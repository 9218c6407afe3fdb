use core::{fmt::Debug, time::Duration};

/// Blocking delay used for fixed settle times.
pub trait Timer {
    #[cfg(feature = "defmt")]
    type Error: Debug + defmt::Format;

    #[cfg(not(feature = "defmt"))]
    type Error: Debug;

    /// Block for `duration`.
    fn delay(&mut self, duration: Duration) -> Result<(), Self::Error>;
}
