//! Status LED abstraction.

/// Requested LED behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    /// LED off.
    #[default]
    Off,
    /// LED solid on.
    On,
    /// LED blinking with the given half-period.
    Blink {
        /// Time between toggles, in milliseconds.
        interval_ms: u32,
    },
}

/// Single status LED capability.
pub trait StatusLed {
    /// Error type for LED operations.
    type Error: core::fmt::Debug;

    /// Apply the requested state.
    fn set(&mut self, state: LedState) -> Result<(), Self::Error>;
}
