//! Input event model.
//!
//! The board layer turns raw GPIO transitions into these semantic events;
//! click and long-press are mutually exclusive outcomes of one press cycle.

/// Logical buttons a board may wire up.
///
/// A board variant that omits a control simply never emits events for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Boot / primary button.
    Boot,
    /// Volume up.
    VolumeUp,
    /// Volume down.
    VolumeDown,
    /// Capacitive touch pad.
    Touch,
}

/// Debounced semantic input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Button pressed and released before the long-press threshold.
    Click(Button),
    /// Button held past the long-press threshold. Fires once per press
    /// cycle, at the instant the threshold is crossed.
    LongPress(Button),
}
