//! Audio codec abstraction and the volume domain type.

/// Step applied by the volume up/down keys, in percentage points.
pub const VOLUME_STEP: u8 = 10;

/// Output volume as an integer percentage, always within `0..=100`.
///
/// Out-of-range requests are clamped, never reported as errors: a stuck
/// repeat on the volume key must not surface a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VolumeLevel(u8);

impl VolumeLevel {
    /// Muted (0%).
    pub const MUTED: Self = Self(0);
    /// Maximum volume (100%).
    pub const MAX: Self = Self(100);

    /// Create a volume level, clamping anything above 100.
    #[must_use]
    pub const fn new(percent: u8) -> Self {
        if percent > 100 {
            Self(100)
        } else {
            Self(percent)
        }
    }

    /// The level as a percentage in `0..=100`.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// One key-press louder, clamped at [`VolumeLevel::MAX`].
    #[must_use]
    pub const fn step_up(self) -> Self {
        let raised = self.0.saturating_add(VOLUME_STEP);
        if raised > 100 {
            Self(100)
        } else {
            Self(raised)
        }
    }

    /// One key-press quieter, clamped at [`VolumeLevel::MUTED`].
    #[must_use]
    pub const fn step_down(self) -> Self {
        Self(self.0.saturating_sub(VOLUME_STEP))
    }

    /// Whether the output is fully muted.
    #[must_use]
    pub const fn is_muted(self) -> bool {
        self.0 == 0
    }
}

impl Default for VolumeLevel {
    /// Power-on default volume.
    fn default() -> Self {
        Self(70)
    }
}

impl core::fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Audio codec capability.
///
/// Implementations own the codec chip configuration (I2S wiring, sample
/// rates, master-clock relationship); this trait is the narrow surface the
/// rest of the system is allowed to touch.
pub trait AudioCodec {
    /// Error type for codec operations.
    type Error: core::fmt::Debug;

    /// Current output volume.
    fn output_volume(&self) -> VolumeLevel;

    /// Set the output volume. Applied synchronously before returning.
    async fn set_output_volume(&mut self, volume: VolumeLevel) -> Result<(), Self::Error>;

    /// Enable the output path (and amplifier, where the board gates one).
    async fn start(&mut self) -> Result<(), Self::Error>;

    /// Disable the output path.
    async fn stop(&mut self) -> Result<(), Self::Error>;
}
