//! Debounce / click / long-press classification.
//!
//! [`ButtonMachine`] is a pure state machine fed with `(raw level, now)`
//! samples on a periodic tick; it never reads the clock or the pin itself,
//! which keeps the transition semantics testable on the host. The cycle is
//!
//! ```text
//! Idle ──debounced press──► Pressed ──threshold──► LongPressFired ─┐
//!   ▲                          │ release before threshold          │release
//!   │                          ▼                                   │
//!   └────────────────────── Click ◄────────────────────────────────┘
//! ```
//!
//! Click and long-press are mutually exclusive outcomes of one press
//! cycle; a new cycle starts only after a full debounced release.

use embassy_time::{Duration, Instant};

/// Logic level on a GPIO input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Driven low.
    Low,
    /// Driven high (or pulled up).
    High,
}

impl Level {
    /// The opposite level.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// Immutable per-button timing configuration.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Level the line takes while the button is held.
    pub active_level: Level,
    /// Minimum stable-level duration before a transition is trusted.
    pub debounce: Duration,
    /// Minimum held-duration before a press classifies as long.
    pub long_press: Duration,
}

impl ButtonConfig {
    /// Default debounce window.
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(20);
    /// Default long-press threshold.
    pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(1500);

    /// Active-low button (internal pull-up), default windows.
    #[must_use]
    pub const fn active_low() -> Self {
        Self {
            active_level: Level::Low,
            debounce: Self::DEFAULT_DEBOUNCE,
            long_press: Self::DEFAULT_LONG_PRESS,
        }
    }

    /// Active-high button (external pull-down), default windows.
    #[must_use]
    pub const fn active_high() -> Self {
        Self {
            active_level: Level::High,
            ..Self::active_low()
        }
    }

    /// Override the debounce window.
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Override the long-press threshold.
    #[must_use]
    pub const fn with_long_press(mut self, long_press: Duration) -> Self {
        self.long_press = long_press;
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::active_low()
    }
}

/// Outcome of one press cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Released before the long-press threshold; fired at release.
    Click,
    /// Held past the threshold; fired at the crossing, not at release.
    LongPress,
}

/// Press-cycle phase. `long_fired` latches so a held button fires exactly
/// once and the eventual release stays silent.
#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Pressed { since: Instant, long_fired: bool },
}

/// Debounce and press-classification state machine for one button.
#[derive(Debug)]
pub struct ButtonMachine {
    config: ButtonConfig,
    /// Most recent raw sample.
    raw: Level,
    /// When the raw level last changed.
    raw_since: Instant,
    /// Level trusted after the debounce window.
    debounced: Level,
    phase: Phase,
}

impl ButtonMachine {
    /// New machine, assuming the line starts at the released level.
    #[must_use]
    pub const fn new(config: ButtonConfig) -> Self {
        let released = config.active_level.inverted();
        Self {
            config,
            raw: released,
            raw_since: Instant::from_ticks(0),
            debounced: released,
            phase: Phase::Idle,
        }
    }

    /// The configuration this machine runs with.
    #[must_use]
    pub const fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Feed one sample. `now` must come from a monotonic clock.
    ///
    /// Returns the semantic event completed by this sample, if any. Raw
    /// level changes shorter than the debounce window are absorbed here
    /// and never surface.
    pub fn update(&mut self, raw: Level, now: Instant) -> Option<ButtonEvent> {
        if raw != self.raw {
            self.raw = raw;
            self.raw_since = now;
        }

        let stable_for = now
            .checked_duration_since(self.raw_since)
            .unwrap_or(Duration::from_ticks(0));
        if stable_for >= self.config.debounce && self.raw != self.debounced {
            self.debounced = self.raw;
            if self.debounced == self.config.active_level {
                // Press cycle starts at the raw edge, not at the moment the
                // debounce window qualified it.
                self.phase = Phase::Pressed {
                    since: self.raw_since,
                    long_fired: false,
                };
            } else {
                let finished = core::mem::replace(&mut self.phase, Phase::Idle);
                if let Phase::Pressed { long_fired: false, .. } = finished {
                    return Some(ButtonEvent::Click);
                }
                return None;
            }
        }

        if let Phase::Pressed { since, long_fired } = &mut self.phase {
            let held = now
                .checked_duration_since(*since)
                .unwrap_or(Duration::from_ticks(0));
            if !*long_fired && held >= self.config.long_press {
                *long_fired = true;
                return Some(ButtonEvent::LongPress);
            }
        }

        None
    }

    /// Whether the machine currently considers the button held.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        matches!(self.phase, Phase::Pressed { .. })
    }
}
