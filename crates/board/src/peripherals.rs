//! Once-only construction of the board's peripheral set.
//!
//! The factory owns exactly one slot per peripheral kind. A slot is filled
//! on first access with board-specific wiring and every later access is a
//! side-effect-free lookup of the same instance — constructing a second
//! codec or display would double-configure shared hardware (for instance
//! re-initializing the same I2C device address).

use core::fmt;

use platform::{AudioCodec, DisplayDriver, StatusLed};
use thiserror_no_std::Error;

use crate::config::BoardConfig;

/// Builds the concrete peripheral drivers for one board.
///
/// Implementations capture whatever they need at the composition root
/// (typically a [`crate::bus::BusManager`] reference for bus-attached
/// peripherals) and read the wiring from the [`BoardConfig`].
pub trait PeripheralBuilder {
    /// Concrete status LED driver.
    type Led: StatusLed;
    /// Concrete audio codec driver.
    type Codec: AudioCodec;
    /// Concrete display driver.
    type Display: DisplayDriver;
    /// Error produced when a peripheral cannot be constructed.
    type Error: fmt::Debug;

    /// Construct the status LED driver.
    fn build_led(&mut self, config: &BoardConfig) -> Result<Self::Led, Self::Error>;

    /// Construct the audio codec driver. The wiring tells the codec
    /// whether it is fed a master clock.
    fn build_codec(&mut self, config: &BoardConfig) -> Result<Self::Codec, Self::Error>;

    /// Construct the display driver.
    fn build_display(&mut self, config: &BoardConfig) -> Result<Self::Display, Self::Error>;
}

/// Fatal construction failure.
///
/// Like bus configuration, peripheral construction is expected to succeed
/// deterministically given correct board constants; failure is a wiring
/// defect, not a runtime condition to recover from.
#[derive(Debug, Error)]
pub enum FactoryError<E: fmt::Debug> {
    /// The builder could not construct the peripheral.
    #[error("peripheral construction failed: {0:?}")]
    Build(E),
}

/// Lazily fills one slot per peripheral kind, at most once.
pub struct PeripheralFactory<P: PeripheralBuilder> {
    config: &'static BoardConfig,
    builder: P,
    led: Option<P::Led>,
    codec: Option<P::Codec>,
    display: Option<P::Display>,
}

impl<P: PeripheralBuilder> PeripheralFactory<P> {
    /// New factory with all slots empty.
    pub const fn new(config: &'static BoardConfig, builder: P) -> Self {
        Self {
            config,
            builder,
            led: None,
            codec: None,
            display: None,
        }
    }

    /// The wiring this factory builds against.
    #[must_use]
    pub const fn config(&self) -> &'static BoardConfig {
        self.config
    }

    /// The status LED, constructed on first call.
    pub fn led(&mut self) -> Result<&mut P::Led, FactoryError<P::Error>> {
        match self.led {
            Some(ref mut led) => Ok(led),
            None => {
                let led = self
                    .builder
                    .build_led(self.config)
                    .map_err(FactoryError::Build)?;
                Ok(self.led.insert(led))
            }
        }
    }

    /// The audio codec, constructed on first call.
    pub fn codec(&mut self) -> Result<&mut P::Codec, FactoryError<P::Error>> {
        match self.codec {
            Some(ref mut codec) => Ok(codec),
            None => {
                let codec = self
                    .builder
                    .build_codec(self.config)
                    .map_err(FactoryError::Build)?;
                Ok(self.codec.insert(codec))
            }
        }
    }

    /// The display, constructed on first call.
    pub fn display(&mut self) -> Result<&mut P::Display, FactoryError<P::Error>> {
        match self.display {
            Some(ref mut display) => Ok(display),
            None => {
                let display = self
                    .builder
                    .build_display(self.config)
                    .map_err(FactoryError::Build)?;
                Ok(self.display.insert(display))
            }
        }
    }
}
