//! The board facade: the single entry point application code talks to.
//!
//! Composes the peripheral factory with the application seams and maps
//! semantic button events to actions. All side effects of an event are
//! applied synchronously before [`Board::handle_input`] returns; nothing
//! is queued.

use core::fmt::{self, Write as _};

use heapless::String;

use platform::{
    AppControl, AudioCodec, Button, Capability, CapabilityRegistry, Connectivity, DeviceState,
    DisplayDriver, InputEvent, VolumeLevel,
};
use thiserror_no_std::Error;

use crate::input::InputReceiver;
use crate::peripherals::{FactoryError, PeripheralBuilder, PeripheralFactory};

/// Error from handling one input event.
#[derive(Debug, Error)]
pub enum BoardError<FE: fmt::Debug, CE: fmt::Debug, DE: fmt::Debug> {
    /// A peripheral could not be constructed.
    #[error("peripheral factory: {0:?}")]
    Factory(FactoryError<FE>),
    /// The audio codec rejected an operation.
    #[error("audio codec: {0:?}")]
    Codec(CE),
    /// The display rejected an operation.
    #[error("display: {0:?}")]
    Display(DE),
}

/// Codec error type of a builder.
pub type CodecErrorOf<P> = <<P as PeripheralBuilder>::Codec as AudioCodec>::Error;
/// Display error type of a builder.
pub type DisplayErrorOf<P> = <<P as PeripheralBuilder>::Display as DisplayDriver>::Error;
/// Result of facade operations for a given builder.
pub type BoardResult<T, P> =
    Result<T, BoardError<<P as PeripheralBuilder>::Error, CodecErrorOf<P>, DisplayErrorOf<P>>>;

/// The board facade.
///
/// Generic over the peripheral builder and the application seams, so one
/// implementation serves every board variant and every test double.
pub struct Board<P, A, W, R>
where
    P: PeripheralBuilder,
{
    factory: PeripheralFactory<P>,
    app: A,
    connectivity: W,
    registry: R,
}

impl<P, A, W, R> Board<P, A, W, R>
where
    P: PeripheralBuilder,
    A: AppControl,
    W: Connectivity,
    R: CapabilityRegistry,
{
    /// Compose the facade and announce this board's capabilities.
    pub fn new(factory: PeripheralFactory<P>, app: A, connectivity: W, mut registry: R) -> Self {
        // The assistant backend addresses the speaker thing for remote
        // volume control.
        registry.register(Capability::Speaker);
        Self {
            factory,
            app,
            connectivity,
            registry,
        }
    }

    /// The status LED.
    pub fn led(&mut self) -> Result<&mut P::Led, FactoryError<P::Error>> {
        self.factory.led()
    }

    /// The audio codec.
    pub fn audio_codec(&mut self) -> Result<&mut P::Codec, FactoryError<P::Error>> {
        self.factory.codec()
    }

    /// The display.
    pub fn display(&mut self) -> Result<&mut P::Display, FactoryError<P::Error>> {
        self.factory.display()
    }

    /// The application seam (used by tests and diagnostics).
    pub fn app(&self) -> &A {
        &self.app
    }

    /// The connectivity seam.
    pub fn connectivity(&self) -> &W {
        &self.connectivity
    }

    /// The capability registry seam.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Apply one semantic input event.
    pub async fn handle_input(&mut self, event: InputEvent) -> BoardResult<(), P> {
        match event {
            InputEvent::Click(Button::Boot) => {
                // Before the first connection, the primary button doubles
                // as the provisioning escape hatch.
                if self.app.device_state() == DeviceState::Starting
                    && !self.connectivity.is_connected()
                {
                    self.connectivity.reset_configuration();
                }
                self.app.toggle_chat();
                Ok(())
            }
            InputEvent::Click(Button::Touch) => {
                self.app.toggle_chat();
                Ok(())
            }
            InputEvent::LongPress(Button::Boot | Button::Touch) => Ok(()),
            InputEvent::Click(Button::VolumeUp) => {
                let raised = self.output_volume()?.step_up();
                self.set_volume_and_notify(raised).await
            }
            InputEvent::LongPress(Button::VolumeUp) => {
                self.set_volume(VolumeLevel::MAX).await?;
                self.notify("Max volume").await
            }
            InputEvent::Click(Button::VolumeDown) => {
                let lowered = self.output_volume()?.step_down();
                self.set_volume_and_notify(lowered).await
            }
            InputEvent::LongPress(Button::VolumeDown) => {
                self.set_volume(VolumeLevel::MUTED).await?;
                self.notify("Muted").await
            }
        }
    }

    /// Drain the input channel forever.
    ///
    /// Runtime peripheral errors are logged and dropped; a wedged display
    /// must not take input handling down with it.
    pub async fn run(&mut self, rx: InputReceiver) -> ! {
        loop {
            let event = rx.receive().await;
            if let Err(_error) = self.handle_input(event).await {
                #[cfg(feature = "defmt")]
                defmt::warn!("input action failed: {}", defmt::Debug2Format(&_error));
            }
        }
    }

    fn output_volume(&mut self) -> BoardResult<VolumeLevel, P> {
        let codec = self.factory.codec().map_err(BoardError::Factory)?;
        Ok(codec.output_volume())
    }

    async fn set_volume(&mut self, volume: VolumeLevel) -> BoardResult<(), P> {
        let codec = self.factory.codec().map_err(BoardError::Factory)?;
        codec
            .set_output_volume(volume)
            .await
            .map_err(BoardError::Codec)
    }

    async fn set_volume_and_notify(&mut self, volume: VolumeLevel) -> BoardResult<(), P> {
        self.set_volume(volume).await?;
        let mut text: String<16> = String::new();
        // "Volume 100" fits; the write cannot fail.
        let _ = write!(text, "Volume {volume}");
        self.notify(&text).await
    }

    async fn notify(&mut self, text: &str) -> BoardResult<(), P> {
        let display = self.factory.display().map_err(BoardError::Factory)?;
        display
            .show_notification(text)
            .await
            .map_err(BoardError::Display)
    }
}
