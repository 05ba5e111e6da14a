//! Button polling tasks and the input event channel.
//!
//! A single static [`Channel`] carries semantic events from the pollers to
//! the board facade. Each wired button gets one [`ButtonPoller`], all
//! sampling on the same bounded-latency tick; [`InputRunner`] joins them
//! into one future the firmware can spawn.
//!
//! # Overflow handling
//!
//! Sends never block: if the consumer stalls and the channel reaches
//! capacity, events are dropped rather than stalling the sampling tick.

use core::future::pending;

use embassy_futures::join::join4;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Instant, Ticker};
use embedded_hal::digital::InputPin;

use platform::{Button, InputEvent};

use crate::button::{ButtonConfig, ButtonEvent, ButtonMachine, Level};

/// Depth of the static event channel.
pub(crate) const CHANNEL_DEPTH: usize = 16;

/// Sampling period for all buttons. Debounce and threshold evaluation run
/// on this tick, never in per-edge interrupt context.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Global event channel shared between the pollers and the facade.
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, CHANNEL_DEPTH> =
    Channel::new();

/// Sending half of the input channel.
pub type InputSender = Sender<'static, CriticalSectionRawMutex, InputEvent, CHANNEL_DEPTH>;
/// Receiving half of the input channel.
pub type InputReceiver = Receiver<'static, CriticalSectionRawMutex, InputEvent, CHANNEL_DEPTH>;

/// Attempt to send an [`InputEvent`] without blocking.
///
/// Returns `true` if the event was enqueued, `false` if the channel was
/// full and the event was dropped.
pub(crate) fn try_send_event(tx: &InputSender, event: InputEvent) -> bool {
    tx.try_send(event).is_ok()
}

/// Samples one GPIO line and classifies presses for one logical button.
pub struct ButtonPoller<P: InputPin> {
    pin: P,
    id: Button,
    machine: ButtonMachine,
}

impl<P: InputPin> ButtonPoller<P> {
    /// New poller for `pin` reporting as `id`.
    pub fn new(pin: P, id: Button, config: ButtonConfig) -> Self {
        Self {
            pin,
            id,
            machine: ButtonMachine::new(config),
        }
    }

    /// Poll forever, pushing semantic events into the channel.
    pub async fn run(mut self, tx: InputSender) -> ! {
        let mut ticker = Ticker::every(POLL_INTERVAL);
        loop {
            ticker.next().await;
            let level = match self.pin.is_high() {
                Ok(true) => Level::High,
                Ok(false) => Level::Low,
                // A pin read error is transient by contract; skip the sample.
                Err(_) => continue,
            };
            if let Some(event) = self.machine.update(level, Instant::now()) {
                let event = match event {
                    ButtonEvent::Click => InputEvent::Click(self.id),
                    ButtonEvent::LongPress => InputEvent::LongPress(self.id),
                };
                #[cfg(feature = "defmt")]
                defmt::debug!("button event: {}", event);
                if !try_send_event(&tx, event) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("input channel full, dropped {}", event);
                }
            }
        }
    }
}

/// One poller per wired button, joined into a single future.
///
/// Buttons a board leaves unconnected are simply never added; their slot
/// stays pending forever.
pub struct InputRunner<P: InputPin> {
    boot: Option<ButtonPoller<P>>,
    volume_up: Option<ButtonPoller<P>>,
    volume_down: Option<ButtonPoller<P>>,
    touch: Option<ButtonPoller<P>>,
}

impl<P: InputPin> InputRunner<P> {
    /// Runner with no buttons wired yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boot: None,
            volume_up: None,
            volume_down: None,
            touch: None,
        }
    }

    /// Wire the boot / primary button.
    #[must_use]
    pub fn boot(mut self, pin: P, config: ButtonConfig) -> Self {
        self.boot = Some(ButtonPoller::new(pin, Button::Boot, config));
        self
    }

    /// Wire the volume-up button.
    #[must_use]
    pub fn volume_up(mut self, pin: P, config: ButtonConfig) -> Self {
        self.volume_up = Some(ButtonPoller::new(pin, Button::VolumeUp, config));
        self
    }

    /// Wire the volume-down button.
    #[must_use]
    pub fn volume_down(mut self, pin: P, config: ButtonConfig) -> Self {
        self.volume_down = Some(ButtonPoller::new(pin, Button::VolumeDown, config));
        self
    }

    /// Wire the touch pad.
    #[must_use]
    pub fn touch(mut self, pin: P, config: ButtonConfig) -> Self {
        self.touch = Some(ButtonPoller::new(pin, Button::Touch, config));
        self
    }

    /// Run all wired pollers. Never returns.
    pub async fn run(self, tx: InputSender) {
        join4(
            poll_opt(self.boot, tx),
            poll_opt(self.volume_up, tx),
            poll_opt(self.volume_down, tx),
            poll_opt(self.touch, tx),
        )
        .await;
    }
}

impl<P: InputPin> Default for InputRunner<P> {
    fn default() -> Self {
        Self::new()
    }
}

async fn poll_opt<P: InputPin>(poller: Option<ButtonPoller<P>>, tx: InputSender) {
    match poller {
        Some(poller) => poller.run(tx).await,
        None => pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sends past the channel depth are dropped, not blocked on.
    #[test]
    fn overflow_drops_instead_of_blocking() {
        let tx = INPUT_CHANNEL.sender();
        for _ in 0..CHANNEL_DEPTH {
            assert!(try_send_event(&tx, InputEvent::Click(Button::Boot)));
        }
        assert!(
            !try_send_event(&tx, InputEvent::Click(Button::Boot)),
            "send into a full channel must fail without blocking"
        );

        // Drain so other tests see an empty channel.
        while INPUT_CHANNEL.try_receive().is_ok() {}
    }
}
