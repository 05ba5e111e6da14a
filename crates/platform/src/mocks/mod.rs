//! Mock implementations for testing.
//!
//! Every platform trait has a mock here so downstream crates can exercise
//! their wiring on the host without hardware.

use core::convert::Infallible;

use heapless::{String, Vec};

use crate::{
    AppControl, AudioCodec, Capability, CapabilityRegistry, Connectivity, DeviceState,
    DisplayDriver, LedState, StatusLed, VolumeLevel,
};

/// Maximum notification length a mock display records.
const TEXT_CAPACITY: usize = 64;

fn record_text(text: &str) -> String<TEXT_CAPACITY> {
    let mut s = String::new();
    // Overlong text is dropped silently; tests use short strings.
    let _ = s.push_str(text);
    s
}

/// Mock audio codec: stores the volume, counts writes.
#[derive(Debug, Default)]
pub struct MockCodec {
    volume: VolumeLevel,
    set_calls: usize,
    running: bool,
}

impl MockCodec {
    /// New codec at the power-on default volume.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New codec at a given starting volume.
    #[must_use]
    pub fn with_volume(volume: VolumeLevel) -> Self {
        Self {
            volume,
            ..Self::default()
        }
    }

    /// Number of `set_output_volume` calls observed.
    #[must_use]
    pub fn set_calls(&self) -> usize {
        self.set_calls
    }

    /// Whether the output path is enabled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl AudioCodec for MockCodec {
    type Error = Infallible;

    fn output_volume(&self) -> VolumeLevel {
        self.volume
    }

    async fn set_output_volume(&mut self, volume: VolumeLevel) -> Result<(), Self::Error> {
        self.volume = volume;
        self.set_calls = self.set_calls.saturating_add(1);
        Ok(())
    }

    async fn start(&mut self) -> Result<(), Self::Error> {
        self.running = true;
        Ok(())
    }

    async fn stop(&mut self) -> Result<(), Self::Error> {
        self.running = false;
        Ok(())
    }
}

/// Mock display: records every notification and the current status line.
#[derive(Debug, Default)]
pub struct MockDisplay {
    notifications: Vec<String<TEXT_CAPACITY>, 16>,
    status: Option<String<TEXT_CAPACITY>>,
}

impl MockDisplay {
    /// New empty mock display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications shown so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[String<TEXT_CAPACITY>] {
        &self.notifications
    }

    /// The most recent notification, if any.
    #[must_use]
    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(|s| s.as_str())
    }

    /// The current status line, if one was set.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl DisplayDriver for MockDisplay {
    type Error = Infallible;

    async fn show_notification(&mut self, text: &str) -> Result<(), Self::Error> {
        let _ = self.notifications.push(record_text(text));
        Ok(())
    }

    async fn set_status(&mut self, text: &str) -> Result<(), Self::Error> {
        self.status = Some(record_text(text));
        Ok(())
    }
}

/// Mock status LED: remembers the last applied state.
#[derive(Debug, Default)]
pub struct MockLed {
    state: LedState,
    changes: usize,
}

impl MockLed {
    /// New LED in the `Off` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied state.
    #[must_use]
    pub fn state(&self) -> LedState {
        self.state
    }

    /// Number of `set` calls observed.
    #[must_use]
    pub fn changes(&self) -> usize {
        self.changes
    }
}

impl StatusLed for MockLed {
    type Error = Infallible;

    fn set(&mut self, state: LedState) -> Result<(), Self::Error> {
        self.state = state;
        self.changes = self.changes.saturating_add(1);
        Ok(())
    }
}

/// Mock application state machine.
#[derive(Debug)]
pub struct MockApp {
    state: DeviceState,
    toggles: usize,
}

impl MockApp {
    /// New app reporting the given state.
    #[must_use]
    pub fn new(state: DeviceState) -> Self {
        Self { state, toggles: 0 }
    }

    /// Change the reported state.
    pub fn set_state(&mut self, state: DeviceState) {
        self.state = state;
    }

    /// Number of session toggles observed.
    #[must_use]
    pub fn toggles(&self) -> usize {
        self.toggles
    }
}

impl AppControl for MockApp {
    fn device_state(&self) -> DeviceState {
        self.state
    }

    fn toggle_chat(&mut self) {
        self.toggles = self.toggles.saturating_add(1);
    }
}

/// Mock Wi-Fi layer.
#[derive(Debug)]
pub struct MockConnectivity {
    connected: bool,
    resets: usize,
}

impl MockConnectivity {
    /// New mock reporting the given association state.
    #[must_use]
    pub fn new(connected: bool) -> Self {
        Self {
            connected,
            resets: 0,
        }
    }

    /// Number of configuration resets observed.
    #[must_use]
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl Connectivity for MockConnectivity {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn reset_configuration(&mut self) {
        self.resets = self.resets.saturating_add(1);
    }
}

/// Mock IoT thing registry.
#[derive(Debug, Default)]
pub struct MockRegistry {
    registered: Vec<Capability, 8>,
}

impl MockRegistry {
    /// New empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capabilities registered so far, in order.
    #[must_use]
    pub fn registered(&self) -> &[Capability] {
        &self.registered
    }
}

impl CapabilityRegistry for MockRegistry {
    fn register(&mut self, capability: Capability) {
        let _ = self.registered.push(capability);
    }
}
