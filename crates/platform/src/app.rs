//! Seams to the application layer.
//!
//! The board layer never drives the chat engine, Wi-Fi stack or IoT thing
//! registry directly; it calls through these traits so the action wiring
//! can be tested against mocks.

/// Coarse application state as reported by the chat engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Booting, network not yet brought up.
    Starting,
    /// Waiting for Wi-Fi provisioning.
    WifiConfiguring,
    /// Connected and idle.
    Idle,
    /// Establishing the server connection.
    Connecting,
    /// Conversational session active, capturing audio.
    Listening,
    /// Playing back a response.
    Speaking,
    /// Unrecoverable fault.
    FatalError,
}

/// Application state machine surface used by the board facade.
pub trait AppControl {
    /// Current device state.
    fn device_state(&self) -> DeviceState;

    /// Start or stop the conversational session.
    fn toggle_chat(&mut self);
}

/// Wi-Fi connectivity surface used by the board facade.
pub trait Connectivity {
    /// Whether the station is associated with an access point.
    fn is_connected(&self) -> bool;

    /// Drop the stored credentials and re-enter provisioning.
    fn reset_configuration(&mut self);
}

/// Capabilities a board can announce to the IoT thing registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Capability {
    /// Remotely controllable speaker (volume).
    Speaker,
    /// Remotely controllable screen (brightness, theme).
    Screen,
    /// Remotely controllable lamp.
    Lamp,
}

/// IoT thing registry surface; the registered things are opaque here.
pub trait CapabilityRegistry {
    /// Announce a capability of this board.
    fn register(&mut self, capability: Capability);
}
