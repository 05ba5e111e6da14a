//! Board layer: bus ownership, button input and the board facade.
//!
//! This crate turns a data-driven [`BoardConfig`] into the single entry
//! point the rest of the system talks to:
//!
//! ```text
//! GPIO levels ──► ButtonMachine ──► InputEvent channel ──► Board facade
//!                                                              │
//!                 BusManager ──► PeripheralFactory ──► Led / AudioCodec / DisplayDriver
//! ```
//!
//! One board variant differs from another only by its [`BoardConfig`]
//! constants (see [`boards`]); the facade implementation is shared.
//!
//! # Features
//!
//! - `std`: expose platform mocks to downstream tests
//! - `defmt`: enable defmt logging (hardware builds only)

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(async_fn_in_trait)] // single-core firmware: Send bounds not needed

pub mod boards;
pub mod bus;
pub mod button;
pub mod config;
pub mod facade;
pub mod input;
pub mod peripherals;

pub use bus::{BusError, BusFactory, BusHandle, BusManager, ClockSource, I2cBusConfig};
pub use button::{ButtonConfig, ButtonEvent, ButtonMachine, Level};
pub use config::{
    AudioWiring, BoardConfig, ButtonWiring, DisplayInterface, DisplayWiring, PinId, RgbOrder,
};
pub use facade::{Board, BoardError, BoardResult};
pub use input::{ButtonPoller, InputReceiver, InputRunner, InputSender, INPUT_CHANNEL};
pub use peripherals::{FactoryError, PeripheralBuilder, PeripheralFactory};
