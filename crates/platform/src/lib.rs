//! Hardware abstraction layer for the voice-assistant device.
//!
//! This crate provides trait-based abstractions for every board capability
//! the application touches, so that application code never branches on
//! board identity and every downstream crate can be tested against mocks.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (chat engine, UI, codec pipeline)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Board Layer (board crate - bus manager, buttons, factory, facade)
//!         ↓
//! Hardware Layer (vendor HAL + PAC)
//! ```
//!
//! # Abstraction Levels
//!
//! - [`AudioCodec`] - speaker/microphone codec, output volume
//! - [`DisplayDriver`] - status line and transient notifications
//! - [`StatusLed`] - single status LED
//! - [`InputEvent`] / [`Button`] - semantic button events
//! - [`AppControl`] / [`Connectivity`] / [`CapabilityRegistry`] - seams to
//!   the application state machine, Wi-Fi layer and IoT thing registry
//!
//! # Features
//!
//! - `std`: expose the mock implementations for host-side testing
//! - `defmt`: enable defmt logging derives (hardware builds only)

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(async_fn_in_trait)] // single-core firmware: Send bounds not needed

pub mod app;
pub mod audio;
pub mod display;
pub mod input;
pub mod led;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

pub use app::{AppControl, Capability, CapabilityRegistry, Connectivity, DeviceState};
pub use audio::{AudioCodec, VolumeLevel, VOLUME_STEP};
pub use display::{DisplayDriver, DisplayError};
pub use input::{Button, InputEvent};
pub use led::{LedState, StatusLed};
