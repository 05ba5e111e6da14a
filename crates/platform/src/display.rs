//! Display abstraction layer.
//!
//! Pixel pushing lives with the concrete panel driver; the application only
//! ever writes a status line or flashes a transient notification.

use thiserror_no_std::Error;

/// Display driver trait.
pub trait DisplayDriver {
    /// Error type for display operations.
    type Error: core::fmt::Debug;

    /// Show a transient on-screen notification (e.g. `"Volume 60"`).
    ///
    /// The notification replaces any previous one; how long it stays on
    /// screen is the driver's business.
    async fn show_notification(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Set the persistent status line (connection state, session state).
    async fn set_status(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// Errors common to bus-attached panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication with the panel failed.
    #[error("display communication error")]
    Communication,
    /// The panel is busy with a previous operation.
    #[error("display is busy")]
    Busy,
    /// Operation timed out.
    #[error("display operation timeout")]
    Timeout,
}
