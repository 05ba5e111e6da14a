//! Shared communication bus lifecycle.
//!
//! One [`BusManager`] owns one configured I2C port for the life of the
//! process and hands out any number of [`BusHandle`]s. Every transaction
//! through a handle locks a shared mutex, so two peripherals on the same
//! bus can never interleave transfers even when driven from different
//! tasks.

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use thiserror_no_std::Error;

use crate::config::PinId;

/// Clock source feeding the I2C controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Controller default clock.
    #[default]
    Default,
    /// Crystal oscillator.
    Xtal,
    /// Fast internal RC oscillator.
    RcFast,
}

/// I2C master bus configuration.
///
/// Fixed at board-definition time; the manager applies it exactly once.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cBusConfig {
    /// Physical I2C port index.
    pub port: u8,
    /// Data line.
    pub sda: PinId,
    /// Clock line.
    pub scl: PinId,
    /// Controller clock source.
    pub clock_source: ClockSource,
    /// Glitches shorter than this many controller cycles are filtered.
    pub glitch_filter_cycles: u8,
    /// Enable the internal pull-ups on SDA/SCL.
    pub internal_pullup: bool,
    /// Interrupt priority for the controller.
    pub interrupt_priority: u8,
    /// Depth of the hardware transaction queue (0 = synchronous).
    pub transaction_queue_depth: usize,
}

impl I2cBusConfig {
    /// Configuration with the wiring given and conservative defaults for
    /// everything else.
    #[must_use]
    pub const fn new(port: u8, sda: PinId, scl: PinId) -> Self {
        Self {
            port,
            sda,
            scl,
            clock_source: ClockSource::Default,
            glitch_filter_cycles: 7,
            internal_pullup: true,
            interrupt_priority: 0,
            transaction_queue_depth: 0,
        }
    }
}

/// Opens the concrete transport behind a [`BusManager`].
///
/// Hardware implementations live next to the HAL; tests plug in mocks.
pub trait BusFactory {
    /// The configured bus type.
    type Bus;
    /// Error produced when the transport cannot be configured.
    type Error: fmt::Debug;

    /// Claim the port's pins and configure the controller.
    fn open(config: &I2cBusConfig) -> Result<Self::Bus, Self::Error>;
}

/// Bus lifecycle errors.
///
/// Configuration failure is fatal for this device class: both peripherals
/// on the bus are usability-critical, so there is no degraded mode and no
/// retry. It indicates a wiring or board-constant defect.
#[derive(Debug, Error)]
pub enum BusError<E: fmt::Debug> {
    /// The underlying transport could not be configured.
    #[error("bus configuration failed: {0:?}")]
    Configure(E),
}

/// Owns one configured bus and distributes shared handles.
pub struct BusManager<M: RawMutex, F: BusFactory> {
    bus: Mutex<M, F::Bus>,
    port: u8,
    users: AtomicUsize,
}

impl<M: RawMutex, F: BusFactory> BusManager<M, F> {
    /// Configure the port and take exclusive ownership of its pins.
    ///
    /// Called exactly once per physical port, at the composition root.
    pub fn new(config: &I2cBusConfig) -> Result<Self, BusError<F::Error>> {
        let bus = F::open(config).map_err(BusError::Configure)?;
        Ok(Self {
            bus: Mutex::new(bus),
            port: config.port,
            users: AtomicUsize::new(0),
        })
    }

    /// Hand out a handle to the already-configured bus.
    ///
    /// Idempotent: any number of handles may coexist and the hardware is
    /// never touched here.
    pub fn acquire(&self) -> BusHandle<'_, M, F::Bus> {
        self.users.fetch_add(1, Ordering::Relaxed);
        BusHandle { bus: &self.bus }
    }

    /// The physical port this manager owns.
    #[must_use]
    pub fn port(&self) -> u8 {
        self.port
    }

    /// Number of handles handed out so far (diagnostics only).
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.load(Ordering::Relaxed)
    }
}

/// Shared reference to a configured bus.
///
/// Cheap to copy; dropping a handle has no effect on the bus.
pub struct BusHandle<'a, M: RawMutex, B> {
    bus: &'a Mutex<M, B>,
}

impl<M: RawMutex, B> Clone for BusHandle<'_, M, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex, B> Copy for BusHandle<'_, M, B> {}

impl<B, M: RawMutex> BusHandle<'_, M, B> {
    /// Run one bus transaction with exclusive access.
    ///
    /// The mutex is held for the duration of the closure, so a transfer
    /// started by one peripheral cannot be corrupted by another.
    pub async fn transaction<R>(&self, op: impl FnOnce(&mut B) -> R) -> R {
        let mut bus = self.bus.lock().await;
        op(&mut bus)
    }
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicUsize, Ordering};

    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;

    static OPEN_CALLS: AtomicUsize = AtomicUsize::new(0);

    /// Fake transport: a byte register the tests can read back.
    struct FakeBus {
        last_write: u8,
    }

    struct FakeFactory;

    impl BusFactory for FakeFactory {
        type Bus = FakeBus;
        type Error = &'static str;

        fn open(config: &I2cBusConfig) -> Result<FakeBus, &'static str> {
            OPEN_CALLS.fetch_add(1, Ordering::Relaxed);
            if config.sda == config.scl {
                return Err("sda and scl on the same pin");
            }
            Ok(FakeBus { last_write: 0 })
        }
    }

    fn config() -> I2cBusConfig {
        I2cBusConfig::new(0, PinId(1), PinId(2))
    }

    #[test]
    fn configures_exactly_once_for_any_number_of_handles() {
        let before = OPEN_CALLS.load(Ordering::Relaxed);
        let manager = match BusManager::<NoopRawMutex, FakeFactory>::new(&config()) {
            Ok(m) => m,
            Err(e) => unreachable!("open failed: {e:?}"),
        };
        let _codec_handle = manager.acquire();
        let _display_handle = manager.acquire();
        assert_eq!(OPEN_CALLS.load(Ordering::Relaxed), before.saturating_add(1));
        assert_eq!(manager.user_count(), 2);
        assert_eq!(manager.port(), 0);
    }

    #[test]
    fn handles_share_one_bus() {
        let manager = match BusManager::<NoopRawMutex, FakeFactory>::new(&config()) {
            Ok(m) => m,
            Err(e) => unreachable!("open failed: {e:?}"),
        };
        let writer = manager.acquire();
        let reader = manager.acquire();

        block_on(writer.transaction(|bus| bus.last_write = 0x42));
        let seen = block_on(reader.transaction(|bus| bus.last_write));
        assert_eq!(seen, 0x42, "both handles must address the same bus");
    }

    #[test]
    fn bad_wiring_is_a_fatal_configure_error() {
        let mut bad = config();
        bad.scl = bad.sda;
        let result = BusManager::<NoopRawMutex, FakeFactory>::new(&bad);
        assert!(matches!(result, Err(BusError::Configure(_))));
    }
}
