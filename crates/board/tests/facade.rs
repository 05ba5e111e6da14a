//! Facade scenarios driven entirely through the trait seams.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;

use board::{
    boards, Board, BoardConfig, BusFactory, BusManager, DisplayInterface, I2cBusConfig,
    PeripheralBuilder, PeripheralFactory,
};
use platform::mocks::{MockApp, MockCodec, MockConnectivity, MockDisplay, MockLed, MockRegistry};
use platform::{AudioCodec, Button, Capability, DeviceState, InputEvent, VolumeLevel};

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

#[derive(Default)]
struct BuildCounts {
    led: usize,
    codec: usize,
    display: usize,
}

/// Builder handing out platform mocks, counting constructions.
struct MockBuilder {
    codec_seed: Option<MockCodec>,
    counts: Rc<RefCell<BuildCounts>>,
}

impl MockBuilder {
    fn with_volume(percent: u8) -> (Self, Rc<RefCell<BuildCounts>>) {
        let counts = Rc::new(RefCell::new(BuildCounts::default()));
        let builder = Self {
            codec_seed: Some(MockCodec::with_volume(VolumeLevel::new(percent))),
            counts: Rc::clone(&counts),
        };
        (builder, counts)
    }
}

impl PeripheralBuilder for MockBuilder {
    type Led = MockLed;
    type Codec = MockCodec;
    type Display = MockDisplay;
    type Error = Infallible;

    fn build_led(&mut self, _config: &BoardConfig) -> Result<MockLed, Infallible> {
        self.counts.borrow_mut().led += 1;
        Ok(MockLed::new())
    }

    fn build_codec(&mut self, _config: &BoardConfig) -> Result<MockCodec, Infallible> {
        self.counts.borrow_mut().codec += 1;
        Ok(self.codec_seed.take().unwrap_or_default())
    }

    fn build_display(&mut self, _config: &BoardConfig) -> Result<MockDisplay, Infallible> {
        self.counts.borrow_mut().display += 1;
        Ok(MockDisplay::new())
    }
}

type TestBoard = Board<MockBuilder, MockApp, MockConnectivity, MockRegistry>;

fn board_with(
    volume: u8,
    state: DeviceState,
    connected: bool,
) -> (TestBoard, Rc<RefCell<BuildCounts>>) {
    let (builder, counts) = MockBuilder::with_volume(volume);
    let factory = PeripheralFactory::new(&boards::OLED_096, builder);
    let board = Board::new(
        factory,
        MockApp::new(state),
        MockConnectivity::new(connected),
        MockRegistry::new(),
    );
    (board, counts)
}

fn volume_of(board: &mut TestBoard) -> u8 {
    board.audio_codec().unwrap().output_volume().percent()
}

fn last_notification(board: &mut TestBoard) -> String {
    board.display().unwrap().last_notification().unwrap().to_owned()
}

// ---------------------------------------------------------------------------
// Volume actions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn volume_keys_step_clamp_and_notify() {
    let (mut board, _) = board_with(50, DeviceState::Idle, true);

    board
        .handle_input(InputEvent::Click(Button::VolumeUp))
        .await
        .unwrap();
    assert_eq!(volume_of(&mut board), 60);
    assert_eq!(last_notification(&mut board), "Volume 60");

    board
        .handle_input(InputEvent::LongPress(Button::VolumeUp))
        .await
        .unwrap();
    assert_eq!(volume_of(&mut board), 100);
    assert_eq!(last_notification(&mut board), "Max volume");

    board
        .handle_input(InputEvent::Click(Button::VolumeDown))
        .await
        .unwrap();
    assert_eq!(volume_of(&mut board), 90);
    assert_eq!(last_notification(&mut board), "Volume 90");
}

#[tokio::test]
async fn volume_is_clamped_at_both_ends() {
    let (mut board, _) = board_with(95, DeviceState::Idle, true);
    board
        .handle_input(InputEvent::Click(Button::VolumeUp))
        .await
        .unwrap();
    assert_eq!(volume_of(&mut board), 100, "95 + step clamps to 100");

    let (mut board, _) = board_with(5, DeviceState::Idle, true);
    board
        .handle_input(InputEvent::Click(Button::VolumeDown))
        .await
        .unwrap();
    assert_eq!(volume_of(&mut board), 0, "5 - step clamps to 0");
}

#[tokio::test]
async fn repeated_mute_and_max_are_idempotent() {
    let (mut board, _) = board_with(50, DeviceState::Idle, true);

    for _ in 0..3 {
        board
            .handle_input(InputEvent::LongPress(Button::VolumeDown))
            .await
            .unwrap();
        assert_eq!(volume_of(&mut board), 0);
        assert_eq!(last_notification(&mut board), "Muted");
    }

    for _ in 0..3 {
        board
            .handle_input(InputEvent::LongPress(Button::VolumeUp))
            .await
            .unwrap();
        assert_eq!(volume_of(&mut board), 100);
        assert_eq!(last_notification(&mut board), "Max volume");
    }
}

// ---------------------------------------------------------------------------
// Primary button
// ---------------------------------------------------------------------------

#[tokio::test]
async fn boot_click_while_starting_and_offline_resets_network_then_toggles() {
    let (mut board, _) = board_with(50, DeviceState::Starting, false);
    board
        .handle_input(InputEvent::Click(Button::Boot))
        .await
        .unwrap();
    assert_eq!(board.connectivity().resets(), 1);
    assert_eq!(board.app().toggles(), 1);
}

#[tokio::test]
async fn boot_click_while_connected_only_toggles_the_session() {
    let (mut board, _) = board_with(50, DeviceState::Starting, true);
    board
        .handle_input(InputEvent::Click(Button::Boot))
        .await
        .unwrap();
    assert_eq!(board.connectivity().resets(), 0);
    assert_eq!(board.app().toggles(), 1);

    let (mut board, _) = board_with(50, DeviceState::Idle, false);
    board
        .handle_input(InputEvent::Click(Button::Boot))
        .await
        .unwrap();
    assert_eq!(board.connectivity().resets(), 0, "only the starting state arms the reset");
    assert_eq!(board.app().toggles(), 1);
}

#[tokio::test]
async fn touch_click_toggles_without_touching_the_network() {
    let (mut board, _) = board_with(50, DeviceState::Starting, false);
    board
        .handle_input(InputEvent::Click(Button::Touch))
        .await
        .unwrap();
    assert_eq!(board.connectivity().resets(), 0);
    assert_eq!(board.app().toggles(), 1);
}

// ---------------------------------------------------------------------------
// Factory guarantees and capability registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn peripherals_are_constructed_at_most_once() {
    let (mut board, counts) = board_with(50, DeviceState::Idle, true);

    let first: *const MockDisplay = board.display().unwrap();
    let second: *const MockDisplay = board.display().unwrap();
    assert!(core::ptr::eq(first, second), "same display instance");

    for _ in 0..3 {
        let _ = board.audio_codec().unwrap();
        let _ = board.led().unwrap();
    }
    // The mutating event path must reuse the same codec instance too.
    board
        .handle_input(InputEvent::Click(Button::VolumeUp))
        .await
        .unwrap();

    let counts = counts.borrow();
    assert_eq!(counts.led, 1);
    assert_eq!(counts.codec, 1);
    assert_eq!(counts.display, 1);
}

#[tokio::test]
async fn speaker_capability_is_registered_at_composition() {
    let (board, _) = board_with(50, DeviceState::Idle, true);
    assert_eq!(board.registry().registered(), &[Capability::Speaker]);
}

// ---------------------------------------------------------------------------
// Shared control bus
// ---------------------------------------------------------------------------

/// Fake transport recording which device addresses were probed.
struct ProbeBus {
    probes: Vec<u8>,
}

struct ProbeBusFactory;

impl BusFactory for ProbeBusFactory {
    type Bus = ProbeBus;
    type Error = Infallible;

    fn open(_config: &I2cBusConfig) -> Result<ProbeBus, Infallible> {
        Ok(ProbeBus { probes: Vec::new() })
    }
}

/// Builder whose codec and display both live on the shared control bus.
struct SharedBusBuilder<'a> {
    bus: &'a BusManager<NoopRawMutex, ProbeBusFactory>,
}

impl PeripheralBuilder for SharedBusBuilder<'_> {
    type Led = MockLed;
    type Codec = MockCodec;
    type Display = MockDisplay;
    type Error = Infallible;

    fn build_led(&mut self, _config: &BoardConfig) -> Result<MockLed, Infallible> {
        Ok(MockLed::new())
    }

    fn build_codec(&mut self, config: &BoardConfig) -> Result<MockCodec, Infallible> {
        let handle = self.bus.acquire();
        embassy_futures::block_on(
            handle.transaction(|bus| bus.probes.push(config.audio.codec_address)),
        );
        Ok(MockCodec::new())
    }

    fn build_display(&mut self, config: &BoardConfig) -> Result<MockDisplay, Infallible> {
        let handle = self.bus.acquire();
        if let DisplayInterface::I2c { address } = config.display.interface {
            embassy_futures::block_on(handle.transaction(|bus| bus.probes.push(address)));
        }
        Ok(MockDisplay::new())
    }
}

#[tokio::test]
async fn codec_and_display_share_one_configured_bus() {
    let manager =
        BusManager::<NoopRawMutex, ProbeBusFactory>::new(&boards::OLED_096.control_bus).unwrap();
    let builder = SharedBusBuilder { bus: &manager };
    let mut factory = PeripheralFactory::new(&boards::OLED_096, builder);

    let _ = factory.codec().unwrap();
    let _ = factory.display().unwrap();

    assert_eq!(manager.user_count(), 2, "one handle per bus-attached peripheral");
    let handle = manager.acquire();
    let probes = handle.transaction(|bus| bus.probes.clone()).await;
    assert_eq!(probes, vec![0x18, 0x3C], "both devices talked over the same bus");
}
