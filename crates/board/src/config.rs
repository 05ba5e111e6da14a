//! Data-driven board wiring description.
//!
//! One [`BoardConfig`] value per physical board variant replaces a class
//! hierarchy of near-duplicate board types: the facade implementation is
//! shared and only the constants differ (see [`crate::boards`]).

use platform::Button;

use crate::bus::I2cBusConfig;

/// GPIO identifier on the target SoC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

/// RGB element order of an LCD panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbOrder {
    /// Red, green, blue.
    Rgb,
    /// Blue, green, red.
    Bgr,
}

/// How the display panel is attached.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayInterface {
    /// Panel on the shared control I2C bus (see [`BoardConfig::control_bus`]).
    I2c {
        /// 7-bit device address.
        address: u8,
    },
    /// SPI-attached panel.
    Spi {
        /// Data out.
        mosi: PinId,
        /// Clock.
        clk: PinId,
        /// Data/command select.
        dc: PinId,
        /// Reset line, if wired.
        rst: Option<PinId>,
        /// Chip select, if wired.
        cs: Option<PinId>,
    },
}

/// I2S and control wiring for the audio codec.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioWiring {
    /// Capture sample rate in Hz.
    pub input_sample_rate: u32,
    /// Playback sample rate in Hz.
    pub output_sample_rate: u32,
    /// Master clock, where the codec consumes one.
    pub mclk: Option<PinId>,
    /// Bit clock (speaker path).
    pub bclk: PinId,
    /// Word select / LR clock (speaker path).
    pub ws: PinId,
    /// Serial data out towards the speaker DAC.
    pub dout: PinId,
    /// Serial data in from the microphone ADC.
    pub din: PinId,
    /// Separate microphone bit clock on simplex boards.
    pub mic_sck: Option<PinId>,
    /// Separate microphone word select on simplex boards.
    pub mic_ws: Option<PinId>,
    /// 7-bit I2C address of the codec on the control bus.
    pub codec_address: u8,
    /// Amplifier / power-gate enable, where the board has one.
    pub amp_enable: Option<PinId>,
    /// Whether the codec is fed the master clock line. Determines the
    /// word/bit clock relationship the codec must be programmed for.
    pub use_mclk: bool,
}

/// Panel wiring and orientation.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayWiring {
    /// Bus attachment.
    pub interface: DisplayInterface,
    /// Horizontal resolution in pixels.
    pub width: u16,
    /// Vertical resolution in pixels.
    pub height: u16,
    /// Mirror along X.
    pub mirror_x: bool,
    /// Mirror along Y.
    pub mirror_y: bool,
    /// Swap the X and Y axes.
    pub swap_xy: bool,
    /// Invert all colors.
    pub invert_color: bool,
    /// Panel RGB element order.
    pub rgb_order: RgbOrder,
    /// Horizontal panel offset in pixels.
    pub offset_x: i16,
    /// Vertical panel offset in pixels.
    pub offset_y: i16,
    /// Backlight control pin, where the panel has one.
    pub backlight: Option<PinId>,
    /// Backlight pin drives low-to-light.
    pub backlight_active_low: bool,
}

/// One GPIO per logical button; `None` means not populated on this board.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonWiring {
    /// Boot / primary button.
    pub boot: Option<PinId>,
    /// Capacitive touch pad.
    pub touch: Option<PinId>,
    /// Volume up.
    pub volume_up: Option<PinId>,
    /// Volume down.
    pub volume_down: Option<PinId>,
}

impl ButtonWiring {
    /// The GPIO wired to `button`, if populated on this board.
    #[must_use]
    pub const fn pin(&self, button: Button) -> Option<PinId> {
        match button {
            Button::Boot => self.boot,
            Button::Touch => self.touch,
            Button::VolumeUp => self.volume_up,
            Button::VolumeDown => self.volume_down,
        }
    }
}

/// Complete wiring of one board variant. Fixed at compile time.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Variant name, for logs.
    pub name: &'static str,
    /// Shared control bus carrying the codec (and any I2C display).
    pub control_bus: I2cBusConfig,
    /// Audio codec wiring.
    pub audio: AudioWiring,
    /// Display wiring.
    pub display: DisplayWiring,
    /// Button wiring.
    pub buttons: ButtonWiring,
    /// Status LED, where populated.
    pub led: Option<PinId>,
}
