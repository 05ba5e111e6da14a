//! Wiring constants for the supported board variants.
//!
//! Adding a variant means adding a constant here; no code changes.

use crate::bus::{ClockSource, I2cBusConfig};
use crate::config::{
    AudioWiring, BoardConfig, ButtonWiring, DisplayInterface, DisplayWiring, PinId, RgbOrder,
};

/// 0.96" SSD1306 OLED variant.
///
/// The OLED and the ES8311 codec share the control I2C bus; the codec
/// consumes the master clock and drives a gated speaker amplifier.
pub const OLED_096: BoardConfig = BoardConfig {
    name: "oled-096",
    control_bus: I2cBusConfig {
        port: 0,
        sda: PinId(1),
        scl: PinId(2),
        clock_source: ClockSource::Default,
        glitch_filter_cycles: 7,
        internal_pullup: true,
        interrupt_priority: 0,
        transaction_queue_depth: 0,
    },
    audio: AudioWiring {
        input_sample_rate: 16_000,
        output_sample_rate: 24_000,
        mclk: Some(PinId(16)),
        bclk: PinId(9),
        ws: PinId(45),
        dout: PinId(8),
        din: PinId(10),
        mic_sck: None,
        mic_ws: None,
        codec_address: 0x18,
        amp_enable: Some(PinId(38)),
        use_mclk: true,
    },
    display: DisplayWiring {
        interface: DisplayInterface::I2c { address: 0x3C },
        width: 128,
        height: 64,
        mirror_x: true,
        mirror_y: true,
        swap_xy: false,
        invert_color: false,
        rgb_order: RgbOrder::Rgb,
        offset_x: 0,
        offset_y: 0,
        backlight: None,
        backlight_active_low: false,
    },
    buttons: ButtonWiring {
        boot: Some(PinId(0)),
        touch: None,
        volume_up: Some(PinId(40)),
        volume_down: Some(PinId(39)),
    },
    led: Some(PinId(48)),
};

/// 1.8" ST7735 SPI LCD variant.
///
/// Simplex I2S with a separate microphone clock pair; volume keys and
/// touch pad are not populated, so volume is remote-controlled only.
pub const LCD_ST7735: BoardConfig = BoardConfig {
    name: "lcd-st7735",
    control_bus: I2cBusConfig {
        port: 0,
        sda: PinId(15),
        scl: PinId(14),
        clock_source: ClockSource::Default,
        glitch_filter_cycles: 7,
        internal_pullup: true,
        interrupt_priority: 0,
        transaction_queue_depth: 0,
    },
    audio: AudioWiring {
        input_sample_rate: 16_000,
        output_sample_rate: 24_000,
        mclk: None,
        bclk: PinId(42),
        ws: PinId(2),
        dout: PinId(40),
        din: PinId(7),
        mic_sck: Some(PinId(38)),
        mic_ws: Some(PinId(39)),
        codec_address: 0x18,
        amp_enable: None,
        use_mclk: false,
    },
    display: DisplayWiring {
        interface: DisplayInterface::Spi {
            mosi: PinId(18),
            clk: PinId(17),
            dc: PinId(8),
            rst: Some(PinId(20)),
            cs: Some(PinId(16)),
        },
        width: 128,
        height: 160,
        mirror_x: true,
        mirror_y: true,
        swap_xy: false,
        invert_color: false,
        rgb_order: RgbOrder::Rgb,
        offset_x: 2,
        offset_y: 1,
        backlight: Some(PinId(9)),
        backlight_active_low: false,
    },
    buttons: ButtonWiring {
        boot: Some(PinId(0)),
        touch: None,
        volume_up: None,
        volume_down: None,
    },
    led: Some(PinId(48)),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_have_distinct_display_attachments() {
        assert!(matches!(
            OLED_096.display.interface,
            DisplayInterface::I2c { .. }
        ));
        assert!(matches!(
            LCD_ST7735.display.interface,
            DisplayInterface::Spi { .. }
        ));
    }

    #[test]
    fn unpopulated_controls_use_the_sentinel() {
        use platform::Button;

        assert!(LCD_ST7735.buttons.pin(Button::VolumeUp).is_none());
        assert!(LCD_ST7735.buttons.pin(Button::VolumeDown).is_none());
        assert!(LCD_ST7735.buttons.pin(Button::Touch).is_none());
        assert!(LCD_ST7735.buttons.pin(Button::Boot).is_some());
    }

    #[test]
    fn mclk_flag_matches_the_wiring() {
        assert_eq!(OLED_096.audio.use_mclk, OLED_096.audio.mclk.is_some());
        assert_eq!(LCD_ST7735.audio.use_mclk, LCD_ST7735.audio.mclk.is_some());
    }
}
