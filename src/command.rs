//! Controller command definitions
//!
//! This module defines the command bytes understood by the supported
//! panel controllers. Commands are sent over SPI with the DC pin low;
//! pixel data is sent with the DC pin high.
//!
//! ## Command structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Assert CS (chip select)
//! 3. Send command byte
//! 4. Deassert CS
//!
//! Both controller families carry command arguments in the low bits of
//! the command byte itself (e.g. `SET_BIAS | 0x2`) rather than in
//! separate parameter bytes.

/// PCD8544 command set (48x84 pixel controller, e.g. Nokia 5110/3310 panels)
pub mod pcd8544 {
    /// Function set command (0x20)
    ///
    /// Base command selecting power mode, addressing mode and instruction
    /// set. OR with [`FUNCTION_POWER_DOWN`], [`FUNCTION_VERTICAL_ADDRESSING`]
    /// and/or [`EXTENDED_INSTRUCTION`].
    pub const FUNCTION_SET: u8 = 0x20;

    /// Power-down bit for [`FUNCTION_SET`]
    pub const FUNCTION_POWER_DOWN: u8 = 0x04;

    /// Vertical addressing bit for [`FUNCTION_SET`]
    pub const FUNCTION_VERTICAL_ADDRESSING: u8 = 0x02;

    /// Extended instruction set bit for [`FUNCTION_SET`]
    ///
    /// While set, the extended commands ([`SET_TEMP`], [`SET_BIAS`],
    /// [`SET_VOP`]) are in effect and the standard ones are unavailable.
    pub const EXTENDED_INSTRUCTION: u8 = 0x01;

    /// Display control command (0x08)
    ///
    /// OR with one of the `DISPLAY_*` mode values.
    pub const DISPLAY_CONTROL: u8 = 0x08;

    /// Display blank mode for [`DISPLAY_CONTROL`]
    pub const DISPLAY_BLANK: u8 = 0x00;

    /// Normal display mode for [`DISPLAY_CONTROL`]
    pub const DISPLAY_NORMAL: u8 = 0x04;

    /// All segments on for [`DISPLAY_CONTROL`]
    pub const DISPLAY_ALL_ON: u8 = 0x01;

    /// Inverse video mode for [`DISPLAY_CONTROL`]
    pub const DISPLAY_INVERTED: u8 = 0x05;

    /// Set Y address of RAM (0x40), OR with bank number 0..=5
    pub const SET_Y_ADDRESS: u8 = 0x40;

    /// Set X address of RAM (0x80), OR with column 0..=83
    pub const SET_X_ADDRESS: u8 = 0x80;

    // Extended instruction set (only valid after EXTENDED_INSTRUCTION)

    /// Temperature coefficient command (0x04), OR with coefficient 0..=3
    pub const SET_TEMP: u8 = 0x04;

    /// Bias system command (0x10), OR with bias value 0..=7
    pub const SET_BIAS: u8 = 0x10;

    /// Operating voltage command (0x80), OR with Vop value 0..=127
    ///
    /// Vop sets the LCD drive voltage and thereby the contrast.
    pub const SET_VOP: u8 = 0x80;
}

/// ST7565R command set (65x132 dot matrix controller)
pub mod st7565r {
    /// Display on (0xAF)
    pub const DISPLAY_ON: u8 = 0xAF;

    /// Display off (0xAE)
    pub const DISPLAY_OFF: u8 = 0xAE;

    /// Display start line set (0x40), OR with line 0..=63
    pub const START_LINE: u8 = 0x40;

    /// Page address set (0xB0), OR with page 0..=8
    pub const PAGE_ADDRESS: u8 = 0xB0;

    /// Column address set, high nibble (0x10), OR with bits 7:4 of the column
    pub const COLUMN_HIGH: u8 = 0x10;

    /// Column address set, low nibble (0x00), OR with bits 3:0 of the column
    pub const COLUMN_LOW: u8 = 0x00;

    /// ADC select, normal column order (0xA0)
    pub const ADC_NORMAL: u8 = 0xA0;

    /// ADC select, reversed column order (0xA1)
    pub const ADC_REVERSE: u8 = 0xA1;

    /// Display normal (0xA6)
    pub const DISPLAY_NORMAL: u8 = 0xA6;

    /// Display reverse, pixels inverted (0xA7)
    pub const DISPLAY_REVERSE: u8 = 0xA7;

    /// All points on (0xA5)
    ///
    /// Lights the entire panel regardless of RAM contents. Used as a
    /// lamp test during bring-up; return to [`ALL_POINTS_NORMAL`] afterwards.
    pub const ALL_POINTS_ON: u8 = 0xA5;

    /// All points normal, display follows RAM (0xA4)
    pub const ALL_POINTS_NORMAL: u8 = 0xA4;

    /// LCD bias ratio select (0xA2), OR with 0 for 1/9 bias or 1 for 1/7 bias
    pub const BIAS_RATIO: u8 = 0xA2;

    /// Software reset (0xE2)
    ///
    /// Internal reset; does not replace the hardware reset pulse.
    pub const RESET: u8 = 0xE2;

    /// COM output scan direction, normal (0xC0)
    pub const COM_NORMAL: u8 = 0xC0;

    /// COM output scan direction, reversed (0xC8)
    pub const COM_REVERSE: u8 = 0xC8;

    /// Power controller set (0x28), OR with booster/regulator/follower bits 0..=7
    pub const POWER_CONTROL: u8 = 0x28;

    /// Internal resistor ratio set (0x20), OR with ratio 0..=7
    pub const RESISTOR_RATIO: u8 = 0x20;

    /// Electronic volume mode set (0x81)
    ///
    /// Double-byte command: must be followed immediately by the volume
    /// value (0..=63), sent as a second command byte.
    pub const VOLUME_MODE_SET: u8 = 0x81;

    /// Static indicator on (0xAD), double-byte command
    pub const STATIC_INDICATOR_ON: u8 = 0xAD;

    /// Static indicator off (0xAC)
    pub const STATIC_INDICATOR_OFF: u8 = 0xAC;

    /// No operation (0xE3)
    pub const NOP: u8 = 0xE3;
}
