//! Controller variants and bring-up sequencing
//!
//! Each supported panel controller needs a precise, order-dependent
//! sequence of commands and timed pulses before it is addressable. The
//! [`Controller`] trait captures that sequence per variant, together
//! with the panel geometry and the tunable-value limits the
//! [`Builder`](crate::Builder) validates against.
//!
//! The variant is chosen at build time by picking [`Pcd8544`] or
//! [`St7565r`] as the type parameter of [`Display`](crate::Display);
//! there is no runtime switch, and an unsupported controller cannot be
//! expressed (the trait is sealed).

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::command::{pcd8544, st7565r};
use crate::config::Config;
use crate::interface::LcdInterface;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Pcd8544 {}
    impl Sealed for super::St7565r {}
}

/// A supported panel controller variant
///
/// Sealed: exactly [`Pcd8544`] and [`St7565r`] implement it. The
/// bring-up sequence is linear — each step is one command or a small
/// burst, the only transition is "next step," and no step retries. It
/// carries no state between runs, so running it twice issues the same
/// command sequence twice.
pub trait Controller: sealed::Sealed + Sized {
    /// Panel width in pixels
    const WIDTH: u8;
    /// Panel height in pixels
    const HEIGHT: u8;
    /// Minimum hardware reset low-pulse width in milliseconds
    ///
    /// Datasheet-mandated; not tunable at runtime. A busy-wait delay is
    /// fine here because bring-up runs once at startup.
    const RESET_PULSE_MS: u32;
    /// Default contrast value (see [`Config::contrast`])
    const DEFAULT_CONTRAST: u8;
    /// Largest valid contrast value
    const CONTRAST_LIMIT: u8;
    /// Default bias value (see [`Config::bias`])
    const DEFAULT_BIAS: u8;
    /// Largest valid bias value
    const BIAS_LIMIT: u8;
    /// Render buffer size in bytes (one bit per pixel)
    const BUFFER_SIZE: usize = Self::WIDTH as usize * Self::HEIGHT as usize / 8;

    /// Run the variant's bring-up sequence.
    ///
    /// On return the controller accepts data-mode writes that map onto
    /// the render buffer's addressing scheme. Binding and clearing the
    /// render target is the caller's job
    /// ([`Display::init`](crate::Display::init) does both).
    fn bring_up<I, D>(
        interface: &mut I,
        config: &Config<Self>,
        delay: &mut D,
    ) -> Result<(), I::Error>
    where
        I: LcdInterface,
        D: DelayNs;
}

/// PCD8544 48x84 controller (Nokia 5110/3310 class panels)
///
/// Low-voltage segment-style controller driven over SPI mode 0
/// ([`SPI_MODE`](crate::SPI_MODE)). Contrast is set through the Vop
/// register; the default of 80 is experimentally determined — tune via
/// [`Builder::contrast`](crate::Builder::contrast) until the panel
/// looks right.
#[derive(Clone, Copy, Debug)]
pub struct Pcd8544;

impl Controller for Pcd8544 {
    const WIDTH: u8 = 84;
    const HEIGHT: u8 = 48;
    // Datasheet minimum is 100ns; one millisecond leaves plenty of margin.
    const RESET_PULSE_MS: u32 = 1;
    const DEFAULT_CONTRAST: u8 = 80;
    const CONTRAST_LIMIT: u8 = 0x7F;
    const DEFAULT_BIAS: u8 = 2;
    const BIAS_LIMIT: u8 = 0x07;

    fn bring_up<I, D>(
        interface: &mut I,
        config: &Config<Self>,
        delay: &mut D,
    ) -> Result<(), I::Error>
    where
        I: LcdInterface,
        D: DelayNs,
    {
        debug!("pcd8544: bring-up start");
        interface.reset(delay, Self::RESET_PULSE_MS)?;

        // Extended instruction mode for the bias/voltage registers
        interface.send_command(pcd8544::FUNCTION_SET | pcd8544::EXTENDED_INSTRUCTION)?;
        interface.send_command(pcd8544::SET_BIAS | config.bias)?;
        interface.send_command(pcd8544::SET_VOP | config.contrast)?;

        // Back to standard instructions, normal display mode
        interface.send_command(pcd8544::FUNCTION_SET)?;
        interface.send_command(pcd8544::DISPLAY_CONTROL | pcd8544::DISPLAY_NORMAL)?;

        debug!("pcd8544: bring-up done");
        Ok(())
    }
}

/// ST7565R 65x132 controller, driven as a 128x64 panel
///
/// Higher contrast range than the PCD8544; contrast is the electronic
/// volume value (0..=63), default 45 — the datasheet's own example
/// value gives a washed-out panel, so this too is a tuned default.
///
/// ## Wiring notes
///
/// These are board bring-up obligations outside this driver:
/// - the unused MISO line must still be configured as an input with
///   pull-up; the SPI peripheral requires it even though it is never read
/// - on AVR-class parts the hardware SS pin must be an output (and on
///   some platforms global interrupts enabled) for master mode to hold,
///   even though this driver never uses interrupt-driven transfer
#[derive(Clone, Copy, Debug)]
pub struct St7565r;

impl St7565r {
    /// Power-on settling time before the first command, in milliseconds
    pub const STARTUP_DELAY_MS: u32 = 30;
    /// How long the all-points-on lamp test is held, in milliseconds
    pub const ALL_ON_TEST_MS: u32 = 500;
    /// Number of 8-row pages in the panel RAM
    pub const PAGES: u8 = <Self as Controller>::HEIGHT / 8;

    /// Internal resistor ratio (V0 regulator), 0..=7
    const RESISTOR_RATIO_VALUE: u8 = 0x05;
    /// Power controller bits: booster, regulator and follower all on
    const POWER_CONTROL_ALL_ON: u8 = 0x07;

    /// Write zeros straight to the panel RAM, bypassing any buffer.
    fn clear_panel<I: LcdInterface>(interface: &mut I) -> Result<(), I::Error> {
        const BLANK_PAGE: [u8; St7565r::WIDTH as usize] = [0; St7565r::WIDTH as usize];
        for page in 0..Self::PAGES {
            interface.send_command(st7565r::PAGE_ADDRESS | page)?;
            interface.send_command(st7565r::COLUMN_HIGH)?;
            interface.send_command(st7565r::COLUMN_LOW)?;
            interface.send_data(&BLANK_PAGE)?;
        }
        Ok(())
    }
}

impl Controller for St7565r {
    const WIDTH: u8 = 128;
    const HEIGHT: u8 = 64;
    const RESET_PULSE_MS: u32 = 1;
    const DEFAULT_CONTRAST: u8 = 45;
    const CONTRAST_LIMIT: u8 = 0x3F;
    // 0 selects 1/9 bias, 1 selects 1/7
    const DEFAULT_BIAS: u8 = 0;
    const BIAS_LIMIT: u8 = 0x01;

    fn bring_up<I, D>(
        interface: &mut I,
        config: &Config<Self>,
        delay: &mut D,
    ) -> Result<(), I::Error>
    where
        I: LcdInterface,
        D: DelayNs,
    {
        debug!("st7565r: bring-up start");
        delay.delay_ms(Self::STARTUP_DELAY_MS);
        interface.reset(delay, Self::RESET_PULSE_MS)?;

        interface.send_command(st7565r::BIAS_RATIO | config.bias)?;
        interface.send_command(st7565r::ADC_NORMAL)?;
        interface.send_command(st7565r::COM_REVERSE)?;
        interface.send_command(st7565r::ALL_POINTS_NORMAL)?;
        interface.send_command(st7565r::START_LINE)?;
        interface.send_command(st7565r::RESISTOR_RATIO | Self::RESISTOR_RATIO_VALUE)?;
        interface.send_command(st7565r::VOLUME_MODE_SET)?;
        interface.send_command(config.contrast)?;
        interface.send_command(st7565r::POWER_CONTROL | Self::POWER_CONTROL_ALL_ON)?;
        interface.send_command(st7565r::DISPLAY_ON)?;

        // Lamp test: light every point, hold, then hand the panel back
        // to RAM contents from line zero with the RAM wiped.
        interface.send_command(st7565r::ALL_POINTS_ON)?;
        delay.delay_ms(Self::ALL_ON_TEST_MS);
        interface.send_command(st7565r::ALL_POINTS_NORMAL)?;
        interface.send_command(st7565r::START_LINE)?;
        Self::clear_panel(interface)?;

        debug!("st7565r: bring-up done");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_sizes_match_panel_geometry() {
        assert_eq!(Pcd8544::BUFFER_SIZE, 84 * 48 / 8);
        assert_eq!(St7565r::BUFFER_SIZE, 128 * 64 / 8);
    }

    #[test]
    fn st7565r_has_eight_pages() {
        assert_eq!(St7565r::PAGES, 8);
    }

    #[test]
    fn defaults_are_within_their_limits() {
        assert!(Pcd8544::DEFAULT_CONTRAST <= Pcd8544::CONTRAST_LIMIT);
        assert!(Pcd8544::DEFAULT_BIAS <= Pcd8544::BIAS_LIMIT);
        assert!(St7565r::DEFAULT_CONTRAST <= St7565r::CONTRAST_LIMIT);
        assert!(St7565r::DEFAULT_BIAS <= St7565r::BIAS_LIMIT);
    }
}
