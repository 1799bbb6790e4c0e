//! Hardware interface abstraction
//!
//! This module provides the [`LcdInterface`] trait and the [`Interface`]
//! struct for talking to a panel controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The supported controllers require:
//! - SPI bus (MOSI + SCK), configured as master in [`SPI_MODE`] (mode 0:
//!   clock idle low, data sampled on the leading edge)
//! - 3 GPIO pins:
//!   - **CS**: Chip select (output, active low)
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low)
//!
//! Neither controller drives MISO in a way this driver reads, but the
//! bus is still clocked full duplex: every transfer reads back one byte
//! and discards it, so the peripheral's receive state is always drained.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use glcd::{Interface, LcdInterface};
//! # use core::convert::Infallible;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl embedded_hal::spi::SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl embedded_hal::digital::OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! // Create interface with SPI bus and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Send a command byte
//! let _ = interface.send_command(0xAF); // ST7565R display on
//!
//! // Send pixel data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//!
//! // Hardware reset pulse, 1ms low
//! let _ = interface.reset(&mut delay, 1);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, SpiBus, MODE_0};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// SPI mode the bus must be configured with before it is handed to the
/// driver: clock idle low, data captured on the rising edge, sampled
/// mid-bit (CPOL=0, CPHA=0).
pub const SPI_MODE: Mode = MODE_0;

/// Trait for the hardware interface to a panel controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO combination that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g. an inverted select line, or a bit-banged bus),
/// implement this trait on your own type. Implementations must uphold
/// the protocol invariants:
/// - no byte is transferred while the select line is deasserted;
///   select/deselect bracket every transfer and every reset pulse
/// - the DC line reflects the caller's classification (command vs. data)
///   for the whole of every transfer, with no state leaking across calls
pub trait LcdInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC low (command mode)
    /// 2. Assert select, send the byte, deassert select
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC high (data mode)
    /// 2. Assert select, send the bytes, deassert select
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform a hardware reset pulse
    ///
    /// The implementation must:
    /// 1. Assert select (the pulse happens inside a selection window)
    /// 2. Drive RST low
    /// 3. Hold for at least `pulse_ms` milliseconds
    /// 4. Drive RST high
    /// 5. Deassert select
    ///
    /// `pulse_ms` is a controller-mandated minimum
    /// (see [`Controller::RESET_PULSE_MS`](crate::Controller::RESET_PULSE_MS));
    /// the pulse must never be shorter.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D, pulse_ms: u32)
        -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation over an exclusively owned SPI bus
///
/// Implements [`LcdInterface`] for embedded-hal v1.0 [`SpiBus`] and GPIO
/// traits. The bus and all three control pins are owned by this struct;
/// no persistent "open" state exists between calls — select is acquired
/// on entry and released on every exit path of each operation.
///
/// There is deliberately no timeout anywhere on this path: a blocking
/// [`SpiBus`] transfer is a bounded hardware operation, and a peripheral
/// that never completes is a hardware fault the driver cannot recover.
///
/// ## Type Parameters
///
/// * `SPI` - SPI bus implementing [`SpiBus`]
/// * `CS` - Chip select pin implementing [`OutputPin`] (active low)
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`] (active low)
pub struct Interface<SPI, CS, DC, RST> {
    /// SPI bus, exclusively owned for the duration of any transfer
    spi: SPI,
    /// Chip select pin (low = selected)
    cs: CS,
    /// Data/Command select pin (low = command, high = data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, CS, DC, RST, PinErr> Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    /// Create a new Interface
    ///
    /// The SPI bus must already be configured as master in [`SPI_MODE`].
    /// CS should idle high (deselected) and RST high (not in reset);
    /// both are driven by the driver from the first operation on.
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST) -> Self {
        Self { spi, cs, dc, rst }
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, CS, DC, RST) {
        (self.spi, self.cs, self.dc, self.rst)
    }

    /// Run `body` inside a selection window.
    ///
    /// Select is asserted before the body runs and deasserted on every
    /// exit path, error or not. The bus is flushed before deselect so no
    /// transfer is still in flight when the select line rises.
    fn with_selection<T>(
        &mut self,
        body: impl FnOnce(&mut Self) -> InterfaceResult<T, InterfaceError<SPI::Error, PinErr>>,
    ) -> InterfaceResult<T, InterfaceError<SPI::Error, PinErr>> {
        self.cs.set_low().map_err(InterfaceError::Pin)?;
        let result = body(&mut *self).and_then(|value| {
            self.spi.flush().map_err(InterfaceError::Spi)?;
            Ok(value)
        });
        let deselect = self.cs.set_high().map_err(InterfaceError::Pin);
        let value = result?;
        deselect?;
        Ok(value)
    }

    /// Transfer one byte, full duplex.
    ///
    /// The read-back must happen even though callers discard it; it
    /// drains the peripheral's receive state so the next transfer can
    /// start cleanly. Caller must have asserted select.
    fn transfer(&mut self, byte: u8) -> InterfaceResult<u8, InterfaceError<SPI::Error, PinErr>> {
        let mut read = [0u8];
        self.spi
            .transfer(&mut read, &[byte])
            .map_err(InterfaceError::Spi)?;
        Ok(read[0])
    }
}

impl<SPI, CS, DC, RST, PinErr> LcdInterface for Interface<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.with_selection(|iface| iface.transfer(command).map(|_| ()))
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.with_selection(|iface| {
            for &byte in data {
                iface.transfer(byte)?;
            }
            Ok(())
        })
    }

    fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        pulse_ms: u32,
    ) -> InterfaceResult<(), Self::Error> {
        // Select stays asserted across the pulse.
        self.with_selection(|iface| {
            iface.rst.set_low().map_err(InterfaceError::Pin)?;
            delay.delay_ms(pulse_ms);
            iface.rst.set_high().map_err(InterfaceError::Pin)
        })
    }
}
