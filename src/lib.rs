//! Monochrome Graphic LCD Driver
//!
//! A driver for small monochrome graphic LCD controllers over SPI,
//! supporting the PCD8544 (Nokia 5110/3310 class, 84x48) and the
//! ST7565R (128x64) controller families.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Build-time controller selection through the type system
//! - Byte-exact command/data discipline: chip select brackets every
//!   transfer and reset pulse, DC is re-driven on every call
//! - Deterministic, retry-free bring-up per controller variant
//! - Externally-owned render buffer with dirty-region tracking
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use glcd::{BoundingBox, Builder, Controller, Display, Interface, Pcd8544, RenderTarget};
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
//! # let spi = MockSpi;
//! # let (cs, dc, rst) = (MockPin, MockPin, MockPin);
//! # let mut delay = MockDelay;
//! // SPI bus must be configured in glcd::SPI_MODE (mode 0) by the HAL.
//! let interface = Interface::new(spi, cs, dc, rst);
//! let config = match Builder::<Pcd8544>::new().contrast(70).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut buffer = [0u8; Pcd8544::BUFFER_SIZE];
//! let target = RenderTarget::new(
//!     &mut buffer,
//!     BoundingBox::panel(Pcd8544::WIDTH, Pcd8544::HEIGHT),
//! );
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(target, &mut delay);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Controller command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Controller variants and bring-up sequencing
pub mod controller;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Render target binding
pub mod target;

pub use config::{Builder, Config};
pub use controller::{Controller, Pcd8544, St7565r};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use interface::{Interface, InterfaceError, LcdInterface, SPI_MODE};
pub use target::{BoundingBox, RenderTarget};
