//! Error types for the driver
//!
//! Two layers of failure exist:
//!
//! - [`BuilderError`] - configuration construction errors, surfaced
//!   before any hardware is touched
//! - [`Error`] - runtime errors during display operations, wrapping
//!   [`InterfaceError`](crate::interface::InterfaceError) from the
//!   hardware layer
//!
//! There is deliberately no timeout error: a peripheral that never
//! completes a transfer blocks inside the HAL, which is the accepted
//! property of the synchronous design.
//!
//! ## Example
//!
//! ```
//! use glcd::{Builder, BuilderError, St7565r};
//!
//! // Electronic volume is a 6-bit value on the ST7565R
//! let result = Builder::<St7565r>::new().contrast(200).build();
//! assert!(matches!(result, Err(BuilderError::ContrastOutOfRange { .. })));
//! ```

use crate::interface::LcdInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific hardware
/// error, so callers can match on the underlying SPI/GPIO failure.
#[derive(Debug)]
pub enum Error<I: LcdInterface> {
    /// Interface error (SPI/GPIO)
    Interface(I::Error),
    /// The supplied render buffer is too small for the panel
    ///
    /// The buffer must hold at least `WIDTH * HEIGHT / 8` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: LcdInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: LcdInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These surface during [`Builder::build`](crate::Builder::build),
/// before the display is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderError {
    /// Contrast override exceeds the controller's register range
    ContrastOutOfRange {
        /// Requested value
        value: u8,
        /// Largest valid value for this controller
        limit: u8,
    },
    /// Bias override exceeds the controller's register range
    BiasOutOfRange {
        /// Requested value
        value: u8,
        /// Largest valid value for this controller
        limit: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ContrastOutOfRange { value, limit } => {
                write!(f, "Contrast {value} out of range (limit {limit})")
            }
            Self::BiasOutOfRange { value, limit } => {
                write!(f, "Bias {value} out of range (limit {limit})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
