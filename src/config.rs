//! Display configuration types and builder

use core::marker::PhantomData;

use crate::controller::Controller;
use crate::error::BuilderError;

/// Configuration for one controller variant
///
/// Holds the panel tunables the bring-up sequence consumes. Defaults
/// come from the controller's named constants; construct via
/// [`Builder`] to get range validation.
#[derive(Clone, Copy, Debug)]
pub struct Config<C: Controller> {
    /// Contrast value
    ///
    /// Vop for the PCD8544 (0..=127), electronic volume for the ST7565R
    /// (0..=63). Both defaults are empirically tuned rather than taken
    /// from the datasheets — adjust until the panel looks right.
    pub contrast: u8,
    /// Bias value
    ///
    /// Bias system for the PCD8544 (0..=7, default 2), bias ratio
    /// select for the ST7565R (0 = 1/9, 1 = 1/7).
    pub bias: u8,
    _controller: PhantomData<C>,
}

impl<C: Controller> Default for Config<C> {
    fn default() -> Self {
        Self {
            contrast: C::DEFAULT_CONTRAST,
            bias: C::DEFAULT_BIAS,
            _controller: PhantomData,
        }
    }
}

/// Builder for constructing a [`Config`]
///
/// Unset fields fall back to the controller's defaults. Out-of-range
/// values are rejected by [`build`](Builder::build) before any hardware
/// is touched.
///
/// # Example
///
/// ```rust
/// use glcd::{Builder, Pcd8544};
///
/// let config = match Builder::<Pcd8544>::new().contrast(70).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.contrast, 70);
/// ```
#[must_use]
pub struct Builder<C: Controller> {
    contrast: Option<u8>,
    bias: Option<u8>,
    _controller: PhantomData<C>,
}

impl<C: Controller> Default for Builder<C> {
    fn default() -> Self {
        Self {
            contrast: None,
            bias: None,
            _controller: PhantomData,
        }
    }
}

impl<C: Controller> Builder<C> {
    /// Create a new Builder with the controller's default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the contrast value
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = Some(value);
        self
    }

    /// Override the bias value
    pub fn bias(mut self, value: u8) -> Self {
        self.bias = Some(value);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ContrastOutOfRange`] or
    /// [`BuilderError::BiasOutOfRange`] if an override exceeds the
    /// controller's limit.
    pub fn build(self) -> Result<Config<C>, BuilderError> {
        let contrast = self.contrast.unwrap_or(C::DEFAULT_CONTRAST);
        if contrast > C::CONTRAST_LIMIT {
            return Err(BuilderError::ContrastOutOfRange {
                value: contrast,
                limit: C::CONTRAST_LIMIT,
            });
        }
        let bias = self.bias.unwrap_or(C::DEFAULT_BIAS);
        if bias > C::BIAS_LIMIT {
            return Err(BuilderError::BiasOutOfRange {
                value: bias,
                limit: C::BIAS_LIMIT,
            });
        }
        Ok(Config {
            contrast,
            bias,
            _controller: PhantomData,
        })
    }
}
