//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! buffer coordinates ([`OutOfRange`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`OutOfRange`] - A pixel coordinate outside the 10x7 grid
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus communication errors
//!
//! ## Example
//!
//! ```
//! use ltp305::{Address, BuilderError, PixelBuffer};
//!
//! // Not one of the three strapping addresses
//! let result = Address::try_from(0x70);
//! assert!(matches!(result, Err(BuilderError::InvalidAddress(0x70))));
//!
//! // Outside the grid
//! let mut buffer = PixelBuffer::new();
//! assert!(buffer.set_pixel(10, 0, true).is_err());
//! ```

use crate::interface::DisplayInterface;

/// A pixel coordinate outside the addressable 10x7 grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    /// Column requested
    pub x: u8,
    /// Row requested
    pub y: u8,
}

impl core::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Pixel ({}, {}) outside the {}x{} grid",
            self.x,
            self.y,
            crate::buffer::WIDTH,
            crate::buffer::HEIGHT
        )
    }
}

impl core::error::Error for OutOfRange {}

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`] implementation.
    /// A failure during [`show`](crate::Display::show) leaves the device in whatever
    /// state the completed writes produced; retry the whole flush.
    Interface(I::Error),
    /// The glyph table has no entry for the character code
    ///
    /// The buffer is not modified.
    GlyphNotFound {
        /// Character code looked up
        code: u32,
    },
    /// A drawing operation addressed a pixel outside the grid
    ///
    /// The buffer is not modified.
    OutOfRange(OutOfRange),
}

impl<I: DisplayInterface> From<OutOfRange> for Error<I> {
    fn from(err: OutOfRange) -> Self {
        Self::OutOfRange(err)
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::GlyphNotFound { code } => write!(f, "No glyph for character code {code}"),
            Self::OutOfRange(err) => write!(f, "{err}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// The I2C address is not selectable on the breakout
    ///
    /// See [`Address`](crate::config::Address) for the valid strapping options.
    InvalidAddress(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAddress(address) => write!(
                f,
                "Invalid address {address:#04x} (expected 0x61, 0x62 or 0x63)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
