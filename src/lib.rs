//! LTP305 LED Matrix Driver
//!
//! A driver for the Pimoroni LTP305 breakout: two 5x7 LED matrices side by
//! side, each with a decimal dot, driven by an IS31FL3730 controller over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Built-in 5x7 font with custom glyph tables
//! - 1-bit image sampling with offsets and wrapping
//! - Configurable address, brightness and drive current
//!
//! Drawing only changes an in-memory buffer; [`Display::show`] pushes the
//! buffer and settings to the controller.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use ltp305::{Address, Builder, Display, Interface};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let interface = Interface::new(i2c);
//! let config = Builder::new()
//!     .address(Address::Default)
//!     .brightness(0.25)
//!     .build();
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.set_character(0, 'O');
//! let _ = display.set_character(5, 'K');
//! display.set_decimal(None, Some(true));
//! let _ = display.show();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Bit-packed pixel buffer
pub mod buffer;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// 5x7 font and glyph lookup
pub mod font;
/// 1-bit image sources
pub mod image;
/// Hardware interface abstraction
pub mod interface;
/// IS31FL3730 register definitions
pub mod register;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use buffer::{HEIGHT, PixelBuffer, WIDTH};
pub use config::{Address, Builder, Config, DriveCurrent};
pub use display::Display;
pub use error::{BuilderError, Error, OutOfRange};
pub use font::{Character, Font5x7, GlyphTable};
pub use image::{BitImage, ImageOptions, ImageSource};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};

#[cfg(feature = "graphics")]
pub use graphics::Monochrome;
