//! IS31FL3730 register definitions
//!
//! The LTP305 breakout drives both 5x7 matrices from a single IS31FL3730
//! controller. Every register is written with a single I2C write: the
//! register address byte followed by the payload.
//!
//! ## Register Map
//!
//! | Register     | Address | Payload                 |
//! |--------------|---------|-------------------------|
//! | Mode         | `0x00`  | 1 byte ([`MODE_VALUE`]) |
//! | Matrix right | `0x01`  | 8 bytes (one per row)   |
//! | Update       | `0x0C`  | 1 byte ([`UPDATE_VALUE`]) |
//! | Options      | `0x0D`  | 1 byte (drive current)  |
//! | Matrix left  | `0x0E`  | 8 bytes (one per column)|
//! | Brightness   | `0x19`  | 1 byte, 0-127           |
//!
//! ## Example
//!
//! ```rust,no_run
//! use ltp305::{register, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
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
//! let mut interface = Interface::new(MockI2c);
//!
//! // Half brightness, then latch
//! let _ = interface.write_register(0x61, register::BRIGHTNESS, &[64]);
//! let _ = interface.write_register(0x61, register::UPDATE, &[register::UPDATE_VALUE]);
//! ```

// Configuration registers

/// Configuration (mode) register (0x00)
///
/// Selects which matrices are driven and the matrix geometry.
/// Requires 1 byte; the LTP305 always uses [`MODE_VALUE`].
pub const MODE: u8 = 0x00;

/// Lighting effect (options) register (0x0D)
///
/// Bits 3:0 select the row drive current, see [`crate::DriveCurrent`].
/// Requires 1 byte.
pub const OPTIONS: u8 = 0x0D;

/// PWM (brightness) register (0x19)
///
/// Requires 1 byte, 0 (off) to 127 (full).
pub const BRIGHTNESS: u8 = 0x19;

// Data registers

/// Matrix 1 data register (0x0E), wired to the left matrix
///
/// Requires 8 bytes, one per column. Bit N lights row N.
pub const MATRIX_LEFT: u8 = 0x0E;

/// Matrix 2 data register (0x01), wired to the right matrix
///
/// Requires 8 bytes, one per row. Bit N lights column N.
pub const MATRIX_RIGHT: u8 = 0x01;

/// Update column register (0x0C)
///
/// Any write latches the data registers into the LEDs.
pub const UPDATE: u8 = 0x0C;

// Fixed payloads

/// Mode payload: matrix 1 and matrix 2 both enabled, 8x8 geometry
pub const MODE_VALUE: u8 = 0b0001_1000;

/// Default options payload: 35 mA row drive current
pub const OPTIONS_VALUE: u8 = 0b0000_1110;

/// Payload written to [`UPDATE`] to latch the data registers
pub const UPDATE_VALUE: u8 = 0x01;

/// Length of each matrix data register in bytes
pub const MATRIX_LEN: usize = 8;
