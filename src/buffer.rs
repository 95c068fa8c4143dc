//! Bit-packed pixel buffer for the two 5x7 matrices
//!
//! The IS31FL3730 data registers are wired differently on each side of the
//! breakout, so the two halves of the display use orthogonal layouts:
//!
//! | Side  | Columns | Byte index | Bit       |
//! |-------|---------|------------|-----------|
//! | Left  | 0-4     | column     | row       |
//! | Right | 5-9     | row        | column - 5|
//!
//! Each side also has one decimal-dot LED living outside the 5x7 grid
//! (`left[7]` mask `0x40`, `right[6]` mask `0x80`). Pixel writes can never
//! reach those bits; only [`PixelBuffer::set_decimal`] touches them.
//!
//! ## Example
//!
//! ```
//! use ltp305::PixelBuffer;
//!
//! let mut buffer = PixelBuffer::new();
//! buffer.set_pixel(0, 2, true).unwrap();
//! buffer.set_pixel(6, 1, true).unwrap();
//!
//! assert_eq!(buffer.left()[0], 0b0000_0100);
//! assert_eq!(buffer.right()[1], 0b0000_0010);
//! ```

use crate::error::OutOfRange;
use crate::register::MATRIX_LEN;

/// Display width in pixels (both matrices)
pub const WIDTH: u8 = 10;
/// Display height in pixels
pub const HEIGHT: u8 = 7;
/// Width of a single matrix
pub const MATRIX_WIDTH: u8 = 5;

const LEFT_DECIMAL_INDEX: usize = 7;
const LEFT_DECIMAL_MASK: u8 = 0b0100_0000;
const RIGHT_DECIMAL_INDEX: usize = 6;
const RIGHT_DECIMAL_MASK: u8 = 0b1000_0000;

/// In-memory copy of both matrix data registers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Left matrix, one byte per column
    left: [u8; MATRIX_LEN],
    /// Right matrix, one byte per row
    right: [u8; MATRIX_LEN],
}

impl PixelBuffer {
    /// Create a zeroed buffer (all pixels and decimal dots off)
    pub const fn new() -> Self {
        Self {
            left: [0; MATRIX_LEN],
            right: [0; MATRIX_LEN],
        }
    }

    /// Turn every pixel and both decimal dots off
    pub fn clear(&mut self) {
        self.left = [0; MATRIX_LEN];
        self.right = [0; MATRIX_LEN];
    }

    /// Set or clear the pixel at `(x, y)`
    ///
    /// `x` runs 0-9 across both matrices (0-4 left, 5-9 right), `y` runs 0-6
    /// from the top.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if the coordinate is outside the grid. The buffer
    /// is left unchanged.
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) -> Result<(), OutOfRange> {
        let (byte, mask) = self.locate_mut(x, y)?;
        set_bits(byte, mask, on);
        Ok(())
    }

    /// Read the pixel at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if the coordinate is outside the grid.
    pub fn pixel(&self, x: u8, y: u8) -> Result<bool, OutOfRange> {
        check_bounds(x, y)?;
        let on = if x < MATRIX_WIDTH {
            self.left[x as usize] & (1 << y) != 0
        } else {
            self.right[y as usize] & (1 << (x - MATRIX_WIDTH)) != 0
        };
        Ok(on)
    }

    /// Set or clear the decimal dots
    ///
    /// `None` leaves that side's dot as it is.
    pub fn set_decimal(&mut self, left: Option<bool>, right: Option<bool>) {
        if let Some(on) = left {
            set_bits(&mut self.left[LEFT_DECIMAL_INDEX], LEFT_DECIMAL_MASK, on);
        }
        if let Some(on) = right {
            set_bits(&mut self.right[RIGHT_DECIMAL_INDEX], RIGHT_DECIMAL_MASK, on);
        }
    }

    /// State of the `(left, right)` decimal dots
    pub fn decimal(&self) -> (bool, bool) {
        (
            self.left[LEFT_DECIMAL_INDEX] & LEFT_DECIMAL_MASK != 0,
            self.right[RIGHT_DECIMAL_INDEX] & RIGHT_DECIMAL_MASK != 0,
        )
    }

    /// Logical size as `(width, height)`, always `(10, 7)`
    pub const fn shape(&self) -> (u8, u8) {
        (WIDTH, HEIGHT)
    }

    /// Payload for the left matrix data register
    pub fn left(&self) -> &[u8; MATRIX_LEN] {
        &self.left
    }

    /// Payload for the right matrix data register
    pub fn right(&self) -> &[u8; MATRIX_LEN] {
        &self.right
    }

    fn locate_mut(&mut self, x: u8, y: u8) -> Result<(&mut u8, u8), OutOfRange> {
        check_bounds(x, y)?;
        if x < MATRIX_WIDTH {
            Ok((&mut self.left[x as usize], 1 << y))
        } else {
            Ok((&mut self.right[y as usize], 1 << (x - MATRIX_WIDTH)))
        }
    }
}

fn check_bounds(x: u8, y: u8) -> Result<(), OutOfRange> {
    if x >= WIDTH || y >= HEIGHT {
        return Err(OutOfRange { x, y });
    }
    Ok(())
}

fn set_bits(byte: &mut u8, mask: u8, on: bool) {
    if on {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }
}
