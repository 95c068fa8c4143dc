//! Core display operations

use crate::buffer::{HEIGHT, PixelBuffer, WIDTH};
use crate::config::{Config, scale_brightness};
use crate::error::{Error, OutOfRange};
use crate::font::{Character, Font5x7, GLYPH_WIDTH, GlyphTable};
use crate::image::{ImageOptions, ImageSource};
use crate::interface::DisplayInterface;
use crate::register::{
    BRIGHTNESS, MATRIX_LEFT, MATRIX_RIGHT, MODE, MODE_VALUE, OPTIONS, UPDATE, UPDATE_VALUE,
};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver for the LTP305 dual matrix
///
/// Drawing operations only touch the in-memory [`PixelBuffer`]; nothing
/// reaches the LEDs until [`show`](Self::show) is called. The display is
/// usable straight after construction and performs no bus traffic until
/// then.
///
/// ## Example
///
/// ```rust,no_run
/// use ltp305::{Address, Builder, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c<SevenBitAddress> for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: SevenBitAddress,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let config = Builder::new().address(Address::Default).build();
/// let mut display = Display::new(Interface::new(MockI2c), config);
///
/// let _ = display.set_character(0, '4');
/// let _ = display.set_character(5, '2');
/// display.set_decimal(Some(true), None);
/// let _ = display.show();
/// ```
pub struct Display<I, G = Font5x7>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Pending matrix contents
    buffer: PixelBuffer,
    /// Brightness register value, 0-127
    brightness: u8,
    /// Glyph table used by `set_character`
    font: G,
}

impl<I> Display<I, Font5x7>
where
    I: DisplayInterface,
{
    /// Create a new Display using the built-in font
    pub fn new(interface: I, config: Config) -> Self {
        Self::with_font(interface, config, Font5x7)
    }
}

impl<I, G> Display<I, G>
where
    I: DisplayInterface,
    G: GlyphTable,
{
    /// Create a new Display rendering characters from `font`
    pub fn with_font(interface: I, config: Config, font: G) -> Self {
        Self {
            interface,
            brightness: scale_brightness(config.brightness),
            config,
            buffer: PixelBuffer::new(),
            font,
        }
    }

    /// Set the brightness of both matrices
    ///
    /// `value` runs from 0.0 to 1.0 and is clamped to that range. With
    /// `apply_immediately` the brightness register is written straight away;
    /// otherwise the new value goes out with the next [`show`](Self::show).
    pub fn set_brightness(&mut self, value: f32, apply_immediately: bool) -> DisplayResult<I> {
        if !(0.0..=1.0).contains(&value) {
            log::warn!("brightness {value} outside 0.0..=1.0, clamping");
        }
        self.brightness = scale_brightness(value);
        log::debug!("brightness set to {}", self.brightness);

        if apply_immediately {
            self.write(BRIGHTNESS, &[self.brightness])?;
        }
        Ok(())
    }

    /// Brightness register value, 0-127
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Turn every pixel and both decimal dots off
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Set or clear the pixel at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `x < 10` and `y < 7`.
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) -> DisplayResult<I> {
        self.buffer.set_pixel(x, y, on)?;
        Ok(())
    }

    /// Read back the pixel at `(x, y)` from the buffer
    pub fn pixel(&self, x: u8, y: u8) -> Result<bool, OutOfRange> {
        self.buffer.pixel(x, y)
    }

    /// Set or clear the decimal dots, `None` leaves a side unchanged
    pub fn set_decimal(&mut self, left: Option<bool>, right: Option<bool>) {
        self.buffer.set_decimal(left, right);
    }

    /// Logical size as `(width, height)`, always `(10, 7)`
    pub fn shape(&self) -> (u8, u8) {
        self.buffer.shape()
    }

    /// Draw a character with its leftmost column at `x`
    ///
    /// Use `x = 0` for the left matrix and `x = 5` for the right; anything in
    /// between straddles the two. All seven rows of the five glyph columns
    /// are written, so the character also clears what was under it.
    ///
    /// # Errors
    ///
    /// - [`Error::GlyphNotFound`] if the font has no glyph for the character
    /// - [`Error::OutOfRange`] if any glyph column would land past column 9
    ///
    /// The buffer is untouched when an error is returned.
    pub fn set_character(&mut self, x: u8, character: impl Into<Character>) -> DisplayResult<I> {
        let code = character.into().code();
        let glyph = self
            .font
            .glyph(code)
            .ok_or(Error::GlyphNotFound { code })?;

        let last = u16::from(x) + GLYPH_WIDTH as u16 - 1;
        if last >= u16::from(WIDTH) {
            return Err(Error::OutOfRange(OutOfRange {
                x: u8::try_from(last).unwrap_or(u8::MAX),
                y: 0,
            }));
        }

        for (column, bits) in (x..).zip(glyph) {
            for row in 0..HEIGHT {
                self.buffer.set_pixel(column, row, bits & (1 << row) != 0)?;
            }
        }
        Ok(())
    }

    /// Sample a 1-bit image into the whole buffer
    ///
    /// Display pixel `(x, y)` takes source pixel `(x + offset_x, y + offset_y)`.
    /// With `wrap` the source coordinate is taken modulo the image size;
    /// otherwise samples outside the image use `background`.
    pub fn set_image<S>(&mut self, image: &S, options: ImageOptions) -> DisplayResult<I>
    where
        S: ImageSource + ?Sized,
    {
        let (width, height) = image.size();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let on = options
                    .sample_coord(x, y, width, height)
                    .map_or(options.background, |(sx, sy)| image.pixel(sx, sy));
                self.buffer.set_pixel(x, y, on)?;
            }
        }
        Ok(())
    }

    /// Write the buffer and configuration to the device and latch it
    ///
    /// Issues six register writes in order: left matrix, right matrix, mode,
    /// options, brightness and update. Each write blocks until the bus
    /// transfer completes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] from the first write that fails. Later
    /// writes are skipped and the device may show a mix of old and new
    /// state; call `show` again to recover.
    pub fn show(&mut self) -> DisplayResult<I> {
        log::debug!(
            "show: addr {:#04x} brightness {}",
            self.config.address.addr(),
            self.brightness
        );
        let left = *self.buffer.left();
        let right = *self.buffer.right();

        self.write(MATRIX_LEFT, &left)?;
        self.write(MATRIX_RIGHT, &right)?;
        self.write(MODE, &[MODE_VALUE])?;
        self.write(OPTIONS, &[self.config.drive_current.options_byte()])?;
        self.write(BRIGHTNESS, &[self.brightness])?;
        self.write(UPDATE, &[UPDATE_VALUE])?;

        Ok(())
    }

    /// Access the pixel buffer
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the display and give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Write a register on the configured device
    fn write(&mut self, register: u8, data: &[u8]) -> DisplayResult<I> {
        self.interface
            .write_register(self.config.address.addr(), register, data)
            .map_err(Error::Interface)
    }

    #[cfg(feature = "graphics")]
    pub(crate) fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }
}
