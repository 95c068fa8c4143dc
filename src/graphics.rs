//! Graphics support via embedded-graphics
//!
//! [`Display`] implements the [`DrawTarget`] trait from the embedded-graphics
//! ecosystem with [`BinaryColor`] pixels, and [`Monochrome`] lets any
//! embedded-graphics image be sampled with
//! [`Display::set_image`](crate::Display::set_image).
//!
//! Drawing goes into the pixel buffer like every other drawing operation;
//! call [`Display::show`](crate::Display::show) afterwards. Pixels outside
//! the 10x7 grid are clipped, and the decimal dots are not reachable
//! through the draw target.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle, Rectangle},
//! };
//! use ltp305::{Builder, Display, Interface};
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
//! let mut display = Display::new(Interface::new(MockI2c), Builder::new().build());
//!
//! // Frame with a diagonal
//! let _ = Rectangle::new(Point::zero(), Size::new(10, 7))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//! let _ = Line::new(Point::zero(), Point::new(9, 6))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! // Update physical display
//! let _ = display.show();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    image::GetPixel,
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::buffer::{HEIGHT, WIDTH};
use crate::display::Display;
use crate::font::GlyphTable;
use crate::image::ImageSource;
use crate::interface::DisplayInterface;

impl<I, G> DrawTarget for Display<I, G>
where
    I: DisplayInterface,
    G: GlyphTable,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let buffer = self.buffer_mut();
        for Pixel(Point { x, y }, color) in pixels {
            let (Ok(x), Ok(y)) = (u8::try_from(x), u8::try_from(y)) else {
                continue;
            };
            // Anything outside the grid is clipped
            let _ = buffer.set_pixel(x, y, color.is_on());
        }

        Ok(())
    }
}

impl<I, G> OriginDimensions for Display<I, G>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}

/// Adapter sampling an embedded-graphics image as 1-bit pixels
///
/// Colours are reduced through their `Into<BinaryColor>` conversion.
///
/// ## Example
///
/// ```rust,no_run
/// use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor};
/// use ltp305::{graphics::Monochrome, Builder, Display, ImageOptions, Interface};
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
/// # let mut display = Display::new(Interface::new(MockI2c), Builder::new().build());
/// let data = [0b1111_0000u8; 7];
/// let raw: ImageRaw<BinaryColor> = ImageRaw::new(&data, 8);
///
/// let _ = display.set_image(&Monochrome(raw), ImageOptions::default().wrap(true));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monochrome<T>(pub T);

impl<T> ImageSource for Monochrome<T>
where
    T: GetPixel + OriginDimensions,
    T::Color: Into<BinaryColor>,
{
    fn size(&self) -> (u32, u32) {
        let size = self.0.size();
        (size.width, size.height)
    }

    fn pixel(&self, x: u32, y: u32) -> bool {
        let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
            return false;
        };
        self.0
            .pixel(Point::new(x, y))
            .is_some_and(|color| color.into().is_on())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelBuffer;
    use crate::config::Builder;
    use crate::image::ImageOptions;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn write_register(
            &mut self,
            _address: u8,
            _register: u8,
            _data: &[u8],
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface, Builder::new().build())
    }

    /// Vertical stripes, on for even columns
    struct Stripes {
        size: Size,
    }

    impl OriginDimensions for Stripes {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl GetPixel for Stripes {
        type Color = BinaryColor;

        fn pixel(&self, p: Point) -> Option<Self::Color> {
            let inside = p.x >= 0
                && p.y >= 0
                && (p.x as u32) < self.size.width
                && (p.y as u32) < self.size.height;
            inside.then(|| BinaryColor::from(p.x % 2 == 0))
        }
    }

    #[test]
    fn test_size_is_grid() {
        assert_eq!(test_display().size(), Size::new(10, 7));
    }

    #[test]
    fn test_draw_line_sets_row() {
        let mut display = test_display();
        Line::new(Point::new(0, 3), Point::new(9, 3))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();

        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                assert_eq!(display.pixel(x, y).unwrap(), y == 3);
            }
        }
    }

    #[test]
    fn test_draw_clips_outside_grid() {
        let mut display = test_display();
        Rectangle::new(Point::new(-5, -5), Size::new(30, 30))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();

        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                assert!(display.pixel(x, y).unwrap());
            }
        }
        assert_eq!(display.buffer().decimal(), (false, false));
    }

    #[test]
    fn test_clear_off_empties_buffer() {
        let mut display = test_display();
        display.set_character(0, 'M').unwrap();
        DrawTarget::clear(&mut display, BinaryColor::Off).unwrap();
        assert_eq!(display.buffer(), &PixelBuffer::new());
    }

    #[test]
    fn test_monochrome_samples_image() {
        let image = Monochrome(Stripes {
            size: Size::new(4, 7),
        });
        assert_eq!(image.size(), (4, 7));

        let mut display = test_display();
        display
            .set_image(&image, ImageOptions::default().wrap(true))
            .unwrap();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                // 4-wide stripes tile as even/odd columns
                assert_eq!(display.pixel(x, y).unwrap(), x % 2 == 0);
            }
        }

        display
            .set_image(&image, ImageOptions::default().background(true))
            .unwrap();
        assert!(!display.pixel(1, 0).unwrap());
        assert!(display.pixel(5, 0).unwrap());
    }
}
