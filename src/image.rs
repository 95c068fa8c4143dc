//! 1-bit image sources for [`Display::set_image`](crate::Display::set_image)
//!
//! Any pixel source works as long as it can report its size and answer
//! on/off for a coordinate. Converting colour or greyscale images down to one
//! bit is the source's job; with the `graphics` feature,
//! [`Monochrome`](crate::graphics::Monochrome) does that for embedded-graphics
//! images.
//!
//! ## Example
//!
//! ```
//! use ltp305::image::{BitImage, ImageSource};
//!
//! // 10x2 image, rows padded to whole bytes
//! let data = [0b1000_0000, 0b0100_0000, 0b0000_0000, 0b0000_0000];
//! let image = BitImage::new(&data, 10);
//! assert_eq!(image.size(), (10, 2));
//! assert!(image.pixel(0, 0));
//! assert!(image.pixel(9, 0));
//! assert!(!image.pixel(1, 0));
//! ```

/// A source of 1-bit pixels
pub trait ImageSource {
    /// `(width, height)` in pixels
    fn size(&self) -> (u32, u32);

    /// Whether the pixel at `(x, y)` is on
    ///
    /// Only called with coordinates inside [`size`](Self::size).
    fn pixel(&self, x: u32, y: u32) -> bool;
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn pixel(&self, x: u32, y: u32) -> bool {
        (**self).pixel(x, y)
    }
}

/// Packed 1 bit-per-pixel image
///
/// Rows are stored top to bottom, each padded to a whole number of bytes,
/// with the leftmost pixel in the most significant bit. This is the same
/// layout embedded-graphics uses for `ImageRaw<BinaryColor>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitImage<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> BitImage<'a> {
    /// Wrap packed image data
    ///
    /// The height is the number of complete rows in `data`; trailing bytes
    /// that do not fill a row are ignored.
    pub fn new(data: &'a [u8], width: u32) -> Self {
        let stride = Self::stride_for(width);
        let height = if stride == 0 {
            0
        } else {
            (data.len() / stride) as u32
        };
        Self {
            data,
            width,
            height,
        }
    }

    fn stride_for(width: u32) -> usize {
        width.div_ceil(8) as usize
    }
}

impl ImageSource for BitImage<'_> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * Self::stride_for(self.width) + (x / 8) as usize;
        self.data
            .get(index)
            .is_some_and(|byte| byte & (0x80 >> (x % 8)) != 0)
    }
}

/// Sampling parameters for [`Display::set_image`](crate::Display::set_image)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageOptions {
    /// Source column sampled for display column 0
    pub offset_x: i32,
    /// Source row sampled for display row 0
    pub offset_y: i32,
    /// Wrap sample coordinates around the source edges
    pub wrap: bool,
    /// Value used where the sample falls outside the source
    pub background: bool,
}

impl ImageOptions {
    /// Options with the given offsets and no wrapping
    pub fn offset(offset_x: i32, offset_y: i32) -> Self {
        Self {
            offset_x,
            offset_y,
            ..Self::default()
        }
    }

    /// Enable or disable wrapping
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the background value
    pub fn background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }

    /// Map a display coordinate to a source coordinate
    ///
    /// Returns `None` when the sample falls outside a `width` x `height`
    /// source, in which case the background is used.
    pub(crate) fn sample_coord(&self, x: u8, y: u8, width: u32, height: u32) -> Option<(u32, u32)> {
        let sx = sample_axis(i64::from(x) + i64::from(self.offset_x), width, self.wrap)?;
        let sy = sample_axis(i64::from(y) + i64::from(self.offset_y), height, self.wrap)?;
        Some((sx, sy))
    }
}

fn sample_axis(pos: i64, len: u32, wrap: bool) -> Option<u32> {
    if len == 0 {
        return None;
    }
    let len = i64::from(len);
    let pos = if wrap { pos.rem_euclid(len) } else { pos };
    if (0..len).contains(&pos) {
        Some(pos as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_image_height_from_stride() {
        let data = [0u8; 7];
        // 10 pixels wide needs 2 bytes per row, the odd byte is ignored
        assert_eq!(BitImage::new(&data, 10).size(), (10, 3));
        assert_eq!(BitImage::new(&data, 8).size(), (8, 7));
        assert_eq!(BitImage::new(&data, 0).size(), (0, 0));
    }

    #[test]
    fn test_bit_image_pixel_layout() {
        let data = [0b1010_0000, 0b0000_0001];
        let image = BitImage::new(&data, 8);
        assert!(image.pixel(0, 0));
        assert!(!image.pixel(1, 0));
        assert!(image.pixel(2, 0));
        assert!(image.pixel(7, 1));
        assert!(!image.pixel(8, 0));
        assert!(!image.pixel(0, 2));
    }

    #[test]
    fn test_sample_without_wrap() {
        let options = ImageOptions::offset(3, 1);
        assert_eq!(options.sample_coord(0, 0, 20, 10), Some((3, 1)));
        assert_eq!(options.sample_coord(9, 6, 12, 8), None);
        assert_eq!(options.sample_coord(8, 6, 12, 8), Some((11, 7)));
    }

    #[test]
    fn test_sample_with_wrap() {
        let options = ImageOptions::offset(7, 0).wrap(true);
        assert_eq!(options.sample_coord(0, 0, 8, 8), Some((7, 0)));
        assert_eq!(options.sample_coord(1, 0, 8, 8), Some((0, 0)));
        // Offsets several times larger than the image still wrap
        let options = ImageOptions::offset(1003, 15).wrap(true);
        assert_eq!(options.sample_coord(0, 0, 10, 7), Some((3, 1)));
    }

    #[test]
    fn test_sample_negative_offsets() {
        let options = ImageOptions::offset(-2, -1);
        assert_eq!(options.sample_coord(0, 0, 10, 7), None);
        assert_eq!(options.sample_coord(2, 1, 10, 7), Some((0, 0)));

        let options = options.wrap(true);
        assert_eq!(options.sample_coord(0, 0, 10, 7), Some((8, 6)));
    }

    #[test]
    fn test_sample_empty_source() {
        let options = ImageOptions::default().wrap(true);
        assert_eq!(options.sample_coord(0, 0, 0, 7), None);
        assert_eq!(options.sample_coord(0, 0, 10, 0), None);
    }
}
