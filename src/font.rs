//! Glyph tables for character rendering
//!
//! A glyph is five columns of eight rows, one byte per column with bit 0 at
//! the top. The matrices are seven rows tall, so bit 7 is never drawn.
//!
//! [`Font5x7`] covers printable ASCII plus the degree sign. Implement
//! [`GlyphTable`] to render with a different table.
//!
//! ## Example
//!
//! ```
//! use ltp305::font::{Character, Font5x7, GlyphTable};
//!
//! let zero = Font5x7.glyph(Character::from('0').code());
//! assert_eq!(zero, Some([0x3E, 0x51, 0x49, 0x45, 0x3E]));
//! assert_eq!(Font5x7.glyph(0x2603), None);
//! ```

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 5;

/// One glyph: a byte per column, bit N lights row N
pub type Glyph = [u8; GLYPH_WIDTH];

/// Lookup from character code to glyph
pub trait GlyphTable {
    /// Glyph for `code`, or `None` if the table has no entry
    fn glyph(&self, code: u32) -> Option<Glyph>;
}

impl<T: GlyphTable + ?Sized> GlyphTable for &T {
    fn glyph(&self, code: u32) -> Option<Glyph> {
        (**self).glyph(code)
    }
}

/// Character to render, either as a code point or as a `char`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Character {
    /// Raw character code
    Code(u32),
    /// Unicode scalar value
    Char(char),
}

impl Character {
    /// Code used for glyph lookup
    pub fn code(self) -> u32 {
        match self {
            Self::Code(code) => code,
            Self::Char(c) => u32::from(c),
        }
    }
}

impl From<char> for Character {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<u32> for Character {
    fn from(code: u32) -> Self {
        Self::Code(code)
    }
}

impl From<u8> for Character {
    fn from(code: u8) -> Self {
        Self::Code(u32::from(code))
    }
}

/// Built-in 5x7 font
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Font5x7;

const FIRST_CODE: u32 = 0x20;
const DEGREE_SIGN: u32 = 0xB0;
const DEGREE_GLYPH: Glyph = [0x00, 0x02, 0x05, 0x02, 0x00];

impl GlyphTable for Font5x7 {
    fn glyph(&self, code: u32) -> Option<Glyph> {
        if code == DEGREE_SIGN {
            return Some(DEGREE_GLYPH);
        }
        let index = code.checked_sub(FIRST_CODE)?;
        ASCII.get(index as usize).copied()
    }
}

/// Printable ASCII, 0x20 (space) through 0x7E (tilde)
#[rustfmt::skip]
static ASCII: [Glyph; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // ')'
    [0x14, 0x08, 0x3E, 0x08, 0x14], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // ';'
    [0x08, 0x14, 0x22, 0x41, 0x00], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // '='
    [0x00, 0x41, 0x22, 0x14, 0x08], // '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // '_'
    [0x00, 0x01, 0x02, 0x04, 0x00], // '`'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02], // 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20], // 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00], // '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // '}'
    [0x08, 0x04, 0x08, 0x10, 0x08], // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_printable_ascii() {
        for code in 0x20..=0x7E {
            assert!(Font5x7.glyph(code).is_some(), "missing {code:#04x}");
        }
    }

    #[test]
    fn test_rejects_codes_outside_table() {
        assert_eq!(Font5x7.glyph(0x00), None);
        assert_eq!(Font5x7.glyph(0x1F), None);
        assert_eq!(Font5x7.glyph(0x7F), None);
        assert_eq!(Font5x7.glyph(u32::from('€')), None);
    }

    #[test]
    fn test_glyphs_fit_seven_rows() {
        for code in 0x20..=0x7E {
            let glyph = Font5x7.glyph(code).unwrap();
            assert!(glyph.iter().all(|col| col & 0x80 == 0));
        }
    }

    #[test]
    fn test_degree_sign() {
        assert_eq!(Font5x7.glyph(u32::from('°')), Some(DEGREE_GLYPH));
    }

    #[test]
    fn test_character_resolves_to_code() {
        assert_eq!(Character::from('A').code(), 65);
        assert_eq!(Character::from(48u8).code(), 48);
        assert_eq!(Character::Code(0x2603).code(), 0x2603);
        assert_eq!(Character::from('0').code(), Character::Code(48).code());
    }
}
