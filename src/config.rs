//! Display configuration types and builder

pub use crate::error::BuilderError;

/// I2C address of the breakout
///
/// The LTP305 breakout exposes three addresses selected by solder jumpers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Address {
    /// Factory address (0x61)
    #[default]
    Default = 0x61,
    /// First alternate address (0x62)
    Alternate1 = 0x62,
    /// Second alternate address (0x63)
    Alternate2 = 0x63,
}

impl Address {
    /// Raw 7-bit bus address
    pub fn addr(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Address {
    type Error = BuilderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x61 => Ok(Self::Default),
            0x62 => Ok(Self::Alternate1),
            0x63 => Ok(Self::Alternate2),
            other => Err(BuilderError::InvalidAddress(other)),
        }
    }
}

/// Row drive current written to the options register
///
/// Values follow the IS31FL3730 lighting effect register, bits 3:0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum DriveCurrent {
    /// 5 mA
    Ma5 = 0b1000,
    /// 10 mA
    Ma10 = 0b1001,
    /// 15 mA
    Ma15 = 0b1010,
    /// 20 mA
    Ma20 = 0b1011,
    /// 25 mA
    Ma25 = 0b1100,
    /// 30 mA
    Ma30 = 0b1101,
    /// 35 mA
    #[default]
    Ma35 = 0b1110,
    /// 40 mA
    Ma40 = 0b0000,
    /// 45 mA
    Ma45 = 0b0001,
    /// 50 mA
    Ma50 = 0b0010,
    /// 55 mA
    Ma55 = 0b0011,
    /// 60 mA
    Ma60 = 0b0100,
    /// 65 mA
    Ma65 = 0b0101,
    /// 70 mA
    Ma70 = 0b0110,
    /// 75 mA
    Ma75 = 0b0111,
}

impl DriveCurrent {
    /// Payload for the options register
    pub fn options_byte(self) -> u8 {
        self as u8
    }
}

/// Default brightness on a 0.0 to 1.0 scale
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

/// Largest value accepted by the brightness register
pub const MAX_BRIGHTNESS: u8 = 127;

/// Scale a 0.0 to 1.0 brightness to the 0-127 register range
///
/// Rounds half up, so 0.5 maps to 64. Inputs outside the range (and NaN)
/// are clamped rather than rejected.
///
/// ```
/// use ltp305::config::scale_brightness;
///
/// assert_eq!(scale_brightness(0.5), 64);
/// assert_eq!(scale_brightness(-1.0), 0);
/// assert_eq!(scale_brightness(2.0), 127);
/// ```
pub fn scale_brightness(value: f32) -> u8 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    if value >= 1.0 {
        return MAX_BRIGHTNESS;
    }
    // value is in (0, 1) so the sum stays in [0.5, 127.5) and truncation floors
    let scaled = (value * f32::from(MAX_BRIGHTNESS) + 0.5) as u8;
    scaled.min(MAX_BRIGHTNESS)
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Bus address of the breakout
    pub address: Address,
    /// Initial brightness, 0.0 to 1.0
    pub brightness: f32,
    /// Row drive current
    pub drive_current: DriveCurrent,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ltp305::{Address, Builder, DriveCurrent};
///
/// let config = Builder::new()
///     .address(Address::Alternate1)
///     .brightness(0.25)
///     .drive_current(DriveCurrent::Ma20)
///     .build();
/// assert_eq!(config.address.addr(), 0x62);
/// ```
#[must_use]
pub struct Builder {
    /// Bus address
    address: Address,
    /// Initial brightness
    brightness: f32,
    /// Row drive current
    drive_current: DriveCurrent,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            address: Address::Default,
            brightness: DEFAULT_BRIGHTNESS,
            // 35 mA, the breakout's recommended setting
            drive_current: DriveCurrent::Ma35,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bus address
    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Set the initial brightness (0.0 to 1.0, clamped when applied)
    pub fn brightness(mut self, value: f32) -> Self {
        self.brightness = value;
        self
    }

    /// Set the row drive current
    pub fn drive_current(mut self, value: DriveCurrent) -> Self {
        self.drive_current = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            address: self.address,
            brightness: self.brightness,
            drive_current: self.drive_current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::OPTIONS_VALUE;

    #[test]
    fn test_address_try_from() {
        assert_eq!(Address::try_from(0x61), Ok(Address::Default));
        assert_eq!(Address::try_from(0x62), Ok(Address::Alternate1));
        assert_eq!(Address::try_from(0x63), Ok(Address::Alternate2));
        assert_eq!(
            Address::try_from(0x60),
            Err(BuilderError::InvalidAddress(0x60))
        );
    }

    #[test]
    fn test_default_drive_current_matches_options_value() {
        assert_eq!(DriveCurrent::default().options_byte(), OPTIONS_VALUE);
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build();
        assert_eq!(config.address, Address::Default);
        assert_eq!(config.brightness, DEFAULT_BRIGHTNESS);
        assert_eq!(config.drive_current, DriveCurrent::Ma35);
    }

    #[test]
    fn test_scale_brightness_clamps_low() {
        assert_eq!(scale_brightness(0.0), 0);
        assert_eq!(scale_brightness(-0.5), 0);
        assert_eq!(scale_brightness(f32::NEG_INFINITY), 0);
        assert_eq!(scale_brightness(f32::NAN), 0);
    }

    #[test]
    fn test_scale_brightness_clamps_high() {
        assert_eq!(scale_brightness(1.0), 127);
        assert_eq!(scale_brightness(1.5), 127);
        assert_eq!(scale_brightness(f32::INFINITY), 127);
    }

    #[test]
    fn test_scale_brightness_rounds_half_up() {
        assert_eq!(scale_brightness(0.5), 64);
        assert_eq!(scale_brightness(0.25), 32); // 31.75
        assert_eq!(scale_brightness(0.1), 13); // 12.7
        assert_eq!(scale_brightness(1.0 / 127.0), 1);
        assert_eq!(scale_brightness(0.003), 0); // 0.381
    }

    #[test]
    fn test_scale_brightness_is_monotonic() {
        let mut last = 0;
        for step in 0..=1000 {
            let value = scale_brightness(step as f32 / 1000.0);
            assert!(value >= last);
            assert!(value <= MAX_BRIGHTNESS);
            last = value;
        }
        assert_eq!(last, MAX_BRIGHTNESS);
    }
}
