//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the IS31FL3730 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The LTP305 breakout only needs an I2C bus (SDA + SCL). Bus setup, pin
//! selection and clock speed belong to the HAL that produces the bus handle.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use ltp305::{register, DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface from an I2C bus
//! let mut interface = Interface::new(MockI2c);
//!
//! // Write a register on the breakout at 0x61
//! let _ = interface.write_register(0x61, register::BRIGHTNESS, &[64]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

use crate::register::MATRIX_LEN;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Largest register payload the controller accepts in one write
pub const MAX_PAYLOAD_LEN: usize = MATRIX_LEN;

/// Trait for hardware interface to the IS31FL3730 controller
///
/// This trait abstracts over different bus implementations, allowing the
/// [`Display`](crate::display::Display) to work with any transport that can
/// perform a blocking register-addressed write.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself to add retries, bus sharing, or to record traffic in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write `data` to `register` of the device at `address`
    ///
    /// The call must block until the transfer completes or fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    #[allow(clippy::type_complexity)]
    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the I2C error type.
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error
    I2c(I2cErr),
    /// Payload does not fit a single register write
    PayloadTooLong {
        /// Length of the rejected payload
        len: usize,
    },
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
            Self::PayloadTooLong { len } => write!(
                f,
                "Payload too long: {len} bytes (max {MAX_PAYLOAD_LEN})"
            ),
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// Hardware interface implementation over I2C
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 [`I2c`] bus.
/// Each register write is a single I2C write of the register byte followed
/// by the payload.
///
/// ## Example
///
/// ```rust,no_run
/// use ltp305::{Builder, Display, Interface};
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
/// let interface = Interface::new(MockI2c);
///
/// // Use with Display
/// let _display = Display::new(interface, Builder::new().build());
/// ```
pub struct Interface<I2C> {
    /// I2C bus
    i2c: I2C,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c,
{
    /// Create a new Interface
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give back the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> InterfaceResult<(), Self::Error> {
        if data.len() > MAX_PAYLOAD_LEN {
            return Err(InterfaceError::PayloadTooLong { len: data.len() });
        }

        let mut frame = [0u8; MAX_PAYLOAD_LEN + 1];
        frame[0] = register;
        frame[1..=data.len()].copy_from_slice(data);

        log::trace!("i2c {address:#04x} reg {register:#04x} <- {data:02x?}");
        self.i2c
            .write(address, &frame[..=data.len()])
            .map_err(InterfaceError::I2c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation, SevenBitAddress};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl core::fmt::Display for MockError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "mock error")
        }
    }

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    #[derive(Debug, Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c<SevenBitAddress> for MockI2c {
        fn transaction(
            &mut self,
            address: SevenBitAddress,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_write_register_prefixes_register_byte() {
        let mut interface = Interface::new(MockI2c::default());
        interface
            .write_register(0x61, 0x19, &[0x40])
            .unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes, alloc::vec![(0x61, alloc::vec![0x19, 0x40])]);
    }

    #[test]
    fn test_write_register_full_matrix_payload() {
        let mut interface = Interface::new(MockI2c::default());
        let payload = [1, 2, 3, 4, 5, 6, 7, 8];
        interface.write_register(0x63, 0x0E, &payload).unwrap();

        let i2c = interface.release();
        assert_eq!(
            i2c.writes,
            alloc::vec![(0x63, alloc::vec![0x0E, 1, 2, 3, 4, 5, 6, 7, 8])]
        );
    }

    #[test]
    fn test_write_register_rejects_long_payload() {
        let mut interface = Interface::new(MockI2c::default());
        let result = interface.write_register(0x61, 0x0E, &[0u8; 9]);
        assert!(matches!(
            result,
            Err(InterfaceError::PayloadTooLong { len: 9 })
        ));
        assert!(interface.release().writes.is_empty());
    }

    #[test]
    fn test_write_register_propagates_bus_error() {
        let mut interface = Interface::new(MockI2c {
            fail: true,
            ..MockI2c::default()
        });
        let result = interface.write_register(0x61, 0x00, &[0x18]);
        assert!(matches!(result, Err(InterfaceError::I2c(MockError))));
    }
}
