//! I2C bus abstractions
//!
//! Blocking master operations with bounded waits. Addresses are always
//! 7-bit; implementations shift in the R/W bit themselves.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Check whether a device acknowledges its address
    ///
    /// The default issues a one-byte read, which is side-effect free on
    /// port expanders such as the PCF8574.
    fn probe(&mut self, address: u8) -> Result<(), Self::Error> {
        let mut scratch = [0u8; 1];
        self.read(address, &mut scratch)
    }
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read(address, buf)
    }

    fn probe(&mut self, address: u8) -> Result<(), Self::Error> {
        (**self).probe(address)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Upper bound for a single transfer in milliseconds
    pub timeout_ms: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz), which the LCD backpack is rated for
    pub const STANDARD: Self = Self {
        frequency: 100_000,
        timeout_ms: 10,
    };
}
