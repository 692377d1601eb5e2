//! I2C bus adapter for STM32F1
//!
//! Wraps the `embassy-stm32` master through its blocking `embedded-hal`
//! 1.0 implementation, which it provides in both blocking and async
//! modes. The transfer timeout lives in the embassy driver configuration.

use embassy_stm32::i2c::Error as I2cError;
use embedded_hal::i2c::I2c;
use joypanel_hal::I2cBus;

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Timeout
    Timeout,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<I2cError> for I2cBusError {
    fn from(e: I2cError) -> Self {
        match e {
            I2cError::Bus => I2cBusError::Bus,
            I2cError::Arbitration => I2cBusError::ArbitrationLost,
            I2cError::Nack => I2cBusError::Nack,
            I2cError::Timeout => I2cBusError::Timeout,
            I2cError::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// I2C master bound to the LCD bus
pub struct Stm32I2c<T>(pub T);

impl<T: I2c<Error = I2cError>> I2cBus for Stm32I2c<T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data).map_err(I2cBusError::from)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(address, buf).map_err(I2cBusError::from)
    }
}
