//! UART transmit adapter for STM32F1

use embassy_stm32::usart::{Config, Error as UsartError};
use embedded_io::Write;
use joypanel_hal::uart::{DataBits, Parity, StopBits};
use joypanel_hal::{UartConfig, UartTx};

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Noise error
    Noise,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Other error
    Other,
}

impl From<UsartError> for UartBusError {
    fn from(e: UsartError) -> Self {
        match e {
            UsartError::Framing => UartBusError::Framing,
            UsartError::Noise => UartBusError::Noise,
            UsartError::Overrun => UartBusError::Overrun,
            UsartError::Parity => UartBusError::Parity,
            _ => UartBusError::Other,
        }
    }
}

/// Translate line settings into the embassy driver configuration
pub fn usart_config(config: &UartConfig) -> Config {
    use embassy_stm32::usart;

    let mut usart_config = Config::default();
    usart_config.baudrate = config.baudrate;
    usart_config.data_bits = match config.data_bits {
        DataBits::Eight => usart::DataBits::DataBits8,
        DataBits::Nine => usart::DataBits::DataBits9,
    };
    usart_config.parity = match config.parity {
        Parity::None => usart::Parity::ParityNone,
        Parity::Even => usart::Parity::ParityEven,
        Parity::Odd => usart::Parity::ParityOdd,
    };
    usart_config.stop_bits = match config.stop_bits {
        StopBits::One => usart::StopBits::STOP1,
        StopBits::Two => usart::StopBits::STOP2,
    };
    usart_config
}

/// Serial transmitter over the embassy blocking `embedded-io` writer
pub struct SerialTx<W>(pub W);

impl<W: Write<Error = UsartError>> UartTx for SerialTx<W> {
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(data).map_err(UartBusError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embassy_errors_keep_their_cause() {
        assert_eq!(UartBusError::from(UsartError::Framing), UartBusError::Framing);
        assert_eq!(UartBusError::from(UsartError::Overrun), UartBusError::Overrun);
    }

    #[test]
    fn test_default_line_settings() {
        let config = usart_config(&UartConfig::default());
        assert_eq!(config.baudrate, 115_200);
    }
}
