//! ADC adapter for STM32F1
//!
//! The F1 converter driver is async; each conversion is driven to
//! completion in place and abandoned after the configured timeout.

use embassy_futures::block_on;
use embassy_stm32::adc::{Adc, AnyAdcChannel, Instance, SampleTime};
use embassy_time::{with_timeout, Duration};
use joypanel_hal::{AdcConfig, AnalogInput, ConversionError};

/// Longest sample time, for the high source impedance of a potentiometer
pub const SAMPLE_TIME: SampleTime = SampleTime::CYCLES239_5;

/// ADC with a fixed set of bound inputs
///
/// Inputs are addressed by hardware channel number, so callers stay
/// independent of which pin carries which channel.
pub struct Stm32Adc<'d, T: Instance, const N: usize> {
    adc: Adc<'d, T>,
    inputs: [(u8, AnyAdcChannel<T>); N],
    timeout: Duration,
}

impl<'d, T: Instance, const N: usize> Stm32Adc<'d, T, N> {
    /// Bind `inputs` as `(channel, pin)` pairs
    pub fn new(
        mut adc: Adc<'d, T>,
        inputs: [(u8, AnyAdcChannel<T>); N],
        config: &AdcConfig,
    ) -> Self {
        adc.set_sample_time(SAMPLE_TIME);
        Self {
            adc,
            inputs,
            timeout: Duration::from_millis(u64::from(config.timeout_ms)),
        }
    }
}

impl<T: Instance, const N: usize> AnalogInput for Stm32Adc<'_, T, N> {
    type Error = ConversionError;

    fn convert(&mut self, channel: u8) -> Result<u16, Self::Error> {
        let (_, pin) = self
            .inputs
            .iter_mut()
            .find(|(bound, _)| *bound == channel)
            .ok_or(ConversionError::UnknownChannel(channel))?;

        block_on(with_timeout(self.timeout, self.adc.read(pin)))
            .map_err(|_| ConversionError::Timeout)
    }
}
