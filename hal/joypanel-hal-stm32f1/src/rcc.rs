//! Clock tree
//!
//! HSI (8 MHz) halved into the PLL and multiplied by 16 gives a 64 MHz
//! SYSCLK without an external crystal. APB1 is capped at 36 MHz, so it
//! runs at /2; the ADC clock must stay under 14 MHz, so it runs at /6.

use embassy_stm32::rcc::{
    ADCPrescaler, AHBPrescaler, APBPrescaler, Pll, PllMul, PllPreDiv, PllSource, Sysclk,
};
use embassy_stm32::Config;

/// SYSCLK frequency produced by [`peripheral_config`]
pub const SYSCLK_HZ: u32 = 64_000_000;

/// Peripheral configuration for the 64 MHz HSI-driven clock tree
pub fn peripheral_config() -> Config {
    let mut config = Config::default();
    config.rcc.hsi = true;
    config.rcc.hse = None;
    config.rcc.pll = Some(Pll {
        src: PllSource::HSI,
        prediv: PllPreDiv::DIV2,
        mul: PllMul::MUL16,
    });
    config.rcc.sys = Sysclk::PLL1_P;
    config.rcc.ahb_pre = AHBPrescaler::DIV1;
    config.rcc.apb1_pre = APBPrescaler::DIV2;
    config.rcc.apb2_pre = APBPrescaler::DIV1;
    config.rcc.adc_pre = ADCPrescaler::DIV6;
    config
}
