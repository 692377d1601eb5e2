//! NUCLEO-F103RB wiring
//!
//! | Signal        | Pin  | Peripheral       |
//! |---------------|------|------------------|
//! | LX / LY       | PA0 / PA1 | ADC1 ch 0 / 1 |
//! | RX / RY       | PA4 / PB0 | ADC1 ch 4 / 8 |
//! | L / R switch  | PC10 / PC11 | pull-up     |
//! | UP / DOWN     | PD2 / PC12  | pull-up     |
//! | Heartbeat LED | PA5  | LD2              |
//! | LCD SCL / SDA | PB8 / PB9 | I2C1 (remap) |
//! | Serial TX     | PA2  | USART2 (ST-LINK VCP) |

use defmt::unwrap;
use embassy_stm32::adc::{Adc, AdcChannel};
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::Hertz;
use embassy_stm32::usart;
use embassy_stm32::Peripherals;
use embassy_time::Duration;
use joypanel_core::{Buttons, PanelConfig, PanelReader};
use joypanel_hal::{
    AdcConfig, AnalogInput, ConversionError, I2cBus, I2cConfig, OutputPin, UartConfig, UartTx,
};
use joypanel_hal_stm32f1::i2c::I2cBusError;
use joypanel_hal_stm32f1::uart::{usart_config, UartBusError};
use joypanel_hal_stm32f1::{InputLine, OutputLine, SerialTx, Stm32Adc, Stm32I2c};

/// Board resources, each behind its HAL trait
pub struct Board<L, B, A, S> {
    pub led: L,
    pub lcd_bus: B,
    pub reader: PanelReader<A, InputLine<'static>>,
    pub serial: S,
}

/// Claim and configure every peripheral the monitor uses
pub fn take(
    p: Peripherals,
    config: &PanelConfig,
) -> Board<
    impl OutputPin,
    impl I2cBus<Error = I2cBusError>,
    impl AnalogInput<Error = ConversionError>,
    impl UartTx<Error = UartBusError>,
> {
    let led = OutputLine(Output::new(p.PA5, Level::Low, Speed::Low));

    let bus_config = I2cConfig::STANDARD;
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz(bus_config.frequency);
    i2c_config.timeout = Duration::from_millis(u64::from(bus_config.timeout_ms));
    let lcd_bus = Stm32I2c(I2c::new_blocking(p.I2C1, p.PB8, p.PB9, i2c_config));

    let channels = config.channels;
    let adc = Stm32Adc::new(
        Adc::new(p.ADC1),
        [
            (channels.left_x, p.PA0.degrade_adc()),
            (channels.left_y, p.PA1.degrade_adc()),
            (channels.right_x, p.PA4.degrade_adc()),
            (channels.right_y, p.PB0.degrade_adc()),
        ],
        &AdcConfig::default(),
    );

    let buttons = Buttons {
        left_stick: InputLine(Input::new(p.PC10, Pull::Up)),
        right_stick: InputLine(Input::new(p.PC11, Pull::Up)),
        up: InputLine(Input::new(p.PD2, Pull::Up)),
        down: InputLine(Input::new(p.PC12, Pull::Up)),
    };

    let tx = unwrap!(usart::UartTx::new_blocking(
        p.USART2,
        p.PA2,
        usart_config(&UartConfig::default()),
    ));

    Board {
        led,
        lcd_bus,
        reader: PanelReader::new(adc, channels, buttons),
        serial: SerialTx(tx),
    }
}
