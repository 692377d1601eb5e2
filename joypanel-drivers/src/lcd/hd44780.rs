//! HD44780 character LCD over a PCF8574 backpack
//!
//! Blocking driver: every expander frame is a short I2C write followed by
//! a microsecond-scale settle, so a full 16-character line costs about
//! 3.2 ms of waiting plus bus time and a steady readout fits well inside
//! one UI period. Only clear and the power-on sequence wait in
//! milliseconds. The controller's busy flag is never read.

use embedded_hal::delay::DelayNs;
use joypanel_core::config::LcdConfig;
use joypanel_core::traits::CharacterDisplay;
use joypanel_hal::I2cBus;

use super::pcf8574::{self, BL, RS};

/// Controller timing contracts
pub mod timing {
    /// Hold after each enable edge, in microseconds
    ///
    /// Covers the 450 ns enable pulse width and the 37 us execution time
    /// of every instruction except clear and home.
    pub const NIBBLE_SETTLE_US: u32 = 50;
    /// Supply ramp before the first transfer
    pub const POWER_ON_MS: u32 = 50;
    /// Waits after each of the three wake-to-8-bit writes
    pub const WAKE_MS: [u32; 3] = [5, 1, 1];
    /// Wait after switching the interface to 4-bit
    pub const MODE_SWITCH_MS: u32 = 1;
    /// Clear-display execution time
    pub const CLEAR_MS: u32 = 2;
    /// Presence checks per candidate address
    pub const PROBE_ATTEMPTS: u8 = 2;
}

/// DDRAM start address of each row
pub const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM: u8 = 0x80;

const ENTRY_INCREMENT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const FUNCTION_TWO_LINE: u8 = 0x08;

const WAKE_8BIT: u8 = 0x30;
const SWITCH_4BIT: u8 = 0x20;

/// LCD driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError<E> {
    /// No candidate address acknowledged
    NotFound,
    /// Transfer failed on a bound display
    Bus(E),
}

impl<E> From<E> for LcdError<E> {
    fn from(err: E) -> Self {
        LcdError::Bus(err)
    }
}

/// Bound display parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySession {
    /// Address that acknowledged the probe
    pub address: u8,
    /// Characters per row
    pub columns: u8,
    /// Rows in use, at most [`ROW_OFFSETS`]`.len()`
    pub rows: u8,
    /// Backlight held on or off for every frame
    pub backlight: bool,
}

impl DisplaySession {
    fn control(&self) -> u8 {
        if self.backlight {
            BL
        } else {
            0
        }
    }

    fn clamp_row(&self, row: u8) -> usize {
        row.min(self.rows.saturating_sub(1)) as usize
    }
}

/// HD44780 driver
pub struct Hd44780<I2C, D> {
    bus: I2C,
    delay: D,
    session: DisplaySession,
}

impl<I2C, D> Hd44780<I2C, D>
where
    I2C: I2cBus,
    D: DelayNs,
{
    /// Find the backpack among `config.candidates` and bind to it
    ///
    /// Candidates are tried in order; the first address that acknowledges
    /// within [`timing::PROBE_ATTEMPTS`] wins. Nothing is written to the
    /// display until [`init`](Self::init).
    pub fn probe_and_bind(
        mut bus: I2C,
        delay: D,
        config: &LcdConfig,
    ) -> Result<Self, LcdError<I2C::Error>> {
        let address = config
            .candidates
            .iter()
            .copied()
            .find(|&address| {
                (0..timing::PROBE_ATTEMPTS).any(|_| bus.probe(address).is_ok())
            })
            .ok_or(LcdError::NotFound)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("lcd acknowledged at {=u8:#x}", address);

        Ok(Self {
            bus,
            delay,
            session: DisplaySession {
                address,
                columns: config.columns,
                rows: config.rows.clamp(1, ROW_OFFSETS.len() as u8),
                backlight: config.backlight,
            },
        })
    }

    /// Run the power-on sequence
    ///
    /// Leaves the display on, cursor hidden, incrementing, and blank.
    pub fn init(&mut self) -> Result<(), LcdError<I2C::Error>> {
        self.delay.delay_ms(timing::POWER_ON_MS);

        for wait in timing::WAKE_MS {
            self.write_nibble(WAKE_8BIT, 0)?;
            self.delay.delay_ms(wait);
        }
        self.write_nibble(SWITCH_4BIT, 0)?;
        self.delay.delay_ms(timing::MODE_SWITCH_MS);

        self.send_command(CMD_FUNCTION_SET | FUNCTION_TWO_LINE)?;
        self.send_command(CMD_DISPLAY_CONTROL | DISPLAY_ON)?;
        self.send_command(CMD_ENTRY_MODE | ENTRY_INCREMENT)?;
        self.clear_display()
    }

    /// Send an instruction byte
    pub fn send_command(&mut self, command: u8) -> Result<(), LcdError<I2C::Error>> {
        self.send(command, 0)
    }

    /// Send a character byte to the current DDRAM address
    pub fn send_data(&mut self, data: u8) -> Result<(), LcdError<I2C::Error>> {
        self.send(data, RS)
    }

    /// Bound session parameters
    pub fn session(&self) -> &DisplaySession {
        &self.session
    }

    /// Give back the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.bus, self.delay)
    }

    fn clear_display(&mut self) -> Result<(), LcdError<I2C::Error>> {
        self.send_command(CMD_CLEAR)?;
        self.delay.delay_ms(timing::CLEAR_MS);
        Ok(())
    }

    fn send(&mut self, byte: u8, mode: u8) -> Result<(), LcdError<I2C::Error>> {
        self.write_nibble(pcf8574::high_nibble(byte), mode)?;
        self.write_nibble(pcf8574::low_nibble(byte), mode)
    }

    fn write_nibble(&mut self, nibble: u8, mode: u8) -> Result<(), LcdError<I2C::Error>> {
        let control = self.session.control() | mode;
        for frame in pcf8574::strobe(nibble, control) {
            self.bus.write(self.session.address, &[frame])?;
            self.delay.delay_us(timing::NIBBLE_SETTLE_US);
        }
        Ok(())
    }
}

impl<I2C, D> CharacterDisplay for Hd44780<I2C, D>
where
    I2C: I2cBus,
    D: DelayNs,
{
    type Error = LcdError<I2C::Error>;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.clear_display()
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error> {
        let row = self.session.clamp_row(row);
        let address = col.wrapping_add(ROW_OFFSETS[row]);
        self.send_command(CMD_SET_DDRAM | address)
    }

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        for byte in text.bytes() {
            self.send_data(byte)?;
        }
        Ok(())
    }

    fn columns(&self) -> u8 {
        self.session.columns
    }
}

#[cfg(test)]
mod tests {
    use joypanel_core::config::{PanelConfig, LCD_CANDIDATES};
    use joypanel_core::render::Renderer;
    use joypanel_core::{PanelSnapshot, StickReading};
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Nack;

    #[derive(Default)]
    struct RecordingBus {
        present: Vec<u8>,
        probes: Vec<u8>,
        writes: Vec<(u8, u8)>,
        fail_writes: bool,
    }

    impl RecordingBus {
        fn with_device(address: u8) -> Self {
            Self {
                present: vec![address],
                ..Self::default()
            }
        }

        fn frames(&self) -> Vec<u8> {
            self.writes.iter().map(|&(_, frame)| frame).collect()
        }
    }

    impl I2cBus for RecordingBus {
        type Error = Nack;

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Nack> {
            if self.fail_writes || !self.present.contains(&address) {
                return Err(Nack);
            }
            self.writes.extend(data.iter().map(|&byte| (address, byte)));
            Ok(())
        }

        fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Nack> {
            self.probes.push(address);
            if !self.present.contains(&address) {
                return Err(Nack);
            }
            buf.fill(0xFF);
            Ok(())
        }
    }

    /// Records every requested wait in microseconds
    #[derive(Default)]
    struct RecordingDelay {
        waits_us: Vec<u32>,
    }

    impl RecordingDelay {
        fn total_us(&self) -> u32 {
            self.waits_us.iter().sum()
        }
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.waits_us.push(ns / 1_000);
        }

        fn delay_us(&mut self, us: u32) {
            self.waits_us.push(us);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.waits_us.push(ms * 1_000);
        }
    }

    fn config() -> LcdConfig {
        LcdConfig {
            candidates: &LCD_CANDIDATES,
            columns: 16,
            rows: 2,
            backlight: true,
        }
    }

    fn bound() -> Hd44780<RecordingBus, RecordingDelay> {
        Hd44780::probe_and_bind(
            RecordingBus::with_device(0x27),
            RecordingDelay::default(),
            &config(),
        )
        .unwrap()
    }

    /// Four expander frames per byte: high nibble, then low, each strobed
    fn byte_frames(byte: u8, mode: u8) -> [u8; 4] {
        let base = BL | mode;
        let high = (byte & 0xF0) | base;
        let low = ((byte << 4) & 0xF0) | base;
        [high | 0x04, high, low | 0x04, low]
    }

    #[test]
    fn test_probe_first_candidate_wins() {
        let mut bus = RecordingBus::with_device(0x27);
        bus.present.push(0x3F);
        let lcd =
            Hd44780::probe_and_bind(bus, RecordingDelay::default(), &config()).unwrap();

        assert_eq!(lcd.session().address, 0x27);
        let (bus, _) = lcd.release();
        assert_eq!(bus.probes, vec![0x27]);
    }

    #[test]
    fn test_probe_falls_back_to_second_candidate() {
        let lcd = Hd44780::probe_and_bind(
            RecordingBus::with_device(0x3F),
            RecordingDelay::default(),
            &config(),
        )
        .unwrap();

        assert_eq!(lcd.session().address, 0x3F);
        let (bus, _) = lcd.release();
        assert_eq!(bus.probes, vec![0x27, 0x27, 0x3F]);
    }

    #[test]
    fn test_probe_not_found() {
        let mut bus = RecordingBus::default();
        let mut delay = RecordingDelay::default();

        let result = Hd44780::probe_and_bind(&mut bus, &mut delay, &config());

        assert!(matches!(result, Err(LcdError::NotFound)));
        assert_eq!(bus.probes, vec![0x27, 0x27, 0x3F, 0x3F]);
        assert!(bus.writes.is_empty());
        assert!(delay.waits_us.is_empty());
    }

    #[test]
    fn test_probe_writes_nothing() {
        let lcd = bound();
        let (bus, delay) = lcd.release();
        assert!(bus.writes.is_empty());
        assert!(delay.waits_us.is_empty());
    }

    #[test]
    fn test_init_sequence() {
        let mut lcd = bound();
        lcd.init().unwrap();
        let (bus, delay) = lcd.release();

        let mut expected = vec![0x3C, 0x38, 0x3C, 0x38, 0x3C, 0x38, 0x2C, 0x28];
        for command in [0x28, 0x0C, 0x06, 0x01] {
            expected.extend_from_slice(&byte_frames(command, 0));
        }
        assert_eq!(bus.frames(), expected);
        assert!(bus.writes.iter().all(|&(address, _)| address == 0x27));

        let mut waits = vec![50_000];
        for wake in [5_000, 1_000, 1_000] {
            waits.extend_from_slice(&[50, 50, wake]);
        }
        waits.extend_from_slice(&[50, 50, 1_000]);
        waits.extend(core::iter::repeat(50).take(16));
        waits.push(2_000);
        assert_eq!(delay.waits_us, waits);
    }

    #[test]
    fn test_data_sets_register_select() {
        let mut lcd = bound();
        lcd.write_text("A").unwrap();
        let (bus, _) = lcd.release();
        assert_eq!(bus.frames(), vec![0x4D, 0x49, 0x1D, 0x19]);
    }

    #[test]
    fn test_backlight_off_clears_bit() {
        let mut config = config();
        config.backlight = false;
        let mut lcd = Hd44780::probe_and_bind(
            RecordingBus::with_device(0x27),
            RecordingDelay::default(),
            &config,
        )
        .unwrap();

        lcd.send_command(0x01).unwrap();
        let (bus, _) = lcd.release();
        assert_eq!(bus.frames(), vec![0x04, 0x00, 0x14, 0x10]);
    }

    #[test]
    fn test_set_cursor_rows() {
        let mut lcd = bound();
        lcd.set_cursor(0, 0).unwrap();
        lcd.set_cursor(3, 1).unwrap();
        let (bus, _) = lcd.release();

        let mut expected = byte_frames(0x80, 0).to_vec();
        expected.extend_from_slice(&byte_frames(0xC3, 0));
        assert_eq!(bus.frames(), expected);
    }

    #[test]
    fn test_set_cursor_clamps_row() {
        let mut lcd = bound();
        lcd.set_cursor(2, 7).unwrap();
        let (bus, _) = lcd.release();
        assert_eq!(bus.frames(), byte_frames(0xC2, 0).to_vec());
    }

    #[test]
    fn test_four_row_offsets() {
        let mut config = config();
        config.rows = 4;
        config.columns = 20;
        let mut lcd = Hd44780::probe_and_bind(
            RecordingBus::with_device(0x27),
            RecordingDelay::default(),
            &config,
        )
        .unwrap();

        lcd.set_cursor(0, 2).unwrap();
        lcd.set_cursor(0, 3).unwrap();
        let (bus, _) = lcd.release();

        let mut expected = byte_frames(0x94, 0).to_vec();
        expected.extend_from_slice(&byte_frames(0xD4, 0));
        assert_eq!(bus.frames(), expected);
    }

    #[test]
    fn test_clear_waits_clear_cycle() {
        let mut lcd = bound();
        lcd.clear().unwrap();
        let (_, delay) = lcd.release();
        assert_eq!(delay.waits_us.last(), Some(&(timing::CLEAR_MS * 1_000)));
        assert!(timing::CLEAR_MS * 1_000 > timing::NIBBLE_SETTLE_US);
    }

    #[test]
    fn test_bus_error_surfaces() {
        let mut lcd = bound();
        lcd.bus.fail_writes = true;
        assert_eq!(lcd.write_text("x"), Err(LcdError::Bus(Nack)));
    }

    #[test]
    fn test_write_at_positions_then_writes() {
        let mut lcd = bound();
        lcd.write_at(1, 0, "Hi").unwrap();
        let (bus, _) = lcd.release();

        let mut expected = byte_frames(0x81, 0).to_vec();
        expected.extend_from_slice(&byte_frames(b'H', RS));
        expected.extend_from_slice(&byte_frames(b'i', RS));
        assert_eq!(bus.frames(), expected);
    }

    #[test]
    fn test_steady_idle_tick_fits_ui_period() {
        let panel = PanelConfig::DEFAULT;
        let snapshot = PanelSnapshot {
            left: StickReading {
                x: -5,
                y: 5,
                pressed: true,
            },
            right: StickReading {
                x: 3,
                y: -2,
                pressed: false,
            },
            ..Default::default()
        };
        let mut lcd = bound();
        let mut renderer = Renderer::new();
        renderer.render(&mut lcd, &snapshot).unwrap();
        lcd.delay.waits_us.clear();
        lcd.bus.writes.clear();

        let outcome = renderer.render(&mut lcd, &snapshot).unwrap();

        assert!(!outcome.redrawn);
        // Two rows of one cursor command and fifteen characters
        assert_eq!(lcd.bus.writes.len(), 2 * 16 * 4);
        assert!(lcd.delay.total_us() < panel.ui_period_ms * 1_000 / 10);
    }

    proptest! {
        /// Every byte costs four frames and the backlight never drops
        #[test]
        fn prop_text_framing(text in "[ -~]{0,20}") {
            let mut lcd = bound();
            lcd.write_text(&text).unwrap();
            let (bus, _) = lcd.release();

            let frames = bus.frames();
            prop_assert_eq!(frames.len(), text.len() * 4);
            prop_assert!(frames.iter().all(|frame| frame & BL != 0 && frame & RS != 0));
            for (byte, chunk) in text.bytes().zip(frames.chunks(4)) {
                prop_assert_eq!(chunk, &byte_frames(byte, RS)[..]);
            }
        }
    }
}
