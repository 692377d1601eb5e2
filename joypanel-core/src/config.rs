//! Fixed board configuration
//!
//! The panel has no runtime configuration surface. Everything tunable is
//! collected here so the firmware and the tests agree on one set of
//! numbers.

/// Analog channel assignment per joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisChannels {
    /// Left stick X (PA0)
    pub left_x: u8,
    /// Left stick Y (PA1)
    pub left_y: u8,
    /// Right stick X (PA4)
    pub right_x: u8,
    /// Right stick Y (PB0)
    pub right_y: u8,
}

/// Character LCD parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdConfig {
    /// 7-bit expander addresses to probe, in order
    pub candidates: &'static [u8],
    /// Characters per row
    pub columns: u8,
    /// Number of rows
    pub rows: u8,
    /// Backlight state held for the whole session
    pub backlight: bool,
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Liveness LED toggle period
    pub heartbeat_period_ms: u32,
    /// Acquisition / render / report period
    pub ui_period_ms: u32,
    /// LED half-period once the firmware has halted on a fault
    pub fault_blink_ms: u32,
    /// How long the boot banner stays up before the first UI tick
    pub banner_hold_ms: u32,
    /// Analog channel map
    pub channels: AxisChannels,
    /// Display parameters
    pub lcd: LcdConfig,
}

/// PCF8574 (0x27) and PCF8574A (0x3F) backpacks with all jumpers open
pub const LCD_CANDIDATES: [u8; 2] = [0x27, 0x3F];

impl PanelConfig {
    /// NUCLEO-F103RB panel wiring
    pub const DEFAULT: Self = Self {
        heartbeat_period_ms: 200,
        ui_period_ms: 100,
        fault_blink_ms: 50,
        banner_hold_ms: 500,
        channels: AxisChannels {
            left_x: 0,
            left_y: 1,
            right_x: 4,
            right_y: 8,
        },
        lcd: LcdConfig {
            candidates: &LCD_CANDIDATES,
            columns: 16,
            rows: 2,
            backlight: true,
        },
    };
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_blink_is_distinct_from_heartbeat() {
        let config = PanelConfig::default();
        assert!(config.fault_blink_ms < config.heartbeat_period_ms);
    }

    #[test]
    fn test_ui_runs_faster_than_heartbeat() {
        let config = PanelConfig::default();
        assert_eq!(config.ui_period_ms, 100);
        assert_eq!(config.heartbeat_period_ms, 200);
    }

    #[test]
    fn test_channels_are_distinct() {
        let c = PanelConfig::DEFAULT.channels;
        let all = [c.left_x, c.left_y, c.right_x, c.right_y];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
