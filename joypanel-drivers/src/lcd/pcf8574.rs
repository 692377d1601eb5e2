//! PCF8574 backpack wiring
//!
//! The backpack exposes the HD44780 in 4-bit mode through one 8-bit
//! register: the data nibble sits in the upper four bits and the control
//! lines in the lower four. Every byte written to the expander is a full
//! snapshot of all eight lines.

/// Register select: set for data, clear for commands
pub const RS: u8 = 0x01;

/// Read/write select; the driver only ever writes, so it stays clear
pub const RW: u8 = 0x02;

/// Enable strobe; the controller latches on its falling edge
pub const EN: u8 = 0x04;

/// Backlight transistor
pub const BL: u8 = 0x08;

/// Upper nibble of `byte`, positioned on the data lines
pub const fn high_nibble(byte: u8) -> u8 {
    byte & 0xF0
}

/// Lower nibble of `byte`, positioned on the data lines
pub const fn low_nibble(byte: u8) -> u8 {
    (byte << 4) & 0xF0
}

/// Register frames for one nibble strobe: enable asserted, then released
pub const fn strobe(nibble: u8, control: u8) -> [u8; 2] {
    let base = (nibble & 0xF0) | (control & 0x0F & !EN & !RW);
    [base | EN, base]
}
