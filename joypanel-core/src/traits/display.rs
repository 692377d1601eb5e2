//! Character display trait

/// Text-mode display with addressable character cells
///
/// Implementations write exactly what they are given: no wrapping, no
/// truncation. Callers keep each write within [`columns`](Self::columns).
pub trait CharacterDisplay {
    /// Error type for display transfers
    type Error;

    /// Blank the whole display and home the cursor
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the write position
    ///
    /// - `col`: Column number (0-based)
    /// - `row`: Row number (0-based); rows past the last are clamped
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    /// Write text at the current position
    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Characters per row
    fn columns(&self) -> u8;

    /// Write text starting at `(col, row)`
    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), Self::Error> {
        self.set_cursor(col, row)?;
        self.write_text(text)
    }
}
