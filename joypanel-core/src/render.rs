//! Screen rendering
//!
//! Applies the redraw policy: the display is cleared and repainted only
//! when the selected [`Screen`] changes. The idle readout is rewritten
//! in place every tick because its values move continuously; its lines
//! always have the same width, so stale characters never linger.

use core::fmt::Write;

use heapless::String;

use crate::snapshot::{PanelSnapshot, StickReading};
use crate::state::Screen;
use crate::traits::CharacterDisplay;

/// Characters per LCD row
pub const LINE_LEN: usize = 16;

/// One formatted LCD row
pub type LcdLine = String<LINE_LEN>;

/// Result of one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderOutcome {
    /// Screen now on the display
    pub screen: Screen,
    /// Whether the display was cleared and repainted
    pub redrawn: bool,
}

/// Format one stick as `LX:+3 LY:-2 L:1`
///
/// Signs are always shown, so every line is exactly 15 characters for
/// values in `-9..=9`. Normalized axes never leave `-5..=5`; anything
/// wider would not fit the row.
pub fn stick_line(side: char, stick: &StickReading) -> LcdLine {
    let mut line = LcdLine::new();
    let written = write!(
        line,
        "{side}X:{:+} {side}Y:{:+} {side}:{}",
        stick.x,
        stick.y,
        u8::from(stick.pressed),
    );
    debug_assert!(written.is_ok(), "stick line overflows LCD row");
    line
}

/// Both idle readout rows, left stick on top
pub fn idle_lines(snapshot: &PanelSnapshot) -> [LcdLine; 2] {
    [
        stick_line('L', &snapshot.left),
        stick_line('R', &snapshot.right),
    ]
}

/// Column that centres `text` on a row of `columns` characters
pub fn centred_column(text: &str, columns: u8) -> u8 {
    let len = u8::try_from(text.len()).unwrap_or(u8::MAX);
    columns.saturating_sub(len) / 2
}

/// Tracks what is on the display between ticks
#[derive(Debug, Default)]
pub struct Renderer {
    previous: Option<Screen>,
}

impl Renderer {
    /// Create a renderer; the first pass always redraws
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Screen drawn by the last pass
    pub fn current(&self) -> Option<Screen> {
        self.previous
    }

    /// Bring the display up to date with `snapshot`
    ///
    /// The screen decision is committed before any transfer, so a bus
    /// error does not cause the next tick to clear again.
    pub fn render<D: CharacterDisplay>(
        &mut self,
        display: &mut D,
        snapshot: &PanelSnapshot,
    ) -> Result<RenderOutcome, D::Error> {
        let screen = Screen::select(snapshot);
        let redrawn = self.previous != Some(screen);
        self.previous = Some(screen);

        if redrawn {
            display.clear()?;
            if let Some(message) = screen.message() {
                let col = centred_column(message, display.columns());
                display.write_at(col, 0, message)?;
            }
        }

        if screen.is_live() {
            for (row, line) in idle_lines(snapshot).iter().enumerate() {
                display.write_at(0, row as u8, line.as_str())?;
            }
        }

        Ok(RenderOutcome { screen, redrawn })
    }
}
