//! Screen selection

use crate::snapshot::PanelSnapshot;

/// Mutually exclusive display screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Live readout of both sticks
    Idle,
    /// "Up" held
    Ascending,
    /// "Down" held (wins over "Up")
    Descending,
}

impl Screen {
    /// Pick the screen for a snapshot
    ///
    /// Priority: Descending > Ascending > Idle.
    pub fn select(snapshot: &PanelSnapshot) -> Self {
        if snapshot.down {
            Screen::Descending
        } else if snapshot.up {
            Screen::Ascending
        } else {
            Screen::Idle
        }
    }

    /// Static message shown by this screen, if any
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Screen::Idle => None,
            Screen::Ascending => Some("Going Up!"),
            Screen::Descending => Some("Going Down!"),
        }
    }

    /// Check if the screen content changes every tick
    pub const fn is_live(self) -> bool {
        matches!(self, Screen::Idle)
    }
}
