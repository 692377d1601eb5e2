//! Panel snapshot
//!
//! One consistent set of readings taken in a single acquisition pass.

use joypanel_protocol::Report;

/// One joystick: two axes and its push switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StickReading {
    /// Horizontal axis, right is positive
    pub x: i8,
    /// Vertical axis, up is positive
    pub y: i8,
    /// Stick pushed in
    pub pressed: bool,
}

/// All panel inputs for one UI interval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelSnapshot {
    /// Left joystick
    pub left: StickReading,
    /// Right joystick
    pub right: StickReading,
    /// "Up" button held
    pub up: bool,
    /// "Down" button held
    pub down: bool,
}

impl PanelSnapshot {
    /// Wire form for the serial report line
    pub fn report(&self) -> Report {
        Report {
            lx: self.left.x,
            ly: self.left.y,
            ls: self.left.pressed,
            rx: self.right.x,
            ry: self.right.y,
            rs: self.right.pressed,
            up: self.up,
            down: self.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line() {
        let snapshot = PanelSnapshot {
            left: StickReading {
                x: -3,
                y: 2,
                pressed: true,
            },
            right: StickReading {
                x: 0,
                y: -5,
                pressed: false,
            },
            up: false,
            down: true,
        };

        assert_eq!(
            snapshot.report().encode().as_str(),
            "LX:-3,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1\n"
        );
    }
}
