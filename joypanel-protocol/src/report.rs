//! Report encoding and parsing
//!
//! Line format:
//! - eight `KEY:VALUE` pairs separated by `,`
//! - keys in the order `LX LY LS RX RY RS UP DN`
//! - terminated by a single `\n` when encoded

use core::fmt::{self, Write};

use heapless::String;

/// Capacity of an encoded line, newline included
///
/// The widest possible line (all axes at `-128`) is 52 bytes.
pub const MAX_LINE_LEN: usize = 64;

/// An encoded report line
pub type ReportLine = String<MAX_LINE_LEN>;

/// One field of the report, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    LeftX,
    LeftY,
    LeftSwitch,
    RightX,
    RightY,
    RightSwitch,
    Up,
    Down,
}

impl Field {
    /// All fields in the order they appear on the wire
    pub const ORDER: [Field; 8] = [
        Field::LeftX,
        Field::LeftY,
        Field::LeftSwitch,
        Field::RightX,
        Field::RightY,
        Field::RightSwitch,
        Field::Up,
        Field::Down,
    ];

    /// Wire key for this field
    pub const fn key(self) -> &'static str {
        match self {
            Field::LeftX => "LX",
            Field::LeftY => "LY",
            Field::LeftSwitch => "LS",
            Field::RightX => "RX",
            Field::RightY => "RY",
            Field::RightSwitch => "RS",
            Field::Up => "UP",
            Field::Down => "DN",
        }
    }

    const fn is_axis(self) -> bool {
        matches!(
            self,
            Field::LeftX | Field::LeftY | Field::RightX | Field::RightY
        )
    }
}

/// Errors that can occur while parsing a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line ended before this field
    MissingField(Field),
    /// A pair was found where this field was expected, with another key
    UnexpectedKey(Field),
    /// The value of this field is not valid for its type
    InvalidValue(Field),
    /// Extra content after the last field
    TrailingData,
}

/// A complete panel report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    /// Left stick X axis
    pub lx: i8,
    /// Left stick Y axis
    pub ly: i8,
    /// Left stick switch
    pub ls: bool,
    /// Right stick X axis
    pub rx: i8,
    /// Right stick Y axis
    pub ry: i8,
    /// Right stick switch
    pub rs: bool,
    /// "Up" button
    pub up: bool,
    /// "Down" button
    pub down: bool,
}

impl Report {
    /// Encode into a newline-terminated line
    pub fn encode(&self) -> ReportLine {
        let mut line = ReportLine::new();
        // Cannot overflow: MAX_LINE_LEN covers the widest line
        let _ = writeln!(line, "{}", self);
        line
    }

    /// Parse a line, with or without its `\n` / `\r\n` terminator
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line);

        let mut report = Report::default();
        let mut pairs = line.split(',');

        for field in Field::ORDER {
            let pair = pairs
                .next()
                .filter(|p| !p.is_empty())
                .ok_or(ParseError::MissingField(field))?;
            let (key, value) = pair
                .split_once(':')
                .ok_or(ParseError::InvalidValue(field))?;
            if key != field.key() {
                return Err(ParseError::UnexpectedKey(field));
            }

            if field.is_axis() {
                report.set_axis(field, parse_axis(field, value)?);
            } else {
                report.set_flag(field, parse_flag(field, value)?);
            }
        }

        if pairs.next().is_some() {
            return Err(ParseError::TrailingData);
        }

        Ok(report)
    }

    fn set_axis(&mut self, field: Field, value: i8) {
        match field {
            Field::LeftX => self.lx = value,
            Field::LeftY => self.ly = value,
            Field::RightX => self.rx = value,
            Field::RightY => self.ry = value,
            _ => {}
        }
    }

    fn set_flag(&mut self, field: Field, value: bool) {
        match field {
            Field::LeftSwitch => self.ls = value,
            Field::RightSwitch => self.rs = value,
            Field::Up => self.up = value,
            Field::Down => self.down = value,
            _ => {}
        }
    }
}

fn parse_axis(field: Field, value: &str) -> Result<i8, ParseError> {
    // Reject the explicit '+' that str::parse would accept
    if value.starts_with('+') {
        return Err(ParseError::InvalidValue(field));
    }
    value.parse().map_err(|_| ParseError::InvalidValue(field))
}

fn parse_flag(field: Field, value: &str) -> Result<bool, ParseError> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ParseError::InvalidValue(field)),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LX:{},LY:{},LS:{},RX:{},RY:{},RS:{},UP:{},DN:{}",
            self.lx,
            self.ly,
            u8::from(self.ls),
            self.rx,
            self.ry,
            u8::from(self.rs),
            u8::from(self.up),
            u8::from(self.down),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Report {
        Report {
            lx: -3,
            ly: 2,
            ls: true,
            rx: 0,
            ry: -5,
            rs: false,
            up: false,
            down: true,
        }
    }

    #[test]
    fn test_encode_reference_line() {
        assert_eq!(
            sample().encode().as_str(),
            "LX:-3,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1\n"
        );
    }

    #[test]
    fn test_encode_widest_line_fits() {
        let report = Report {
            lx: i8::MIN,
            ly: i8::MIN,
            ls: true,
            rx: i8::MIN,
            ry: i8::MIN,
            rs: true,
            up: true,
            down: true,
        };
        let line = report.encode();
        assert!(line.ends_with('\n'));
        assert_eq!(line.len(), 52);
    }

    #[test]
    fn test_parse_reference_line() {
        let parsed = Report::parse("LX:-3,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1\n").unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_parse_accepts_crlf_and_bare() {
        let bare = "LX:-3,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1";
        assert_eq!(Report::parse(bare).unwrap(), sample());

        let crlf = "LX:-3,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1\r\n";
        assert_eq!(Report::parse(crlf).unwrap(), sample());
    }

    #[test]
    fn test_parse_missing_field() {
        let result = Report::parse("LX:-3,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0");
        assert_eq!(result, Err(ParseError::MissingField(Field::Down)));

        assert_eq!(
            Report::parse(""),
            Err(ParseError::MissingField(Field::LeftX))
        );
    }

    #[test]
    fn test_parse_out_of_order_key() {
        let result = Report::parse("LY:2,LX:-3,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1");
        assert_eq!(result, Err(ParseError::UnexpectedKey(Field::LeftX)));
    }

    #[test]
    fn test_parse_invalid_values() {
        let flag = Report::parse("LX:-3,LY:2,LS:2,RX:0,RY:-5,RS:0,UP:0,DN:1");
        assert_eq!(flag, Err(ParseError::InvalidValue(Field::LeftSwitch)));

        let axis = Report::parse("LX:x,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1");
        assert_eq!(axis, Err(ParseError::InvalidValue(Field::LeftX)));

        let plus = Report::parse("LX:+3,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1");
        assert_eq!(plus, Err(ParseError::InvalidValue(Field::LeftX)));

        let spaced = Report::parse("LX: -3,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1");
        assert_eq!(spaced, Err(ParseError::InvalidValue(Field::LeftX)));
    }

    #[test]
    fn test_parse_trailing_data() {
        let result = Report::parse("LX:-3,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1,XX:0");
        assert_eq!(result, Err(ParseError::TrailingData));
    }

    proptest! {
        #[test]
        fn prop_parse_inverts_encode(
            lx in -5i8..=5, ly in -5i8..=5, rx in -5i8..=5, ry in -5i8..=5,
            ls: bool, rs: bool, up: bool, down: bool,
        ) {
            let report = Report { lx, ly, ls, rx, ry, rs, up, down };
            let line = report.encode();
            prop_assert_eq!(Report::parse(line.as_str()), Ok(report));
        }
    }
}
