//! Joypanel serial report protocol
//!
//! Every UI interval the monitor prints one ASCII line describing the
//! whole panel:
//!
//! ```text
//! LX:-3,LY:2,LS:1,RX:0,RY:-5,RS:0,UP:0,DN:1\n
//! ```
//!
//! Field order and keys are fixed, axes are signed decimal, buttons are
//! `0`/`1`, and there is no whitespace. Host-side bridges split the
//! stream on `\n` and hand each line to [`Report::parse`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod report;

pub use report::{Field, ParseError, Report, ReportLine, MAX_LINE_LEN};
