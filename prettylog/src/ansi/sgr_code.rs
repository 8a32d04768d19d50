// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

/// The 8 basic terminal colors. Every terminal that understands ANSI escape sequences
/// supports these, and the user's terminal theme decides the actual shades.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BasicColor {
    #[must_use]
    pub const fn offset(self) -> u8 {
        match self {
            BasicColor::Black => 0,
            BasicColor::Red => 1,
            BasicColor::Green => 2,
            BasicColor::Yellow => 3,
            BasicColor::Blue => 4,
            BasicColor::Magenta => 5,
            BasicColor::Cyan => 6,
            BasicColor::White => 7,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Foreground(BasicColor),
    ForegroundBright(BasicColor),
    Background(BasicColor),
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                   => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                    => write!(f, "{CSI}1{SGR}"),
                SgrCode::Dim                     => write!(f, "{CSI}2{SGR}"),
                SgrCode::Foreground(color)       => write!(f, "{CSI}{}{SGR}", 30 + color.offset()),
                SgrCode::ForegroundBright(color) => write!(f, "{CSI}{}{SGR}", 90 + color.offset()),
                SgrCode::Background(color)       => write!(f, "{CSI}{}{SGR}", 40 + color.offset()),
            }
        }
    }
}
