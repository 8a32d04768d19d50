// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BasicColor, SgrCode};
use smallvec::{SmallVec, smallvec};
use std::fmt::{Display, Formatter, Result};

/// Text plus the list of [`SgrCode`]s to apply to it. The [`Display`] impl writes the
/// codes, then the text, then [`SgrCode::Reset`].
///
/// ```
/// use r3bl_prettylog::{AnsiStyledText, BasicColor};
///
/// let styled = AnsiStyledText::fg(BasicColor::Green, "ok").bold();
/// assert_eq!(styled.to_string(), "\x1b[32m\x1b[1mok\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiStyledText<'a> {
    pub text: &'a str,
    pub style: sizing::InlineVecSgrCodes,
}

pub mod sizing {
    use super::*;

    /// A styler never needs more than: foreground, background, bold.
    pub const MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE: usize = 4;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE]>;
}

impl<'a> AnsiStyledText<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: smallvec![],
        }
    }

    #[must_use]
    pub fn fg(color: BasicColor, text: &'a str) -> Self {
        Self {
            text,
            style: smallvec![SgrCode::Foreground(color)],
        }
    }

    #[must_use]
    pub fn bg(mut self, color: BasicColor) -> Self {
        self.style.push(SgrCode::Background(color));
        self
    }

    #[must_use]
    pub fn fg_color(mut self, color: BasicColor) -> Self {
        self.style.push(SgrCode::Foreground(color));
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.push(SgrCode::Bold);
        self
    }
}

impl Display for AnsiStyledText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for style_item in &self.style {
            write!(f, "{style_item}")?;
        }
        write!(f, "{}", self.text)?;
        write!(f, "{}", SgrCode::Reset)?;
        Ok(())
    }
}
