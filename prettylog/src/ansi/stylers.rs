// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stylers decorate an already formatted key or value with ANSI escape sequences. The
//! colors depend on the record's [`Level`]. A [`crate::CommonWriter`] only calls its
//! stylers when color is enabled, so a styler never has to check for that itself.

use crate::{AnsiStyledText, BasicColor, Level, RecordData};
use std::sync::Arc;

/// Shared, thread safe styler. Any `fn(&RecordData<'_>, &str) -> String` converts
/// into one with [`Arc::new`].
pub type Styler = Arc<dyn Fn(&RecordData<'_>, &str) -> String + Send + Sync>;

/// Text color for a level, on the terminal's own background.
#[must_use]
pub fn level_fg_color(level: Level) -> BasicColor {
    match level {
        Level::Error => BasicColor::Red,
        Level::Warn => BasicColor::Yellow,
        Level::Info => BasicColor::Green,
        Level::Debug => BasicColor::Cyan,
        Level::Trace => BasicColor::White,
    }
}

/// `(background, foreground)` for a level, with a contrasting foreground.
#[must_use]
pub fn level_bg_colors(level: Level) -> (BasicColor, BasicColor) {
    match level {
        Level::Trace => (BasicColor::White, BasicColor::Black),
        other => (level_fg_color(other), BasicColor::White),
    }
}

/// Returns the text unchanged.
#[must_use]
pub fn plain_styler(_data: &RecordData<'_>, text: &str) -> String { text.to_string() }

/// Level colored text.
#[must_use]
pub fn simple_colored_styler(data: &RecordData<'_>, text: &str) -> String {
    AnsiStyledText::fg(level_fg_color(data.level()), text).to_string()
}

/// Level colored bold text. Default key styler of the time, function, and file
/// fragments.
#[must_use]
pub fn bold_colored_styler(data: &RecordData<'_>, text: &str) -> String {
    AnsiStyledText::fg(level_fg_color(data.level()), text)
        .bold()
        .to_string()
}

/// Bold text on a level colored background, padded with one space on each side so it
/// reads like a badge, e.g. ` WARN `.
#[must_use]
pub fn background_bold_colored_styler(data: &RecordData<'_>, text: &str) -> String {
    let (bg, fg) = level_bg_colors(data.level());
    let padded = format!(" {text} ");
    AnsiStyledText::new(&padded)
        .bg(bg)
        .fg_color(fg)
        .bold()
        .to_string()
}

#[must_use]
pub fn bold_styler(_data: &RecordData<'_>, text: &str) -> String {
    AnsiStyledText::new(text).bold().to_string()
}
