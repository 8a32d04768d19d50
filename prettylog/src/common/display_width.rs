// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

const ESC: char = '\x1b';

/// Number of terminal columns `text` occupies once printed. ANSI escape sequences take
/// up no columns, and wide glyphs (CJK, emoji) take up two.
///
/// This is what keys are measured with, so styled and plain keys line up the same way.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.contains(ESC) {
        strip_ansi_escapes::strip_str(text).width()
    } else {
        text.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("", 0; "empty")]
    #[test_case("Time", 4; "ascii")]
    #[test_case("\x1b[1m\x1b[32mTime\x1b[0m", 4; "styled")]
    #[test_case("日本", 4; "wide glyphs")]
    #[test_case("\x1b[41m 日本 \x1b[0m", 6; "styled wide glyphs with padding")]
    fn test_display_width(input: &str, expected: usize) {
        assert_eq!(display_width(input), expected);
    }
}
