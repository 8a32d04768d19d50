// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonWriter, background_bold_colored_styler, level_valuer, message_valuer,
            simple_colored_styler};

/// Keyless level badge, e.g. ` WARN ` on a yellow background.
#[must_use]
pub fn new_level_writer() -> CommonWriter {
    CommonWriter::new(level_valuer).with_value_styler(background_bold_colored_styler)
}

/// Keyless message, colored by level.
#[must_use]
pub fn new_message_writer() -> CommonWriter {
    CommonWriter::new(message_valuer).with_value_styler(simple_colored_styler)
}
