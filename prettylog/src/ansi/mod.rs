// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi_styled_text;
pub mod sgr_code;
pub mod stylers;

// Re-export.
pub use ansi_styled_text::*;
pub use sgr_code::*;
pub use stylers::*;
