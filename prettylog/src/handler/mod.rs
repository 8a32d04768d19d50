// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod handler_builder;
pub mod handler_impl;
pub mod json_line;

// Re-export.
pub use handler_builder::*;
pub use handler_impl::*;
pub use json_line::*;
