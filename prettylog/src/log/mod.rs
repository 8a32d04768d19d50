// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod event_visitor;
pub mod pretty_log_layer;

// Re-export.
pub use event_visitor::*;
pub use pretty_log_layer::*;
