// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Writers for tests and doc examples: an in memory sink that can be inspected after
//! the fact, and a sink that always fails.

// Attach sources.
pub mod failing_writer;
pub mod stdout_mock;

// Re-export.
pub use failing_writer::*;
pub use stdout_mock::*;
