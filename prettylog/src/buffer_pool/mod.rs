// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod limited_pool;

// Re-export.
pub use limited_pool::*;
