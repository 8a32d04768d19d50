// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod attr_scope;
pub mod level;
pub mod log_record;
pub mod record_data;

// Re-export.
pub use attr_scope::*;
pub use level::*;
pub use log_record::*;
pub use record_data::*;
