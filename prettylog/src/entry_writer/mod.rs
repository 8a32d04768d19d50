// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod colored_json_formatter;
pub mod common_writer;
pub mod entry_buffer;
pub mod entry_writer_api;
pub mod file_line_writer;
pub mod formatters;
pub mod function_writer;
pub mod level_and_message_writers;
pub mod pretty_json_writer;
pub mod registered_writer;
pub mod time_writer;

// Re-export.
pub use colored_json_formatter::*;
pub use common_writer::*;
pub use entry_buffer::*;
pub use entry_writer_api::*;
pub use file_line_writer::*;
pub use formatters::*;
pub use function_writer::*;
pub use level_and_message_writers::*;
pub use pretty_json_writer::*;
pub use registered_writer::*;
pub use time_writer::*;
