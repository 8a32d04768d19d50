// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_prettylog
//!
//! A pluggable log record renderer. Given a structured [`LogRecord`], a [`Handler`]
//! produces a line oriented byte sequence (plain, or colorized with ANSI escape
//! sequences) and flushes it to a single sink.
//!
//! ```text
//!  INFO  server started
//! Time     14:02:11
//! Function server::run
//! File     src/server.rs:42
//! {
//!   "port": 8080
//! }
//! ```
//!
//! ## Render pipeline
//!
//! Every call to [`Handler::handle`] runs the same steps on the calling thread:
//!
//! 1. Borrow a scratch buffer from the [`LimitedBufferPool`]. It is returned to the pool
//!    when the call ends, no matter how it ends.
//! 2. Width negotiation: ask every registered [`EntryWriter`] for the visible width of
//!    its key, and keep the maximum.
//! 3. Render: every [`EntryWriter`] appends its bytes to the shared, append only
//!    [`EntryBuffer`], padding its key to the negotiated width so multi line records
//!    line up vertically.
//! 4. Flush: if anything was written, lock the [`WriteLocker`] and copy the buffer to the
//!    sink in one go. Concurrent renders never interleave their output.
//!
//! ## Memory bound
//!
//! The [`LimitedBufferPool`] tracks the total capacity of its idle buffers with a lock
//! free counter. A buffer that would push that total over the configured ceiling is
//! dropped instead of pooled, so a single huge record can't inflate steady state memory.
//!
//! ## Usage
//!
//! ```
//! use r3bl_prettylog::{Handler, Level, LogRecord, StdoutMock};
//!
//! let mock = StdoutMock::new();
//! let handler = Handler::builder()
//!     .output(mock.clone())
//!     .color(false)
//!     .pretty(true)
//!     .build();
//!
//! let record = LogRecord::new(Level::Info, "hello");
//! if handler.enabled(record.level) {
//!     handler.handle(&record).unwrap();
//! }
//! assert_eq!(mock.get_copy_of_buffer_as_string(), "INFO hello\n");
//! ```
//!
//! To plug into [`tracing`], use [`PrettyLogLayer`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod ansi;
pub mod buffer_pool;
pub mod common;
pub mod entry_writer;
pub mod handler;
pub mod log;
pub mod record;
pub mod test_fixtures;
pub mod write_locker;

// Re-export.
pub use ansi::*;
pub use buffer_pool::*;
pub use common::*;
pub use entry_writer::*;
pub use handler::*;
pub use log::*;
pub use record::*;
pub use test_fixtures::*;
pub use write_locker::*;
