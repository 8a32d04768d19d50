// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced while rendering a log record.
//!
//! Rendering can fail in two places:
//! 1. Writing the finished record to the sink ([`PrettyLogError::SinkWrite`]).
//! 2. Serializing attributes to JSON ([`PrettyLogError::JsonSerialize`]).
//!
//! Installing [`crate::PrettyLogLayer`] as the global subscriber fails when one is
//! already set ([`PrettyLogError::InstallGlobal`]).
//!
//! Missing optional data (no call site, no timestamp) is not an error, the affected
//! [`crate::EntryWriter`] simply writes nothing. An exhausted [`crate::LimitedBufferPool`]
//! is not an error either, it allocates a fresh buffer.
//!
//! These errors are local to a single [`crate::Handler::handle`] call. Nothing is retried
//! and nothing is logged, the caller decides whether a lost record is acceptable.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias for the result of a render call.
pub type PrettyLogResult<T> = Result<T, PrettyLogError>;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum PrettyLogError {
    /// The sink rejected the rendered record. The record is lost for this call.
    #[error("Failed to write log record to the output sink")]
    #[diagnostic(
        code(r3bl_prettylog::sink_write),
        help("The output was closed or is full, the record was dropped")
    )]
    SinkWrite(#[source] std::io::Error),

    /// The record attributes could not be serialized to JSON.
    #[error("Failed to serialize log record attributes to JSON")]
    #[diagnostic(code(r3bl_prettylog::json_serialize))]
    JsonSerialize(#[source] serde_json::Error),

    #[error("A global tracing subscriber is already installed")]
    #[diagnostic(
        code(r3bl_prettylog::install_global),
        help("Use install_thread_local() in tests, or install once at startup")
    )]
    InstallGlobal(#[source] tracing::subscriber::SetGlobalDefaultError),
}
