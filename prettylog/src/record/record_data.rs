// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AttrScope, CallSite, Level, LogRecord};

/// Everything an [`crate::EntryWriter`] may look at while rendering one record.
///
/// This is an immutable value. The pipeline builds one with `key_field_width == 0` for
/// the width negotiation pass, and then a second one carrying the negotiated width for
/// the render pass (see [`RecordData::with_key_field_width`]).
#[derive(Debug, Clone, Copy)]
pub struct RecordData<'a> {
    pub record: &'a LogRecord,
    /// The record's call site, or `None` when the record has none or source info is
    /// turned off on the handler.
    pub call_site: Option<&'a CallSite>,
    /// Attributes and groups bound to the handler.
    pub scope: &'a AttrScope,
    /// Prefix trimmed from function paths by [`crate::FunctionWriter`].
    pub package_name: &'a str,
    /// When `false`, output must not contain any ANSI escape sequences.
    pub color: bool,
    /// Widest visible key reported by the registered writers. Zero during width
    /// negotiation.
    pub key_field_width: usize,
}

impl<'a> RecordData<'a> {
    /// No color, no package name, no negotiated width yet.
    #[must_use]
    pub fn new(record: &'a LogRecord, scope: &'a AttrScope) -> Self {
        Self {
            record,
            call_site: record.call_site.as_ref(),
            scope,
            package_name: "",
            color: false,
            key_field_width: 0,
        }
    }

    #[must_use]
    pub fn with_color(self, color: bool) -> Self { Self { color, ..self } }

    #[must_use]
    pub fn with_package_name(self, package_name: &'a str) -> Self {
        Self {
            package_name,
            ..self
        }
    }

    #[must_use]
    pub fn without_call_site(self) -> Self {
        Self {
            call_site: None,
            ..self
        }
    }

    #[must_use]
    pub fn with_key_field_width(self, key_field_width: usize) -> Self {
        Self {
            key_field_width,
            ..self
        }
    }

    #[must_use]
    pub fn level(&self) -> Level { self.record.level }
}
