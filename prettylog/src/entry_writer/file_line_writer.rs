// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonWriter, EntryBuffer, EntryWriter, RecordData, Valuer, has_call_site,
            long_file_line_valuer, short_file_line_valuer};
use std::sync::Arc;

/// `File src/server.rs:42`.
///
/// The short format trims a base path that is handed in explicitly with
/// [`FileLineWriter::with_base_path`] (or captured once from the process with
/// [`FileLineWriter::with_current_dir`]). Without one, the file path is written as is.
#[derive(Debug, Clone)]
pub struct FileLineWriter {
    common: CommonWriter,
    base_path: String,
}

impl Default for FileLineWriter {
    fn default() -> Self { Self::new() }
}

impl FileLineWriter {
    pub const KEY: &'static str = "File";

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonWriter::new(long_file_line_valuer)
                .with_static_key(Self::KEY)
                .with_condition(has_call_site),
            base_path: String::new(),
        }
        .with_short_format()
    }

    /// Trim `base_path` from files that live under it. Switches to the short format.
    #[must_use]
    pub fn with_base_path(self, base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            ..self
        }
        .with_short_format()
    }

    /// Use the process working directory, as of now, as the base path. If it can't be
    /// read the writer is left unchanged.
    #[must_use]
    pub fn with_current_dir(self) -> Self {
        match std::env::current_dir() {
            Ok(dir) => self.with_base_path(dir.to_string_lossy()),
            Err(_) => self,
        }
    }

    #[must_use]
    pub fn with_short_format(self) -> Self {
        let valuer = short_file_line_valuer(self.base_path.clone());
        self.with_common(|it| it.with_valuer(valuer))
    }

    #[must_use]
    pub fn with_long_format(self) -> Self {
        self.with_common(|it| it.with_valuer(Arc::new(long_file_line_valuer)))
    }

    /// Full control over the value, the key stays.
    #[must_use]
    pub fn with_format(self, valuer: Valuer) -> Self {
        self.with_common(|it| it.with_valuer(valuer))
    }

    #[must_use]
    pub fn with_common(self, f: impl FnOnce(CommonWriter) -> CommonWriter) -> Self {
        Self {
            common: f(self.common),
            ..self
        }
    }
}

impl EntryWriter for FileLineWriter {
    fn key_len(&self, data: &RecordData<'_>) -> usize { self.common.key_len(data) }

    fn write(&self, data: &RecordData<'_>, buffer: &mut EntryBuffer<'_>) {
        self.common.write(data, buffer);
    }
}
