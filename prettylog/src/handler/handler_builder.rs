// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AttrScope, EntryWriterId, EntryWriters, Handler, IntoWriteLocker, Level,
            LimitedBufferPool, RegisteredWriter, WriteLocker, default_writers};
use std::sync::Arc;

/// Configuration for a [`Handler`].
///
/// Anything left unset is resolved in [`build`](Self::build):
/// - output: stderr.
/// - color and pretty: whether the output is an interactive terminal.
/// - pool: a fresh [`LimitedBufferPool`] with the default ceiling.
///
/// ```
/// use r3bl_prettylog::{EntryWriterId, Handler, Level, StdoutMock};
///
/// let handler = Handler::builder()
///     .output(StdoutMock::new())
///     .level(Level::Debug)
///     .without_writers([EntryWriterId::FUNCTION, EntryWriterId::FILE_LINE])
///     .build();
///
/// assert_eq!(handler.writer_ids(), vec!["level", "message", "time", "pretty_json"]);
/// assert!(!handler.is_color());
/// ```
#[derive(Debug)]
pub struct HandlerBuilder {
    output: Option<WriteLocker>,
    level: Level,
    add_source: bool,
    color: Option<bool>,
    pretty: Option<bool>,
    add_new_line: bool,
    package_name: String,
    pool: Option<Arc<LimitedBufferPool>>,
    writers: EntryWriters,
    scope: AttrScope,
}

impl Default for HandlerBuilder {
    fn default() -> Self {
        Self {
            output: None,
            level: Level::Info,
            add_source: true,
            color: None,
            pretty: None,
            add_new_line: true,
            package_name: String::new(),
            pool: None,
            writers: EntryWriters::from(default_writers()),
            scope: AttrScope::default(),
        }
    }
}

impl HandlerBuilder {
    pub(crate) fn from_handler(handler: &Handler) -> Self {
        Self {
            output: Some(handler.output.clone()),
            level: handler.level,
            add_source: handler.add_source,
            color: Some(handler.color),
            pretty: Some(handler.pretty),
            add_new_line: handler.add_new_line,
            package_name: handler.package_name.to_string(),
            pool: Some(handler.pool.clone()),
            writers: (*handler.writers).clone(),
            scope: (*handler.scope).clone(),
        }
    }

    /// Any [`std::io::Write`] sink, or an existing [`WriteLocker`] to share its lock
    /// with other handlers.
    #[must_use]
    pub fn output(mut self, output: impl IntoWriteLocker) -> Self {
        self.output = Some(output.into_write_locker());
        self
    }

    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn add_source(mut self, add_source: bool) -> Self {
        self.add_source = add_source;
        self
    }

    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    /// `false` switches to one JSON object per line.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }

    /// End each pretty record with a new line.
    #[must_use]
    pub fn add_new_line(mut self, add_new_line: bool) -> Self {
        self.add_new_line = add_new_line;
        self
    }

    /// Module path prefix trimmed from function names, eg: `my_app`.
    #[must_use]
    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    /// Ceiling, in bytes, of idle buffer capacity kept for reuse. Zero or less means
    /// the default.
    #[must_use]
    pub fn pool_size(mut self, ceiling: isize) -> Self {
        self.pool = Some(Arc::new(LimitedBufferPool::new(ceiling)));
        self
    }

    /// Replaces the whole writer list.
    #[must_use]
    pub fn writers(mut self, writers: impl IntoIterator<Item = RegisteredWriter>) -> Self {
        self.writers = EntryWriters::from(writers.into_iter().collect::<Vec<_>>());
        self
    }

    /// Appends to the writer list.
    #[must_use]
    pub fn additional_writers(
        mut self,
        writers: impl IntoIterator<Item = RegisteredWriter>,
    ) -> Self {
        self.writers.append(writers);
        self
    }

    #[must_use]
    pub fn without_writers(mut self, ids: impl IntoIterator<Item = EntryWriterId>) -> Self {
        let ids: Vec<EntryWriterId> = ids.into_iter().collect();
        self.writers.remove(&ids);
        self
    }

    /// Swaps the writer registered as `id`. Appends when there is none.
    #[must_use]
    pub fn replace_writer(mut self, id: &EntryWriterId, writer: RegisteredWriter) -> Self {
        self.writers.replace(id, writer);
        self
    }

    #[must_use]
    pub fn add_writers_before(
        mut self,
        id: &EntryWriterId,
        writers: impl IntoIterator<Item = RegisteredWriter>,
    ) -> Self {
        self.writers.insert_before(id, writers);
        self
    }

    #[must_use]
    pub fn add_writers_after(
        mut self,
        id: &EntryWriterId,
        writers: impl IntoIterator<Item = RegisteredWriter>,
    ) -> Self {
        self.writers.insert_after(id, writers);
        self
    }

    #[must_use]
    pub fn build(self) -> Handler {
        let output = self.output.unwrap_or_else(WriteLocker::new_stderr);
        let is_terminal = output.is_terminal();
        Handler {
            color: self.color.unwrap_or(is_terminal),
            pretty: self.pretty.unwrap_or(is_terminal),
            output,
            pool: self.pool.unwrap_or_default(),
            writers: Arc::new(self.writers),
            scope: Arc::new(self.scope),
            level: self.level,
            add_source: self.add_source,
            add_new_line: self.add_new_line,
            package_name: Arc::from(self.package_name),
        }
    }
}
