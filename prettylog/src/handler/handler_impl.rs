// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Attr, AttrScope, EntryBuffer, EntryWriters, HandlerBuilder, Level,
            LimitedBufferPool, LogRecord, PrettyLogError, PrettyLogResult, RecordData,
            WriteLocker, write_json_line};
use std::{io::Write, sync::Arc};

/// Renders [`LogRecord`]s and writes them to one sink.
///
/// Cheap to clone: the sink, the buffer pool, the writer list, and the bound
/// attributes are all shared. Safe to use from many threads at once.
///
/// Build one with [`Handler::builder`]. See the crate docs for the render pipeline.
#[derive(Debug, Clone)]
pub struct Handler {
    pub(crate) output: WriteLocker,
    pub(crate) pool: Arc<LimitedBufferPool>,
    pub(crate) writers: Arc<EntryWriters>,
    pub(crate) scope: Arc<AttrScope>,
    pub(crate) level: Level,
    pub(crate) add_source: bool,
    pub(crate) color: bool,
    pub(crate) pretty: bool,
    pub(crate) add_new_line: bool,
    pub(crate) package_name: Arc<str>,
}

impl Default for Handler {
    fn default() -> Self { Self::builder().build() }
}

impl Handler {
    #[must_use]
    pub fn builder() -> HandlerBuilder { HandlerBuilder::default() }

    /// A builder holding this handler's configuration. Building from it shares the
    /// sink and the buffer pool with this handler (unless those are changed), and
    /// leaves this handler untouched.
    #[must_use]
    pub fn to_builder(&self) -> HandlerBuilder { HandlerBuilder::from_handler(self) }

    /// Minimum level gate. Callers check this before building a record.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool { level >= self.level }

    /// Render `record` and write it to the sink in one locked write.
    ///
    /// 1. Borrow a scratch buffer from the pool. It goes back when this returns, on
    ///    every path.
    /// 2. Ask every writer for its key width, in registration order, and keep the max.
    /// 3. Let every writer append to the buffer, in the same order, with that width.
    /// 4. If nothing was rendered, return without touching the sink. Otherwise lock the
    ///    sink and write the whole buffer.
    ///
    /// # Errors
    ///
    /// [`PrettyLogError::SinkWrite`] if the sink fails. Nothing is retried, the
    /// record is lost.
    /// [`PrettyLogError::JsonSerialize`] if the JSON line (non pretty mode) can't be
    /// produced.
    pub fn handle(&self, record: &LogRecord) -> PrettyLogResult<()> {
        let mut buffer = self.pool.acquire_scoped();
        let data = self.record_data(record);

        if self.pretty {
            self.render(&data, &mut buffer);
            if buffer.is_empty() {
                return Ok(());
            }
            if self.add_new_line {
                buffer.push(b'\n');
            }
        } else {
            write_json_line(&data, &mut buffer)?;
        }

        let mut sink = self.output.lock();
        sink.write_all(&buffer)
            .and_then(|()| sink.flush())
            .map_err(PrettyLogError::SinkWrite)
    }

    /// A handler with `attrs` added to the innermost open group. Shares everything
    /// else with `self`.
    #[must_use]
    pub fn with_attrs(&self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        let mut attrs = attrs.into_iter().peekable();
        let mut it = self.clone();
        if attrs.peek().is_some() {
            Arc::make_mut(&mut it.scope).add_attrs(attrs);
        }
        it
    }

    /// A handler where attributes added from now on (including the ones on each
    /// record) are nested under `name`. An empty `name` returns an equivalent handler.
    #[must_use]
    pub fn with_group(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        let mut it = self.clone();
        if !name.is_empty() {
            Arc::make_mut(&mut it.scope).open_group(name);
        }
        it
    }

    #[must_use]
    pub fn min_level(&self) -> Level { self.level }

    #[must_use]
    pub fn is_color(&self) -> bool { self.color }

    #[must_use]
    pub fn is_pretty(&self) -> bool { self.pretty }

    #[must_use]
    pub fn output(&self) -> &WriteLocker { &self.output }

    #[must_use]
    pub fn writer_ids(&self) -> Vec<&str> { self.writers.ids() }

    fn record_data<'a>(&'a self, record: &'a LogRecord) -> RecordData<'a> {
        let data = RecordData::new(record, &self.scope)
            .with_color(self.color)
            .with_package_name(&self.package_name);
        if self.add_source {
            data
        } else {
            data.without_call_site()
        }
    }

    /// Width negotiation, then render.
    fn render(&self, data: &RecordData<'_>, bytes: &mut Vec<u8>) {
        let key_field_width = self
            .writers
            .iter()
            .map(|it| it.writer.key_len(data))
            .max()
            .unwrap_or(0);
        let data = data.with_key_field_width(key_field_width);

        let mut buffer = EntryBuffer::new(bytes);
        for it in self.writers.iter() {
            it.writer.write(&data, &mut buffer);
        }
    }
}
