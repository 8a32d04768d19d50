// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EntryWriter, FileLineWriter, FunctionWriter, PrettyJsonWriter, TimeWriter,
            new_level_writer, new_message_writer};
use std::{borrow::Cow,
          collections::HashSet,
          fmt::{Debug, Display, Formatter},
          sync::Arc};

/// Stable name of a registered [`EntryWriter`]. Removing, replacing, and inserting
/// writers on a [`crate::HandlerBuilder`] is done by comparing these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryWriterId(Cow<'static, str>);

impl EntryWriterId {
    pub const LEVEL: Self = Self(Cow::Borrowed("level"));
    pub const MESSAGE: Self = Self(Cow::Borrowed("message"));
    pub const TIME: Self = Self(Cow::Borrowed("time"));
    pub const FUNCTION: Self = Self(Cow::Borrowed("function"));
    pub const FILE_LINE: Self = Self(Cow::Borrowed("file_line"));
    pub const PRETTY_JSON: Self = Self(Cow::Borrowed("pretty_json"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self { Self(name.into()) }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl Display for EntryWriterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

impl From<&'static str> for EntryWriterId {
    fn from(name: &'static str) -> Self { Self::new(name) }
}

impl From<String> for EntryWriterId {
    fn from(name: String) -> Self { Self::new(name) }
}

/// An [`EntryWriter`] paired with its [`EntryWriterId`].
#[derive(Clone)]
pub struct RegisteredWriter {
    pub id: EntryWriterId,
    pub writer: Arc<dyn EntryWriter>,
}

impl Debug for RegisteredWriter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RegisteredWriter").field(&self.id.as_str()).finish()
    }
}

impl RegisteredWriter {
    pub fn new(id: impl Into<EntryWriterId>, writer: impl EntryWriter + 'static) -> Self {
        Self {
            id: id.into(),
            writer: Arc::new(writer),
        }
    }
}

/// Level, message, time, function, file and line, attributes.
#[must_use]
pub fn default_writers() -> Vec<RegisteredWriter> {
    vec![
        RegisteredWriter::new(EntryWriterId::LEVEL, new_level_writer()),
        RegisteredWriter::new(EntryWriterId::MESSAGE, new_message_writer()),
        RegisteredWriter::new(EntryWriterId::TIME, TimeWriter::new()),
        RegisteredWriter::new(EntryWriterId::FUNCTION, FunctionWriter::new()),
        RegisteredWriter::new(
            EntryWriterId::FILE_LINE,
            FileLineWriter::new().with_current_dir(),
        ),
        RegisteredWriter::new(EntryWriterId::PRETTY_JSON, PrettyJsonWriter::new()),
    ]
}

/// Ordered list of registered writers, in render order.
#[derive(Debug, Clone, Default)]
pub struct EntryWriters {
    items: Vec<RegisteredWriter>,
}

impl From<Vec<RegisteredWriter>> for EntryWriters {
    fn from(items: Vec<RegisteredWriter>) -> Self { Self { items } }
}

impl EntryWriters {
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredWriter> { self.items.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Ids in render order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> { self.items.iter().map(|it| it.id.as_str()).collect() }

    pub fn append(&mut self, writers: impl IntoIterator<Item = RegisteredWriter>) {
        self.items.extend(writers);
    }

    /// Drops every writer whose id is in `ids`. Ids that aren't registered are ignored.
    pub fn remove(&mut self, ids: &[EntryWriterId]) {
        let ids: HashSet<&EntryWriterId> = ids.iter().collect();
        self.items.retain(|it| !ids.contains(&it.id));
    }

    /// Swaps the first writer with `id` for `writer`, or appends `writer` if there is
    /// no such writer.
    pub fn replace(&mut self, id: &EntryWriterId, writer: RegisteredWriter) {
        match self.position(id) {
            Some(index) => self.items[index] = writer,
            None => self.items.push(writer),
        }
    }

    /// Inserts `writers` right before the writer with `id`, or appends them if there is
    /// no such writer.
    pub fn insert_before(
        &mut self,
        id: &EntryWriterId,
        writers: impl IntoIterator<Item = RegisteredWriter>,
    ) {
        let index = self.position(id).unwrap_or(self.items.len());
        self.insert_at(index, writers);
    }

    /// Inserts `writers` right after the writer with `id`, or appends them if there is
    /// no such writer.
    pub fn insert_after(
        &mut self,
        id: &EntryWriterId,
        writers: impl IntoIterator<Item = RegisteredWriter>,
    ) {
        let index = self.position(id).map_or(self.items.len(), |it| it + 1);
        self.insert_at(index, writers);
    }

    fn insert_at(&mut self, index: usize, writers: impl IntoIterator<Item = RegisteredWriter>) {
        let tail = self.items.split_off(index);
        self.items.extend(writers);
        self.items.extend(tail);
    }

    fn position(&self, id: &EntryWriterId) -> Option<usize> {
        self.items.iter().position(|it| &it.id == id)
    }
}
