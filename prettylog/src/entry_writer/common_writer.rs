// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Condition, EntryBuffer, EntryWriter, PrefixFn, RecordData, Styler, Valuer,
            always, bold_colored_styler, default_prefix, display_width, plain_styler,
            static_valuer};
use std::{fmt::{Debug, Formatter},
          sync::Arc};

/// The reference [`EntryWriter`], assembled from independently replaceable functions:
///
/// | part         | default                     |
/// | ------------ | --------------------------- |
/// | key          | `""` (no key)               |
/// | value        | given to [`Self::new`]      |
/// | prefix       | [`default_prefix`]          |
/// | key styler   | [`bold_colored_styler`]     |
/// | value styler | [`plain_styler`]            |
/// | condition    | [`always`]                  |
///
/// Output is `prefix key <padding> value` for a keyed writer and `prefix value` for a
/// keyless one. Stylers only run when [`RecordData::color`] is set. An empty value
/// writes nothing at all, not even the prefix.
///
/// ```
/// use r3bl_prettylog::{AttrScope, CommonWriter, EntryBuffer, EntryWriter, Level,
///                      LogRecord, RecordData, message_valuer};
///
/// let writer = CommonWriter::new(message_valuer).with_static_key("Msg");
/// let record = LogRecord::new(Level::Info, "hi");
/// let scope = AttrScope::default();
/// let data = RecordData::new(&record, &scope).with_key_field_width(5);
///
/// let mut bytes = vec![];
/// writer.write(&data, &mut EntryBuffer::new(&mut bytes));
/// assert_eq!(bytes, b"Msg   hi");
/// ```
#[derive(Clone)]
pub struct CommonWriter {
    key: Valuer,
    value: Valuer,
    prefix: PrefixFn,
    key_styler: Styler,
    value_styler: Styler,
    condition: Condition,
}

impl Debug for CommonWriter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommonWriter").finish_non_exhaustive()
    }
}

impl CommonWriter {
    pub fn new(value: impl Fn(&RecordData<'_>) -> String + Send + Sync + 'static) -> Self {
        Self {
            key: static_valuer(""),
            value: Arc::new(value),
            prefix: default_prefix,
            key_styler: Arc::new(bold_colored_styler),
            value_styler: Arc::new(plain_styler),
            condition: always,
        }
    }

    #[must_use]
    pub fn with_static_key(self, key: impl Into<String>) -> Self {
        Self {
            key: static_valuer(key),
            ..self
        }
    }

    /// Key computed per record.
    #[must_use]
    pub fn with_key(
        self,
        key: impl Fn(&RecordData<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: Arc::new(key),
            ..self
        }
    }

    #[must_use]
    pub fn with_value(
        self,
        value: impl Fn(&RecordData<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            value: Arc::new(value),
            ..self
        }
    }

    #[must_use]
    pub fn with_valuer(self, value: Valuer) -> Self { Self { value, ..self } }

    #[must_use]
    pub fn with_prefix(self, prefix: PrefixFn) -> Self { Self { prefix, ..self } }

    #[must_use]
    pub fn with_key_styler(
        self,
        styler: impl Fn(&RecordData<'_>, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key_styler: Arc::new(styler),
            ..self
        }
    }

    #[must_use]
    pub fn with_value_styler(
        self,
        styler: impl Fn(&RecordData<'_>, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            value_styler: Arc::new(styler),
            ..self
        }
    }

    #[must_use]
    pub fn with_condition(self, condition: Condition) -> Self {
        Self { condition, ..self }
    }

    /// The key exactly as [`EntryWriter::write`] emits it, or `None` for no key.
    /// Measuring and writing both go through here, so they can't disagree.
    fn rendered_key(&self, data: &RecordData<'_>) -> Option<String> {
        let key = (self.key)(data);
        if key.is_empty() {
            return None;
        }
        Some(if data.color {
            (self.key_styler)(data, &key)
        } else {
            key
        })
    }
}

impl EntryWriter for CommonWriter {
    fn key_len(&self, data: &RecordData<'_>) -> usize {
        if !(self.condition)(data) || (self.value)(data).is_empty() {
            return 0;
        }
        self.rendered_key(data)
            .map_or(0, |key| display_width(&key))
    }

    fn write(&self, data: &RecordData<'_>, buffer: &mut EntryBuffer<'_>) {
        if !(self.condition)(data) {
            return;
        }

        let value = (self.value)(data);
        if value.is_empty() {
            return;
        }

        let plain_key = (self.key)(data);
        buffer.push_str((self.prefix)(buffer, &plain_key));

        if let Some(key) = self.rendered_key(data) {
            let key_len = display_width(&key);
            buffer.push_str(&key);
            buffer.push_spaces(data.key_field_width.saturating_sub(key_len) + 1);
        }

        if data.color {
            buffer.push_str(&(self.value_styler)(data, &value));
        } else {
            buffer.push_str(&value);
        }
    }
}
