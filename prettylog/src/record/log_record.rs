// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Level;
use chrono::{DateTime, Local};
use serde_json::Value;

/// A structured log event, as handed to [`crate::Handler::handle`].
///
/// Every field other than `level` and `message` is optional: a record without a
/// timestamp or call site renders without the matching fragments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub time: Option<DateTime<Local>>,
    pub call_site: Option<CallSite>,
    pub attrs: Vec<Attr>,
}

/// Where a [`LogRecord`] was emitted from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
    /// Fully qualified function (or module) path, e.g. `my_app::server::run`.
    pub function: String,
}

/// One key / value attribute. Groups are expressed as [`Value::Object`].
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for Attr {
    fn from((key, value): (K, V)) -> Self { Attr::new(key, value) }
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }
}

impl LogRecord {
    /// A record without a timestamp, call site, or attributes.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = Some(time);
        self
    }

    /// Stamp the record with the current local time.
    #[must_use]
    pub fn with_now(self) -> Self { self.with_time(Local::now()) }

    #[must_use]
    pub fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.push(Attr::new(key, value));
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }
}
