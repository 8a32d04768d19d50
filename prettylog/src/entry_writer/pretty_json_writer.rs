// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColoredJsonFormatter, EntryBuffer, EntryWriter, JsonStyle, LimitedBufferPool,
            PrettyLogError, PrettyLogResult, RecordData};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};
use std::{fmt::{Debug, Formatter},
          sync::Arc};

/// Ceiling of the scratch pool used to serialize attributes.
pub const PRETTY_JSON_POOL_CEILING: isize = 16 * 1024;

const DEFAULT_INDENT: &str = "  ";

/// Keyless fragment that pretty prints the handler's bound attributes plus the
/// record's attributes as one JSON object, on its own lines:
///
/// ```text
///  INFO  request served
/// {
///   "method": "GET",
///   "status": 200
/// }
/// ```
///
/// Records without attributes get nothing. Tokens are colored with a [`JsonStyle`]
/// when color is enabled.
#[derive(Clone)]
pub struct PrettyJsonWriter {
    indent: String,
    style: JsonStyle,
    pool: Arc<LimitedBufferPool>,
}

impl Debug for PrettyJsonWriter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyJsonWriter")
            .field("indent", &self.indent)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl Default for PrettyJsonWriter {
    fn default() -> Self { Self::new() }
}

impl PrettyJsonWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            style: JsonStyle::terminal(),
            pool: Arc::new(LimitedBufferPool::new(PRETTY_JSON_POOL_CEILING)),
        }
    }

    #[must_use]
    pub fn with_indent(self, indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_style(self, style: JsonStyle) -> Self { Self { style, ..self } }

    fn serialize_into(
        &self,
        object: Map<String, Value>,
        color: bool,
        acc: &mut Vec<u8>,
    ) -> PrettyLogResult<()> {
        let value = Value::Object(object);
        let indent = self.indent.as_bytes();
        let result = if color {
            let formatter = ColoredJsonFormatter::new(indent, &self.style);
            let mut serializer = serde_json::Serializer::with_formatter(acc, formatter);
            value.serialize(&mut serializer)
        } else {
            let formatter = PrettyFormatter::with_indent(indent);
            let mut serializer = serde_json::Serializer::with_formatter(acc, formatter);
            value.serialize(&mut serializer)
        };
        result.map_err(PrettyLogError::JsonSerialize)
    }
}

impl EntryWriter for PrettyJsonWriter {
    fn key_len(&self, _data: &RecordData<'_>) -> usize { 0 }

    fn write(&self, data: &RecordData<'_>, buffer: &mut EntryBuffer<'_>) {
        if data.record.attrs.is_empty() && data.scope.has_no_attrs() {
            return;
        }

        let object = data.scope.to_json_object(&data.record.attrs);
        if object.is_empty() {
            return;
        }

        let mut scratch = self.pool.acquire_scoped();
        if let Err(error) = self.serialize_into(object, data.color, &mut scratch) {
            tracing::warn!(%error, "skipping attributes that could not be serialized");
            return;
        }

        if !buffer.is_empty() {
            buffer.push_byte(b'\n');
        }
        buffer.extend_from_slice(&scratch);
    }
}
