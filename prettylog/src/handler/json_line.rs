// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{PrettyLogError, PrettyLogResult, RecordData};
use chrono::SecondsFormat;
use serde_json::{Map, Value, json};

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MESSAGE_KEY: &str = "msg";
pub const SOURCE_KEY: &str = "source";

/// Appends one compact JSON object, terminated by `\n`, describing the record:
///
/// ```text
/// {"time":"2025-03-14T09:05:07.123+01:00","level":"INFO","msg":"hi","source":{..},"k":"v"}
/// ```
///
/// `time` is left out for records without a timestamp, and `source` when there is no
/// call site. Bound and record attributes follow. An attribute named like one of the
/// built in keys does not replace it.
///
/// # Errors
///
/// [`PrettyLogError::JsonSerialize`] if serialization fails. Nothing is appended then.
pub fn write_json_line(data: &RecordData<'_>, acc: &mut Vec<u8>) -> PrettyLogResult<()> {
    let record = data.record;
    let mut object = Map::new();

    if let Some(time) = record.time {
        object.insert(
            TIME_KEY.into(),
            Value::String(time.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        );
    }
    object.insert(LEVEL_KEY.into(), Value::String(record.level.to_string()));
    object.insert(MESSAGE_KEY.into(), Value::String(record.message.clone()));
    if let Some(call_site) = data.call_site {
        object.insert(
            SOURCE_KEY.into(),
            json!({
                "function": call_site.function,
                "file": call_site.file,
                "line": call_site.line,
            }),
        );
    }

    for (key, value) in data.scope.to_json_object(&record.attrs) {
        object.entry(key).or_insert(value);
    }

    let mut line = serde_json::to_vec(&Value::Object(object))
        .map_err(PrettyLogError::JsonSerialize)?;
    line.push(b'\n');
    acc.extend_from_slice(&line);
    Ok(())
}
