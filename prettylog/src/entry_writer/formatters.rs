// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Valuers turn a [`RecordData`] into the plain (unstyled) text of a key or a value.
//! Prefix functions pick the separator written before a fragment.

use crate::{EntryBuffer, RecordData};
use chrono::SecondsFormat;
use std::{fmt::Write as _, sync::Arc};

/// Shared, thread safe valuer.
pub type Valuer = Arc<dyn Fn(&RecordData<'_>) -> String + Send + Sync>;

/// Picks the separator to write before a fragment, given the buffer so far and the
/// fragment's unstyled key.
pub type PrefixFn = fn(&EntryBuffer<'_>, &str) -> &'static str;

/// Gates a fragment. When it returns `false` the fragment reports no key and writes
/// nothing.
pub type Condition = fn(&RecordData<'_>) -> bool;

pub const TIME_ONLY_FORMAT: &str = "%H:%M:%S";

/// - Nothing written yet: no separator.
/// - Keyed fragment: start a new line.
/// - Otherwise continue the current line after a single space.
#[must_use]
pub fn default_prefix(buffer: &EntryBuffer<'_>, key: &str) -> &'static str {
    if buffer.is_empty() {
        ""
    } else if !key.is_empty() {
        "\n"
    } else {
        " "
    }
}

#[must_use]
pub fn always(_data: &RecordData<'_>) -> bool { true }

#[must_use]
pub fn has_time(data: &RecordData<'_>) -> bool { data.record.time.is_some() }

#[must_use]
pub fn has_call_site(data: &RecordData<'_>) -> bool { data.call_site.is_some() }

/// A valuer that ignores the record.
pub fn static_valuer(text: impl Into<String>) -> Valuer {
    let text = text.into();
    Arc::new(move |_: &RecordData<'_>| text.clone())
}

#[must_use]
pub fn level_valuer(data: &RecordData<'_>) -> String { data.record.level.to_string() }

#[must_use]
pub fn message_valuer(data: &RecordData<'_>) -> String { data.record.message.clone() }

/// `15:04:05`.
#[must_use]
pub fn time_only_valuer(data: &RecordData<'_>) -> String {
    data.record
        .time
        .map(|time| time.format(TIME_ONLY_FORMAT).to_string())
        .unwrap_or_default()
}

/// `2006-01-02T15:04:05+07:00`, `Z` for UTC.
#[must_use]
pub fn rfc3339_valuer(data: &RecordData<'_>) -> String {
    data.record
        .time
        .map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

/// Formats the timestamp with a [`chrono::format::strftime`] layout. A malformed
/// layout falls back to RFC 3339 instead of panicking.
pub fn custom_time_valuer(layout: impl Into<String>) -> Valuer {
    let layout = layout.into();
    Arc::new(move |data: &RecordData<'_>| {
        let Some(time) = data.record.time else {
            return String::new();
        };
        let mut acc = String::new();
        match write!(acc, "{}", time.format(&layout)) {
            Ok(()) => acc,
            Err(_) => time.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    })
}

/// Function path with [`RecordData::package_name`] (and the `::` after it) trimmed.
#[must_use]
pub fn trim_prefix_function_valuer(data: &RecordData<'_>) -> String {
    let Some(call_site) = data.call_site else {
        return String::new();
    };
    let function = call_site.function.as_str();
    if data.package_name.is_empty() {
        return function.to_string();
    }
    function
        .strip_prefix(data.package_name)
        .map_or(function, |rest| rest.trim_start_matches("::"))
        .to_string()
}

#[must_use]
pub fn full_function_valuer(data: &RecordData<'_>) -> String {
    data.call_site
        .map(|call_site| call_site.function.clone())
        .unwrap_or_default()
}

/// `file:line`, with `base_path` (and the `/` after it) trimmed when the file lives
/// under it.
pub fn short_file_line_valuer(base_path: impl Into<String>) -> Valuer {
    let base_path = base_path.into();
    Arc::new(move |data: &RecordData<'_>| {
        let Some(call_site) = data.call_site else {
            return String::new();
        };
        let file = call_site.file.as_str();
        let file = match file.strip_prefix(base_path.as_str()) {
            Some(rest) if !base_path.is_empty() => rest.trim_start_matches('/'),
            _ => file,
        };
        format!("{file}:{}", call_site.line)
    })
}

/// `/full/path/to/file:line`.
#[must_use]
pub fn long_file_line_valuer(data: &RecordData<'_>) -> String {
    data.call_site
        .map(|call_site| format!("{}:{}", call_site.file, call_site.line))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttrScope, CallSite, Level, LogRecord};
    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn record_at_noon() -> LogRecord {
        let time = Local.with_ymd_and_hms(2025, 3, 14, 12, 34, 56).unwrap();
        LogRecord::new(Level::Info, "msg").with_time(time)
    }

    fn record_with_call_site(file: &str, function: &str) -> LogRecord {
        LogRecord::new(Level::Info, "msg").with_call_site(CallSite::new(file, 42, function))
    }

    #[test]
    fn test_default_prefix() {
        let mut bytes = vec![];
        let mut buffer = EntryBuffer::new(&mut bytes);
        assert_eq!(default_prefix(&buffer, "Time"), "");
        assert_eq!(default_prefix(&buffer, ""), "");

        buffer.push_str("INFO");
        assert_eq!(default_prefix(&buffer, "Time"), "\n");
        assert_eq!(default_prefix(&buffer, ""), " ");
    }

    #[test]
    fn test_time_valuers() {
        let record = record_at_noon();
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope);

        assert_eq!(time_only_valuer(&data), "12:34:56");
        assert!(rfc3339_valuer(&data).starts_with("2025-03-14T12:34:56"));
        assert_eq!(custom_time_valuer("%Y/%m/%d")(&data), "2025/03/14");
    }

    #[test]
    fn test_malformed_custom_layout_falls_back() {
        let record = record_at_noon();
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope);

        assert_eq!(custom_time_valuer("%Q")(&data), rfc3339_valuer(&data));
    }

    #[test]
    fn test_time_valuers_without_time_are_empty() {
        let record = LogRecord::new(Level::Info, "msg");
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope);

        assert_eq!(time_only_valuer(&data), "");
        assert_eq!(rfc3339_valuer(&data), "");
        assert_eq!(custom_time_valuer("%Y")(&data), "");
        assert!(!has_time(&data));
    }

    #[test_case("", "my_app::server::run"; "no package name")]
    #[test_case("my_app", "server::run"; "package trimmed")]
    #[test_case("other", "my_app::server::run"; "foreign package")]
    fn test_trim_prefix_function_valuer(package_name: &str, expected: &str) {
        let record = record_with_call_site("src/server.rs", "my_app::server::run");
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope).with_package_name(package_name);

        assert_eq!(trim_prefix_function_valuer(&data), expected);
        assert_eq!(full_function_valuer(&data), "my_app::server::run");
    }

    #[test_case("/home/me/app", "/home/me/app/src/main.rs", "src/main.rs:42"; "under base")]
    #[test_case("/home/me/app", "/opt/lib/src/lib.rs", "/opt/lib/src/lib.rs:42"; "outside base")]
    #[test_case("", "src/main.rs", "src/main.rs:42"; "no base")]
    fn test_short_file_line_valuer(base_path: &str, file: &str, expected: &str) {
        let record = record_with_call_site(file, "app::main");
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope);

        assert_eq!(short_file_line_valuer(base_path)(&data), expected);
        assert_eq!(long_file_line_valuer(&data), format!("{file}:42"));
    }

    #[test]
    fn test_call_site_valuers_without_call_site_are_empty() {
        let record = record_with_call_site("src/main.rs", "app::main");
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope).without_call_site();

        assert!(!has_call_site(&data));
        assert_eq!(trim_prefix_function_valuer(&data), "");
        assert_eq!(full_function_valuer(&data), "");
        assert_eq!(short_file_line_valuer("")(&data), "");
        assert_eq!(long_file_line_valuer(&data), "");
    }
}
