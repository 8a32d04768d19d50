// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonWriter, EntryBuffer, EntryWriter, RecordData, full_function_valuer,
            has_call_site, trim_prefix_function_valuer};

/// `Function server::run`. The handler's package name is trimmed from the front of
/// the path unless [`FunctionWriter::with_short`] is turned off.
#[derive(Debug, Clone)]
pub struct FunctionWriter {
    common: CommonWriter,
}

impl Default for FunctionWriter {
    fn default() -> Self { Self::new() }
}

impl FunctionWriter {
    pub const KEY: &'static str = "Function";

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonWriter::new(trim_prefix_function_valuer)
                .with_static_key(Self::KEY)
                .with_condition(has_call_site),
        }
    }

    #[must_use]
    pub fn with_short(self, short: bool) -> Self {
        self.with_common(|it| {
            if short {
                it.with_value(trim_prefix_function_valuer)
            } else {
                it.with_value(full_function_valuer)
            }
        })
    }

    #[must_use]
    pub fn with_common(self, f: impl FnOnce(CommonWriter) -> CommonWriter) -> Self {
        Self {
            common: f(self.common),
        }
    }
}

impl EntryWriter for FunctionWriter {
    fn key_len(&self, data: &RecordData<'_>) -> usize { self.common.key_len(data) }

    fn write(&self, data: &RecordData<'_>, buffer: &mut EntryBuffer<'_>) {
        self.common.write(data, buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttrScope, CallSite, Level, LogRecord, display_width};
    use pretty_assertions::assert_eq;

    fn record() -> LogRecord {
        LogRecord::new(Level::Info, "msg").with_call_site(CallSite::new(
            "src/server.rs",
            42,
            "my_app::server::run",
        ))
    }

    #[test]
    fn test_short_and_long() {
        let record = record();
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope)
            .with_package_name("my_app")
            .with_key_field_width(8);

        for (writer, expected) in [
            (FunctionWriter::new(), "INFO\nFunction server::run"),
            (
                FunctionWriter::new().with_short(false),
                "INFO\nFunction my_app::server::run",
            ),
        ] {
            let mut bytes = b"INFO".to_vec();
            writer.write(&data, &mut EntryBuffer::new(&mut bytes));
            assert_eq!(String::from_utf8(bytes).unwrap(), expected);
        }
    }

    #[test]
    fn test_colored_key_width_matches_output() {
        let record = record();
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope).with_color(true);
        let writer = FunctionWriter::new();

        let key_len = writer.key_len(&data);
        assert_eq!(key_len, FunctionWriter::KEY.len());

        let mut bytes = vec![];
        writer.write(&data.with_key_field_width(key_len), &mut EntryBuffer::new(&mut bytes));
        let output = String::from_utf8(bytes).unwrap();
        let (key_portion, _) = output.split_once(' ').unwrap();
        assert_eq!(display_width(key_portion), key_len);
    }

    #[test]
    fn test_no_call_site() {
        let record = record();
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope).without_call_site();
        let writer = FunctionWriter::new();

        assert_eq!(writer.key_len(&data), 0);
        let mut bytes = b"INFO".to_vec();
        writer.write(&data, &mut EntryBuffer::new(&mut bytes));
        assert_eq!(bytes, b"INFO");
    }

    #[test]
    fn test_package_name_covering_the_whole_path_reports_no_width() {
        let record = LogRecord::new(Level::Info, "msg")
            .with_call_site(CallSite::new("src/lib.rs", 1, "my_app"));
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope).with_package_name("my_app");
        let writer = FunctionWriter::new();

        assert_eq!(writer.key_len(&data), 0);
        let mut bytes = b"INFO".to_vec();
        writer.write(&data, &mut EntryBuffer::new(&mut bytes));
        assert_eq!(bytes, b"INFO");
    }
}
