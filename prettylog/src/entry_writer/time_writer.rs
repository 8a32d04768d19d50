// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonWriter, EntryBuffer, EntryWriter, RecordData, custom_time_valuer,
            has_time, rfc3339_valuer, time_only_valuer};

/// `Time 15:04:05`. Records without a timestamp get no time line, and don't widen the
/// key column either.
#[derive(Debug, Clone)]
pub struct TimeWriter {
    common: CommonWriter,
}

impl Default for TimeWriter {
    fn default() -> Self { Self::new() }
}

impl TimeWriter {
    pub const KEY: &'static str = "Time";

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonWriter::new(time_only_valuer)
                .with_static_key(Self::KEY)
                .with_condition(has_time),
        }
    }

    #[must_use]
    pub fn with_time_only_format(self) -> Self {
        self.with_common(|it| it.with_value(time_only_valuer))
    }

    #[must_use]
    pub fn with_rfc3339_format(self) -> Self {
        self.with_common(|it| it.with_value(rfc3339_valuer))
    }

    /// Custom [`chrono::format::strftime`] layout, e.g. `"%Y-%m-%d %H:%M"`.
    #[must_use]
    pub fn with_time_format(self, layout: impl Into<String>) -> Self {
        let valuer = custom_time_valuer(layout);
        self.with_common(|it| it.with_valuer(valuer))
    }

    /// Adjust the underlying [`CommonWriter`], e.g. to change the key or stylers.
    #[must_use]
    pub fn with_common(self, f: impl FnOnce(CommonWriter) -> CommonWriter) -> Self {
        Self {
            common: f(self.common),
        }
    }
}

impl EntryWriter for TimeWriter {
    fn key_len(&self, data: &RecordData<'_>) -> usize { self.common.key_len(data) }

    fn write(&self, data: &RecordData<'_>, buffer: &mut EntryBuffer<'_>) {
        self.common.write(data, buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttrScope, Level, LogRecord};
    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;

    fn render(writer: &TimeWriter, record: &LogRecord, existing: &str) -> String {
        let scope = AttrScope::default();
        let data = RecordData::new(record, &scope);
        let data = data.with_key_field_width(writer.key_len(&data));
        let mut bytes = existing.as_bytes().to_vec();
        writer.write(&data, &mut EntryBuffer::new(&mut bytes));
        String::from_utf8(bytes).unwrap()
    }

    fn record_with_time() -> LogRecord {
        let time = Local.with_ymd_and_hms(2025, 3, 14, 9, 5, 7).unwrap();
        LogRecord::new(Level::Info, "msg").with_time(time)
    }

    #[test]
    fn test_default_is_time_only() {
        assert_eq!(
            render(&TimeWriter::new(), &record_with_time(), "INFO"),
            "INFO\nTime 09:05:07"
        );
    }

    #[test]
    fn test_formats() {
        let record = record_with_time();
        assert!(
            render(&TimeWriter::new().with_rfc3339_format(), &record, "")
                .starts_with("Time 2025-03-14T09:05:07")
        );
        assert_eq!(
            render(&TimeWriter::new().with_time_format("%d/%m"), &record, ""),
            "Time 14/03"
        );
        assert_eq!(
            render(
                &TimeWriter::new().with_rfc3339_format().with_time_only_format(),
                &record,
                ""
            ),
            "Time 09:05:07"
        );
    }

    #[test]
    fn test_no_time_means_no_width_and_no_output() {
        let record = LogRecord::new(Level::Info, "msg");
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope);

        assert_eq!(TimeWriter::new().key_len(&data), 0);
        assert_eq!(render(&TimeWriter::new(), &record, "INFO"), "INFO");
    }

    #[test]
    fn test_custom_key() {
        let writer = TimeWriter::new().with_common(|it| it.with_static_key("At"));
        assert_eq!(render(&writer, &record_with_time(), ""), "At 09:05:07");
    }
}
