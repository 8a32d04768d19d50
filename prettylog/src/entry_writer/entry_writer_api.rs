// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EntryBuffer, RecordData};

/// One pluggable fragment of a rendered record (level, message, time, call site,
/// attributes, ...).
///
/// A single instance is shared by every render on every thread, so implementations
/// must not keep per call mutable state. Everything they need comes in through
/// [`RecordData`].
///
/// # Contract
///
/// - [`EntryWriter::key_len`] is called first, on every registered writer, with
///   `data.key_field_width == 0`. It returns the visible column width of the key
///   exactly as [`EntryWriter::write`] will emit it for the same `data` (ANSI escapes
///   don't count, see [`crate::display_width`]). Writers without a key, or that will
///   not write anything for this record, return `0`.
/// - [`EntryWriter::write`] is then called with `data.key_field_width` set to the
///   maximum of all reported widths. It pads its key to that width so keyed lines of
///   one record line up. It may look at what earlier writers produced via
///   [`EntryBuffer::len`] and [`EntryBuffer::as_bytes`], but can only append. Writing
///   nothing is how a writer says "nothing to show".
pub trait EntryWriter: Send + Sync {
    fn key_len(&self, data: &RecordData<'_>) -> usize;

    fn write(&self, data: &RecordData<'_>, buffer: &mut EntryBuffer<'_>);
}

/// Reports no key and writes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedEntryWriter;

impl EntryWriter for UnimplementedEntryWriter {
    fn key_len(&self, _data: &RecordData<'_>) -> usize { 0 }

    fn write(&self, _data: &RecordData<'_>, _buffer: &mut EntryBuffer<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttrScope, Level, LogRecord};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unimplemented_writer_is_inert() {
        let record = LogRecord::new(Level::Info, "hello");
        let scope = AttrScope::default();
        let data = RecordData::new(&record, &scope).with_color(true);
        let mut bytes = vec![];
        let mut buffer = EntryBuffer::new(&mut bytes);

        let writer = UnimplementedEntryWriter;
        assert_eq!(writer.key_len(&data), 0);
        writer.write(&data, &mut buffer);
        assert!(buffer.is_empty());
    }
}
