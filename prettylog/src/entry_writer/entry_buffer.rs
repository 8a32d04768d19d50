// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt, io};

/// The shared, append only byte buffer that entry writers render into.
///
/// It borrows the pooled scratch buffer for the duration of one render. There is no
/// way to truncate, reset, or rewrite it: writers can only append, and can read what
/// was written before them.
#[derive(Debug)]
pub struct EntryBuffer<'a> {
    bytes: &'a mut Vec<u8>,
}

impl<'a> EntryBuffer<'a> {
    pub fn new(bytes: &'a mut Vec<u8>) -> Self { Self { bytes } }

    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { self.bytes }

    pub fn push_str(&mut self, text: &str) { self.bytes.extend_from_slice(text.as_bytes()); }

    pub fn push_byte(&mut self, byte: u8) { self.bytes.push(byte); }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) { self.bytes.extend_from_slice(bytes); }

    pub fn push_spaces(&mut self, count: usize) {
        self.bytes.resize(self.bytes.len() + count, b' ');
    }
}

impl io::Write for EntryBuffer<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl fmt::Write for EntryBuffer<'_> {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.push_str(text);
        Ok(())
    }
}
