// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::StdMutex;
use std::{io::{Result, Write},
          sync::{Arc,
                 PoisonError,
                 atomic::{AtomicUsize, Ordering}}};
use strip_ansi_escapes::strip;

/// You can safely clone this struct, since it only contains [Arc]s. The inner `buffer`
/// will not be cloned, just the [Arc] will be cloned, so every clone sees the same
/// bytes.
///
/// Besides the bytes, it counts how many times [`Write::write`] was called, which is
/// how tests check that nothing reached the sink at all.
#[derive(Clone, Debug, Default)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<Vec<u8>>>,
    write_count: Arc<AtomicUsize>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.get_copy_of_buffer()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        String::from_utf8_lossy(&strip(self.get_copy_of_buffer())).into_owned()
    }

    /// Number of [`Write::write`] calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize { self.write_count.load(Ordering::Acquire) }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.write_count.fetch_add(1, Ordering::AcqRel);
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
