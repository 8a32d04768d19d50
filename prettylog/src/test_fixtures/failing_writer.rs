// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Error, ErrorKind, Result, Write};

/// A sink whose every write fails with [`ErrorKind::BrokenPipe`], like stdout after the
/// reading end of a pipe went away.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        Err(Error::new(ErrorKind::BrokenPipe, "sink is closed"))
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
