// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SafeWriter, SendWriter, StdMutex};
use std::{fmt::{Debug, Formatter},
          io::{IsTerminal, Write},
          sync::{Arc, MutexGuard, PoisonError}};

/// An output sink paired with the mutex that serializes access to it. Cheap to clone,
/// clones share the same sink and the same lock.
///
/// Writing requires holding the lock: [`WriteLocker::lock`] returns a
/// [`WriteLockerGuard`] that implements [`Write`] by forwarding straight to the sink, and
/// unlocks when it is dropped. Holding one guard across several writes is how a whole
/// rendered record gets flushed without other threads interleaving their bytes.
///
/// ```
/// use r3bl_prettylog::{StdoutMock, WriteLocker};
/// use std::io::Write;
///
/// let mock = StdoutMock::new();
/// let locker = WriteLocker::new(mock.clone());
/// { // Start a new block scope, the lock is released at the end of it.
///     let mut guard = locker.lock();
///     guard.write_all(b"Hello, ").unwrap();
///     guard.write_all(b"world!\n").unwrap();
/// }
/// assert_eq!(mock.get_copy_of_buffer_as_string(), "Hello, world!\n");
/// ```
#[derive(Clone)]
pub struct WriteLocker {
    resource: SafeWriter,
    is_terminal: bool,
}

impl Debug for WriteLocker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteLocker")
            .field("resource", &Arc::as_ptr(&self.resource))
            .field("is_terminal", &self.is_terminal)
            .finish()
    }
}

impl WriteLocker {
    /// Wrap a plain writer with a fresh mutex. The writer is not assumed to be a
    /// terminal, use [`Self::with_terminal`] to override.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            resource: Arc::new(StdMutex::new(writer)),
            is_terminal: false,
        }
    }

    /// Use a sink that already comes with its own lock. No second mutex is added, and
    /// [`Self::inner`] returns the very same [`Arc`].
    #[must_use]
    pub fn from_shared(resource: SafeWriter) -> Self {
        Self {
            resource,
            is_terminal: false,
        }
    }

    #[must_use]
    pub fn new_stdout() -> Self {
        let stdout = std::io::stdout();
        let is_terminal = stdout.is_terminal();
        Self::new(stdout).with_terminal(is_terminal)
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        let stderr = std::io::stderr();
        let is_terminal = stderr.is_terminal();
        Self::new(stderr).with_terminal(is_terminal)
    }

    #[must_use]
    pub fn from_file(file: std::fs::File) -> Self {
        let is_terminal = file.is_terminal();
        Self::new(file).with_terminal(is_terminal)
    }

    /// Override the "is this an interactive terminal?" capability.
    #[must_use]
    pub fn with_terminal(mut self, is_terminal: bool) -> Self {
        self.is_terminal = is_terminal;
        self
    }

    /// Whether the sink is an interactive terminal. Resolved once, when the
    /// [`WriteLocker`] is created.
    #[must_use]
    pub fn is_terminal(&self) -> bool { self.is_terminal }

    /// The wrapped sink, for capability probing by other components.
    #[must_use]
    pub fn inner(&self) -> &SafeWriter { &self.resource }

    /// `true` if both share the same sink and lock.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.resource, &other.resource)
    }

    /// Blocks until the lock is acquired. The lock is released when the returned guard
    /// is dropped, on every exit path, including early returns with `?` and panics.
    ///
    /// A mutex poisoned by a panic in another thread is recovered, not propagated.
    #[must_use]
    pub fn lock(&self) -> WriteLockerGuard<'_> {
        WriteLockerGuard {
            guard: self.resource.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }
}

/// Holds the [`WriteLocker`] lock. Writes go directly to the underlying sink.
pub struct WriteLockerGuard<'a> {
    guard: MutexGuard<'a, SendWriter>,
}

impl Debug for WriteLockerGuard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("WriteLockerGuard")
    }
}

impl Write for WriteLockerGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.guard.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.guard.flush() }
}

/// Anything that can become a [`WriteLocker`]. Wrapping is idempotent: a
/// [`WriteLocker`] converts into itself (same sink, same lock), and any other
/// [`Write`] gets a fresh mutex.
pub trait IntoWriteLocker {
    fn into_write_locker(self) -> WriteLocker;
}

impl IntoWriteLocker for WriteLocker {
    fn into_write_locker(self) -> WriteLocker { self }
}

/// Same as [`WriteLocker::from_shared`]. `SafeWriter` can't go through
/// [`IntoWriteLocker`] directly, since that would overlap with the impl for any
/// [`Write`], so pass `WriteLocker::from(shared)` to the builder instead.
impl From<SafeWriter> for WriteLocker {
    fn from(resource: SafeWriter) -> Self { Self::from_shared(resource) }
}

impl<W: Write + Send + 'static> IntoWriteLocker for W {
    fn into_write_locker(self) -> WriteLocker { WriteLocker::new(self) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StdoutMock;
    use pretty_assertions::assert_eq;
    use std::thread;

    #[test]
    fn test_wrapping_a_write_locker_returns_the_same_instance() {
        let original = WriteLocker::new(StdoutMock::new());
        let wrapped = original.clone().into_write_locker();
        assert!(wrapped.ptr_eq(&original));
    }

    #[test]
    fn test_wrapping_a_plain_writer_creates_a_new_wrapper() {
        let mock = StdoutMock::new();
        let wrapped = mock.clone().into_write_locker();

        wrapped.lock().write_all(b"test data").unwrap();

        assert_eq!(mock.get_copy_of_buffer_as_string(), "test data");
        assert!(!wrapped.is_terminal());
    }

    #[test]
    fn test_from_shared_reuses_the_existing_lock() {
        let shared: SafeWriter = Arc::new(StdMutex::new(StdoutMock::new()));
        let locker = WriteLocker::from_shared(Arc::clone(&shared));
        assert!(Arc::ptr_eq(locker.inner(), &shared));

        let converted = WriteLocker::from(Arc::clone(&shared)).into_write_locker();
        assert!(Arc::ptr_eq(converted.inner(), &shared));
        assert!(converted.ptr_eq(&locker));
    }

    #[test]
    fn test_new_stdout_resolves_terminal_capability() {
        let locker = WriteLocker::new_stdout();
        assert_eq!(locker.is_terminal(), std::io::stdout().is_terminal());
        assert!(!locker.ptr_eq(&WriteLocker::new_stdout()));
    }

    #[test]
    fn test_from_file_writes_through_and_is_not_a_terminal() {
        let path = std::env::temp_dir()
            .join(format!("r3bl_prettylog_write_locker_{}.log", std::process::id()));
        let file = std::fs::File::create(&path).unwrap();

        let locker = WriteLocker::from_file(file);
        assert!(!locker.is_terminal());
        locker.lock().write_all(b"to file").unwrap();
        drop(locker);

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(contents, "to file");
    }

    #[test]
    fn test_write_reports_bytes_written() {
        let mock = StdoutMock::new();
        let locker = WriteLocker::new(mock.clone());

        let data = b"test data";
        let written = locker.lock().write(data).unwrap();

        assert_eq!(written, data.len());
        assert_eq!(mock.get_copy_of_buffer_as_string(), "test data");
    }

    #[test]
    fn test_with_terminal_overrides_capability() {
        let locker = WriteLocker::new(StdoutMock::new()).with_terminal(true);
        assert!(locker.is_terminal());
    }

    #[test]
    fn test_lock_recovers_from_poison() {
        let mock = StdoutMock::new();
        let locker = WriteLocker::new(mock.clone());

        let poisoner = locker.clone();
        let result = thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("poison the lock");
        })
        .join();
        assert!(result.is_err());

        locker.lock().write_all(b"still works").unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "still works");
    }

    #[test]
    fn test_lock_held_across_writes_is_not_interleaved() {
        const NUM_THREADS: usize = 10;
        const WRITES_PER_THREAD: usize = 100;

        let mock = StdoutMock::new();
        let locker = WriteLocker::new(mock.clone());

        thread::scope(|scope| {
            for thread_id in 0..NUM_THREADS {
                let locker = &locker;
                scope.spawn(move || {
                    for _ in 0..WRITES_PER_THREAD {
                        let mut guard = locker.lock();
                        guard.write_all(b"[").unwrap();
                        guard.write_all(thread_id.to_string().as_bytes()).unwrap();
                        guard.write_all(b"]").unwrap();
                    }
                });
            }
        });

        let output = mock.get_copy_of_buffer_as_string();
        let frames: Vec<&str> = output
            .split_terminator(']')
            .map(|it| it.strip_prefix('[').unwrap())
            .collect();

        assert_eq!(frames.len(), NUM_THREADS * WRITES_PER_THREAD);
        for frame in frames {
            let id: usize = frame.parse().unwrap();
            assert!(id < NUM_THREADS);
        }
    }
}
