// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

/// The std (blocking) mutex. Renders are synchronous, so no async mutex is needed.
pub type StdMutex<T> = std::sync::Mutex<T>;

/// Type alias for a `Send`-able output sink (stdout, stderr, file, mock, etc).
pub type SendWriter = dyn std::io::Write + Send;

/// Type alias for a `Send`-able output sink wrapped in an `Arc<StdMutex>`. This already
/// has both the "write" and the "mutual exclusion" capability, so
/// [`crate::WriteLocker::from_shared`] uses its lock instead of adding another one.
pub type SafeWriter = Arc<StdMutex<SendWriter>>;
