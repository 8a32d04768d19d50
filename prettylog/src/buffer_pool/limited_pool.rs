// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reusable byte buffers with a cap on how much idle memory the pool may hold.
//!
//! Every render borrows a buffer from a [`LimitedBufferPool`] and gives it back when it
//! is done. Without a cap, one record with a huge payload would grow a buffer that then
//! stays in the pool forever. The pool instead tracks the total capacity of its idle
//! buffers and drops any returned buffer that would push that total over the ceiling.
//!
//! ```text
//!  acquire()                         release(buf)
//!  ┌─────────────┐                   ┌──────────────────────────────────┐
//!  │ pop idle    │── some(buf) ──┐   │ clear buf (keep capacity)        │
//!  │ buffer      │               │   │ usage + cap <= ceiling ?         │
//!  └─────────────┘               │   │   yes: usage += cap, push idle   │
//!        │ none                  │   │   no:  drop buf                  │
//!        ▼                       ▼   └──────────────────────────────────┘
//!  fresh Vec::new()      usage -= cap
//! ```
//!
//! The bound only affects retention, never availability: [`LimitedBufferPool::acquire`]
//! always returns a buffer.

use crossbeam_queue::SegQueue;
use std::{ops::{Deref, DerefMut},
          sync::atomic::{AtomicUsize, Ordering}};

/// 16 MiB. Used when the pool is constructed with a ceiling of zero or less.
pub const DEFAULT_POOL_CEILING: usize = 16 * 1024 * 1024;

/// Thread safe pool of `Vec<u8>` buffers, bounded by the total capacity of the buffers it
/// keeps idle.
///
/// The free list is a lock free [`SegQueue`] and the tracked usage is an [`AtomicUsize`],
/// so [`acquire`](Self::acquire) and [`release`](Self::release) never take a lock.
///
/// Invariants:
/// - The sum of capacities of idle buffers never exceeds [`ceiling`](Self::ceiling).
/// - A buffer's capacity counts toward [`tracked_usage`](Self::tracked_usage) only while
///   it is idle in the pool.
#[derive(Debug)]
pub struct LimitedBufferPool {
    free_list: SegQueue<Vec<u8>>,
    ceiling: usize,
    tracked_usage: AtomicUsize,
}

impl Default for LimitedBufferPool {
    fn default() -> Self { Self::new(0) }
}

impl LimitedBufferPool {
    /// Create a pool that keeps at most `ceiling` bytes of idle buffer capacity. A
    /// `ceiling` of zero or less means [`DEFAULT_POOL_CEILING`].
    #[must_use]
    pub fn new(ceiling: isize) -> Self {
        let ceiling = usize::try_from(ceiling)
            .ok()
            .filter(|it| *it > 0)
            .unwrap_or(DEFAULT_POOL_CEILING);
        Self {
            free_list: SegQueue::new(),
            ceiling,
            tracked_usage: AtomicUsize::new(0),
        }
    }

    /// Returns an empty buffer, recycled if one is idle, freshly allocated otherwise.
    #[must_use]
    pub fn acquire(&self) -> Vec<u8> {
        match self.free_list.pop() {
            Some(buffer) => {
                self.tracked_usage
                    .fetch_sub(buffer.capacity(), Ordering::AcqRel);
                buffer
            }
            None => Vec::new(),
        }
    }

    /// Clears `buffer` (keeping its allocation) and keeps it for reuse if that doesn't
    /// push the idle capacity over the ceiling. Otherwise the buffer is dropped.
    ///
    /// The usage counter is reserved with a compare and swap loop before the buffer is
    /// pushed, so racing releases can't both squeeze in under the ceiling.
    pub fn release(&self, mut buffer: Vec<u8>) {
        buffer.clear();
        let capacity = buffer.capacity();
        let reserved =
            self.tracked_usage
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |usage| {
                    usage
                        .checked_add(capacity)
                        .filter(|next_usage| *next_usage <= self.ceiling)
                });
        match reserved {
            Ok(_) => self.free_list.push(buffer),
            Err(usage) => {
                tracing::trace!(
                    message = "Dropping buffer instead of pooling it",
                    capacity,
                    usage,
                    ceiling = self.ceiling
                );
            }
        }
    }

    /// Borrow a buffer that goes back to the pool when the returned guard is dropped,
    /// on every exit path.
    #[must_use]
    pub fn acquire_scoped(&self) -> PooledBuffer<'_> {
        PooledBuffer {
            buffer: self.acquire(),
            pool: self,
        }
    }

    #[must_use]
    pub fn ceiling(&self) -> usize { self.ceiling }

    /// Total capacity of the buffers currently idle in the pool.
    #[must_use]
    pub fn tracked_usage(&self) -> usize { self.tracked_usage.load(Ordering::Acquire) }

    /// Number of buffers currently idle in the pool.
    #[must_use]
    pub fn idle_count(&self) -> usize { self.free_list.len() }
}

/// RAII guard returned by [`LimitedBufferPool::acquire_scoped`]. Derefs to the
/// underlying `Vec<u8>`, and releases it back to the pool on drop.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    buffer: Vec<u8>,
    pool: &'a LimitedBufferPool,
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target { &self.buffer }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.buffer }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) { self.pool.release(std::mem::take(&mut self.buffer)); }
}
