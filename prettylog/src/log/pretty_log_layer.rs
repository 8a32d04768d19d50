// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plugs a [`Handler`] into [`tracing`].
//!
//! ```
//! use r3bl_prettylog::{Handler, PrettyLogLayer, StdoutMock};
//!
//! let mock = StdoutMock::new();
//! let handler = Handler::builder()
//!     .output(mock.clone())
//!     .color(false)
//!     .pretty(true)
//!     .writers(r3bl_prettylog::default_writers().into_iter().take(2))
//!     .build();
//!
//! let _guard = PrettyLogLayer::new(handler).install_thread_local();
//! tracing::warn!("disk almost full");
//!
//! assert_eq!(mock.get_copy_of_buffer_as_string(), "WARN disk almost full\n");
//! ```

use crate::{CallSite, Handler, Level, LogRecord, PrettyLogError, PrettyLogResult,
            VisitEventAndCollectFields};
use std::cell::Cell;
use tracing::{Event, Metadata, Subscriber, dispatcher::DefaultGuard};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::{Context, SubscriberExt}};

/// A [`Layer`] that renders every enabled [`Event`] with its [`Handler`].
///
/// Each event becomes a [`LogRecord`] stamped with the local time. Fields are collected
/// by [`VisitEventAndCollectFields`], the call site comes from the event metadata (file,
/// line, and module path as the function).
///
/// Events raised on a thread that is already rendering one (the crate's own
/// diagnostics, or a sink that logs) are dropped, so a record can never recurse into
/// the renderer.
///
/// Spans are not tracked. Use [`Handler::with_attrs`] and [`Handler::with_group`] for
/// context shared across events.
#[derive(Debug, Clone)]
pub struct PrettyLogLayer {
    handler: Handler,
}

impl PrettyLogLayer {
    #[must_use]
    pub fn new(handler: Handler) -> Self { Self { handler } }

    #[must_use]
    pub fn handler(&self) -> &Handler { &self.handler }

    /// Install as the default subscriber for the current thread, until the returned
    /// guard is dropped. Meant for tests and for scoping output to one thread.
    #[must_use]
    pub fn install_thread_local(self) -> DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self))
    }

    /// Install as the global default subscriber for the rest of the process.
    ///
    /// # Errors
    ///
    /// [`PrettyLogError::InstallGlobal`] if a global subscriber is already set.
    pub fn try_install_global(self) -> PrettyLogResult<()> {
        tracing::subscriber::set_global_default(tracing_subscriber::registry().with(self))
            .map_err(PrettyLogError::InstallGlobal)
    }
}

/// Converts an event into a record. The message is empty when the event has none.
#[must_use]
pub fn log_record_from_event(event: &Event<'_>) -> LogRecord {
    let metadata = event.metadata();

    let mut visitor = VisitEventAndCollectFields::default();
    event.record(&mut visitor);

    let record = LogRecord::new(
        Level::from(metadata.level()),
        visitor.message.unwrap_or_default(),
    )
    .with_now()
    .with_attrs(visitor.attrs);

    match call_site_from_metadata(metadata) {
        Some(call_site) => record.with_call_site(call_site),
        None => record,
    }
}

thread_local! {
    static IS_RENDERING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as rendering until dropped. `None` if it already is.
struct RenderingGuard;

impl RenderingGuard {
    fn try_enter() -> Option<Self> {
        if IS_RENDERING.with(Cell::get) {
            return None;
        }
        IS_RENDERING.with(|it| it.set(true));
        Some(Self)
    }
}

impl Drop for RenderingGuard {
    fn drop(&mut self) { IS_RENDERING.with(|it| it.set(false)); }
}

fn call_site_from_metadata(metadata: &Metadata<'_>) -> Option<CallSite> {
    let file = metadata.file()?;
    Some(CallSite::new(
        file,
        metadata.line().unwrap_or_default(),
        metadata.module_path().unwrap_or_default(),
    ))
}

impl<S: Subscriber> Layer<S> for PrettyLogLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.handler.enabled(Level::from(metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let Some(_guard) = RenderingGuard::try_enter() else {
            return;
        };
        // A lost record has nowhere else to be reported.
        let _lost = self.handler.handle(&log_record_from_event(event));
    }

    fn max_level_hint(&self) -> Option<LevelFilter> {
        Some(LevelFilter::from(self.handler.min_level()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntryWriterId, FailingWriter, PrettyJsonWriter, RegisteredWriter,
                StdoutMock, TimeWriter, new_level_writer, new_message_writer};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tracing::{debug, error, info, warn};

    fn handler(mock: &StdoutMock) -> Handler {
        Handler::builder()
            .output(mock.clone())
            .color(false)
            .pretty(true)
            .level(Level::Info)
            .writers([
                RegisteredWriter::new(EntryWriterId::LEVEL, new_level_writer()),
                RegisteredWriter::new(EntryWriterId::MESSAGE, new_message_writer()),
                RegisteredWriter::new(EntryWriterId::PRETTY_JSON, PrettyJsonWriter::new()),
            ])
            .build()
    }

    #[test]
    fn test_events_are_rendered_and_gated_by_level() {
        let mock = StdoutMock::new();
        let _guard = PrettyLogLayer::new(handler(&mock)).install_thread_local();

        debug!("hidden");
        info!(port = 8080, "server started");
        error!("boom");

        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "INFO server started\n{\n  \"port\": 8080\n}\nERROR boom\n"
        );
    }

    #[test]
    fn test_call_site_comes_from_metadata() {
        let mock = StdoutMock::new();
        let handler = Handler::builder()
            .output(mock.clone())
            .pretty(false)
            .build();
        let _guard = PrettyLogLayer::new(handler).install_thread_local();

        warn!(attempt = 2, "retrying");

        let line = mock.get_copy_of_buffer_as_string();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["msg"], "retrying");
        assert_eq!(value["attempt"], 2);
        assert_eq!(value["source"]["file"], file!());
        assert_eq!(value["source"]["function"], module_path!());
        assert!(value["time"].is_string());
    }

    #[test]
    fn test_record_has_local_time() {
        let mock = StdoutMock::new();
        let handler = Handler::builder()
            .output(mock.clone())
            .color(false)
            .pretty(true)
            .writers([RegisteredWriter::new(EntryWriterId::TIME, TimeWriter::new())])
            .build();
        let _guard = PrettyLogLayer::new(handler).install_thread_local();

        info!("tick");

        let output = mock.get_copy_of_buffer_as_string();
        assert!(output.starts_with("Time "), "{output}");
        assert_eq!(output.trim_end().len(), "Time 00:00:00".len());
    }

    #[test]
    fn test_sink_errors_do_not_reach_the_caller() {
        let handler = Handler::builder()
            .output(FailingWriter)
            .pretty(true)
            .build();
        let _guard = PrettyLogLayer::new(handler).install_thread_local();

        error!("nobody hears this");
    }

    #[test]
    fn test_max_level_hint() {
        let handler = Handler::builder()
            .output(StdoutMock::new())
            .level(Level::Warn)
            .build();
        let layer = PrettyLogLayer::new(handler);
        assert_eq!(layer.handler().min_level(), Level::Warn);
        assert_eq!(
            Layer::<tracing_subscriber::Registry>::max_level_hint(&layer),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_rendering_guard_is_not_reentrant() {
        let outer = RenderingGuard::try_enter();
        assert!(outer.is_some());
        assert!(RenderingGuard::try_enter().is_none());

        drop(outer);
        assert!(RenderingGuard::try_enter().is_some());
    }

    #[test]
    fn test_events_from_inside_a_render_are_dropped() {
        let mock = StdoutMock::new();
        let handler = Handler::builder()
            .output(mock.clone())
            .color(false)
            .pretty(true)
            .level(Level::Trace)
            .pool_size(64)
            .writers([
                RegisteredWriter::new(EntryWriterId::LEVEL, new_level_writer()),
                RegisteredWriter::new(EntryWriterId::MESSAGE, new_message_writer()),
            ])
            .build();
        let _guard = PrettyLogLayer::new(handler).install_thread_local();

        // The buffer outgrows the pool ceiling, so releasing it emits a trace event.
        let long = "x".repeat(500);
        info!("{long}");
        tracing::trace!("after");

        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            format!("INFO {long}\nTRACE after\n")
        );
    }
}
