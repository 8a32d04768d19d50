// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Attr;
use serde_json::Value;
use std::fmt;
use tracing::field::{Field, Visit};

/// Name of the field `tracing` uses for the format string of `info!("...")`.
pub const MESSAGE_FIELD: &str = "message";

/// Collects the fields of a [`tracing::Event`]. The `message` field becomes the record
/// message, every other field becomes an [`Attr`], in the order it was declared.
///
/// Numbers and booleans keep their JSON type. Strings use [`fmt::Display`] so quotes and
/// new lines aren't escaped. Everything else falls back to [`fmt::Debug`].
#[derive(Debug, Default)]
pub struct VisitEventAndCollectFields {
    pub message: Option<String>,
    pub attrs: Vec<Attr>,
}

impl VisitEventAndCollectFields {
    fn push(&mut self, field: &Field, value: Value) {
        self.attrs.push(Attr::new(field.name(), value));
    }
}

impl Visit for VisitEventAndCollectFields {
    fn record_f64(&mut self, field: &Field, value: f64) { self.push(field, value.into()); }

    fn record_i64(&mut self, field: &Field, value: i64) { self.push(field, value.into()); }

    fn record_u64(&mut self, field: &Field, value: u64) { self.push(field, value.into()); }

    fn record_bool(&mut self, field: &Field, value: bool) { self.push(field, value.into()); }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == MESSAGE_FIELD {
            self.message = Some(value.to_string());
        } else {
            self.push(field, value.into());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let value = format!("{value:?}");
        if field.name() == MESSAGE_FIELD {
            self.message = Some(value);
        } else {
            self.push(field, value.into());
        }
    }
}
