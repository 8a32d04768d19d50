// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing_core::LevelFilter;

/// Severity of a [`crate::LogRecord`], ordered from least to most severe.
///
/// Displays upper case, which is also how it is rendered by [`crate::new_level_writer`] and
/// serialized in JSON lines.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        if level == tracing::Level::ERROR {
            Level::Error
        } else if level == tracing::Level::WARN {
            Level::Warn
        } else if level == tracing::Level::INFO {
            Level::Info
        } else if level == tracing::Level::DEBUG {
            Level::Debug
        } else {
            Level::Trace
        }
    }
}

impl From<&tracing::Level> for Level {
    fn from(level: &tracing::Level) -> Self { Level::from(*level) }
}

/// The most verbose filter that still lets `level` through.
impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LevelFilter::TRACE,
            Level::Debug => LevelFilter::DEBUG,
            Level::Info => LevelFilter::INFO,
            Level::Warn => LevelFilter::WARN,
            Level::Error => LevelFilter::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test]
    fn test_levels_are_ordered_by_severity() {
        let levels: Vec<Level> = Level::iter().collect();
        let mut sorted = levels.clone();
        sorted.sort();
        assert_eq!(levels, sorted);
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Warn < Level::Error);
    }

    #[test_case(Level::Trace, "TRACE")]
    #[test_case(Level::Debug, "DEBUG")]
    #[test_case(Level::Info, "INFO")]
    #[test_case(Level::Warn, "WARN")]
    #[test_case(Level::Error, "ERROR")]
    fn test_display_and_parse(level: Level, text: &str) {
        assert_eq!(level.to_string(), text);
        assert_eq!(Level::from_str(text).unwrap(), level);
        assert_eq!(Level::from_str(&text.to_lowercase()).unwrap(), level);
    }

    #[test_case(tracing::Level::TRACE, Level::Trace)]
    #[test_case(tracing::Level::DEBUG, Level::Debug)]
    #[test_case(tracing::Level::INFO, Level::Info)]
    #[test_case(tracing::Level::WARN, Level::Warn)]
    #[test_case(tracing::Level::ERROR, Level::Error)]
    fn test_from_tracing_level(input: tracing::Level, expected: Level) {
        assert_eq!(Level::from(input), expected);
    }

    #[test]
    fn test_into_level_filter() {
        assert_eq!(LevelFilter::from(Level::Warn), LevelFilter::WARN);
        assert!(LevelFilter::from(Level::Trace) > LevelFilter::from(Level::Error));
    }

    #[test]
    fn test_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"WARN\"");
    }
}
