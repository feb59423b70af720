//! Where the parser reports what it is doing.
//!
//! Reporting is fire-and-forget: nothing a [`Sink`] does can change a parse
//! result. Payloads are built lazily, so [`NoopSink`] costs nothing.

use std::fmt;

/// Labelled values describing one event.
pub type Fields = Vec<(&'static str, String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

pub trait Sink {
    /// `unit` is the fully qualified name of the operation reporting the
    /// event, e.g. `cmdspec::parser::parse_option`.
    fn event(&self, level: Level, unit: &str, fields: &dyn Fn() -> Fields);

    fn debug(&self, unit: &str, fields: &dyn Fn() -> Fields) {
        self.event(Level::Debug, unit, fields)
    }

    fn info(&self, unit: &str, fields: &dyn Fn() -> Fields) {
        self.event(Level::Info, unit, fields)
    }

    fn warn(&self, unit: &str, fields: &dyn Fn() -> Fields) {
        self.event(Level::Warn, unit, fields)
    }

    fn error(&self, unit: &str, fields: &dyn Fn() -> Fields) {
        self.event(Level::Error, unit, fields)
    }
}

/// Drops every event without evaluating its payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl Sink for NoopSink {
    fn event(&self, _level: Level, _unit: &str, _fields: &dyn Fn() -> Fields) {}
}

/// Forwards events to `tracing` under the `cmdspec` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn event(&self, level: Level, unit: &str, fields: &dyn Fn() -> Fields) {
        match level {
            Level::Debug => {
                if tracing::enabled!(target: "cmdspec", tracing::Level::DEBUG) {
                    tracing::debug!(target: "cmdspec", unit, "{}", Display(&fields()))
                }
            }
            Level::Info => {
                if tracing::enabled!(target: "cmdspec", tracing::Level::INFO) {
                    tracing::info!(target: "cmdspec", unit, "{}", Display(&fields()))
                }
            }
            Level::Warn => tracing::warn!(target: "cmdspec", unit, "{}", Display(&fields())),
            Level::Error => tracing::error!(target: "cmdspec", unit, "{}", Display(&fields())),
        }
    }
}

struct Display<'a>(&'a Fields);

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (label, value) in self.0 {
            write!(f, "{sep}{label}={value:?}")?;
            sep = " ";
        }
        Ok(())
    }
}
