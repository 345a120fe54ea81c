//! `tracing` output routed to the browser console.
//!
//! The fmt subscriber formats each event into a [`ConsoleWriter`], which
//! hands the finished line to the matching `console.*` method when dropped.
//! Native builds write to stderr instead.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing::{Level, Metadata, warn};
use tracing_subscriber::fmt::MakeWriter;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

use crate::error::{PortfolioError, Result};

/// Parses a level name such as `"info"` or `"DEBUG"`.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| PortfolioError::InvalidLogLevel(level.to_owned()))
}

/// Level to install for `level`. Unparseable names fall back to `INFO`,
/// returning the rejection so it can be logged once a subscriber exists.
pub fn resolve_level(level: &str) -> (LevelFilter, Option<PortfolioError>) {
    match parse_level(level) {
        Ok(filter) => (filter, None),
        Err(err) => (LevelFilter::INFO, Some(err)),
    }
}

/// Installs the global subscriber. Fails on a second call.
pub fn init(level: &str) -> Result<()> {
    let (max_level, rejected) = resolve_level(level);
    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(max_level)
        .with_target(false)
        // wasm32-unknown-unknown has no system clock
        .without_time()
        .try_init()
        .map_err(|err| PortfolioError::Logging(err.to_string()))?;
    if let Some(err) = rejected {
        warn!("{err}, logging at info");
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        emit(self.level, line.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        Level::DEBUG => web_sys::console::log_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

// Native builds (tests) have no console to call into.
#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    use std::io::Write as _;
    let _ = writeln!(io::stderr(), "{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!(parse_level("info").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level(" DEBUG ").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = parse_level("chatty").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidLogLevel(ref l) if l == "chatty"));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let (filter, rejected) = resolve_level("verbose");
        assert_eq!(filter, LevelFilter::INFO);
        assert!(matches!(rejected, Some(PortfolioError::InvalidLogLevel(ref l)) if l == "verbose"));

        let (filter, rejected) = resolve_level("warn");
        assert_eq!(filter, LevelFilter::WARN);
        assert!(rejected.is_none());
    }

    // Single test: the subscriber is process-global.
    #[test]
    fn init_survives_bad_level_and_rejects_second_call() {
        init("verbose").unwrap();
        assert_eq!(LevelFilter::current(), LevelFilter::INFO);

        let err = init("info").unwrap_err();
        assert!(matches!(err, PortfolioError::Logging(_)));
    }
}
