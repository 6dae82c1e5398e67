//! Stderr logging for the command-line tools.
//!
//! An extraction batch runs for minutes over tens of thousands of tiles,
//! so every line carries the seconds elapsed since the logger was
//! installed; that makes it easy to spot a folder of slow-decoding images
//! in the scroll-back.

use std::fmt::Arguments;
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

fn format_line(elapsed_secs: f64, level: Level, args: &Arguments) -> String {
    format!("{elapsed_secs:8.2}s {level:<5} {args}")
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            self.started.elapsed().as_secs_f64(),
            record.level(),
            record.args(),
        );
        let _ = writeln!(std::io::stderr(), "{line}");
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger with the provided level filter.
///
/// The first successful call wins; calling again is a no-op.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_elapsed_time_and_level() {
        let line = format_line(3.5, Level::Info, &format_args!("group #2 of 7"));
        assert_eq!(line, "    3.50s INFO  group #2 of 7");
    }

    #[test]
    fn level_column_stays_aligned() {
        let info = format_line(0.0, Level::Info, &format_args!("x"));
        let warn = format_line(0.0, Level::Warn, &format_args!("x"));
        let trace = format_line(0.0, Level::Trace, &format_args!("x"));
        assert_eq!(info.find('x'), warn.find('x'));
        assert_eq!(info.find('x'), trace.find('x'));
    }
}
