use std::io::Write;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_line(ts: &str, level: Level, target: &str, msg: &str) -> String {
    format!("[{}] {:<5} {}: {}", ts, level, target, msg)
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(&timestamp(), record.level(), record.target(), &record.args().to_string());
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// `prefix: message`, the line logged for a failed run.
pub fn error_line(prefix: &str, e: &dyn std::error::Error) -> String {
    format!("{}: {}", prefix, e)
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log::error!("{}", error_line(prefix, e));
}

/// Install the stderr logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
