use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

enum LogSink {
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    min_level: LogLevel,
    sink: LogSink,
    write_failed: AtomicBool,
}

impl Logger {
    fn new(prefix: Option<String>, min_level: LogLevel, sink: LogSink) -> Self {
        Self {
            prefix,
            min_level,
            sink,
            write_failed: AtomicBool::new(false),
        }
    }

    fn format_line(&self, level: LogLevel, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let level = match level {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
        };
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}][{}:{}] {}", timestamp, level, prefix, file_name, line, message)
        } else {
            format!("[{}][{}][{}:{}] {}", timestamp, level, file_name, line, message)
        }
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if level < self.min_level {
            return;
        }

        let formatted = self.format_line(level, file, line, message);
        match &self.sink {
            LogSink::Stderr => eprintln!("{}", formatted),
            LogSink::File(file) => {
                let mut file = file.lock().unwrap_or_else(PoisonError::into_inner);
                if let Err(err) = writeln!(file, "{}", formatted) {
                    self.report_write_failure(&err);
                }
            }
        }
    }

    /// Only the first failure is reported so a broken sink cannot flood stderr.
    fn report_write_failure(&self, err: &std::io::Error) -> bool {
        if self.write_failed.swap(true, Ordering::Relaxed) {
            return false;
        }
        eprintln!("Failed to write to log file: {}", err);
        true
    }
}

/// Logs to stderr. Later calls are ignored once a logger is installed.
pub fn init_logger(prefix: Option<String>, min_level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, min_level, LogSink::Stderr));
}

/// Appends log lines to `path`, creating it if needed.
pub fn init_file_logger(
    prefix: Option<String>,
    min_level: LogLevel,
    path: &Path,
) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    LOGGER.get_or_init(|| Logger::new(prefix, min_level, LogSink::File(Mutex::new(file))));
    Ok(())
}

/// No-op until a logger is installed, so library code can log freely.
pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Debug, file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Client".to_string()), LogLevel::Info, LogSink::Stderr);

        let line = logger.format_line(LogLevel::Info, "src/tictactoe/board.rs", 12, "hello");

        assert!(line.contains("[INFO][Client][board.rs:12] hello"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, LogLevel::Debug, LogSink::Stderr);

        let line = logger.format_line(LogLevel::Debug, "C:\\src\\main.rs", 3, "engine");

        assert!(line.ends_with("[DEBUG][main.rs:3] engine"));
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    fn temp_log_path() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_log_{}.log", random_number));
        path
    }

    #[test]
    fn test_file_sink_reports_first_write_failure_only() {
        let path = temp_log_path();
        std::fs::write(&path, "").unwrap();
        let read_only = File::open(&path).unwrap();
        let logger = Logger::new(None, LogLevel::Info, LogSink::File(Mutex::new(read_only)));

        logger.log(LogLevel::Info, file!(), line!(), "lost");

        assert!(logger.write_failed.load(Ordering::Relaxed));
        assert!(!logger.report_write_failure(&std::io::Error::other("again")));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_file_sink_keeps_writing_after_poisoned_lock() {
        let path = temp_log_path();
        let file = OpenOptions::new().create(true).append(true).open(&path).unwrap();
        let logger = Logger::new(None, LogLevel::Info, LogSink::File(Mutex::new(file)));

        if let LogSink::File(file) = &logger.sink {
            let _ = std::panic::catch_unwind(|| {
                let _guard = file.lock().unwrap();
                panic!("poison the sink");
            });
            assert!(file.is_poisoned());
        }
        logger.log(LogLevel::Info, file!(), line!(), "still here");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("still here"));
        assert!(!logger.write_failed.load(Ordering::Relaxed));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_log_without_logger_is_silent() {
        log(LogLevel::Info, file!(), line!(), "nobody is listening");
    }
}
