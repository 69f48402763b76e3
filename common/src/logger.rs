use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: AtomicBool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self {
            prefix,
            verbose: AtomicBool::new(verbose),
        }
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    fn format_line(&self, tag: Option<&str>, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let mut line = format!("[{}]", timestamp);
        if let Some(ref prefix) = self.prefix {
            line.push_str(&format!("[{}]", prefix));
        }
        if let Some(tag) = tag {
            line.push_str(&format!("[{}]", tag));
        }
        line.push(' ');
        line.push_str(message);
        line
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.format_line(None, message));
    }

    /// Per-tick chatter; only printed when the logger was initialized as verbose.
    pub fn debug(&self, message: &str) {
        if self.is_verbose() {
            println!("{}", self.format_line(Some("debug"), message));
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// Verbosity can be raised after init, once the config has been read.
pub fn set_verbose(verbose: bool) {
    if let Some(logger) = LOGGER.get() {
        logger.set_verbose(verbose);
    }
}

pub fn log(message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(message),
        None => eprintln!("{}", message),
    }
}

pub fn debug_log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::debug_log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_contains_prefix_and_message() {
        let logger = Logger::new(Some("Snake".to_string()), false);
        let line = logger.format_line(None, "game over");
        assert!(line.contains("[Snake]"));
        assert!(line.ends_with(" game over"));
    }

    #[test]
    fn test_verbosity_can_change_after_creation() {
        let logger = Logger::new(None, false);
        assert!(!logger.is_verbose());
        logger.set_verbose(true);
        assert!(logger.is_verbose());
    }

    #[test]
    fn test_format_line_without_prefix_has_only_timestamp() {
        let logger = Logger::new(None, true);
        let line = logger.format_line(Some("debug"), "tick");
        assert!(line.starts_with('['));
        assert!(line.contains("[debug] tick"));
        assert_eq!(line.matches('[').count(), 2);
    }
}
