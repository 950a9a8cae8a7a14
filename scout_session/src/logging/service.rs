//! Logging service and logger back ends

use super::codes::Code;
use super::config;
use super::events::{LogEvent, LogLevel};
use crate::config::runtime::LoggingPreferences;
use std::sync::{Arc, Mutex};

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with a minimum level filter
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service from the runtime logging preferences
    pub fn with_config() -> Self {
        let backend = LoggerBackend::from_preferences(&config::get_runtime_preferences());
        Self::new(backend.logger(), config::get_min_log_level())
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }

    pub fn log_error(&self, code: Code, message: &str) {
        self.log_event(LogEvent::error(code, message));
    }

    pub fn log_warning_with_code(&self, code: Code, message: &str) {
        self.log_event(LogEvent::warning_with_code(code, message));
    }

    pub fn log_success(&self, code: Code, message: &str) {
        self.log_event(LogEvent::success(code, message));
    }

    pub fn log_info(&self, message: &str) {
        self.log_event(LogEvent::info(message));
    }
}

/// Where events end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerBackend {
    /// The `log` facade, formatted by whatever the binary installed
    Facade,
    /// One JSON object per line on stderr
    Structured,
}

impl LoggerBackend {
    pub fn from_preferences(preferences: &LoggingPreferences) -> Self {
        if preferences.use_structured_logging {
            LoggerBackend::Structured
        } else {
            LoggerBackend::Facade
        }
    }

    pub fn logger(self) -> Arc<dyn Logger> {
        match self {
            LoggerBackend::Facade => Arc::new(FacadeLogger),
            LoggerBackend::Structured => Arc::new(StructuredLogger),
        }
    }
}

/// JSON-per-line logger for dashboard tooling. Stdout stays free for command output.
pub struct StructuredLogger;

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        let line = event.format_json().unwrap_or_else(|_| event.format());
        eprintln!("{}", line);
    }
}

/// Forwards events to the `log` facade so binaries can pick the backend
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn log(&self, event: &LogEvent) {
        let level = match event.level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        };
        log::log!(target: "scout_session", level, "{}", event.format());
    }
}

/// Memory logger for testing
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    // A poisoned buffer still holds valid events
    fn lock_events(&self) -> std::sync::MutexGuard<'_, Vec<LogEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_events(&self) -> Vec<LogEvent> {
        self.lock_events().clone()
    }

    pub fn clear(&self) {
        self.lock_events().clear();
    }

    pub fn event_count(&self) -> usize {
        self.lock_events().len()
    }

    pub fn get_warnings(&self) -> Vec<LogEvent> {
        self.lock_events()
            .iter()
            .filter(|e| e.is_warning())
            .cloned()
            .collect()
    }

    pub fn has_error_with_code(&self, code: Code) -> bool {
        self.lock_events()
            .iter()
            .any(|e| e.is_error() && e.code == code)
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.lock_events();

        let max_events = config::get_event_buffer_size();
        if events.len() >= max_events {
            let remove_count = events.len() - max_events + 1;
            events.drain(0..remove_count);
        }

        events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_service_filters_below_min_level() {
        let memory = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(memory.clone(), LogLevel::Warning);

        service.log_info("dropped");
        service.log_warning_with_code(codes::validation::UNKNOWN_FIELD, "kept");
        service.log_error(codes::session::EMPTY_EVENT_LIST, "kept too");

        assert_eq!(memory.event_count(), 2);
        assert_eq!(memory.get_warnings().len(), 1);
        assert!(memory.has_error_with_code(codes::session::EMPTY_EVENT_LIST));
    }

    #[test]
    fn test_memory_logger_clear() {
        let memory = MemoryLogger::new();
        memory.log(&LogEvent::info("one"));
        assert_eq!(memory.event_count(), 1);
        memory.clear();
        assert_eq!(memory.event_count(), 0);
    }

    #[test]
    fn test_backend_follows_structured_preference() {
        let mut preferences = LoggingPreferences::default();

        preferences.use_structured_logging = true;
        assert_eq!(
            LoggerBackend::from_preferences(&preferences),
            LoggerBackend::Structured
        );

        preferences.use_structured_logging = false;
        assert_eq!(
            LoggerBackend::from_preferences(&preferences),
            LoggerBackend::Facade
        );
    }

    #[test]
    fn test_both_backends_accept_events() {
        let event = LogEvent::error(codes::output::WRITE_FAILED, "Disk full");
        for backend in [LoggerBackend::Facade, LoggerBackend::Structured] {
            let service = LoggingService::new(backend.logger(), LogLevel::Debug);
            service.log_event(event.clone());
        }
    }
}
