//! Global logging for the session exchange
//!
//! A process-wide `LoggingService` set once at startup, a thread-local document
//! context that is attached to every event, and the `log_*!` macros.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{
    FacadeLogger, Logger, LoggerBackend, LoggingService, MemoryLogger, StructuredLogger,
};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static DOCUMENT_CONTEXT: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize the global logging system from runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let service = Arc::new(LoggingService::with_config());
    GLOBAL_LOGGER
        .set(service.clone())
        .map_err(|_| "Global logger already initialized")?;

    service.log_success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );

    Ok(())
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// DOCUMENT CONTEXT
// ============================================================================

pub fn set_document_context(path: &Path) {
    DOCUMENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(path.to_path_buf());
    });
}

pub fn clear_document_context() {
    DOCUMENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

pub fn get_document_context() -> Option<PathBuf> {
    DOCUMENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Run `f` with `path` attached to every event it logs
pub fn with_document_context<F, R>(path: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_document_context(path);
    let result = f();
    clear_document_context();
    result
}

// ============================================================================
// MACRO SUPPORT
// ============================================================================

/// Attach context pairs and the current document, then hand to the global logger
pub fn log_with_context(mut event: LogEvent, context: Vec<(&str, String)>) {
    let max_len = config::get_max_log_message_length();
    if event.message.len() > max_len {
        let mut cut = max_len;
        while !event.message.is_char_boundary(cut) {
            cut -= 1;
        }
        event.message.truncate(cut);
    }

    for (key, value) in context {
        event = event.with_context(key, &value);
    }

    if config::include_document_context() {
        if let Some(path) = get_document_context() {
            event = event.with_context("document", &path.display().to_string());
        }
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Error logging that still reaches stderr before initialization
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_error(code, message);
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}
