use std::sync::Arc;

/// A logger type which is called with various information regarding the work done.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Creates a logger which drops all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
