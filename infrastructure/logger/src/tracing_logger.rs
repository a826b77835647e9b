use std::fmt::Display;

use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "shopping";

/// Routes use-case logging into `tracing` under the `shopping` target, so
/// `RUST_LOG=shopping=debug` selects it independently of the HTTP layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }

    fn failure(&self, operation: &str, err: &dyn Display) {
        error!(target: TARGET, operation, error = %err, "backend call failed");
    }
}
