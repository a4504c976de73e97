use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Domain logger backed by `tracing`. Every event is emitted under the
/// `store` target so it can be filtered with `RUST_LOG=store=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "store", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "store", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "store", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "store", "{}", message);
    }
}
