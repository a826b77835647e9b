/// Logging port injected into every use case.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    /// Reports a failed backend call together with the operation that issued it.
    fn failure(&self, operation: &str, err: &dyn std::fmt::Display) {
        self.error(&format!("{} failed: {}", operation, err));
    }
}
