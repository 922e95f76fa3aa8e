//! Configuration for [`TestContext`](super::TestContext).

/// How a [`TestContext`](super::TestContext) reports and enforces failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextConfig {
    /// Prefix each failure in the final report with `file:line:` of the calling assertion
    pub show_location: bool,
    /// Panic when a context holding failures is dropped without `finish`/`check`
    pub panic_on_drop: bool,
    /// Emit a `tracing` error event as each failure is recorded
    pub log_failures: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            show_location: true,
            panic_on_drop: true,
            log_failures: true,
        }
    }
}

impl ContextConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether failures carry their call site
    pub fn with_show_location(mut self, show: bool) -> Self {
        self.show_location = show;
        self
    }

    /// Set whether dropping a failed, unfinished context panics
    pub fn with_panic_on_drop(mut self, panic: bool) -> Self {
        self.panic_on_drop = panic;
        self
    }

    /// Set whether failures are logged as they happen
    pub fn with_log_failures(mut self, log: bool) -> Self {
        self.log_failures = log;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContextConfig::default();
        assert!(config.show_location);
        assert!(config.panic_on_drop);
        assert!(config.log_failures);
        assert_eq!(config, ContextConfig::new());
    }

    #[test]
    fn test_builder_chain() {
        let config = ContextConfig::new()
            .with_show_location(false)
            .with_panic_on_drop(false)
            .with_log_failures(false);
        assert!(!config.show_location);
        assert!(!config.panic_on_drop);
        assert!(!config.log_failures);
    }
}
