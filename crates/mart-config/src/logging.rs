/// Logging configuration for the fixture binary: a single global level.
/// `RUST_LOG`, when set, takes precedence over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Global log level filter (e.g. `"info"`, `"debug"`).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_info() {
        assert_eq!(LoggingConfig::default().level, "info");
    }
}
