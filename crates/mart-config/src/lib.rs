pub mod generate;
pub mod logging;

pub use generate::{Bounds, ConfigError, EventKind, GenConfig};
pub use logging::LoggingConfig;
