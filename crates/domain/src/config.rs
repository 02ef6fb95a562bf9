pub mod answers;
pub mod errors;
pub mod logging;
pub mod root;
pub mod safe_box;

pub use answers::{AnswersConfig, ExactAnswer, PatternAnswer};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use safe_box::SafeBoxConfig;
