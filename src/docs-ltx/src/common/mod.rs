pub mod logging;
pub mod max_concurrency;

pub use logging::{DEFAULT_LOG_SETTINGS, setup_logging};
pub use max_concurrency::{MaxConcurrencyError, get_max_concurrency, max_concurrency};
