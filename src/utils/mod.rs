mod config;
mod error;
mod logging;

pub use config::LifeConfig;
pub use error::ConfigError;
pub use logging::init_logging;
