mod config;
pub use config::LogConfig;
pub use config::LogFormat;

mod error;
pub use error::LogError;

mod init;
pub use init::log_init;
