pub mod captive;
pub mod errors;
pub mod logging;
pub mod redirect;
pub mod root;
pub mod server;

pub use captive::CaptiveConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use redirect::{RedirectConfig, REDIRECT_ENV_VAR};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
