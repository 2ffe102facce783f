pub mod controller;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use controller::ControllerConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{parse_nameserver, CliOverrides, Config};
